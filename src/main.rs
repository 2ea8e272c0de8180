mod commands;
mod config;
mod render;
mod state;
mod store;
mod tracker;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::GlobalConfig;
use crate::store::Backend;
use crate::tracker::Tracker;

#[derive(Parser)]
#[command(name = "teamtrack")]
#[command(about = "Track team tasks and meetings backed by a document store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the team roster with pending task counts
    Team,

    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommands),

    /// Manage meetings
    #[command(subcommand)]
    Meeting(MeetingCommands),

    /// List meetings that have not started yet
    Upcoming,

    /// Print calendar events for all tasks and meetings
    Calendar {
        /// Emit JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Create a task assigned to a member
    Add {
        /// Member id (see `teamtrack team`)
        member: u32,
        title: String,

        /// Due date/time (e.g. "2025-03-20T15:00" or "2025-03-20")
        #[arg(long)]
        due: String,

        /// low, medium or high (default medium)
        #[arg(short, long)]
        priority: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Who assigned the task (default "System")
        #[arg(long)]
        assigned_by: Option<String>,
    },
    /// List tasks
    List {
        /// Only tasks assigned to this member
        #[arg(short, long)]
        member: Option<u32>,
    },
    /// Replace a task's status (any string; "pending" counts as open)
    Status { id: String, status: String },
    /// Delete a task
    Rm { id: String },
}

#[derive(Subcommand)]
enum MeetingCommands {
    /// Create a meeting
    Add {
        title: String,

        /// Start date/time (e.g. "2025-03-20T15:00")
        #[arg(long)]
        start: String,

        /// End date/time
        #[arg(long)]
        end: String,

        /// Where the meeting happens (default "Virtual")
        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Attendee identifiers
        #[arg(short, long)]
        attendee: Vec<String>,
    },
    /// List meetings
    List,
    /// Delete a meeting
    Rm { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GlobalConfig::load()?;
    let mut tracker = Tracker::new(Backend::from_config(&config));

    match cli.command {
        Commands::Team => commands::team::run(&mut tracker).await,
        Commands::Task(task) => match task {
            TaskCommands::Add {
                member,
                title,
                due,
                priority,
                description,
                assigned_by,
            } => {
                commands::task::add(
                    &mut tracker,
                    member,
                    title,
                    due,
                    priority,
                    description,
                    assigned_by,
                )
                .await
            }
            TaskCommands::List { member } => commands::task::list(&mut tracker, member).await,
            TaskCommands::Status { id, status } => {
                commands::task::status(&mut tracker, id, status).await
            }
            TaskCommands::Rm { id } => commands::task::rm(&mut tracker, id).await,
        },
        Commands::Meeting(meeting) => match meeting {
            MeetingCommands::Add {
                title,
                start,
                end,
                location,
                description,
                attendee,
            } => {
                commands::meeting::add(
                    &mut tracker,
                    title,
                    start,
                    end,
                    location,
                    description,
                    attendee,
                )
                .await
            }
            MeetingCommands::List => commands::meeting::list(&mut tracker).await,
            MeetingCommands::Rm { id } => commands::meeting::rm(&mut tracker, id).await,
        },
        Commands::Upcoming => commands::upcoming::run(&mut tracker).await,
        Commands::Calendar { json } => commands::calendar::run(&mut tracker, json).await,
    }
}
