//! The fixed team roster.
//!
//! Members are compile-time data: no creation or deletion at runtime.
//! Tasks reference members by id, and the reference is never validated at
//! write time, so lookups return `Option` and callers decide how to
//! handle a dangling id.

use serde::Serialize;

/// A member's role on the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Leader,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Leader => "Team Leader",
            Role::Member => "Team Member",
        }
    }
}

/// A team member record.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: Role,
    pub major: &'static str,
    /// Display color as an RGB hex string (e.g. "#6a11cb")
    pub color: &'static str,
}

pub const ROSTER: [TeamMember; 4] = [
    TeamMember {
        id: 1,
        name: "Alyssa Calvillo",
        role: Role::Member,
        major: "Computer Science",
        color: "#00c6ff",
    },
    TeamMember {
        id: 2,
        name: "Deepa Kale",
        role: Role::Member,
        major: "Computer Science",
        color: "#ff7e5f",
    },
    TeamMember {
        id: 3,
        name: "Wesley Spangler",
        role: Role::Leader,
        major: "Computer Science",
        color: "#6a11cb",
    },
    TeamMember {
        id: 4,
        name: "William Paar",
        role: Role::Member,
        major: "Computer Science",
        color: "#ff6a00",
    },
];

/// Look up a member by id. `None` means the id does not resolve, which is
/// legal: tasks may carry a member id no longer (or never) on the roster.
pub fn find_member(id: u32) -> Option<&'static TeamMember> {
    ROSTER.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_member() {
        let member = find_member(3).unwrap();
        assert_eq!(member.name, "Wesley Spangler");
        assert_eq!(member.role, Role::Leader);
        assert_eq!(member.color, "#6a11cb");
    }

    #[test]
    fn test_find_member_unresolved() {
        assert!(find_member(99).is_none());
    }

    #[test]
    fn test_roster_ids_are_unique() {
        for member in &ROSTER {
            assert_eq!(ROSTER.iter().filter(|m| m.id == member.id).count(), 1);
        }
    }
}
