//! Remote store subprocess client.
//!
//! Talks to an external store binary (e.g. `teamtrack-store-firedoc`)
//! using JSON over stdin/stdout, one request and one response per spawn.
//! The protocol is language-agnostic: any executable that speaks it can
//! back the tracker. Store binaries manage their own credentials; the
//! tracker only forwards the opaque params from its config.
//!
//! There is no retry and no timeout: every failure propagates to the
//! caller unchanged, and a hung store binary leaves the call pending.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use teamtrack_core::protocol::{Collection, Command, CreatedDocument, Document, Request, Response};
use teamtrack_core::{TrackerError, TrackerResult};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub struct RemoteStore {
    name: String,
    params: Value,
}

impl RemoteStore {
    pub fn new(name: &str, params: Value) -> RemoteStore {
        RemoteStore {
            name: name.to_string(),
            params,
        }
    }

    fn binary_path(&self) -> TrackerResult<std::path::PathBuf> {
        let binary_name = format!("teamtrack-store-{}", self.name);
        which::which(&binary_name)
            .map_err(|_| TrackerError::StoreNotInstalled(binary_name))
    }

    /// Create a document; returns the store-assigned id.
    pub async fn create(&self, collection: Collection, fields: Value) -> TrackerResult<String> {
        let mut params = self.params.clone();
        params["collection"] = serde_json::to_value(collection).unwrap_or(Value::Null);
        params["fields"] = fields;

        let binary = self.binary_path()?;
        self.call::<CreatedDocument>(&binary, Command::CreateDocument, params)
            .await
            .map(|created| created.id)
            .map_err(|e| TrackerError::RemoteWrite(format!("{e:#}")))
    }

    /// List every document in a collection.
    pub async fn list(&self, collection: Collection) -> TrackerResult<Vec<Document>> {
        let mut params = self.params.clone();
        params["collection"] = serde_json::to_value(collection).unwrap_or(Value::Null);

        let binary = self.binary_path()?;
        self.call::<Vec<Document>>(&binary, Command::ListDocuments, params)
            .await
            .map_err(|e| TrackerError::RemoteRead(format!("{e:#}")))
    }

    /// Merge a partial field map into a document.
    pub async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Value,
    ) -> TrackerResult<()> {
        let mut params = self.params.clone();
        params["collection"] = serde_json::to_value(collection).unwrap_or(Value::Null);
        params["document_id"] = Value::String(id.to_string());
        params["fields"] = fields;

        let binary = self.binary_path()?;
        self.call::<()>(&binary, Command::UpdateDocument, params)
            .await
            .map_err(|e| TrackerError::RemoteWrite(format!("{e:#}")))
    }

    /// Delete a document by id.
    pub async fn delete(&self, collection: Collection, id: &str) -> TrackerResult<()> {
        let mut params = self.params.clone();
        params["collection"] = serde_json::to_value(collection).unwrap_or(Value::Null);
        params["document_id"] = Value::String(id.to_string());

        let binary = self.binary_path()?;
        self.call::<()>(&binary, Command::DeleteDocument, params)
            .await
            .map_err(|e| TrackerError::RemoteWrite(format!("{e:#}")))
    }

    /// Call a store command and return the result.
    async fn call<R: DeserializeOwned>(
        &self,
        binary_path: &std::path::Path,
        command: Command,
        params: Value,
    ) -> Result<R> {
        let request = Request { command, params };

        let request_json =
            serde_json::to_string(&request).context("Failed to serialize store request")?;

        // Spawn the store binary
        let mut child = tokio::process::Command::new(binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit()) // Let store errors show in terminal
            .spawn()
            .with_context(|| format!("Failed to spawn store binary: {}", binary_path.display()))?;

        // Write request to stdin
        {
            let mut stdin = child
                .stdin
                .take()
                .context("Failed to get store stdin handle")?;
            stdin
                .write_all(request_json.as_bytes())
                .await
                .context("Failed to write to store stdin")?;
            stdin
                .write_all(b"\n")
                .await
                .context("Failed to write newline to store stdin")?;
            stdin.flush().await.context("Failed to flush store stdin")?;
            // Drop stdin to signal EOF
        }

        // Read response from stdout
        let stdout = child
            .stdout
            .take()
            .context("Failed to get store stdout handle")?;
        let mut reader = BufReader::new(stdout);
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .await
            .context("Failed to read store response")?;

        if line.is_empty() {
            anyhow::bail!("Store returned no response");
        }

        // Wait for process to exit
        let status = child.wait().await.context("Failed to wait for store")?;
        if !status.success() {
            anyhow::bail!(
                "Store exited with status: {}",
                status.code().unwrap_or(-1)
            );
        }

        // Parse response
        let response: Response<R> = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse store response: {line}"))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(anyhow::anyhow!("{}", error)),
        }
    }
}
