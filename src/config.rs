//! Global configuration.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_store() -> String {
    "memory".to_string()
}

/// Global configuration at ~/.config/teamtrack/config.toml
///
/// Selects the store backend and carries the opaque params forwarded to
/// the store binary (credentials live with the binary, not here). A
/// missing config file means the in-memory backend.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    /// "memory", or a store name resolving to a `teamtrack-store-<name>`
    /// binary on PATH
    #[serde(default = "default_store")]
    pub store: String,

    /// Store-specific parameters, forwarded verbatim
    #[serde(default)]
    pub params: HashMap<String, toml::Value>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            store: default_store(),
            params: HashMap::new(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("teamtrack");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<GlobalConfig> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// The params table as a JSON object, ready to splice into a store
    /// request.
    pub fn params_json(&self) -> serde_json::Value {
        let json_map: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| {
                (
                    k.clone(),
                    serde_json::to_value(v).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        serde_json::Value::Object(json_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_store_defaults_to_memory() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.store, "memory");
        assert!(config.params.is_empty());
    }

    #[test]
    fn test_params_forwarded_as_json_object() {
        let config: GlobalConfig = toml::from_str(
            "store = \"firedoc\"\n\n[params]\nproject = \"yap\"\nregion = \"us-east1\"\n",
        )
        .unwrap();

        assert_eq!(config.store, "firedoc");
        let params = config.params_json();
        assert_eq!(params["project"], "yap");
        assert_eq!(params["region"], "us-east1");
    }
}
