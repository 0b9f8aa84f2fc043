//! Configuration loading for scriptsight.
//! Reads scriptsight.toml from the current directory or the path in the
//! SCRIPTSIGHT_CONFIG env var; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Directory holding `config.json` and the `model` record.
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: String,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_artifact_dir() -> String {
    "artifacts".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            artifact_dir: default_artifact_dir(),
        }
    }
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("SCRIPTSIGHT_CONFIG")
            .unwrap_or_else(|_| "scriptsight.toml".to_string());
        Self::from_path(path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
