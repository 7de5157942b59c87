//! JSON configuration for the export/upload collaborators.
//!
//! Only the peripheral pieces are configurable: the core engine has no
//! knobs. A missing config file is not an error; the defaults are used and
//! a warning is logged so the fallback is visible.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Settings for the S3 upload target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsSettings {
    pub s3_bucket: String,
    pub region: String,
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            s3_bucket: "cine-match-exports".to_string(),
            region: "us-east-1".to_string(),
        }
    }
}

/// Top-level application configuration, loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub aws: AwsSettings,
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file falls back to defaults with a warning; a file that
    /// exists but does not parse is a hard error, since silently ignoring
    /// a broken config would hide misdirected uploads.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Config file {} not found, using default configuration",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).context(format!("Failed to read config {}", path.display()));
            }
        };

        serde_json::from_str(&contents)
            .context(format!("Failed to parse config {}", path.display()))
    }
}
