// src/settings.rs
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Runtime settings, layered: built-in defaults, then an optional
/// `finagent.toml` (working directory first, then the user config dir),
/// then `FINAGENT_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Origin of the analysis service, without a trailing slash.
    pub api_url: String,
    /// Analysis runs fan out to LLM agents and take minutes, not seconds.
    pub request_timeout_secs: u64,
    pub health_poll_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("request_timeout_secs", 600i64)?
            .set_default("health_poll_secs", 5i64)?;

        for path in Self::config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix("FINAGENT"))
            .build()?
            .try_deserialize()
    }

    fn config_files() -> Vec<PathBuf> {
        let mut files = vec![PathBuf::from("finagent.toml")];
        if let Some(dir) = dirs::config_dir() {
            files.push(dir.join("finagent").join("finagent.toml"));
        }
        files
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn health_poll(&self) -> Duration {
        Duration::from_secs(self.health_poll_secs.max(1))
    }
}
