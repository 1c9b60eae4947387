use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};

use crate::content::application::content_store::PersistenceMode;

/// Runtime configuration, read once at startup from the environment (after
/// the `.env.{RUST_ENV}` / `.env` layering has been applied).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub mode: PersistenceMode,
    pub save_timeout: Duration,
    /// When set, the document store is the remote HTTP gateway at this base
    /// URL instead of the local data file.
    pub remote_base_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse::<u16>()
            .context("PORT is not a valid port number")?;
        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        let mode_raw = env::var("PERSISTENCE_MODE").unwrap_or_else(|_| "server-first".to_string());
        let mode = match PersistenceMode::parse(&mode_raw) {
            Some(mode) => mode,
            None => bail!(
                "PERSISTENCE_MODE must be 'server-first' or 'local-first', got '{mode_raw}'"
            ),
        };

        let save_timeout_secs = env::var("SAVE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .context("SAVE_TIMEOUT_SECS is not a valid number of seconds")?;

        let remote_base_url = env::var("REMOTE_BASE_URL").ok().filter(|s| !s.is_empty());

        Ok(Self {
            host,
            port,
            data_dir,
            mode,
            save_timeout: Duration::from_secs(save_timeout_secs),
            remote_base_url,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
