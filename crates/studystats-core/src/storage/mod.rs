mod config;

pub use config::{ApiConfig, Config, LoggingConfig, PromptConfig, TableConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the StudyStats data directory, creating it if needed.
///
/// `STUDYSTATS_HOME` wins when set. Otherwise `~/.config/studystats[-dev]/`,
/// where STUDYSTATS_ENV=dev selects the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("STUDYSTATS_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STUDYSTATS_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("studystats-dev")
            } else {
                base_dir.join("studystats")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
