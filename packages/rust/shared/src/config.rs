//! Application configuration for IndustryKB.
//!
//! User config lives at `~/.industrykb/industrykb.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IndustryKbError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "industrykb.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".industrykb";

// ---------------------------------------------------------------------------
// Config structs (matching industrykb.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Path to the content-index database produced by the website indexer.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Directory where the knowledge base artifacts are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_db_path() -> String {
    "website_index.db".into()
}
fn default_output_dir() -> String {
    ".".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.industrykb/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| IndustryKbError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.industrykb/industrykb.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| IndustryKbError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        IndustryKbError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| IndustryKbError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| IndustryKbError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| IndustryKbError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
