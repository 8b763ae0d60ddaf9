//! # App Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     tienda --db ./shop.db list                                         │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TIENDA_DB_PATH=/tmp/shop.db                                        │
//! │     TIENDA_CURRENCY_SYMBOL=US$                                         │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/tienda/tienda.toml (Linux)                               │
//! │     ~/Library/Application Support/com.tienda.inventory/tienda.toml     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     <data dir>/tienda.db, "S/."                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tienda.toml
//! [database]
//! path = "/var/lib/tienda/tienda.db"
//! max_connections = 1
//! connect_timeout_secs = 30
//!
//! [display]
//! currency_symbol = "S/."
//! ```

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tienda_core::DEFAULT_CURRENCY_SYMBOL;
use tienda_db::DbConfig;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

const DB_FILE_NAME: &str = "tienda.db";
const CONFIG_FILE_NAME: &str = "tienda.toml";

// =============================================================================
// Database Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Database file. Defaults to `tienda.db` in the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: None,
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Prefix of every price label.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with overrides read through `lookup` instead of
    /// the process environment.
    pub fn load_with(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Applies `TIENDA_*` overrides looked up through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("TIENDA_DB_PATH") {
            debug!(%path, "Overriding database path from environment");
            self.database.path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("TIENDA_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::InvalidConfig(
                "database.max_connections must be at least 1".into(),
            ));
        }

        if self.display.currency_symbol.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "display.currency_symbol cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Resolves the database file, creating the default data directory if
    /// it will be used.
    pub fn database_path(&self) -> AppResult<PathBuf> {
        if let Some(path) = &self.database.path {
            return Ok(path.clone());
        }

        let dirs = Self::project_dirs().ok_or(AppError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DB_FILE_NAME))
    }

    /// Store settings for [`tienda_db::Database::new`].
    pub fn db_config(&self) -> AppResult<DbConfig> {
        let config = DbConfig::new(self.database_path()?)
            .max_connections(self.database.max_connections)
            .connect_timeout(Duration::from_secs(self.database.connect_timeout_secs));
        Ok(config)
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "tienda", "inventory")
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
