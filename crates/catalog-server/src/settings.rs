//! Server settings
//!
//! Layered: built-in defaults, then an optional TOML file, then `CATALOG_*`
//! environment variables (`__` separates nested keys, e.g.
//! `CATALOG_SCORING__RATING_WEIGHT=10`).

use anyhow::{Context, Result};
use catalog_core::ScoringConfig;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_address: String,
    pub data_dir: PathBuf,
    /// Defaults to `<data_dir>/catalog.db`
    pub database_path: Option<String>,
    pub storage: StorageBackend,
    pub seed_on_startup: bool,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl Settings {
    /// Load from the file named by `CATALOG_CONFIG`, or `catalog.toml`.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("CATALOG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        Self::load_with(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("CATALOG")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(path: &str, env: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("bind_address", "0.0.0.0:8000")?
            .set_default("data_dir", "./data")?
            .set_default("storage", "sqlite")?
            .set_default("seed_on_startup", true)?
            .add_source(File::with_name(path).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?
            .try_deserialize()
            .context("Invalid configuration")?;

        settings.scoring.validate()?;

        Ok(settings)
    }

    pub fn database_path(&self) -> String {
        self.database_path.clone().unwrap_or_else(|| {
            self.data_dir
                .join("catalog.db")
                .to_string_lossy()
                .to_string()
        })
    }
}
