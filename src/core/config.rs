//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the catalog database
pub const DATABASE_FILE: &str = "coffee.sqlite";

/// Coffee catalog configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database file to open instead of the default location
    pub database: Option<PathBuf>,

    /// Insert the demonstration rows into a fresh catalog
    pub seed_demo_data: Option<bool>,

    /// Default output format for `coffee list`
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/coffee-catalog/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Environment variables
        config.merge_env(|key| std::env::var(key).ok());

        config
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "coffee-catalog")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn read_file(path: &Path) -> Option<Config> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable config: {e}");
                None
            }
        }
    }

    /// Apply `COFFEE_DB` and `COFFEE_SEED`
    fn merge_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(db) = var("COFFEE_DB").filter(|v| !v.is_empty()) {
            self.database = Some(PathBuf::from(db));
        }
        if let Some(seed) = var("COFFEE_SEED") {
            match seed.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.seed_demo_data = Some(true),
                "0" | "false" | "no" | "off" => self.seed_demo_data = Some(false),
                other => tracing::warn!("ignoring COFFEE_SEED={other}"),
            }
        }
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.database.is_some() {
            self.database = other.database;
        }
        if other.seed_demo_data.is_some() {
            self.seed_demo_data = other.seed_demo_data;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Whether a fresh catalog gets demonstration rows
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data.unwrap_or(true)
    }

    /// Resolve the database file: explicit override, then config, then the
    /// `data/` directory beside the running executable
    pub fn database_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.database.clone())
            .unwrap_or_else(default_database_path)
    }
}

/// `<executable dir>/data/coffee.sqlite`, or `./data/coffee.sqlite` when the
/// executable location is unknown
pub fn default_database_path() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join("data").join(DATABASE_FILE)
}
