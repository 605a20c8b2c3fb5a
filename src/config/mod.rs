use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Csv,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub storage: StorageBackend,
    #[serde(default = "default_csv_file")]
    pub csv_file: String,
}

fn default_csv_file() -> String {
    Config::config_dir()
        .join("stempeluhr.csv")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            storage: StorageBackend::Sqlite,
            csv_file: default_csv_file(),
        }
    }
}

impl Config {
    /// Standard configuration directory in the user's home.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stempeluhr")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stempeluhr.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("stempeluhr.sqlite")
    }

    /// Load configuration from file, or fall back to defaults if absent.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize configuration directory, config file and empty database.
    pub fn init_all() -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Self::default();

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(format!("failed to serialize config: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        let db_path = PathBuf::from(&config.database);
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}
