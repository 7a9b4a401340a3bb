use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted "upcoming" window, in days (about ten years).
pub const MAX_UPCOMING_DAYS: i64 = 3650;

pub const DEFAULT_MEMBER_IMAGE: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Window of the dashboard's "upcoming" list, in days.
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,
    /// Raise a maintenance alert when equipment is put into maintenance.
    #[serde(default = "default_maintenance_alerts")]
    pub maintenance_alerts: bool,
    #[serde(default = "default_member_image")]
    pub default_member_image: String,
    /// chrono format used for event days.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_upcoming_days() -> i64 {
    7
}
fn default_maintenance_alerts() -> bool {
    true
}
fn default_member_image() -> String {
    DEFAULT_MEMBER_IMAGE.to_string()
}
fn default_date_format() -> String {
    "%A, %B %-d".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            upcoming_days: default_upcoming_days(),
            maintenance_alerts: default_maintenance_alerts(),
            default_member_image: default_member_image(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the configuration directory.
    ///
    /// `SOUNDDESK_HOME` wins when set; otherwise `%APPDATA%\sounddesk` on
    /// Windows and `~/.sounddesk` elsewhere.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("SOUNDDESK_HOME") {
            return expand_tilde(&dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("sounddesk")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".sounddesk")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sounddesk.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("sounddesk.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Fields missing from an older file take their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            if !(1..=MAX_UPCOMING_DAYS).contains(&cfg.upcoming_days) {
                return Err(AppError::Config(format!(
                    "upcoming_days must be between 1 and {} (got {})",
                    MAX_UPCOMING_DAYS, cfg.upcoming_days
                )));
            }
            log::debug!("loaded configuration from {}", path.display());
            Ok(cfg)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the database path for `init`: a relative custom name lands in
    /// the config directory.
    pub fn resolve_database(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        }
    }

    /// Create the config directory and write the config file pointing at
    /// `database`. With `is_test` nothing is written.
    pub fn init_all(database: &Path, is_test: bool) -> AppResult<Self> {
        let config = Config {
            database: database.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        if let Some(parent) = database.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
