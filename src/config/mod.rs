use crate::core::grid::HourRules;
use crate::core::period::{PeriodCalculator, PeriodOrigin};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::Clock;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Which record store backend is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Flat `records` table in a SQLite file.
    #[default]
    Sqlite,
    /// One JSON document per user in a directory.
    Documents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    pub database: String,
    #[serde(default = "default_documents_dir")]
    pub documents_dir: String,
    /// Shared access password; empty disables the gate.
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_users")]
    pub users: Vec<String>,
    #[serde(default = "default_reviewer")]
    pub reviewer: String,
    #[serde(default = "default_user")]
    pub default_user: String,
    /// A known period start; fixes both the weekday and the biweekly parity.
    #[serde(default = "default_period_anchor")]
    pub period_anchor: NaiveDate,
    #[serde(default = "default_horizon_weeks")]
    pub horizon_weeks: u32,
    #[serde(default)]
    pub period_origin: PeriodOrigin,
    #[serde(default = "default_hours_step")]
    pub hours_step: f64,
    #[serde(default = "default_max_hours")]
    pub max_hours: f64,
    #[serde(default)]
    pub clock: Clock,
}

fn default_documents_dir() -> String {
    Config::config_dir()
        .join("documents")
        .to_string_lossy()
        .to_string()
}
fn default_users() -> Vec<String> {
    ["Stacey", "Aaron", "Daisy", "Cindy", "Alan"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_reviewer() -> String {
    "Alan".to_string()
}
fn default_user() -> String {
    "Stacey".to_string()
}
fn default_period_anchor() -> NaiveDate {
    // Tuesday
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap_or_default()
}
fn default_horizon_weeks() -> u32 {
    20
}
fn default_hours_step() -> f64 {
    0.25
}
fn default_max_hours() -> f64 {
    24.0
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            backend: Backend::default(),
            database: db_path.to_string_lossy().to_string(),
            documents_dir: default_documents_dir(),
            password: String::new(),
            users: default_users(),
            reviewer: default_reviewer(),
            default_user: default_user(),
            period_anchor: default_period_anchor(),
            horizon_weeks: default_horizon_weeks(),
            period_origin: PeriodOrigin::default(),
            hours_step: default_hours_step(),
            max_hours: default_max_hours(),
            clock: Clock::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `--db` / `--docs` overrides; each one also selects its backend.
    pub fn apply_overrides(&mut self, db: Option<&String>, docs: Option<&String>) {
        if let Some(custom_db) = db {
            self.database = custom_db.clone();
            self.backend = Backend::Sqlite;
        }
        if let Some(custom_docs) = docs {
            self.documents_dir = custom_docs.clone();
            self.backend = Backend::Documents;
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.users.is_empty() {
            return Err(AppError::Config("the user roster is empty".into()));
        }
        if !self.users.contains(&self.reviewer) {
            return Err(AppError::Config(format!(
                "reviewer '{}' is not in the user roster",
                self.reviewer
            )));
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.hours_step) || !positive(self.max_hours) {
            return Err(AppError::Config(
                "hours_step and max_hours must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn is_known_user(&self, name: &str) -> bool {
        self.users.iter().any(|u| u == name)
    }

    pub fn hour_rules(&self) -> HourRules {
        HourRules {
            max_hours: self.max_hours,
            step: self.hours_step,
        }
    }

    pub fn period_calculator(&self) -> PeriodCalculator {
        PeriodCalculator::new(self.period_anchor, self.horizon_weeks, self.period_origin)
    }

    pub fn documents_path(&self) -> PathBuf {
        expand_tilde(&self.documents_dir)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Initialize the configuration directory and file.
    /// Returns the configuration the store should be created from.
    pub fn init_all(
        custom_db: Option<&String>,
        custom_docs: Option<&String>,
        is_test: bool,
    ) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Config::default()
        };

        // Relative names are placed inside the config directory
        let resolve = |name: &String| {
            let p = std::path::Path::new(name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
            .to_string_lossy()
            .to_string()
        };
        let db = custom_db.map(resolve);
        let docs = custom_docs.map(resolve);
        config.apply_overrides(db.as_ref(), docs.as_ref());

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
