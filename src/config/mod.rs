use crate::errors::{AppError, AppResult};
use crate::models::schedule::{HolidaySet, WorkdaySchedule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Expected minutes Mon-Fri.
    #[serde(default = "default_weekday_minutes")]
    pub weekday_minutes: i64,

    /// Expected minutes on Saturday when the extended week is requested.
    #[serde(default = "default_saturday_minutes")]
    pub saturday_minutes: i64,

    /// Dates with zero expected duration (YYYY-MM-DD).
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,

    /// TTL for the bulk-read cache used during report generation.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_weekday_minutes() -> i64 {
    480
}
fn default_saturday_minutes() -> i64 {
    240
}
fn default_cache_ttl_secs() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            weekday_minutes: default_weekday_minutes(),
            saturday_minutes: default_saturday_minutes(),
            holidays: Vec::new(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pontolog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pontolog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pontolog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("pontolog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    /// The schedule used for an accounting call: the extended week counts
    /// Saturday as a working half day, the standard week does not.
    pub fn schedule(&self, extended_week: bool) -> WorkdaySchedule {
        if extended_week {
            WorkdaySchedule::extended(self.weekday_minutes, self.saturday_minutes)
        } else {
            WorkdaySchedule::standard(self.weekday_minutes)
        }
    }

    pub fn holiday_set(&self) -> HolidaySet {
        HolidaySet::from_dates(&self.holidays)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode so test runs never touch
        // the user's real configuration)
        if !is_test {
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
