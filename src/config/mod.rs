use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory where `new` puts sheets when no `--file` is given.
    #[serde(default = "default_sheets_dir")]
    pub sheets_dir: String,
    /// Owner written into new sheet headers.
    #[serde(default = "default_user")]
    pub default_user: String,
    #[serde(default)]
    pub default_department: String,
    /// Object catalogue CSV checked by `new`; blank disables the check.
    #[serde(default)]
    pub objects_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_highlight_weekends")]
    pub highlight_weekends: bool,
    /// Minimum similarity (0..1) for fuzzy name matches on grid import.
    #[serde(default = "default_fio_match_threshold")]
    pub fio_match_threshold: f64,
}

fn default_sheets_dir() -> String {
    Config::config_dir()
        .join("sheets")
        .to_string_lossy()
        .to_string()
}
fn default_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> String {
    Config::config_dir()
        .join("rtimesheet.log")
        .to_string_lossy()
        .to_string()
}
fn default_highlight_weekends() -> bool {
    true
}
fn default_fio_match_threshold() -> f64 {
    0.8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheets_dir: default_sheets_dir(),
            default_user: default_user(),
            default_department: String::new(),
            objects_file: String::new(),
            log_level: default_log_level(),
            log_file: default_log_file(),
            highlight_weekends: default_highlight_weekends(),
            fio_match_threshold: default_fio_match_threshold(),
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

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn sheets_path(&self) -> PathBuf {
        expand_tilde(&self.sheets_dir)
    }

    /// Load configuration from file, or return defaults if not found.
    /// Keys missing from the file take their default value.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.fio_match_threshold) {
            return Err(AppError::Config(format!(
                "fio_match_threshold must be within 0..1, got {}",
                self.fio_match_threshold
            )));
        }
        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize configuration file and sheets directory.
    /// An existing config file is kept as is.
    pub fn init_all() -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let cfg = if Self::config_file().exists() {
            Self::load()?
        } else {
            let cfg = Self::default();
            cfg.save()?;
            cfg
        };

        fs::create_dir_all(cfg.sheets_path())?;
        Ok(cfg)
    }
}
