//! Diagnostic logging setup.
//!
//! Events from the whole crate go to the configured log file (no ANSI
//! colours). `RUST_LOG` overrides the configured level. User-facing output
//! does not go through here: see `ui::messages`.

use crate::config::Config;
use crate::errors::AppResult;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `verbose` forces the `debug` level.
///
/// Calling it twice is harmless: the second subscriber is not installed.
pub fn init(cfg: &Config, verbose: bool) -> AppResult<()> {
    let path = cfg.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
