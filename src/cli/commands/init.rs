use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (an existing one is kept)
///  - the sheets directory
pub fn handle() -> AppResult<()> {
    header("Initializing rtimesheet…");

    let cfg = Config::init_all()?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("📁 Sheets dir  : {}", cfg.sheets_path().display());
    println!("📝 Log file    : {}", cfg.log_path().display());

    tracing::info!(config = %Config::config_file().display(), "initialized");
    success("rtimesheet initialization completed!");
    Ok(())
}
