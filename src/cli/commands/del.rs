use crate::cli::commands::open_sheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sheet::SheetLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { file, fio, yes } = cmd {
        let (path, mut sheet) = open_sheet(cfg, file)?;

        let rows = SheetLogic::rows_named(&sheet, fio);
        if rows.is_empty() {
            return Err(AppError::EmployeeNotFound(fio.clone()));
        }

        let prompt = format!(
            "Remove {} row(s) of '{}' from the sheet? This action is irreversible.",
            rows.len(),
            fio.trim()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = SheetLogic::remove_rows(&mut sheet, &rows);
        sheet.save(&path)?;

        tracing::info!(fio = %fio.trim(), removed, "rows removed");
        success(format!("{removed} row(s) of '{}' removed.", fio.trim()));
    }

    Ok(())
}
