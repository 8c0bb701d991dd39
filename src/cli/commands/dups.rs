use crate::cli::commands::{open_sheet, other_sheets, print_duplicates, sheet_path};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::duplicates::find_duplicate_employees;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use crate::ui::messages::{success, warning};

/// Report employees of `--file` that also appear in other users' sheets for
/// the same slot: the `--against` files, or the whole sheets directory.
/// Finding any is an error so scripts can rely on the exit code.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dups { file, against } = cmd {
        let (path, sheet) = open_sheet(cfg, file)?;

        let others = if against.is_empty() {
            other_sheets(cfg, &path)?
        } else {
            let mut others = Vec::with_capacity(against.len());
            for f in against {
                let other_path = sheet_path(cfg, f);
                if other_path == path {
                    continue;
                }
                let other = Timesheet::load(&other_path)?;
                others.push((other_path, other));
            }
            others
        };

        let dups = find_duplicate_employees(&sheet, &others);
        if dups.is_empty() {
            success("No duplicated employees found.");
            return Ok(());
        }

        warning(format!("{} employee(s) already kept by other users:", dups.len()));
        print_duplicates(&dups);

        tracing::warn!(count = dups.len(), sheet = %path.display(), "duplicated employees");
        return Err(AppError::DuplicatesFound(dups.len()));
    }

    Ok(())
}
