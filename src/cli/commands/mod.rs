pub mod add;
pub mod config;
pub mod del;
pub mod dups;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod new;
pub mod parse;
pub mod period;
pub mod set;
pub mod totals;

use crate::config::Config;
use crate::core::duplicates::{DuplicateEmployee, find_duplicate_employees, load_sheets_in};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use crate::ui::messages::warning;
use crate::utils::path::{in_dir, resolve};
use crate::utils::table::{Column, Table};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a sheet argument: absolute or existing paths are used as given,
/// bare names are looked up in the sheets directory.
pub(crate) fn sheet_path(cfg: &Config, file: &str) -> PathBuf {
    let path = resolve(file);
    if path.is_absolute() || path.exists() {
        path
    } else {
        in_dir(&cfg.sheets_dir, file.trim())
    }
}

/// Resolve and load a sheet; returns the path it was read from.
pub(crate) fn open_sheet(cfg: &Config, file: &str) -> AppResult<(PathBuf, Timesheet)> {
    let path = sheet_path(cfg, file);
    let sheet = Timesheet::load(&path)?;
    Ok((path, sheet))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Sheets of the sheets directory other than the one at `path`.
pub(crate) fn other_sheets(cfg: &Config, path: &Path) -> AppResult<Vec<(PathBuf, Timesheet)>> {
    Ok(load_sheets_in(&cfg.sheets_path())?
        .into_iter()
        .filter(|(p, _)| !same_file(p, path))
        .collect())
}

pub(crate) fn print_duplicates(dups: &[DuplicateEmployee]) {
    let mut table = Table::new(vec![
        Column::left("fio"),
        Column::left("tbn"),
        Column::left("user"),
        Column::left("sheet"),
    ]);
    for d in dups {
        table.add_row(vec![
            d.fio.clone(),
            d.tbn.clone(),
            d.user.clone(),
            d.source.display().to_string(),
        ]);
    }
    print!("{}", table.render());
}

/// Refuse to save `sheet` to `path` while other users' sheets for the same
/// slot list any of its employees, unless `allow_shared` is set.
pub(crate) fn check_shared_employees(
    cfg: &Config,
    path: &Path,
    sheet: &Timesheet,
    allow_shared: bool,
) -> AppResult<()> {
    let others = other_sheets(cfg, path)?;
    let dups = find_duplicate_employees(sheet, &others);
    if dups.is_empty() {
        return Ok(());
    }

    warning(format!("{} employee(s) already kept by other users:", dups.len()));
    print_duplicates(&dups);
    tracing::warn!(count = dups.len(), sheet = %path.display(), allow_shared, "shared employees on save");

    if allow_shared {
        Ok(())
    } else {
        Err(AppError::DuplicatesFound(dups.len()))
    }
}
