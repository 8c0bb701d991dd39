//! Detect employees that are already kept in another user's timesheet for
//! the same object, department and month.

use crate::errors::AppResult;
use crate::models::timesheet::Timesheet;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEmployee {
    pub fio: String,
    pub tbn: String,
    /// Owner of the other sheet.
    pub user: String,
    /// Where the other sheet was loaded from.
    pub source: PathBuf,
}

/// Compare `sheet` with every sheet in `others`.
///
/// Only sheets with the same slot key (object id, address, department,
/// period) and a *different* user are considered. Rows with a personnel
/// number match on (fio, tbn); rows without one match on fio alone.
pub fn find_duplicate_employees(
    sheet: &Timesheet,
    others: &[(PathBuf, Timesheet)],
) -> Vec<DuplicateEmployee> {
    let key = sheet.header.slot_key();
    let user = sheet.header.user.trim();

    let mut with_tbn: HashSet<(String, String)> = HashSet::new();
    let mut without_tbn: HashSet<String> = HashSet::new();

    for r in &sheet.rows {
        let fio = r.fio.trim().to_string();
        let tbn = r.tbn_str().trim().to_string();
        if fio.is_empty() && tbn.is_empty() {
            continue;
        }
        if tbn.is_empty() {
            without_tbn.insert(fio);
        } else {
            with_tbn.insert((fio, tbn));
        }
    }

    let mut out = Vec::new();

    for (path, other) in others {
        if other.header.slot_key() != key || other.header.user.trim() == user {
            continue;
        }

        for r in &other.rows {
            let fio = r.fio.trim().to_string();
            let tbn = r.tbn_str().trim().to_string();

            let hit = with_tbn.contains(&(fio.clone(), tbn.clone())) || without_tbn.contains(&fio);
            if hit {
                out.push(DuplicateEmployee {
                    fio,
                    tbn,
                    user: other.header.user.clone(),
                    source: path.clone(),
                });
            }
        }
    }

    tracing::debug!(found = out.len(), "duplicate check done");
    out
}

/// Load every sheet file (`.json`, `.yaml`, `.yml`) directly inside `dir`,
/// sorted by path. A missing directory holds no sheets; unreadable files are
/// logged and skipped.
pub fn load_sheets_in(dir: &Path) -> AppResult<Vec<(PathBuf, Timesheet)>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && matches!(
                    p.extension()
                        .and_then(|e| e.to_str())
                        .map(|e| e.to_ascii_lowercase())
                        .as_deref(),
                    Some("json" | "yaml" | "yml")
                )
        })
        .collect();
    paths.sort();

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        match Timesheet::load(&path) {
            Ok(sheet) => out.push((path, sheet)),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "not a timesheet, skipped"),
        }
    }
    Ok(out)
}
