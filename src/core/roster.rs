//! Staff roster import ("штатное расписание").
//!
//! The roster is a CSV file saved from the HR spreadsheet. Columns are found
//! by a case-insensitive substring of their header, so extra columns and a
//! different column order are fine.

use crate::core::fio::normalize_fio;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use std::path::Path;

const COL_TBN: &[&str] = &["табельный номер", "personnel"];
const COL_FIO: &[&str] = &["сотрудник", "employee"];
const COL_POSITION: &[&str] = &["должность", "position"];
const COL_DEPARTMENT: &[&str] = &["подразделение", "department"];
const COL_DISMISSAL: &[&str] = &["увольн", "dismiss"];

/// Index of the first header containing any of `names` (headers are
/// expected lowercase).
pub(crate) fn find_col(headers: &[String], names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.contains(n)))
}

pub(crate) fn field(record: &csv::StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Trimmed, lowercase header names with a leading BOM removed.
pub(crate) fn lowercase_headers(record: &csv::StringRecord) -> Vec<String> {
    record
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_lowercase())
        .collect()
}

/// Read all roster entries from `path`.
///
/// The personnel-number and employee columns are mandatory. Rows with
/// neither a name nor a number are skipped; a non-empty dismissal cell
/// marks the employee as fired.
pub fn load_roster(path: &Path) -> AppResult<Vec<Employee>> {
    if !path.exists() {
        return Err(AppError::Roster(format!("file not found: {}", path.display())));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = lowercase_headers(rdr.headers()?);

    let idx_tbn = find_col(&headers, COL_TBN);
    let idx_fio = find_col(&headers, COL_FIO);
    let idx_pos = find_col(&headers, COL_POSITION);
    let idx_dep = find_col(&headers, COL_DEPARTMENT);
    let idx_dismissal = find_col(&headers, COL_DISMISSAL);

    if idx_tbn.is_none() || idx_fio.is_none() {
        return Err(AppError::Roster(
            "required columns 'Табельный номер' and/or 'Сотрудник' not found".into(),
        ));
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;

        let fio = field(&rec, idx_fio);
        let tbn = field(&rec, idx_tbn);
        if fio.is_empty() && tbn.is_empty() {
            continue;
        }

        out.push(Employee {
            tbn,
            fio,
            position: field(&rec, idx_pos),
            department: field(&rec, idx_dep),
            fired: !field(&rec, idx_dismissal).is_empty(),
        });
    }

    tracing::info!(path = %path.display(), employees = out.len(), "roster loaded");
    Ok(out)
}

/// Sorted, de-duplicated department names of active employees.
pub fn departments(roster: &[Employee]) -> Vec<String> {
    let mut deps: Vec<String> = roster
        .iter()
        .filter(|e| e.is_active())
        .map(|e| e.department.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect();
    deps.sort();
    deps.dedup();
    deps
}

/// Active employee of `department` whose name matches `fio` after
/// normalisation.
pub fn find_in_department<'a>(roster: &'a [Employee], fio: &str, department: &str) -> Option<&'a Employee> {
    let wanted = normalize_fio(fio);
    let department = department.trim();
    roster.iter().find(|e| {
        e.is_active() && e.department.trim() == department && normalize_fio(&e.fio) == wanted
    })
}
