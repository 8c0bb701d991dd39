//! Attendance grid import from CSV.
//!
//! Expected header: a name column (`fio` / `ФИО`), an optional personnel
//! number column (`tbn` / `Таб.№`) and day columns named `1` … `31`.
//! Rows are matched to the sheet by number, then by normalised name, then by
//! fuzzy name match; unmatched rows are appended. The closing total line of
//! a CSV export is skipped, so exported files can be imported back.

use crate::core::fio::{best_fio_match_with_score, normalize_fio};
use crate::core::totals::is_summary_label;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{AttendanceRow, DAY_SLOTS, DayCell, Timesheet, pad_cells};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub matched: usize,
    pub fuzzy_matched: usize,
    pub added: usize,
}

struct GridLayout {
    fio: usize,
    tbn: Option<usize>,
    /// (column index, 0-based day slot)
    days: Vec<(usize, usize)>,
}

fn layout(headers: &csv::StringRecord) -> AppResult<GridLayout> {
    let mut fio = None;
    let mut tbn = None;
    let mut days = Vec::new();

    for (i, h) in headers.iter().enumerate() {
        let h = h.trim().trim_start_matches('\u{feff}').to_lowercase();

        if let Ok(day) = h.parse::<usize>() {
            if (1..=DAY_SLOTS).contains(&day) {
                days.push((i, day - 1));
            }
            continue;
        }

        if fio.is_none() && (h == "fio" || h.contains("фио") || h.contains("сотрудник")) {
            fio = Some(i);
        } else if tbn.is_none() && (h == "tbn" || h.starts_with("таб")) {
            tbn = Some(i);
        }
    }

    let fio = fio.ok_or_else(|| AppError::Import("name column (fio / ФИО) not found".into()))?;
    if days.is_empty() {
        return Err(AppError::Import("no day columns (1..31) found".into()));
    }

    Ok(GridLayout { fio, tbn, days })
}

fn locate(sheet: &Timesheet, fio: &str, tbn: Option<&str>, threshold: f64) -> Option<(usize, bool)> {
    if let Some(t) = tbn
        && let Some(i) = sheet.rows.iter().position(|r| r.tbn.as_deref() == Some(t))
    {
        return Some((i, false));
    }

    let nf = normalize_fio(fio);
    if let Some(i) = sheet.rows.iter().position(|r| normalize_fio(&r.fio) == nf) {
        return Some((i, false));
    }

    let names: Vec<&str> = sheet.rows.iter().map(|r| r.fio.as_str()).collect();
    let (best, score) = best_fio_match_with_score(fio, &names);
    match best {
        Some(name) if score >= threshold => {
            let i = sheet.rows.iter().position(|r| r.fio == name)?;
            tracing::debug!(input = fio, matched = name, score, "fuzzy name match");
            Some((i, true))
        }
        _ => None,
    }
}

/// Merge the grid at `path` into `sheet`.
///
/// Cells present in the CSV overwrite the matched row's cells (blank CSV
/// cells clear them). Day columns missing from the header, or past the end
/// of a short record, leave cells untouched.
pub fn import_grid(sheet: &mut Timesheet, path: &Path, threshold: f64) -> AppResult<ImportReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let grid = layout(rdr.headers()?)?;
    let mut report = ImportReport::default();

    for rec in rdr.records() {
        let rec = rec?;

        let fio = rec.get(grid.fio).unwrap_or("").trim().to_string();
        let tbn = grid
            .tbn
            .and_then(|i| rec.get(i))
            .map(str::trim)
            .filter(|t| !t.is_empty());
        if fio.is_empty() {
            continue;
        }
        if is_summary_label(&fio) && tbn.is_none() {
            tracing::debug!(line = ?rec.position().map(|p| p.line()), "total line skipped");
            continue;
        }

        let idx = match locate(sheet, &fio, tbn, threshold) {
            Some((i, fuzzy)) => {
                if fuzzy {
                    report.fuzzy_matched += 1;
                } else {
                    report.matched += 1;
                }
                i
            }
            None => {
                sheet.rows.push(AttendanceRow::new(&fio, tbn));
                report.added += 1;
                sheet.rows.len() - 1
            }
        };

        let row = &mut sheet.rows[idx];
        let mut cells: Vec<DayCell> = row.hours.to_vec();
        for (col, slot) in &grid.days {
            if let Some(text) = rec.get(*col) {
                cells[*slot] = Some(text.to_string());
            }
        }
        row.hours = pad_cells(cells);
    }

    tracing::info!(
        path = %path.display(),
        matched = report.matched,
        fuzzy = report.fuzzy_matched,
        added = report.added,
        "grid imported"
    );
    Ok(report)
}
