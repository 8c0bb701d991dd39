// src/export/model.rs

use crate::core::totals::{RowTotals, SheetSummary, calc_row_totals, summarize};
use crate::models::period::Period;
use crate::models::timesheet::{AttendanceRow, Timesheet, TimesheetHeader};
use crate::utils::formatting::fmt_hours;
use serde::Serialize;

/// One employee row as exported: the month's day cells plus rounded totals.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub fio: String,
    pub tbn: String,
    /// Exactly `period.day_count()` entries, blank for empty cells.
    pub days: Vec<String>,
    pub totals: RowTotals,
}

/// Whole sheet as exported (JSON keeps this nesting).
#[derive(Serialize, Clone, Debug)]
pub struct SheetExport {
    pub header: TimesheetHeader,
    pub rows: Vec<RowExport>,
    pub summary: SheetSummary,
}

impl RowExport {
    pub fn from_row(row: &AttendanceRow, period: Period) -> Self {
        let day_count = period.day_count() as usize;
        Self {
            fio: row.fio.clone(),
            tbn: row.tbn_str().to_string(),
            days: row
                .hours
                .iter()
                .take(day_count)
                .map(|c| c.clone().unwrap_or_default())
                .collect(),
            totals: calc_row_totals(&row.hours, period).rounded(),
        }
    }
}

impl SheetExport {
    pub fn from_sheet(sheet: &Timesheet) -> Self {
        let period = sheet.period();
        let mut summary = summarize(sheet);
        summary.totals = summary.totals.rounded();

        Self {
            header: sheet.header.clone(),
            rows: sheet
                .rows
                .iter()
                .map(|r| RowExport::from_row(r, period))
                .collect(),
            summary,
        }
    }
}

/// Number of leading name columns (fio, tbn).
pub(crate) const NAME_COLS: usize = 2;

/// Header for CSV / XLSX / PDF: fio, tbn, one column per day, totals.
pub(crate) fn get_headers(period: Period) -> Vec<String> {
    let mut h = vec!["fio".to_string(), "tbn".to_string()];
    h.extend((1..=period.day_count()).map(|d| d.to_string()));
    h.extend(
        ["days", "hours", "night_hours", "overtime_day", "overtime_night"]
            .iter()
            .map(|s| s.to_string()),
    );
    h
}

pub(crate) fn totals_to_cells(t: &RowTotals) -> Vec<String> {
    vec![
        t.days.to_string(),
        fmt_hours(t.hours),
        fmt_hours(t.night_hours),
        fmt_hours(t.overtime_day),
        fmt_hours(t.overtime_night),
    ]
}

/// Flatten a row into strings, in `get_headers` order.
pub(crate) fn row_to_cells(r: &RowExport) -> Vec<String> {
    let mut cells = vec![r.fio.clone(), r.tbn.clone()];
    cells.extend(r.days.iter().cloned());
    cells.extend(totals_to_cells(&r.totals));
    cells
}

/// Closing "total" line: blank day columns, summed totals.
pub(crate) fn summary_to_cells(s: &SheetSummary, period: Period) -> Vec<String> {
    let mut cells = vec![s.label(), String::new()];
    cells.extend((0..period.day_count()).map(|_| String::new()));
    cells.extend(totals_to_cells(&s.totals));
    cells
}

pub(crate) fn sheet_to_table(e: &SheetExport) -> Vec<Vec<String>> {
    e.rows.iter().map(row_to_cells).collect()
}
