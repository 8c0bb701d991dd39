//! Editing operations on a timesheet.
//!
//! Totals are not touched here: they are derived on read by
//! `core::totals`, so every edit is reflected automatically.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::period::Period;
use crate::models::timesheet::{AttendanceRow, Timesheet, normalize_cell};
use std::collections::{BTreeSet, HashSet};

pub struct SheetLogic;

impl SheetLogic {
    /// Index of the first row whose name matches `fio` (trimmed, case-insensitive).
    pub fn find_row(sheet: &Timesheet, fio: &str) -> Option<usize> {
        let needle = fio.trim().to_lowercase();
        sheet
            .rows
            .iter()
            .position(|r| r.fio.trim().to_lowercase() == needle)
    }

    /// Set the cell of 1-based `day` in row `row`.
    /// The value is trimmed; blank input clears the cell.
    pub fn set_cell(sheet: &mut Timesheet, row: usize, day: u32, value: &str) -> AppResult<()> {
        let period = sheet.period();
        let max = period.day_count();

        if day == 0 || day > max {
            return Err(AppError::InvalidDay {
                day,
                period: period.to_string(),
                max,
            });
        }

        let rec = sheet
            .rows
            .get_mut(row)
            .ok_or_else(|| AppError::EmployeeNotFound(format!("row #{row}")))?;

        rec.hours[(day - 1) as usize] = normalize_cell(Some(value.to_string()));

        tracing::debug!(fio = %rec.fio, day, value, "cell updated");
        Ok(())
    }

    /// Append a row for `fio` / `tbn`.
    ///
    /// A row with the same (lowercased fio, tbn) key is refused unless
    /// `allow_duplicate` is set.
    pub fn add_row(
        sheet: &mut Timesheet,
        fio: &str,
        tbn: Option<&str>,
        allow_duplicate: bool,
    ) -> AppResult<()> {
        let row = AttendanceRow::new(fio, tbn);
        if row.fio.is_empty() {
            return Err(AppError::InvalidEmployee("empty full name".into()));
        }

        if !allow_duplicate && sheet.rows.iter().any(|r| r.identity_key() == row.identity_key()) {
            return Err(AppError::DuplicateEmployee(format!(
                "{} (tbn {})",
                row.fio,
                row.tbn_str()
            )));
        }

        tracing::info!(fio = %row.fio, tbn = row.tbn_str(), "row added");
        sheet.rows.push(row);
        Ok(())
    }

    /// Add every active roster employee of `department` not yet in the sheet.
    /// Returns how many rows were added.
    pub fn add_department(sheet: &mut Timesheet, roster: &[Employee], department: &str) -> usize {
        let dep = department.trim();
        let mut existing: HashSet<(String, String)> =
            sheet.rows.iter().map(AttendanceRow::identity_key).collect();

        let mut added = 0;
        for emp in roster
            .iter()
            .filter(|e| e.is_active() && e.department.trim() == dep)
        {
            let tbn = emp.tbn_opt();
            let row = AttendanceRow::new(&emp.fio, tbn.as_deref());
            if row.fio.is_empty() {
                continue;
            }
            if existing.insert(row.identity_key()) {
                sheet.rows.push(row);
                added += 1;
            }
        }

        tracing::info!(department = dep, added, "department rows added");
        added
    }

    /// Remove rows by index. Out-of-range and repeated indices are ignored.
    /// Returns how many rows were removed.
    pub fn remove_rows(sheet: &mut Timesheet, indices: &[usize]) -> usize {
        let unique: BTreeSet<usize> = indices.iter().copied().collect();
        let mut removed = 0;

        // from the end, so indices do not shift
        for idx in unique.into_iter().rev() {
            if idx < sheet.rows.len() {
                sheet.rows.remove(idx);
                removed += 1;
            }
        }
        removed
    }

    /// Indices of all rows whose name matches `fio` (trimmed, case-insensitive).
    pub fn rows_named(sheet: &Timesheet, fio: &str) -> Vec<usize> {
        let needle = fio.trim().to_lowercase();
        sheet
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.fio.trim().to_lowercase() == needle)
            .map(|(i, _)| i)
            .collect()
    }

    /// Move the sheet to another month. Cells are kept as they are; days past
    /// the new month's length simply stop counting.
    pub fn set_period(sheet: &mut Timesheet, period: Period) {
        tracing::info!(from = %sheet.header.period, to = %period, "period changed");
        sheet.header.period = period;
    }

    /// Rows whose fio or tbn contains `needle` (case-insensitive).
    /// A blank needle matches everything.
    pub fn filter_rows<'a>(sheet: &'a Timesheet, needle: &str) -> Vec<&'a AttendanceRow> {
        let needle = needle.trim().to_lowercase();
        sheet
            .rows
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.fio.to_lowercase().contains(&needle)
                    || r.tbn_str().to_lowercase().contains(&needle)
            })
            .collect()
    }
}
