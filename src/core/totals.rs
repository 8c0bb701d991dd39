//! Row aggregation: derive monthly totals from a 31-slot day grid.
//!
//! Totals are never stored. They are recomputed from the cells every time a
//! row is loaded, edited or exported, so they cannot go stale.

use crate::core::notation::{parse_hours_and_night, parse_overtime};
use crate::models::period::Period;
use crate::models::timesheet::{AttendanceRow, DayCells, Timesheet};
use crate::utils::formatting::round2;
use serde::Serialize;

/// Worked hours must exceed this to count the day as worked.
const WORKED_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RowTotals {
    /// Days with strictly positive worked hours.
    pub days: u32,
    /// Worked hours, night hours included.
    pub hours: f64,
    pub night_hours: f64,
    pub overtime_day: f64,
    pub overtime_night: f64,
}

impl RowTotals {
    /// Copy rounded to 2 decimals, for presentation only.
    pub fn rounded(&self) -> Self {
        Self {
            days: self.days,
            hours: round2(self.hours),
            night_hours: round2(self.night_hours),
            overtime_day: round2(self.overtime_day),
            overtime_night: round2(self.overtime_night),
        }
    }

    fn add(&mut self, other: &RowTotals) {
        self.days += other.days;
        self.hours += other.hours;
        self.night_hours += other.night_hours;
        self.overtime_day += other.overtime_day;
        self.overtime_night += other.overtime_night;
    }
}

/// Compute the totals of one row for `period`.
///
/// Only the first `period.day_count()` cells are inspected; the tail of the
/// 31-slot array is ignored for shorter months. A day counts toward `days`
/// only through its worked hours: night hours and overtime are summed even
/// when the day itself does not qualify.
pub fn calc_row_totals(cells: &DayCells, period: Period) -> RowTotals {
    let day_count = period.day_count() as usize;
    let mut totals = RowTotals::default();

    for raw in cells.iter().take(day_count).flatten() {
        let (worked, night) = parse_hours_and_night(raw);
        let (ot_day, ot_night) = parse_overtime(raw);

        if let Some(h) = worked
            && h > WORKED_EPSILON
        {
            totals.hours += h;
            totals.days += 1;
        }
        if let Some(n) = night {
            totals.night_hours += n;
        }
        if let Some(d) = ot_day {
            totals.overtime_day += d;
        }
        if let Some(n) = ot_night {
            totals.overtime_night += n;
        }
    }

    totals
}

/// Sheet-wide totals: number of employees plus the sum of all row totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SheetSummary {
    pub employees: usize,
    pub totals: RowTotals,
}

impl SheetSummary {
    /// Name-column text of the closing total line in tables and exports.
    pub fn label(&self) -> String {
        format!("{SUMMARY_PREFIX}{} employees)", self.employees)
    }
}

const SUMMARY_PREFIX: &str = "TOTAL (";

/// `true` for the text written by [`SheetSummary::label`].
pub fn is_summary_label(text: &str) -> bool {
    text.trim()
        .strip_prefix(SUMMARY_PREFIX)
        .and_then(|rest| rest.strip_suffix(" employees)"))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

pub fn summarize(sheet: &Timesheet) -> SheetSummary {
    summarize_rows(&sheet.rows, sheet.period())
}

/// Summary over any subset of rows, e.g. the rows left by a filter.
pub fn summarize_rows<'a, I>(rows: I, period: Period) -> SheetSummary
where
    I: IntoIterator<Item = &'a AttendanceRow>,
{
    let mut summary = SheetSummary::default();

    for row in rows {
        summary.employees += 1;
        summary.totals.add(&calc_row_totals(&row.hours, period));
    }

    summary
}
