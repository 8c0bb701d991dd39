//! Calendar helpers: month length, month names, weekends.

use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days of `month` in `year` (Gregorian rules).
///
/// Fails for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidPeriod(format!("{year}-{month:02}")));
    }
    Ok(month_last_day(year, month))
}

/// Day count for an already validated month.
pub(crate) fn month_last_day(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

const MONTHS_RU: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь", "Октябрь",
    "Ноябрь", "Декабрь",
];

/// Russian month name (nominative), as printed on timesheet titles.
pub fn month_name_ru(month: u32) -> AppResult<&'static str> {
    MONTHS_RU
        .get((month as usize).wrapping_sub(1))
        .copied()
        .ok_or_else(|| AppError::InvalidPeriod(format!("month {month}")))
}

/// Date of a 1-based day within the period, if the day exists.
pub fn date_of(period: Period, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(period.year(), period.month(), day)
}

/// `true` for Saturdays and Sundays. Days outside the month are never weekends.
pub fn is_weekend(period: Period, day: u32) -> bool {
    date_of(period, day)
        .map(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .unwrap_or(false)
}
