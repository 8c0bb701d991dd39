//! Day-cell notation parser.
//!
//! A cell is written as `main[(overtime)]`:
//!
//! - `main` is a `/`-separated list of segments. The first segment is the
//!   day (base) hours, every following segment is night hours.
//!   Worked hours = base + all night segments.
//! - `overtime` is `day[/night]` overtime hours.
//! - A segment is a decimal number (`8`, `8,25`, `8.5`) or `HH:MM`.
//!
//! | cell        | worked | night | overtime      |
//! |-------------|--------|-------|---------------|
//! | `8`         | 8      | 0     | None, None    |
//! | `7:30`      | 7.5    | 0     | None, None    |
//! | `8/2/1`     | 11     | 3     | None, None    |
//! | `8/2(1/1)`  | 10     | 2     | 1, 1          |
//! | `(2)`       | None   | None  | 2, 0          |
//!
//! Parsing never fails: blank or malformed text yields `None`, which callers
//! must treat as "no record" (distinct from a recorded zero).

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:[.,][0-9]+)?$").unwrap());

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9]+)$").unwrap());

/// Everything the parser can read from a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CellReading {
    pub worked: Option<f64>,
    pub night: Option<f64>,
    pub overtime_day: Option<f64>,
    pub overtime_night: Option<f64>,
}

impl CellReading {
    /// `true` when the cell carries neither hours nor overtime.
    pub fn is_empty(&self) -> bool {
        self.worked.is_none() && self.overtime_day.is_none()
    }
}

/// Parse one segment: `digits[(,|.)digits]` or `HH:MM` (→ `HH + MM/60`).
pub fn parse_segment(s: &str) -> Option<f64> {
    let s = s.trim();

    if let Some(caps) = TIME_RE.captures(s) {
        let hh: f64 = caps[1].parse().ok()?;
        let mm: f64 = caps[2].parse().ok()?;
        return Some(hh + mm / 60.0);
    }

    if DECIMAL_RE.is_match(s) {
        return s.replace(',', ".").parse::<f64>().ok();
    }

    None
}

/// Text before the overtime group, `None` when nothing is left.
fn main_part(raw: &str) -> Option<&str> {
    let s = raw.trim();
    let main = match s.find('(') {
        Some(idx) => s[..idx].trim(),
        None => s,
    };
    if main.is_empty() { None } else { Some(main) }
}

fn hours_and_night(raw: &str) -> Option<(f64, f64)> {
    let main = main_part(raw)?;

    // Empty segments ("8/", "8//2") are skipped.
    let mut segments = main.split('/').map(str::trim).filter(|p| !p.is_empty());

    let base = parse_segment(segments.next()?)?;

    let mut night = 0.0;
    for seg in segments {
        night += parse_segment(seg)?;
    }

    Some((base + night, night))
}

/// Worked hours (night included) and night hours of a cell, ignoring the
/// parenthesized overtime group.
///
/// Blank cells, cells with only an overtime group and malformed cells give
/// `(None, None)`. A cell without night segments gives night = `0.0`.
pub fn parse_hours_and_night(raw: &str) -> (Option<f64>, Option<f64>) {
    match hours_and_night(raw) {
        Some((worked, night)) => (Some(worked), Some(night)),
        None => (None, None),
    }
}

fn overtime(raw: &str) -> Option<(f64, f64)> {
    let s = raw.trim();
    let open = s.find('(')?;
    let rest = &s[open + 1..];
    let close = rest.find(')')?;

    let inner = rest[..close].trim();
    if inner.is_empty() {
        return None;
    }

    // A missing side counts as zero once the group itself is present.
    let side = |p: &str| {
        if p.is_empty() {
            Some(0.0)
        } else {
            parse_segment(p)
        }
    };

    let parts: Vec<&str> = inner.split('/').map(str::trim).collect();
    match parts.as_slice() {
        [day] => Some((parse_segment(day)?, 0.0)),
        [day, night] => Some((side(day)?, side(night)?)),
        _ => None,
    }
}

/// Day and night overtime from the parenthesized group.
///
/// `(None, None)` when there is no complete `( … )` group or when its content
/// is malformed; otherwise both values are present (`0.0` for a missing side).
pub fn parse_overtime(raw: &str) -> (Option<f64>, Option<f64>) {
    match overtime(raw) {
        Some((day, night)) => (Some(day), Some(night)),
        None => (None, None),
    }
}

/// Parse all four quantities of a cell at once.
pub fn parse_cell(raw: &str) -> CellReading {
    let (worked, night) = parse_hours_and_night(raw);
    let (overtime_day, overtime_night) = parse_overtime(raw);
    CellReading {
        worked,
        night,
        overtime_day,
        overtime_night,
    }
}

/// `true` when every part of a non-blank cell is readable: the hours before
/// the group parse, and a `(` opens a well-formed overtime group.
///
/// `8(x)` reads as 8 worked hours but is not well formed.
pub fn is_well_formed(raw: &str) -> bool {
    let s = raw.trim();
    if s.is_empty() {
        return false;
    }
    let main_ok = main_part(s).is_none() || hours_and_night(s).is_some();
    let group_ok = !s.contains('(') || overtime(s).is_some();
    main_ok && group_ok
}
