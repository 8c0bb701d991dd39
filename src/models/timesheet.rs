//! Timesheet document: header + one attendance row per employee.
//!
//! A sheet is stored as a JSON (`.json`) or YAML (`.yaml` / `.yml`) file
//! that mirrors these structs one to one.

use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Number of day slots of every attendance row, regardless of month length.
pub const DAY_SLOTS: usize = 31;

/// One day's attendance text for one employee (`None` = no record).
pub type DayCell = Option<String>;

/// Fixed 31-slot day grid. Only the first `Period::day_count()` slots are
/// meaningful for a given month.
pub type DayCells = [DayCell; DAY_SLOTS];

/// Pad (with `None`) or truncate any number of cells to exactly 31 slots.
/// Blank strings are stored as `None`.
pub fn pad_cells<I>(cells: I) -> DayCells
where
    I: IntoIterator<Item = DayCell>,
{
    let mut out: DayCells = Default::default();
    for (slot, cell) in out.iter_mut().zip(cells) {
        *slot = normalize_cell(cell);
    }
    out
}

/// Trim a cell value, turning blank input into `None`.
pub fn normalize_cell(cell: DayCell) -> DayCell {
    cell.and_then(|s| {
        let t = s.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}

fn deserialize_cells<'de, D>(deserializer: D) -> Result<DayCells, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<DayCell> = Option::<Vec<DayCell>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(pad_cells(raw))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// Full name ("ФИО").
    pub fio: String,
    /// Personnel number ("табельный номер").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tbn: Option<String>,
    #[serde(default = "empty_cells", deserialize_with = "deserialize_cells")]
    pub hours: DayCells,
}

fn empty_cells() -> DayCells {
    Default::default()
}

impl AttendanceRow {
    pub fn new(fio: &str, tbn: Option<&str>) -> Self {
        Self {
            fio: fio.trim().to_string(),
            tbn: tbn
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            hours: empty_cells(),
        }
    }

    pub fn with_cells<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = DayCell>,
    {
        self.hours = pad_cells(cells);
        self
    }

    pub fn tbn_str(&self) -> &str {
        self.tbn.as_deref().unwrap_or("")
    }

    /// Key used to detect the same employee twice in one sheet.
    pub fn identity_key(&self) -> (String, String) {
        (self.fio.trim().to_lowercase(), self.tbn_str().trim().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub object_addr: String,
    pub department: String,
    pub period: Period,
    pub user: String,
}

impl TimesheetHeader {
    /// Identifies the timesheet slot shared by all users:
    /// (object id, object address, department, period).
    pub fn slot_key(&self) -> (String, String, String, Period) {
        (
            self.object_id.clone().unwrap_or_default().trim().to_string(),
            self.object_addr.trim().to_string(),
            self.department.trim().to_string(),
            self.period,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub header: TimesheetHeader,
    #[serde(default)]
    pub rows: Vec<AttendanceRow>,
}

enum SheetFormat {
    Json,
    Yaml,
}

fn format_for(path: &Path) -> SheetFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("yaml") | Some("yml") => SheetFormat::Yaml,
        _ => SheetFormat::Json,
    }
}

impl Timesheet {
    pub fn new(header: TimesheetHeader) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn period(&self) -> Period {
        self.header.period
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Timesheet file not found: {}", path.display()),
            )));
        }

        let content = fs::read_to_string(path)?;
        let sheet = match format_for(path) {
            SheetFormat::Json => serde_json::from_str(&content)?,
            SheetFormat::Yaml => serde_yaml::from_str(&content)?,
        };

        tracing::debug!(path = %path.display(), "timesheet loaded");
        Ok(sheet)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = match format_for(path) {
            SheetFormat::Json => serde_json::to_string_pretty(self)?,
            SheetFormat::Yaml => serde_yaml::to_string(self)?,
        };

        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), rows = self.rows.len(), "timesheet saved");
        Ok(())
    }
}
