// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, row_to_cells, summary_to_cells};
use crate::export::{SheetExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(sheet: &SheetExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(sheet)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: header row, one line per employee, a closing total line.
pub(crate) fn export_csv(sheet: &SheetExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let period = sheet.header.period;
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(get_headers(period))?;
    for row in &sheet.rows {
        wtr.write_record(row_to_cells(row))?;
    }
    wtr.write_record(summary_to_cells(&sheet.summary, period))?;

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
