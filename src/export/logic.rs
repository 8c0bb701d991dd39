// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SheetExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::timesheet::Timesheet;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a whole sheet: every row with its day cells and totals,
    /// followed by the sheet summary.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: output path; an existing file is only replaced with `force`
    ///   or after confirmation
    /// - `highlight_weekends`: shade Saturday/Sunday columns (XLSX only)
    pub fn export(
        sheet: &Timesheet,
        format: ExportFormat,
        file: &Path,
        force: bool,
        highlight_weekends: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        if sheet.rows.is_empty() {
            warning("Sheet has no employees: exporting header only.");
        }

        let data = SheetExport::from_sheet(sheet);
        tracing::info!(
            format = format.as_str(),
            file = %file.display(),
            rows = data.rows.len(),
            "exporting sheet"
        );

        match format {
            ExportFormat::Csv => export_csv(&data, file)?,
            ExportFormat::Json => export_json(&data, file)?,
            ExportFormat::Xlsx => export_xlsx(&data, file, highlight_weekends)?,
            ExportFormat::Pdf => export_pdf(&data, file)?,
        }

        Ok(())
    }
}
