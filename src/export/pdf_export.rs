// src/export/pdf_export.rs

use crate::core::calendar::month_name_ru;
use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, sheet_to_table, summary_to_cells};
use crate::export::pdf::PdfManager;
use crate::export::{SheetExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: one landscape table, paginated, closed by the total line.
pub(crate) fn export_pdf(sheet: &SheetExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let period = sheet.header.period;
    let headers = get_headers(period);
    let data_vec = sheet_to_table(sheet);
    let footer = summary_to_cells(&sheet.summary, period);

    let mut pdf = PdfManager::new();
    pdf.write_table(&build_pdf_title(sheet)?, &headers, &data_vec, Some(footer.as_slice()));

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// "Табель YYYY-MM (Месяц) / department / address", before transliteration.
fn build_pdf_title(sheet: &SheetExport) -> AppResult<String> {
    let h = &sheet.header;
    let month = month_name_ru(h.period.month())?;

    let mut title = format!("Табель {} ({})", h.period, month);
    for part in [&h.department, &h.object_addr] {
        if !part.trim().is_empty() {
            title.push_str(" / ");
            title.push_str(part.trim());
        }
    }
    Ok(title)
}
