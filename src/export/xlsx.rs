// src/export/xlsx.rs

use crate::core::calendar::{date_of, is_weekend};
use crate::errors::{AppError, AppResult};
use crate::export::model::{NAME_COLS, get_headers, summary_to_cells};
use crate::export::{SheetExport, notify_export_success};
use crate::ui::messages::info;
use chrono::{Datelike, Weekday};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_BG: u32 = 0xEAF3FB;
const PLAIN_BG: u32 = 0xFFFFFF;
const SATURDAY_BG: u32 = 0xFFF8E1;
const SUNDAY_BG: u32 = 0xFFEBEE;

/// XLSX export with styling: banded rows, weekend day columns shaded,
/// name columns frozen, auto column width.
pub(crate) fn export_xlsx(sheet: &SheetExport, path: &Path, highlight_weekends: bool) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let period = sheet.header.period;
    let day_count = period.day_count() as usize;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(period.to_string())
        .map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers(period);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet
        .set_freeze_panes(1, NAME_COLS as u16)
        .map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    // Background for a cell: weekend shading wins over row banding.
    let background = |row_index: usize, col: usize| -> Color {
        if highlight_weekends && (NAME_COLS..NAME_COLS + day_count).contains(&col) {
            let day = (col - NAME_COLS + 1) as u32;
            if is_weekend(period, day) {
                let sunday = date_of(period, day).is_some_and(|d| d.weekday() == Weekday::Sun);
                return Color::RGB(if sunday { SUNDAY_BG } else { SATURDAY_BG });
            }
        }
        Color::RGB(if row_index % 2 == 0 { BAND_BG } else { PLAIN_BG })
    };

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, rec) in sheet.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;

        let mut col = 0usize;
        for text in [&rec.fio, &rec.tbn].into_iter().chain(rec.days.iter()) {
            write_text(worksheet, row, col, text, background(row_index, col), col >= NAME_COLS)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(text.as_str()));
            col += 1;
        }

        let t = &rec.totals;
        let numbers = [
            t.days as f64,
            t.hours,
            t.night_hours,
            t.overtime_day,
            t.overtime_night,
        ];
        for value in numbers {
            write_number(worksheet, row, col, value, background(row_index, col), false)?;
            col_widths[col] = col_widths[col].max(value.to_string().len());
            col += 1;
        }
    }

    // ---------------------------
    // Summary line
    // ---------------------------
    let summary_row = (sheet.rows.len() + 1) as u32;
    let summary_cells = summary_to_cells(&sheet.summary, period);
    let totals_start = NAME_COLS + day_count;

    for (col, text) in summary_cells.iter().enumerate() {
        if col >= totals_start {
            let value: f64 = text.parse().unwrap_or(0.0);
            write_number(worksheet, summary_row, col, value, Color::RGB(PLAIN_BG), true)?;
        } else {
            let fmt = Format::new().set_bold().set_border(FormatBorder::Thin);
            worksheet
                .write_with_format(summary_row, col as u16, text.as_str(), &fmt)
                .map_err(to_export_error)?;
        }
    }
    col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(summary_cells[0].as_str()));

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Day cells are written as text so that notations like `8/2(1)` survive.
fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    s: &str,
    bg: Color,
    centered: bool,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if centered {
        fmt = fmt.set_align(FormatAlign::Center);
    }

    worksheet
        .write_with_format(row, col as u16, s, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn write_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    value: f64,
    bg: Color,
    bold: bool,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_align(FormatAlign::Right)
        .set_num_format("0.##")
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if bold {
        fmt = fmt.set_bold();
    }

    worksheet
        .write_with_format(row, col as u16, value, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
