use crate::cli::parser::Commands;
use crate::core::notation::parse_cell;
use crate::errors::AppResult;
use crate::utils::colors::{colorize_night, colorize_optional, colorize_overtime};
use crate::utils::formatting::{fmt_opt_hours, pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

/// Print the decoded values of every cell given on the command line.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Parse { cells } = cmd {
        let width = cells
            .iter()
            .map(|c| UnicodeWidthStr::width(c.as_str()))
            .max()
            .unwrap_or(0)
            .max(4);

        println!(
            "{}  {:>6}  {:>6}  {:>6}  {:>6}",
            pad_right("cell", width),
            "worked",
            "night",
            "ot day",
            "ot ngt"
        );

        for raw in cells {
            let r = parse_cell(raw);
            tracing::debug!(cell = %raw, reading = ?r, "parsed");

            let col = |v: Option<f64>| pad_left(&fmt_opt_hours(v), 6);

            println!(
                "{}  {}  {}  {}  {}",
                pad_right(raw, width),
                colorize_optional(&col(r.worked)),
                colorize_night(r.night.unwrap_or(0.0), &col(r.night)),
                colorize_overtime(r.overtime_day.unwrap_or(0.0), &col(r.overtime_day)),
                colorize_overtime(r.overtime_night.unwrap_or(0.0), &col(r.overtime_night)),
            );
        }
    }

    Ok(())
}
