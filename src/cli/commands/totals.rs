use crate::cli::commands::open_sheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::month_name_ru;
use crate::core::sheet::SheetLogic;
use crate::core::totals::{RowTotals, calc_row_totals, summarize_rows};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

fn totals_cells(t: &RowTotals) -> Vec<String> {
    let t = t.rounded();
    vec![
        t.days.to_string(),
        fmt_hours(t.hours),
        fmt_hours(t.night_hours),
        fmt_hours(t.overtime_day),
        fmt_hours(t.overtime_night),
    ]
}

/// Print one line of totals per employee, then the summary line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { file, filter } = cmd {
        let (_, sheet) = open_sheet(cfg, file)?;
        let period = sheet.period();
        let h = &sheet.header;

        header(format!(
            "{} {} ({}) · {} · {}",
            month_name_ru(period.month())?,
            period.year(),
            period,
            h.department,
            h.object_addr
        ));

        let rows = SheetLogic::filter_rows(&sheet, filter.as_deref().unwrap_or(""));
        if rows.is_empty() {
            info("No employees to show.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("fio"),
            Column::left("tbn"),
            Column::right("days"),
            Column::right("hours"),
            Column::right("night"),
            Column::right("ot day"),
            Column::right("ot night"),
        ]);

        for (i, row) in rows.iter().enumerate() {
            let mut cells = vec![(i + 1).to_string(), row.fio.clone(), row.tbn_str().to_string()];
            cells.extend(totals_cells(&calc_row_totals(&row.hours, period)));
            table.add_row(cells);
        }

        let summary = summarize_rows(rows.iter().copied(), period);
        let mut total = vec![String::new(), summary.label(), String::new()];
        total.extend(totals_cells(&summary.totals));
        table.add_row(total);

        print!("{}", table.render());
    }

    Ok(())
}
