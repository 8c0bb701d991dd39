use crate::cli::commands::{check_shared_employees, open_sheet};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sheet::SheetLogic;
use crate::errors::AppResult;
use crate::models::period::Period;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Period {
        file,
        period,
        allow_shared,
    } = cmd
    {
        let (path, mut sheet) = open_sheet(cfg, file)?;
        let period = Period::parse(period)?;

        let filled_past_end = sheet
            .rows
            .iter()
            .filter(|r| r.hours[period.day_count() as usize..].iter().any(Option::is_some))
            .count();
        if filled_past_end > 0 {
            warning(format!(
                "{filled_past_end} row(s) have entries after day {}: they will not be counted.",
                period.day_count()
            ));
        }

        SheetLogic::set_period(&mut sheet, period);
        check_shared_employees(cfg, &path, &sheet, *allow_shared)?;
        sheet.save(&path)?;

        success(format!("Sheet moved to {period}."));
    }

    Ok(())
}
