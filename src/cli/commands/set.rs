use crate::cli::commands::{check_shared_employees, open_sheet};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notation::is_well_formed;
use crate::core::sheet::SheetLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        file,
        fio,
        day,
        value,
        allow_shared,
    } = cmd
    {
        let (path, mut sheet) = open_sheet(cfg, file)?;

        let row = SheetLogic::find_row(&sheet, fio)
            .ok_or_else(|| AppError::EmployeeNotFound(fio.clone()))?;

        SheetLogic::set_cell(&mut sheet, row, *day, value)?;

        // Malformed text is stored as typed; the unreadable part does not count.
        if !value.trim().is_empty() && !is_well_formed(value) {
            warning(format!(
                "'{}' is not valid notation: unreadable parts will not be counted.",
                value.trim()
            ));
        }

        check_shared_employees(cfg, &path, &sheet, *allow_shared)?;
        sheet.save(&path)?;

        if value.trim().is_empty() {
            success(format!("{} day {}: cleared", sheet.rows[row].fio, day));
        } else {
            success(format!("{} day {}: {}", sheet.rows[row].fio, day, value.trim()));
        }
    }

    Ok(())
}
