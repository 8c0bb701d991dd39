use crate::cli::commands::{check_shared_employees, open_sheet};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::import_grid;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::resolve;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        file,
        from,
        allow_shared,
    } = cmd
    {
        let (path, mut sheet) = open_sheet(cfg, file)?;

        let report = import_grid(&mut sheet, &resolve(from), cfg.fio_match_threshold)?;
        check_shared_employees(cfg, &path, &sheet, *allow_shared)?;
        sheet.save(&path)?;

        success(format!(
            "Grid imported: {} matched, {} matched by similar name, {} added.",
            report.matched, report.fuzzy_matched, report.added
        ));
    }

    Ok(())
}
