use crate::cli::commands::open_sheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::resolve;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        sheet,
        format,
        file,
        force,
    } = cmd
    {
        let (_, data) = open_sheet(cfg, sheet)?;
        ExportLogic::export(&data, *format, &resolve(file), *force, cfg.highlight_weekends)?;
    }
    Ok(())
}
