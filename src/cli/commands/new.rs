use crate::cli::commands::{check_shared_employees, sheet_path};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::objects::{load_objects, resolve_object};
use crate::core::roster::{departments, load_roster};
use crate::core::sheet::SheetLogic;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::models::period::Period;
use crate::models::timesheet::{Timesheet, TimesheetHeader};
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::safe_filename;
use crate::utils::path::resolve;

/// Handle the `new` command: build the header, optionally fill the rows
/// from a roster, and write the sheet file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        period,
        department,
        addr,
        object_id,
        objects,
        user,
        roster,
        file,
        force,
        allow_shared,
    } = cmd
    {
        let period = match period {
            Some(p) => Period::parse(p)?,
            None => Period::current(),
        };

        let employees = match roster {
            Some(r) => Some(load_roster(&resolve(r))?),
            None => None,
        };

        let department = department
            .clone()
            .unwrap_or_else(|| cfg.default_department.clone());
        let department = department.trim().to_string();
        if department.is_empty() {
            let known = employees.as_deref().map(departments).unwrap_or_default();
            let hint = if known.is_empty() {
                String::new()
            } else {
                format!("; roster departments: {}", known.join(", "))
            };
            return Err(AppError::Other(format!(
                "department is required (--department or default_department){hint}"
            )));
        }

        let addr = addr.as_deref().unwrap_or("");
        let objects_file = objects.clone().unwrap_or_else(|| cfg.objects_file.clone());
        let (object_addr, object_id) = if objects_file.trim().is_empty() {
            if addr.trim().is_empty() {
                return Err(AppError::InvalidObject(
                    "--addr is required without an object catalogue".into(),
                ));
            }
            (
                addr.trim().to_string(),
                object_id.clone().filter(|s| !s.trim().is_empty()),
            )
        } else {
            let catalogue = load_objects(&resolve(&objects_file))?;
            resolve_object(&catalogue, addr, object_id.as_deref())?
        };

        let header = TimesheetHeader {
            object_id,
            object_addr,
            department: department.clone(),
            period,
            user: user.clone().unwrap_or_else(|| cfg.default_user.clone()),
        };

        let path = match file {
            Some(f) => sheet_path(cfg, f),
            None => {
                let name = safe_filename(
                    &format!("{}_{}_{}.json", period, header.department, header.user),
                    120,
                );
                cfg.sheets_path().join(name)
            }
        };

        ensure_writable(&path, *force)?;

        let mut sheet = Timesheet::new(header);

        if let Some(employees) = &employees {
            let added = SheetLogic::add_department(&mut sheet, employees, &department);
            if added == 0 {
                warning(format!(
                    "No active employees of '{department}' in the roster (departments: {}).",
                    departments(employees).join(", ")
                ));
            } else {
                info(format!("{added} employees added from the roster."));
            }
        }

        check_shared_employees(cfg, &path, &sheet, *allow_shared)?;
        sheet.save(&path)?;

        tracing::info!(path = %path.display(), period = %period, rows = sheet.rows.len(), "sheet created");
        success(format!("Timesheet {} created: {}", period, path.display()));
    }

    Ok(())
}
