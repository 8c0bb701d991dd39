use crate::cli::commands::{check_shared_employees, open_sheet};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::{find_in_department, load_roster};
use crate::core::sheet::SheetLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::path::resolve;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        file,
        fio,
        tbn,
        allow_duplicate,
        roster,
        department_all,
        allow_shared,
    } = cmd
    {
        let (path, mut sheet) = open_sheet(cfg, file)?;
        let department = sheet.header.department.clone();
        let employees = match roster {
            Some(r) => Some(load_roster(&resolve(r))?),
            None => None,
        };

        if let Some(name) = fio {
            // With a roster only staff of the sheet's department may be added.
            let mut tbn = tbn.clone();
            if let Some(employees) = &employees {
                let emp = find_in_department(employees, name, &department).ok_or_else(|| {
                    AppError::InvalidEmployee(format!(
                        "'{}' is not in the roster of '{department}'",
                        name.trim()
                    ))
                })?;
                if tbn.is_none() {
                    tbn = emp.tbn_opt();
                }
            }

            SheetLogic::add_row(&mut sheet, name, tbn.as_deref(), *allow_duplicate)?;
            check_shared_employees(cfg, &path, &sheet, *allow_shared)?;
            sheet.save(&path)?;
            success(format!("Employee '{}' added.", name.trim()));
        } else if let Some(employees) = &employees
            && *department_all
        {
            let added = SheetLogic::add_department(&mut sheet, employees, &department);

            if added == 0 {
                info(format!("No new employees of '{department}' to add."));
            } else {
                check_shared_employees(cfg, &path, &sheet, *allow_shared)?;
                sheet.save(&path)?;
                success(format!("{added} employees of '{department}' added."));
            }
        }
    }

    Ok(())
}
