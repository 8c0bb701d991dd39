#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::models::period::Period;
use rtimesheet::models::timesheet::{AttendanceRow, Timesheet, TimesheetHeader};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI command isolated in `home`: config, log and sheets dir live there.
pub fn rts(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env("USER", "tester")
        .env_remove("RUST_LOG");
    cmd
}

pub fn period(year: i32, month: u32) -> Period {
    Period::new(year, month).expect("valid period")
}

pub fn header(user: &str, p: Period) -> TimesheetHeader {
    TimesheetHeader {
        object_id: Some("A-12".to_string()),
        object_addr: "ул. Ленина, 1".to_string(),
        department: "Участок 1".to_string(),
        period: p,
        user: user.to_string(),
    }
}

/// A June 2025 sheet with two employees and a few filled days.
pub fn sample_sheet(user: &str) -> Timesheet {
    let mut sheet = Timesheet::new(header(user, period(2025, 6)));
    sheet.rows.push(
        AttendanceRow::new("Иванов Иван Иванович", Some("001")).with_cells(vec![
            Some("8".to_string()),
            Some("8/2(1/1)".to_string()),
            None,
            Some("7:30".to_string()),
        ]),
    );
    sheet.rows.push(
        AttendanceRow::new("Петров Пётр", None)
            .with_cells(vec![Some("(2)".to_string()), Some("0/3".to_string())]),
    );
    sheet
}

pub fn write_sheet(dir: &Path, name: &str, sheet: &Timesheet) -> PathBuf {
    let path = dir.join(name);
    sheet.save(&path).expect("save sheet");
    path
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write file");
    path
}

/// `n` empty cells followed by `value`: the value lands on day `n + 1`.
pub fn cells_with_value_at(n: usize, value: &str) -> Vec<Option<String>> {
    let mut cells = vec![None; n];
    cells.push(Some(value.to_string()));
    cells
}
