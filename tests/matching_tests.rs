mod common;
use common::{header, period, sample_sheet, write_file, write_sheet};
use rtimesheet::core::duplicates::{find_duplicate_employees, load_sheets_in};
use rtimesheet::core::fio::{best_fio_match_with_score, normalize_fio, similarity};
use rtimesheet::core::import::{ImportReport, import_grid};
use rtimesheet::core::roster::{departments, find_in_department, load_roster};
use rtimesheet::core::sheet::SheetLogic;
use rtimesheet::errors::AppError;
use rtimesheet::export::{ExportFormat, ExportLogic};
use rtimesheet::models::timesheet::{AttendanceRow, Timesheet};
use std::path::PathBuf;
use tempfile::tempdir;

const ROSTER: &str = "\u{feff}Табельный номер,Сотрудник,Должность,Подразделение,Дата увольнения
001,Иванов Иван Иванович,Монтажник,Участок 1,
002,Сидоров Сидор,Сварщик,Участок 1,
003,Кузнецов Кузьма,Сварщик,Участок 1,01.05.2025
004,Смирнов Семён,Прораб,Участок 2,
,,,,
";

#[test]
fn normalize_fio_unifies_spelling() {
    assert_eq!(normalize_fio("  Пётр   Иванович\t"), "петр иванович");
    assert_eq!(normalize_fio("Иванов И.И."), "иванов и и");
}

#[test]
fn similarity_ratio() {
    assert_eq!(similarity("abc", "abc"), 1.0);
    assert_eq!(similarity("abcd", "bcde"), 0.75);
    assert_eq!(similarity("abc", "xyz"), 0.0);
    assert_eq!(similarity("", ""), 1.0);
}

#[test]
fn best_match_picks_closest_name() {
    let names = ["Петров Пётр", "Иванов Иван Иванович"];
    let (best, score) = best_fio_match_with_score("Иванов И.И.", &names);
    assert_eq!(best, Some("Иванов Иван Иванович"));
    assert!(score > 0.5 && score < 1.0);

    let (best, score) = best_fio_match_with_score("   ", &names);
    assert_eq!((best, score), (None, 0.0));
}

#[test]
fn roster_is_read_by_header_names() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "roster.csv", ROSTER);

    let roster = load_roster(&path).unwrap();
    assert_eq!(roster.len(), 4);
    assert_eq!(roster[0].tbn, "001");
    assert_eq!(roster[1].position, "Сварщик");
    assert!(roster[2].fired);
    assert!(!roster[3].fired);

    assert_eq!(departments(&roster), vec!["Участок 1", "Участок 2"]);
}

#[test]
fn roster_without_required_columns_fails() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "bad.csv", "Name,Position\nA,B\n");
    assert!(matches!(load_roster(&path), Err(AppError::Roster(_))));
    assert!(matches!(
        load_roster(&dir.path().join("missing.csv")),
        Err(AppError::Roster(_))
    ));
}

#[test]
fn roster_lookup_is_limited_to_active_staff_of_the_department() {
    let dir = tempdir().unwrap();
    let roster = load_roster(&write_file(dir.path(), "roster.csv", ROSTER)).unwrap();

    let found = find_in_department(&roster, "сидоров  сидор", "Участок 1").unwrap();
    assert_eq!(found.tbn, "002");

    assert!(find_in_department(&roster, "Смирнов Семён", "Участок 1").is_none());
    assert!(find_in_department(&roster, "Кузнецов Кузьма", "Участок 1").is_none());
    assert!(find_in_department(&roster, "Петров Пётр", "Участок 1").is_none());
}

#[test]
fn department_rows_skip_fired_and_present_employees() {
    let dir = tempdir().unwrap();
    let roster = load_roster(&write_file(dir.path(), "roster.csv", ROSTER)).unwrap();

    let mut sheet = sample_sheet("ivanov");
    let added = SheetLogic::add_department(&mut sheet, &roster, "Участок 1");
    assert_eq!(added, 1);
    assert_eq!(sheet.rows.last().unwrap().fio, "Сидоров Сидор");
    assert_eq!(sheet.rows.last().unwrap().tbn.as_deref(), Some("002"));

    assert_eq!(SheetLogic::add_department(&mut sheet, &roster, "Участок 1"), 0);
}

#[test]
fn grid_import_matches_by_number_name_and_similarity() {
    let dir = tempdir().unwrap();
    let grid = "fio,tbn,1,2,3
Иванов Иван Иваныч,,8,8,
Петров Пётр,,,,(1)
Сидоров Сидор,777,8/2,,
";
    let path = write_file(dir.path(), "grid.csv", grid);

    let mut sheet = sample_sheet("ivanov");
    let report = import_grid(&mut sheet, &path, 0.8).unwrap();
    assert_eq!(
        report,
        ImportReport {
            matched: 1,
            fuzzy_matched: 1,
            added: 1
        }
    );

    let ivanov = &sheet.rows[0];
    assert_eq!(ivanov.hours[0].as_deref(), Some("8"));
    assert_eq!(ivanov.hours[1].as_deref(), Some("8"));
    assert_eq!(ivanov.hours[2], None);
    // day 4 is not in the grid and stays as it was
    assert_eq!(ivanov.hours[3].as_deref(), Some("7:30"));

    let petrov = &sheet.rows[1];
    assert_eq!(petrov.hours[0], None);
    assert_eq!(petrov.hours[2].as_deref(), Some("(1)"));

    let sidorov = &sheet.rows[2];
    assert_eq!(sidorov.tbn.as_deref(), Some("777"));
    assert_eq!(sidorov.hours[0].as_deref(), Some("8/2"));
}

#[test]
fn grid_import_needs_name_and_day_columns() {
    let dir = tempdir().unwrap();
    let mut sheet = sample_sheet("ivanov");

    let no_name = write_file(dir.path(), "a.csv", "tbn,1\n001,8\n");
    assert!(matches!(import_grid(&mut sheet, &no_name, 0.8), Err(AppError::Import(_))));

    let no_days = write_file(dir.path(), "b.csv", "fio,tbn\nA,1\n");
    assert!(matches!(import_grid(&mut sheet, &no_days, 0.8), Err(AppError::Import(_))));
}

#[test]
fn grid_import_keeps_cells_past_a_short_record() {
    let dir = tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "ragged.csv",
        "fio,tbn,1,2,3,4\nИванов Иван Иванович,001,9\n",
    );

    let mut sheet = sample_sheet("ivanov");
    let report = import_grid(&mut sheet, &path, 0.8).unwrap();
    assert_eq!(report.matched, 1);

    let ivanov = &sheet.rows[0];
    assert_eq!(ivanov.hours[0].as_deref(), Some("9"));
    assert_eq!(ivanov.hours[1].as_deref(), Some("8/2(1/1)"));
    assert_eq!(ivanov.hours[2], None);
    assert_eq!(ivanov.hours[3].as_deref(), Some("7:30"));
}

#[test]
fn exported_csv_imports_back_without_the_total_line() {
    let dir = tempdir().unwrap();
    let original = sample_sheet("ivanov");
    let csv_path = dir.path().join("june.csv");
    ExportLogic::export(&original, ExportFormat::Csv, &csv_path, false, true).unwrap();

    let mut sheet = original.clone();
    let report = import_grid(&mut sheet, &csv_path, 0.8).unwrap();
    assert_eq!(
        report,
        ImportReport {
            matched: 2,
            fuzzy_matched: 0,
            added: 0
        }
    );
    assert_eq!(sheet, original);
}

fn other_sheet(user: &str) -> Timesheet {
    let mut sheet = Timesheet::new(header(user, period(2025, 6)));
    sheet.rows.push(AttendanceRow::new("Иванов Иван Иванович", Some("001")));
    sheet.rows.push(AttendanceRow::new("Петров Пётр", Some("555")));
    sheet.rows.push(AttendanceRow::new("Новиков Ной", None));
    sheet
}

#[test]
fn duplicates_found_in_other_users_sheets() {
    let sheet = sample_sheet("ivanov");
    let others = vec![(PathBuf::from("petrov.json"), other_sheet("petrov"))];

    let dups = find_duplicate_employees(&sheet, &others);
    let names: Vec<&str> = dups.iter().map(|d| d.fio.as_str()).collect();
    assert_eq!(names, vec!["Иванов Иван Иванович", "Петров Пётр"]);
    assert!(dups.iter().all(|d| d.user == "petrov"));
    assert_eq!(dups[0].source, PathBuf::from("petrov.json"));
}

#[test]
fn duplicates_ignore_same_user_and_other_slots() {
    let sheet = sample_sheet("ivanov");

    let mut other_department = other_sheet("petrov");
    other_department.header.department = "Участок 2".to_string();

    let mut other_month = other_sheet("sidorov");
    other_month.header.period = period(2025, 7);

    let others = vec![
        (PathBuf::from("mine.json"), other_sheet("ivanov")),
        (PathBuf::from("dep.json"), other_department),
        (PathBuf::from("month.json"), other_month),
    ];
    assert!(find_duplicate_employees(&sheet, &others).is_empty());
}

#[test]
fn number_mismatch_is_not_a_duplicate() {
    let mut sheet = sample_sheet("ivanov");
    sheet.rows[0].tbn = Some("999".to_string());
    let others = vec![(PathBuf::from("p.json"), other_sheet("petrov"))];

    let dups = find_duplicate_employees(&sheet, &others);
    assert_eq!(dups.len(), 1);
    assert_eq!(dups[0].fio, "Петров Пётр");
}

#[test]
fn sheets_directory_loads_only_sheet_files() {
    let dir = tempdir().unwrap();
    write_sheet(dir.path(), "b.yaml", &other_sheet("petrov"));
    write_sheet(dir.path(), "a.json", &sample_sheet("ivanov"));
    write_file(dir.path(), "notes.txt", "not a sheet");
    write_file(dir.path(), "broken.json", "{");

    let sheets = load_sheets_in(dir.path()).unwrap();
    let names: Vec<String> = sheets
        .iter()
        .map(|(p, _)| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.json", "b.yaml"]);
    assert_eq!(sheets[1].1.header.user, "petrov");

    assert!(load_sheets_in(&dir.path().join("missing")).unwrap().is_empty());
}
