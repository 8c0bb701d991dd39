mod common;
use common::{period, sample_sheet, write_file, write_sheet};
use rtimesheet::core::calendar::{days_in_month, is_weekend, month_name_ru};
use rtimesheet::core::sheet::SheetLogic;
use rtimesheet::errors::AppError;
use rtimesheet::models::period::Period;
use rtimesheet::models::timesheet::{DAY_SLOTS, Timesheet};
use tempfile::tempdir;

#[test]
fn days_in_month_follows_gregorian_rules() {
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    assert_eq!(days_in_month(2023, 2).unwrap(), 28);
    assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    assert_eq!(days_in_month(2025, 4).unwrap(), 30);
    assert_eq!(days_in_month(2025, 12).unwrap(), 31);
}

#[test]
fn days_in_month_rejects_invalid_month() {
    assert!(matches!(days_in_month(2025, 13), Err(AppError::InvalidPeriod(_))));
    assert!(matches!(days_in_month(2025, 0), Err(AppError::InvalidPeriod(_))));
}

#[test]
fn period_parsing_and_display() {
    let p = Period::parse("2025-06").unwrap();
    assert_eq!((p.year(), p.month()), (2025, 6));
    assert_eq!(p.to_string(), "2025-06");
    assert_eq!(p.day_count(), 30);

    assert_eq!(Period::parse("2025-6").unwrap(), p);
    assert!(Period::parse("2025-13").is_err());
    assert!(Period::parse("25-06").is_err());
    assert!(Period::parse("june").is_err());
}

#[test]
fn calendar_names_and_weekends() {
    assert_eq!(month_name_ru(6).unwrap(), "Июнь");
    assert!(month_name_ru(0).is_err());

    // 2025-06-01 is a Sunday, 2025-06-02 a Monday
    assert!(is_weekend(period(2025, 6), 1));
    assert!(!is_weekend(period(2025, 6), 2));
    assert!(!is_weekend(period(2025, 6), 31));
}

#[test]
fn set_cell_writes_trimmed_value_and_clears_on_blank() {
    let mut sheet = sample_sheet("ivanov");
    let row = SheetLogic::find_row(&sheet, "  иванов иван иванович ").unwrap();

    SheetLogic::set_cell(&mut sheet, row, 3, " 8/2 ").unwrap();
    assert_eq!(sheet.rows[row].hours[2].as_deref(), Some("8/2"));

    SheetLogic::set_cell(&mut sheet, row, 3, "   ").unwrap();
    assert_eq!(sheet.rows[row].hours[2], None);
}

#[test]
fn set_cell_rejects_days_outside_the_period() {
    let mut sheet = sample_sheet("ivanov");

    let err = SheetLogic::set_cell(&mut sheet, 0, 31, "8").unwrap_err();
    assert!(matches!(err, AppError::InvalidDay { day: 31, max: 30, .. }));
    assert!(SheetLogic::set_cell(&mut sheet, 0, 0, "8").is_err());
    assert!(matches!(
        SheetLogic::set_cell(&mut sheet, 9, 1, "8"),
        Err(AppError::EmployeeNotFound(_))
    ));
}

#[test]
fn add_row_refuses_duplicates_unless_allowed() {
    let mut sheet = sample_sheet("ivanov");

    let err = SheetLogic::add_row(&mut sheet, "ИВАНОВ Иван Иванович", Some("001"), false);
    assert!(matches!(err, Err(AppError::DuplicateEmployee(_))));

    SheetLogic::add_row(&mut sheet, "Иванов Иван Иванович", Some("001"), true).unwrap();
    SheetLogic::add_row(&mut sheet, "Иванов Иван Иванович", Some("002"), false).unwrap();
    assert_eq!(sheet.rows.len(), 4);

    assert!(matches!(
        SheetLogic::add_row(&mut sheet, "   ", None, false),
        Err(AppError::InvalidEmployee(_))
    ));
}

#[test]
fn remove_rows_ignores_bad_and_repeated_indices() {
    let mut sheet = sample_sheet("ivanov");
    let removed = SheetLogic::remove_rows(&mut sheet, &[1, 1, 7]);
    assert_eq!(removed, 1);
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows[0].fio, "Иванов Иван Иванович");
}

#[test]
fn rows_named_and_filter() {
    let sheet = sample_sheet("ivanov");
    assert_eq!(SheetLogic::rows_named(&sheet, "петров пётр"), vec![1]);
    assert!(SheetLogic::rows_named(&sheet, "Петров").is_empty());

    assert_eq!(SheetLogic::filter_rows(&sheet, "петр").len(), 1);
    assert_eq!(SheetLogic::filter_rows(&sheet, "001").len(), 1);
    assert_eq!(SheetLogic::filter_rows(&sheet, "").len(), 2);
}

#[test]
fn set_period_keeps_cells() {
    let mut sheet = sample_sheet("ivanov");
    let before = sheet.rows.clone();
    SheetLogic::set_period(&mut sheet, period(2025, 2));
    assert_eq!(sheet.period(), period(2025, 2));
    assert_eq!(sheet.rows, before);
}

#[test]
fn sheet_round_trips_through_json_and_yaml() {
    let dir = tempdir().unwrap();
    let sheet = sample_sheet("ivanov");

    for name in ["sheet.json", "sheet.yaml"] {
        let path = write_sheet(dir.path(), name, &sheet);
        assert_eq!(Timesheet::load(&path).unwrap(), sheet, "{name}");
    }
}

#[test]
fn short_and_long_rows_are_padded_on_load() {
    let dir = tempdir().unwrap();
    let long: Vec<String> = (0..40).map(|_| "\"8\"".to_string()).collect();
    let json = format!(
        r#"{{
  "header": {{"object_id": null, "object_addr": "a", "department": "d",
             "period": {{"year": 2025, "month": 6}}, "user": "u"}},
  "rows": [
    {{"fio": "Short", "hours": ["8", null, "  "]}},
    {{"fio": "Long", "hours": [{}]}},
    {{"fio": "Missing"}}
  ]
}}"#,
        long.join(",")
    );
    let path = write_file(dir.path(), "padded.json", &json);

    let sheet = Timesheet::load(&path).unwrap();
    assert_eq!(sheet.rows.len(), 3);
    for row in &sheet.rows {
        assert_eq!(row.hours.len(), DAY_SLOTS);
    }
    assert_eq!(sheet.rows[0].hours[0].as_deref(), Some("8"));
    assert_eq!(sheet.rows[0].hours[2], None);
    assert!(sheet.rows[0].hours[3..].iter().all(Option::is_none));
    assert!(sheet.rows[1].hours.iter().all(|c| c.as_deref() == Some("8")));
    assert!(sheet.rows[2].hours.iter().all(Option::is_none));
}

#[test]
fn invalid_month_in_file_is_rejected() {
    let dir = tempdir().unwrap();
    let json = r#"{"header": {"object_addr": "a", "department": "d",
        "period": {"year": 2025, "month": 13}, "user": "u"}, "rows": []}"#;
    let path = write_file(dir.path(), "bad.json", json);
    assert!(Timesheet::load(&path).is_err());
}
