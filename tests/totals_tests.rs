mod common;
use common::{cells_with_value_at, period, sample_sheet};
use proptest::prelude::*;
use rtimesheet::core::totals::{RowTotals, calc_row_totals, is_summary_label, summarize};
use rtimesheet::models::timesheet::{DayCells, pad_cells};

fn cells(values: &[&str]) -> DayCells {
    pad_cells(values.iter().map(|v| Some(v.to_string())))
}

#[test]
fn empty_row_yields_zero_totals() {
    let empty: DayCells = Default::default();
    let t = calc_row_totals(&empty, period(2025, 6));
    assert_eq!(t, RowTotals::default());
    assert_eq!(t.days, 0);
    assert_eq!(t.hours, 0.0);
}

#[test]
fn sums_all_quantities() {
    let row = cells(&["8", "8/2(1/1)", "", "7:30", "(2)", "abc"]);
    let t = calc_row_totals(&row, period(2025, 6));

    assert_eq!(t.days, 3);
    assert!((t.hours - 25.5).abs() < 1e-9);
    assert!((t.night_hours - 2.0).abs() < 1e-9);
    assert!((t.overtime_day - 3.0).abs() < 1e-9);
    assert!((t.overtime_night - 1.0).abs() < 1e-9);
}

#[test]
fn day_31_counts_only_in_long_months() {
    let row = pad_cells(cells_with_value_at(30, "8"));

    let july = calc_row_totals(&row, period(2025, 7));
    assert_eq!(july.days, 1);
    assert_eq!(july.hours, 8.0);

    for (y, m) in [(2025, 6), (2025, 2), (2024, 2), (2025, 11)] {
        let t = calc_row_totals(&row, period(y, m));
        assert_eq!(t, RowTotals::default(), "{y}-{m}");
    }
}

#[test]
fn leap_day_counts_only_in_leap_years() {
    let row = pad_cells(cells_with_value_at(28, "8"));
    assert_eq!(calc_row_totals(&row, period(2024, 2)).days, 1);
    assert_eq!(calc_row_totals(&row, period(2023, 2)).days, 0);
}

#[test]
fn zero_hours_do_not_count_as_a_day_but_overtime_does() {
    let t = calc_row_totals(&cells(&["0(2)", "0"]), period(2025, 6));
    assert_eq!(t.days, 0);
    assert_eq!(t.hours, 0.0);
    assert_eq!(t.overtime_day, 2.0);
}

#[test]
fn night_shift_counts_as_worked_day() {
    let t = calc_row_totals(&cells(&["0/3"]), period(2025, 6));
    assert_eq!(t.days, 1);
    assert_eq!(t.hours, 3.0);
    assert_eq!(t.night_hours, 3.0);
}

#[test]
fn aggregation_is_idempotent() {
    let row = cells(&["8,1", "7:20", "8/2/1(0,3/0,7)", "0:10"]);
    let p = period(2025, 3);
    let a = calc_row_totals(&row, p);
    let b = calc_row_totals(&row, p);
    assert_eq!(a.hours.to_bits(), b.hours.to_bits());
    assert_eq!(a.night_hours.to_bits(), b.night_hours.to_bits());
    assert_eq!(a.overtime_day.to_bits(), b.overtime_day.to_bits());
    assert_eq!(a.overtime_night.to_bits(), b.overtime_night.to_bits());
    assert_eq!(a.days, b.days);
}

#[test]
fn rounding_is_presentation_only() {
    let row = cells(&["0:20", "0:20", "0:20"]);
    let t = calc_row_totals(&row, period(2025, 6));
    assert!((t.hours - 1.0).abs() < 1e-9);
    assert_eq!(t.rounded().hours, 1.0);

    let r = calc_row_totals(&cells(&["0:10"]), period(2025, 6)).rounded();
    assert_eq!(r.hours, 0.17);
}

#[test]
fn sheet_summary_adds_rows() {
    let sheet = sample_sheet("ivanov");
    let s = summarize(&sheet);
    assert_eq!(s.employees, 2);
    // Иванов: 8 + 10 + 7.5 over 3 days; Петров: (2) + 0/3 over 1 day
    assert_eq!(s.totals.days, 4);
    assert!((s.totals.hours - 28.5).abs() < 1e-9);
    assert!((s.totals.night_hours - 5.0).abs() < 1e-9);
    assert!((s.totals.overtime_day - 3.0).abs() < 1e-9);
    assert!((s.totals.overtime_night - 1.0).abs() < 1e-9);
}

#[test]
fn summary_label_is_recognised() {
    let s = summarize(&sample_sheet("ivanov"));
    assert_eq!(s.label(), "TOTAL (2 employees)");
    assert!(is_summary_label(&s.label()));
    assert!(is_summary_label(" TOTAL (0 employees) "));
    assert!(!is_summary_label("TOTAL ( employees)"));
    assert!(!is_summary_label("Тоталов Иван"));
}

fn valid_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..24).prop_map(|h| h.to_string()),
        (0u32..24, 0u32..100).prop_map(|(h, f)| format!("{h},{f}")),
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h}:{m:02}")),
        (0u32..16, 0u32..8).prop_map(|(d, n)| format!("{d}/{n}")),
        (0u32..16, 0u32..8, 0u32..4, 0u32..4).prop_map(|(d, n, a, b)| format!("{d}/{n}({a}/{b})")),
        (0u32..4).prop_map(|a| format!("({a})")),
    ]
}

proptest! {
    #[test]
    fn adding_a_valid_cell_never_decreases_totals(
        existing in proptest::collection::vec(proptest::option::of(valid_cell()), 0..31),
        slot in 0usize..31,
        value in valid_cell(),
        month in 1u32..=12,
    ) {
        let p = period(2025, month);
        let mut before = pad_cells(existing);
        before[slot] = None;
        let mut after = before.clone();
        after[slot] = Some(value);

        let a = calc_row_totals(&before, p);
        let b = calc_row_totals(&after, p);

        prop_assert!(b.days >= a.days);
        prop_assert!(b.hours >= a.hours);
        prop_assert!(b.night_hours >= a.night_hours);
        prop_assert!(b.overtime_day >= a.overtime_day);
        prop_assert!(b.overtime_night >= a.overtime_night);
    }
}
