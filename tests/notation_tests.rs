use rtimesheet::core::notation::{
    is_well_formed, parse_cell, parse_hours_and_night, parse_overtime, parse_segment,
};

fn approx(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|x| (x - b).abs() < 1e-9)
}

#[test]
fn blank_cells_give_no_values() {
    for raw in ["", " ", "\t", "   \n"] {
        assert_eq!(parse_hours_and_night(raw), (None, None), "{raw:?}");
        assert_eq!(parse_overtime(raw), (None, None), "{raw:?}");
    }
}

#[test]
fn plain_hours() {
    assert_eq!(parse_hours_and_night("8"), (Some(8.0), Some(0.0)));
    assert_eq!(parse_overtime("8"), (None, None));
}

#[test]
fn comma_and_dot_decimals() {
    assert_eq!(parse_hours_and_night("8,25"), (Some(8.25), Some(0.0)));
    assert_eq!(parse_hours_and_night("8.25"), (Some(8.25), Some(0.0)));
}

#[test]
fn time_notation() {
    assert_eq!(parse_hours_and_night("7:30"), (Some(7.5), Some(0.0)));
    assert!(approx(parse_segment("0:20"), 1.0 / 3.0));
}

#[test]
fn night_segments_add_to_worked() {
    assert_eq!(parse_hours_and_night("8/2"), (Some(10.0), Some(2.0)));
    assert_eq!(parse_hours_and_night("8/2/1"), (Some(11.0), Some(3.0)));
}

#[test]
fn overtime_group() {
    assert_eq!(parse_hours_and_night("8(2)"), (Some(8.0), Some(0.0)));
    assert_eq!(parse_overtime("8(2)"), (Some(2.0), Some(0.0)));

    assert_eq!(parse_hours_and_night("8/2(1/1)"), (Some(10.0), Some(2.0)));
    assert_eq!(parse_overtime("8/2(1/1)"), (Some(1.0), Some(1.0)));
}

#[test]
fn overtime_only_cell() {
    assert_eq!(parse_hours_and_night("(2)"), (None, None));
    assert_eq!(parse_overtime("(2)"), (Some(2.0), Some(0.0)));
}

#[test]
fn zero_is_a_record_not_an_absence() {
    assert_eq!(parse_hours_and_night("0"), (Some(0.0), Some(0.0)));
    assert_eq!(parse_hours_and_night("0/3"), (Some(3.0), Some(3.0)));
}

#[test]
fn empty_segments_are_skipped() {
    assert_eq!(parse_hours_and_night("8/"), (Some(8.0), Some(0.0)));
    assert_eq!(parse_hours_and_night("8//2"), (Some(10.0), Some(2.0)));
}

#[test]
fn malformed_cells_give_none() {
    assert_eq!(parse_hours_and_night("abc"), (None, None));
    assert_eq!(parse_hours_and_night("8/x"), (None, None));
    assert_eq!(parse_hours_and_night("-8"), (None, None));
    assert_eq!(parse_hours_and_night("8,"), (None, None));
    assert_eq!(parse_hours_and_night("８"), (None, None));
}

#[test]
fn malformed_overtime_keeps_worked_hours() {
    assert_eq!(parse_hours_and_night("8(x)"), (Some(8.0), Some(0.0)));
    assert_eq!(parse_overtime("8(x)"), (None, None));
}

#[test]
fn overtime_group_edge_cases() {
    // unclosed group
    assert_eq!(parse_overtime("8(2"), (None, None));
    assert_eq!(parse_overtime("8()"), (None, None));
    assert_eq!(parse_overtime("8(/)"), (Some(0.0), Some(0.0)));
    assert_eq!(parse_overtime("8(/2)"), (Some(0.0), Some(2.0)));
    assert_eq!(parse_overtime("8(1/2/3)"), (None, None));
    assert_eq!(parse_overtime("8( 1,5 / 0:30 )"), (Some(1.5), Some(0.5)));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_hours_and_night("  8 / 2 "), (Some(10.0), Some(2.0)));
}

#[test]
fn parse_cell_combines_both_readings() {
    let r = parse_cell("8/2(1/1)");
    assert_eq!(r.worked, Some(10.0));
    assert_eq!(r.night, Some(2.0));
    assert_eq!(r.overtime_day, Some(1.0));
    assert_eq!(r.overtime_night, Some(1.0));
    assert!(!r.is_empty());

    assert!(parse_cell("").is_empty());
    assert!(parse_cell("abc").is_empty());
}

#[test]
fn well_formed_cells() {
    for cell in ["8", "7:30", "8/2(1/1)", "(2)", "0/3", "8/", "(/)"] {
        assert!(is_well_formed(cell), "{cell}");
    }
    for cell in ["", "  ", "abc", "8(x)", "8(", "8()", "8/x(1)", "(1/2/3)"] {
        assert!(!is_well_formed(cell), "{cell}");
    }
    // A bad overtime group still leaves the hours readable.
    assert_eq!(parse_cell("8(x)").worked, Some(8.0));
}
