pub mod calendar;
pub mod config;
pub mod duplicates;
pub mod fio;
pub mod import;
pub mod log;
pub mod notation;
pub mod objects;
pub mod roster;
pub mod sheet;
pub mod totals;

pub use notation::{is_well_formed, parse_cell, parse_hours_and_night, parse_overtime};
pub use totals::{RowTotals, calc_row_totals};
