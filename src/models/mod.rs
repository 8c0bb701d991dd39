pub mod employee;
pub mod period;
pub mod site_object;
pub mod timesheet;
