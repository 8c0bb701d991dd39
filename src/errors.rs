//! Unified application error type.
//! All modules (core, models, export, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.
//!
//! Malformed day-cell notation is NOT an error: the notation parser degrades
//! to `None` instead (see `core::notation`).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Period / grid errors
    // ---------------------------
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid day {day} for period {period} (valid: 1..={max})")]
    InvalidDay { day: u32, period: String, max: u32 },

    // ---------------------------
    // Sheet logic errors
    // ---------------------------
    #[error("Employee not found in timesheet: {0}")]
    EmployeeNotFound(String),

    #[error("Employee already present in timesheet: {0}")]
    DuplicateEmployee(String),

    #[error("Employees kept in other users' sheets: {0}")]
    DuplicatesFound(usize),

    #[error("Invalid employee: {0}")]
    InvalidEmployee(String),

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Object catalogue error: {0}")]
    Objects(String),

    #[error("Invalid object: {0}")]
    InvalidObject(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
