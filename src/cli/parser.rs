use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtimesheet
/// CLI application to keep monthly site timesheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A timesheet CLI: parse day-cell notation, keep monthly sheets and compute totals",
    long_about = None
)]
pub struct Cli {
    /// Override the sheets directory (useful for tests or shared folders)
    #[arg(global = true, long = "sheet-dir", value_name = "DIR")]
    pub sheet_dir: Option<String>,

    /// Verbose logging (debug level in the log file)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the sheets directory
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the application log
    Log {
        #[arg(long = "print", help = "Print the application log file")]
        print: bool,

        #[arg(long = "last", value_name = "N", help = "Only the last N lines")]
        last: Option<usize>,
    },

    /// Decode day cells: worked, night and overtime hours
    Parse {
        /// Cell texts, e.g. 8/2(1/1) or 7:30
        #[arg(required = true, allow_hyphen_values = true)]
        cells: Vec<String>,
    },

    /// Create a new timesheet
    New {
        #[arg(long, value_name = "YYYY-MM", help = "Sheet month (default: current)")]
        period: Option<String>,

        #[arg(long, help = "Department (default: from config)")]
        department: Option<String>,

        #[arg(
            long = "addr",
            required_unless_present = "object_id",
            help = "Object (site) address"
        )]
        addr: Option<String>,

        #[arg(long = "object-id", help = "Object identifier")]
        object_id: Option<String>,

        #[arg(
            long,
            value_name = "CSV",
            help = "Object catalogue to check the address and id against (default: from config)"
        )]
        objects: Option<String>,

        #[arg(long, help = "Owner of the sheet (default: from config)")]
        user: Option<String>,

        #[arg(long, value_name = "CSV", help = "Fill with the department's staff from a roster")]
        roster: Option<String>,

        #[arg(long, value_name = "FILE", help = "Output sheet file (.json or .yaml)")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(
            long = "allow-shared",
            help = "Save even if other users' sheets for the same slot list the employee"
        )]
        allow_shared: bool,
    },

    /// Set one day cell of an employee
    Set {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Employee full name")]
        fio: String,

        #[arg(long, help = "Day of month (1-based)")]
        day: u32,

        /// Cell text; an empty value clears the cell
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        #[arg(
            long = "allow-shared",
            help = "Save even if other users' sheets for the same slot list the employee"
        )]
        allow_shared: bool,
    },

    /// Add employees to a sheet
    Add {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            conflicts_with = "department_all",
            required_unless_present = "department_all"
        )]
        fio: Option<String>,

        #[arg(long, requires = "fio")]
        tbn: Option<String>,

        #[arg(long = "allow-duplicate", requires = "fio")]
        allow_duplicate: bool,

        #[arg(
            long,
            value_name = "CSV",
            help = "Staff roster: with --fio the name must be in the sheet's department"
        )]
        roster: Option<String>,

        #[arg(
            long = "department-all",
            requires = "roster",
            help = "Add every active employee of the sheet's department"
        )]
        department_all: bool,

        #[arg(
            long = "allow-shared",
            help = "Save even if other users' sheets for the same slot list the employee"
        )]
        allow_shared: bool,
    },

    /// Remove employees from a sheet
    Del {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        fio: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Move a sheet to another month
    Period {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "YYYY-MM")]
        period: String,

        #[arg(
            long = "allow-shared",
            help = "Save even if other users' sheets for the same slot list the employee"
        )]
        allow_shared: bool,
    },

    /// Print per-row totals and the sheet summary
    Totals {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Only rows whose name or tbn contains TEXT")]
        filter: Option<String>,
    },

    /// Import an attendance grid from CSV
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "from", value_name = "CSV")]
        from: String,

        #[arg(
            long = "allow-shared",
            help = "Save even if other users' sheets for the same slot list the employee"
        )]
        allow_shared: bool,
    },

    /// Report employees also kept in other users' sheets
    Dups {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "FILE",
            num_args = 1..,
            help = "Sheets to compare with (default: every sheet in the sheets directory)"
        )]
        against: Vec<String>,
    },

    /// Export a sheet with totals
    Export {
        #[arg(long, value_name = "FILE")]
        sheet: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
