//! CLI argument definitions for the course planner

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_planner::config::ConfigOverrides;
use course_planner::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `hours_per_day`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Reset one configuration value to its default.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CatalogSubcommand {
    /// Search course codes, names and instructors (case-insensitive).
    Search {
        /// Text to look for
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// List all departments.
    Departments,
    /// List the courses of one department.
    Department {
        /// Exact department name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Show every detail of one course.
    Show {
        /// Course id (its code)
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Courses making up the in-session selection
#[derive(Debug, Clone, clap::Args)]
pub struct SelectionArgs {
    /// Course ids to add, in order
    #[arg(short, long = "add", value_name = "ID", num_args = 1..)]
    pub add: Vec<String>,

    /// Course id to preview as if hovered
    #[arg(long, value_name = "ID")]
    pub hover: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Browse the course catalog.
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },
    /// Render the weekly grid for a selection and list its conflicts.
    Schedule {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the report into the configured reports directory
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Report title
        #[arg(long, value_name = "TITLE", default_value = "Weekly Schedule")]
        title: String,
    },
    /// Show which courses occupy one grid cell.
    Cell {
        /// Day, abbreviated (Mon) or full (Monday)
        #[arg(value_name = "DAY")]
        day: String,

        /// Period ordinal (1-8 on the default grid)
        #[arg(value_name = "HOUR")]
        hour: u32,

        #[command(flatten)]
        selection: SelectionArgs,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseplanner",
    about = "Weekly course planner with schedule conflict detection",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Course catalog JSON file for this run
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog path
    #[arg(long = "config-catalog", value_name = "PATH")]
    pub config_catalog: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--catalog` takes precedence over `--config-catalog` when both are given.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            catalog: self
                .catalog
                .as_ref()
                .or(self.config_catalog.as_ref())
                .map(path_string),
            reports_dir: self.config_reports_dir.as_ref().map(path_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            catalog: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_catalog: None,
            config_reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.catalog.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_catalog_flag_precedence() {
        let mut args = cli(Command::Config { subcommand: None });
        args.config_catalog = Some(PathBuf::from("/long/catalog.json"));
        assert_eq!(
            args.to_config_overrides().catalog,
            Some("/long/catalog.json".to_string())
        );

        args.catalog = Some(PathBuf::from("/short/catalog.json"));
        assert_eq!(
            args.to_config_overrides().catalog,
            Some("/short/catalog.json".to_string())
        );
    }

    #[test]
    fn test_parse_schedule_command() {
        let args = Cli::try_parse_from([
            "courseplanner",
            "--catalog",
            "c.json",
            "schedule",
            "--add",
            "CS101",
            "MATH201",
            "--hover",
            "PHYS110",
            "--format",
            "html",
        ])
        .expect("valid arguments");

        match args.command {
            Command::Schedule {
                selection, format, ..
            } => {
                assert_eq!(selection.add, vec!["CS101", "MATH201"]);
                assert_eq!(selection.hover.as_deref(), Some("PHYS110"));
                assert_eq!(format, "html");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_cell_command() {
        let args = Cli::try_parse_from(["courseplanner", "cell", "Wed", "5", "-a", "CS101"])
            .expect("valid arguments");
        match args.command {
            Command::Cell {
                day,
                hour,
                selection,
            } => {
                assert_eq!(day, "Wed");
                assert_eq!(hour, 5);
                assert_eq!(selection.add, vec!["CS101"]);
                assert!(selection.hover.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
