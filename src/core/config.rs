//! Configuration module for the course planner

use crate::core::grid::WeekLayout;
use crate::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the planner's config directory in path-like values
const DIR_VARIABLE: &str = "$COURSE_PLANNER";

/// Latest clock hour a period label may show
const MAX_CLOCK_HOUR: u32 = 24;

const fn default_clock_offset() -> u32 {
    8
}

const fn default_hours_per_day() -> u32 {
    WeekLayout::DEFAULT_HOURS
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Course catalog JSON file
    #[serde(default)]
    pub catalog: String,
    /// Directory for rendered schedule reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Weekly grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Added to a period ordinal to get its clock hour (period 1 -> 9:00)
    #[serde(default = "default_clock_offset")]
    pub clock_offset: u32,
    /// Number of periods per day shown on the grid
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,
    /// Show Saturday and Sunday columns
    #[serde(default)]
    pub include_weekend: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            clock_offset: default_clock_offset(),
            hours_per_day: default_hours_per_day(),
            include_weekend: false,
        }
    }
}

impl ScheduleConfig {
    /// Grid layout described by this config
    #[must_use]
    pub fn layout(&self) -> WeekLayout {
        WeekLayout::new(self.hours_per_day, self.include_weekend)
    }

    /// Wall-clock label for a period ordinal, e.g. `1 -> "9:00"`
    #[must_use]
    pub fn clock_label(&self, hour: u32) -> String {
        format!("{}:00", hour.saturating_add(self.clock_offset))
    }

    /// Check that every period maps to a clock hour within one day
    ///
    /// # Errors
    /// Returns a message if `hours_per_day` is zero or the last period ends after 24:00
    pub fn validate(&self) -> Result<(), String> {
        if self.hours_per_day == 0 {
            return Err("'hours_per_day' must be at least 1".to_string());
        }
        match self.clock_offset.checked_add(self.hours_per_day) {
            Some(last) if last <= MAX_CLOCK_HOUR => Ok(()),
            _ => Err(format!(
                "'clock_offset' ({}) + 'hours_per_day' ({}) must not exceed {MAX_CLOCK_HOUR}",
                self.clock_offset, self.hours_per_day
            )),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Grid settings
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog path
    pub catalog: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseplanner`
    /// - macOS: `~/Library/Application Support/courseplanner`
    /// - Windows: `%APPDATA%\courseplanner`
    #[must_use]
    pub fn get_planner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseplanner")
    }

    /// Get the user config file path (`dconfig.toml` for debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_planner_dir().join(CONFIG_FILE_NAME)
    }

    /// Fill empty string fields from `defaults`.
    ///
    /// # Returns
    /// `true` if any field changed
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (value, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.catalog, &defaults.paths.catalog),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ] {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }

        if let Err(e) = self.schedule.validate() {
            warn!("Invalid [schedule] settings, using defaults: {e}");
            self.schedule.clone_from(&defaults.schedule);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides for this run only
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_planner_dir();
            value.replace(DIR_VARIABLE, &dir.to_string_lossy())
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string, expanding `$COURSE_PLANNER`
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load from the user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load from `config_file`, creating it from defaults when missing.
    ///
    /// Missing fields are merged in from defaults and written back. Falls back
    /// to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        let Some(mut config) = fs::read_to_string(config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok())
        else {
            return defaults;
        };

        if config.merge_defaults(&defaults) {
            let _ = config.save_to(config_file);
        }
        config
    }

    /// Save to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save as pretty TOML to `config_file`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `reports_dir`,
    /// `clock_offset`, `hours_per_day`, `include_weekend` (dashes also accepted).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" => Some(self.paths.catalog.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "clock_offset" | "clock-offset" => Some(self.schedule.clock_offset.to_string()),
            "hours_per_day" | "hours-per-day" => Some(self.schedule.hours_per_day.to_string()),
            "include_weekend" | "include-weekend" => {
                Some(self.schedule.include_weekend.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "catalog" => self.paths.catalog = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "clock_offset" | "clock-offset" => {
                let schedule = ScheduleConfig {
                    clock_offset: parse_u32(key, value)?,
                    ..self.schedule.clone()
                };
                schedule.validate()?;
                self.schedule = schedule;
            }
            "hours_per_day" | "hours-per-day" => {
                let schedule = ScheduleConfig {
                    hours_per_day: parse_u32(key, value)?,
                    ..self.schedule.clone()
                };
                schedule.validate()?;
                self.schedule = schedule;
            }
            "include_weekend" | "include-weekend" => {
                self.schedule.include_weekend = parse_bool(key, value)?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single key to its value in `defaults`
    ///
    /// # Errors
    /// Returns an error if the key is not recognized, or if the restored grid
    /// value no longer fits the day alongside the other `[schedule]` settings.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let previous = self.schedule.clone();
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "clock_offset" | "clock-offset" => {
                self.schedule.clock_offset = defaults.schedule.clock_offset;
            }
            "hours_per_day" | "hours-per-day" => {
                self.schedule.hours_per_day = defaults.schedule.hours_per_day;
            }
            "include_weekend" | "include-weekend" => {
                self.schedule.include_weekend = defaults.schedule.include_weekend;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        if let Err(e) = self.schedule.validate() {
            self.schedule = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Delete the user config file so the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

fn parse_u32(key: &str, value: &str) -> Result<u32, String> {
    value
        .parse::<u32>()
        .map_err(|_| format!("Invalid number for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[schedule]")?;
        writeln!(f, "  clock_offset = {}", self.schedule.clock_offset)?;
        writeln!(f, "  hours_per_day = {}", self.schedule.hours_per_day)?;
        writeln!(f, "  include_weekend = {}", self.schedule.include_weekend)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_label() {
        let schedule = ScheduleConfig::default();
        assert_eq!(schedule.clock_label(1), "9:00");
        assert_eq!(schedule.clock_label(8), "16:00");
    }

    #[test]
    fn test_layout_from_schedule() {
        let schedule = ScheduleConfig {
            clock_offset: 7,
            hours_per_day: 10,
            include_weekend: true,
        };
        let layout = schedule.layout();
        assert_eq!(layout.days.len(), 7);
        assert_eq!(layout.hours, 1..=10);
    }

    #[test]
    fn test_hours_per_day_rejects_zero() {
        let mut config = Config::from_defaults();
        assert!(config.set("hours_per_day", "0").is_err());
        assert!(config.set("hours-per-day", "many").is_err());
        assert!(config.set("hours-per-day", "6").is_ok());
        assert_eq!(config.schedule.hours_per_day, 6);
    }

    #[test]
    fn test_clock_offset_bounded_by_day() {
        let mut config = Config::from_defaults();
        assert!(config.set("clock_offset", "4294967295").is_err());
        assert!(config.set("clock_offset", "17").is_err());
        assert_eq!(config.schedule.clock_offset, 8);

        assert!(config.set("clock_offset", "16").is_ok());
        assert_eq!(config.schedule.clock_label(8), "24:00");
    }

    #[test]
    fn test_hours_per_day_bounded_by_day() {
        let mut config = Config::from_defaults();
        assert!(config.set("hours_per_day", "4000000000").is_err());
        assert!(config.set("hours_per_day", "17").is_err());
        assert_eq!(config.schedule.hours_per_day, 8);

        config.set("clock_offset", "0").expect("offset 0 fits");
        assert!(config.set("hours_per_day", "24").is_ok());
    }

    #[test]
    fn test_unset_keeps_schedule_within_day() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();
        config.set("clock_offset", "0").expect("offset 0 fits");
        config.set("hours_per_day", "20").expect("20 hours fit");

        assert!(config.unset("clock_offset", &defaults).is_err());
        assert_eq!(config.schedule.clock_offset, 0);
        assert!(config.unset("hours_per_day", &defaults).is_ok());
        assert!(config.unset("clock_offset", &defaults).is_ok());
    }

    #[test]
    fn test_clock_label_saturates() {
        let schedule = ScheduleConfig {
            clock_offset: u32::MAX,
            hours_per_day: 8,
            include_weekend: false,
        };
        assert_eq!(schedule.clock_label(1), format!("{}:00", u32::MAX));
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_merge_defaults_replaces_out_of_range_schedule() {
        let mut config = Config::from_toml(
            "[logging]\nlevel = \"warn\"\n[schedule]\nclock_offset = 20\nhours_per_day = 4000000000\n",
        )
        .expect("valid TOML");
        let defaults = Config::from_defaults();

        assert!(config.merge_defaults(&defaults));
        assert_eq!(config.schedule.clock_offset, defaults.schedule.clock_offset);
        assert_eq!(config.schedule.hours_per_day, defaults.schedule.hours_per_day);
    }
}
