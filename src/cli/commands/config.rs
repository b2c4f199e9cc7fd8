//! Config command handler

use crate::args::ConfigSubcommand;
use course_planner::config::Config;
use course_planner::info;
use std::io::{self, Write};

/// Dispatch config subcommands
///
/// # Errors
/// Returns a printable message if a key is unknown, a value is invalid, or saving fails
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
///
/// # Errors
/// Returns a message if the key is unknown
pub fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), String> {
    if let Some(k) = key {
        let value = config
            .get(&k)
            .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
        println!("{value}");
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
    Ok(())
}

/// Handle the config set subcommand
///
/// # Errors
/// Returns a message if the key or value is rejected or the file cannot be written
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config {key} set to {value}");
    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Handle the config unset subcommand
///
/// # Errors
/// Returns a message if the key is unknown or the file cannot be written
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Reset {key} to default");
    Ok(())
}

/// Handle the config reset subcommand
///
/// # Errors
/// Returns a message if the config file cannot be removed
pub fn handle_config_reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if is_confirmation(&response) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn is_confirmation(response: &str) -> bool {
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_answers() {
        assert!(is_confirmation("y\n"));
        assert!(is_confirmation("YES"));
        assert!(!is_confirmation("n"));
        assert!(!is_confirmation(""));
    }

    #[test]
    fn test_get_unknown_key() {
        let config = Config::default();
        assert!(handle_config_get(&config, Some("database".to_string())).is_err());
        assert!(handle_config_get(&config, Some("catalog".to_string())).is_ok());
    }
}
