use crate::cli::output::Output;
use crate::cli::ConfigAction;
use crate::config::{user_config_path, Settings};
use crate::errors::Result;
use std::path::Path;

/// Handle configuration commands against the user settings file
pub fn run(action: ConfigAction, effective: &Settings) -> Result<i32> {
    let config_file = user_config_path()?;

    match action {
        ConfigAction::Set { key, value } => set_config_value(&config_file, &key, &value),
        ConfigAction::Get { key } => get_config_value(effective, &key),
        ConfigAction::List => list_config_values(effective),
        ConfigAction::Path => {
            Output::line(config_file.display());
            Ok(0)
        }
    }
}

fn set_config_value(config_file: &Path, key: &str, value: &str) -> Result<i32> {
    let mut settings = Settings::load_from_file(config_file)?;
    settings.set_value(key, value)?;
    settings.validate()?;
    settings.save_to_file(config_file)?;

    Output::success(format!("Configuration updated: {key} = {value}"));
    Output::info(format!("Saved to {}", config_file.display()));
    Ok(0)
}

fn get_config_value(settings: &Settings, key: &str) -> Result<i32> {
    let value = settings.get_value(key)?;
    Output::line(display_value(&value));
    Ok(0)
}

fn list_config_values(settings: &Settings) -> Result<i32> {
    Output::header("Effective configuration");
    for key in Settings::KEYS {
        let value = settings.get_value(key)?;
        Output::line(format!("  {key} = {}", display_value(&value)));
    }
    Ok(0)
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        "(not set)".to_string()
    } else {
        value.to_string()
    }
}
