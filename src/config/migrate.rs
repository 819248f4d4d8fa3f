//! Configuration file checks and migrations.
//!
//! Older config files predate some keys (`period_anchor`, `clock`, ...). Serde
//! fills those with defaults at load time; these helpers report them and can
//! write them back so the file documents every setting.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of a fully populated configuration, in file order.
fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;
    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(conf_file: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(conf_file)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {}", conf_file.display(), e)))?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::ConfigLoad(format!(
            "{}: top level is not a mapping",
            conf_file.display()
        ))),
        Err(e) => Err(AppError::ConfigLoad(format!("{}: {}", conf_file.display(), e))),
    }
}

/// List the keys missing from the config file at `conf_file`.
pub fn missing_fields(conf_file: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(conf_file)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Existing values are kept.
/// Returns the keys that were added.
pub fn migrate_config(conf_file: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(conf_file)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        info("Configuration is up to date, nothing to migrate.");
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(conf_file, serialized).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));

    Ok(added)
}
