use std::{env, fs};

use tracing::info;

use super::EngineConfig;
use crate::error::{CoreError, Result};

pub const ENGINE_CONFIG_PATH_ENV: &str = "FW_ENGINE_CONFIG_PATH";

/// Load the engine config named by `FW_ENGINE_CONFIG_PATH`, or defaults when
/// the variable is unset or blank.
pub fn config_from_env() -> Result<EngineConfig> {
    let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
        return Ok(EngineConfig::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(EngineConfig::default());
    }

    load_config_file(path)
}

pub(crate) fn load_config_file(path: &str) -> Result<EngineConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "failed to read engine config from {ENGINE_CONFIG_PATH_ENV}='{path}': {e}"
        ))
    })?;

    let config = EngineConfig::from_json(&content).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "failed to parse engine config from {ENGINE_CONFIG_PATH_ENV}='{path}': {e}"
        ))
    })?;

    config.validate()?;
    info!(path, ?config, "engine config loaded");
    Ok(config)
}
