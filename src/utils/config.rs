use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{Settings, TimeWindow};

const ENV_CONFIG_PATH: &str = "SIGMA_CONFIG";
const ENV_TIME_ZONE: &str = "SIGMA_TIME_ZONE";
const ENV_DEFAULT_WINDOW: &str = "SIGMA_DEFAULT_WINDOW";
const DEFAULT_CONFIG_FILE: &str = "sigma.json";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn config_path() -> PathBuf {
    env_value(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Reads settings from `path` when it exists, otherwise starts from defaults.
/// Environment overrides are applied in both cases.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let mut settings = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?
    } else {
        log::debug!("No config at {}, using defaults", path.display());
        Settings::default()
    };
    apply_env_defaults(&mut settings);
    Ok(settings)
}

pub fn apply_env_defaults(settings: &mut Settings) {
    if let Some(tz) = env_value(ENV_TIME_ZONE) {
        settings.general.time_zone = tz;
    }
    if let Some(window) = env_value(ENV_DEFAULT_WINDOW) {
        settings.search.default_window = window;
    }
}

/// Window selected when none is given explicitly.
pub fn default_window(settings: &Settings) -> Option<TimeWindow> {
    TimeWindow::from_key(&settings.search.default_window)
}
