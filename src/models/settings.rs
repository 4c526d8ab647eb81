use serde::{Deserialize, Serialize};

use super::CameraConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub monitoring: CameraConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            search: SearchSettings::default(),
            monitoring: CameraConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
        }
    }
}

fn default_time_zone() -> String {
    "America/Sao_Paulo".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Selector key of the window shown when the search page opens.
    pub default_window: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_window: "day".to_string(),
        }
    }
}
