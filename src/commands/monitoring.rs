use crate::errors::SigmaError;
use crate::models::{CameraConfig, ImageQuality, MonitoringView, Notice};
use crate::services::monitoring;
use crate::state::AppState;

pub fn get_monitoring_view(state: &AppState) -> MonitoringView {
    monitoring::view(&state.camera)
}

/// Applies the fields given; the rest keep their current values.
pub fn configure_camera(
    state: &mut AppState,
    ip: Option<String>,
    name: Option<String>,
    quality: Option<&str>,
) -> Result<Notice, String> {
    let quality = match quality {
        Some(key) => ImageQuality::from_key(key).ok_or_else(|| {
            SigmaError::UnknownOption {
                field: "image quality",
                value: key.to_string(),
            }
            .to_string()
        })?,
        None => state.camera.quality,
    };

    let config = CameraConfig {
        ip: ip.unwrap_or_else(|| state.camera.ip.clone()),
        name: name.unwrap_or_else(|| state.camera.name.clone()),
        quality,
    };
    Ok(monitoring::save_config(&mut state.camera, config))
}

pub fn capture_snapshot(state: &AppState) -> Notice {
    monitoring::capture(&state.camera)
}
