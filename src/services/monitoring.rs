use crate::models::{CameraConfig, MonitoringView, Notice};

pub fn view(config: &CameraConfig) -> MonitoringView {
    MonitoringView {
        heading: format!("Monitoramento - {}", config.name),
        caption: format!("Visualização da câmera {}", config.name),
        details: format!("IP: {} | Qualidade: {}", config.ip, config.quality.label()),
    }
}

/// Replaces the active configuration. Values are taken as entered.
pub fn save_config(current: &mut CameraConfig, config: CameraConfig) -> Notice {
    *current = config;
    Notice::info(
        "Configuração salva",
        format!("Câmera {} configurada com sucesso.", current.name),
    )
}

pub fn capture(config: &CameraConfig) -> Notice {
    log::info!("Snapshot requested from camera {} ({})", config.name, config.ip);
    Notice::info("Captura realizada", "Imagem da câmera foi salva com sucesso.")
}
