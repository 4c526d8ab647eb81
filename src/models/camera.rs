use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageQuality {
    Low,
    Medium,
    High,
}

impl Default for ImageQuality {
    fn default() -> Self {
        ImageQuality::Medium
    }
}

impl ImageQuality {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "low" => Some(ImageQuality::Low),
            "medium" => Some(ImageQuality::Medium),
            "high" => Some(ImageQuality::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageQuality::Low => "Baixa",
            ImageQuality::Medium => "Média",
            ImageQuality::High => "Alta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub ip: String,
    pub name: String,
    #[serde(default)]
    pub quality: ImageQuality,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            ip: "192.168.1.100".to_string(),
            name: "Câmera do Quarto".to_string(),
            quality: ImageQuality::Medium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringView {
    pub heading: String,
    pub caption: String,
    pub details: String,
}
