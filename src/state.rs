use crate::models::{ActionRecord, CameraConfig, PatientInfo, QueryDictionary, RoutineEvent, Settings};
use crate::services::seed;

/// Everything the dashboard pages read and write, owned by the caller and
/// handed to each command.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub actions: Vec<ActionRecord>,
    pub answers: QueryDictionary,
    pub events: Vec<RoutineEvent>,
    pub patient: Option<PatientInfo>,
    pub camera: CameraConfig,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let camera = settings.monitoring.clone();
        Self {
            settings,
            actions: seed::patient_actions(),
            answers: seed::canned_answers(),
            events: seed::routine_events(),
            patient: None,
            camera,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
