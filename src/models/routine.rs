use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Medico,
    Dieta,
    Exercicio,
}

impl Default for EventKind {
    fn default() -> Self {
        EventKind::Medico
    }
}

impl EventKind {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "medico" => Some(EventKind::Medico),
            "dieta" => Some(EventKind::Dieta),
            "exercicio" => Some(EventKind::Exercicio),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Medico => "Médico",
            EventKind::Dieta => "Dieta",
            EventKind::Exercicio => "Exercício",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Medico => "👨‍⚕️",
            EventKind::Dieta => "🍎",
            EventKind::Exercicio => "🏋️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineEvent {
    pub id: u32,
    pub date: NaiveDate,
    pub kind: EventKind,
    pub title: String,
    pub description: String,
}

/// Contents of the "Adicionar Evento" dialog before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub date: Option<NaiveDate>,
    pub kind: EventKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineDay {
    pub date: Option<NaiveDate>,
    pub heading: String,
    pub events: Vec<RoutineEvent>,
    pub marked_days: Vec<NaiveDate>,
}
