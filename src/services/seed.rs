//! Built-in demo data loaded at startup.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{ActionRecord, EventKind, QueryDictionary, RoutineEvent};

const PATIENT_ACTIONS: &[(u32, &str, &str, &str)] = &[
    (1, "2025-04-27", "08:15", "Medicação administrada: Paracetamol 500mg"),
    (2, "2025-04-27", "09:30", "Sinais vitais verificados: Temperatura 36.5°C, Pressão 120/80"),
    (3, "2025-04-27", "12:00", "Alimentação: Almoço completo"),
    (4, "2025-04-27", "14:45", "Fisioterapia realizada: 30 minutos"),
    (5, "2025-04-27", "16:30", "Medicação administrada: Dipirona 1g"),
    (6, "2025-04-27", "18:00", "Alimentação: Janta completa"),
    (7, "2025-04-27", "20:30", "Medicação administrada: Paracetamol 500mg"),
    (8, "2025-04-26", "22:00", "Paciente dormiu"),
    (9, "2025-04-26", "14:30", "Visita médica: Dr. Silva"),
    (10, "2025-04-26", "10:15", "Banho realizado com assistência"),
];

const CANNED_ANSWERS: &[(&str, &str)] = &[
    (
        "quando foi a última medicação",
        "A última medicação foi administrada às 20:30 em 27/04/2025, Paracetamol 500mg.",
    ),
    (
        "quando o paciente comeu",
        "O paciente realizou as refeições às 12:00 (almoço) e às 18:00 (janta) em 27/04/2025.",
    ),
    (
        "quais os sinais vitais",
        "Os últimos sinais vitais registrados foram às 09:30 em 27/04/2025: Temperatura 36.5°C, Pressão 120/80.",
    ),
    (
        "visita médica",
        "A última visita médica foi realizada pelo Dr. Silva às 14:30 em 26/04/2025.",
    ),
];

pub fn patient_actions() -> Vec<ActionRecord> {
    PATIENT_ACTIONS
        .iter()
        .filter_map(|(id, date, time, action)| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
            Some(ActionRecord::new(*id, date, time, *action))
        })
        .collect()
}

pub fn canned_answers() -> QueryDictionary {
    QueryDictionary::from_pairs(CANNED_ANSWERS.iter().copied())
}

pub fn routine_events() -> Vec<RoutineEvent> {
    let event = |id, day, kind, title: &str, description: &str| {
        NaiveDate::from_ymd_opt(2025, 4, day).map(|date| RoutineEvent {
            id,
            date,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        })
    };

    [
        event(1, 28, EventKind::Medico, "Consulta Dr. Santos", "Avaliação geral"),
        event(
            2,
            29,
            EventKind::Dieta,
            "Novo plano alimentar",
            "Dieta balanceada com restrição de sódio",
        ),
        event(
            3,
            30,
            EventKind::Exercicio,
            "Fisioterapia",
            "Exercícios leves para fortalecer membros inferiores",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
