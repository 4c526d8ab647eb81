use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::errors::RoutineError;
use crate::models::{EventDraft, Notice, RoutineDay, RoutineEvent};
use crate::utils::format_date;

pub fn events_on(events: &[RoutineEvent], date: NaiveDate) -> Vec<&RoutineEvent> {
    events.iter().filter(|e| e.date == date).collect()
}

/// Days of the given month that carry at least one event.
pub fn event_days(events: &[RoutineEvent], year: i32, month: u32) -> BTreeSet<NaiveDate> {
    events
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .map(|e| e.date)
        .collect()
}

/// Validates a draft and builds the event that would be appended to `events`.
/// Ids continue from the current list length.
pub fn add_event(events: &[RoutineEvent], draft: EventDraft) -> Result<RoutineEvent, RoutineError> {
    let Some(date) = draft.date else {
        return Err(RoutineError::MissingDateOrTitle);
    };
    if draft.title.trim().is_empty() {
        return Err(RoutineError::MissingDateOrTitle);
    }

    Ok(RoutineEvent {
        id: events.len() as u32 + 1,
        date,
        kind: draft.kind,
        title: draft.title,
        description: draft.description,
    })
}

pub fn added_notice(event: &RoutineEvent) -> Notice {
    Notice::info(
        "Evento adicionado",
        format!("{} foi adicionado ao calendário.", event.title),
    )
}

pub fn rejected_notice(error: &RoutineError) -> Notice {
    Notice::error("Erro", error.to_string())
}

pub fn day_heading(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("Eventos para {}", format_date(date)),
        None => "Selecione uma data".to_string(),
    }
}

pub fn routine_day(events: &[RoutineEvent], date: Option<NaiveDate>) -> RoutineDay {
    let day_events = date
        .map(|d| events_on(events, d).into_iter().cloned().collect())
        .unwrap_or_default();
    let marked_days = date
        .map(|d| event_days(events, d.year(), d.month()).into_iter().collect())
        .unwrap_or_default();

    RoutineDay {
        date,
        heading: day_heading(date),
        events: day_events,
        marked_days,
    }
}
