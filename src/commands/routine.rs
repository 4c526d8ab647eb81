use chrono::NaiveDate;

use crate::errors::SigmaError;
use crate::models::{EventDraft, EventKind, Notice, RoutineDay};
use crate::services::routine_planner;
use crate::state::AppState;
use crate::utils::{clock, parse_date};

/// The given day, or today in the configured time zone when none is given.
fn selected_date(state: &AppState, date: Option<&str>) -> Result<NaiveDate, String> {
    match date {
        Some(raw) => parse_date(raw).map_err(|e| e.to_string()),
        None => Ok(clock::local_now(&state.settings.general.time_zone).date()),
    }
}

pub fn get_routine_day(state: &AppState, date: Option<&str>) -> Result<RoutineDay, String> {
    let date = selected_date(state, date)?;
    Ok(routine_planner::routine_day(&state.events, Some(date)))
}

/// Adds an event to the in-memory calendar, on today when no date is given.
/// A rejected draft still yields a destructive notice so the caller can show it.
pub fn add_routine_event(
    state: &mut AppState,
    date: Option<&str>,
    kind: &str,
    title: &str,
    description: &str,
) -> Result<Notice, String> {
    let date = selected_date(state, date)?;
    let kind = EventKind::from_key(kind).ok_or_else(|| {
        SigmaError::UnknownOption {
            field: "event kind",
            value: kind.to_string(),
        }
        .to_string()
    })?;

    let draft = EventDraft {
        date: Some(date),
        kind,
        title: title.to_string(),
        description: description.to_string(),
    };

    match routine_planner::add_event(&state.events, draft) {
        Ok(event) => {
            let notice = routine_planner::added_notice(&event);
            log::info!("Routine event {} added for {}", event.id, event.date);
            state.events.push(event);
            Ok(notice)
        }
        Err(e) => {
            log::warn!("Routine event rejected: {}", e);
            Ok(routine_planner::rejected_notice(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoticeVariant;

    #[test]
    fn test_added_event_shows_on_its_day() {
        let mut state = AppState::default();
        let notice =
            add_routine_event(&mut state, Some("2025-04-28"), "exercicio", "Caminhada", "20 min")
                .unwrap();
        assert_eq!(notice.variant, NoticeVariant::Default);

        let day = get_routine_day(&state, Some("2025-04-28")).unwrap();
        let titles: Vec<&str> = day.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Consulta Dr. Santos", "Caminhada"]);
        assert_eq!(day.heading, "Eventos para 28/04/2025");
    }

    #[test]
    fn test_blank_title_is_destructive_notice() {
        let mut state = AppState::default();
        let notice = add_routine_event(&mut state, Some("2025-04-28"), "dieta", " ", "").unwrap();
        assert_eq!(notice.variant, NoticeVariant::Destructive);
        assert_eq!(state.events.len(), 3);
    }

    #[test]
    fn test_event_without_date_lands_on_today() {
        let mut state = AppState::default();
        let notice = add_routine_event(&mut state, None, "medico", "Retorno", "").unwrap();
        assert_eq!(notice.variant, NoticeVariant::Default);

        let today = get_routine_day(&state, None).unwrap();
        assert!(today.date.is_some());
        assert_ne!(today.heading, "Selecione uma data");
        assert!(today.events.iter().any(|e| e.title == "Retorno" && e.id == 4));
        assert!(today.marked_days.contains(&state.events[3].date));
    }

    #[test]
    fn test_unknown_kind_is_error() {
        let mut state = AppState::default();
        assert!(add_routine_event(&mut state, Some("2025-04-28"), "yoga", "Aula", "").is_err());
    }
}
