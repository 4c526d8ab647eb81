use crate::models::QueryResult;
use crate::services::query_resolver;
use crate::state::AppState;

pub fn execute_query(state: &AppState, query: &str) -> Result<QueryResult, String> {
    let answer = query_resolver::resolve(query, &state.answers);
    let matched_trigger = query_resolver::resolve_entry(query, &state.answers).map(|e| e.trigger.clone());

    Ok(QueryResult {
        query: query.to_string(),
        matched_trigger,
        answer: answer.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_query_reports_trigger() {
        let state = AppState::default();
        let result = execute_query(&state, "Houve visita médica ontem?").unwrap();
        assert_eq!(result.matched_trigger.as_deref(), Some("visita médica"));
        assert!(result.answer.contains("Dr. Silva"));
    }

    #[test]
    fn test_execute_query_fallback() {
        let state = AppState::default();
        let result = execute_query(&state, "xyz não existe").unwrap();
        assert!(result.matched_trigger.is_none());
        assert_eq!(result.answer, query_resolver::FALLBACK_ANSWER);
    }

    #[test]
    fn test_execute_empty_query_gets_fallback() {
        let state = AppState::default();
        let result = execute_query(&state, "").unwrap();
        assert!(result.matched_trigger.is_none());
        assert_eq!(result.answer, query_resolver::FALLBACK_ANSWER);
    }
}
