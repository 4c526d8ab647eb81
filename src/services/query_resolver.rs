use crate::models::{QueryDictionary, QueryEntry};

pub const FALLBACK_ANSWER: &str =
    "Não encontrei informações específicas sobre essa consulta. Por favor, reformule ou seja mais específico.";

/// Trims and lower-cases a query. Accents are kept as typed.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// First entry, in dictionary order, whose trigger occurs in the normalized
/// query. Earlier entries win over later ones even when a later trigger is a
/// longer or more specific match.
pub fn resolve_entry<'a>(query: &str, dictionary: &'a QueryDictionary) -> Option<&'a QueryEntry> {
    let normalized = normalize_query(query);
    dictionary
        .iter()
        .find(|entry| normalized.contains(entry.trigger.as_str()))
}

pub fn resolve<'a>(query: &str, dictionary: &'a QueryDictionary) -> &'a str {
    match resolve_entry(query, dictionary) {
        Some(entry) => entry.response.as_str(),
        None => {
            log::debug!("No canned answer for query '{}'", query.trim());
            FALLBACK_ANSWER
        }
    }
}
