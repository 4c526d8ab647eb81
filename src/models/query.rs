use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEntry {
    pub trigger: String,
    pub response: String,
}

/// Ordered trigger phrase -> canned answer mapping.
///
/// Iteration follows insertion order, which is also the tie-break order when
/// several triggers match the same query. Re-inserting a trigger replaces its
/// answer without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDictionary")]
pub struct QueryDictionary {
    entries: Vec<QueryEntry>,
}

/// Wire shape of a dictionary; loaded entries go through `insert`.
#[derive(Deserialize)]
struct RawDictionary {
    #[serde(default)]
    entries: Vec<QueryEntry>,
}

impl From<RawDictionary> for QueryDictionary {
    fn from(raw: RawDictionary) -> Self {
        QueryDictionary::from_pairs(raw.entries.into_iter().map(|e| (e.trigger, e.response)))
    }
}

impl QueryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut dictionary = Self::new();
        for (trigger, response) in pairs {
            dictionary.insert(trigger, response);
        }
        dictionary
    }

    /// Adds a trigger. Triggers are stored lower-cased; a blank trigger would
    /// match every query, so it is rejected and `false` is returned.
    pub fn insert(&mut self, trigger: impl Into<String>, response: impl Into<String>) -> bool {
        let trigger = trigger.into().to_lowercase();
        if trigger.trim().is_empty() {
            log::warn!("Ignoring blank query trigger");
            return false;
        }
        let response = response.into();

        match self.entries.iter().position(|e| e.trigger == trigger) {
            Some(index) => self.entries[index].response = response,
            None => self.entries.push(QueryEntry { trigger, response }),
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, trigger: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.trigger == trigger)
            .map(|e| e.response.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: String,
    pub matched_trigger: Option<String>,
    pub answer: String,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_dictionary_normalizes_triggers() {
        let dictionary: QueryDictionary = serde_json::from_str(
            r#"{"entries":[
                {"trigger":"Visita Médica","response":"visit"},
                {"trigger":"","response":"blank"},
                {"trigger":"visita médica","response":"again"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("visita médica"), Some("again"));
    }

    #[test]
    fn test_round_trip_keeps_order() {
        let dictionary = QueryDictionary::from_pairs([("b", "2"), ("a", "1")]);
        let json = serde_json::to_string(&dictionary).unwrap();
        let loaded: QueryDictionary = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, dictionary);
    }
}
