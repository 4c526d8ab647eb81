use chrono::NaiveDateTime;

use crate::models::{ActionHistory, TimeWindow};
use crate::services::history_filter;
use crate::state::AppState;
use crate::utils::{clock, config, parse_date_time};

/// Action history for a selector key. Without a key the configured default
/// window is used; without `now` the clock of the configured time zone.
pub fn get_action_history(
    state: &AppState,
    window_key: Option<&str>,
    now: Option<&str>,
) -> Result<ActionHistory, String> {
    let window = match window_key {
        Some(key) => {
            let window = TimeWindow::from_key(key);
            if window.is_none() {
                log::debug!("Unmapped time window '{}', listing all actions", key);
            }
            window
        }
        None => config::default_window(&state.settings),
    };

    let now: NaiveDateTime = match now {
        Some(raw) => parse_date_time(raw).map_err(|e| e.to_string())?,
        None => clock::local_now(&state.settings.general.time_zone),
    };

    let actions = history_filter::filter_actions(&state.actions, window, now);
    log::debug!("{} of {} actions in window {:?}", actions.len(), state.actions.len(), window);

    Ok(ActionHistory {
        window,
        window_label: window.map(|w| w.label()).unwrap_or("Todos").to_string(),
        now,
        actions,
    })
}
