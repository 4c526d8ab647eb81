use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: u32,
    pub time: NaiveTime,
    pub date: NaiveDate,
    pub action: String,
}

impl ActionRecord {
    pub fn new(id: u32, date: NaiveDate, time: NaiveTime, action: impl Into<String>) -> Self {
        Self {
            id,
            time,
            date,
            action: action.into(),
        }
    }

    /// Date and time of day combined, in the local calendar.
    pub fn instant(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    LastHour,
    Last12Hours,
    Today,
    ThisWeek,
    ThisMonth,
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::Today
    }
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::LastHour,
        TimeWindow::Last12Hours,
        TimeWindow::Today,
        TimeWindow::ThisWeek,
        TimeWindow::ThisMonth,
    ];

    /// Maps a selector key to a window. Unknown keys yield `None`, which the
    /// history filter treats as "no window".
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "hour" => Some(TimeWindow::LastHour),
            "12hours" => Some(TimeWindow::Last12Hours),
            "day" => Some(TimeWindow::Today),
            "week" => Some(TimeWindow::ThisWeek),
            "month" => Some(TimeWindow::ThisMonth),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::LastHour => "Última hora",
            TimeWindow::Last12Hours => "Últimas 12 horas",
            TimeWindow::Today => "Hoje",
            TimeWindow::ThisWeek => "Esta semana",
            TimeWindow::ThisMonth => "Este mês",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionHistory {
    pub window: Option<TimeWindow>,
    pub window_label: String,
    pub now: NaiveDateTime,
    pub actions: Vec<ActionRecord>,
}
