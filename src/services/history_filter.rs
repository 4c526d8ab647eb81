use chrono::{Datelike, Duration, NaiveDateTime};

use crate::models::{ActionRecord, TimeWindow};

/// Returns the records that fall inside `window`, relative to `now`.
///
/// Input order is preserved. A `None` window (an unmapped selector key)
/// keeps every record. All lower bounds are inclusive, and `now` must be in
/// the same local calendar as the records.
pub fn filter_actions(
    records: &[ActionRecord],
    window: Option<TimeWindow>,
    now: NaiveDateTime,
) -> Vec<ActionRecord> {
    records
        .iter()
        .filter(|record| in_window(record.instant(), window, now))
        .cloned()
        .collect()
}

pub fn in_window(t: NaiveDateTime, window: Option<TimeWindow>, now: NaiveDateTime) -> bool {
    let Some(window) = window else {
        return true;
    };

    match window {
        TimeWindow::LastHour => t >= now - Duration::hours(1),
        TimeWindow::Last12Hours => t >= now - Duration::hours(12),
        TimeWindow::Today => t.date() == now.date(),
        TimeWindow::ThisWeek => t >= now - Duration::days(7),
        TimeWindow::ThisMonth => t.year() == now.year() && t.month() == now.month(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed;
    use chrono::{NaiveDate, NaiveTime};

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_time(NaiveTime::parse_from_str(time, "%H:%M").unwrap())
    }

    fn record(id: u32, date: &str, time: &str) -> ActionRecord {
        let t = at(date, time);
        ActionRecord::new(id, t.date(), t.time(), format!("action {}", id))
    }

    fn ids(records: &[ActionRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_records_for_every_window() {
        let now = at("2025-04-27", "23:00");
        for window in TimeWindow::ALL {
            assert!(filter_actions(&[], Some(window), now).is_empty());
        }
        assert!(filter_actions(&[], None, now).is_empty());
    }

    #[test]
    fn test_today_includes_evening_medication() {
        let records = vec![ActionRecord::new(
            7,
            NaiveDate::from_ymd_opt(2025, 4, 27).unwrap(),
            NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
            "Medicação administrada: Paracetamol 500mg",
        )];
        let result = filter_actions(&records, Some(TimeWindow::Today), at("2025-04-27", "23:00"));
        assert_eq!(result, records);
    }

    #[test]
    fn test_last_hour_boundary_is_inclusive() {
        let now = at("2025-04-27", "23:00");
        let records = vec![
            record(1, "2025-04-27", "21:59"),
            record(2, "2025-04-27", "22:00"),
            record(3, "2025-04-27", "22:30"),
        ];
        let result = filter_actions(&records, Some(TimeWindow::LastHour), now);
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn test_last_12_hours() {
        let now = at("2025-04-27", "23:00");
        let records = vec![
            record(1, "2025-04-27", "10:59"),
            record(2, "2025-04-27", "11:00"),
            record(3, "2025-04-26", "22:00"),
        ];
        let result = filter_actions(&records, Some(TimeWindow::Last12Hours), now);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_today_ignores_time_of_day() {
        let now = at("2025-04-27", "00:05");
        let records = vec![
            record(1, "2025-04-26", "23:59"),
            record(2, "2025-04-27", "00:00"),
            record(3, "2025-04-27", "23:59"),
        ];
        let result = filter_actions(&records, Some(TimeWindow::Today), now);
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn test_this_week_is_rolling_seven_days() {
        let now = at("2025-04-27", "12:00");
        let records = vec![
            record(1, "2025-04-20", "11:59"),
            record(2, "2025-04-20", "12:00"),
            record(3, "2025-04-25", "08:00"),
        ];
        let result = filter_actions(&records, Some(TimeWindow::ThisWeek), now);
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn test_this_month_matches_year_and_month() {
        let now = at("2025-04-27", "12:00");
        let records = vec![
            record(1, "2025-03-31", "23:59"),
            record(2, "2025-04-01", "00:00"),
            record(3, "2024-04-27", "12:00"),
            record(4, "2025-04-30", "09:00"),
        ];
        let result = filter_actions(&records, Some(TimeWindow::ThisMonth), now);
        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn test_unmapped_window_keeps_everything() {
        let records = seed::patient_actions();
        let result = filter_actions(&records, TimeWindow::from_key("year"), at("2030-01-01", "00:00"));
        assert_eq!(result, records);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let records = seed::patient_actions();
        let now = at("2025-04-27", "23:00");
        for window in TimeWindow::ALL {
            let result = filter_actions(&records, Some(window), now);
            let mut source = records.iter();
            for kept in &result {
                assert!(source.any(|r| r == kept), "{:?} broke ordering", window);
            }
        }
    }

    #[test]
    fn test_seed_history_on_reference_evening() {
        let records = seed::patient_actions();
        let now = at("2025-04-27", "23:00");

        let today = filter_actions(&records, Some(TimeWindow::Today), now);
        assert_eq!(ids(&today), vec![1, 2, 3, 4, 5, 6, 7]);

        let last_hour = filter_actions(&records, Some(TimeWindow::LastHour), now);
        assert!(last_hour.is_empty());

        let last_12 = filter_actions(&records, Some(TimeWindow::Last12Hours), now);
        assert_eq!(ids(&last_12), vec![3, 4, 5, 6, 7]);

        let week = filter_actions(&records, Some(TimeWindow::ThisWeek), now);
        assert_eq!(week.len(), records.len());
    }
}
