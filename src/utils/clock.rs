use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Current wall-clock time in the configured zone, without offset, so it can
/// be compared against stored local dates and times.
pub fn local_now(time_zone: &str) -> NaiveDateTime {
    match time_zone.parse::<Tz>() {
        Ok(tz) => Utc::now().with_timezone(&tz).naive_local(),
        Err(_) => {
            log::warn!("Unknown time zone '{}', using system local time", time_zone);
            Local::now().naive_local()
        }
    }
}
