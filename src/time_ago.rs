//! Relative timestamps for comment headers.

use time::OffsetDateTime;

use crate::config::i18n::Locale;

const SECOND_MS: i128 = 1_000;
const MINUTE_MS: i128 = 60 * SECOND_MS;
const HOUR_MS: i128 = 60 * MINUTE_MS;
const DAY_MS: i128 = 24 * HOUR_MS;

/// Dates older than this many days are shown as `YYYY-MM-DD`.
const RELATIVE_DAYS: i128 = 8;

/// `"3 minutes ago"` style text, `now` for future dates, a plain date after a
/// week.
pub fn get_time_ago(date: OffsetDateTime, now: OffsetDateTime, locale: &Locale) -> String {
    let passed = (now - date).whole_milliseconds();
    let days = passed.div_euclid(DAY_MS);

    if days == 0 {
        let within_day = passed.rem_euclid(DAY_MS);
        let hours = within_day / HOUR_MS;
        if hours > 0 {
            return format!("{hours} {}", locale.text("hours"));
        }
        let minutes = within_day.rem_euclid(HOUR_MS) / MINUTE_MS;
        if minutes > 0 {
            return format!("{minutes} {}", locale.text("minutes"));
        }
        let seconds = (within_day.rem_euclid(MINUTE_MS) + SECOND_MS / 2) / SECOND_MS;
        return format!("{seconds} {}", locale.text("seconds"));
    }

    if days < 0 {
        return locale.text("now").to_owned();
    }
    if days < RELATIVE_DAYS {
        return format!("{days} {}", locale.text("days"));
    }
    format_date(date)
}

/// Same as [`get_time_ago`] for millisecond Unix timestamps. Out-of-range
/// timestamps fall back to `now`.
pub fn time_ago_from_millis(timestamp_ms: i64, now: OffsetDateTime, locale: &Locale) -> String {
    match OffsetDateTime::from_unix_timestamp_nanos(i128::from(timestamp_ms) * 1_000_000) {
        Ok(date) => get_time_ago(date, now, locale),
        Err(_) => locale.text("now").to_owned(),
    }
}

pub fn format_date(date: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
