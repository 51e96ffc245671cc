use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn today_iso() -> String {
    today_local().format("%Y-%m-%d").to_string()
}

/// Cuts `HH:MM:SS` style values down to `HH:MM`.
pub fn short_time(raw: &str) -> String {
    raw.chars().take(5).collect()
}

pub fn slot_label(name: &str, from: &str, to: &str) -> String {
    format!("{} ({} - {})", name, short_time(from), short_time(to))
}

pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}

/// Returns `true` only when both values parse and `from` is strictly earlier.
pub fn is_time_range_valid(from: &str, to: &str) -> bool {
    match (parse_time_of_day(from), parse_time_of_day(to)) {
        (Some(start), Some(end)) => start < end,
        _ => false,
    }
}

/// Extracts the calendar day from either a plain date or an RFC 3339 timestamp.
pub fn date_part(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|dt| dt.date())
}

pub fn display_date(raw: &str) -> String {
    date_part(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Formats a timestamp for the `datetime-local` input (`YYYY-MM-DDTHH:MM`).
pub fn to_datetime_local(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt
            .with_timezone(&Local)
            .format("%Y-%m-%dT%H:%M")
            .to_string();
    }
    trimmed.chars().take(16).collect()
}
