use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

// leading signed integer, trailing garbage ignored
static EPOCH_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").unwrap());

/// Reads the leading integer of `input` as seconds since the unix epoch.
pub fn parse(input: &str) -> Option<DateTime<Utc>> {
    let seconds = EPOCH_PREFIX
        .captures(input)
        .and_then(|cap| cap.get(1))
        .and_then(|value| value.as_str().parse::<i64>().ok())?;
    Utc.timestamp_opt(seconds, 0).single()
}

/// Renders an epoch timestamp as an RFC 3339 instant with milliseconds,
/// or an empty string when there is nothing usable.
pub fn to_iso_string(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    match parse(input) {
        Some(date) => date.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => {
            tracing::debug!("unable to parse timestamp {input:?}");
            String::new()
        }
    }
}
