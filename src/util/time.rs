use std::sync::LazyLock;

use chrono::{NaiveDateTime, Timelike};
use regex::Regex;

// Years past four digits need a sign. The `T` separator is case-insensitive,
// seconds and fraction are optional, and zone suffixes never match.
static LOCAL_DATE_TIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\d{4}|\+\d{5,9}|-\d{4,9})-\d{2}-\d{2}[Tt]\d{2}:\d{2}(?::\d{2}(?:\.\d{1,9})?)?$",
    )
    .expect("local date-time pattern is valid")
});

/// Returns `true` when `input` is an ISO-8601 local date-time without offset,
/// e.g. `2024-01-02T03:04`, `2024-01-02t03:04:05` or `+10000-01-02T03:04:05.123`.
pub fn is_local_date_time(input: &str) -> bool {
    parse_local_date_time(input).is_some()
}

pub fn parse_local_date_time(input: &str) -> Option<NaiveDateTime> {
    if !LOCAL_DATE_TIME_SHAPE.is_match(input) {
        return None;
    }

    // The shape check leaves `t` as the only possible lowercase letter.
    let normalized = input.replacen('t', "T", 1);
    let format = if normalized.matches(':').count() == 1 {
        "%Y-%m-%dT%H:%M"
    } else {
        "%Y-%m-%dT%H:%M:%S%.f"
    };
    let parsed = NaiveDateTime::parse_from_str(&normalized, format).ok()?;

    // chrono folds a `:60` leap second into the nanosecond field.
    if parsed.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(parsed)
}
