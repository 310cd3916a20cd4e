use pointer_assert::util::time::{is_local_date_time, parse_local_date_time};

#[test]
fn accepts_local_datetime_without_offset() {
    assert!(is_local_date_time("2026-02-23T20:15:30"));
}

#[test]
fn accepts_fractional_seconds() {
    let parsed = parse_local_date_time("2026-02-23T20:15:30.123456").expect("valid datetime");
    assert_eq!(parsed.to_string(), "2026-02-23 20:15:30.123456");
}

#[test]
fn rejects_offset_datetime() {
    assert!(!is_local_date_time("2026-02-23T20:15:30+09:00"));
    assert!(!is_local_date_time("2026-02-23T11:15:30Z"));
}

#[test]
fn invalid_datetime_returns_none() {
    assert!(parse_local_date_time("not-a-datetime").is_none());
}

#[test]
fn accepts_lowercase_separator_and_signed_years() {
    assert!(is_local_date_time("2026-02-23t20:15:30"));
    assert!(is_local_date_time("+10000-02-23T20:15:30"));
}
