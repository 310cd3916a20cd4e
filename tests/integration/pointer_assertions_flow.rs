use std::panic::{self, AssertUnwindSafe};

use pointer_assert::assertions::{
    PointerAssertions, assert_equals, assert_equals_if_present, assert_is_local_date_time,
    assert_is_local_date_time_if_present, assert_is_present, assert_is_uuid,
    assert_is_uuid_if_present, assert_not_empty, assert_not_empty_if_present, assert_not_equals,
    assert_not_equals_if_present,
};
use pointer_assert::domain::failure::AssertionFailure;
use pointer_assert::engine::CollectingReporter;
use serde_json::{Value, json};

fn panic_message(body: impl FnOnce()) -> Option<String> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(body));
    let payload = outcome.err()?;
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|text| text.to_string()))
}

fn order_body() -> Value {
    json!({
        "data": {
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "created_at": "2024-01-02T03:04:05",
            "status": "OPEN",
            "items": [{"name": "widget", "quantity": 2}],
            "notes": ""
        }
    })
}

#[test]
fn uuid_scenarios() {
    assert_is_uuid(&json!({"id": "3fa85f64-5717-4562-b3fc-2c963f66afa6"}), "/id");

    let message = panic_message(|| assert_is_uuid(&json!({"id": "not-a-uuid"}), "/id"))
        .expect("non-uuid must fail");
    assert!(message.contains("not-a-uuid"));
    assert!(message.contains("/id"));

    assert_is_uuid_if_present(&json!({}), "/missing");
    let message =
        panic_message(|| assert_is_uuid(&json!({}), "/missing")).expect("absent must fail");
    assert_eq!(
        message,
        "Expected JSON object to contain value at [/missing]"
    );
}

#[test]
fn not_empty_scenarios() {
    let message = panic_message(|| assert_not_empty(&json!({"tags": []}), "/tags"))
        .expect("empty array must fail");
    assert_eq!(message, "Expected value at [/tags] to be not empty");

    assert_not_empty(&json!({"tags": ["a"]}), "/tags");
    assert_not_empty(&json!({"count": 0}), "/count");
    assert_not_empty_if_present(&json!({}), "/tags");
}

#[test]
fn equality_scenarios() {
    let doc = json!({"status": "OPEN"});
    assert_equals(&doc, "/status", "OPEN");
    assert_not_equals(&doc, "/status", "CLOSED");

    let message = panic_message(|| assert_equals(&doc, "/status", "CLOSED"))
        .expect("different text must fail");
    assert!(message.contains("[OPEN]"));
    assert!(message.contains("[CLOSED]"));

    let message = panic_message(|| assert_not_equals(&doc, "/status", "OPEN"))
        .expect("same text must fail");
    assert_eq!(
        message,
        "Expected value [OPEN] at [/status] not to be equal to [OPEN]"
    );
}

#[test]
fn nested_body_passes_every_assertion() {
    let body = order_body();
    assert_is_present(&body, "/data/items/0/name");
    assert_is_uuid(&body, "/data/id");
    assert_is_local_date_time(&body, "/data/created_at");
    assert_not_empty(&body, "/data/items");
    assert_equals(&body, "/data/items/0/quantity", "2");
    assert_not_equals(&body, "/data/status", "CANCELLED");
}

#[test]
fn if_present_variants_are_no_ops_for_absent_pointers() {
    let body = order_body();
    for pointer in ["/data/deleted_at", "/data/items/5", "/nothing/here"] {
        assert_is_uuid_if_present(&body, pointer);
        assert_is_local_date_time_if_present(&body, pointer);
        assert_not_empty_if_present(&body, pointer);
        assert_equals_if_present(&body, pointer, "x");
        assert_not_equals_if_present(&body, pointer, "x");
    }
}

#[test]
fn presence_matches_pointer_resolution() {
    let body = order_body();
    for (pointer, resolves) in [
        ("/data/id", true),
        ("/data/notes", true),
        ("/data/items/0", true),
        ("/data/items/1", false),
        ("/data/ID", false),
    ] {
        let failed = panic_message(|| assert_is_present(&body, pointer)).is_some();
        assert_eq!(!failed, resolves, "presence of {pointer}");
    }
}

#[test]
fn repeated_assertions_are_idempotent() {
    let body = order_body();
    let first = panic_message(|| assert_not_empty(&body, "/data/notes"));
    let second = panic_message(|| assert_not_empty(&body, "/data/notes"));
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn collecting_reporter_gathers_all_failures() {
    let body = order_body();
    let mut assertions = PointerAssertions::new(CollectingReporter::new());
    assertions.is_uuid(&body, "/data/status");
    assertions.is_local_date_time(&body, "/data/id");
    assertions.not_empty(&body, "/data/notes");
    assertions.equals(&body, "/data/status", "OPEN");
    assertions.is_present(&body, "/data/customer");

    let kinds: Vec<_> = assertions
        .reporter()
        .failures()
        .iter()
        .map(AssertionFailure::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            "format_mismatch",
            "format_mismatch",
            "empty_value",
            "missing_value"
        ]
    );
}

#[test]
fn local_date_time_accepts_lowercase_separator() {
    let body = json!({"created_at": "2024-01-02t03:04:05"});
    assert_is_local_date_time(&body, "/created_at");
}
