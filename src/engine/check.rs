use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::domain::failure::{AssertionFailure, ValueFormat};
use crate::domain::pointer::JsonPointer;
use crate::engine::document::{JsonDocument, unquoted_text};
use crate::util::time::is_local_date_time;

const HYPHENATED_UUID_LEN: usize = 36;

pub type CheckResult = Result<(), AssertionFailure>;

pub fn check_is_present<D>(doc: &D, pointer: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    let parsed = JsonPointer::parse(pointer)?;
    if doc.resolves(&parsed) {
        Ok(())
    } else {
        debug!(pointer, "pointer did not resolve");
        Err(AssertionFailure::Missing {
            pointer: pointer.to_string(),
        })
    }
}

pub fn check_is_uuid_if_present<D>(doc: &D, pointer: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_text_if_present(doc, pointer, |text| {
        if is_uuid(text) {
            Ok(())
        } else {
            Err(AssertionFailure::Format {
                pointer: pointer.to_string(),
                text: text.to_string(),
                format: ValueFormat::Uuid,
            })
        }
    })
}

pub fn check_is_uuid<D>(doc: &D, pointer: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_is_present(doc, pointer)?;
    check_is_uuid_if_present(doc, pointer)
}

pub fn check_is_local_date_time_if_present<D>(doc: &D, pointer: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_text_if_present(doc, pointer, |text| {
        if is_local_date_time(text) {
            Ok(())
        } else {
            Err(AssertionFailure::Format {
                pointer: pointer.to_string(),
                text: text.to_string(),
                format: ValueFormat::LocalDateTime,
            })
        }
    })
}

pub fn check_is_local_date_time<D>(doc: &D, pointer: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_is_present(doc, pointer)?;
    check_is_local_date_time_if_present(doc, pointer)
}

/// Only strings and arrays can be empty; every other JSON type passes.
pub fn check_not_empty_if_present<D>(doc: &D, pointer: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    let Some(value) = resolve(doc, pointer)? else {
        return Ok(());
    };
    if is_not_empty(value) {
        Ok(())
    } else {
        debug!(pointer, "value is empty");
        Err(AssertionFailure::Empty {
            pointer: pointer.to_string(),
        })
    }
}

pub fn check_not_empty<D>(doc: &D, pointer: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_is_present(doc, pointer)?;
    check_not_empty_if_present(doc, pointer)
}

pub fn check_not_equals_if_present<D>(doc: &D, pointer: &str, expected: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_text_if_present(doc, pointer, |text| {
        if text != expected {
            Ok(())
        } else {
            Err(AssertionFailure::Equal {
                pointer: pointer.to_string(),
                text: text.to_string(),
                expected: expected.to_string(),
            })
        }
    })
}

pub fn check_not_equals<D>(doc: &D, pointer: &str, expected: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_is_present(doc, pointer)?;
    check_not_equals_if_present(doc, pointer, expected)
}

pub fn check_equals_if_present<D>(doc: &D, pointer: &str, expected: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_text_if_present(doc, pointer, |text| {
        if text == expected {
            Ok(())
        } else {
            Err(AssertionFailure::Unequal {
                pointer: pointer.to_string(),
                text: text.to_string(),
                expected: expected.to_string(),
            })
        }
    })
}

pub fn check_equals<D>(doc: &D, pointer: &str, expected: &str) -> CheckResult
where
    D: JsonDocument + ?Sized,
{
    check_is_present(doc, pointer)?;
    check_equals_if_present(doc, pointer, expected)
}

/// Hyphenated `8-4-4-4-12` form only; simple, braced and URN forms are rejected.
pub fn is_uuid(text: &str) -> bool {
    text.len() == HYPHENATED_UUID_LEN && Uuid::parse_str(text).is_ok()
}

pub fn is_not_empty(value: &Value) -> bool {
    match value {
        Value::String(_) => !unquoted_text(value).is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn resolve<'a, D>(doc: &'a D, pointer: &str) -> Result<Option<&'a Value>, AssertionFailure>
where
    D: JsonDocument + ?Sized,
{
    let parsed = JsonPointer::parse(pointer)?;
    Ok(doc.value_at(&parsed))
}

fn check_text_if_present<D, F>(doc: &D, pointer: &str, predicate: F) -> CheckResult
where
    D: JsonDocument + ?Sized,
    F: FnOnce(&str) -> CheckResult,
{
    let Some(value) = resolve(doc, pointer)? else {
        return Ok(());
    };
    let text = unquoted_text(value);
    let outcome = predicate(&text);
    if let Err(failure) = &outcome {
        debug!(pointer, text = %text, kind = failure.kind(), "pointer check failed");
    }
    outcome
}
