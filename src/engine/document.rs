use serde_json::Value;

use crate::domain::pointer::JsonPointer;

/// Pointer lookups an assertion needs from a parsed JSON document.
pub trait JsonDocument {
    fn value_at(&self, pointer: &JsonPointer) -> Option<&Value>;

    fn resolves(&self, pointer: &JsonPointer) -> bool {
        self.value_at(pointer).is_some()
    }
}

impl JsonDocument for Value {
    fn value_at(&self, pointer: &JsonPointer) -> Option<&Value> {
        self.pointer(pointer.as_str())
    }
}

/// Compact JSON text of `value` with one leading and one trailing `"` removed.
///
/// Strings therefore compare by their escaped content (`a\"b` for `a"b`),
/// while numbers, booleans, null and containers keep their JSON text.
pub fn unquoted_text(value: &Value) -> String {
    let text = value.to_string();
    let text = text.strip_prefix('"').unwrap_or(&text);
    let text = text.strip_suffix('"').unwrap_or(text);
    text.to_string()
}
