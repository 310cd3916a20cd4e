use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Syntax-checked RFC 6901 pointer (`""`, `/data/id`, `/items/0/name`).
///
/// Resolution itself is left to `serde_json::Value::pointer`; this type only
/// guarantees that the expression is well formed before it gets there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointer {
    raw: String,
}

impl JsonPointer {
    pub fn parse(input: &str) -> Result<Self, PointerError> {
        if !input.is_empty() && !input.starts_with('/') {
            return Err(PointerError::new(
                input,
                "pointer must be empty or start with `/`".to_string(),
            ));
        }

        let bytes = input.as_bytes();
        let mut cursor = 0;
        while cursor < bytes.len() {
            if bytes[cursor] == b'~' {
                match bytes.get(cursor + 1) {
                    Some(b'0') | Some(b'1') => cursor += 1,
                    Some(_) => {
                        return Err(PointerError::new(
                            input,
                            format!("invalid escape at byte {cursor}; expected `~0` or `~1`"),
                        ));
                    }
                    None => {
                        return Err(PointerError::new(
                            input,
                            "pointer cannot end with `~`".to_string(),
                        ));
                    }
                }
            }
            cursor += 1;
        }

        Ok(Self {
            raw: input.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.raw)
    }
}

impl FromStr for JsonPointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid JSON pointer `{input}`: {reason}")]
pub struct PointerError {
    input: String,
    reason: String,
}

impl PointerError {
    fn new(input: &str, reason: String) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}
