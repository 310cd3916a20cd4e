//! Assertion helpers for JSON documents addressed by JSON Pointer expressions.
//!
//! ```
//! use pointer_assert::assertions::{assert_equals, assert_is_uuid};
//! use serde_json::json;
//!
//! let body = json!({"id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "status": "OPEN"});
//! assert_is_uuid(&body, "/id");
//! assert_equals(&body, "/status", "OPEN");
//! ```

pub mod assertions;
pub mod domain;
pub mod engine;
pub mod util;
