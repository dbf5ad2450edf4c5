// SPDX-License-Identifier: MIT

//! Runtime shape validation and normalization of untrusted JSON.
//!
//! Both the client request body and the Gemini output are untyped JSON that
//! must be checked before use. Validation follows a two-phase contract:
//! structural validation rejects missing or wrongly typed required fields
//! (reporting the first violation, with index paths for nested lists), then
//! normalization coerces numeric-looking strings with fixed fallbacks.
//! Every function here is pure and returns a tagged result so the request
//! pipeline can short-circuit explicitly.

pub mod diet;
pub mod request;
pub mod workout;

use serde_json::Value;

/// A shape violation naming the first offending field.
///
/// For nested list elements the message embeds the full index path, e.g.
/// `exercises[2].routines[0].sets must be a number`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Strip one optional `{node: ...}` wrapper from an inbound payload.
///
/// Some callers wrap the request body a single level deep; the unwrap is
/// applied once, before any validation, and is a no-op for every other
/// shape.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("node") => {
            map.remove("node").unwrap_or(Value::Null)
        }
        other => other,
    }
}
