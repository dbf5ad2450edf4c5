// SPDX-License-Identifier: MIT

//! Shape validation for the plan generation request.

use super::ValidationError;
use crate::models::GenerationRequest;
use serde_json::{Map, Value};

/// Validate a decoded generation request body.
///
/// Fields are checked in a fixed order and the first failure aborts with a
/// message naming that field. Extraneous fields are tolerated; there are no
/// cross-field invariants.
pub fn validate(value: &Value) -> Result<GenerationRequest, ValidationError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ValidationError::new("request body must be a JSON object"))?;

    Ok(GenerationRequest {
        user_id: require_string(obj, "user_id")?,
        age: require_number(obj, "age")?,
        height: require_string(obj, "height")?,
        weight: require_string(obj, "weight")?,
        injuries: require_string(obj, "injuries")?,
        workout_days: require_string_list(obj, "workout_days")?,
        fitness_goal: require_string(obj, "fitness_goal")?,
        fitness_level: require_string(obj, "fitness_level")?,
        dietary_restrictions: require_string_list(obj, "dietary_restrictions")?,
    })
}

fn require_string(obj: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ValidationError::new(format!("{field} must be a string")))
}

fn require_number(obj: &Map<String, Value>, field: &str) -> Result<f64, ValidationError> {
    obj.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| ValidationError::new(format!("{field} must be a number")))
}

fn require_string_list(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Vec<String>, ValidationError> {
    let list = obj
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new(format!("{field} must be a list of strings")))?;

    list.iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or_else(|| ValidationError::new(format!("{field} must be a list of strings")))
        })
        .collect()
}
