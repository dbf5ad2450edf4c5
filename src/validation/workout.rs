// SPDX-License-Identifier: MIT

//! Shape validation and normalization for model-produced workout plans.

use super::ValidationError;
use crate::models::{ExerciseDay, Routine, WorkoutPlan};
use serde_json::Value;

/// Fallback when `sets` is a string that does not parse to a positive integer.
const SETS_FALLBACK: u32 = 1;
/// Fallback when `reps` is a string that does not parse to a positive integer.
const REPS_FALLBACK: u32 = 10;

/// Validate the parsed JSON body of a workout-plan response.
///
/// Validation is exhaustive: every element of every nested list is checked,
/// and errors embed the failing index path. Extraneous fields are tolerated.
/// On any violation the caller must treat the response as unusable.
pub fn validate(value: &Value) -> Result<(), ValidationError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ValidationError::new("workout plan must be a JSON object"))?;

    let schedule = obj
        .get("schedule")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new("schedule must be a list of strings"))?;
    for (i, day) in schedule.iter().enumerate() {
        if !day.is_string() {
            return Err(ValidationError::new(format!(
                "schedule[{i}] must be a string"
            )));
        }
    }

    let exercises = obj
        .get("exercises")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new("exercises must be a list"))?;

    for (i, exercise) in exercises.iter().enumerate() {
        let entry = exercise
            .as_object()
            .ok_or_else(|| ValidationError::new(format!("exercises[{i}] must be an object")))?;

        if !entry.get("day").is_some_and(Value::is_string) {
            return Err(ValidationError::new(format!(
                "exercises[{i}].day must be a string"
            )));
        }

        let routines = entry
            .get("routines")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ValidationError::new(format!("exercises[{i}].routines must be a list"))
            })?;

        for (j, routine) in routines.iter().enumerate() {
            let routine = routine.as_object().ok_or_else(|| {
                ValidationError::new(format!("exercises[{i}].routines[{j}] must be an object"))
            })?;

            if !routine.get("name").is_some_and(Value::is_string) {
                return Err(ValidationError::new(format!(
                    "exercises[{i}].routines[{j}].name must be a string"
                )));
            }
            check_count(
                routine.get("sets"),
                &format!("exercises[{i}].routines[{j}].sets"),
            )?;
            check_count(
                routine.get("reps"),
                &format!("exercises[{i}].routines[{j}].reps"),
            )?;
        }
    }

    Ok(())
}

/// `sets`/`reps` must be a finite number. A string is also accepted at this
/// phase so normalization can coerce the numeric-looking text the model
/// sometimes emits; anything else is a shape violation.
fn check_count(value: Option<&Value>, path: &str) -> Result<(), ValidationError> {
    match value {
        Some(Value::Number(n)) if n.as_f64().is_some_and(f64::is_finite) => Ok(()),
        Some(Value::String(_)) => Ok(()),
        _ => Err(ValidationError::new(format!("{path} must be a number"))),
    }
}

/// Project a validated workout value onto the typed model.
///
/// `schedule` passes through unchanged. Numeric `sets`/`reps` are kept;
/// string values are integer-parsed, substituting the fallback (1 for sets,
/// 10 for reps) when parsing fails or yields zero. Extraneous fields the
/// model added are dropped. Must only be called on input that passed
/// [`validate`].
pub fn normalize(value: &Value) -> WorkoutPlan {
    let schedule = value
        .get("schedule")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let exercises = value
        .get("exercises")
        .and_then(Value::as_array)
        .map(|list| list.iter().map(normalize_exercise).collect())
        .unwrap_or_default();

    WorkoutPlan {
        schedule,
        exercises,
    }
}

fn normalize_exercise(entry: &Value) -> ExerciseDay {
    let day = entry
        .get("day")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let routines = entry
        .get("routines")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|routine| Routine {
                    name: routine
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    sets: coerce_count(routine.get("sets"), SETS_FALLBACK),
                    reps: coerce_count(routine.get("reps"), REPS_FALLBACK),
                })
                .collect()
        })
        .unwrap_or_default();

    ExerciseDay { day, routines }
}

fn coerce_count(value: Option<&Value>, fallback: u32) -> u32 {
    match value {
        // Models emit both integer- and float-typed counts ("sets": 3 and
        // "sets": 3.0); both are kept. Non-finite, negative or out-of-range
        // numbers get the fallback instead of a wrapping cast.
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| v.round() as u32)
            .unwrap_or(fallback),
        Some(Value::String(s)) => match s.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => fallback,
        },
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_plan() -> Value {
        json!({
            "schedule": ["Monday", "Friday"],
            "exercises": [
                {
                    "day": "Monday",
                    "routines": [
                        {"name": "Squats", "sets": 3, "reps": 10},
                        {"name": "Lunges", "sets": 3, "reps": 12},
                    ],
                },
                {
                    "day": "Friday",
                    "routines": [
                        {"name": "Bench Press", "sets": 4, "reps": 8},
                    ],
                },
            ],
        })
    }

    #[test]
    fn test_valid_plan_passes() {
        assert!(validate(&valid_plan()).is_ok());
    }

    #[test]
    fn test_missing_schedule_rejected() {
        let err = validate(&json!({"exercises": []})).unwrap_err();
        assert_eq!(err.0, "schedule must be a list of strings");
    }

    #[test]
    fn test_error_embeds_index_path_for_sets() {
        let mut plan = valid_plan();
        plan["exercises"][1]["routines"][0]["sets"] = json!(null);
        let err = validate(&plan).unwrap_err();
        assert_eq!(err.0, "exercises[1].routines[0].sets must be a number");
    }

    #[test]
    fn test_error_embeds_index_path_for_reps() {
        let mut plan = valid_plan();
        plan["exercises"][0]["routines"][1]["reps"] = json!(true);
        let err = validate(&plan).unwrap_err();
        assert_eq!(err.0, "exercises[0].routines[1].reps must be a number");
    }

    #[test]
    fn test_missing_routine_name_rejected() {
        let mut plan = valid_plan();
        plan["exercises"][0]["routines"][0]
            .as_object_mut()
            .unwrap()
            .remove("name");
        let err = validate(&plan).unwrap_err();
        assert_eq!(err.0, "exercises[0].routines[0].name must be a string");
    }

    #[test]
    fn test_extraneous_fields_tolerated() {
        let mut plan = valid_plan();
        plan["notes"] = json!("stay hydrated");
        plan["exercises"][0]["focus"] = json!("legs");
        assert!(validate(&plan).is_ok());
    }

    #[test]
    fn test_normalize_keeps_numeric_counts() {
        let normalized = normalize(&valid_plan());
        assert_eq!(normalized.schedule, vec!["Monday", "Friday"]);
        assert_eq!(normalized.exercises[0].routines[0].sets, 3);
        assert_eq!(normalized.exercises[1].routines[0].reps, 8);
    }

    #[test]
    fn test_normalize_keeps_float_typed_counts() {
        let mut plan = valid_plan();
        plan["exercises"][0]["routines"][0]["sets"] = json!(3.0);
        plan["exercises"][0]["routines"][0]["reps"] = json!(12.0);
        let normalized = normalize(&plan);
        assert_eq!(normalized.exercises[0].routines[0].sets, 3);
        assert_eq!(normalized.exercises[0].routines[0].reps, 12);
    }

    #[test]
    fn test_normalize_falls_back_on_out_of_range_numbers() {
        let mut plan = valid_plan();
        plan["exercises"][0]["routines"][0]["sets"] = json!(-2);
        plan["exercises"][0]["routines"][0]["reps"] = json!(1.0e12);
        let normalized = normalize(&plan);
        assert_eq!(normalized.exercises[0].routines[0].sets, 1);
        assert_eq!(normalized.exercises[0].routines[0].reps, 10);
    }

    #[test]
    fn test_normalize_parses_stringly_typed_counts() {
        let mut plan = valid_plan();
        plan["exercises"][0]["routines"][0]["sets"] = json!("3");
        plan["exercises"][0]["routines"][0]["reps"] = json!("12");
        let normalized = normalize(&plan);
        assert_eq!(normalized.exercises[0].routines[0].sets, 3);
        assert_eq!(normalized.exercises[0].routines[0].reps, 12);
    }

    #[test]
    fn test_normalize_falls_back_on_unparsable_strings() {
        let mut plan = valid_plan();
        plan["exercises"][0]["routines"][0]["sets"] = json!("abc");
        plan["exercises"][0]["routines"][0]["reps"] = json!("To failure");
        let normalized = normalize(&plan);
        assert_eq!(normalized.exercises[0].routines[0].sets, 1);
        assert_eq!(normalized.exercises[0].routines[0].reps, 10);
    }

    #[test]
    fn test_normalize_falls_back_on_zero() {
        let mut plan = valid_plan();
        plan["exercises"][0]["routines"][0]["sets"] = json!("0");
        let normalized = normalize(&plan);
        assert_eq!(normalized.exercises[0].routines[0].sets, 1);
    }

    #[test]
    fn test_normalize_drops_extraneous_fields() {
        let mut plan = valid_plan();
        plan["coachCommentary"] = json!("great plan");
        let normalized = normalize(&plan);
        let round_trip = serde_json::to_value(&normalized).unwrap();
        assert!(round_trip.get("coachCommentary").is_none());
    }
}
