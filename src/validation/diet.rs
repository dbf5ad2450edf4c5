// SPDX-License-Identifier: MIT

//! Shape validation and normalization for model-produced diet plans.

use super::ValidationError;
use crate::models::{DietPlan, Meal};
use serde_json::Value;

/// Validate the parsed JSON body of a diet-plan response.
///
/// Every meal and every food entry is checked; errors embed the failing
/// index path. Extraneous fields are tolerated.
pub fn validate(value: &Value) -> Result<(), ValidationError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ValidationError::new("diet plan must be a JSON object"))?;

    let calories_ok = obj
        .get("dailyCalories")
        .and_then(Value::as_f64)
        .is_some_and(f64::is_finite);
    if !calories_ok {
        return Err(ValidationError::new("dailyCalories must be a number"));
    }

    let meals = obj
        .get("meals")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new("meals must be a list"))?;

    for (i, meal) in meals.iter().enumerate() {
        let entry = meal
            .as_object()
            .ok_or_else(|| ValidationError::new(format!("meals[{i}] must be an object")))?;

        if !entry.get("name").is_some_and(Value::is_string) {
            return Err(ValidationError::new(format!(
                "meals[{i}].name must be a string"
            )));
        }

        let foods = entry
            .get("foods")
            .and_then(Value::as_array)
            .ok_or_else(|| ValidationError::new(format!("meals[{i}].foods must be a list")))?;

        for (j, food) in foods.iter().enumerate() {
            if !food.is_string() {
                return Err(ValidationError::new(format!(
                    "meals[{i}].foods[{j}] must be a string"
                )));
            }
        }
    }

    Ok(())
}

/// Project a validated diet value onto the typed model.
///
/// An identity projection: `dailyCalories` and each meal's `name`/`foods`
/// pass through unchanged, while extraneous top-level fields the model may
/// have added are dropped. Must only be called on input that passed
/// [`validate`].
pub fn normalize(value: &Value) -> DietPlan {
    let daily_calories = value
        .get("dailyCalories")
        .and_then(Value::as_f64)
        .unwrap_or_default();

    let meals = value
        .get("meals")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|meal| Meal {
                    name: meal
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    foods: meal
                        .get("foods")
                        .and_then(Value::as_array)
                        .map(|foods| {
                            foods
                                .iter()
                                .filter_map(Value::as_str)
                                .map(str::to_owned)
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();

    DietPlan {
        daily_calories,
        meals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_plan() -> Value {
        json!({
            "dailyCalories": 2200,
            "meals": [
                {"name": "Breakfast", "foods": ["Oatmeal", "Banana"]},
                {"name": "Lunch", "foods": ["Chicken salad"]},
                {"name": "Dinner", "foods": ["Salmon", "Rice", "Broccoli"]},
            ],
        })
    }

    #[test]
    fn test_valid_plan_passes() {
        assert!(validate(&valid_plan()).is_ok());
    }

    #[test]
    fn test_missing_calories_rejected() {
        let err = validate(&json!({"meals": []})).unwrap_err();
        assert_eq!(err.0, "dailyCalories must be a number");
    }

    #[test]
    fn test_textual_calories_rejected() {
        let mut plan = valid_plan();
        plan["dailyCalories"] = json!("2200");
        let err = validate(&plan).unwrap_err();
        assert_eq!(err.0, "dailyCalories must be a number");
    }

    #[test]
    fn test_error_embeds_index_path_for_foods() {
        let mut plan = valid_plan();
        plan["meals"][2]["foods"][1] = json!(42);
        let err = validate(&plan).unwrap_err();
        assert_eq!(err.0, "meals[2].foods[1] must be a string");
    }

    #[test]
    fn test_missing_meal_name_rejected() {
        let mut plan = valid_plan();
        plan["meals"][1].as_object_mut().unwrap().remove("name");
        let err = validate(&plan).unwrap_err();
        assert_eq!(err.0, "meals[1].name must be a string");
    }

    #[test]
    fn test_normalize_is_identity_projection() {
        let normalized = normalize(&valid_plan());
        assert_eq!(normalized.daily_calories, 2200.0);
        assert_eq!(normalized.meals.len(), 3);
        assert_eq!(normalized.meals[0].name, "Breakfast");
        assert_eq!(normalized.meals[2].foods, vec!["Salmon", "Rice", "Broccoli"]);
    }

    #[test]
    fn test_normalize_drops_extraneous_fields() {
        let mut plan = valid_plan();
        plan["hydrationTips"] = json!(["drink water"]);
        let normalized = normalize(&plan);
        let round_trip = serde_json::to_value(&normalized).unwrap();
        assert!(round_trip.get("hydrationTips").is_none());
    }
}
