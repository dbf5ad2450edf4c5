// SPDX-License-Identifier: MIT

//! Fitness plan models (persisted and API).

use serde::{Deserialize, Serialize};

/// A single routine within a workout day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
}

/// One day of the workout schedule with its routines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDay {
    pub day: String,
    pub routines: Vec<Routine>,
}

/// Workout plan as returned by the model, after validation/normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Ordered day names, e.g. `["Monday", "Wednesday", "Friday"]`
    pub schedule: Vec<String>,
    pub exercises: Vec<ExerciseDay>,
}

/// One meal of the diet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub foods: Vec<String>,
}

/// Diet plan as returned by the model, after validation/normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub daily_calories: f64,
    pub meals: Vec<Meal>,
}

/// Persisted fitness plan.
///
/// Invariant: at most one plan per user has `is_active = true`, enforced by
/// [`crate::db::FirestoreDb::create_plan`] (deactivate-then-insert in one
/// transaction), not by the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Document ID (also stored in the document so queries carry it)
    pub id: String,
    /// Clerk user ID the plan belongs to
    pub user_id: String,
    /// Display name, e.g. `"Build Muscle Plan - 2026-08-29"`
    pub name: String,
    pub workout_plan: WorkoutPlan,
    pub diet_plan: DietPlan,
    /// Whether this is the user's plan currently in effect
    pub is_active: bool,
    /// Creation time (ISO 8601), used for newest-first ordering
    pub created_at: String,
}

impl Plan {
    /// Build a new active plan with a generated document ID.
    pub fn new(user_id: &str, name: &str, workout_plan: WorkoutPlan, diet_plan: DietPlan) -> Self {
        let now = chrono::Utc::now();
        let nanos = now.timestamp_nanos_opt().unwrap_or_default();
        Self {
            id: format!("{}_{}", user_id, nanos),
            user_id: user_id.to_string(),
            name: name.to_string(),
            workout_plan,
            diet_plan,
            is_active: true,
            created_at: now.to_rfc3339(),
        }
    }
}
