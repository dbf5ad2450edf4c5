// SPDX-License-Identifier: MIT

//! Fitness profile submitted for plan generation.

use serde::{Deserialize, Serialize};

/// Request-scoped fitness profile used to build the generation prompts.
///
/// Produced by [`crate::validation::request::validate`]; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub user_id: String,
    pub age: f64,
    pub height: String,
    pub weight: String,
    /// Free-text injury notes ("None" when the user has none)
    pub injuries: String,
    /// Days of the week the user can train
    pub workout_days: Vec<String>,
    pub fitness_goal: String,
    pub fitness_level: String,
    pub dietary_restrictions: Vec<String>,
}
