// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod plan;
pub mod profile;
pub mod user;

pub use plan::{DietPlan, ExerciseDay, Meal, Plan, Routine, WorkoutPlan};
pub use profile::GenerationRequest;
pub use user::User;
