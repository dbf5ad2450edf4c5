// SPDX-License-Identifier: MIT

//! Plan generation route.
//!
//! A strict linear pipeline: parse body → envelope unwrap → validate
//! request → workout prompt/model call/validate/normalize → same for diet →
//! persist → respond. Each stage either proceeds or returns its
//! stage-specific error; nothing is retried and nothing is persisted until
//! both plans fully validate.

use crate::error::AppError;
use crate::models::{DietPlan, GenerationRequest, Plan, WorkoutPlan};
use crate::services::prompts;
use crate::validation;
use crate::AppState;
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Generation routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/vapi/generate-program", post(generate_program))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateData {
    plan_id: String,
    workout_plan: WorkoutPlan,
    diet_plan: DietPlan,
}

#[derive(Serialize)]
struct GenerateResponse {
    success: bool,
    data: GenerateData,
}

/// Generate and persist a workout + diet plan for a fitness profile.
async fn generate_program(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    let decoded: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
    let payload = validation::unwrap_envelope(decoded);

    let request = validation::request::validate(&payload)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(
        user_id = %request.user_id,
        fitness_goal = %request.fitness_goal,
        "Generating fitness plan"
    );

    // The two model calls are sequential; the diet prompt does not depend
    // on the workout result.
    let workout_plan = generate_workout(&state, &request).await?;
    let diet_plan = generate_diet(&state, &request).await?;

    let name = format!(
        "{} Plan - {}",
        request.fitness_goal,
        chrono::Utc::now().format("%Y-%m-%d")
    );
    let plan = Plan::new(&request.user_id, &name, workout_plan, diet_plan);
    let plan_id = state.db.create_plan(&plan).await?;

    Ok(Json(GenerateResponse {
        success: true,
        data: GenerateData {
            plan_id,
            workout_plan: plan.workout_plan,
            diet_plan: plan.diet_plan,
        },
    }))
}

/// Call the model for the workout plan, then validate and normalize it.
async fn generate_workout(
    state: &AppState,
    request: &GenerationRequest,
) -> Result<WorkoutPlan, AppError> {
    let prompt = prompts::workout_prompt(request);
    let raw = call_model(state, &prompt, "Failed to generate a valid workout plan").await?;

    validation::workout::validate(&raw).map_err(|e| {
        tracing::error!(error = %e, "Workout plan failed shape validation");
        AppError::PlanShape(e.to_string())
    })?;

    Ok(validation::workout::normalize(&raw))
}

/// Call the model for the diet plan, then validate and normalize it.
async fn generate_diet(state: &AppState, request: &GenerationRequest) -> Result<DietPlan, AppError> {
    let prompt = prompts::diet_prompt(request);
    let raw = call_model(state, &prompt, "Failed to generate a valid diet plan").await?;

    validation::diet::validate(&raw).map_err(|e| {
        tracing::error!(error = %e, "Diet plan failed shape validation");
        AppError::PlanShape(e.to_string())
    })?;

    Ok(validation::diet::normalize(&raw))
}

/// Invoke the model and parse its text output as JSON.
///
/// Both invocation failures and unparsable output surface as the generic
/// stage message; the underlying cause is only logged.
async fn call_model(state: &AppState, prompt: &str, failure: &str) -> Result<Value, AppError> {
    let text = state.gemini.generate(prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Model invocation failed");
        AppError::Generation(failure.to_string())
    })?;

    serde_json::from_str(&text).map_err(|e| {
        tracing::error!(error = %e, "Model output was not valid JSON");
        AppError::Generation(failure.to_string())
    })
}
