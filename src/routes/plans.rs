// SPDX-License-Identifier: MIT

//! Plan listing routes.

use crate::error::Result;
use crate::models::Plan;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Plan routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/plans/{user_id}", get(get_user_plans))
}

#[derive(Serialize)]
struct PlansResponse {
    success: bool,
    data: Vec<Plan>,
}

/// List all plans for a user, newest first.
async fn get_user_plans(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<PlansResponse>> {
    let plans = state.db.get_user_plans(&user_id).await?;
    Ok(Json(PlansResponse {
        success: true,
        data: plans,
    }))
}
