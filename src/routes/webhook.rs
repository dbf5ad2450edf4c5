// SPDX-License-Identifier: MIT

//! Clerk webhook route for user lifecycle events.

use crate::error::AppError;
use crate::models::User;
use crate::services::svix;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Webhook routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/clerk-webhook", post(handle_event))
}

/// Clerk webhook event envelope.
#[derive(Deserialize, Debug)]
struct ClerkEvent {
    /// Event type, e.g. "user.created" or "user.updated"
    #[serde(rename = "type")]
    event_type: String,
    data: ClerkUserData,
}

/// User payload inside a Clerk event.
#[derive(Deserialize, Debug)]
struct ClerkUserData {
    #[serde(default)]
    id: String,
    #[serde(default)]
    email_addresses: Vec<ClerkEmail>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ClerkEmail {
    email_address: String,
}

/// Handle an incoming signed Clerk event (POST).
///
/// Rejects with 400 when any svix header is missing or the signature does
/// not verify, and with 500 when the configured secret itself is unusable;
/// event types other than user.created/user.updated are accepted with no
/// side effect. Always responds 200 on reaching the end of processing.
async fn handle_event(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let id = require_header(&headers, "svix-id")?;
    let timestamp = require_header(&headers, "svix-timestamp")?;
    let signature = require_header(&headers, "svix-signature")?;

    svix::verify_signature(
        &state.config.clerk_webhook_secret,
        id,
        timestamp,
        signature,
        &body,
    )
    .map_err(|e| match e {
        // A secret we cannot decode is our misconfiguration, not the
        // caller's; surfacing it as 400 would hide it from operators.
        svix::VerifyError::BadSecret => {
            tracing::error!(error = %e, "Webhook secret is misconfigured");
            AppError::Internal(anyhow::anyhow!("webhook secret misconfigured"))
        }
        _ => {
            tracing::warn!(error = %e, "Webhook signature verification failed");
            AppError::BadRequest("invalid webhook signature".to_string())
        }
    })?;

    let event: ClerkEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid webhook payload: {}", e)))?;

    match event.event_type.as_str() {
        "user.created" => {
            let user = user_from_event(&event.data);
            state.db.sync_user(&user).await?;
            tracing::info!(clerk_id = %user.clerk_id, "User created");
        }
        "user.updated" => {
            let user = user_from_event(&event.data);
            state.db.update_user(&user).await?;
            tracing::info!(clerk_id = %user.clerk_id, "User updated");
        }
        other => {
            tracing::debug!(event_type = %other, "Ignoring unhandled event type");
        }
    }

    Ok(StatusCode::OK)
}

fn require_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, AppError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::BadRequest(format!("missing {} header", name)))
}

/// Normalize a Clerk user payload into our account record.
///
/// Email comes from the first entry of `email_addresses`; the display name
/// is the trimmed concatenation of first and last name.
fn user_from_event(data: &ClerkUserData) -> User {
    let email = data
        .email_addresses
        .first()
        .map(|entry| entry.email_address.clone())
        .unwrap_or_default();

    let name = format!(
        "{} {}",
        data.first_name.as_deref().unwrap_or(""),
        data.last_name.as_deref().unwrap_or(""),
    )
    .trim()
    .to_string();

    let now = chrono::Utc::now().to_rfc3339();

    User {
        clerk_id: data.id.clone(),
        email,
        name,
        image: data.image_url.clone(),
        created_at: now.clone(),
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_data(value: serde_json::Value) -> ClerkUserData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_user_from_event_derives_email_and_name() {
        let data = user_data(json!({
            "id": "user_2abc",
            "email_addresses": [
                {"email_address": "primary@example.com"},
                {"email_address": "secondary@example.com"},
            ],
            "first_name": "Ada",
            "last_name": "Lovelace",
            "image_url": "https://img.clerk.com/ada.png",
        }));

        let user = user_from_event(&data);
        assert_eq!(user.clerk_id, "user_2abc");
        assert_eq!(user.email, "primary@example.com");
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.image.as_deref(), Some("https://img.clerk.com/ada.png"));
    }

    #[test]
    fn test_user_from_event_trims_missing_names() {
        let data = user_data(json!({
            "id": "user_2abc",
            "email_addresses": [{"email_address": "a@example.com"}],
            "first_name": "Ada",
        }));

        let user = user_from_event(&data);
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn test_user_from_event_handles_empty_payload() {
        let data = user_data(json!({"id": "user_2abc"}));
        let user = user_from_event(&data);
        assert_eq!(user.email, "");
        assert_eq!(user.name, "");
        assert!(user.image.is_none());
    }
}
