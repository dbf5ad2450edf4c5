// SPDX-License-Identifier: MIT

use base64::{engine::general_purpose::STANDARD, Engine as _};
use fitforge::config::Config;
use fitforge::db::FirestoreDb;
use fitforge::routes::create_router;
use fitforge::services::GeminiClient;
use fitforge::AppState;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

/// Raw key behind the `whsec_...` secret in `Config::test_default()`.
#[allow(dead_code)]
pub const TEST_WEBHOOK_KEY: &[u8] = b"test_webhook_secret_key_32bytes!";

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    build_app(test_db_offline(), None)
}

/// Create a test app with an offline database and the Gemini client pointed
/// at a stub server.
#[allow(dead_code)]
pub fn create_test_app_with_gemini(gemini_base_url: &str) -> (axum::Router, Arc<AppState>) {
    build_app(test_db_offline(), Some(gemini_base_url))
}

/// Create a test app against the Firestore emulator with the Gemini client
/// pointed at a stub server.
#[allow(dead_code)]
pub async fn create_emulator_app_with_gemini(
    gemini_base_url: &str,
) -> (axum::Router, Arc<AppState>) {
    build_app(test_db().await, Some(gemini_base_url))
}

/// Create a test app whose webhook secret is replaced wholesale, for
/// exercising misconfiguration paths.
#[allow(dead_code)]
pub fn create_test_app_with_secret(secret: &str) -> (axum::Router, Arc<AppState>) {
    let (app, state) = build_app_with(test_db_offline(), None, Some(secret));
    (app, state)
}

#[allow(dead_code)]
fn build_app(db: FirestoreDb, gemini_base_url: Option<&str>) -> (axum::Router, Arc<AppState>) {
    build_app_with(db, gemini_base_url, None)
}

#[allow(dead_code)]
fn build_app_with(
    db: FirestoreDb,
    gemini_base_url: Option<&str>,
    webhook_secret: Option<&str>,
) -> (axum::Router, Arc<AppState>) {
    let mut config = Config::test_default();
    if let Some(url) = gemini_base_url {
        config.gemini_base_url = url.to_string();
    }
    if let Some(secret) = webhook_secret {
        config.clerk_webhook_secret = secret.to_string();
    }

    let gemini = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
    );

    let state = Arc::new(AppState { config, db, gemini });

    (create_router(state.clone()), state)
}

/// Sign a webhook body the way svix does, using the test secret.
#[allow(dead_code)]
pub fn sign_webhook(id: &str, timestamp: &str, body: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(TEST_WEBHOOK_KEY).expect("HMAC accepts any key length");
    mac.update(format!("{id}.{timestamp}.").as_bytes());
    mac.update(body);
    format!("v1,{}", STANDARD.encode(mac.finalize().into_bytes()))
}
