// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (accounts synchronized from Clerk webhooks)
//! - Plans (generated workout/diet plans, with the single-active-plan
//!   invariant enforced on insert)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Plan, User};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by their Clerk ID.
    pub async fn get_user(&self, clerk_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(clerk_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or replace a user record (webhook `user.created`).
    pub async fn sync_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.clerk_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Update a user's profile fields (webhook `user.updated`).
    ///
    /// Preserves the original `created_at` when the account already exists.
    pub async fn update_user(&self, user: &User) -> Result<(), AppError> {
        let mut record = user.clone();
        if let Some(existing) = self.get_user(&user.clerk_id).await? {
            record.created_at = existing.created_at;
        }
        self.sync_user(&record).await
    }

    // ─── Plan Operations ─────────────────────────────────────────

    /// Insert a plan, deactivating any currently active plans for the user.
    ///
    /// The active-plan read, the deactivations and the insert all run in
    /// one Firestore transaction, so the read registers for conflict
    /// detection: if a concurrent `create_plan` for the same user commits
    /// first, Firestore retries this transaction with fresh data instead of
    /// letting both inserts land active. No committed state ever shows more
    /// than one active plan per user. Returns the new plan's document ID.
    pub async fn create_plan(&self, plan: &Plan) -> Result<String, AppError> {
        let client = self.get_client()?;

        let plan_owned = plan.clone();
        client
            .run_transaction(move |db, transaction| {
                let plan = plan_owned.clone();
                Box::pin(async move {
                    // This query goes through the transaction-scoped client,
                    // not `client`, so the snapshot is conflict-checked at
                    // commit time.
                    let user_id = plan.user_id.clone();
                    let active: Vec<Plan> = db
                        .fluent()
                        .select()
                        .from(collections::PLANS)
                        .filter(move |q| {
                            q.for_all([
                                q.field("userId").eq(user_id.clone()),
                                q.field("isActive").eq(true),
                            ])
                        })
                        .obj()
                        .query()
                        .await?;

                    for prior in &active {
                        let mut deactivated = prior.clone();
                        deactivated.is_active = false;

                        db.fluent()
                            .update()
                            .in_col(collections::PLANS)
                            .document_id(&prior.id)
                            .object(&deactivated)
                            .add_to_transaction(transaction)?;
                    }

                    db.fluent()
                        .update()
                        .in_col(collections::PLANS)
                        .document_id(&plan.id)
                        .object(&plan)
                        .add_to_transaction(transaction)?;

                    tracing::debug!(
                        user_id = %plan.user_id,
                        deactivated = active.len(),
                        "Plan transaction staged"
                    );

                    Ok(())
                })
            })
            .await
            .map_err(|e| AppError::Database(format!("Plan transaction failed: {}", e)))?;

        tracing::info!(
            user_id = %plan.user_id,
            plan_id = %plan.id,
            "Plan created"
        );

        Ok(plan.id.clone())
    }

    /// Get all plans for a user, newest first.
    pub async fn get_user_plans(&self, user_id: &str) -> Result<Vec<Plan>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::PLANS)
            .filter(move |q| q.field("userId").eq(user_id.clone()))
            .order_by([(
                "createdAt",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
