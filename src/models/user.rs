// SPDX-License-Identifier: MIT

//! User account model synchronized from Clerk webhooks.

use serde::{Deserialize, Serialize};

/// User account stored in Firestore, keyed by Clerk ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Clerk user ID (also used as document ID)
    pub clerk_id: String,
    /// Primary email address
    pub email: String,
    /// Display name (trimmed first + last name)
    pub name: String,
    /// Profile image URL
    pub image: Option<String>,
    /// When the account was first synced (ISO 8601)
    pub created_at: String,
    /// Last webhook update (ISO 8601)
    pub updated_at: String,
}
