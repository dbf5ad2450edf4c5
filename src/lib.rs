// SPDX-License-Identifier: MIT

//! FitForge: AI-assisted fitness plan generation backend.
//!
//! This crate provides the backend API that synchronizes user accounts from
//! the Clerk identity provider and generates personalized workout and diet
//! plans with the Gemini model.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

use config::Config;
use db::FirestoreDb;
use services::GeminiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub gemini: GeminiClient,
}
