// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.
//!
//! Secrets are read once at startup; missing required secrets abort startup.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Base URL of the Gemini API (overridable for tests)
    pub gemini_base_url: String,

    // --- Secrets ---
    /// Gemini API key
    pub gemini_api_key: String,
    /// Clerk webhook signing secret (svix `whsec_...` format)
    pub clerk_webhook_secret: String,
}

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` and `CLERK_WEBHOOK_SECRET` are required; the server
    /// refuses to start without them.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),

            gemini_api_key: env::var("GEMINI_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GEMINI_API_KEY"))?,
            clerk_webhook_secret: env::var("CLERK_WEBHOOK_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("CLERK_WEBHOOK_SECRET"))?,
        })
    }

    /// Default config for testing only.
    ///
    /// The webhook secret is a valid svix-format secret so tests can sign
    /// payloads with the decoded key.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_api_key: "test_api_key".to_string(),
            clerk_webhook_secret: "whsec_dGVzdF93ZWJob29rX3NlY3JldF9rZXlfMzJieXRlcyE="
                .to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("GEMINI_API_KEY", "test_key");
        env::set_var("CLERK_WEBHOOK_SECRET", "whsec_dGVzdA==");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.gemini_api_key, "test_key");
        assert_eq!(config.clerk_webhook_secret, "whsec_dGVzdA==");
        assert_eq!(config.port, 8080);
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    }
}
