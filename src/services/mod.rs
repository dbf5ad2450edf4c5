// SPDX-License-Identifier: MIT

//! Services module - external collaborators and business logic.

pub mod gemini;
pub mod prompts;
pub mod svix;

pub use gemini::GeminiClient;
