//! Client for the Gemini generative-AI service.
//!
//! This crate asks Gemini, with Google Search grounding enabled, to look up
//! the real title, author and platform of a video link and to summarise it.
//! The response is constrained to a strict four-field JSON schema; anything
//! that does not decode into [`AiMetadata`] is reported as an error.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{GeminiClient, MetadataLookup, API_KEY_HEADER};
pub use config::GeminiConfig;
pub use error::{AiError, AiResult};
pub use types::AiMetadata;
