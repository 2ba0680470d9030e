//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete adapters for the text-generation providers and the analysis cache.
//!
//! # Modules
//!
//! - [`cache`] - Latest-analysis storage (memory, Redis and no-op implementations)
//! - [`providers`] - OpenAI and Gemini HTTP adapters

pub mod cache;
pub mod providers;
