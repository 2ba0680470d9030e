//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Analysis responses reuse the domain entities
//! directly, which already serialize in camelCase.

pub mod auth;
pub mod health;
pub mod search;
