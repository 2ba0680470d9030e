//! Utility functions used across the application.
//!
//! - [`domain_validator`] - Domain normalization and hostname validation
//! - [`text`] - Character-safe truncation helpers

pub mod domain_validator;
pub mod text;
