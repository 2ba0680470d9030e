//! Text-generation capability implemented by each provider integration.
//!
//! Concrete adapters live in `crate::infrastructure::providers`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod text_generator;

pub use text_generator::{ProviderError, TextGenerator};

#[cfg(test)]
pub use text_generator::MockTextGenerator;
