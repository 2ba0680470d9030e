//! Domain layer containing the visibility model and provider contracts.
//!
//! This module holds the data that flows through the probing pipeline and the
//! capability trait implemented by every text-generation provider. It has no
//! dependencies on HTTP, caching, or concrete provider APIs.
//!
//! # Architecture
//!
//! - [`entities`] - Validated domain names, per-provider results, aggregate analysis
//! - [`catalog`] - Category tables driving prompt selection and competitor lookup
//! - [`generators`] - The [`generators::TextGenerator`] capability trait
//!
//! # Analysis Flow
//!
//! 1. Raw input is validated into an [`entities::DomainName`]
//! 2. Each provider probe asks its [`generators::TextGenerator`] for answers
//! 3. Mentions are scored into an [`entities::VisibilityResult`] per provider
//! 4. Results are reduced into an [`entities::DomainAnalysis`]

pub mod catalog;
pub mod entities;
pub mod generators;
