//! Core entities of the visibility model.
//!
//! # Entity Types
//!
//! - [`DomainName`] - A validated, normalized hostname
//! - [`VisibilityResult`] - Outcome of probing one provider
//! - [`DomainAnalysis`] - Aggregate result returned to callers
//!
//! All types serialize to the camelCase JSON shape consumed by the dashboard.

pub mod analysis;
pub mod domain_name;
pub mod visibility;

pub use analysis::{
    ChangeDirection, CompetitorEntry, DomainAnalysis, Highlight, HighlightKind, PromptRow,
    PromptStatus, ProviderPresence, TrendPoint,
};
pub use domain_name::DomainName;
pub use visibility::{ProbeStatus, ProviderKind, VisibilityResult};
