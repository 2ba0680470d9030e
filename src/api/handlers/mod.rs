//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analysis;
pub mod auth;
pub mod health;
pub mod search;

pub use analysis::latest_analysis_handler;
pub use auth::{login_handler, logout_handler};
pub use health::health_handler;
pub use search::search_handler;
