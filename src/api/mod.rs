//! HTTP surface of the service.
//!
//! Handlers are thin: they validate input, call [`crate::application`]
//! services through [`crate::state::AppState`] and map failures to
//! [`crate::error::AppError`].
//!
//! - [`dto`] - Request and response bodies that are not domain entities
//! - [`handlers`] - One module per endpoint group
//! - [`middleware`] - Session auth, per-IP rate limiting, access log
//! - [`routes`] - Protected and public route tables

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
