//! Middleware for the Loantrack API
//!
//! Request tracing and bearer-token authentication extractors.

pub mod auth;
mod tracing;

pub use auth::{AuthenticatedUser, OptionalUser};
pub use tracing::request_tracing;
