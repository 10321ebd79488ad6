//! HTTP handlers for the Loantrack API

pub mod auth;
pub mod loan;

pub use crate::middleware::auth::{AuthenticatedUser, OptionalUser};
pub use auth::*;
pub use loan::*;
