//! Route definitions for the Loantrack API

mod auth;
mod loan;

pub use auth::auth_routes;
pub use loan::loan_routes;

use axum::Router;

use crate::state::AppState;

/// All API routes merged into one router.
pub fn api_router() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(loan_routes())
}
