//! Application state shared across handlers

use std::sync::Arc;

use crate::auth::AuthService;
use crate::config::AuthMode;
use crate::loan_service::LoanService;

use axum::extract::FromRef;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub loan_service: Arc<LoanService>,
    pub auth_service: Arc<AuthService>,
    pub auth_mode: AuthMode,
}

impl AppState {
    pub fn new(
        loan_service: Arc<LoanService>,
        auth_service: Arc<AuthService>,
        auth_mode: AuthMode,
    ) -> Self {
        Self {
            loan_service,
            auth_service,
            auth_mode,
        }
    }
}

impl FromRef<AppState> for Arc<LoanService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.loan_service.clone()
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for AuthMode {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_mode
    }
}
