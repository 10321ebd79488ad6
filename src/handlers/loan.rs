//! Loan HTTP handlers
//!
//! CRUD endpoints over the loan record store. Owner identity is resolved from
//! the bearer token and the configured [`AuthMode`] before any store call.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{AuthenticatedUser, OptionalUser};
use crate::config::AuthMode;
use crate::error::ApiError;
use crate::loan::{
    CreateLoanRequest, LoanListResponse, LoanResponse, MessageResponse, UpdateLoanRequest,
};
use crate::state::AppState;

/// Owner identity used by `AnonymousSingleUser` mode for tokenless requests.
pub const ANONYMOUS_OWNER: Uuid = Uuid::nil();

/// Resolve the owner identity for a loan route.
///
/// A valid token always wins; without one, the configured mode decides
/// between the fixed anonymous owner and a 401.
fn resolve_owner(mode: AuthMode, user: Option<AuthenticatedUser>) -> Result<Uuid, ApiError> {
    match (user, mode) {
        (Some(user), _) => Ok(user.user_id),
        (None, AuthMode::AnonymousSingleUser) => Ok(ANONYMOUS_OWNER),
        (None, AuthMode::RequireAuth) => Err(ApiError::Unauthorized(
            "Bearer token required".to_string(),
        )),
    }
}

/// POST /api/loans - Create a loan with derived figures computed server-side
pub async fn create_loan(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Json(request): Json<CreateLoanRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), ApiError> {
    let owner_id = resolve_owner(state.auth_mode, user)?;
    let loan = state.loan_service.insert(owner_id, &request).await?;

    Ok((StatusCode::CREATED, Json(LoanResponse { loan })))
}

/// GET /api/loans - List the caller's loans, newest creation first
pub async fn list_loans(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> Result<Json<LoanListResponse>, ApiError> {
    let owner_id = resolve_owner(state.auth_mode, user)?;
    let loans = state.loan_service.list_by_owner(owner_id).await?;

    Ok(Json(LoanListResponse { loans }))
}

/// GET /api/loans/:id - Fetch one loan owned by the caller
pub async fn get_loan(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LoanResponse>, ApiError> {
    let owner_id = resolve_owner(state.auth_mode, user)?;
    let loan = state.loan_service.find_by_id(id, owner_id).await?;

    Ok(Json(LoanResponse { loan }))
}

/// PUT /api/loans/:id - Merge the provided fields and recompute derived figures
pub async fn update_loan(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLoanRequest>,
) -> Result<Json<LoanResponse>, ApiError> {
    let owner_id = resolve_owner(state.auth_mode, user)?;
    let loan = state.loan_service.update(id, owner_id, &request).await?;

    Ok(Json(LoanResponse { loan }))
}

/// DELETE /api/loans/:id - Delete one loan owned by the caller
pub async fn delete_loan(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let owner_id = resolve_owner(state.auth_mode, user)?;
    state.loan_service.delete_by_id(id, owner_id).await?;

    Ok(Json(MessageResponse {
        message: "Loan deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authed(user_id: Uuid) -> Option<AuthenticatedUser> {
        Some(AuthenticatedUser {
            user_id,
            email: "test@example.com".to_string(),
        })
    }

    #[test]
    fn test_token_identity_wins_in_both_modes() {
        let id = Uuid::new_v4();
        assert_eq!(resolve_owner(AuthMode::RequireAuth, authed(id)).unwrap(), id);
        assert_eq!(
            resolve_owner(AuthMode::AnonymousSingleUser, authed(id)).unwrap(),
            id
        );
    }

    #[test]
    fn test_tokenless_request_rejected_when_auth_required() {
        let err = resolve_owner(AuthMode::RequireAuth, None).unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_tokenless_request_maps_to_anonymous_owner() {
        assert_eq!(
            resolve_owner(AuthMode::AnonymousSingleUser, None).unwrap(),
            ANONYMOUS_OWNER
        );
    }
}
