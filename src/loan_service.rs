//! Loan service layer - persistence and update flows for loan records
//!
//! All writes go through [`crate::calculator::calculate`] so the derived
//! columns always agree with the authoritative inputs.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::calculator::calculate;
use crate::error::{ApiError, ApiResult};
use crate::loan::{CreateLoanRequest, Loan, UpdateLoanRequest};

/// Loan record store, scoped by owner identity.
#[derive(Clone)]
pub struct LoanService {
    db_pool: PgPool,
}

impl LoanService {
    /// Create a new loan service instance
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Insert a new loan owned by `owner_id`, deriving the computed columns.
    pub async fn insert(&self, owner_id: Uuid, request: &CreateLoanRequest) -> ApiResult<Loan> {
        let (loan_name, terms) = request.into_terms()?;
        let figures = calculate(&terms)?;

        let now = Utc::now();
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (
                id, loan_name, amount, duration, interest_rate, paid_amount,
                total_interest, total_payable, remaining_amount,
                created_by, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&loan_name)
        .bind(terms.amount)
        .bind(terms.duration)
        .bind(terms.interest_rate)
        .bind(terms.paid_amount)
        .bind(figures.total_interest)
        .bind(figures.total_payable)
        .bind(figures.remaining_amount)
        .bind(owner_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(loan)
    }

    /// Fetch a loan by id, scoped to its owner.
    pub async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> ApiResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Loan not found".to_string()))
    }

    /// List all loans owned by `owner_id`, newest creation first.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> ApiResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE created_by = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(loans)
    }

    /// Merge `request` over the stored record, recompute the derived columns,
    /// and write the result back.
    ///
    /// The row is locked for the duration of the transaction, so concurrent
    /// updates to the same record serialize rather than clobbering each other.
    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        request: &UpdateLoanRequest,
    ) -> ApiResult<Loan> {
        let mut tx = self.db_pool.begin().await?;

        let existing = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE id = $1 AND created_by = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound("Loan not found".to_string()))?;

        // Merge: unset fields keep their stored values.
        let loan_name = request
            .loan_name
            .clone()
            .unwrap_or_else(|| existing.loan_name.clone());
        let mut terms = existing.terms();
        if let Some(amount) = request.amount {
            terms.amount = amount;
        }
        if let Some(duration) = request.duration {
            terms.duration = duration;
        }
        if let Some(interest_rate) = request.interest_rate {
            terms.interest_rate = interest_rate;
        }
        if let Some(paid_amount) = request.paid_amount {
            terms.paid_amount = paid_amount;
        }

        let mut violations = Vec::new();
        if loan_name.trim().is_empty() {
            violations.push("loan name is required".to_string());
        }
        if let Err(invalid) = terms.validate() {
            violations.extend(invalid.violations);
        }
        if !violations.is_empty() {
            return Err(ApiError::Validation(violations));
        }

        let figures = calculate(&terms)?;

        let updated = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans
            SET loan_name = $1, amount = $2, duration = $3, interest_rate = $4,
                paid_amount = $5, total_interest = $6, total_payable = $7,
                remaining_amount = $8, updated_at = $9
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&loan_name)
        .bind(terms.amount)
        .bind(terms.duration)
        .bind(terms.interest_rate)
        .bind(terms.paid_amount)
        .bind(figures.total_interest)
        .bind(figures.total_payable)
        .bind(figures.remaining_amount)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Delete a loan by id, scoped to its owner.
    pub async fn delete_by_id(&self, id: Uuid, owner_id: Uuid) -> ApiResult<()> {
        let rows_affected = sqlx::query("DELETE FROM loans WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(ApiError::NotFound("Loan not found".to_string()));
        }

        Ok(())
    }
}
