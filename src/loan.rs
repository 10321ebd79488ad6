//! Loan models for Loantrack

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::calculator::{InvalidLoanTerms, LoanTerms};

/// Loan record as stored, including the derived columns.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: Uuid,
    pub loan_name: String,
    pub amount: f64,
    pub duration: i32, // months
    pub interest_rate: f64, // percentage
    pub paid_amount: f64,
    pub total_interest: f64,
    pub total_payable: f64,
    pub remaining_amount: f64,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Loan {
    /// The authoritative inputs of this record, for recomputation.
    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            amount: self.amount,
            interest_rate: self.interest_rate,
            duration: self.duration,
            paid_amount: self.paid_amount,
        }
    }
}

/// Request to create a new loan.
///
/// Fields are optional at the wire level so that missing and malformed
/// inputs can be reported together as one validation failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    pub loan_name: Option<String>,
    pub amount: Option<f64>,
    pub duration: Option<i32>,
    pub interest_rate: Option<f64>,
    pub paid_amount: Option<f64>,
}

impl CreateLoanRequest {
    /// Validate and coerce into the strongly-typed loan inputs, collecting
    /// every missing or out-of-range field rather than stopping at the first.
    pub fn into_terms(&self) -> Result<(String, LoanTerms), InvalidLoanTerms> {
        let mut violations = Vec::new();

        let loan_name = match self.loan_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                violations.push("loanName is required".to_string());
                String::new()
            }
        };

        let mut terms = None;
        match (self.amount, self.duration, self.interest_rate) {
            (Some(amount), Some(duration), Some(interest_rate)) => {
                let candidate = LoanTerms {
                    amount,
                    interest_rate,
                    duration,
                    paid_amount: self.paid_amount.unwrap_or(0.0),
                };
                match candidate.validate() {
                    Ok(()) => terms = Some(candidate),
                    Err(invalid) => violations.extend(invalid.violations),
                }
            }
            (amount, duration, interest_rate) => {
                if amount.is_none() {
                    violations.push("amount is required".to_string());
                }
                if duration.is_none() {
                    violations.push("duration is required".to_string());
                }
                if interest_rate.is_none() {
                    violations.push("interestRate is required".to_string());
                }
            }
        }

        match terms {
            Some(terms) if violations.is_empty() => Ok((loan_name, terms)),
            _ => Err(InvalidLoanTerms { violations }),
        }
    }
}

/// Partial update request; unset fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoanRequest {
    pub loan_name: Option<String>,
    pub amount: Option<f64>,
    pub duration: Option<i32>,
    pub interest_rate: Option<f64>,
    pub paid_amount: Option<f64>,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Single-loan response envelope
#[derive(Debug, Serialize)]
pub struct LoanResponse {
    pub loan: Loan,
}

/// Loan list response envelope
#[derive(Debug, Serialize)]
pub struct LoanListResponse {
    pub loans: Vec<Loan>,
}

/// Plain message response (used by delete)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
