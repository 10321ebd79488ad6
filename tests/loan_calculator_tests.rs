//! Property tests for the loan figure derivation

use loantrack_server::calculator::{calculate, LoanTerms};

fn terms(amount: f64, interest_rate: f64, duration: i32, paid_amount: f64) -> LoanTerms {
    LoanTerms {
        amount,
        interest_rate,
        duration,
        paid_amount,
    }
}

// ============================================================================
// Worked Examples
// ============================================================================

#[test]
fn test_worked_example_six_month_loan() {
    let figures = calculate(&terms(10_000.0, 12.0, 6, 0.0)).unwrap();
    assert_eq!(figures.total_interest, 7_200.0);
    assert_eq!(figures.total_payable, 17_200.0);
    assert_eq!(figures.remaining_amount, 17_200.0);
}

#[test]
fn test_worked_example_partially_paid_loan() {
    let figures = calculate(&terms(5_000.0, 10.0, 1, 500.0)).unwrap();
    assert_eq!(figures.total_interest, 500.0);
    assert_eq!(figures.total_payable, 5_500.0);
    assert_eq!(figures.remaining_amount, 5_000.0);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_payable_minus_principal_is_interest() {
    let amounts = [1.0, 250.0, 10_000.0, 1_234_567.89];
    let rates = [0.0, 0.5, 12.0, 99.9];
    let durations = [1, 6, 12, 360];

    for &amount in &amounts {
        for &rate in &rates {
            for &duration in &durations {
                let figures = calculate(&terms(amount, rate, duration, 0.0)).unwrap();
                let diff = (figures.total_payable - amount - figures.total_interest).abs();
                assert!(
                    diff < 1e-6,
                    "invariant broken for amount={amount} rate={rate} duration={duration}"
                );
            }
        }
    }
}

#[test]
fn test_remaining_never_negative() {
    let payable = calculate(&terms(1_000.0, 5.0, 12, 0.0)).unwrap().total_payable;

    for paid in [0.0, payable / 2.0, payable, payable + 0.01, payable * 1_000.0] {
        let figures = calculate(&terms(1_000.0, 5.0, 12, paid)).unwrap();
        assert!(
            figures.remaining_amount >= 0.0,
            "negative remaining for paid={paid}"
        );
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let t = terms(42_000.0, 3.25, 48, 1_999.99);
    let first = calculate(&t).unwrap();
    for _ in 0..10 {
        assert_eq!(calculate(&t).unwrap(), first);
    }
}

// ============================================================================
// Input Rejection
// ============================================================================

#[test]
fn test_rejects_invalid_inputs() {
    assert!(calculate(&terms(0.0, 5.0, 12, 0.0)).is_err());
    assert!(calculate(&terms(-500.0, 5.0, 12, 0.0)).is_err());
    assert!(calculate(&terms(1_000.0, 5.0, 0, 0.0)).is_err());
    assert!(calculate(&terms(1_000.0, 5.0, -12, 0.0)).is_err());
    assert!(calculate(&terms(1_000.0, -5.0, 12, 0.0)).is_err());
    assert!(calculate(&terms(1_000.0, 5.0, 12, -1.0)).is_err());
    assert!(calculate(&terms(f64::NAN, 5.0, 12, 0.0)).is_err());
    assert!(calculate(&terms(1_000.0, f64::INFINITY, 12, 0.0)).is_err());
}

#[test]
fn test_rejection_lists_every_violation() {
    let err = calculate(&terms(-1.0, -1.0, -1, -1.0)).unwrap_err();
    assert_eq!(err.violations.len(), 4);

    let err = calculate(&terms(-1.0, 5.0, 12, 0.0)).unwrap_err();
    assert_eq!(err.violations.len(), 1);
}
