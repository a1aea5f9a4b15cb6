//! Pre-flight checks the simulator itself does not perform.
//!
//! The scenario loop deliberately tolerates under-funded debts (it skips
//! them month by month and lets the cap stop a run that will never
//! converge). Callers that want a hard answer up front use these checks
//! before simulating.

use jiff::civil::Date;

use crate::date_math::months_between;
use crate::error::DebtError;
use crate::interest::{monthly_interest, principal_from_total, round_cents};
use crate::model::{Debt, DebtFlavor};

/// Smallest monthly payment that makes progress on the debt.
///
/// For a reducing debt that is one cent more than the first month's
/// interest; anything less capitalizes and the balance grows. An
/// interest-only balloon loan only ever owes its interest month to month,
/// so the interest amount itself is viable.
pub fn minimum_viable_payment(debt: &Debt) -> f64 {
    match debt.flavor {
        DebtFlavor::GoldLoan { .. } => monthly_interest(debt.balance, debt.interest_rate),
        DebtFlavor::InterestInclusive { term_months } => {
            let principal = principal_from_total(
                debt.balance,
                debt.interest_rate,
                debt.minimum_payment,
                term_months,
            );
            round_cents(monthly_interest(principal, debt.interest_rate) + 0.01)
        }
        DebtFlavor::Reducing => {
            round_cents(monthly_interest(debt.balance, debt.interest_rate) + 0.01)
        }
    }
}

/// True when the debt's minimum payment will ever retire it.
pub fn is_debt_payable(debt: &Debt) -> bool {
    debt.minimum_payment >= minimum_viable_payment(debt)
}

/// Reject balloon-loan records the schedule builder cannot amortize.
///
/// The builders assume this has been called; feeding them an invalid
/// balloon loan is a caller bug, not a soft failure.
pub fn validate_gold_loan(debt: &Debt, start_date: Date) -> Result<(), DebtError> {
    match debt.flavor {
        DebtFlavor::GoldLoan {
            term_months,
            final_payment_date,
        } => {
            if term_months == 0 {
                return Err(DebtError::ZeroLoanTerm(debt.debt_id));
            }
            if months_between(start_date, final_payment_date) < 0 {
                return Err(DebtError::MaturityBeforeStart {
                    debt_id: debt.debt_id,
                    maturity: final_payment_date,
                    start: start_date,
                });
            }
            Ok(())
        }
        _ => Err(DebtError::NotAGoldLoan(debt.debt_id)),
    }
}
