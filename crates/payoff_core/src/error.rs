use std::fmt;

use jiff::civil::Date;

use crate::model::DebtId;

/// Errors for debt records that cannot be scheduled as requested.
#[derive(Debug, Clone, PartialEq)]
pub enum DebtError {
    /// A gold-loan operation was requested on a debt of another flavor.
    NotAGoldLoan(DebtId),
    /// A balloon loan with a zero-length term cannot accrue or mature.
    ZeroLoanTerm(DebtId),
    /// The balloon maturity falls before the schedule's start month, so the
    /// interest-only loop would never reach it.
    MaturityBeforeStart {
        debt_id: DebtId,
        maturity: Date,
        start: Date,
    },
}

impl fmt::Display for DebtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebtError::NotAGoldLoan(id) => {
                write!(f, "debt {id:?} is not an interest-only balloon loan")
            }
            DebtError::ZeroLoanTerm(id) => {
                write!(f, "debt {id:?} has a zero-length loan term")
            }
            DebtError::MaturityBeforeStart {
                debt_id,
                maturity,
                start,
            } => {
                write!(
                    f,
                    "debt {debt_id:?} matures {maturity}, before the schedule start {start}"
                )
            }
        }
    }
}

impl std::error::Error for DebtError {}
