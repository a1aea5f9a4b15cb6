//! One-time funding events
//!
//! A funding is a scheduled lump sum (a bonus, a tax refund) that the
//! accelerated scenario injects into the month whose calendar month and year
//! match the funding's payment date.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::date_math::same_month;

/// A scheduled one-time lump-sum payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneTimeFunding {
    /// Positive monetary amount.
    pub amount: f64,
    /// Matched against simulated months by month + year equality.
    pub payment_date: Date,
    pub notes: Option<String>,
}

impl OneTimeFunding {
    pub fn new(amount: f64, payment_date: Date) -> Self {
        Self {
            amount,
            payment_date,
            notes: None,
        }
    }
}

/// Sum of all fundings that land in the calendar month of `month`.
#[must_use]
pub fn fundings_for_month(fundings: &[OneTimeFunding], month: Date) -> f64 {
    fundings
        .iter()
        .filter(|f| same_month(f.payment_date, month))
        .map(|f| f.amount)
        .sum()
}
