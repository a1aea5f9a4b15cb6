//! Debt definitions
//!
//! A `Debt` is an immutable input record for a simulation run: the simulator
//! copies balances into its own working state and never mutates these.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::DebtId;

/// Repayment structure of a debt.
///
/// Modeled as an enum so that structurally invalid combinations (a balloon
/// loan without a maturity date, an interest-inclusive balance without a
/// term) cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DebtFlavor {
    /// Standard reducing-balance debt: every payment covers the month's
    /// interest first and the remainder reduces principal.
    Reducing,

    /// The stated balance already contains all future interest (a common
    /// data-entry convenience: "total I'll owe" instead of principal).
    /// The true principal is backed out with the annuity present-value
    /// solve before amortizing.
    InterestInclusive { term_months: u32 },

    /// Interest-only loan: every month pays exactly the accrued interest,
    /// with the entire principal due as one balloon payment in the month
    /// of `final_payment_date`.
    GoldLoan {
        term_months: u32,
        final_payment_date: Date,
    },
}

/// One debt record supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub debt_id: DebtId,
    /// Display label, carried through to results untouched.
    pub name: String,
    /// Starting amount owed. For `InterestInclusive` debts this includes
    /// future interest; for the other flavors it is the principal.
    pub balance: f64,
    /// Annual percentage rate, e.g. 12.0 for 12% APR. Zero means
    /// interest-free.
    pub interest_rate: f64,
    /// Contractually required monthly payment.
    pub minimum_payment: f64,
    pub flavor: DebtFlavor,
    /// Scheduling metadata from the persistence layer; not used in the
    /// interest math.
    pub next_payment_date: Option<Date>,
    /// Display currency. Normalization to a common currency happens
    /// upstream; the simulator only carries the symbol through.
    pub currency_symbol: String,
}

impl Debt {
    /// Create a standard reducing-balance debt with display defaults.
    pub fn new(
        debt_id: DebtId,
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            debt_id,
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
            flavor: DebtFlavor::Reducing,
            next_payment_date: None,
            currency_symbol: "$".to_string(),
        }
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: DebtFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    #[must_use]
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn is_gold_loan(&self) -> bool {
        matches!(self.flavor, DebtFlavor::GoldLoan { .. })
    }
}
