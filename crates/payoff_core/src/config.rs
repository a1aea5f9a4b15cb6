//! Plan configuration
//!
//! `PlanConfig` bundles everything a timeline comparison needs: the debt
//! list, the flat monthly budget, any scheduled lump sums, and the start
//! date. `PlanBuilder` is a small fluent layer over it that assigns debt
//! ids and fills in display defaults, mostly for tests and callers
//! assembling plans by hand.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::interest::round_cents;
use crate::model::{Debt, DebtFlavor, DebtId, OneTimeFunding};

/// Complete input for one timeline comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    pub debts: Vec<Debt>,
    /// Total monthly budget for the accelerated scenario, minimums included.
    pub monthly_payment: f64,
    pub one_time_fundings: Vec<OneTimeFunding>,
    /// First simulated month. Defaults to today when absent.
    pub start_date: Option<Date>,
}

impl PlanConfig {
    /// Sum of the minimum payments of all debts, i.e. the baseline budget.
    pub fn total_minimum_payments(&self) -> f64 {
        round_cents(self.debts.iter().map(|d| d.minimum_payment).sum())
    }

    /// Resolved start date: the configured one, or today.
    pub fn resolved_start_date(&self) -> Date {
        self.start_date.unwrap_or_else(|| jiff::Zoned::now().date())
    }
}

/// Fluent builder with automatic debt id assignment.
#[derive(Debug, Default)]
pub struct PlanBuilder {
    config: PlanConfig,
    next_debt_id: u16,
}

impl PlanBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first simulated month.
    #[must_use]
    pub fn start(mut self, year: i16, month: i8, day: i8) -> Self {
        self.config.start_date = Some(jiff::civil::date(year, month, day));
        self
    }

    /// Set the accelerated scenario's total monthly budget.
    #[must_use]
    pub fn monthly_payment(mut self, amount: f64) -> Self {
        self.config.monthly_payment = amount;
        self
    }

    /// Add a standard reducing-balance debt.
    #[must_use]
    pub fn debt(
        mut self,
        name: &str,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        let id = self.take_id();
        self.config
            .debts
            .push(Debt::new(id, name, balance, interest_rate, minimum_payment));
        self
    }

    /// Add a debt whose stated balance already includes all future interest.
    #[must_use]
    pub fn interest_inclusive_debt(
        mut self,
        name: &str,
        total_amount: f64,
        interest_rate: f64,
        minimum_payment: f64,
        term_months: u32,
    ) -> Self {
        let id = self.take_id();
        self.config.debts.push(
            Debt::new(id, name, total_amount, interest_rate, minimum_payment)
                .with_flavor(DebtFlavor::InterestInclusive { term_months }),
        );
        self
    }

    /// Add an interest-only balloon loan.
    #[must_use]
    pub fn gold_loan(
        mut self,
        name: &str,
        balance: f64,
        interest_rate: f64,
        term_months: u32,
        final_payment_date: Date,
    ) -> Self {
        let id = self.take_id();
        let minimum_payment = crate::interest::monthly_interest(balance, interest_rate);
        self.config.debts.push(
            Debt::new(id, name, balance, interest_rate, minimum_payment).with_flavor(
                DebtFlavor::GoldLoan {
                    term_months,
                    final_payment_date,
                },
            ),
        );
        self
    }

    /// Schedule a one-time lump sum in the month of the given date.
    #[must_use]
    pub fn funding(mut self, year: i16, month: i8, day: i8, amount: f64) -> Self {
        self.config
            .one_time_fundings
            .push(OneTimeFunding::new(amount, jiff::civil::date(year, month, day)));
        self
    }

    pub fn build(self) -> PlanConfig {
        self.config
    }

    fn take_id(&mut self) -> DebtId {
        let id = DebtId(self.next_debt_id);
        self.next_debt_id += 1;
        id
    }
}
