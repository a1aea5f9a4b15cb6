//! Simulation results
//!
//! Output types from scenario runs, the baseline-vs-accelerated comparison,
//! and the single-debt schedule builders. All results are plain data,
//! created fresh per invocation; the simulator keeps no state between runs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::DebtId;

/// Amount applied to one debt in the first simulated month.
///
/// Recorded for display only; later months are not broken out per debt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentAllocation {
    pub debt_id: DebtId,
    pub amount: f64,
}

/// Aggregate totals for one simulated month, across all debts in the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    /// 1-based month number.
    pub month: u32,
    pub date: Date,
    /// Sum of all remaining balances at the end of the month.
    pub total_balance: f64,
    /// Interest accrued across all debts this month.
    pub interest: f64,
    /// Principal actually retired this month.
    pub principal: f64,
}

/// Outcome of one scenario run (baseline or accelerated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Months until every debt reached zero balance, or the safety cap.
    pub months: u32,
    /// Total interest accrued over the run.
    pub total_interest: f64,
    /// Start date plus `months`.
    pub payoff_date: Date,
    /// Per-debt amounts applied in the first month.
    pub first_month_payments: Vec<PaymentAllocation>,
    /// Aggregate balance curve, one entry per simulated month.
    pub monthly_totals: Vec<MonthTotal>,
    /// True when the run hit the safety cap with debts still outstanding;
    /// `months` and `total_interest` are then lower bounds, not a payoff.
    pub truncated: bool,
}

impl ScenarioResult {
    /// Amount applied to `debt_id` in the first month, if any payment was
    /// made to it.
    pub fn first_month_payment(&self, debt_id: DebtId) -> Option<f64> {
        self.first_month_payments
            .iter()
            .find(|p| p.debt_id == debt_id)
            .map(|p| p.amount)
    }

    /// End-of-month total balance for a 1-based month number.
    pub fn balance_after_month(&self, month: u32) -> Option<f64> {
        self.monthly_totals
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.total_balance)
    }
}

/// Baseline-vs-accelerated comparison for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineResult {
    pub baseline_months: u32,
    pub accelerated_months: u32,
    pub baseline_interest: f64,
    pub accelerated_interest: f64,
    /// `baseline_months - accelerated_months`, floored at zero.
    pub months_saved: u32,
    /// `baseline_interest - accelerated_interest`, floored at zero.
    pub interest_saved: f64,
    /// Payoff date of the accelerated scenario.
    pub payoff_date: Date,
    /// First-month allocations from the accelerated scenario.
    pub monthly_payments: Vec<PaymentAllocation>,
    /// Display currency of the first debt, carried through unconverted.
    pub currency_symbol: String,
    /// True when either scenario hit the safety cap.
    pub truncated: bool,
}

impl TimelineResult {
    /// First-month amount applied to `debt_id` in the accelerated run.
    pub fn payment_for(&self, debt_id: DebtId) -> Option<f64> {
        self.monthly_payments
            .iter()
            .find(|p| p.debt_id == debt_id)
            .map(|p| p.amount)
    }
}

/// One row of a single-debt schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based month number.
    pub month: u32,
    pub date: Date,
    pub starting_balance: f64,
    /// Total paid this month, including any one-time funding.
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub ending_balance: f64,
}

/// Full per-month schedule for one debt, for detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffSchedule {
    pub debt_id: DebtId,
    pub rows: Vec<ScheduleRow>,
}

impl PayoffSchedule {
    pub fn months(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn total_interest(&self) -> f64 {
        crate::interest::round_cents(self.rows.iter().map(|r| r.interest).sum())
    }

    pub fn total_paid(&self) -> f64 {
        crate::interest::round_cents(self.rows.iter().map(|r| r.payment).sum())
    }

    /// Date of the final payment, if the schedule has any rows.
    pub fn payoff_date(&self) -> Option<Date> {
        self.rows.last().map(|r| r.date)
    }
}
