//! Scenario instrumentation
//!
//! Optional counters collected alongside a scenario run: how many months
//! were stepped, when each debt was cleared, how often a minimum payment
//! could not be covered, and whether the non-convergence cap was hit. The
//! plain entry points skip all of this; the `*_with_metrics` variants
//! return it next to the result.

use std::collections::HashMap;

use crate::model::DebtId;

/// Counters collected during one scenario run.
#[derive(Debug, Clone, Default)]
pub struct ScenarioMetrics {
    /// Total months stepped by the loop.
    pub months_stepped: u32,
    /// Debt-months where the available budget could not cover a minimum
    /// payment and the debt was skipped (interest still capitalized).
    pub skipped_minimums: u64,
    /// 1-based month in which each debt reached zero balance.
    pub payoff_months: HashMap<DebtId, u32>,
    /// The run stopped at the month cap with debts still outstanding.
    pub cap_hit: bool,
}

impl ScenarioMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_month(&mut self) {
        self.months_stepped += 1;
    }

    pub fn record_skipped_minimum(&mut self) {
        self.skipped_minimums += 1;
    }

    pub fn record_payoff(&mut self, debt_id: DebtId, month: u32) {
        self.payoff_months.entry(debt_id).or_insert(month);
    }

    pub fn record_cap_hit(&mut self) {
        self.cap_hit = true;
    }

    /// True when every month's budget covered every remaining minimum.
    #[must_use]
    pub fn fully_funded(&self) -> bool {
        self.skipped_minimums == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counters() {
        let mut metrics = ScenarioMetrics::new();

        metrics.record_month();
        metrics.record_month();
        metrics.record_skipped_minimum();
        metrics.record_payoff(DebtId(1), 2);

        assert_eq!(metrics.months_stepped, 2);
        assert_eq!(metrics.skipped_minimums, 1);
        assert_eq!(metrics.payoff_months.get(&DebtId(1)), Some(&2));
        assert!(!metrics.fully_funded());
        assert!(!metrics.cap_hit);
    }

    #[test]
    fn test_payoff_month_keeps_first_recording() {
        let mut metrics = ScenarioMetrics::new();
        metrics.record_payoff(DebtId(3), 5);
        metrics.record_payoff(DebtId(3), 9);
        assert_eq!(metrics.payoff_months.get(&DebtId(3)), Some(&5));
    }

    #[test]
    fn test_cap_hit() {
        let mut metrics = ScenarioMetrics::new();
        assert!(!metrics.cap_hit);
        metrics.record_cap_hit();
        assert!(metrics.cap_hit);
    }
}
