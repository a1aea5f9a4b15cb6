//! Prioritization strategies for the accelerated scenario.
//!
//! A strategy is a pure reordering: it must return the same debts it was
//! given, in priority order, never adding or removing any. The accelerated
//! scenario sends all spare budget to the front of the ordered list, so the
//! ordering *is* the strategy.

use crate::model::Debt;

/// A total reordering of the debt list by payoff priority.
pub trait PayoffStrategy {
    /// Short label for display ("Avalanche", "Snowball").
    fn name(&self) -> &'static str;

    /// Return the same set of debts, reordered by descending priority.
    fn prioritize(&self, debts: &[Debt]) -> Vec<Debt>;
}

/// Highest APR first: minimizes total interest paid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Avalanche;

impl PayoffStrategy for Avalanche {
    fn name(&self) -> &'static str {
        "Avalanche"
    }

    fn prioritize(&self, debts: &[Debt]) -> Vec<Debt> {
        let mut ordered = debts.to_vec();
        // stable sort: equal rates keep their input order
        ordered.sort_by(|a, b| b.interest_rate.total_cmp(&a.interest_rate));
        ordered
    }
}

/// Lowest balance first: fastest first payoff, for the motivational win.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snowball;

impl PayoffStrategy for Snowball {
    fn name(&self) -> &'static str {
        "Snowball"
    }

    fn prioritize(&self, debts: &[Debt]) -> Vec<Debt> {
        let mut ordered = debts.to_vec();
        ordered.sort_by(|a, b| a.balance.total_cmp(&b.balance));
        ordered
    }
}
