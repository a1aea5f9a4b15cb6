//! Baseline-vs-accelerated timeline comparison.
//!
//! Runs the scenario loop twice (once with minimum payments in the
//! caller's debt order, once with the strategy-ordered debts, the full
//! budget, and lump-sum fundings) and reports the differential. The two
//! runs share no state, so they execute in parallel when the `parallel`
//! feature is enabled.

use crate::config::PlanConfig;
use crate::interest::round_cents;
use crate::model::{ScenarioResult, TimelineResult};
use crate::scenario::{ScenarioKind, run_scenario};
use crate::strategy::PayoffStrategy;

/// Compare the do-nothing baseline against the strategy-accelerated payoff.
pub fn calculate_timeline(config: &PlanConfig, strategy: &dyn PayoffStrategy) -> TimelineResult {
    let start_date = config.resolved_start_date();
    let ordered = strategy.prioritize(&config.debts);

    let baseline_budget = config.total_minimum_payments();
    let run_baseline = || {
        run_scenario(
            &config.debts,
            baseline_budget,
            &config.one_time_fundings,
            start_date,
            ScenarioKind::Baseline,
        )
    };
    let run_accelerated = || {
        run_scenario(
            &ordered,
            config.monthly_payment,
            &config.one_time_fundings,
            start_date,
            ScenarioKind::Accelerated,
        )
    };

    let (baseline, accelerated) = run_pair(run_baseline, run_accelerated);

    // A pathological strategy ordering can make the accelerated run worse;
    // savings are floored at zero rather than reported as negative.
    let months_saved = baseline.months.saturating_sub(accelerated.months);
    let interest_saved =
        round_cents((baseline.total_interest - accelerated.total_interest).max(0.0));

    let currency_symbol = config
        .debts
        .first()
        .map(|d| d.currency_symbol.clone())
        .unwrap_or_else(|| "$".to_string());

    TimelineResult {
        baseline_months: baseline.months,
        accelerated_months: accelerated.months,
        baseline_interest: baseline.total_interest,
        accelerated_interest: accelerated.total_interest,
        months_saved,
        interest_saved,
        payoff_date: accelerated.payoff_date,
        monthly_payments: accelerated.first_month_payments,
        currency_symbol,
        truncated: baseline.truncated || accelerated.truncated,
    }
}

#[cfg(feature = "parallel")]
fn run_pair(
    baseline: impl FnOnce() -> ScenarioResult + Send,
    accelerated: impl FnOnce() -> ScenarioResult + Send,
) -> (ScenarioResult, ScenarioResult) {
    rayon::join(baseline, accelerated)
}

#[cfg(not(feature = "parallel"))]
fn run_pair(
    baseline: impl FnOnce() -> ScenarioResult,
    accelerated: impl FnOnce() -> ScenarioResult,
) -> (ScenarioResult, ScenarioResult) {
    (baseline(), accelerated())
}
