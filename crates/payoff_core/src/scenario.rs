//! Month-by-month scenario simulation across a debt set.
//!
//! One run simulates either the baseline ("keep paying minimums") or the
//! accelerated ("strategy order, extra budget, lump-sum fundings") scenario.
//! Each month: carry forward minimums freed by earlier payoffs, inject any
//! fundings landing this calendar month, pay every debt's minimum that the
//! budget can cover, send whatever is left to the highest-priority debt,
//! then sweep out debts that reached zero.

use jiff::civil::Date;
use rustc_hash::FxHashMap;

use crate::date_math::add_months;
use crate::interest::{monthly_interest, remaining_balance, round_cents};
use crate::metrics::ScenarioMetrics;
use crate::model::{
    Debt, DebtId, MonthTotal, OneTimeFunding, PaymentAllocation, ScenarioResult, fundings_for_month,
};
use crate::payment::{apply_payment, is_paid_off};

/// Hard stop for non-converging runs (100 years of months). A debt whose
/// minimum payment never covers its interest will otherwise grow forever;
/// hitting this cap is reported via `ScenarioResult::truncated`.
pub const MAX_MONTHS: u32 = 1200;

/// Which scenario a run simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Minimum payments only, in the caller's debt order. Ignores one-time
    /// fundings entirely, making it a true "do nothing extra" control.
    Baseline,
    /// Strategy-ordered debts, full budget, fundings injected.
    Accelerated,
}

impl ScenarioKind {
    fn is_accelerated(self) -> bool {
        matches!(self, ScenarioKind::Accelerated)
    }
}

/// Working state for one run, discarded when the run completes.
struct ScenarioState {
    balances: FxHashMap<DebtId, f64>,
    /// Debts not yet paid off; shrinks as balances reach zero. The head of
    /// this list is the extra-payment target, so removal alone re-evaluates
    /// priority without re-sorting.
    remaining: Vec<Debt>,
    /// Minimum payments freed by payoffs this month, available next month.
    released_minimums: f64,
    month: u32,
    total_interest: f64,
}

impl ScenarioState {
    fn new(debts: &[Debt]) -> Self {
        let balances = debts.iter().map(|d| (d.debt_id, d.balance)).collect();
        Self {
            balances,
            remaining: debts.to_vec(),
            released_minimums: 0.0,
            month: 0,
            total_interest: 0.0,
        }
    }
}

/// Simulate one scenario. `debts` must already be in priority order for an
/// accelerated run; the baseline uses them as given.
pub fn run_scenario(
    debts: &[Debt],
    monthly_payment: f64,
    fundings: &[OneTimeFunding],
    start_date: Date,
    kind: ScenarioKind,
) -> ScenarioResult {
    run_scenario_with_metrics(debts, monthly_payment, fundings, start_date, kind).0
}

/// Same as [`run_scenario`], returning the instrumentation counters too.
pub fn run_scenario_with_metrics(
    debts: &[Debt],
    monthly_payment: f64,
    fundings: &[OneTimeFunding],
    start_date: Date,
    kind: ScenarioKind,
) -> (ScenarioResult, ScenarioMetrics) {
    let mut state = ScenarioState::new(debts);
    let mut metrics = ScenarioMetrics::new();
    let mut first_month_payments: Vec<PaymentAllocation> = Vec::new();
    let mut monthly_totals: Vec<MonthTotal> = Vec::new();

    while !state.remaining.is_empty() && state.month < MAX_MONTHS {
        let month_date = add_months(start_date, state.month);

        // Freed minimums from last month's payoffs join this month's budget
        let mut available = round_cents(monthly_payment + state.released_minimums);
        state.released_minimums = 0.0;

        // Lump-sum fundings land in their calendar month; the baseline
        // ignores them
        if kind.is_accelerated() {
            let injected = fundings_for_month(fundings, month_date);
            if injected > 0.0 {
                available = round_cents(available + injected);
            }
        }

        let mut month_interest = 0.0;
        let mut month_paid = 0.0;

        // Minimum-payment pass. Interest accrues on every remaining debt
        // whether or not its minimum can be covered; a debt the budget
        // cannot reach is skipped and its interest capitalizes.
        for debt in &state.remaining {
            let balance = state.balances[&debt.debt_id];
            let interest = monthly_interest(balance, debt.interest_rate);
            month_interest = round_cents(month_interest + interest);
            state.total_interest = round_cents(state.total_interest + interest);

            // never pay more than what is owed this month
            let owed = round_cents(balance + interest);
            let min_payment = debt.minimum_payment.min(owed);

            if available >= min_payment {
                state
                    .balances
                    .insert(debt.debt_id, apply_payment(balance, min_payment, interest));
                available = round_cents(available - min_payment);
                month_paid = round_cents(month_paid + min_payment);
                if state.month == 0 {
                    first_month_payments.push(PaymentAllocation {
                        debt_id: debt.debt_id,
                        amount: min_payment,
                    });
                }
            } else {
                state
                    .balances
                    .insert(debt.debt_id, remaining_balance(balance, 0.0, interest));
                metrics.record_skipped_minimum();
            }
        }

        // Extra-payment pass: all spare budget goes to the single debt at
        // the head of the priority list, capped at its balance.
        if kind.is_accelerated() && available > 0.0 && !state.remaining.is_empty() {
            let target_id = state.remaining[0].debt_id;
            let balance = state.balances[&target_id];
            let extra = available.min(balance);
            if extra > 0.0 {
                state
                    .balances
                    .insert(target_id, round_cents(balance - extra).max(0.0));
                month_paid = round_cents(month_paid + extra);
                if state.month == 0 {
                    match first_month_payments
                        .iter_mut()
                        .find(|p| p.debt_id == target_id)
                    {
                        Some(entry) => entry.amount = round_cents(entry.amount + extra),
                        None => first_month_payments.push(PaymentAllocation {
                            debt_id: target_id,
                            amount: extra,
                        }),
                    }
                }
            }
        }

        // Payoff sweep: a cleared debt's minimum becomes next month's budget
        let month_number = state.month + 1;
        let balances = &state.balances;
        let released = &mut state.released_minimums;
        state.remaining.retain(|debt| {
            if is_paid_off(balances[&debt.debt_id]) {
                *released = round_cents(*released + debt.minimum_payment);
                metrics.record_payoff(debt.debt_id, month_number);
                false
            } else {
                true
            }
        });

        let total_balance = round_cents(
            state
                .remaining
                .iter()
                .map(|d| state.balances[&d.debt_id])
                .sum(),
        );
        monthly_totals.push(MonthTotal {
            month: month_number,
            date: month_date,
            total_balance,
            interest: month_interest,
            principal: round_cents(month_paid - month_interest),
        });

        state.month += 1;
        metrics.record_month();
    }

    if !state.remaining.is_empty() {
        metrics.record_cap_hit();
    }

    let result = ScenarioResult {
        months: state.month,
        total_interest: round_cents(state.total_interest),
        payoff_date: add_months(start_date, state.month),
        first_month_payments,
        monthly_totals,
        truncated: !state.remaining.is_empty(),
    };
    (result, metrics)
}
