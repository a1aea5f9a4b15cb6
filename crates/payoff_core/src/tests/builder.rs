//! Tests for PlanBuilder and PlanConfig defaults

use jiff::civil::date;

use crate::config::{PlanBuilder, PlanConfig};
use crate::model::{DebtFlavor, DebtId};
use crate::validate::is_debt_payable;

#[test]
fn test_builder_assigns_sequential_ids() {
    let plan = PlanBuilder::new()
        .start(2025, 1, 1)
        .monthly_payment(500.0)
        .debt("First", 1_000.0, 10.0, 50.0)
        .debt("Second", 2_000.0, 12.0, 80.0)
        .gold_loan("Third", 60_000.0, 10.0, 12, date(2025, 12, 10))
        .build();

    let ids: Vec<DebtId> = plan.debts.iter().map(|d| d.debt_id).collect();
    assert_eq!(ids, vec![DebtId(0), DebtId(1), DebtId(2)]);
    assert_eq!(plan.start_date, Some(date(2025, 1, 1)));
    assert_eq!(plan.monthly_payment, 500.0);
}

/// The gold-loan shorthand sets the minimum to the interest-only amount,
/// which is exactly the viable minimum for a balloon loan.
#[test]
fn test_gold_loan_minimum_is_interest_only() {
    let plan = PlanBuilder::new()
        .gold_loan("Gold", 60_000.0, 10.0, 12, date(2025, 12, 10))
        .build();

    let debt = &plan.debts[0];
    assert_eq!(debt.minimum_payment, 500.0, "60000 * 10 / 1200");
    assert!(matches!(
        debt.flavor,
        DebtFlavor::GoldLoan { term_months: 12, .. }
    ));
    assert!(is_debt_payable(debt));
}

#[test]
fn test_fundings_collected_in_order() {
    let plan = PlanBuilder::new()
        .funding(2025, 3, 1, 500.0)
        .funding(2025, 9, 1, 750.0)
        .build();

    assert_eq!(plan.one_time_fundings.len(), 2);
    assert_eq!(plan.one_time_fundings[0].amount, 500.0);
    assert_eq!(plan.one_time_fundings[1].payment_date, date(2025, 9, 1));
}

#[test]
fn test_total_minimum_payments() {
    let plan = PlanBuilder::new()
        .debt("A", 1_000.0, 10.0, 50.25)
        .debt("B", 2_000.0, 12.0, 80.50)
        .build();

    assert_eq!(plan.total_minimum_payments(), 130.75);
}

#[test]
fn test_resolved_start_date() {
    let configured = PlanBuilder::new().start(2024, 7, 15).build();
    assert_eq!(configured.resolved_start_date(), date(2024, 7, 15));

    // without a configured date the plan starts today
    let unconfigured = PlanConfig::default();
    assert_eq!(unconfigured.resolved_start_date(), jiff::Zoned::now().date());
}
