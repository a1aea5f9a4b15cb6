//! Tests for prioritization strategies

use crate::model::{Debt, DebtId};
use crate::strategy::{Avalanche, PayoffStrategy, Snowball};

fn sample_debts() -> Vec<Debt> {
    vec![
        Debt::new(DebtId(0), "Car", 9_000.0, 9.5, 300.0),
        Debt::new(DebtId(1), "Card", 2_500.0, 24.0, 100.0),
        Debt::new(DebtId(2), "Personal", 5_000.0, 14.0, 150.0),
    ]
}

#[test]
fn test_avalanche_orders_by_rate_descending() {
    let ordered = Avalanche.prioritize(&sample_debts());

    let rates: Vec<f64> = ordered.iter().map(|d| d.interest_rate).collect();
    assert_eq!(rates, vec![24.0, 14.0, 9.5]);
    assert_eq!(ordered[0].debt_id, DebtId(1));
}

#[test]
fn test_snowball_orders_by_balance_ascending() {
    let ordered = Snowball.prioritize(&sample_debts());

    let balances: Vec<f64> = ordered.iter().map(|d| d.balance).collect();
    assert_eq!(balances, vec![2_500.0, 5_000.0, 9_000.0]);
    assert_eq!(ordered[0].debt_id, DebtId(1));
}

/// A strategy reorders; it never adds, drops, or edits debts.
#[test]
fn test_prioritize_preserves_the_set() {
    let debts = sample_debts();

    for strategy in [&Avalanche as &dyn PayoffStrategy, &Snowball] {
        let ordered = strategy.prioritize(&debts);
        assert_eq!(ordered.len(), debts.len(), "{}", strategy.name());

        let mut ids: Vec<DebtId> = ordered.iter().map(|d| d.debt_id).collect();
        ids.sort();
        assert_eq!(ids, vec![DebtId(0), DebtId(1), DebtId(2)]);

        for debt in &ordered {
            let original = debts.iter().find(|d| d.debt_id == debt.debt_id).unwrap();
            assert_eq!(debt, original, "debts must pass through unmodified");
        }
    }
}

/// Ties keep their input order (the sorts are stable).
#[test]
fn test_equal_priority_keeps_input_order() {
    let debts = vec![
        Debt::new(DebtId(0), "A", 1_000.0, 10.0, 50.0),
        Debt::new(DebtId(1), "B", 1_000.0, 10.0, 50.0),
        Debt::new(DebtId(2), "C", 1_000.0, 10.0, 50.0),
    ];

    let ids: Vec<DebtId> = Avalanche
        .prioritize(&debts)
        .iter()
        .map(|d| d.debt_id)
        .collect();
    assert_eq!(ids, vec![DebtId(0), DebtId(1), DebtId(2)]);

    let ids: Vec<DebtId> = Snowball
        .prioritize(&debts)
        .iter()
        .map(|d| d.debt_id)
        .collect();
    assert_eq!(ids, vec![DebtId(0), DebtId(1), DebtId(2)]);
}

/// The input list itself is left untouched.
#[test]
fn test_prioritize_does_not_mutate_input() {
    let debts = sample_debts();
    let before = debts.clone();
    let _ = Avalanche.prioritize(&debts);
    assert_eq!(debts, before);
}
