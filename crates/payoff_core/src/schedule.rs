//! Single-debt schedule builders for detail views.
//!
//! These produce the full month-by-month table (starting balance, payment,
//! principal, interest, ending balance) for one debt, using the same
//! interest and payment primitives as the multi-debt scenario loop. Three
//! input modes are supported: a standard reducing balance, a stated total
//! that already includes future interest (the principal is backed out
//! first), and an interest-only balloon loan.

use jiff::civil::Date;

use crate::date_math::{add_months, same_month};
use crate::error::DebtError;
use crate::interest::{monthly_interest, principal_from_total, round_cents};
use crate::model::{
    Debt, DebtFlavor, OneTimeFunding, PayoffSchedule, ScheduleRow, fundings_for_month,
};
use crate::payment::{PAYOFF_EPSILON, apply_payment, is_paid_off};
use crate::scenario::MAX_MONTHS;
use crate::validate::validate_gold_loan;

/// Build the full payoff table for one debt.
///
/// Lump-sum fundings are applied in their matching calendar month: as extra
/// payment on a reducing debt, and as direct principal reduction on an
/// interest-only balloon loan (which shrinks the interest base for every
/// month after).
pub fn build_schedule(
    debt: &Debt,
    fundings: &[OneTimeFunding],
    start_date: Date,
) -> Result<PayoffSchedule, DebtError> {
    match debt.flavor {
        DebtFlavor::GoldLoan { .. } => gold_loan_schedule(debt, fundings, start_date),
        DebtFlavor::InterestInclusive { term_months } => {
            let principal = principal_from_total(
                debt.balance,
                debt.interest_rate,
                debt.minimum_payment,
                term_months,
            );
            Ok(reducing_schedule(debt, principal, fundings, start_date))
        }
        DebtFlavor::Reducing => Ok(reducing_schedule(debt, debt.balance, fundings, start_date)),
    }
}

/// Months until the debt is cleared, per [`build_schedule`].
pub fn months_to_payoff(
    debt: &Debt,
    fundings: &[OneTimeFunding],
    start_date: Date,
) -> Result<u32, DebtError> {
    build_schedule(debt, fundings, start_date).map(|s| s.months())
}

/// Calendar date of the final payment, per [`build_schedule`]. A debt with
/// no balance pays off on the start date.
pub fn debt_payoff_date(
    debt: &Debt,
    fundings: &[OneTimeFunding],
    start_date: Date,
) -> Result<Date, DebtError> {
    build_schedule(debt, fundings, start_date).map(|s| s.payoff_date().unwrap_or(start_date))
}

fn reducing_schedule(
    debt: &Debt,
    starting_balance: f64,
    fundings: &[OneTimeFunding],
    start_date: Date,
) -> PayoffSchedule {
    let mut rows = Vec::new();
    let mut balance = starting_balance;
    let mut month = 0u32;

    while balance > PAYOFF_EPSILON && month < MAX_MONTHS {
        let date = add_months(start_date, month);
        let interest = monthly_interest(balance, debt.interest_rate);
        let owed = round_cents(balance + interest);
        let base_payment = debt.minimum_payment.min(owed);
        // lump sums are extra principal, capped at what is still owed
        let extra = fundings_for_month(fundings, date).min(round_cents(owed - base_payment));
        let payment = round_cents(base_payment + extra.max(0.0));
        let ending = apply_payment(balance, payment, interest);

        rows.push(ScheduleRow {
            month: month + 1,
            date,
            starting_balance: balance,
            payment,
            principal: round_cents(payment - interest),
            interest,
            ending_balance: ending,
        });
        balance = ending;
        month += 1;
    }

    PayoffSchedule {
        debt_id: debt.debt_id,
        rows,
    }
}

fn gold_loan_schedule(
    debt: &Debt,
    fundings: &[OneTimeFunding],
    start_date: Date,
) -> Result<PayoffSchedule, DebtError> {
    validate_gold_loan(debt, start_date)?;
    let DebtFlavor::GoldLoan {
        final_payment_date, ..
    } = debt.flavor
    else {
        return Err(DebtError::NotAGoldLoan(debt.debt_id));
    };

    let mut rows = Vec::new();
    let mut balance = debt.balance;
    let mut month = 0u32;

    while month < MAX_MONTHS {
        let date = add_months(start_date, month);
        let interest = monthly_interest(balance, debt.interest_rate);

        if same_month(date, final_payment_date) {
            // balloon: the whole remaining principal plus this month's interest
            rows.push(ScheduleRow {
                month: month + 1,
                date,
                starting_balance: balance,
                payment: round_cents(balance + interest),
                principal: balance,
                interest,
                ending_balance: 0.0,
            });
            break;
        }

        // interest-only month; a funding still reduces principal directly,
        // shrinking the interest base from the next month on
        let extra = fundings_for_month(fundings, date).min(balance);
        let ending = round_cents(balance - extra);
        rows.push(ScheduleRow {
            month: month + 1,
            date,
            starting_balance: balance,
            payment: round_cents(interest + extra),
            principal: extra,
            interest,
            ending_balance: ending,
        });
        balance = ending;
        month += 1;

        if is_paid_off(balance) {
            // fundings cleared the principal before maturity
            break;
        }
    }

    Ok(PayoffSchedule {
        debt_id: debt.debt_id,
        rows,
    })
}
