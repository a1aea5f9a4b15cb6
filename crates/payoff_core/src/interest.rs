//! Monetary interest math.
//!
//! All functions are pure and stateless, and every arithmetic step is
//! rounded back to cents before it is used further. The simulation loop can
//! run for up to 1200 iterations, so unrounded binary floating point would
//! accumulate visible drift; rounding after every operation keeps repeated
//! runs bit-for-bit identical.

/// Round to a fixed number of decimal places.
#[inline]
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round a monetary amount to cents.
#[inline]
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// Interest accrued on `balance` over one month at `annual_rate` percent
/// APR. The APR is divided by 12 months and by 100 to convert from a
/// percentage, combined into a single divide by 1200.
#[must_use]
pub fn monthly_interest(balance: f64, annual_rate: f64) -> f64 {
    round_cents(balance * annual_rate / 1200.0)
}

/// Balance left after applying one payment, given the interest accrued
/// that month.
///
/// When the payment does not even cover the interest, the shortfall is
/// capitalized and the balance grows.
#[must_use]
pub fn remaining_balance(balance: f64, payment: f64, interest: f64) -> f64 {
    if payment < interest {
        round_cents(balance + (interest - payment))
    } else {
        round_cents(balance - (payment - interest))
    }
}

/// Back out the true principal from a stated total that already includes
/// all future interest, using the annuity present-value formula
/// `PV = PMT * (1 - (1 + r)^-n) / r` at the monthly rate.
///
/// Returns `total_amount` unchanged when the rate, payment, or term is
/// non-positive; there is nothing to discount in those cases.
#[must_use]
pub fn principal_from_total(
    total_amount: f64,
    annual_rate: f64,
    monthly_payment: f64,
    term_months: u32,
) -> f64 {
    if annual_rate <= 0.0 || monthly_payment <= 0.0 || term_months == 0 {
        return total_amount;
    }
    let monthly_rate = annual_rate / 1200.0;
    let present_value =
        monthly_payment * (1.0 - (1.0 + monthly_rate).powi(-(term_months as i32))) / monthly_rate;
    round_cents(present_value)
}
