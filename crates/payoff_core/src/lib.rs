//! Debt payoff timeline simulation library
//!
//! This crate is the computation core of a debt payoff planner. Given a set
//! of debts (balance, APR, minimum payment), a monthly budget, a
//! prioritization strategy, and scheduled one-time lump sums, it simulates
//! month-by-month amortization across all debts at once and compares a
//! minimum-payments-only baseline against the strategy-accelerated payoff:
//! months saved, interest saved, and the projected debt-free date.
//!
//! It is a planning estimator, not an accounting system: amounts are
//! rounded to cents after every step so runs are reproducible, but no
//! attempt is made to match any particular bank's amortization quirks.
//!
//! # Example
//!
//! ```
//! use payoff_core::{Avalanche, PlanBuilder, calculate_timeline};
//!
//! let plan = PlanBuilder::new()
//!     .start(2025, 1, 1)
//!     .monthly_payment(850.0)
//!     .debt("Card", 4_500.0, 24.0, 150.0)
//!     .debt("Car", 12_000.0, 9.5, 400.0)
//!     .funding(2025, 6, 1, 1_000.0)
//!     .build();
//!
//! let timeline = calculate_timeline(&plan, &Avalanche);
//! assert!(timeline.months_saved >= 1);
//! assert!(timeline.interest_saved > 0.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod date_math;
pub mod error;
pub mod interest;
pub mod metrics;
pub mod payment;
pub mod scenario;
pub mod schedule;
pub mod strategy;
pub mod timeline;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{PlanBuilder, PlanConfig};
pub use strategy::{Avalanche, PayoffStrategy, Snowball};
pub use timeline::calculate_timeline;
