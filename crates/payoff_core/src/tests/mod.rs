//! Integration tests for the payoff simulation engine
//!
//! Tests are organized by topic:
//! - `scenarios` - The month-by-month scenario loop (minimums,
//!   redistribution, fundings, the non-convergence cap)
//! - `timeline` - Baseline vs accelerated comparison and savings math
//! - `schedules` - Single-debt schedule builders and the
//!   interest-inclusive input mode
//! - `gold_loans` - Interest-only balloon schedules and their guards
//! - `strategies` - Prioritization orderings
//! - `builder` - PlanBuilder id assignment and defaults

mod builder;
mod strategies;
