//! Unique identifiers for simulation entities
//!
//! Debts are keyed by their own ID type so balances, allocations, and payoff
//! records cannot be mixed up with other numeric values.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Debt within a payoff plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DebtId(pub u16);
