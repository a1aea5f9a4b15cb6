mod debts;
mod fundings;
mod ids;
mod results;

pub use debts::{Debt, DebtFlavor};
pub use fundings::{OneTimeFunding, fundings_for_month};
pub use ids::DebtId;
pub use results::{
    MonthTotal, PayoffSchedule, PaymentAllocation, ScenarioResult, ScheduleRow, TimelineResult,
};
