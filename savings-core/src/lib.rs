pub mod calculations;
pub mod ledger;
pub mod models;
pub mod parsing;

pub use calculations::{SavingsBreakdown, SavingsCalculator};
pub use ledger::AreaLedger;
pub use models::*;
