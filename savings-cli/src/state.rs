//! Session state for the value calculator.
//!
//! Everything the user has calculated lives here until the session ends;
//! nothing is written to disk.

use rust_decimal::Decimal;
use savings_core::{AreaLedger, CalculatedArea};
use tracing::info;

/// State carried across the steps of one calculation session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Every area calculated so far, in order.
    pub ledger: AreaLedger,

    /// The most recent result, shown until the user starts another area.
    pub current_result: Option<CalculatedArea>,

    /// Set once the user has finished the session.
    pub finished: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fresh result as the current one and appends it to the ledger.
    pub fn record(
        &mut self,
        area: CalculatedArea,
    ) {
        self.ledger.push(area.clone());
        self.current_result = Some(area);
    }

    /// Check if at least one area has been calculated.
    pub fn has_calculated(&self) -> bool {
        !self.ledger.is_empty()
    }

    /// Hides the current result so a new area can be entered.
    /// The ledger is left untouched.
    pub fn add_another(&mut self) {
        self.current_result = None;
    }

    pub fn total_savings(&self) -> Decimal {
        self.ledger.total_savings()
    }

    /// Marks the session finished and logs the final summary.
    pub fn finish(&mut self) {
        for area in &self.ledger {
            info!(area = %area.area_name, net_savings = %area.net_savings, "summary entry");
        }
        info!(
            areas = self.ledger.len(),
            total_savings = %self.total_savings(),
            "finished calculation session"
        );
        self.finished = true;
    }
}
