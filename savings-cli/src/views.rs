//! Plain-text renderings of the result card and the running summary.

use std::fmt;

use savings_core::{AreaLedger, CalculatedArea};

use crate::config::DisplayConfig;
use crate::currency::format_currency;

/// Result card for the area that was just calculated.
pub struct ResultCard<'a> {
    pub area: &'a CalculatedArea,
    pub display: &'a DisplayConfig,
}

impl fmt::Display for ResultCard<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "== Calculation Results ==")?;
        writeln!(f, "{}", self.area.area_name)?;
        writeln!(
            f,
            "Net Savings for this Area: {}",
            format_currency(self.area.net_savings, self.display)
        )
    }
}

/// Every area in the ledger followed by the total.
pub struct SummaryView<'a> {
    pub ledger: &'a AreaLedger,
    pub display: &'a DisplayConfig,
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        const TOTAL_LABEL: &str = "Total Savings:";

        let amounts: Vec<String> = self
            .ledger
            .iter()
            .map(|area| format_currency(area.net_savings, self.display))
            .collect();
        let total = format_currency(self.ledger.total_savings(), self.display);

        let name_width = self
            .ledger
            .iter()
            .map(|area| area.area_name.chars().count())
            .fold(TOTAL_LABEL.len(), usize::max);
        let amount_width = amounts
            .iter()
            .map(|amount| amount.chars().count())
            .fold(total.chars().count(), usize::max);

        writeln!(f, "== Overall Summary ==")?;
        for (area, amount) in self.ledger.iter().zip(&amounts) {
            writeln!(
                f,
                "{:<name_width$}  {:>amount_width$}",
                area.area_name, amount
            )?;
        }
        writeln!(f, "{}", "-".repeat(name_width + 2 + amount_width))?;
        writeln!(
            f,
            "{:<name_width$}  {:>amount_width$}",
            TOTAL_LABEL, total
        )
    }
}
