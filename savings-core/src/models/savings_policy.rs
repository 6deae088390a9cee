use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed constants of the savings estimate.
///
/// Missing keys fall back to the defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsPolicy {
    /// Share of total labor cost assumed to be saved (0.20 = 20%).
    pub efficiency_gain_rate: Decimal,
    /// Multiplier turning monthly wages and costs into annual ones.
    pub months_per_year: u32,
}

impl SavingsPolicy {
    pub const DEFAULT_EFFICIENCY_GAIN_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);
    pub const DEFAULT_MONTHS_PER_YEAR: u32 = 12;
}

impl Default for SavingsPolicy {
    fn default() -> Self {
        Self {
            efficiency_gain_rate: Self::DEFAULT_EFFICIENCY_GAIN_RATE,
            months_per_year: Self::DEFAULT_MONTHS_PER_YEAR,
        }
    }
}
