use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An area whose net savings have been computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedArea {
    pub area_name: String,
    /// Never negative.
    pub net_savings: Decimal,
}

impl CalculatedArea {
    pub fn new(
        area_name: impl Into<String>,
        net_savings: Decimal,
    ) -> Self {
        Self {
            area_name: area_name.into(),
            net_savings,
        }
    }
}
