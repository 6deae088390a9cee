use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AreaInput, GrossWageUnit, WorkingHoursUnit};
use crate::parsing::{parse_amount, parse_count};

/// Typed numeric values of one area, produced from an [`AreaInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaFigures {
    pub employee_count: Decimal,
    pub working_hours: Decimal,
    pub working_hours_unit: WorkingHoursUnit,
    pub gross_wage: Decimal,
    pub gross_wage_unit: GrossWageUnit,
    pub software_costs: Decimal,
    pub license_costs: Decimal,
    pub managed_service_costs: Decimal,
}

impl AreaFigures {
    /// Parses every numeric field of `input`; blank or invalid text becomes 0.
    pub fn parse(input: &AreaInput) -> Self {
        Self {
            employee_count: parse_count(&input.employee_count),
            working_hours: parse_amount(&input.working_hours),
            working_hours_unit: input.working_hours_unit,
            gross_wage: parse_amount(&input.gross_wage),
            gross_wage_unit: input.gross_wage_unit,
            software_costs: parse_amount(&input.software_costs),
            license_costs: parse_amount(&input.license_costs),
            managed_service_costs: parse_amount(&input.managed_service_costs),
        }
    }
}

impl From<&AreaInput> for AreaFigures {
    fn from(input: &AreaInput) -> Self {
        Self::parse(input)
    }
}
