use serde::{Deserialize, Serialize};

use super::{GrossWageUnit, WorkingHoursUnit};

/// Raw values captured for one area, before any numeric parsing.
///
/// Numeric fields stay as entered so that the blank-means-zero rule is
/// applied in one place, [`AreaFigures::parse`](super::AreaFigures::parse).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaInput {
    pub area_name: String,
    pub employee_count: String,
    pub working_hours: String,
    pub working_hours_unit: WorkingHoursUnit,
    pub gross_wage: String,
    pub gross_wage_unit: GrossWageUnit,
    /// One-time software costs.
    pub software_costs: String,
    /// Monthly license costs.
    pub license_costs: String,
    /// Monthly managed service costs.
    pub managed_service_costs: String,
}

impl AreaInput {
    /// Labels of required fields that are blank, in form order.
    ///
    /// Unit selectors always carry a value and are never reported.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Area Name", &self.area_name),
            ("Number of Employees", &self.employee_count),
            ("Working Hours", &self.working_hours),
            ("Gross Wage", &self.gross_wage),
            ("One-time Software Costs", &self.software_costs),
            ("Monthly License Costs", &self.license_costs),
            ("Monthly Managed Service Costs", &self.managed_service_costs),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Whether every required field has a non-blank value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete_input() -> AreaInput {
        AreaInput {
            area_name: "Accounting".to_string(),
            employee_count: "10".to_string(),
            working_hours: "8".to_string(),
            working_hours_unit: WorkingHoursUnit::PerDay,
            gross_wage: "50000".to_string(),
            gross_wage_unit: GrossWageUnit::PerYear,
            software_costs: "1000".to_string(),
            license_costs: "200".to_string(),
            managed_service_costs: "100".to_string(),
        }
    }

    #[test]
    fn complete_input_has_no_missing_fields() {
        let input = complete_input();

        assert!(input.missing_fields().is_empty());
        assert!(input.is_complete());
    }

    #[test]
    fn default_input_reports_every_field() {
        let input = AreaInput::default();

        assert_eq!(input.missing_fields().len(), 7);
        assert!(!input.is_complete());
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let input = AreaInput {
            area_name: "   ".to_string(),
            license_costs: "\t".to_string(),
            ..complete_input()
        };

        assert_eq!(
            input.missing_fields(),
            vec!["Area Name", "Monthly License Costs"]
        );
    }

    #[test]
    fn zero_is_not_blank() {
        let input = AreaInput {
            software_costs: "0".to_string(),
            ..complete_input()
        };

        assert!(input.is_complete());
    }
}
