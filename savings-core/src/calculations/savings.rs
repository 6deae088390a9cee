//! Net savings estimate for a single area.
//!
//! # Calculation Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Annual gross wage per employee (monthly wage × months per year, or the yearly wage) |
//! | 2    | Total labor cost (employees × annual gross wage) |
//! | 3    | Gross savings (total labor cost × efficiency gain rate) |
//! | 4    | Total cost (one-time software + monthly license and managed service costs annualized) |
//! | 5    | Net savings (gross savings − total cost, minimum 0) |
//!
//! Working hours are collected with the rest of the form but do not enter
//! any step.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use savings_core::{AreaInput, GrossWageUnit, SavingsCalculator};
//!
//! let input = AreaInput {
//!     area_name: "Accounting".to_string(),
//!     employee_count: "10".to_string(),
//!     working_hours: "8".to_string(),
//!     gross_wage: "50000".to_string(),
//!     gross_wage_unit: GrossWageUnit::PerYear,
//!     software_costs: "1000".to_string(),
//!     license_costs: "200".to_string(),
//!     managed_service_costs: "100".to_string(),
//!     ..AreaInput::default()
//! };
//!
//! let calculator = SavingsCalculator::default();
//!
//! assert_eq!(calculator.calculate(&input), dec!(95400));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{floor_at_zero, saturating_add, saturating_mul, saturating_sub};
use crate::{AreaFigures, AreaInput, CalculatedArea, GrossWageUnit, SavingsPolicy};

/// Intermediate and final values of one savings calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    /// Gross wage of one employee over a year.
    pub annual_gross_wage: Decimal,

    /// Annual labor cost of the whole area.
    pub total_labor_cost: Decimal,

    /// Estimated efficiency gain on the labor cost.
    pub gross_savings: Decimal,

    /// One-time costs plus annualized monthly costs.
    pub total_cost: Decimal,

    /// Gross savings minus total cost, floored at zero.
    pub net_savings: Decimal,
}

/// Calculator for the per-area savings estimate.
///
/// Holds the [`SavingsPolicy`] constants; has no other state.
#[derive(Debug, Clone, Default)]
pub struct SavingsCalculator {
    policy: SavingsPolicy,
}

impl SavingsCalculator {
    pub fn new(policy: SavingsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SavingsPolicy {
        &self.policy
    }

    /// Net savings for the raw form values of one area.
    ///
    /// Blank or non-numeric fields count as zero. The result is never negative,
    /// and amounts too large for [`Decimal`] are held at [`Decimal::MAX`].
    pub fn calculate(
        &self,
        input: &AreaInput,
    ) -> Decimal {
        self.calculate_figures(&AreaFigures::parse(input))
            .net_savings
    }

    /// Calculates the area and pairs the result with its name.
    pub fn calculate_area(
        &self,
        input: &AreaInput,
    ) -> CalculatedArea {
        CalculatedArea::new(input.area_name.clone(), self.calculate(input))
    }

    /// Runs every step on already parsed figures.
    pub fn calculate_figures(
        &self,
        figures: &AreaFigures,
    ) -> SavingsBreakdown {
        let annual_gross_wage = self.annual_gross_wage(figures.gross_wage, figures.gross_wage_unit);
        let total_labor_cost = self.total_labor_cost(figures.employee_count, annual_gross_wage);
        let gross_savings = self.gross_savings(total_labor_cost);
        let total_cost = self.total_cost(
            figures.software_costs,
            figures.license_costs,
            figures.managed_service_costs,
        );
        let net_savings = self.net_savings(gross_savings, total_cost);

        debug!(
            %total_labor_cost,
            %gross_savings,
            %total_cost,
            %net_savings,
            "calculated area savings"
        );

        SavingsBreakdown {
            annual_gross_wage,
            total_labor_cost,
            gross_savings,
            total_cost,
            net_savings,
        }
    }

    fn months_per_year(&self) -> Decimal {
        Decimal::from(self.policy.months_per_year)
    }

    /// Annualizes a monthly wage; a yearly wage is used as-is.
    fn annual_gross_wage(
        &self,
        gross_wage: Decimal,
        unit: GrossWageUnit,
    ) -> Decimal {
        match unit {
            GrossWageUnit::PerMonth => saturating_mul(gross_wage, self.months_per_year()),
            GrossWageUnit::PerYear => gross_wage,
        }
    }

    fn total_labor_cost(
        &self,
        employee_count: Decimal,
        annual_gross_wage: Decimal,
    ) -> Decimal {
        saturating_mul(employee_count, annual_gross_wage)
    }

    fn gross_savings(
        &self,
        total_labor_cost: Decimal,
    ) -> Decimal {
        saturating_mul(total_labor_cost, self.policy.efficiency_gain_rate)
    }

    /// One-time software cost plus a year of the monthly costs.
    fn total_cost(
        &self,
        software_costs: Decimal,
        license_costs: Decimal,
        managed_service_costs: Decimal,
    ) -> Decimal {
        let months = self.months_per_year();
        saturating_add(
            software_costs,
            saturating_add(
                saturating_mul(license_costs, months),
                saturating_mul(managed_service_costs, months),
            ),
        )
    }

    fn net_savings(
        &self,
        gross_savings: Decimal,
        total_cost: Decimal,
    ) -> Decimal {
        floor_at_zero(saturating_sub(gross_savings, total_cost))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::WorkingHoursUnit;

    fn test_input() -> AreaInput {
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

    // =========================================================================
    // step tests
    // =========================================================================

    #[test]
    fn annual_gross_wage_multiplies_monthly_wage() {
        let calculator = SavingsCalculator::default();

        let result = calculator.annual_gross_wage(dec!(4000), GrossWageUnit::PerMonth);

        assert_eq!(result, dec!(48000));
    }

    #[test]
    fn annual_gross_wage_keeps_yearly_wage() {
        let calculator = SavingsCalculator::default();

        let result = calculator.annual_gross_wage(dec!(48000), GrossWageUnit::PerYear);

        assert_eq!(result, dec!(48000));
    }

    #[test]
    fn total_cost_annualizes_monthly_costs_only() {
        let calculator = SavingsCalculator::default();

        let result = calculator.total_cost(dec!(1000), dec!(200), dec!(100));

        assert_eq!(result, dec!(4600));
    }

    #[test]
    fn net_savings_is_floored_at_zero() {
        let calculator = SavingsCalculator::default();

        assert_eq!(calculator.net_savings(dec!(200), dec!(10000)), Decimal::ZERO);
        assert_eq!(calculator.net_savings(dec!(10000), dec!(200)), dec!(9800));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_figures_reports_every_step() {
        let calculator = SavingsCalculator::default();

        let breakdown = calculator.calculate_figures(&AreaFigures::parse(&test_input()));

        assert_eq!(
            breakdown,
            SavingsBreakdown {
                annual_gross_wage: dec!(50000),
                total_labor_cost: dec!(500000),
                gross_savings: dec!(100000),
                total_cost: dec!(4600),
                net_savings: dec!(95400),
            }
        );
    }

    #[test]
    fn calculate_clamps_deficit_to_zero() {
        let calculator = SavingsCalculator::default();
        let input = AreaInput {
            employee_count: "1".to_string(),
            gross_wage: "1000".to_string(),
            software_costs: "10000".to_string(),
            license_costs: "0".to_string(),
            managed_service_costs: "0".to_string(),
            ..test_input()
        };

        let breakdown = calculator.calculate_figures(&AreaFigures::parse(&input));

        assert_eq!(breakdown.gross_savings, dec!(200));
        assert_eq!(breakdown.total_cost, dec!(10000));
        assert_eq!(breakdown.net_savings, Decimal::ZERO);
        assert_eq!(calculator.calculate(&input), Decimal::ZERO);
    }

    #[test]
    fn calculate_ignores_working_hours() {
        let calculator = SavingsCalculator::default();
        let baseline = calculator.calculate(&test_input());

        for (hours, unit) in [
            ("1", WorkingHoursUnit::PerDay),
            ("40", WorkingHoursUnit::PerWeek),
            ("", WorkingHoursUnit::PerWeek),
            ("lots", WorkingHoursUnit::PerDay),
        ] {
            let input = AreaInput {
                working_hours: hours.to_string(),
                working_hours_unit: unit,
                ..test_input()
            };

            assert_eq!(calculator.calculate(&input), baseline);
        }
    }

    #[test]
    fn monthly_wage_matches_twelve_times_yearly_wage() {
        let calculator = SavingsCalculator::default();
        let monthly = AreaInput {
            gross_wage: "3750.25".to_string(),
            gross_wage_unit: GrossWageUnit::PerMonth,
            ..test_input()
        };
        let yearly = AreaInput {
            gross_wage: "45003".to_string(),
            gross_wage_unit: GrossWageUnit::PerYear,
            ..test_input()
        };

        assert_eq!(calculator.calculate(&monthly), calculator.calculate(&yearly));
    }

    #[test]
    fn calculate_treats_blank_costs_as_zero() {
        let calculator = SavingsCalculator::default();
        let input = AreaInput {
            software_costs: "".to_string(),
            license_costs: "n/a".to_string(),
            managed_service_costs: "  ".to_string(),
            ..test_input()
        };

        assert_eq!(calculator.calculate(&input), dec!(100000));
    }

    #[test]
    fn calculate_is_deterministic() {
        let calculator = SavingsCalculator::default();
        let input = test_input();

        let first = calculator.calculate(&input);
        let second = calculator.calculate(&input);

        assert_eq!(first, second);
    }

    #[test]
    fn calculate_never_negative_across_inputs() {
        let calculator = SavingsCalculator::default();

        for (employees, wage, software, license) in [
            ("0", "0", "0", "0"),
            ("1", "10", "99999", "500"),
            ("3", "2500", "0", "10000"),
            ("", "", "", ""),
            ("100", "80000", "1", "1"),
        ] {
            let input = AreaInput {
                employee_count: employees.to_string(),
                gross_wage: wage.to_string(),
                software_costs: software.to_string(),
                license_costs: license.to_string(),
                ..test_input()
            };

            assert!(calculator.calculate(&input) >= Decimal::ZERO);
        }
    }

    #[test]
    fn custom_policy_changes_rate_and_annualization() {
        let calculator = SavingsCalculator::new(SavingsPolicy {
            efficiency_gain_rate: dec!(0.10),
            months_per_year: 13,
        });
        let input = AreaInput {
            gross_wage: "1000".to_string(),
            gross_wage_unit: GrossWageUnit::PerMonth,
            software_costs: "0".to_string(),
            license_costs: "10".to_string(),
            managed_service_costs: "0".to_string(),
            ..test_input()
        };

        // 10 × 13000 × 0.10 − 10 × 13
        assert_eq!(calculator.calculate(&input), dec!(12870));
    }

    #[test]
    fn calculate_area_copies_name_unchanged() {
        let calculator = SavingsCalculator::default();
        let input = AreaInput {
            area_name: "  Accounting ".to_string(),
            ..test_input()
        };

        let area = calculator.calculate_area(&input);

        assert_eq!(area, CalculatedArea::new("  Accounting ", dec!(95400)));
    }

    // =========================================================================
    // overflow tests
    // =========================================================================

    #[test]
    fn huge_labor_cost_saturates_instead_of_panicking() {
        let calculator = SavingsCalculator::default();
        let input = AreaInput {
            employee_count: "100000000000000".to_string(),
            gross_wage: "100000000000000000".to_string(),
            gross_wage_unit: GrossWageUnit::PerMonth,
            ..test_input()
        };

        let breakdown = calculator.calculate_figures(&AreaFigures::parse(&input));

        assert_eq!(breakdown.annual_gross_wage, dec!(1200000000000000000));
        assert_eq!(breakdown.total_labor_cost, Decimal::MAX);
        assert!(breakdown.net_savings > Decimal::ZERO);
        assert_eq!(calculator.calculate(&input), breakdown.net_savings);
    }

    #[test]
    fn huge_monthly_costs_saturate_and_floor_to_zero() {
        let calculator = SavingsCalculator::default();
        let huge = Decimal::MAX.to_string();
        let input = AreaInput {
            software_costs: huge.clone(),
            license_costs: huge.clone(),
            managed_service_costs: huge,
            ..test_input()
        };

        let breakdown = calculator.calculate_figures(&AreaFigures::parse(&input));

        assert_eq!(breakdown.total_cost, Decimal::MAX);
        assert_eq!(breakdown.net_savings, Decimal::ZERO);
    }

    #[test]
    fn saturated_gross_minus_saturated_cost_is_zero() {
        let calculator = SavingsCalculator::default();

        assert_eq!(calculator.net_savings(Decimal::MAX, Decimal::MAX), Decimal::ZERO);
        assert_eq!(calculator.net_savings(Decimal::MAX, Decimal::MIN), Decimal::MAX);
    }
}
