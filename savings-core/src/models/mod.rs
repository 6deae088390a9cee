mod area_figures;
mod area_input;
mod calculated_area;
mod savings_policy;
mod units;

pub use area_figures::AreaFigures;
pub use area_input::AreaInput;
pub use calculated_area::CalculatedArea;
pub use savings_policy::SavingsPolicy;
pub use units::{GrossWageUnit, UnknownUnitError, WorkingHoursUnit};
