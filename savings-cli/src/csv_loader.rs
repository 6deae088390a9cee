//! CSV loader for batches of area inputs.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive and must match exactly.
//!
//! | Column                  | Required | Notes |
//! |-------------------------|----------|-------|
//! | `area_name`             | yes      | Free text |
//! | `employee_count`        | yes      | Whole number |
//! | `working_hours`         | yes      | Decimal |
//! | `working_hours_unit`    | no       | `perDay` (default) or `perWeek` |
//! | `gross_wage`            | yes      | Decimal |
//! | `gross_wage_unit`       | no       | `perMonth` or `perYear` (default) |
//! | `software_costs`        | yes      | One-time, decimal |
//! | `license_costs`         | yes      | Monthly, decimal |
//! | `managed_service_costs` | yes      | Monthly, decimal |
//!
//! "Required" means the cell must not be blank. Numeric cells that are
//! filled in but not numbers count as zero, the same as in the form.
//!
//! ### Example
//!
//! ```csv
//! area_name,employee_count,working_hours,working_hours_unit,gross_wage,gross_wage_unit,software_costs,license_costs,managed_service_costs
//! Accounting,10,8,perDay,50000,perYear,1000,200,100
//! Support,4,38.5,perWeek,3500,perMonth,0,99,0
//! ```
use std::path::{Path, PathBuf};

use savings_core::{AreaInput, GrossWageUnit, UnknownUnitError, WorkingHoursUnit};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    area_name: String,
    employee_count: String,
    working_hours: String,
    #[serde(default)]
    working_hours_unit: Option<String>,
    gross_wage: String,
    #[serde(default)]
    gross_wage_unit: Option<String>,
    software_costs: String,
    license_costs: String,
    managed_service_costs: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// column, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row left one or more required cells blank. `row` is 1-based,
    /// not counting the header.
    #[error("row {row} is missing: {}", .missing.join(", "))]
    IncompleteRow {
        row: usize,
        missing: Vec<&'static str>,
    },

    /// A unit cell contained a value that is not a recognised unit.
    #[error("{source} on row {row}")]
    InvalidUnit {
        row: usize,
        #[source]
        source: UnknownUnitError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parses an optional unit cell; blank or absent means the default unit.
fn parse_unit<U>(
    cell: Option<String>,
    row_number: usize,
) -> Result<U, CsvLoadError>
where
    U: Default + std::str::FromStr<Err = UnknownUnitError>,
{
    match cell.as_deref().map(str::trim) {
        None | Some("") => Ok(U::default()),
        Some(value) => value.parse().map_err(|source| CsvLoadError::InvalidUnit {
            row: row_number,
            source,
        }),
    }
}

/// Convert a single CSV row into an AreaInput.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<AreaInput, CsvLoadError> {
    let working_hours_unit: WorkingHoursUnit = parse_unit(row.working_hours_unit, row_number)?;
    let gross_wage_unit: GrossWageUnit = parse_unit(row.gross_wage_unit, row_number)?;

    let input = AreaInput {
        area_name: row.area_name,
        employee_count: row.employee_count,
        working_hours: row.working_hours,
        working_hours_unit,
        gross_wage: row.gross_wage,
        gross_wage_unit,
        software_costs: row.software_costs,
        license_costs: row.license_costs,
        managed_service_costs: row.managed_service_costs,
    };

    let missing = input.missing_fields();
    if !missing.is_empty() {
        return Err(CsvLoadError::IncompleteRow {
            row: row_number,
            missing,
        });
    }

    Ok(input)
}

/// Parse CSV text and return one [`AreaInput`] per row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a column
///   is missing.
/// * [`CsvLoadError::IncompleteRow`] if a row leaves a required cell blank.
/// * [`CsvLoadError::InvalidUnit`] if a unit cell is not recognised.
pub fn load_from_str(input: &str) -> Result<Vec<AreaInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<AreaInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
