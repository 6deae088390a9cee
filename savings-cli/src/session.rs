//! Interactive form session over any line-based reader and writer.
//!
//! Each round prompts for one area, shows its result and the running
//! summary, then asks whether to add another area. End of input finishes
//! the session at whatever point it occurs.

use std::io::{self, BufRead, Write};

use savings_core::{AreaInput, GrossWageUnit, SavingsCalculator, WorkingHoursUnit};
use thiserror::Error;
use tracing::debug;

use crate::config::DisplayConfig;
use crate::state::SessionState;
use crate::views::{ResultCard, SummaryView};

/// Errors raised while talking to the terminal.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

type FieldAccessor = fn(&mut AreaInput) -> &mut String;

/// Free-text fields in form order; labels match [`AreaInput::missing_fields`].
fn text_fields() -> [(&'static str, FieldAccessor); 7] {
    [
        ("Area Name", |i| &mut i.area_name),
        ("Number of Employees", |i| &mut i.employee_count),
        ("Working Hours", |i| &mut i.working_hours),
        ("Gross Wage", |i| &mut i.gross_wage),
        ("One-time Software Costs", |i| &mut i.software_costs),
        ("Monthly License Costs", |i| &mut i.license_costs),
        ("Monthly Managed Service Costs", |i| &mut i.managed_service_costs),
    ]
}

pub struct Session<R, W> {
    input: R,
    output: W,
    calculator: SavingsCalculator,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        calculator: SavingsCalculator,
        display: DisplayConfig,
    ) -> Self {
        Self {
            input,
            output,
            calculator,
            display,
        }
    }

    /// Runs rounds until the user declines another area or input ends.
    pub fn run(mut self) -> Result<SessionState, SessionError> {
        let mut state = SessionState::new();

        writeln!(self.output, "Value Calculator")?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "== Enter Calculation Area ==")?;
            let Some(form) = self.read_form()? else {
                debug!("input ended while entering an area");
                break;
            };

            state.record(self.calculator.calculate_area(&form));
            if let Some(result) = &state.current_result {
                writeln!(self.output)?;
                let card = ResultCard {
                    area: result,
                    display: &self.display,
                };
                write!(self.output, "{card}")?;
            }
            writeln!(self.output)?;
            let summary = SummaryView {
                ledger: &state.ledger,
                display: &self.display,
            };
            write!(self.output, "{summary}")?;

            if !self.confirm("Add another area? [y/N]")? {
                break;
            }
            state.add_another();
        }

        state.finish();
        if state.has_calculated() {
            writeln!(self.output)?;
            writeln!(self.output, "Finished with {} area(s).", state.ledger.len())?;
        }
        self.output.flush()?;
        Ok(state)
    }

    /// Collects one complete form, re-prompting for blank required fields.
    ///
    /// Returns `None` when input ends before the form is complete.
    fn read_form(&mut self) -> Result<Option<AreaInput>, SessionError> {
        let mut form = AreaInput::default();

        for (label, field) in text_fields() {
            let Some(value) = self.prompt(label)? else {
                return Ok(None);
            };
            *field(&mut form) = value;

            // Unit selectors follow their numeric field.
            if label == "Working Hours" {
                let default = WorkingHoursUnit::default();
                let question = format!("Working Hours unit [perDay/perWeek] ({})", default.as_str());
                let Some(unit) = self.prompt_unit(&question, default, WorkingHoursUnit::parse)? else {
                    return Ok(None);
                };
                form.working_hours_unit = unit;
            } else if label == "Gross Wage" {
                let default = GrossWageUnit::default();
                let question = format!("Gross Wage unit [perMonth/perYear] ({})", default.as_str());
                let Some(unit) = self.prompt_unit(&question, default, GrossWageUnit::parse)? else {
                    return Ok(None);
                };
                form.gross_wage_unit = unit;
            }
        }

        loop {
            let missing = form.missing_fields();
            if missing.is_empty() {
                return Ok(Some(form));
            }
            writeln!(self.output, "Please fill in: {}", missing.join(", "))?;
            for (label, field) in text_fields() {
                if !missing.contains(&label) {
                    continue;
                }
                let Some(value) = self.prompt(label)? else {
                    return Ok(None);
                };
                *field(&mut form) = value;
            }
        }
    }

    /// Blank answers select `default`; unknown answers are asked again.
    fn prompt_unit<U: Copy>(
        &mut self,
        question: &str,
        default: U,
        parse: fn(&str) -> Option<U>,
    ) -> Result<Option<U>, SessionError> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            if answer.trim().is_empty() {
                return Ok(Some(default));
            }
            match parse(&answer) {
                Some(unit) => return Ok(Some(unit)),
                None => writeln!(self.output, "Unrecognised unit '{}'.", answer.trim())?,
            }
        }
    }

    fn confirm(
        &mut self,
        question: &str,
    ) -> Result<bool, SessionError> {
        let answer = self.prompt(question)?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn prompt(
        &mut self,
        label: &str,
    ) -> Result<Option<String>, SessionError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
