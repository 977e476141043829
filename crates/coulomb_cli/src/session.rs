//! One interactive pass: read charges and distance, report the force, optionally sweep.

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::format::format_sci;
use crate::plot::{render_force_chart, ChartOutcome};
use anyhow::anyhow;
use coulomb_core::{analyze_distance_variation, ForceReport, ForceSweep};
use std::any::Any;
use std::io::{self, BufRead, Write};
use std::panic::{catch_unwind, AssertUnwindSafe};

const BANNER_WIDTH: usize = 60;
const RESULTS_WIDTH: usize = 40;

const ALL_ZERO_NOTICE: &str = "Chart skipped: the force is zero at every distance.";
const NO_FINITE_FORCE_NOTICE: &str = "Chart skipped: no force in the sweep is a finite number.";

/// How a session ended. Every variant is a normal process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    InputFormat,
    Validation,
    InvalidRange,
    Unexpected,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the whole flow, turning every error and panic into a printed message.
    pub fn run(&mut self) -> Outcome {
        let result = catch_unwind(AssertUnwindSafe(|| self.execute()))
            .unwrap_or_else(|payload| Err(anyhow!(panic_payload_to_string(payload)).into()));

        let Err(err) = result else {
            return Outcome::Completed;
        };
        let outcome = match &err {
            SessionError::InvalidNumber { input, .. } => {
                log::warn!("Rejected non-numeric input {input:?}");
                Outcome::InputFormat
            }
            SessionError::InvalidEncoding(source) => {
                log::warn!("Rejected undecodable input: {source}");
                Outcome::InputFormat
            }
            SessionError::NonPositiveDistance(distance) => {
                log::warn!("Rejected distance {distance}");
                Outcome::Validation
            }
            SessionError::Sweep(_) => Outcome::InvalidRange,
            SessionError::Io(_) | SessionError::Unexpected(_) => {
                log::warn!("Session stopped: {err:#}");
                Outcome::Unexpected
            }
        };
        if let Err(write_err) = writeln!(self.output, "{}", err.user_message()) {
            log::warn!("Failed to report error: {write_err}");
        }
        outcome
    }

    fn execute(&mut self) -> Result<(), SessionError> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "{rule}")?;
        let title = "COULOMB'S LAW - FORCE CALCULATOR";
        writeln!(self.output, "{title:^BANNER_WIDTH$}")?;
        writeln!(self.output, "{rule}")?;

        let q1 = self.read_number("Enter charge 1 value (C): ")?;
        let q2 = self.read_number("Enter charge 2 value (C): ")?;
        let distance = self.read_number("Enter the distance between the charges (m): ")?;
        if distance <= 0.0 {
            return Err(SessionError::NonPositiveDistance(distance));
        }

        let report = ForceReport::evaluate(q1, q2, distance);
        log::info!("Evaluated {report:?}");
        self.print_report(&report)?;

        let answer = self.read_line("\nAnalyze how the force varies with distance? (y/n): ")?;
        if answer.trim().to_lowercase() != "y" {
            return Ok(());
        }

        let max_distance = self.read_number("Enter the maximum analysis distance (m): ")?;
        let sweep = analyze_distance_variation(q1, q2, max_distance, self.config.sweep_points)?;
        let notice = match render_force_chart(&sweep, q1, q2, &self.config.chart)? {
            ChartOutcome::Saved(path) => format!("Chart saved to {}", path.display()),
            ChartOutcome::AllZero => ALL_ZERO_NOTICE.to_string(),
            ChartOutcome::NoFiniteForce => NO_FINITE_FORCE_NOTICE.to_string(),
        };
        writeln!(self.output, "\n{notice}")?;
        self.print_table(&sweep)
    }

    fn print_report(&mut self, report: &ForceReport) -> Result<(), SessionError> {
        let rule = "=".repeat(RESULTS_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "RESULTS:")?;
        writeln!(self.output, "{rule}")?;
        let q1 = format_sci(report.q1, 2);
        let q2 = format_sci(report.q2, 2);
        let distance = format_sci(report.distance, 2);
        let force = format_sci(report.force, 2);
        writeln!(self.output, "Charge 1 (q1): {q1} C")?;
        writeln!(self.output, "Charge 2 (q2): {q2} C")?;
        writeln!(self.output, "Distance (d): {distance} m")?;
        writeln!(self.output, "Resultant force: {force} N")?;
        writeln!(self.output, "Interaction type: {}", report.interaction)?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    fn print_table(&mut self, sweep: &ForceSweep) -> Result<(), SessionError> {
        writeln!(self.output, "\nTable of values (sample):")?;
        writeln!(self.output, "Distance (m)\tForce (N)")?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        for (distance, force) in sweep.table_rows(self.config.table_divisions) {
            let (distance, force) = (format_sci(distance, 3), format_sci(force, 3));
            writeln!(self.output, "{distance}\t{force}")?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = match self.input.read_line(&mut line) {
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(SessionError::InvalidEncoding(err));
            }
            Err(err) => return Err(err.into()),
        };
        if read == 0 {
            return Err(anyhow!("end of input while reading a line").into());
        }
        Ok(line)
    }

    fn read_number(&mut self, prompt: &str) -> Result<f64, SessionError> {
        let line = self.read_line(prompt)?;
        let input = line.trim();
        input.parse::<f64>().map_err(|source| {
            let input = input.to_string();
            SessionError::InvalidNumber { input, source }
        })
    }
}

fn panic_payload_to_string(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    "session panicked".to_string()
}
