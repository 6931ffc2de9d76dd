//! Reports: the transport form of a solve result.
//!
//! A [`Report`] carries the totals, the per-resistor table, the rendered
//! narrative and the warnings. It serializes to the JSON shape consumed by
//! frontends and can be written as a plain-text report.

use std::io::Write;

use serde::Serialize;

use crate::error::{Result, SolverError};
use crate::narrative::RenderConfig;
use crate::solver::{ResistorResult, SolveResult};

/// A rendered solve result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_voltage: f64,
    pub total_resistance: f64,
    pub total_current: f64,
    pub total_power: f64,
    pub per_resistor: Vec<ResistorResult>,
    pub narrative: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report {
    /// Render a solve result.
    pub fn new(result: &SolveResult, config: &RenderConfig) -> Self {
        Self {
            total_voltage: result.total_voltage,
            total_resistance: result.total_resistance,
            total_current: result.total_current,
            total_power: result.total_power,
            per_resistor: result.per_resistor.clone(),
            narrative: result.narrative(config),
            warnings: result.warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write a plain-text report: totals, resistor table, derivation, warnings.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        self.write_text_inner(out)
            .map_err(|source| SolverError::OutputError { source })
    }

    fn write_text_inner<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Supply voltage:    {:.2} V", self.total_voltage)?;
        writeln!(out, "Total resistance:  {:.2} Ω", self.total_resistance)?;
        writeln!(out, "Total current:     {:.4} A", self.total_current)?;
        writeln!(out, "Total power:       {:.2} W", self.total_power)?;
        writeln!(out)?;

        writeln!(
            out,
            "{:<8} {:>12} {:>12} {:>12} {:>12}",
            "Resistor", "R [Ω]", "U [V]", "I [A]", "P [W]"
        )?;
        for r in &self.per_resistor {
            writeln!(
                out,
                "{:<8} {:>12.2} {:>12.2} {:>12.4} {:>12.2}",
                r.identity.to_string(),
                r.resistance,
                r.voltage,
                r.current,
                r.power
            )?;
        }

        if !self.narrative.is_empty() {
            writeln!(out)?;
            for (idx, line) in self.narrative.iter().enumerate() {
                writeln!(out, "{:>3}. {}", idx + 1, line)?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(out)?;
            for warning in &self.warnings {
                writeln!(out, "warning: {}", warning)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve_series;

    #[test]
    fn test_report_json_shape() {
        let result = solve_series(&[10.0, 20.0, 70.0], 100.0).unwrap();
        let report = Report::new(&result, &RenderConfig::default());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["totalResistance"], 100.0);
        assert_eq!(json["perResistor"].as_array().unwrap().len(), 3);
        assert_eq!(json["perResistor"][2]["identity"], "R3");
        assert!(json["narrative"].as_array().unwrap().len() > 3);
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_text_report() {
        let result = solve_series(&[0.0, 10.0], 10.0).unwrap();
        let report = Report::new(&result, &RenderConfig::default());
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Total resistance:  10.00 Ω"));
        assert!(text.contains("R2"));
        assert!(text.contains("warning: R1 has 0 Ω and acts as a short circuit"));
    }
}
