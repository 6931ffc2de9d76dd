//! Text rendering of derivation steps.
//!
//! Rendering is a separate pass over the structured [`Step`] records, so the
//! numeric core never formats strings.

use std::str::FromStr;

use super::step::{Operand, Sharing, Step};
use crate::solver::is_short;

/// Output language of the rendered narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "german" | "deutsch" => Ok(Self::German),
            other => Err(format!("unsupported language '{}' (expected 'en' or 'de')", other)),
        }
    }
}

/// Configuration for narrative rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub language: Language,
    /// Decimal places for ohms (and siemens use `current_precision`)
    pub resistance_precision: usize,
    /// Decimal places for volts
    pub voltage_precision: usize,
    /// Decimal places for amperes and siemens
    pub current_precision: usize,
    /// Decimal places for watts
    pub power_precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            resistance_precision: 2,
            voltage_precision: 2,
            current_precision: 4,
            power_precision: 2,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Use the same number of decimal places for every quantity.
    pub fn with_precision(mut self, places: usize) -> Self {
        self.resistance_precision = places;
        self.voltage_precision = places;
        self.current_precision = places;
        self.power_precision = places;
        self
    }

    fn ohms(&self, value: f64) -> String {
        format!("{:.*} Ω", self.resistance_precision, value)
    }

    fn volts(&self, value: f64) -> String {
        format!("{:.*} V", self.voltage_precision, value)
    }

    fn amps(&self, value: f64) -> String {
        format!("{:.*} A", self.current_precision, value)
    }

    fn watts(&self, value: f64) -> String {
        format!("{:.*} W", self.power_precision, value)
    }

    fn siemens(&self, value: f64) -> String {
        format!("{:.*} S", self.current_precision, value)
    }
}

/// Render every step to one line of text.
pub fn render(steps: &[Step], config: &RenderConfig) -> Vec<String> {
    steps.iter().map(|step| render_step(step, config)).collect()
}

/// Render a single step.
pub fn render_step(step: &Step, config: &RenderConfig) -> String {
    match config.language {
        Language::English => english(step, config),
        Language::German => german(step, config),
    }
}

fn english(step: &Step, c: &RenderConfig) -> String {
    match step {
        Step::TreeBuilt {
            label,
            resistors,
            groups,
        } => format!(
            "Circuit {}: {} resistor(s) in {} group(s)",
            label, resistors, groups
        ),
        Step::SeriesReduction {
            label,
            operands,
            resistance,
        } => format!(
            "Series reduction of {}: R_eq = {} = {} = {}",
            label,
            join_labels(operands, "", " + "),
            join_values(operands, " + ", |o| c.ohms(o.resistance)),
            c.ohms(*resistance)
        ),
        Step::ParallelReduction {
            label,
            operands,
            conductance_sum,
            shorted,
            short_dominates,
            resistance,
        } => {
            if *short_dominates {
                return format!(
                    "Parallel reduction of {}: {} = {}; {} at 0 Ω short-circuit(s) the group, R_eq = {}",
                    label,
                    label,
                    join_values(operands, " || ", |o| c.ohms(o.resistance)),
                    shorted.join(", "),
                    c.ohms(*resistance)
                );
            }
            let conducting = conducting(operands);
            let mut line = if conducting.is_empty() {
                format!(
                    "Parallel reduction of {}: no member conducts, R_eq taken as {}",
                    label,
                    c.ohms(*resistance)
                )
            } else {
                format!(
                    "Parallel reduction of {}: 1/R_eq = {} = {} = {}; R_eq = 1 / {} = {}",
                    label,
                    join_labels(&conducting, "1/", " + "),
                    join_values(&conducting, " + ", |o| c.siemens(1.0 / o.resistance)),
                    c.siemens(*conductance_sum),
                    c.siemens(*conductance_sum),
                    c.ohms(*resistance)
                )
            };
            if !shorted.is_empty() {
                line.push_str(&format!(" ({} at 0 Ω excluded)", shorted.join(", ")));
            }
            line
        }
        Step::TotalResistance { resistance } => {
            format!("Total resistance: R_total = {}", c.ohms(*resistance))
        }
        Step::TotalCurrent {
            voltage,
            resistance,
            current,
        } => {
            if !is_short(*resistance) && (*current != 0.0 || *voltage == 0.0) {
                format!(
                    "Total current: I_total = U_total / R_total = {} / {} = {}",
                    c.volts(*voltage),
                    c.ohms(*resistance),
                    c.amps(*current)
                )
            } else {
                format!(
                    "Total current: R_total is 0 Ω, I_total taken as {}",
                    c.amps(*current)
                )
            }
        }
        Step::TotalPower {
            voltage,
            current,
            power,
        } => format!(
            "Total power: P_total = U_total * I_total = {} * {} = {}",
            c.volts(*voltage),
            c.amps(*current),
            c.watts(*power)
        ),
        Step::Distribution {
            identity,
            sharing,
            resistance,
            voltage,
            current,
            power,
        } => match sharing {
            Sharing::Supply => format!(
                "{}: connected directly to the supply, U = {}, I = {}, P = {}",
                identity,
                c.volts(*voltage),
                c.amps(*current),
                c.watts(*power)
            ),
            Sharing::SeriesCurrent => format!(
                "{}: series members share the current, I = {}; U = I * R = {} * {} = {}; P = U * I = {}",
                identity,
                c.amps(*current),
                c.amps(*current),
                c.ohms(*resistance),
                c.volts(*voltage),
                c.watts(*power)
            ),
            Sharing::ParallelVoltage if !is_short(*resistance) => format!(
                "{}: parallel members share the voltage, U = {}; I = U / R = {} / {} = {}; P = U * I = {}",
                identity,
                c.volts(*voltage),
                c.volts(*voltage),
                c.ohms(*resistance),
                c.amps(*current),
                c.watts(*power)
            ),
            Sharing::ParallelVoltage => format!(
                "{}: parallel members share the voltage, U = {}; R is 0 Ω, I taken as {}; P = {}",
                identity,
                c.volts(*voltage),
                c.amps(*current),
                c.watts(*power)
            ),
            Sharing::ShortedBranch => format!(
                "{}: short-circuits its parallel group and carries I = {} at U = {}",
                identity,
                c.amps(*current),
                c.volts(*voltage)
            ),
            Sharing::Bypassed => format!(
                "{}: bypassed by a short circuit, I = {}",
                identity,
                c.amps(*current)
            ),
        },
        Step::ResistorSummary {
            identity,
            resistance,
            voltage,
            current,
            power,
        } => format!(
            "{} ({}): U = {}, I = {}, P = {}",
            identity,
            c.ohms(*resistance),
            c.volts(*voltage),
            c.amps(*current),
            c.watts(*power)
        ),
    }
}

fn german(step: &Step, c: &RenderConfig) -> String {
    match step {
        Step::TreeBuilt {
            label,
            resistors,
            groups,
        } => format!(
            "Schaltung {}: {} Widerstände in {} Gruppen",
            label, resistors, groups
        ),
        Step::SeriesReduction {
            label,
            operands,
            resistance,
        } => format!(
            "Ersatzwiderstand der Reihenschaltung {}: R_eq = {} = {} = {}",
            label,
            join_labels(operands, "", " + "),
            join_values(operands, " + ", |o| c.ohms(o.resistance)),
            c.ohms(*resistance)
        ),
        Step::ParallelReduction {
            label,
            operands,
            conductance_sum,
            shorted,
            short_dominates,
            resistance,
        } => {
            if *short_dominates {
                return format!(
                    "Ersatzwiderstand der Parallelschaltung {}: {} = {}; {} mit 0 Ω schließt die Parallelschaltung kurz, R_eq = {}",
                    label,
                    label,
                    join_values(operands, " || ", |o| c.ohms(o.resistance)),
                    shorted.join(", "),
                    c.ohms(*resistance)
                );
            }
            let conducting = conducting(operands);
            let mut line = if conducting.is_empty() {
                format!(
                    "Ersatzwiderstand der Parallelschaltung {}: kein leitender Zweig, R_eq = {} angenommen",
                    label,
                    c.ohms(*resistance)
                )
            } else {
                format!(
                    "Ersatzwiderstand der Parallelschaltung {}: 1/R_eq = {} = {} = {}; R_eq = 1 / {} = {}",
                    label,
                    join_labels(&conducting, "1/", " + "),
                    join_values(&conducting, " + ", |o| c.siemens(1.0 / o.resistance)),
                    c.siemens(*conductance_sum),
                    c.siemens(*conductance_sum),
                    c.ohms(*resistance)
                )
            };
            if !shorted.is_empty() {
                line.push_str(&format!(
                    " ({} mit 0 Ω nicht berücksichtigt)",
                    shorted.join(", ")
                ));
            }
            line
        }
        Step::TotalResistance { resistance } => {
            format!("Gesamtwiderstand: Rg = {}", c.ohms(*resistance))
        }
        Step::TotalCurrent {
            voltage,
            resistance,
            current,
        } => {
            if !is_short(*resistance) && (*current != 0.0 || *voltage == 0.0) {
                format!(
                    "Gesamtstrom: Ig = Ug / Rg = {} / {} = {}",
                    c.volts(*voltage),
                    c.ohms(*resistance),
                    c.amps(*current)
                )
            } else {
                format!("Gesamtstrom: Rg ist 0 Ω, Ig = {} angenommen", c.amps(*current))
            }
        }
        Step::TotalPower {
            voltage,
            current,
            power,
        } => format!(
            "Gesamtleistung: Pg = Ug * Ig = {} * {} = {}",
            c.volts(*voltage),
            c.amps(*current),
            c.watts(*power)
        ),
        Step::Distribution {
            identity,
            sharing,
            resistance,
            voltage,
            current,
            power,
        } => match sharing {
            Sharing::Supply => format!(
                "{}: liegt direkt an der Quelle, U = {}, I = {}, P = {}",
                identity,
                c.volts(*voltage),
                c.amps(*current),
                c.watts(*power)
            ),
            Sharing::SeriesCurrent => format!(
                "{}: In einer Reihenschaltung ist der Strom überall gleich, I = {}; U = I * R = {} * {} = {}; P = U * I = {}",
                identity,
                c.amps(*current),
                c.amps(*current),
                c.ohms(*resistance),
                c.volts(*voltage),
                c.watts(*power)
            ),
            Sharing::ParallelVoltage if !is_short(*resistance) => format!(
                "{}: In einer Parallelschaltung ist die Spannung an allen Bauteilen gleich, U = {}; I = U / R = {} / {} = {}; P = U * I = {}",
                identity,
                c.volts(*voltage),
                c.volts(*voltage),
                c.ohms(*resistance),
                c.amps(*current),
                c.watts(*power)
            ),
            Sharing::ParallelVoltage => format!(
                "{}: In einer Parallelschaltung ist die Spannung an allen Bauteilen gleich, U = {}; R ist 0 Ω, I = {} angenommen; P = {}",
                identity,
                c.volts(*voltage),
                c.amps(*current),
                c.watts(*power)
            ),
            Sharing::ShortedBranch => format!(
                "{}: schließt die Parallelschaltung kurz und führt I = {} bei U = {}",
                identity,
                c.amps(*current),
                c.volts(*voltage)
            ),
            Sharing::Bypassed => format!(
                "{}: durch Kurzschluss überbrückt, I = {}",
                identity,
                c.amps(*current)
            ),
        },
        Step::ResistorSummary {
            identity,
            resistance,
            voltage,
            current,
            power,
        } => format!(
            "Analyse für {} ({}): Spannung = {}, Strom = {}, Leistung = {}",
            identity,
            c.ohms(*resistance),
            c.volts(*voltage),
            c.amps(*current),
            c.watts(*power)
        ),
    }
}

fn conducting(operands: &[Operand]) -> Vec<Operand> {
    operands
        .iter()
        .filter(|o| !is_short(o.resistance))
        .cloned()
        .collect()
}

fn join_labels(operands: &[Operand], prefix: &str, separator: &str) -> String {
    operands
        .iter()
        .map(|o| format!("{}{}", prefix, o.label))
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_values(operands: &[Operand], separator: &str, value: impl Fn(&Operand) -> String) -> String {
    operands.iter().map(value).collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::ResistorId;

    fn operand(label: &str, resistance: f64) -> Operand {
        Operand {
            label: label.to_string(),
            resistance,
        }
    }

    #[test]
    fn test_series_reduction_english() {
        let step = Step::SeriesReduction {
            label: "R1 + R2".to_string(),
            operands: vec![operand("R1", 10.0), operand("R2", 20.0)],
            resistance: 30.0,
        };
        assert_eq!(
            render_step(&step, &RenderConfig::default()),
            "Series reduction of R1 + R2: R_eq = R1 + R2 = 10.00 Ω + 20.00 Ω = 30.00 Ω"
        );
    }

    #[test]
    fn test_parallel_reduction_english() {
        let step = Step::ParallelReduction {
            label: "R1 || R2".to_string(),
            operands: vec![operand("R1", 10.0), operand("R2", 10.0)],
            conductance_sum: 0.2,
            shorted: vec![],
            short_dominates: false,
            resistance: 5.0,
        };
        assert_eq!(
            render_step(&step, &RenderConfig::default()),
            "Parallel reduction of R1 || R2: 1/R_eq = 1/R1 + 1/R2 = 0.1000 S + 0.1000 S = 0.2000 S; R_eq = 1 / 0.2000 S = 5.00 Ω"
        );
    }

    #[test]
    fn test_parallel_short_english() {
        let step = Step::ParallelReduction {
            label: "R2 || R3".to_string(),
            operands: vec![operand("R2", 0.0), operand("R3", 20.0)],
            conductance_sum: 0.05,
            shorted: vec!["R2".to_string()],
            short_dominates: true,
            resistance: 0.0,
        };
        let line = render_step(&step, &RenderConfig::default());
        assert!(line.contains("R2 || R3 = 0.00 Ω || 20.00 Ω"));
        assert!(line.contains("R2 at 0 Ω short-circuit(s) the group"));
        assert!(line.ends_with("R_eq = 0.00 Ω"));

        let config = RenderConfig::default().with_language(Language::German);
        let line = render_step(&step, &config);
        assert!(line.contains("R2 || R3 = 0.00 Ω || 20.00 Ω"));
        assert!(line.contains("R2 mit 0 Ω schließt die Parallelschaltung kurz"));
    }

    #[test]
    fn test_subnormal_member_renders_without_infinite_conductance() {
        let step = Step::ParallelReduction {
            label: "R1 || R2".to_string(),
            operands: vec![operand("R1", 1e-310), operand("R2", 5.0)],
            conductance_sum: 0.2,
            shorted: vec!["R1".to_string()],
            short_dominates: false,
            resistance: 5.0,
        };
        let line = render_step(&step, &RenderConfig::default());
        assert!(line.contains("1/R_eq = 1/R2 = 0.2000 S"));
        assert!(!line.contains("inf"));
    }

    #[test]
    fn test_parallel_excluded_member_is_noted() {
        let step = Step::ParallelReduction {
            label: "R1 || R2".to_string(),
            operands: vec![operand("R1", 0.0), operand("R2", 20.0)],
            conductance_sum: 0.05,
            shorted: vec!["R1".to_string()],
            short_dominates: false,
            resistance: 20.0,
        };
        let line = render_step(&step, &RenderConfig::default());
        assert!(line.contains("1/R_eq = 1/R2 = 0.0500 S"));
        assert!(line.ends_with("(R1 at 0 Ω excluded)"));
    }

    #[test]
    fn test_summary_german() {
        let step = Step::ResistorSummary {
            identity: ResistorId(2),
            resistance: 20.0,
            voltage: 20.0,
            current: 1.0,
            power: 20.0,
        };
        let config = RenderConfig::default().with_language(Language::German);
        assert_eq!(
            render_step(&step, &config),
            "Analyse für R2 (20.00 Ω): Spannung = 20.00 V, Strom = 1.0000 A, Leistung = 20.00 W"
        );
    }

    #[test]
    fn test_zero_total_resistance_wording() {
        let step = Step::TotalCurrent {
            voltage: 10.0,
            resistance: 0.0,
            current: 0.0,
        };
        assert_eq!(
            render_step(&step, &RenderConfig::default()),
            "Total current: R_total is 0 Ω, I_total taken as 0.0000 A"
        );
    }

    #[test]
    fn test_precision_override() {
        let step = Step::TotalResistance { resistance: 1.0 / 3.0 };
        let config = RenderConfig::new().with_precision(3);
        assert_eq!(render_step(&step, &config), "Total resistance: R_total = 0.333 Ω");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("de".parse::<Language>(), Ok(Language::German));
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
    }
}
