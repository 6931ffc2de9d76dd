//! Structured derivation steps.

use serde::Serialize;

use crate::circuit::ResistorId;

/// One member of a reduction: its label and (equivalent) resistance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operand {
    pub label: String,
    pub resistance: f64,
}

/// How a resistor received its voltage and current during distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sharing {
    /// The resistor is the whole circuit
    Supply,
    /// Current shared with its series siblings
    SeriesCurrent,
    /// Voltage shared with its parallel siblings
    ParallelVoltage,
    /// Zero-resistance member carrying its parallel group's current
    ShortedBranch,
    /// Member of a parallel group that is bypassed by a short circuit
    Bypassed,
}

/// A single step of the derivation, in the order it was computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// The component tree was built
    TreeBuilt {
        label: String,
        resistors: usize,
        groups: usize,
    },
    /// Series group reduced to the sum of its members
    SeriesReduction {
        label: String,
        operands: Vec<Operand>,
        resistance: f64,
    },
    /// Parallel group reduced through the sum of reciprocals
    ParallelReduction {
        label: String,
        operands: Vec<Operand>,
        /// Sum of `1/R` over the members with non-zero resistance
        conductance_sum: f64,
        /// Labels of zero-resistance members
        shorted: Vec<String>,
        /// Whether the shorted members forced the group to 0 ohms
        short_dominates: bool,
        resistance: f64,
    },
    TotalResistance {
        resistance: f64,
    },
    TotalCurrent {
        voltage: f64,
        resistance: f64,
        current: f64,
    },
    TotalPower {
        voltage: f64,
        current: f64,
        power: f64,
    },
    /// A resistor received its operating point
    Distribution {
        identity: ResistorId,
        sharing: Sharing,
        resistance: f64,
        voltage: f64,
        current: f64,
        power: f64,
    },
    /// Final per-resistor summary line
    ResistorSummary {
        identity: ResistorId,
        resistance: f64,
        voltage: f64,
        current: f64,
        power: f64,
    },
}

impl Step {
    /// Whether this step comes from the reduction pass.
    pub fn is_reduction(&self) -> bool {
        matches!(
            self,
            Self::SeriesReduction { .. } | Self::ParallelReduction { .. }
        )
    }
}
