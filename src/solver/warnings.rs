//! Degenerate-circuit warnings.
//!
//! A short circuit or a group that does not conduct is a legitimate circuit
//! state, so the solver completes with the documented fallbacks and records
//! the condition here instead of failing.

use std::fmt;

use serde::Serialize;

use crate::circuit::ResistorId;

/// A degenerate condition met while solving.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DegenerateCircuit {
    /// A resistor has exactly 0 ohms
    ShortedResistor { identity: ResistorId },
    /// A parallel group contains zero-resistance members
    ShortedParallelGroup {
        group: String,
        shorted: Vec<String>,
        /// Whether the short forced the group to 0 ohms
        short_dominates: bool,
    },
    /// A parallel group's sum of reciprocals is 0; its resistance is taken as 0
    ZeroConductanceSum { group: String },
    /// The whole circuit reduces to 0 ohms; total current is taken as 0
    ZeroTotalResistance,
}

impl fmt::Display for DegenerateCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortedResistor { identity } => {
                write!(f, "{} has 0 Ω and acts as a short circuit", identity)
            }
            Self::ShortedParallelGroup {
                group,
                shorted,
                short_dominates: true,
            } => write!(
                f,
                "parallel group {} is short-circuited by {}; its resistance is 0 Ω",
                group,
                shorted.join(", ")
            ),
            Self::ShortedParallelGroup {
                group,
                shorted,
                short_dominates: false,
            } => write!(
                f,
                "parallel group {} ignores 0 Ω member(s) {} in its reciprocal sum",
                group,
                shorted.join(", ")
            ),
            Self::ZeroConductanceSum { group } => write!(
                f,
                "parallel group {} has no conducting member; its resistance is taken as 0 Ω",
                group
            ),
            Self::ZeroTotalResistance => write!(
                f,
                "total resistance is 0 Ω; total current is taken as 0 A"
            ),
        }
    }
}
