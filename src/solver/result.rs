//! Solve results and the flattening of the solved tree into them.

use serde::Serialize;

use super::warnings::DegenerateCircuit;
use crate::circuit::{ComponentNode, ResistorId};
use crate::error::{Result, SolverError};
use crate::narrative::{render, RenderConfig, Step};

/// Voltage, current and power of one resistor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResistorResult {
    pub identity: ResistorId,
    /// Ohms
    pub resistance: f64,
    /// Volts
    pub voltage: f64,
    /// Amperes
    pub current: f64,
    /// Watts
    pub power: f64,
}

/// The complete outcome of one solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// Supply voltage the circuit was solved for
    pub total_voltage: f64,
    pub total_resistance: f64,
    pub total_current: f64,
    pub total_power: f64,
    /// One entry per resistor, ordered by identity
    pub per_resistor: Vec<ResistorResult>,
    /// Derivation trace in computation order
    pub steps: Vec<Step>,
    pub warnings: Vec<DegenerateCircuit>,
}

impl SolveResult {
    /// Render the derivation trace to text, one line per step.
    pub fn narrative(&self, config: &RenderConfig) -> Vec<String> {
        render(&self.steps, config)
    }

    /// Whether any degenerate condition was met.
    pub fn is_degenerate(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Look up a resistor by identity.
    pub fn resistor(&self, identity: ResistorId) -> Option<&ResistorResult> {
        self.per_resistor.iter().find(|r| r.identity == identity)
    }

    /// Sum of the power dissipated by every resistor.
    pub fn dissipated_power(&self) -> f64 {
        self.per_resistor.iter().map(|r| r.power).sum()
    }
}

/// Collect every resistor of a distributed tree, ordered by identity.
pub(crate) fn flatten(root: &ComponentNode) -> Result<Vec<ResistorResult>> {
    let mut results = root
        .resistors()
        .into_iter()
        .map(|leaf| {
            let undistributed = || SolverError::UndistributedNode {
                label: leaf.label.clone(),
            };
            let identity = leaf.resistor_id().ok_or_else(undistributed)?;
            let point = leaf.operating_point.ok_or_else(undistributed)?;
            Ok(ResistorResult {
                identity,
                resistance: leaf.equivalent_resistance()?,
                voltage: point.voltage,
                current: point.current,
                power: point.power,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable, so colliding identities would keep tree order.
    results.sort_by_key(|r| r.identity);
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::build_tree;
    use crate::topology::Topology;

    #[test]
    fn test_flatten_requires_distribution() {
        let root = build_tree(&Topology::series(vec![Topology::resistor(1.0)])).unwrap();
        assert!(matches!(
            flatten(&root),
            Err(SolverError::UndistributedNode { .. })
        ));
    }

    #[test]
    fn test_serialized_field_names() {
        let result = SolveResult {
            total_voltage: 10.0,
            total_resistance: 10.0,
            total_current: 1.0,
            total_power: 10.0,
            per_resistor: vec![ResistorResult {
                identity: ResistorId(1),
                resistance: 10.0,
                voltage: 10.0,
                current: 1.0,
                power: 10.0,
            }],
            steps: vec![],
            warnings: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalResistance"], 10.0);
        assert_eq!(json["perResistor"][0]["identity"], "R1");
        assert!(!result.is_degenerate());
        assert_eq!(result.resistor(ResistorId(1)).map(|r| r.power), Some(10.0));
        assert_eq!(result.resistor(ResistorId(2)), None);
    }
}
