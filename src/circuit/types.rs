//! Core types for the component tree.

use std::fmt;

use serde::{Serialize, Serializer};

/// Identity of a resistor leaf.
///
/// Identities are 1-based and assigned in depth-first, left-to-right order
/// of the topology description, so `ResistorId(1)` displays as `R1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResistorId(pub usize);

impl ResistorId {
    /// The numeric suffix of the identity.
    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ResistorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

impl Serialize for ResistorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Voltage across, current through, and power dissipated by a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    /// Volts
    pub voltage: f64,
    /// Amperes
    pub current: f64,
    /// Watts
    pub power: f64,
}

impl OperatingPoint {
    /// Create an operating point; power is `voltage * current`.
    pub fn new(voltage: f64, current: f64) -> Self {
        Self {
            voltage,
            current,
            power: voltage * current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_id_display() {
        assert_eq!(ResistorId(1).to_string(), "R1");
        assert_eq!(ResistorId(12).to_string(), "R12");
    }

    #[test]
    fn test_resistor_id_orders_numerically() {
        let mut ids = vec![ResistorId(10), ResistorId(2), ResistorId(1)];
        ids.sort();
        assert_eq!(ids, vec![ResistorId(1), ResistorId(2), ResistorId(10)]);
    }

    #[test]
    fn test_operating_point_power() {
        let op = OperatingPoint::new(12.0, 0.5);
        assert!((op.power - 6.0).abs() < 1e-12);
    }
}
