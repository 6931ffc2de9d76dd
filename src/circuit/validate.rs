//! Input validation.

use crate::error::{Result, SolverError};

/// Validate a leaf resistance.
///
/// Checks:
/// - The value is finite
/// - The value is not negative
///
/// Zero is accepted; it models a short circuit and is reported as a
/// degenerate circuit by the solver rather than rejected here.
pub fn validate_resistance(path: &str, resistance: f64) -> Result<()> {
    if !resistance.is_finite() {
        return Err(SolverError::invalid_topology(
            path,
            format!("resistance {} is not a finite number", resistance),
        ));
    }

    if resistance < 0.0 {
        return Err(SolverError::invalid_topology(
            path,
            format!("resistance {} is negative", resistance),
        ));
    }

    Ok(())
}

/// Validate the supply voltage handed to the solver.
///
/// Non-positive voltages are valid here; rejecting them is the caller's
/// policy.
pub fn validate_voltage(voltage: f64) -> Result<()> {
    if voltage.is_finite() {
        Ok(())
    } else {
        Err(SolverError::InvalidVoltage { value: voltage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_resistance() {
        assert!(validate_resistance("$", 10.0).is_ok());
        assert!(validate_resistance("$", 0.0).is_ok());
        assert!(validate_resistance("$", -1.0).is_err());
        assert!(validate_resistance("$", f64::NAN).is_err());
        assert!(validate_resistance("$", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_voltage() {
        assert!(validate_voltage(9.0).is_ok());
        assert!(validate_voltage(-9.0).is_ok());
        assert!(validate_voltage(0.0).is_ok());
        assert!(matches!(
            validate_voltage(f64::NAN),
            Err(SolverError::InvalidVoltage { .. })
        ));
    }
}
