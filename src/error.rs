//! Error types for the circuit solver.
//!
//! This module provides a unified error type [`SolverError`] that covers
//! all error conditions that can occur while decoding a topology, building
//! the component tree, and solving it.
//!
//! Degenerate circuits (short circuits, zero conductance) are not errors;
//! see [`crate::solver::DegenerateCircuit`].

use thiserror::Error;

/// Result type alias using [`SolverError`].
pub type Result<T> = std::result::Result<T, SolverError>;

/// Unified error type for all solver operations.
#[derive(Error, Debug)]
pub enum SolverError {
    // ============ Input Errors ============
    /// Malformed topology (wrong shape, unknown connection, empty group,
    /// non-numeric or negative leaf)
    #[error("Invalid circuit topology at {path}: {message}")]
    InvalidTopology { path: String, message: String },

    /// Supply voltage is not a finite number
    #[error("Invalid supply voltage {value}: must be a finite number")]
    InvalidVoltage { value: f64 },

    /// Topology document is not valid JSON
    #[error("Malformed topology JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    // ============ Solver Errors ============
    /// A group was distributed before its equivalent resistance was reduced
    #[error("Group '{label}' has no equivalent resistance; reduction pass did not run")]
    UnreducedNode { label: String },

    /// A resistor was read back before the distribution pass reached it
    #[error("Resistor '{label}' has no operating point; distribution pass did not reach it")]
    UndistributedNode { label: String },

    // ============ I/O Errors ============
    /// Error reading a topology file
    #[error("Failed to read topology file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a report
    #[error("Failed to write report: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl SolverError {
    /// Create an invalid topology error at the given location.
    pub fn invalid_topology(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check whether this error was caused by the caller's input rather than
    /// by the environment or an internal fault.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTopology { .. } | Self::InvalidVoltage { .. } | Self::Json { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_topology_message() {
        let err = SolverError::invalid_topology("$.members[0]", "group has no members");
        assert_eq!(
            err.to_string(),
            "Invalid circuit topology at $.members[0]: group has no members"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_unreduced_node_is_not_input_error() {
        let err = SolverError::UnreducedNode {
            label: "R1 + R2".to_string(),
        };
        assert!(!err.is_input_error());
    }
}
