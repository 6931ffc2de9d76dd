//! # Circuit Solver
//!
//! Resistance, current, voltage and power for resistor networks built from
//! arbitrarily nested series and parallel groups, with a step-by-step
//! derivation of every result.
//!
//! This library provides:
//! - A JSON topology format for nested series/parallel networks
//! - A two-pass tree solver (equivalent resistance bottom-up, voltage and
//!   current top-down)
//! - Flat series and parallel solvers as single-level special cases
//! - A structured derivation trace, rendered in English or German
//!
//! ## Architecture
//!
//! - [`topology`] - Input description and JSON decoding
//! - [`circuit`] - Component tree and tree builder
//! - [`solver`] - Reduction, distribution and result assembly
//! - [`narrative`] - Derivation steps and their text rendering
//! - [`report`] - Serializable and printable reports
//!
//! ## Usage
//!
//! ```
//! use circuit_solver::{solve, Topology};
//!
//! // R1 + (R2 || R3)
//! let topology = Topology::series(vec![
//!     Topology::resistor(10.0),
//!     Topology::parallel(vec![Topology::resistor(20.0), Topology::resistor(20.0)]),
//! ]);
//!
//! let result = solve(&topology, 10.0).unwrap();
//! assert!((result.total_resistance - 20.0).abs() < 1e-12);
//! assert_eq!(result.per_resistor[2].identity.to_string(), "R3");
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! circuit-solver --voltage 100 series 10 20 70
//! circuit-solver --voltage 12 --format json mixed circuit.json
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { solve_json } from 'circuit_solver';
//!
//! const report = JSON.parse(solve_json(topologyJson, 12.0, 'en'));
//! ```

pub mod circuit;
pub mod error;
pub mod narrative;
pub mod report;
pub mod solver;
pub mod topology;

// Re-export main types for convenience
pub use error::{Result, SolverError};
pub use narrative::{Language, RenderConfig};
pub use report::Report;
pub use solver::{
    solve, solve_parallel, solve_series, solve_with_config, DegenerateCircuit, SolveResult,
    SolverConfig,
};
pub use topology::{Connection, Topology};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{solve_json, solve_parallel_json, solve_series_json};
