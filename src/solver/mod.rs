//! Mixed series/parallel resistor network solver.
//!
//! This module provides the two-pass tree algorithm behind every solve.
//!
//! ## Passes
//!
//! 1. **Reduction** (post-order): each group's equivalent resistance is
//!    computed from its children's:
//!    ```text
//!    series:   R_eq = R1 + R2 + ... + Rn
//!    parallel: 1/R_eq = 1/R1 + 1/R2 + ... + 1/Rn
//!    ```
//! 2. **Distribution** (pre-order): the supply is pushed down from the root.
//!    Children of a series group carry the group's current and drop
//!    `U = I * R`; children of a parallel group see the group's voltage and
//!    draw `I = U / R`.
//!
//! Resistors are then collected in identity order and every step of the
//! derivation is recorded as a [`Step`](crate::narrative::Step).
//!
//! Division by a zero resistance is never attempted: a zero total
//! resistance yields zero current, and zero-resistance parallel members are
//! handled according to [`ShortCircuitPolicy`]. Such conditions are reported
//! as [`DegenerateCircuit`] warnings.

mod distribute;
mod reduce;
mod result;
mod solve;
mod trace;
mod warnings;

pub use reduce::{is_short, parallel_equivalent, series_equivalent, ParallelEquivalent};
pub use result::{ResistorResult, SolveResult};
pub use solve::{
    solve, solve_flat, solve_parallel, solve_series, solve_with_config, ShortCircuitPolicy,
    SolverConfig,
};
pub use warnings::DegenerateCircuit;
