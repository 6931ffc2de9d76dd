//! Accumulator threaded through the solver passes.

use super::warnings::DegenerateCircuit;
use crate::narrative::Step;

/// Steps and warnings collected during one solve, in computation order.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    pub steps: Vec<Step>,
    pub warnings: Vec<DegenerateCircuit>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, step: Step) {
        log::trace!("{:?}", step);
        self.steps.push(step);
    }

    pub fn warn(&mut self, warning: DegenerateCircuit) {
        log::warn!("degenerate circuit: {}", warning);
        self.warnings.push(warning);
    }
}
