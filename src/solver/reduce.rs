//! Equivalent-resistance pass.
//!
//! Post-order traversal: every child is reduced before its parent, and each
//! group appends exactly one reduction step in the order reductions complete.

use super::solve::ShortCircuitPolicy;
use super::trace::Trace;
use super::warnings::DegenerateCircuit;
use crate::circuit::{ComponentNode, NodeKind};
use crate::error::{Result, SolverError};
use crate::narrative::{Operand, Step};

/// Outcome of combining resistances in parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelEquivalent {
    /// Sum of `1/R` over the non-zero members
    pub conductance_sum: f64,
    /// Indices of the zero-resistance members
    pub shorted: Vec<usize>,
    /// Whether the shorted members forced the result to 0
    pub short_dominates: bool,
    /// Equivalent resistance in ohms
    pub resistance: f64,
}

/// Equivalent resistance of members in series.
pub fn series_equivalent(resistances: &[f64]) -> f64 {
    resistances.iter().sum()
}

/// Whether a resistance is too small to carry a finite current.
///
/// True for 0 and for values whose reciprocal overflows, such as subnormals.
pub fn is_short(resistance: f64) -> bool {
    !(1.0 / resistance).is_finite()
}

/// Equivalent resistance of members in parallel.
///
/// Shorted members (see [`is_short`]) never enter the reciprocal sum. Under
/// [`ShortCircuitPolicy::Dominant`] any such member makes the result 0;
/// under [`ShortCircuitPolicy::ExcludeFromSum`] they are ignored. A
/// reciprocal sum of 0 yields 0.
pub fn parallel_equivalent(resistances: &[f64], policy: ShortCircuitPolicy) -> ParallelEquivalent {
    let shorted: Vec<usize> = resistances
        .iter()
        .enumerate()
        .filter(|(_, r)| is_short(**r))
        .map(|(idx, _)| idx)
        .collect();

    let conducting: Vec<f64> = resistances
        .iter()
        .copied()
        .filter(|r| !is_short(*r))
        .collect();
    let conductance_sum: f64 = conducting.iter().map(|r| 1.0 / r).sum();

    let short_dominates = policy == ShortCircuitPolicy::Dominant && !shorted.is_empty();

    let resistance = if short_dominates || conductance_sum == 0.0 {
        0.0
    } else if conductance_sum.is_finite() {
        1.0 / conductance_sum
    } else {
        // Reciprocals sum past f64::MAX; scale by the smallest member.
        let smallest = conducting.iter().copied().fold(f64::INFINITY, f64::min);
        smallest / conducting.iter().map(|r| smallest / r).sum::<f64>()
    };

    ParallelEquivalent {
        conductance_sum,
        shorted,
        short_dominates,
        resistance,
    }
}

/// Reduce a subtree, storing the equivalent resistance on every group.
pub(crate) fn reduce(
    node: &mut ComponentNode,
    policy: ShortCircuitPolicy,
    trace: &mut Trace,
) -> Result<f64> {
    let ComponentNode {
        label,
        kind,
        resistance,
        ..
    } = node;

    let value = match kind {
        NodeKind::Resistor { id } => {
            let value = (*resistance).ok_or_else(|| SolverError::UnreducedNode {
                label: label.clone(),
            })?;
            if value == 0.0 {
                trace.warn(DegenerateCircuit::ShortedResistor { identity: *id });
            }
            return Ok(value);
        }

        NodeKind::Series { children } => {
            let operands = reduce_children(children, policy, trace)?;
            let values: Vec<f64> = operands.iter().map(|o| o.resistance).collect();
            let total = series_equivalent(&values);
            trace.step(Step::SeriesReduction {
                label: label.clone(),
                operands,
                resistance: total,
            });
            total
        }

        NodeKind::Parallel { children } => {
            let operands = reduce_children(children, policy, trace)?;
            let values: Vec<f64> = operands.iter().map(|o| o.resistance).collect();
            let equivalent = parallel_equivalent(&values, policy);
            let shorted: Vec<String> = equivalent
                .shorted
                .iter()
                .map(|&idx| operands[idx].label.clone())
                .collect();

            if !shorted.is_empty() {
                trace.warn(DegenerateCircuit::ShortedParallelGroup {
                    group: label.clone(),
                    shorted: shorted.clone(),
                    short_dominates: equivalent.short_dominates,
                });
            }
            if !equivalent.short_dominates && equivalent.conductance_sum == 0.0 {
                trace.warn(DegenerateCircuit::ZeroConductanceSum {
                    group: label.clone(),
                });
            }

            trace.step(Step::ParallelReduction {
                label: label.clone(),
                operands,
                conductance_sum: equivalent.conductance_sum,
                shorted,
                short_dominates: equivalent.short_dominates,
                resistance: equivalent.resistance,
            });
            equivalent.resistance
        }
    };

    *resistance = Some(value);
    Ok(value)
}

fn reduce_children(
    children: &mut [ComponentNode],
    policy: ShortCircuitPolicy,
    trace: &mut Trace,
) -> Result<Vec<Operand>> {
    children
        .iter_mut()
        .map(|child| {
            let resistance = reduce(child, policy, trace)?;
            Ok(Operand {
                label: child.nested_label(),
                resistance,
            })
        })
        .collect()
}
