//! Distribution pass.
//!
//! Pre-order traversal pushing voltage and current from the root down. The
//! rule applied to a node's children depends on the node's own kind: series
//! children share its current, parallel children share its voltage.

use super::reduce::is_short;
use super::solve::{ShortCircuitPolicy, SolverConfig};
use super::trace::Trace;
use crate::circuit::{ComponentNode, NodeKind, OperatingPoint};
use crate::error::Result;
use crate::narrative::{Sharing, Step};

/// Assign `voltage` and `current` to `node` and distribute them to its
/// subtree. Requires the reduction pass to have run.
pub(crate) fn distribute(
    node: &mut ComponentNode,
    voltage: f64,
    current: f64,
    sharing: Sharing,
    config: &SolverConfig,
    trace: &mut Trace,
) -> Result<()> {
    let point = OperatingPoint::new(voltage, current);
    let resistance = node.equivalent_resistance()?;
    node.operating_point = Some(point);

    match &mut node.kind {
        NodeKind::Resistor { id } => {
            if config.trace_distribution {
                trace.step(Step::Distribution {
                    identity: *id,
                    sharing,
                    resistance,
                    voltage,
                    current,
                    power: point.power,
                });
            }
        }

        NodeKind::Series { children } => {
            let child_sharing = inherit(sharing, Sharing::SeriesCurrent);
            for child in children.iter_mut() {
                let child_voltage = current * child.equivalent_resistance()?;
                distribute(child, child_voltage, current, child_sharing, config, trace)?;
            }
        }

        NodeKind::Parallel { children } => {
            let shorted = children
                .iter()
                .filter(|child| child.resistance.map_or(false, is_short))
                .count();

            if config.short_circuit == ShortCircuitPolicy::Dominant && shorted > 0 {
                // The short clamps the group to 0 V; shorted members split its current.
                let branch_current = current / shorted as f64;
                for child in children.iter_mut() {
                    if is_short(child.equivalent_resistance()?) {
                        let child_sharing = inherit(sharing, Sharing::ShortedBranch);
                        distribute(child, 0.0, branch_current, child_sharing, config, trace)?;
                    } else {
                        distribute(child, 0.0, 0.0, Sharing::Bypassed, config, trace)?;
                    }
                }
            } else {
                let child_sharing = inherit(sharing, Sharing::ParallelVoltage);
                for child in children.iter_mut() {
                    let child_resistance = child.equivalent_resistance()?;
                    let child_current = if !is_short(child_resistance) {
                        voltage / child_resistance
                    } else {
                        0.0
                    };
                    distribute(child, voltage, child_current, child_sharing, config, trace)?;
                }
            }
        }
    }

    Ok(())
}

/// Everything below a bypassed node is bypassed too.
fn inherit(parent: Sharing, own: Sharing) -> Sharing {
    if parent == Sharing::Bypassed {
        Sharing::Bypassed
    } else {
        own
    }
}
