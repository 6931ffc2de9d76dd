//! Solver entry points and configuration.

use super::distribute::distribute;
use super::reduce::{is_short, reduce};
use super::result::{flatten, SolveResult};
use super::trace::Trace;
use super::warnings::DegenerateCircuit;
use crate::circuit::{build_tree, validate_voltage};
use crate::error::Result;
use crate::narrative::{Sharing, Step};
use crate::topology::{Connection, Topology};

/// How zero-resistance members of a parallel group are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortCircuitPolicy {
    /// A 0 Ω member shorts the whole group: the group has 0 Ω, the shorted
    /// members split its current and the other members carry nothing.
    #[default]
    Dominant,
    /// 0 Ω members are left out of the reciprocal sum and carry 0 A; the
    /// other members behave as if the short were absent.
    ExcludeFromSum,
}

/// Configuration for the solver.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub short_circuit: ShortCircuitPolicy,
    /// Record one distribution step per resistor.
    pub trace_distribution: bool,
    /// Record a step describing the built tree.
    pub record_build: bool,
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for the flat series/parallel entry points, which explain
    /// the shared-current or shared-voltage rule for every resistor.
    pub fn flat() -> Self {
        Self::default().with_distribution_trace(true)
    }

    /// Set the short-circuit policy.
    pub fn with_short_circuit(mut self, policy: ShortCircuitPolicy) -> Self {
        self.short_circuit = policy;
        self
    }

    /// Enable or disable per-resistor distribution steps.
    pub fn with_distribution_trace(mut self, enabled: bool) -> Self {
        self.trace_distribution = enabled;
        self
    }

    /// Enable or disable the tree-built step.
    pub fn with_build_step(mut self, enabled: bool) -> Self {
        self.record_build = enabled;
        self
    }
}

/// Solve a topology for the given supply voltage with default configuration.
pub fn solve(topology: &Topology, total_voltage: f64) -> Result<SolveResult> {
    solve_with_config(topology, total_voltage, &SolverConfig::default())
}

/// Solve a topology for the given supply voltage.
///
/// Builds the component tree, reduces it bottom-up, distributes the supply
/// top-down and flattens the resistors into a result ordered by identity.
pub fn solve_with_config(
    topology: &Topology,
    total_voltage: f64,
    config: &SolverConfig,
) -> Result<SolveResult> {
    validate_voltage(total_voltage)?;

    let mut root = build_tree(topology)?;
    let mut trace = Trace::new();

    if config.record_build {
        trace.step(Step::TreeBuilt {
            label: root.label.clone(),
            resistors: root.resistors().len(),
            groups: root.group_count(),
        });
    }

    let total_resistance = reduce(&mut root, config.short_circuit, &mut trace)?;
    log::debug!("'{}' reduces to {} ohms", root.label, total_resistance);
    trace.step(Step::TotalResistance {
        resistance: total_resistance,
    });

    let total_current = total_voltage / total_resistance;
    let total_current = if is_short(total_resistance) || !total_current.is_finite() {
        trace.warn(DegenerateCircuit::ZeroTotalResistance);
        0.0
    } else {
        total_current
    };
    let total_power = total_voltage * total_current;
    trace.step(Step::TotalCurrent {
        voltage: total_voltage,
        resistance: total_resistance,
        current: total_current,
    });
    trace.step(Step::TotalPower {
        voltage: total_voltage,
        current: total_current,
        power: total_power,
    });

    distribute(
        &mut root,
        total_voltage,
        total_current,
        Sharing::Supply,
        config,
        &mut trace,
    )?;

    let per_resistor = flatten(&root)?;
    for r in &per_resistor {
        trace.step(Step::ResistorSummary {
            identity: r.identity,
            resistance: r.resistance,
            voltage: r.voltage,
            current: r.current,
            power: r.power,
        });
    }

    log::debug!(
        "solved {} resistors: I = {} A, P = {} W, {} warning(s)",
        per_resistor.len(),
        total_current,
        total_power,
        trace.warnings.len()
    );

    Ok(SolveResult {
        total_voltage,
        total_resistance,
        total_current,
        total_power,
        per_resistor,
        steps: trace.steps,
        warnings: trace.warnings,
    })
}

/// Solve resistors connected in series.
pub fn solve_series(resistances: &[f64], total_voltage: f64) -> Result<SolveResult> {
    solve_flat(Connection::Series, resistances, total_voltage, &SolverConfig::flat())
}

/// Solve resistors connected in parallel.
pub fn solve_parallel(resistances: &[f64], total_voltage: f64) -> Result<SolveResult> {
    solve_flat(Connection::Parallel, resistances, total_voltage, &SolverConfig::flat())
}

/// Solve a single-level group of resistors.
///
/// This is the general solver run on a one-level tree, so its numbers are
/// identical to [`solve_with_config`] on the equivalent topology.
pub fn solve_flat(
    connection: Connection,
    resistances: &[f64],
    total_voltage: f64,
    config: &SolverConfig,
) -> Result<SolveResult> {
    solve_with_config(&Topology::flat(connection, resistances), total_voltage, config)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuit::ResistorId;
    use crate::error::SolverError;

    #[test]
    fn test_series_scenario() {
        let result = solve_series(&[10.0, 20.0, 70.0], 100.0).unwrap();
        assert_relative_eq!(result.total_resistance, 100.0, epsilon = 1e-12);
        assert_relative_eq!(result.total_current, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.total_power, 100.0, epsilon = 1e-12);

        let expected = [(10.0, 10.0), (20.0, 20.0), (70.0, 70.0)];
        for (r, (resistance, voltage)) in result.per_resistor.iter().zip(expected) {
            assert_relative_eq!(r.resistance, resistance, epsilon = 1e-12);
            assert_relative_eq!(r.voltage, voltage, epsilon = 1e-12);
            assert_relative_eq!(r.current, 1.0, epsilon = 1e-12);
            assert_relative_eq!(r.power, voltage, epsilon = 1e-12);
        }
        assert!(!result.is_degenerate());
    }

    #[test]
    fn test_parallel_scenario() {
        let result = solve_parallel(&[10.0, 10.0], 10.0).unwrap();
        assert_relative_eq!(result.total_resistance, 5.0, epsilon = 1e-12);
        assert_relative_eq!(result.total_current, 2.0, epsilon = 1e-12);
        for r in &result.per_resistor {
            assert_relative_eq!(r.voltage, 10.0, epsilon = 1e-12);
            assert_relative_eq!(r.current, 1.0, epsilon = 1e-12);
            assert_relative_eq!(r.power, 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_step_order() {
        let topology = Topology::series(vec![
            Topology::resistor(10.0),
            Topology::parallel(vec![Topology::resistor(20.0), Topology::resistor(20.0)]),
        ]);
        let config = SolverConfig::new()
            .with_build_step(true)
            .with_distribution_trace(true);
        let result = solve_with_config(&topology, 10.0, &config).unwrap();

        let kinds: Vec<&str> = result
            .steps
            .iter()
            .map(|step| match step {
                Step::TreeBuilt { .. } => "built",
                Step::SeriesReduction { .. } | Step::ParallelReduction { .. } => "reduce",
                Step::TotalResistance { .. } => "resistance",
                Step::TotalCurrent { .. } => "current",
                Step::TotalPower { .. } => "power",
                Step::Distribution { .. } => "distribute",
                Step::ResistorSummary { .. } => "summary",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "built",
                "reduce",
                "reduce",
                "resistance",
                "current",
                "power",
                "distribute",
                "distribute",
                "distribute",
                "summary",
                "summary",
                "summary",
            ]
        );
    }

    #[test]
    fn test_bare_resistor() {
        let result = solve(&Topology::resistor(50.0), 10.0).unwrap();
        assert_relative_eq!(result.total_current, 0.2, epsilon = 1e-12);
        assert_eq!(result.per_resistor.len(), 1);
        assert_eq!(result.per_resistor[0].identity, ResistorId(1));
        assert_relative_eq!(result.per_resistor[0].voltage, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_total_resistance() {
        let result = solve_series(&[0.0, 0.0], 5.0).unwrap();
        assert_eq!(result.total_resistance, 0.0);
        assert_eq!(result.total_current, 0.0);
        assert_eq!(result.total_power, 0.0);
        assert!(result
            .warnings
            .contains(&DegenerateCircuit::ZeroTotalResistance));
    }

    #[test]
    fn test_negative_voltage_is_degenerate_not_invalid() {
        let result = solve_series(&[10.0], -5.0).unwrap();
        assert_relative_eq!(result.total_current, -0.5, epsilon = 1e-12);
        assert_relative_eq!(result.total_power, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_voltage_is_rejected() {
        assert!(matches!(
            solve_series(&[10.0], f64::INFINITY),
            Err(SolverError::InvalidVoltage { .. })
        ));
    }

    #[test]
    fn test_empty_flat_list_is_rejected() {
        assert!(matches!(
            solve_parallel(&[], 10.0),
            Err(SolverError::InvalidTopology { .. })
        ));
    }
}
