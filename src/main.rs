//! Circuit Solver - resistor network calculator
//!
//! Solves series, parallel and nested series/parallel resistor networks and
//! prints a step-by-step derivation.
//!
//! # Usage
//!
//! ```bash
//! circuit-solver --voltage 100 series 10 20 70
//! circuit-solver --voltage 10 parallel 10 10 --language de
//! circuit-solver --voltage 12 --format json mixed circuit.json
//! echo '{"connection":"series","members":[10,{"connection":"parallel","members":[20,20]}]}' \
//!     | circuit-solver --voltage 10 mixed -
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use circuit_solver::{
    error::{Result, SolverError},
    solver::{solve_flat, ShortCircuitPolicy},
    topology, Connection, Language, RenderConfig, Report, SolverConfig, Topology,
};
use clap::{Parser, Subcommand, ValueEnum};

/// Series/parallel resistor network solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Supply voltage in volts
    #[arg(short = 'U', long, value_parser = parse_supply_voltage)]
    voltage: f64,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Narrative language (en, de)
    #[arg(short, long, global = true, default_value = "en")]
    language: Language,

    /// Decimal places for every quantity in the narrative
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Explain how every resistor receives its voltage and current
    #[arg(long, global = true)]
    trace: bool,

    /// Leave 0 Ω parallel members out of the reciprocal sum instead of
    /// shorting the whole group
    #[arg(long, global = true)]
    legacy_shorts: bool,

    #[command(subcommand)]
    circuit: CircuitArg,
}

#[derive(Subcommand, Debug)]
enum CircuitArg {
    /// Resistors connected in series
    Series {
        /// Resistances in ohms
        #[arg(required = true, allow_negative_numbers = true)]
        resistances: Vec<f64>,
    },
    /// Resistors connected in parallel
    Parallel {
        /// Resistances in ohms
        #[arg(required = true, allow_negative_numbers = true)]
        resistances: Vec<f64>,
    },
    /// Nested series/parallel network described as JSON
    Mixed {
        /// Topology file, or '-' for stdin
        #[arg(value_name = "TOPOLOGY_FILE", required_unless_present = "json")]
        file: Option<PathBuf>,

        /// Inline topology JSON
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn parse_supply_voltage(s: &str) -> std::result::Result<f64, String> {
    let voltage: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if voltage.is_finite() && voltage > 0.0 {
        Ok(voltage)
    } else {
        Err(format!("supply voltage must be a positive number, got {}", s))
    }
}

fn read_topology(file: Option<PathBuf>, json: Option<String>) -> Result<Topology> {
    if let Some(json) = json {
        return topology::parse(&json);
    }
    match file {
        Some(path) if path.as_os_str() == "-" => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| SolverError::FileReadError {
                    path: "<stdin>".to_string(),
                    source: e,
                })?;
            topology::parse(&content)
        }
        Some(path) => topology::parse_file(&path),
        None => Err(SolverError::invalid_topology("$", "no topology given")),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        // 2 for bad input, 1 for I/O and internal failures
        process::exit(if err.is_input_error() { 2 } else { 1 });
    }
}

fn run(args: Args) -> Result<()> {
    let policy = if args.legacy_shorts {
        ShortCircuitPolicy::ExcludeFromSum
    } else {
        ShortCircuitPolicy::Dominant
    };

    // Solve
    let result = match args.circuit {
        CircuitArg::Series { resistances } => {
            let config = SolverConfig::flat().with_short_circuit(policy);
            solve_flat(Connection::Series, &resistances, args.voltage, &config)?
        }
        CircuitArg::Parallel { resistances } => {
            let config = SolverConfig::flat().with_short_circuit(policy);
            solve_flat(Connection::Parallel, &resistances, args.voltage, &config)?
        }
        CircuitArg::Mixed { file, json } => {
            let topology = read_topology(file, json)?;
            let config = SolverConfig::new()
                .with_short_circuit(policy)
                .with_distribution_trace(args.trace)
                .with_build_step(true);
            circuit_solver::solve_with_config(&topology, args.voltage, &config)?
        }
    };

    // Render
    let mut render = RenderConfig::new().with_language(args.language);
    if let Some(places) = args.precision {
        render = render.with_precision(places);
    }
    let report = Report::new(&result, &render);

    let mut out = io::stdout().lock();
    match args.format {
        Format::Text => report.write_text(&mut out)?,
        Format::Json => writeln!(out, "{}", report.to_json()?)
            .map_err(|source| SolverError::OutputError { source })?,
    }

    Ok(())
}
