//! WASM bindings for the circuit solver.
//!
//! This module provides JavaScript-friendly entry points for browser
//! frontends. Inputs and outputs are JSON strings so the frontend can use the
//! same payloads it would send to an HTTP backend.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { solve_json, solve_series_json } from 'circuit_solver';
//!
//! await init();
//!
//! const topology = JSON.stringify({
//!   connection: 'series',
//!   members: [10, { connection: 'parallel', members: [20, 20] }],
//! });
//!
//! const report = JSON.parse(solve_json(topology, 10.0, 'en'));
//! console.log(report.totalResistance, report.narrative);
//!
//! const flat = JSON.parse(solve_series_json(new Float64Array([10, 20, 70]), 100.0, 'de'));
//! ```

use wasm_bindgen::prelude::*;

use crate::error::SolverError;
use crate::narrative::{Language, RenderConfig};
use crate::report::Report;
use crate::solver::{self, SolverConfig};
use crate::topology::{self, Connection};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Solve a nested topology given as JSON.
///
/// # Arguments
/// * `topology_json` - `{ "connection": "series" | "parallel", "members": [...] }` or a bare number
/// * `voltage` - Supply voltage in volts, must be positive
/// * `language` - Narrative language, `"en"` or `"de"`
///
/// # Returns
/// The report as a JSON string, or an error message.
#[wasm_bindgen]
pub fn solve_json(topology_json: &str, voltage: f64, language: &str) -> Result<String, JsValue> {
    check_voltage(voltage)?;
    let topology = topology::parse(topology_json).map_err(to_js)?;
    let config = SolverConfig::new().with_build_step(true);
    let result = solver::solve_with_config(&topology, voltage, &config).map_err(to_js)?;
    render(&result, language)
}

/// Solve resistors connected in series.
#[wasm_bindgen]
pub fn solve_series_json(resistances: &[f64], voltage: f64, language: &str) -> Result<String, JsValue> {
    solve_flat_json(Connection::Series, resistances, voltage, language)
}

/// Solve resistors connected in parallel.
#[wasm_bindgen]
pub fn solve_parallel_json(resistances: &[f64], voltage: f64, language: &str) -> Result<String, JsValue> {
    solve_flat_json(Connection::Parallel, resistances, voltage, language)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn solve_flat_json(
    connection: Connection,
    resistances: &[f64],
    voltage: f64,
    language: &str,
) -> Result<String, JsValue> {
    check_voltage(voltage)?;
    let result = solver::solve_flat(connection, resistances, voltage, &SolverConfig::flat())
        .map_err(to_js)?;
    render(&result, language)
}

fn render(result: &solver::SolveResult, language: &str) -> Result<String, JsValue> {
    let language: Language = language.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let report = Report::new(result, &RenderConfig::new().with_language(language));
    report.to_json().map_err(to_js)
}

// Positive supply only at this boundary; the core accepts any finite value.
fn check_voltage(voltage: f64) -> Result<(), JsValue> {
    if voltage.is_finite() && voltage > 0.0 {
        Ok(())
    } else {
        Err(to_js(SolverError::WasmError {
            message: format!("supply voltage must be positive, got {}", voltage),
        }))
    }
}

fn to_js(err: SolverError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
