//! Topology descriptions: the input format of the solver.
//!
//! A topology is a recursive value that is either a bare resistance or a
//! group of members joined in series or in parallel. It is usually supplied
//! as JSON:
//!
//! ```text
//! topology   = number | group
//! group      = { "connection": connection, "members": [ topology+ ] }
//! connection = "series" | "parallel"
//! ```
//!
//! The keys `type` and `components` are accepted as aliases for
//! `connection` and `members`.
//!
//! # Example
//!
//! ```text
//! {
//!   "connection": "series",
//!   "members": [10, { "connection": "parallel", "members": [20, 20] }]
//! }
//! ```
//!
//! Resistor identities (`R1`, `R2`, ...) are not part of the description.
//! They are assigned when the component tree is built.

mod decode;
mod description;

pub use decode::from_value;
pub use description::{Connection, Group, Topology};

use crate::error::Result;

/// Parse a topology from a JSON string.
pub fn parse(input: &str) -> Result<Topology> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    from_value(&value)
}

/// Parse a topology JSON file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Topology> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::SolverError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
