//! Decoding of JSON values into topology descriptions.

use serde_json::{Map, Value};

use super::description::{Connection, Topology};
use crate::circuit::validate_resistance;
use crate::error::{Result, SolverError};

const CONNECTION_KEYS: [&str; 2] = ["connection", "type"];
const MEMBER_KEYS: [&str; 2] = ["members", "components"];

/// Decode a topology from a JSON value.
///
/// Errors carry the location of the offending node, e.g.
/// `$.members[1].members[0]`.
pub fn from_value(value: &Value) -> Result<Topology> {
    decode_node(value, "$")
}

fn decode_node(value: &Value, path: &str) -> Result<Topology> {
    match value {
        Value::Number(number) => {
            let resistance = number.as_f64().ok_or_else(|| {
                SolverError::invalid_topology(path, format!("resistance {} is not representable", number))
            })?;
            validate_resistance(path, resistance)?;
            Ok(Topology::Resistor(resistance))
        }
        Value::Object(fields) => decode_group(fields, path),
        Value::String(s) => Err(SolverError::invalid_topology(
            path,
            format!("expected a resistance or a group, got string {:?}", s),
        )),
        Value::Array(_) => Err(SolverError::invalid_topology(
            path,
            "expected a resistance or a group, got a bare list (wrap it in a group with a connection)",
        )),
        Value::Bool(_) | Value::Null => Err(SolverError::invalid_topology(
            path,
            format!("expected a resistance or a group, got {}", value),
        )),
    }
}

fn decode_group(fields: &Map<String, Value>, path: &str) -> Result<Topology> {
    let connection = match lookup(fields, &CONNECTION_KEYS) {
        Some(Value::String(kind)) => kind
            .parse::<Connection>()
            .map_err(|message| SolverError::invalid_topology(path, message))?,
        Some(other) => {
            return Err(SolverError::invalid_topology(
                path,
                format!("connection must be a string, got {}", other),
            ))
        }
        None => {
            return Err(SolverError::invalid_topology(
                path,
                "group is missing its 'connection' field",
            ))
        }
    };

    let members = match lookup(fields, &MEMBER_KEYS) {
        Some(Value::Array(members)) => members,
        Some(other) => {
            return Err(SolverError::invalid_topology(
                path,
                format!("members must be a list, got {}", other),
            ))
        }
        None => {
            return Err(SolverError::invalid_topology(
                path,
                "group is missing its 'members' field",
            ))
        }
    };

    if members.is_empty() {
        return Err(SolverError::invalid_topology(
            path,
            format!("{} group has no members", connection),
        ));
    }

    let members = members
        .iter()
        .enumerate()
        .map(|(idx, member)| decode_node(member, &format!("{}.members[{}]", path, idx)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Topology::group(connection, members))
}

fn lookup<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| fields.get(*key))
}
