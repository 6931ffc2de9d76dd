//! Topology description types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// How the members of a group are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Connection {
    /// Members share the same current
    Series,
    /// Members share the same voltage
    Parallel,
}

impl Connection {
    /// Separator used when joining member labels into a group label.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Series => " + ",
            Self::Parallel => " || ",
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Series => write!(f, "series"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

impl FromStr for Connection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "series" => Ok(Self::Series),
            "parallel" => Ok(Self::Parallel),
            other => Err(format!(
                "unknown connection kind '{}' (expected 'series' or 'parallel')",
                other
            )),
        }
    }
}

/// A group of members joined by one connection kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub connection: Connection,
    pub members: Vec<Topology>,
}

/// A resistor network description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Topology {
    /// A single resistor with the given resistance in ohms
    Resistor(f64),
    /// A series or parallel group
    Group(Group),
}

impl Topology {
    /// A single resistor.
    pub fn resistor(resistance: f64) -> Self {
        Self::Resistor(resistance)
    }

    /// A group with the given connection kind.
    pub fn group(connection: Connection, members: Vec<Topology>) -> Self {
        Self::Group(Group {
            connection,
            members,
        })
    }

    /// A series group.
    pub fn series(members: Vec<Topology>) -> Self {
        Self::group(Connection::Series, members)
    }

    /// A parallel group.
    pub fn parallel(members: Vec<Topology>) -> Self {
        Self::group(Connection::Parallel, members)
    }

    /// A single-level group whose members are all resistors.
    pub fn flat(connection: Connection, resistances: &[f64]) -> Self {
        Self::group(
            connection,
            resistances.iter().copied().map(Self::Resistor).collect(),
        )
    }

    /// Number of resistor leaves.
    pub fn resistor_count(&self) -> usize {
        match self {
            Self::Resistor(_) => 1,
            Self::Group(group) => group.members.iter().map(Self::resistor_count).sum(),
        }
    }

    /// Nesting depth; a bare resistor has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Resistor(_) => 0,
            Self::Group(group) => {
                1 + group.members.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Topology {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        super::from_value(&value).map_err(serde::de::Error::custom)
    }
}
