//! Component tree representation and validation.
//!
//! This module provides the internal representation of a circuit after its
//! topology has been decoded. The tree is built once per solve, annotated in
//! place by the reduction and distribution passes, then discarded.

mod tree;
mod types;
mod validate;

pub use tree::{build_tree, ComponentNode, NodeKind};
pub use types::*;
pub use validate::{validate_resistance, validate_voltage};
