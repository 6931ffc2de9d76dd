//! Component tree and tree builder.

use super::types::{OperatingPoint, ResistorId};
use super::validate::validate_resistance;
use crate::error::{Result, SolverError};
use crate::topology::{Connection, Topology};

/// What a node in the component tree is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A resistor leaf
    Resistor { id: ResistorId },
    /// Children share the same current
    Series { children: Vec<ComponentNode> },
    /// Children share the same voltage
    Parallel { children: Vec<ComponentNode> },
}

/// A node of the component tree.
///
/// `resistance` is set at build time for resistors and by the reduction
/// pass for groups. `operating_point` is set by the distribution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    /// Display label: `R3` for a resistor, `R1 + (R2 || R3)` for a group
    pub label: String,
    pub kind: NodeKind,
    /// Resistance or equivalent resistance in ohms
    pub resistance: Option<f64>,
    pub operating_point: Option<OperatingPoint>,
}

impl ComponentNode {
    /// Create a resistor leaf.
    pub fn resistor(id: ResistorId, resistance: f64) -> Self {
        Self {
            label: id.to_string(),
            kind: NodeKind::Resistor { id },
            resistance: Some(resistance),
            operating_point: None,
        }
    }

    /// Create a group node. Its label is synthesized from its children.
    pub fn group(connection: Connection, children: Vec<ComponentNode>) -> Self {
        let label = children
            .iter()
            .map(ComponentNode::nested_label)
            .collect::<Vec<_>>()
            .join(connection.separator());
        let kind = match connection {
            Connection::Series => NodeKind::Series { children },
            Connection::Parallel => NodeKind::Parallel { children },
        };
        Self {
            label,
            kind,
            resistance: None,
            operating_point: None,
        }
    }

    /// Resistor identity, `None` for a group.
    pub fn resistor_id(&self) -> Option<ResistorId> {
        match self.kind {
            NodeKind::Resistor { id } => Some(id),
            _ => None,
        }
    }

    pub fn is_resistor(&self) -> bool {
        matches!(self.kind, NodeKind::Resistor { .. })
    }

    /// Child nodes in input order; empty for a resistor.
    pub fn children(&self) -> &[ComponentNode] {
        match &self.kind {
            NodeKind::Resistor { .. } => &[],
            NodeKind::Series { children } | NodeKind::Parallel { children } => children,
        }
    }

    /// Label as it appears inside a parent's label.
    pub fn nested_label(&self) -> String {
        if self.is_resistor() || self.children().len() == 1 {
            self.label.clone()
        } else {
            format!("({})", self.label)
        }
    }

    /// Resistance of this node, failing if the reduction pass has not set it.
    pub fn equivalent_resistance(&self) -> Result<f64> {
        self.resistance.ok_or_else(|| SolverError::UnreducedNode {
            label: self.label.clone(),
        })
    }

    /// Resistor leaves in depth-first, left-to-right order.
    pub fn resistors(&self) -> Vec<&ComponentNode> {
        let mut leaves = Vec::new();
        self.collect_resistors(&mut leaves);
        leaves
    }

    fn collect_resistors<'a>(&'a self, leaves: &mut Vec<&'a ComponentNode>) {
        if self.is_resistor() {
            leaves.push(self);
        }
        for child in self.children() {
            child.collect_resistors(leaves);
        }
    }

    /// Number of group nodes, including this one.
    pub fn group_count(&self) -> usize {
        let own = usize::from(!self.is_resistor());
        own + self.children().iter().map(ComponentNode::group_count).sum::<usize>()
    }
}

/// Build the component tree for a topology.
///
/// Resistors are numbered `R1`, `R2`, ... in one depth-first, left-to-right
/// pass. The counter belongs to this call only.
pub fn build_tree(topology: &Topology) -> Result<ComponentNode> {
    let mut builder = TreeBuilder::new();
    let root = builder.build(topology, "$")?;
    log::debug!(
        "built component tree '{}' with {} resistors, nesting depth {}",
        root.label,
        builder.next_id - 1,
        topology.depth()
    );
    Ok(root)
}

struct TreeBuilder {
    next_id: usize,
}

impl TreeBuilder {
    fn new() -> Self {
        Self { next_id: 1 }
    }

    fn next_resistor_id(&mut self) -> ResistorId {
        let id = ResistorId(self.next_id);
        self.next_id += 1;
        id
    }

    fn build(&mut self, topology: &Topology, path: &str) -> Result<ComponentNode> {
        match topology {
            Topology::Resistor(resistance) => {
                validate_resistance(path, *resistance)?;
                Ok(ComponentNode::resistor(self.next_resistor_id(), *resistance))
            }
            Topology::Group(group) => {
                if group.members.is_empty() {
                    return Err(SolverError::invalid_topology(
                        path,
                        format!("{} group has no members", group.connection),
                    ));
                }
                let children = group
                    .members
                    .iter()
                    .enumerate()
                    .map(|(idx, member)| self.build(member, &format!("{}.members[{}]", path, idx)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ComponentNode::group(group.connection, children))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Topology {
        Topology::series(vec![
            Topology::resistor(10.0),
            Topology::parallel(vec![Topology::resistor(20.0), Topology::resistor(20.0)]),
        ])
    }

    #[test]
    fn test_identities_are_preorder() {
        let topology = Topology::parallel(vec![
            Topology::series(vec![Topology::resistor(1.0), Topology::resistor(2.0)]),
            Topology::resistor(3.0),
            Topology::series(vec![
                Topology::resistor(4.0),
                Topology::parallel(vec![Topology::resistor(5.0), Topology::resistor(6.0)]),
            ]),
        ]);
        let root = build_tree(&topology).unwrap();
        let ids: Vec<_> = root.resistors().iter().filter_map(|n| n.resistor_id()).collect();
        let values: Vec<_> = root.resistors().iter().filter_map(|n| n.resistance).collect();
        assert_eq!(ids, (1..=6).map(ResistorId).collect::<Vec<_>>());
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_group_labels() {
        let root = build_tree(&mixed()).unwrap();
        assert_eq!(root.label, "R1 + (R2 || R3)");
        assert_eq!(root.children()[1].label, "R2 || R3");
        assert_eq!(root.group_count(), 2);
    }

    #[test]
    fn test_groups_start_unreduced() {
        let root = build_tree(&mixed()).unwrap();
        assert!(root.resistance.is_none());
        assert!(matches!(
            root.equivalent_resistance(),
            Err(SolverError::UnreducedNode { .. })
        ));
        assert_eq!(root.children()[0].resistance, Some(10.0));
    }

    #[test]
    fn test_counter_is_per_call() {
        let first = build_tree(&mixed()).unwrap();
        let second = build_tree(&mixed()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let topology = Topology::series(vec![Topology::resistor(1.0), Topology::parallel(vec![])]);
        match build_tree(&topology) {
            Err(SolverError::InvalidTopology { path, .. }) => assert_eq!(path, "$.members[1]"),
            other => panic!("expected InvalidTopology, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_resistance_is_rejected() {
        let topology = Topology::series(vec![Topology::resistor(-1.0)]);
        assert!(matches!(
            build_tree(&topology),
            Err(SolverError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_bare_resistor_root() {
        let root = build_tree(&Topology::resistor(47.0)).unwrap();
        assert_eq!(root.label, "R1");
        assert!(root.is_resistor());
        assert_eq!(root.group_count(), 0);
    }
}
