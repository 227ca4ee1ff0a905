//! The flow document: ordered nodes plus the selection pointer

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ids::NodeId;
use super::node::FlowNode;
use crate::errors::{FlowError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    pub nodes: Vec<FlowNode>,
    pub selected_node_id: NodeId,
}

impl Flow {
    /// A flow holding only the welcome node
    pub fn seed() -> Self {
        let welcome = FlowNode::welcome();
        Self {
            selected_node_id: welcome.id.clone(),
            nodes: vec![welcome],
        }
    }

    /// Build a flow selecting its first node. Fails on an empty node list.
    pub fn from_nodes(nodes: Vec<FlowNode>) -> Result<Self> {
        let first = nodes
            .first()
            .map(|n| n.id.clone())
            .ok_or_else(|| FlowError::validation("A flow needs at least one node"))?;
        let flow = Self {
            nodes,
            selected_node_id: first,
        };
        flow.validate()?;
        Ok(flow)
    }

    /// Check the structural invariants: at least one node, unique node ids
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(FlowError::validation("A flow needs at least one node"));
        }

        let mut seen = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(&node.id) {
                return Err(FlowError::validation(format!(
                    "Duplicate node id '{}'",
                    node.id
                )));
            }
        }
        Ok(())
    }

    /// Point the selection at the first node if it references nothing
    pub fn repair_selection(&mut self) -> bool {
        if self.contains(&self.selected_node_id) {
            return false;
        }
        match self.nodes.first() {
            Some(first) => {
                self.selected_node_id = first.id.clone();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn position(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| &n.id == id)
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self::seed()
    }
}
