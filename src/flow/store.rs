//! Flow store: the only mutator of a flow
//!
//! Every operation builds the next node collection before swapping it in, so
//! a half-applied change is never observable. Failed lookups are silent and
//! reported through the return value.

use chrono::Utc;
use tracing::debug;

use super::document::Flow;
use super::ids::NodeId;
use super::node::{Analytics, FlowNode, NodeKind};
use super::patch::NodePatch;

/// Behaviour switches for the store, normally taken from `[editor]` config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Whether a created node becomes the selection
    pub select_on_create: bool,
    /// Whether a duplicate starts with zeroed analytics counters
    pub reset_analytics_on_duplicate: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            select_on_create: true,
            reset_analytics_on_duplicate: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlowStore {
    flow: Flow,
    options: StoreOptions,
}

impl FlowStore {
    /// Wrap a flow. A dangling selection is pointed at the first node.
    pub fn new(mut flow: Flow, options: StoreOptions) -> Self {
        if flow.repair_selection() {
            debug!("Selection repaired to node {}", flow.selected_node_id);
        }
        Self { flow, options }
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn into_flow(self) -> Flow {
        self.flow
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.flow.nodes
    }

    pub fn len(&self) -> usize {
        self.flow.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&FlowNode> {
        self.flow.node(id)
    }

    pub fn selected_id(&self) -> &NodeId {
        &self.flow.selected_node_id
    }

    pub fn selected(&self) -> Option<&FlowNode> {
        self.flow.node(&self.flow.selected_node_id)
    }

    /// Append a fresh node of `kind` and return its id
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let node = FlowNode::new(kind);
        let id = node.id.clone();

        let mut nodes = self.flow.nodes.clone();
        nodes.push(node);
        self.flow.nodes = nodes;

        if self.options.select_on_create {
            self.flow.selected_node_id = id.clone();
        }
        debug!("Created {} node {}", kind, id);
        id
    }

    /// Remove a node. Refused when it is the last one or the id is unknown.
    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        if self.flow.nodes.len() <= 1 {
            debug!("Refusing to delete the last node {}", id);
            return false;
        }
        if !self.flow.contains(id) {
            return false;
        }

        let nodes: Vec<FlowNode> = self
            .flow
            .nodes
            .iter()
            .filter(|n| &n.id != id)
            .cloned()
            .collect();
        let was_selected = &self.flow.selected_node_id == id;
        self.flow.nodes = nodes;

        if was_selected {
            // nodes is non-empty: at least two existed before the removal
            self.flow.selected_node_id = self.flow.nodes[0].id.clone();
        }
        debug!("Deleted node {}", id);
        true
    }

    /// Append a copy of a node and return the copy's id
    pub fn duplicate_node(&mut self, id: &NodeId) -> Option<NodeId> {
        let mut copy = self.flow.node(id)?.duplicate();
        if self.options.reset_analytics_on_duplicate {
            copy.metadata.analytics = Analytics::default();
        }
        let copy_id = copy.id.clone();

        let mut nodes = self.flow.nodes.clone();
        nodes.push(copy);
        self.flow.nodes = nodes;

        debug!("Duplicated node {} as {}", id, copy_id);
        Some(copy_id)
    }

    /// Replace the fields named by `patch` on one node.
    ///
    /// Returns true when the node exists and something actually changed;
    /// `modified_at` is refreshed in that case.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> bool {
        let Some(position) = self.flow.position(id) else {
            return false;
        };
        let Some(mut next) = patch.applied_to(&self.flow.nodes[position]) else {
            return false;
        };
        next.metadata.modified_at = Utc::now();

        let nodes: Vec<FlowNode> = self
            .flow
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| if i == position { next.clone() } else { n.clone() })
            .collect();
        self.flow.nodes = nodes;
        true
    }

    /// Move the selection. Unknown ids are ignored.
    pub fn select_node(&mut self, id: &NodeId) -> bool {
        if !self.flow.contains(id) {
            return false;
        }
        self.flow.selected_node_id = id.clone();
        true
    }
}

impl Default for FlowStore {
    fn default() -> Self {
        Self::new(Flow::seed(), StoreOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_invariants(store: &FlowStore) {
        assert!(!store.is_empty());
        let ids: HashSet<_> = store.nodes().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), store.len());
        assert!(store.selected().is_some());
    }

    #[test]
    fn test_create_does_not_touch_existing_nodes() {
        let mut store = FlowStore::default();
        let before = store.nodes().to_vec();

        store.create_node(NodeKind::Text);

        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(&store.nodes()[..before.len()], &before[..]);
        assert_invariants(&store);
    }

    #[test]
    fn test_create_selection_follows_options() {
        let mut store = FlowStore::default();
        let id = store.create_node(NodeKind::Video);
        assert_eq!(store.selected_id(), &id);

        let mut store = FlowStore::new(
            Flow::seed(),
            StoreOptions {
                select_on_create: false,
                ..StoreOptions::default()
            },
        );
        store.create_node(NodeKind::Video);
        assert_eq!(store.selected_id(), &NodeId::from("1"));
    }

    #[test]
    fn test_delete_last_node_is_refused() {
        let mut store = FlowStore::default();
        let before = store.flow().clone();
        assert!(!store.delete_node(&NodeId::from("1")));
        assert_eq!(store.flow(), &before);
    }

    #[test]
    fn test_delete_selected_moves_to_first() {
        let mut store = FlowStore::default();
        let second = store.create_node(NodeKind::Text);
        let third = store.create_node(NodeKind::Text);
        store.select_node(&NodeId::from("1"));

        assert!(store.delete_node(&NodeId::from("1")));
        assert_eq!(store.len(), 2);
        assert_eq!(store.selected_id(), &second);
        assert!(store.node(&third).is_some());
        assert_invariants(&store);
    }

    #[test]
    fn test_delete_unselected_keeps_selection() {
        let mut store = FlowStore::default();
        let second = store.create_node(NodeKind::Text);
        let third = store.create_node(NodeKind::Text);
        assert_eq!(store.selected_id(), &third);

        assert!(store.delete_node(&second));
        assert_eq!(store.selected_id(), &third);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut store = FlowStore::default();
        store.create_node(NodeKind::Text);
        assert!(!store.delete_node(&NodeId::from("nope")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_resets_analytics_by_default() {
        let mut flow = Flow::seed();
        flow.nodes[0].metadata.analytics = Analytics {
            sent: 10,
            clicked: 4,
            converted: 1,
        };
        let mut store = FlowStore::new(flow.clone(), StoreOptions::default());
        let copy = store.duplicate_node(&NodeId::from("1")).unwrap();
        assert_eq!(store.node(&copy).unwrap().metadata.analytics, Analytics::default());

        let mut store = FlowStore::new(
            flow,
            StoreOptions {
                reset_analytics_on_duplicate: false,
                ..StoreOptions::default()
            },
        );
        let copy = store.duplicate_node(&NodeId::from("1")).unwrap();
        assert_eq!(store.node(&copy).unwrap().metadata.analytics.sent, 10);
    }

    #[test]
    fn test_duplicate_unknown_is_noop() {
        let mut store = FlowStore::default();
        assert!(store.duplicate_node(&NodeId::from("404")).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_refreshes_modified_at() {
        let mut store = FlowStore::default();
        let id = NodeId::from("1");
        let before = store.node(&id).unwrap().metadata.clone();

        assert!(store.update_node(&id, NodePatch::new().message("Hello")));
        let node = store.node(&id).unwrap();
        assert_eq!(node.message, "Hello");
        assert_eq!(node.metadata.created_at, before.created_at);
        assert!(node.metadata.modified_at >= before.modified_at);
    }

    #[test]
    fn test_update_unknown_or_noop_patch() {
        let mut store = FlowStore::default();
        assert!(!store.update_node(&NodeId::from("x"), NodePatch::new().message("a")));
        assert!(!store.update_node(&NodeId::from("1"), NodePatch::new()));
    }

    #[test]
    fn test_select_unknown_is_ignored() {
        let mut store = FlowStore::default();
        assert!(!store.select_node(&NodeId::from("ghost")));
        assert_eq!(store.selected_id(), &NodeId::from("1"));
    }
}
