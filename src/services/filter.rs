//! Sidebar search over message text and tags

use crate::flow::{FlowNode, NodeId};

/// Whether a node matches an already lower-cased needle
fn matches_lowered(node: &FlowNode, needle: &str) -> bool {
    node.message.to_lowercase().contains(needle)
        || node
            .tag_labels()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Nodes matching `term`, in source order. An empty term matches everything.
pub fn filter_nodes<'a>(nodes: &'a [FlowNode], term: &str) -> Vec<&'a FlowNode> {
    if term.is_empty() {
        return nodes.iter().collect();
    }
    let needle = term.to_lowercase();
    nodes
        .iter()
        .filter(|node| matches_lowered(node, &needle))
        .collect()
}

/// Ids of the matching nodes, for list widgets that keep their own rows
pub fn matching_ids(nodes: &[FlowNode], term: &str) -> Vec<NodeId> {
    filter_nodes(nodes, term)
        .into_iter()
        .map(|n| n.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{FlowNode, NodeKind};

    fn sample() -> Vec<FlowNode> {
        vec![
            FlowNode::welcome(),
            FlowNode::new(NodeKind::Text)
                .with_message("Pricing details")
                .with_tags(["Sales"]),
            FlowNode::new(NodeKind::Image).with_message("Product photo"),
        ]
    }

    #[test]
    fn test_empty_term_matches_all_in_order() {
        let nodes = sample();
        let found = filter_nodes(&nodes, "");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].id, nodes[0].id);
        assert_eq!(found[2].id, nodes[2].id);
    }

    #[test]
    fn test_matches_message_case_insensitively() {
        let nodes = sample();
        let found = filter_nodes(&nodes, "PRICING");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "Pricing details");
    }

    #[test]
    fn test_matches_tags() {
        let nodes = sample();
        let ids = matching_ids(&nodes, "sal");
        assert_eq!(ids, vec![nodes[1].id.clone()]);
    }

    #[test]
    fn test_no_match() {
        let nodes = sample();
        assert!(filter_nodes(&nodes, "zzz").is_empty());
    }

    #[test]
    fn test_source_order_preserved() {
        let nodes = sample();
        // "o" hits "Welcome"/"How" and "Product photo" but not "Pricing details"
        let found = filter_nodes(&nodes, "o");
        let positions: Vec<_> = found
            .iter()
            .map(|f| nodes.iter().position(|n| n.id == f.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }
}
