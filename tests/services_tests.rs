//! 服务层集成测试
//!
//! 节点编辑、条件编辑、过滤、分析和预览

use chatflow::flow::{
    Analytics, ConditionOperator, ConditionSubject, FlowStore, NodeId, NodeKind, ResponseKind,
};
use chatflow::services::{
    AnalyticsSummary, ConditionEditor, MediaRef, NO_CONDITIONS_MESSAGE, NodeEditor, Preview,
    empty_state, filter_nodes, format_rate, matching_ids,
};

#[cfg(test)]
mod node_editor_tests {
    use super::*;

    #[test]
    fn test_edit_message_of_selected() {
        let mut store = FlowStore::default();
        assert!(NodeEditor::new(&mut store).set_message("Hello there"));
        assert_eq!(store.selected().unwrap().message, "Hello there");
    }

    #[test]
    fn test_add_and_remove_tag() {
        let mut store = FlowStore::default();
        let mut editor = NodeEditor::new(&mut store);
        let id = editor.add_tag("  vip ").unwrap();
        // duplicates are allowed
        editor.add_tag("vip").unwrap();
        assert!(editor.add_tag("   ").is_none());

        let labels: Vec<_> = store.selected().unwrap().tag_labels().collect();
        assert_eq!(labels, vec!["welcome", "vip", "vip"]);

        assert!(NodeEditor::new(&mut store).remove_tag(&id));
        assert_eq!(store.selected().unwrap().tags.len(), 2);
    }

    #[test]
    fn test_response_kind_url_gets_link_action() {
        let mut store = FlowStore::default();
        let mut editor = NodeEditor::new(&mut store);
        let id = editor.add_response().unwrap();
        assert!(editor.set_response_kind(&id, ResponseKind::Url));
        assert!(editor.set_response_url(&id, "https://shop.example.com"));

        let node = store.selected().unwrap();
        let response = node.response(&id).unwrap();
        assert_eq!(response.kind, ResponseKind::Url);
        assert_eq!(response.url(), Some("https://shop.example.com"));
    }

    #[test]
    fn test_remove_response_by_id() {
        let mut store = FlowStore::default();
        let first = store.selected().unwrap().responses[0].id.clone();
        assert!(NodeEditor::new(&mut store).remove_response(&first));
        let node = store.selected().unwrap();
        assert_eq!(node.responses.len(), 1);
        assert_eq!(node.responses[0].text, "Learn More");
    }

    #[test]
    fn test_delay_is_clamped() {
        let mut store = FlowStore::default();
        let mut editor = NodeEditor::new(&mut store).with_max_delay(60);
        editor.set_delay(500);
        assert_eq!(editor.node().unwrap().delay_seconds, 60);
        editor.nudge_delay(-100);
        assert_eq!(editor.node().unwrap().delay_seconds, 0);
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(NodeEditor::parse_delay(" 45 ", 300).unwrap(), 45);
        assert!(NodeEditor::parse_delay("abc", 300).is_err());
        assert!(NodeEditor::parse_delay("-1", 300).is_err());
        assert!(NodeEditor::parse_delay("301", 300).is_err());
    }

    #[test]
    fn test_media_only_on_media_kinds() {
        let mut store = FlowStore::default();
        assert!(!NodeEditor::new(&mut store).set_media_url("https://x/y.png"));

        store.create_node(NodeKind::Image);
        let mut editor = NodeEditor::new(&mut store);
        assert!(editor.set_media_url("https://cdn.example.com/a.png"));
        assert!(editor.set_media_caption("A cat"));

        let media = store.selected().unwrap().media.clone().unwrap();
        assert_eq!(media.url, "https://cdn.example.com/a.png");
        assert_eq!(media.caption, "A cat");
    }

    #[test]
    fn test_attach_media_rejects_kind_mismatch() {
        let mut store = FlowStore::default();
        store.create_node(NodeKind::Audio);
        let video = MediaRef {
            url: "file:///tmp/clip.mp4".to_string(),
            kind: chatflow::flow::MediaKind::Video,
            size_bytes: 10,
        };
        assert!(!NodeEditor::new(&mut store).attach_media(&video));
        assert!(store.selected().unwrap().media.is_none());
    }
}

#[cfg(test)]
mod condition_editor_tests {
    use super::*;

    #[test]
    fn test_adding_condition_hides_empty_state() {
        let mut store = FlowStore::default();
        assert_eq!(
            empty_state(store.selected().unwrap()),
            Some(NO_CONDITIONS_MESSAGE)
        );

        let mut editor = ConditionEditor::new(&mut store);
        let id = editor.add_condition().unwrap();
        assert!(editor.set_subject(&id, ConditionSubject::Tag));
        assert!(editor.set_operator(&id, ConditionOperator::Equals));
        assert!(editor.set_value(&id, "vip"));

        let node = store.selected().unwrap();
        assert_eq!(empty_state(node), None);
        let condition = node.condition(&id).unwrap();
        assert_eq!(condition.value, "vip");
    }

    #[test]
    fn test_remove_last_condition_restores_empty_state() {
        let mut store = FlowStore::default();
        let mut editor = ConditionEditor::new(&mut store);
        let id = editor.add_condition().unwrap();
        assert!(editor.remove_condition(&id));
        assert!(!editor.remove_condition(&id));
        assert!(empty_state(store.selected().unwrap()).is_some());
    }
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    fn store() -> FlowStore {
        let mut store = FlowStore::default();
        store.create_node(NodeKind::Text);
        NodeEditor::new(&mut store).set_message("Our summer SALE starts now");
        store.create_node(NodeKind::Image);
        NodeEditor::new(&mut store).add_tag("Promo");
        store
    }

    #[test]
    fn test_empty_term_matches_all() {
        let store = store();
        assert_eq!(filter_nodes(store.nodes(), "").len(), 3);
    }

    #[test]
    fn test_case_insensitive_message_and_tag() {
        let store = store();
        assert_eq!(filter_nodes(store.nodes(), "sale").len(), 1);
        assert_eq!(filter_nodes(store.nodes(), "PROMO").len(), 1);
        assert!(filter_nodes(store.nodes(), "nothing here").is_empty());
    }

    #[test]
    fn test_welcome_finds_exactly_the_seed_node() {
        let store = store();
        let found = filter_nodes(store.nodes(), "WELCOME");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, NodeId::from("1"));
        assert_eq!(matching_ids(store.nodes(), "welcome"), vec![NodeId::from("1")]);
    }

    #[test]
    fn test_matching_ids_keep_flow_order() {
        let store = store();
        let ids = matching_ids(store.nodes(), "e");
        let positions: Vec<_> = ids
            .iter()
            .map(|id| store.flow().position(id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }
}

#[cfg(test)]
mod analytics_tests {
    use super::*;

    #[test]
    fn test_zero_sent_gives_zero_rates() {
        let summary = AnalyticsSummary::from(&Analytics {
            sent: 0,
            clicked: 5,
            converted: 0,
        });
        assert_eq!(summary.click_rate, 0.0);
        assert_eq!(summary.conversion_rate, 0.0);
        assert_eq!(summary.click_rate_text(), "0%");
    }

    #[test]
    fn test_rates() {
        let summary = AnalyticsSummary::from(&Analytics {
            sent: 200,
            clicked: 50,
            converted: 3,
        });
        assert_eq!(summary.click_rate_text(), "25.0%");
        assert_eq!(summary.conversion_rate_text(), "1.5%");
        let values: Vec<u64> = summary.chart_series().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![200, 50, 3]);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.0), "0%");
        assert_eq!(format_rate(1.0), "100.0%");
    }
}

#[cfg(test)]
mod preview_tests {
    use super::*;

    #[test]
    fn test_preview_tracks_edits() {
        let mut store = FlowStore::default();
        let mut editor = NodeEditor::new(&mut store);
        editor.set_message("Edited");
        editor.set_delay(15);

        let preview = Preview::of(store.selected().unwrap());
        assert_eq!(preview.body.as_deref(), Some("Edited"));
        assert_eq!(preview.delay_seconds, 15);
        assert_eq!(preview.buttons, vec!["Get Started", "Learn More"]);
    }
}
