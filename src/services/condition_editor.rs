//! Editing the selected node's condition list

use crate::flow::{
    Condition, ConditionOperator, ConditionSubject, FlowNode, FlowStore, ItemId, NodePatch,
};

/// Shown in place of the list when a node has no conditions
pub const NO_CONDITIONS_MESSAGE: &str = "No conditions set. This message will be sent to everyone.";

/// Empty-state text for `node`, or `None` when it has conditions
pub fn empty_state(node: &FlowNode) -> Option<&'static str> {
    node.conditions.is_empty().then_some(NO_CONDITIONS_MESSAGE)
}

pub struct ConditionEditor<'a> {
    store: &'a mut FlowStore,
}

impl<'a> ConditionEditor<'a> {
    pub fn new(store: &'a mut FlowStore) -> Self {
        Self { store }
    }

    pub fn node(&self) -> Option<&FlowNode> {
        self.store.selected()
    }

    fn apply(&mut self, conditions: Vec<Condition>) -> bool {
        let Some(id) = self.store.selected().map(|n| n.id.clone()) else {
            return false;
        };
        self.store
            .update_node(&id, NodePatch::new().conditions(conditions))
    }

    fn edit<F>(&mut self, id: &ItemId, f: F) -> bool
    where
        F: FnOnce(&mut Condition),
    {
        let Some(node) = self.node() else {
            return false;
        };
        let mut conditions = node.conditions.clone();
        let Some(condition) = conditions.iter_mut().find(|c| &c.id == id) else {
            return false;
        };
        f(condition);
        self.apply(conditions)
    }

    /// Append `{subject: tag, operator: equals, value: ""}`
    pub fn add_condition(&mut self) -> Option<ItemId> {
        self.push(Condition::default())
    }

    /// Append a fully specified condition
    pub fn push(&mut self, condition: Condition) -> Option<ItemId> {
        let node = self.node()?;
        let id = condition.id.clone();
        let mut conditions = node.conditions.clone();
        conditions.push(condition);
        self.apply(conditions).then_some(id)
    }

    pub fn set_subject(&mut self, id: &ItemId, subject: ConditionSubject) -> bool {
        self.edit(id, |c| c.subject = subject)
    }

    pub fn set_operator(&mut self, id: &ItemId, operator: ConditionOperator) -> bool {
        self.edit(id, |c| c.operator = operator)
    }

    pub fn set_value(&mut self, id: &ItemId, value: impl Into<String>) -> bool {
        let value = value.into();
        self.edit(id, |c| c.value = value)
    }

    pub fn remove_condition(&mut self, id: &ItemId) -> bool {
        let Some(node) = self.node() else {
            return false;
        };
        if node.condition(id).is_none() {
            return false;
        }
        let conditions: Vec<Condition> = node
            .conditions
            .iter()
            .filter(|c| &c.id != id)
            .cloned()
            .collect();
        self.apply(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_default_condition() {
        let mut store = FlowStore::default();
        let mut editor = ConditionEditor::new(&mut store);
        let id = editor.add_condition().unwrap();

        let condition = editor.node().unwrap().condition(&id).unwrap().clone();
        assert_eq!(condition.subject, ConditionSubject::Tag);
        assert_eq!(condition.operator, ConditionOperator::Equals);
        assert_eq!(condition.value, "");
    }

    #[test]
    fn test_empty_state_disappears() {
        let mut store = FlowStore::default();
        assert_eq!(
            empty_state(store.selected().unwrap()),
            Some(NO_CONDITIONS_MESSAGE)
        );

        let mut editor = ConditionEditor::new(&mut store);
        let id = editor.add_condition().unwrap();
        assert!(editor.set_value(&id, "vip"));
        assert!(empty_state(store.selected().unwrap()).is_none());
    }

    #[test]
    fn test_edit_and_remove_by_id() {
        let mut store = FlowStore::default();
        let mut editor = ConditionEditor::new(&mut store);
        let first = editor.add_condition().unwrap();
        let second = editor.add_condition().unwrap();

        assert!(editor.set_subject(&second, ConditionSubject::Timing));
        assert!(editor.set_operator(&second, ConditionOperator::GreaterThan));
        assert!(editor.remove_condition(&first));

        let node = editor.node().unwrap();
        assert_eq!(node.conditions.len(), 1);
        assert_eq!(node.conditions[0].subject, ConditionSubject::Timing);
        assert_eq!(node.conditions[0].operator, ConditionOperator::GreaterThan);
        assert!(!editor.set_value(&first, "stale"));
    }
}
