//! Field-level node updates

use super::condition::Condition;
use super::node::{FlowNode, Media, NodeKind, Tag};
use super::response::Response;

/// A partial update: every `Some` field replaces the node's field wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub kind: Option<NodeKind>,
    pub message: Option<String>,
    pub responses: Option<Vec<Response>>,
    pub delay_seconds: Option<u32>,
    pub conditions: Option<Vec<Condition>>,
    pub tags: Option<Vec<Tag>>,
    pub media: Option<Option<Media>>,
}

impl NodePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn responses(mut self, responses: Vec<Response>) -> Self {
        self.responses = Some(responses);
        self
    }

    pub fn delay_seconds(mut self, delay: u32) -> Self {
        self.delay_seconds = Some(delay);
        self
    }

    pub fn conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = Some(conditions);
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn media(mut self, media: Option<Media>) -> Self {
        self.media = Some(media);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce the patched copy of `node`. Returns `None` when nothing changes.
    pub(crate) fn applied_to(&self, node: &FlowNode) -> Option<FlowNode> {
        let mut next = node.clone();
        if let Some(kind) = self.kind {
            next.kind = kind;
        }
        if let Some(message) = &self.message {
            next.message = message.clone();
        }
        if let Some(responses) = &self.responses {
            next.responses = responses.clone();
        }
        if let Some(delay) = self.delay_seconds {
            next.delay_seconds = delay;
        }
        if let Some(conditions) = &self.conditions {
            next.conditions = conditions.clone();
        }
        if let Some(tags) = &self.tags {
            next.tags = tags.clone();
        }
        if let Some(media) = &self.media {
            next.media = media.clone();
        }

        if next == *node { None } else { Some(next) }
    }
}
