//! Editing the selected node's content
//!
//! Every operation issues exactly one `update_node` on the selected node,
//! touching a single field. List items are addressed by their `ItemId`.

use crate::errors::{FlowError, Result};
use crate::flow::{
    ActionKind, FlowNode, FlowStore, ItemId, Media, NodeKind, NodePatch, Response,
    ResponseAction, ResponseKind, Tag,
};
use crate::services::media::MediaRef;

/// Upper bound the editor allows for the send delay
pub const MAX_DELAY_SECONDS: u32 = 300;
/// Text of a reply added from the editor
pub const NEW_REPLY_TEXT: &str = "New Reply";

pub struct NodeEditor<'a> {
    store: &'a mut FlowStore,
    max_delay: u32,
}

impl<'a> NodeEditor<'a> {
    pub fn new(store: &'a mut FlowStore) -> Self {
        Self {
            store,
            max_delay: MAX_DELAY_SECONDS,
        }
    }

    pub fn with_max_delay(mut self, max_delay: u32) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn node(&self) -> Option<&FlowNode> {
        self.store.selected()
    }

    fn apply(&mut self, patch: NodePatch) -> bool {
        let Some(id) = self.store.selected().map(|n| n.id.clone()) else {
            return false;
        };
        self.store.update_node(&id, patch)
    }

    /// Rewrite one response through `f`. False if the node or item is missing.
    fn edit_response<F>(&mut self, id: &ItemId, f: F) -> bool
    where
        F: FnOnce(&mut Response),
    {
        let Some(node) = self.node() else {
            return false;
        };
        let mut responses = node.responses.clone();
        let Some(response) = responses.iter_mut().find(|r| &r.id == id) else {
            return false;
        };
        f(response);
        self.apply(NodePatch::new().responses(responses))
    }

    fn edit_media<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Media),
    {
        let Some(node) = self.node() else {
            return false;
        };
        let Some(media_kind) = node.kind.media_kind() else {
            return false;
        };
        let mut media = node.media.clone().unwrap_or_else(|| Media::new(media_kind));
        media.kind = media_kind;
        f(&mut media);
        self.apply(NodePatch::new().media(Some(media)))
    }

    /// Change the node kind. Existing media follows the new kind, or is
    /// dropped when the new kind carries none.
    pub fn set_kind(&mut self, kind: NodeKind) -> bool {
        let Some(node) = self.node() else {
            return false;
        };
        let mut patch = NodePatch::new().kind(kind);
        if let Some(media) = &node.media {
            let media = kind.media_kind().map(|media_kind| Media {
                kind: media_kind,
                ..media.clone()
            });
            patch = patch.media(media);
        }
        self.apply(patch)
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> bool {
        self.apply(NodePatch::new().message(message))
    }

    /// Only image, video and audio nodes carry media
    pub fn set_media_url(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        self.edit_media(|media| media.url = url)
    }

    pub fn set_media_caption(&mut self, caption: impl Into<String>) -> bool {
        let caption = caption.into();
        self.edit_media(|media| media.caption = caption)
    }

    /// Attach an uploaded asset, keeping any existing caption
    pub fn attach_media(&mut self, media_ref: &MediaRef) -> bool {
        let Some(node) = self.node() else {
            return false;
        };
        if node.kind.media_kind() != Some(media_ref.kind) {
            return false;
        }
        self.set_media_url(media_ref.url.clone())
    }

    pub fn add_response(&mut self) -> Option<ItemId> {
        let node = self.node()?;
        let response = Response::new(NEW_REPLY_TEXT, ResponseKind::Reply);
        let id = response.id.clone();
        let mut responses = node.responses.clone();
        responses.push(response);
        self.apply(NodePatch::new().responses(responses)).then_some(id)
    }

    pub fn set_response_text(&mut self, id: &ItemId, text: impl Into<String>) -> bool {
        let text = text.into();
        self.edit_response(id, |r| r.text = text)
    }

    /// Change a response's kind. Url responses always carry a link action.
    pub fn set_response_kind(&mut self, id: &ItemId, kind: ResponseKind) -> bool {
        self.edit_response(id, |r| {
            r.kind = kind;
            let link = r
                .action
                .as_ref()
                .filter(|a| a.kind == ActionKind::Link)
                .map(|a| a.value.clone());
            if kind == ResponseKind::Url {
                r.action = Some(ResponseAction::link(link.unwrap_or_default()));
            } else if link.is_some() {
                r.action = None;
            }
        })
    }

    /// Set the destination of a url response
    pub fn set_response_url(&mut self, id: &ItemId, url: impl Into<String>) -> bool {
        let url = url.into();
        self.edit_response(id, |r| {
            r.kind = ResponseKind::Url;
            r.action = Some(ResponseAction::link(url));
        })
    }

    pub fn remove_response(&mut self, id: &ItemId) -> bool {
        let Some(node) = self.node() else {
            return false;
        };
        if node.response(id).is_none() {
            return false;
        }
        let responses: Vec<Response> = node
            .responses
            .iter()
            .filter(|r| &r.id != id)
            .cloned()
            .collect();
        self.apply(NodePatch::new().responses(responses))
    }

    /// Commit the tag input. Blank input is ignored; duplicates are allowed.
    pub fn add_tag(&mut self, input: &str) -> Option<ItemId> {
        let label = input.trim();
        if label.is_empty() {
            return None;
        }
        let node = self.node()?;
        let tag = Tag::new(label);
        let id = tag.id.clone();
        let mut tags = node.tags.clone();
        tags.push(tag);
        self.apply(NodePatch::new().tags(tags)).then_some(id)
    }

    pub fn remove_tag(&mut self, id: &ItemId) -> bool {
        let Some(node) = self.node() else {
            return false;
        };
        if !node.tags.iter().any(|t| &t.id == id) {
            return false;
        }
        let tags: Vec<Tag> = node.tags.iter().filter(|t| &t.id != id).cloned().collect();
        self.apply(NodePatch::new().tags(tags))
    }

    /// Set the send delay, clamped to the editor's range
    pub fn set_delay(&mut self, seconds: u32) -> bool {
        let seconds = seconds.min(self.max_delay);
        self.apply(NodePatch::new().delay_seconds(seconds))
    }

    /// Step the delay by `delta` seconds, saturating at both ends
    pub fn nudge_delay(&mut self, delta: i64) -> bool {
        let Some(node) = self.node() else {
            return false;
        };
        let next = (node.delay_seconds as i64 + delta).clamp(0, self.max_delay as i64);
        self.set_delay(next as u32)
    }

    /// Parse typed delay input into a value within `[0, max]`
    pub fn parse_delay(input: &str, max: u32) -> Result<u32> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| FlowError::validation(format!("'{}' is not a whole number", trimmed)))?;
        if value < 0 || value > max as i64 {
            return Err(FlowError::validation(format!(
                "Delay must be between 0 and {} seconds",
                max
            )));
        }
        Ok(value as u32)
    }
}
