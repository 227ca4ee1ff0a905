//! Flow node definition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::condition::Condition;
use super::ids::{ItemId, NodeId};
use super::response::{Response, ResponseAction, ResponseKind};

/// Message text given to freshly created nodes
pub const NEW_NODE_MESSAGE: &str = "New message";
/// Text of the single reply a fresh node starts with
pub const DEFAULT_REPLY_TEXT: &str = "Reply";
/// Suffix appended to the message of a duplicated node
pub const COPY_SUFFIX: &str = " (Copy)";

/// 消息类型
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NodeKind {
    #[default]
    Text,
    Image,
    Video,
    Audio,
    File,
    Carousel,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::File => "File",
            Self::Carousel => "Carousel",
        }
    }

    /// Kinds that carry an uploadable media attachment
    pub fn supports_media(&self) -> bool {
        matches!(self, Self::Image | Self::Video | Self::Audio)
    }

    /// Media kind matching this node kind, if any
    pub fn media_kind(&self) -> Option<MediaKind> {
        match self {
            Self::Image => Some(MediaKind::Image),
            Self::Video => Some(MediaKind::Video),
            Self::Audio => Some(MediaKind::Audio),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: String,
    pub kind: MediaKind,
}

impl Media {
    pub fn new(kind: MediaKind) -> Self {
        Self {
            url: String::new(),
            caption: String::new(),
            kind,
        }
    }
}

/// Externally maintained counters. Nothing in this crate increments them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub clicked: u64,
    #[serde(default)]
    pub converted: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub analytics: Analytics,
}

impl NodeMetadata {
    pub fn fresh() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            modified_at: now,
            analytics: Analytics::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: ItemId,
    pub label: String,
}

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            label: label.into(),
        }
    }
}

/// One step of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub message: String,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default)]
    pub delay_seconds: u32,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    pub metadata: NodeMetadata,
}

impl FlowNode {
    /// A fresh node with default content
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: NodeId::generate(),
            kind,
            message: NEW_NODE_MESSAGE.to_string(),
            responses: vec![Response::new(DEFAULT_REPLY_TEXT, ResponseKind::Reply)],
            delay_seconds: 0,
            conditions: Vec::new(),
            tags: Vec::new(),
            media: None,
            metadata: NodeMetadata::fresh(),
        }
    }

    /// The welcome node every new flow starts with
    pub fn welcome() -> Self {
        Self {
            id: NodeId::from("1"),
            kind: NodeKind::Text,
            message: "Welcome! How can I help you today?".to_string(),
            responses: vec![
                Response::new("Get Started", ResponseKind::Reply)
                    .with_action(ResponseAction::jump("2")),
                Response::new("Learn More", ResponseKind::Url)
                    .with_action(ResponseAction::link("https://example.com")),
            ],
            delay_seconds: 0,
            conditions: Vec::new(),
            tags: vec![Tag::new("welcome")],
            media: None,
            metadata: NodeMetadata::fresh(),
        }
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_tags<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = labels.into_iter().map(Tag::new).collect();
        self
    }

    /// Deep copy with a new identity and regenerated item ids
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        let mut copy = self.clone();
        copy.id = NodeId::generate();
        copy.message = format!("{}{}", self.message, COPY_SUFFIX);
        copy.metadata.created_at = now;
        copy.metadata.modified_at = now;
        for response in &mut copy.responses {
            response.id = ItemId::generate();
        }
        for condition in &mut copy.conditions {
            condition.id = ItemId::generate();
        }
        for tag in &mut copy.tags {
            tag.id = ItemId::generate();
        }
        copy
    }

    pub fn tag_labels(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.label.as_str())
    }

    pub fn response(&self, id: &ItemId) -> Option<&Response> {
        self.responses.iter().find(|r| &r.id == id)
    }

    pub fn condition(&self, id: &ItemId) -> Option<&Condition> {
        self.conditions.iter().find(|c| &c.id == id)
    }
}
