//! End-user preview of a node

use crate::flow::{FlowNode, MediaKind, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPreview {
    pub kind: MediaKind,
    pub url: String,
    pub caption: Option<String>,
}

/// What a recipient would see for one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub kind: NodeKind,
    /// Message body; omitted when a media attachment stands in for it
    pub body: Option<String>,
    pub media: Option<MediaPreview>,
    /// Quick-reply buttons in display order
    pub buttons: Vec<String>,
    pub delay_seconds: u32,
    pub last_modified: String,
}

impl Preview {
    pub fn of(node: &FlowNode) -> Self {
        let media = node
            .media
            .as_ref()
            .filter(|m| node.kind.supports_media() && !m.url.is_empty())
            .map(|m| MediaPreview {
                kind: m.kind,
                url: m.url.clone(),
                caption: (!m.caption.is_empty()).then(|| m.caption.clone()),
            });

        let body = media.is_none().then(|| node.message.clone());

        Self {
            kind: node.kind,
            body,
            media,
            buttons: node.responses.iter().map(|r| r.text.clone()).collect(),
            delay_seconds: node.delay_seconds,
            last_modified: node
                .metadata
                .modified_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        }
    }

    /// `[image] https://...` style line for the media attachment
    pub fn media_line(&self) -> Option<String> {
        self.media
            .as_ref()
            .map(|m| format!("[{}] {}", m.kind, m.url))
    }
}
