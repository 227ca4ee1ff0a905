//! Quick-reply options attached to a node

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::ids::ItemId;

/// 回复类型
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
pub enum ResponseKind {
    #[default]
    Reply,
    Url,
    Phone,
    Location,
}

impl ResponseKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reply => "Reply",
            Self::Url => "URL",
            Self::Phone => "Phone",
            Self::Location => "Location",
        }
    }
}

/// 回复触发的动作类型
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Jump,
    Link,
    Tag,
    Subscribe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseAction {
    pub kind: ActionKind,
    pub value: String,
}

impl ResponseAction {
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Link,
            value: url.into(),
        }
    }

    pub fn jump(target: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Jump,
            value: target.into(),
        }
    }
}

/// One user-selectable reply option.
///
/// When `kind` is [`ResponseKind::Url`] the action is a link holding the
/// destination; the node editor keeps that true when it switches kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub id: ItemId,
    pub text: String,
    pub kind: ResponseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ResponseAction>,
}

impl Response {
    pub fn new(text: impl Into<String>, kind: ResponseKind) -> Self {
        Self {
            id: ItemId::generate(),
            text: text.into(),
            kind,
            action: None,
        }
    }

    pub fn with_action(mut self, action: ResponseAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Destination url, if this is a url response
    pub fn url(&self) -> Option<&str> {
        match (&self.kind, &self.action) {
            (ResponseKind::Url, Some(action)) if action.kind == ActionKind::Link => {
                Some(action.value.as_str())
            }
            _ => None,
        }
    }
}
