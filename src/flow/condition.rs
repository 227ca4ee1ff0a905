//! Branching predicates attached to a node

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::ids::ItemId;

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
pub enum ConditionSubject {
    #[default]
    Tag,
    CustomField,
    Timing,
}

impl ConditionSubject {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tag => "Tag",
            Self::CustomField => "Custom Field",
            Self::Timing => "Timing",
        }
    }
}

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
pub enum ConditionOperator {
    #[default]
    Equals,
    Contains,
    GreaterThan,
    LessThan,
}

impl ConditionOperator {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equals => "Equals",
            Self::Contains => "Contains",
            Self::GreaterThan => "Greater Than",
            Self::LessThan => "Less Than",
        }
    }
}

/// A predicate gating whether a node is sent. `value` is kept untyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: ItemId,
    pub subject: ConditionSubject,
    pub operator: ConditionOperator,
    pub value: String,
}

impl Condition {
    pub fn new(
        subject: ConditionSubject,
        operator: ConditionOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            subject,
            operator,
            value: value.into(),
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::new(ConditionSubject::Tag, ConditionOperator::Equals, "")
    }
}
