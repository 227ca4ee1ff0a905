//! Flow data model and store
//!
//! - `ids`: node and item identifiers
//! - `node`, `response`, `condition`: the node record and its parts
//! - `document`: the ordered node collection plus selection
//! - `patch`: field-level updates
//! - `store`: the single mutator

mod condition;
mod document;
mod ids;
mod node;
mod patch;
mod response;
mod store;

pub use condition::{Condition, ConditionOperator, ConditionSubject};
pub use document::Flow;
pub use ids::{ItemId, NodeId};
pub use node::{
    Analytics, COPY_SUFFIX, DEFAULT_REPLY_TEXT, FlowNode, Media, MediaKind, NEW_NODE_MESSAGE,
    NodeKind, NodeMetadata, Tag,
};
pub use patch::NodePatch;
pub use response::{ActionKind, Response, ResponseAction, ResponseKind};
pub use store::{FlowStore, StoreOptions};

use strum::IntoEnumIterator;

/// Step to the next (or previous) variant of a field enum, wrapping around
pub fn cycle<T>(current: T, forward: bool) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let all: Vec<T> = T::iter().collect();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let len = all.len();
    if forward {
        all[(idx + 1) % len]
    } else {
        all[(idx + len - 1) % len]
    }
}
