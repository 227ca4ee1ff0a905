//! Views and collaborators built on top of the flow store
//!
//! - `filter`: sidebar search
//! - `node_editor` / `condition_editor`: field edits on the selected node
//! - `analytics`: derived rates and chart series
//! - `preview`: end-user rendering of a node
//! - `media`: media upload hook

pub mod analytics;
pub mod condition_editor;
pub mod filter;
pub mod media;
pub mod node_editor;
pub mod preview;

pub use analytics::{AnalyticsSummary, ChartPoint, format_rate};
pub use condition_editor::{ConditionEditor, NO_CONDITIONS_MESSAGE, empty_state};
pub use filter::{filter_nodes, matching_ids};
pub use media::{LocalMediaUploader, MediaRef, MediaUploader};
pub use node_editor::{MAX_DELAY_SECONDS, NodeEditor};
pub use preview::Preview;
