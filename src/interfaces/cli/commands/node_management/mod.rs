//! Node commands

mod list;
mod mutate;
mod show;

pub use list::list_nodes;
pub use mutate::{add_node, attach_media, delete_node, duplicate_node, tag_node};
pub use show::{node_stats, show_node};
