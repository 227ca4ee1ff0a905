mod config_gen;
mod node_management;

pub use config_gen::config_generate;
pub use node_management::{
    add_node, attach_media, delete_node, duplicate_node, list_nodes, node_stats, show_node,
    tag_node,
};
