//! List nodes command

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::{CliError, open_store};
use crate::repository::FlowRepository;
use crate::services::filter_nodes;

pub fn list_nodes(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
    search: Option<&str>,
) -> Result<(), CliError> {
    let store = open_store(repository, config)?;
    let term = search.unwrap_or_default();
    let nodes = filter_nodes(store.nodes(), term);

    if nodes.is_empty() {
        println!("{} No nodes match '{}'", "ℹ".bold().blue(), term);
        return Ok(());
    }

    println!("{}", "Flow nodes:".bold().green());
    println!();
    for node in &nodes {
        let marker = if &node.id == store.selected_id() {
            "›".bold().yellow().to_string()
        } else {
            " ".to_string()
        };
        let mut info_parts = vec![
            format!("{} {}", marker, node.id.short().cyan()),
            format!("[{}]", node.kind.label()).magenta().to_string(),
            node.message.clone(),
        ];
        if !node.tags.is_empty() {
            let tags: Vec<&str> = node.tag_labels().collect();
            info_parts.push(format!("#{}", tags.join(" #")).dimmed().to_string());
        }
        println!("  {}", info_parts.join(" "));
    }
    println!();
    println!(
        "{} Showing {} of {} nodes",
        "ℹ".bold().blue(),
        nodes.len().to_string().green(),
        store.len()
    );
    Ok(())
}
