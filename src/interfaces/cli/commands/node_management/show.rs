//! Show and stats commands

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::{CliError, open_store, resolve_node_id};
use crate::repository::FlowRepository;
use crate::services::{AnalyticsSummary, Preview, empty_state};

pub fn show_node(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
    id: &str,
) -> Result<(), CliError> {
    let store = open_store(repository, config)?;
    let id = resolve_node_id(&store, id)?;
    let Some(node) = store.node(&id) else {
        return Err(CliError::CommandError(format!("Node '{}' not found", id)));
    };

    println!("{} {}", "Node".bold().green(), node.id.as_str().cyan());
    println!("  {:<10} {}", "Type:".bold(), node.kind.label());
    println!("  {:<10} {}", "Message:".bold(), node.message);
    println!("  {:<10} {}s", "Delay:".bold(), node.delay_seconds);
    if !node.tags.is_empty() {
        let tags: Vec<&str> = node.tag_labels().collect();
        println!("  {:<10} {}", "Tags:".bold(), tags.join(", "));
    }

    println!("  {}", "Responses:".bold());
    for response in &node.responses {
        match response.url() {
            Some(url) => println!(
                "    - {} ({}) -> {}",
                response.text,
                response.kind.label(),
                url.blue().underline()
            ),
            None => println!("    - {} ({})", response.text, response.kind.label()),
        }
    }

    println!("  {}", "Conditions:".bold());
    match empty_state(node) {
        Some(message) => println!("    {}", message.dimmed()),
        None => {
            for condition in &node.conditions {
                println!(
                    "    - {} {} '{}'",
                    condition.subject.label(),
                    condition.operator.label(),
                    condition.value
                );
            }
        }
    }

    let preview = Preview::of(node);
    println!("  {}", "Preview:".bold());
    if let Some(line) = preview.media_line() {
        println!("    {}", line);
    }
    if let Some(caption) = preview.media.as_ref().and_then(|m| m.caption.as_deref()) {
        println!("    {}", caption.italic());
    }
    if let Some(body) = &preview.body {
        println!("    {}", body);
    }
    if !preview.buttons.is_empty() {
        println!("    [ {} ]", preview.buttons.join(" ] [ "));
    }
    println!(
        "  {} {}",
        "Last modified:".dimmed(),
        preview.last_modified.dimmed()
    );
    Ok(())
}

pub fn node_stats(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
    id: &str,
) -> Result<(), CliError> {
    let store = open_store(repository, config)?;
    let id = resolve_node_id(&store, id)?;
    let Some(node) = store.node(&id) else {
        return Err(CliError::CommandError(format!("Node '{}' not found", id)));
    };

    let summary = AnalyticsSummary::from(&node.metadata.analytics);
    println!(
        "{} {}",
        "Analytics for".bold().green(),
        node.id.short().cyan()
    );
    for point in summary.chart_series() {
        println!("  {:<10} {}", format!("{}:", point.label), point.value);
    }
    println!(
        "  {:<10} {}",
        "CTR:",
        summary.click_rate_text().yellow()
    );
    println!(
        "  {:<10} {}",
        "CVR:",
        summary.conversion_rate_text().yellow()
    );
    Ok(())
}
