//! Commands that change the flow and save it back

use std::path::Path;

use colored::Colorize;
use tracing::info;

use crate::config::StaticConfig;
use crate::flow::{FlowStore, NodeId, NodeKind};
use crate::interfaces::cli::{CliError, open_store, resolve_node_id};
use crate::repository::FlowRepository;
use crate::services::{LocalMediaUploader, MediaUploader, NodeEditor};

fn save(repository: &dyn FlowRepository, store: &FlowStore) -> Result<(), CliError> {
    repository
        .save(store.flow())
        .map_err(|e| CliError::StorageError(format!("Failed to save flow: {}", e)))
}

/// Run `edit` with `id` selected, then restore the previous selection
fn with_selected<T>(
    store: &mut FlowStore,
    id: &NodeId,
    edit: impl FnOnce(&mut FlowStore) -> T,
) -> T {
    let previous = store.selected_id().clone();
    store.select_node(id);
    let result = edit(store);
    store.select_node(&previous);
    result
}

pub fn add_node(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
    kind: NodeKind,
) -> Result<(), CliError> {
    let mut store = open_store(repository, config)?;
    let id = store.create_node(kind);
    save(repository, &store)?;

    info!("CLI created node {}", id);
    println!(
        "{} Added {} node: {}",
        "✓".bold().green(),
        kind.label().magenta(),
        id.as_str().cyan()
    );
    Ok(())
}

pub fn duplicate_node(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
    id: &str,
) -> Result<(), CliError> {
    let mut store = open_store(repository, config)?;
    let id = resolve_node_id(&store, id)?;
    let Some(copy) = store.duplicate_node(&id) else {
        return Err(CliError::CommandError(format!("Node '{}' not found", id)));
    };
    save(repository, &store)?;

    println!(
        "{} Duplicated {} as {}",
        "✓".bold().green(),
        id.short().cyan(),
        copy.as_str().cyan()
    );
    Ok(())
}

pub fn delete_node(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
    id: &str,
) -> Result<(), CliError> {
    let mut store = open_store(repository, config)?;
    let id = resolve_node_id(&store, id)?;
    if !store.delete_node(&id) {
        return Err(CliError::CommandError(
            "The last remaining node cannot be deleted".to_string(),
        ));
    }
    save(repository, &store)?;

    println!("{} Deleted node {}", "✓".bold().green(), id.short().cyan());
    Ok(())
}

pub fn tag_node(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
    id: &str,
    label: &str,
) -> Result<(), CliError> {
    let mut store = open_store(repository, config)?;
    let id = resolve_node_id(&store, id)?;
    let added = with_selected(&mut store, &id, |store| {
        NodeEditor::new(store).add_tag(label)
    });
    if added.is_none() {
        return Err(CliError::ParseError("Tag label must not be blank".to_string()));
    }
    save(repository, &store)?;

    println!(
        "{} Tagged {} with {}",
        "✓".bold().green(),
        id.short().cyan(),
        format!("#{}", label.trim()).yellow()
    );
    Ok(())
}

pub fn attach_media(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
    id: &str,
    file: &Path,
) -> Result<(), CliError> {
    let mut store = open_store(repository, config)?;
    let id = resolve_node_id(&store, id)?;
    let media = LocalMediaUploader::new(config.media.max_upload_bytes).upload(file)?;

    let attached = with_selected(&mut store, &id, |store| {
        NodeEditor::new(store).attach_media(&media)
    });
    if !attached {
        return Err(CliError::CommandError(format!(
            "Node '{}' does not accept {} media",
            id.short(),
            media.kind
        )));
    }
    save(repository, &store)?;

    println!(
        "{} Attached {} to {}",
        "✓".bold().green(),
        media.url.blue().underline(),
        id.short().cyan()
    );
    Ok(())
}
