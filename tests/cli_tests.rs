//! CLI 命令集成测试（内存仓库）

use chatflow::cli::{Cli, Commands};
use chatflow::config::StaticConfig;
use chatflow::flow::{FlowStore, MediaKind, NodeKind};
use chatflow::interfaces::cli::{CliError, run_cli_command};
use chatflow::repository::{FlowRepository, MemoryRepository};
use clap::Parser;

fn run(repo: &MemoryRepository, args: &[&str]) -> Result<(), CliError> {
    let mut argv = vec!["chatflow"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    run_cli_command(cli.command.unwrap(), &StaticConfig::default(), repo)
}

#[test]
fn test_add_then_list() {
    let repo = MemoryRepository::new();
    run(&repo, &["add", "--kind", "video"]).unwrap();

    let flow = repo.saved().unwrap();
    assert_eq!(flow.nodes.len(), 2);
    assert_eq!(flow.nodes[1].kind, NodeKind::Video);

    run(&repo, &["list", "--search", "welcome"]).unwrap();
}

#[test]
fn test_tag_keeps_selection() {
    let repo = MemoryRepository::new();
    run(&repo, &["add"]).unwrap();
    let selected = repo.saved().unwrap().selected_node_id;

    run(&repo, &["tag", "1", "vip"]).unwrap();

    let flow = repo.saved().unwrap();
    assert_eq!(flow.selected_node_id, selected);
    let welcome = flow.node(&"1".into()).unwrap();
    assert_eq!(welcome.tag_labels().collect::<Vec<_>>(), vec!["welcome", "vip"]);
}

#[test]
fn test_delete_last_node_fails() {
    let repo = MemoryRepository::new();
    let err = run(&repo, &["delete", "1"]).unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));
    assert!(repo.saved().is_none());
}

#[test]
fn test_unknown_id_is_command_error() {
    let repo = MemoryRepository::new();
    assert!(matches!(
        run(&repo, &["show", "nope"]),
        Err(CliError::CommandError(_))
    ));
}

#[test]
fn test_duplicate_by_prefix() {
    let mut store = FlowStore::default();
    let id = store.create_node(NodeKind::Audio);
    let repo = MemoryRepository::with_flow(store.into_flow());

    run(&repo, &["duplicate", id.short()]).unwrap();
    let flow = repo.saved().unwrap();
    assert_eq!(flow.nodes.len(), 3);
    assert_eq!(flow.nodes[2].kind, NodeKind::Audio);
}

#[test]
fn test_attach_uploads_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("greeting.png");
    std::fs::write(&file, b"\x89PNG fake").unwrap();

    let mut store = FlowStore::default();
    let id = store.create_node(NodeKind::Image);
    let repo = MemoryRepository::with_flow(store.into_flow());

    run(&repo, &["attach", id.as_str(), file.to_str().unwrap()]).unwrap();
    let flow = repo.load().unwrap();
    let media = flow.node(&id).unwrap().media.clone().unwrap();
    assert_eq!(media.kind, MediaKind::Image);
    assert!(media.url.starts_with("file://"));
}

#[test]
fn test_attach_to_text_node_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, b"video").unwrap();

    let repo = MemoryRepository::new();
    let err = run(&repo, &["attach", "1", file.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));
}

#[test]
fn test_stats_runs() {
    let repo = MemoryRepository::new();
    run(&repo, &["stats", "1"]).unwrap();
    assert!(matches!(run(&repo, &["stats", ""]), Err(CliError::ParseError(_))));
}

#[test]
fn test_bad_kind_rejected_by_parser() {
    assert!(Cli::try_parse_from(["chatflow", "add", "--kind", "hologram"]).is_err());
    assert!(matches!(
        Cli::try_parse_from(["chatflow", "add", "-k", "IMAGE"]).unwrap().command,
        Some(Commands::Add { kind: NodeKind::Image })
    ));
}
