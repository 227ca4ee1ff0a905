//! 持久化后端集成测试

use chatflow::config::StaticConfig;
use chatflow::errors::FlowError;
use chatflow::flow::{Flow, FlowStore, NodeKind, StoreOptions};
use chatflow::repository::{FlowRepository, JsonFileRepository, MemoryRepository, RepositoryFactory};
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_seed() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("flow.json"));
    let flow = repo.load().unwrap();
    let seed = Flow::seed();
    assert_eq!(flow.nodes.len(), 1);
    assert_eq!(flow.selected_node_id, seed.selected_node_id);
    assert_eq!(flow.nodes[0].message, seed.nodes[0].message);
    // loading must not create the file
    assert!(!repo.path().exists());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("nested").join("flow.json"));

    let mut store = FlowStore::default();
    let id = store.create_node(NodeKind::Carousel);
    repo.save(store.flow()).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded.nodes.len(), 2);
    assert_eq!(loaded.selected_node_id, id);
    assert_eq!(&loaded, store.flow());
}

#[test]
fn test_corrupt_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flow.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = JsonFileRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, FlowError::Serialization(_)));
}

#[test]
fn test_empty_flow_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flow.json");
    std::fs::write(&path, r#"{"nodes": [], "selected_node_id": "1"}"#).unwrap();

    let err = JsonFileRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, FlowError::Validation(_)));
}

#[test]
fn test_memory_repository_keeps_last_save() {
    let repo = MemoryRepository::new();
    assert!(repo.saved().is_none());

    let mut store = FlowStore::new(repo.load().unwrap(), StoreOptions::default());
    store.create_node(NodeKind::Text);
    repo.save(store.flow()).unwrap();

    assert_eq!(repo.saved().unwrap().nodes.len(), 2);
    assert_eq!(repo.load().unwrap().nodes.len(), 2);
}

#[test]
fn test_factory_picks_backend() {
    let mut config = StaticConfig::default();
    config.storage.backend = "memory".to_string();
    assert!(RepositoryFactory::create(&config).unwrap().describe().contains("memory"));

    config.storage.backend = "sqlite".to_string();
    assert!(matches!(
        RepositoryFactory::create(&config),
        Err(FlowError::Config(_))
    ));
}
