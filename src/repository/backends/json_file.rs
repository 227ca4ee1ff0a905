use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::errors::{FlowError, Result};
use crate::flow::Flow;
use crate::repository::FlowRepository;

/// Pretty-printed JSON flow file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlowRepository for JsonFileRepository {
    fn load(&self) -> Result<Flow> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Flow file {} does not exist, starting from the seed flow",
                    self.path.display()
                );
                return Ok(Flow::seed());
            }
            Err(e) => {
                error!("Failed to read flow file {}: {}", self.path.display(), e);
                return Err(FlowError::file_operation(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let mut flow: Flow = serde_json::from_str(&content).map_err(|e| {
            error!("Failed to parse flow file {}: {}", self.path.display(), e);
            FlowError::serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        flow.validate()?;
        flow.repair_selection();

        info!(
            "Loaded {} node(s) from {}",
            flow.nodes.len(),
            self.path.display()
        );
        Ok(flow)
    }

    fn save(&self, flow: &Flow) -> Result<()> {
        flow.validate()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(flow)?;
        fs::write(&self.path, json).map_err(|e| {
            FlowError::file_operation(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        info!(
            "Saved {} node(s) to {}",
            flow.nodes.len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{FlowStore, NodeKind, StoreOptions};

    #[test]
    fn test_missing_file_loads_seed() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("flow.json"));
        assert_eq!(repo.load().unwrap(), Flow::seed());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/flow.json");
        let repo = JsonFileRepository::new(&path);

        let mut store = FlowStore::new(Flow::seed(), StoreOptions::default());
        store.create_node(NodeKind::Audio);
        repo.save(store.flow()).unwrap();

        assert!(path.exists());
        let loaded = repo.load().unwrap();
        assert_eq!(&loaded, store.flow());
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, FlowError::Serialization(_)));
    }
}
