//! Flow persistence
//!
//! The store never touches storage itself; the interfaces load a [`Flow`]
//! through a [`FlowRepository`], hand it to the store, and save it back on
//! request.

use tracing::error;

use crate::config::StaticConfig;
use crate::errors::{FlowError, Result};
use crate::flow::Flow;

pub mod backends;

pub use backends::json_file::JsonFileRepository;
pub use backends::memory::MemoryRepository;

pub trait FlowRepository {
    /// Load the persisted flow. Backends return the seed flow when nothing
    /// has been saved yet.
    fn load(&self) -> Result<Flow>;

    fn save(&self, flow: &Flow) -> Result<()>;

    /// Human-readable location, shown in status lines
    fn describe(&self) -> String;
}

pub struct RepositoryFactory;

impl RepositoryFactory {
    pub fn create(config: &StaticConfig) -> Result<Box<dyn FlowRepository>> {
        let backend = config.storage.backend.as_str();
        match backend {
            "file" => Ok(Box::new(JsonFileRepository::new(&config.storage.flow_file))),
            "memory" => Ok(Box::new(MemoryRepository::new())),
            _ => {
                error!("Unknown repository backend: {}", backend);
                Err(FlowError::config(format!(
                    "Unknown repository backend: {}. Supported: file, memory",
                    backend
                )))
            }
        }
    }
}
