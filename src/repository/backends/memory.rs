use std::cell::RefCell;

use tracing::debug;

use crate::errors::Result;
use crate::flow::Flow;
use crate::repository::FlowRepository;

/// Keeps the last saved flow in memory; nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryRepository {
    saved: RefCell<Option<Flow>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flow(flow: Flow) -> Self {
        Self {
            saved: RefCell::new(Some(flow)),
        }
    }

    pub fn saved(&self) -> Option<Flow> {
        self.saved.borrow().clone()
    }
}

impl FlowRepository for MemoryRepository {
    fn load(&self) -> Result<Flow> {
        Ok(self.saved.borrow().clone().unwrap_or_else(Flow::seed))
    }

    fn save(&self, flow: &Flow) -> Result<()> {
        flow.validate()?;
        debug!("Holding {} node(s) in memory", flow.nodes.len());
        *self.saved.borrow_mut() = Some(flow.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
