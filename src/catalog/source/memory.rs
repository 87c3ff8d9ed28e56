use super::{CatalogSource, Dataset};
use crate::error::Result;

/// Serves a dataset held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    dataset: Dataset,
}

impl MemorySource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl CatalogSource for MemorySource {
    fn load(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }

    fn describe(&self) -> String {
        "in-memory dataset".to_string()
    }
}
