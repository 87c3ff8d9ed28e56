use super::{parse_records, CatalogSource, Dataset, CATEGORIES_FILE, PRODUCTS_FILE, USERS_FILE};
use crate::error::{CatalogError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

/// Reads `users.json`, `categories.json` and `products.json` from a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        let content = fs::read_to_string(&path).map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;
        parse_records(file, &content)
    }
}

impl CatalogSource for DirSource {
    fn load(&self) -> Result<Dataset> {
        Ok(Dataset {
            users: self.read(USERS_FILE)?,
            categories: self.read(CATEGORIES_FILE)?,
            products: self.read(PRODUCTS_FILE)?,
        })
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
