//! # Source Layer
//!
//! A [`CatalogSource`] supplies the three flat collections the catalog is built from.
//! Sources are read exactly once, by [`crate::api::CatalogApi::open`]; nothing is ever
//! written back.
//!
//! ## Implementations
//!
//! - [`builtin::BuiltinSource`]: the fixture compiled into the binary
//! - [`dir::DirSource`]: a directory holding the three JSON files
//! - [`memory::MemorySource`]: an in-memory [`Dataset`], for tests and embedders
//!
//! ## Directory Format
//!
//! ```text
//! data/
//! ├── users.json        # [{ "id": 1, "name": "Roma", "sex": "m" }, ...]
//! ├── categories.json   # [{ "id": 1, "title": "Fruits", "icon": "🍎", "ownerId": 1 }, ...]
//! └── products.json     # [{ "id": 1, "name": "Banana", "categoryId": 1 }, ...]
//! ```

use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, User};
use serde::de::DeserializeOwned;

pub mod builtin;
pub mod dir;
pub mod memory;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// The raw, unjoined collections as read from a source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Abstract interface for catalog data.
pub trait CatalogSource {
    /// Read all three collections.
    fn load(&self) -> Result<Dataset>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn load(&self) -> Result<Dataset> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Decodes one collection, tagging errors with the file it came from.
pub(crate) fn parse_records<T: DeserializeOwned>(file: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|source| CatalogError::Serialization {
        file: file.to_string(),
        source,
    })
}

pub(crate) fn parse_dataset(users: &str, categories: &str, products: &str) -> Result<Dataset> {
    Ok(Dataset {
        users: parse_records(USERS_FILE, users)?,
        categories: parse_records(CATEGORIES_FILE, categories)?,
        products: parse_records(PRODUCTS_FILE, products)?,
    })
}
