use super::{parse_dataset, CatalogSource, Dataset};
use crate::error::Result;

const USERS: &str = include_str!("../../../data/users.json");
const CATEGORIES: &str = include_str!("../../../data/categories.json");
const PRODUCTS: &str = include_str!("../../../data/products.json");

/// The demo fixture shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load(&self) -> Result<Dataset> {
        parse_dataset(USERS, CATEGORIES, PRODUCTS)
    }

    fn describe(&self) -> String {
        "built-in fixture".to_string()
    }
}
