use crate::join::Catalog;
use crate::model::{Category, Product, Sex, User};
use crate::source::Dataset;

/// Small dataset covering every owner/category combination the tests need.
///
/// Roma owns Drinks and Electronics, Anna owns Fruits, Max owns nothing.
pub fn sample_dataset() -> Dataset {
    Dataset {
        users: vec![
            User::new(1, "Roma", Sex::Male),
            User::new(2, "Anna", Sex::Female),
            User::new(3, "Max", Sex::Male),
        ],
        categories: vec![
            Category::new(2, "Drinks", "🍺", 1),
            Category::new(3, "Fruits", "🍏", 2),
            Category::new(5, "Electronics", "💻", 1),
        ],
        products: vec![
            Product::new(1, "Milk", 2),
            Product::new(2, "Banana", 3),
            Product::new(3, "Macbook", 5),
            Product::new(4, "Beer", 2),
            Product::new(5, "Apple", 3),
            Product::new(6, "iMac", 5),
        ],
    }
}

pub fn sample_catalog() -> Catalog {
    Catalog::build(sample_dataset())
}

/// Dataset with one product pointing at a missing category and one category
/// owned by a missing user.
pub fn dangling_dataset() -> Dataset {
    Dataset {
        users: vec![User::new(1, "Roma", Sex::Male)],
        categories: vec![
            Category::new(1, "Fruits", "🍎", 1),
            Category::new(2, "Tools", "🔧", 42),
        ],
        products: vec![
            Product::new(1, "Banana", 1),
            Product::new(2, "Ghost", 99),
            Product::new(3, "Hammer", 2),
        ],
    }
}
