//! Foreign-key resolution.
//!
//! [`join`] enriches every product with its category (by `categoryId`) and that
//! category's owner (by `ownerId`). Lookups take the first record with a matching id
//! and yield `None` on a miss; joining never fails.
//!
//! [`Catalog`] is the result of joining a [`Dataset`] once. It is immutable: the filter
//! pipeline reads from it on every state change but never rebuilds it.

use crate::model::{Category, CategoryId, EnrichedProduct, Product, User, UserId};
use crate::source::Dataset;

pub fn find_category(categories: &[Category], id: CategoryId) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

pub fn find_user(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

/// Resolves each product's category and owner, preserving product order.
pub fn join(products: &[Product], categories: &[Category], users: &[User]) -> Vec<EnrichedProduct> {
    products
        .iter()
        .map(|product| {
            let category = find_category(categories, product.category_id).cloned();
            let user = category
                .as_ref()
                .and_then(|c| find_user(users, c.owner_id))
                .cloned();

            EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category,
                user,
            }
        })
        .collect()
}

/// The joined, read-only catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
}

impl Catalog {
    pub fn build(dataset: Dataset) -> Self {
        let products = join(&dataset.products, &dataset.categories, &dataset.users);
        Self {
            users: dataset.users,
            categories: dataset.categories,
            products,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::test_utils::{dangling_dataset, sample_dataset};

    #[test]
    fn preserves_order_and_count() {
        let data = sample_dataset();
        let joined = join(&data.products, &data.categories, &data.users);

        assert_eq!(joined.len(), data.products.len());
        let ids: Vec<_> = joined.iter().map(|p| p.id).collect();
        let expected: Vec<_> = data.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn resolves_category_and_owner() {
        let data = sample_dataset();
        let joined = join(&data.products, &data.categories, &data.users);

        let banana = joined.iter().find(|p| p.name == "Banana").unwrap();
        assert_eq!(banana.category.as_ref().unwrap().title, "Fruits");
        assert_eq!(banana.user.as_ref().unwrap().name, "Anna");
        assert_eq!(banana.user.as_ref().unwrap().sex, Sex::Female);
    }

    #[test]
    fn missing_category_yields_no_category_and_no_user() {
        let data = dangling_dataset();
        let joined = join(&data.products, &data.categories, &data.users);

        let ghost = joined.iter().find(|p| p.name == "Ghost").unwrap();
        assert_eq!(ghost.category, None);
        assert_eq!(ghost.user, None);
        assert_eq!(ghost.category_id, 99);
    }

    #[test]
    fn missing_owner_keeps_category() {
        let data = dangling_dataset();
        let joined = join(&data.products, &data.categories, &data.users);

        let hammer = joined.iter().find(|p| p.name == "Hammer").unwrap();
        assert_eq!(hammer.category.as_ref().unwrap().title, "Tools");
        assert_eq!(hammer.user, None);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let categories = vec![
            Category::new(1, "First", "1️⃣", 1),
            Category::new(1, "Second", "2️⃣", 1),
        ];
        let users = vec![User::new(1, "Roma", Sex::Male)];
        let joined = join(&[Product::new(1, "Thing", 1)], &categories, &users);

        assert_eq!(joined[0].category.as_ref().unwrap().title, "First");
    }

    #[test]
    fn empty_inputs_join_to_empty() {
        assert!(join(&[], &[], &[]).is_empty());
    }

    #[test]
    fn catalog_keeps_source_collections() {
        let catalog = Catalog::build(sample_dataset());
        assert_eq!(catalog.users().len(), 3);
        assert_eq!(catalog.categories().len(), 3);
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(find_user(catalog.users(), 2).unwrap().name, "Anna");
        assert_eq!(find_category(catalog.categories(), 5).unwrap().title, "Electronics");
        assert!(find_user(catalog.users(), 0).is_none());
    }
}
