//! The filter pipeline.
//!
//! Three independent predicates, combined with AND. Each is skipped when inactive:
//!
//! | Criterion      | Inactive value | Keeps items where                          |
//! |----------------|----------------|--------------------------------------------|
//! | owner          | `0`            | the resolved user has that id              |
//! | name query     | blank          | lowercase name contains trimmed lowercase query |
//! | category set   | empty          | `categoryId` is in the set                 |
//!
//! Items without a resolved user never match an active owner filter.
//! The pipeline is pure: it borrows its input and returns the matching subset in
//! input order.

use crate::model::{CategoryId, EnrichedProduct, UserId, ALL_USERS};
use serde::Serialize;

/// A snapshot of the filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub user_id: UserId,
    pub query: String,
    pub category_ids: Vec<CategoryId>,
}

impl FilterCriteria {
    pub fn has_user(&self) -> bool {
        self.user_id != ALL_USERS
    }

    /// The trimmed, lowercased query, or `None` when the query is blank.
    pub fn normalized_query(&self) -> Option<String> {
        normalize_query(&self.query)
    }

    pub fn has_categories(&self) -> bool {
        !self.category_ids.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.has_user() || self.normalized_query().is_some() || self.has_categories()
    }
}

fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Returns the items matching every active criterion.
pub fn filter<'a>(
    items: &'a [EnrichedProduct],
    user_id: UserId,
    query: &str,
    category_ids: &[CategoryId],
) -> Vec<&'a EnrichedProduct> {
    let needle = normalize_query(query);

    items
        .iter()
        .filter(|item| user_id == ALL_USERS || item.owner_id() == Some(user_id))
        .filter(|item| match &needle {
            Some(needle) => item.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .filter(|item| category_ids.is_empty() || category_ids.contains(&item.category_id))
        .collect()
}

pub fn apply<'a>(items: &'a [EnrichedProduct], criteria: &FilterCriteria) -> Vec<&'a EnrichedProduct> {
    filter(items, criteria.user_id, &criteria.query, &criteria.category_ids)
}
