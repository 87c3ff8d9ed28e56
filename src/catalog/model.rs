//! Record types.
//!
//! `User`, `Category` and `Product` mirror the flat JSON records of a data source:
//! integer ids, camelCase foreign keys (`ownerId`, `categoryId`). They are loaded once
//! and never modified.
//!
//! `EnrichedProduct` is derived from them by [`crate::join`]. Its `category` and
//! `user` fields are `Option`s: a dangling foreign key produces `None`, never a panic.

use serde::{Deserialize, Serialize};

pub type UserId = u32;
pub type CategoryId = u32;
pub type ProductId = u32;

/// Sentinel user id meaning "no owner filter".
pub const ALL_USERS: UserId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            owner_id,
        }
    }

    /// Table label, `"<icon> - <title>"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }
}

/// A product with its category and that category's owner resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn category_label(&self) -> Option<String> {
        self.category.as_ref().map(Category::label)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    pub fn owner_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }
}
