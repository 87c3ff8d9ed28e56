//! Referential integrity.
//!
//! The joiner tolerates dangling foreign keys by producing `None`. Whether a dataset
//! with dangling keys is acceptable is a policy decision made once, at load time:
//!
//! - [`IntegrityPolicy::Strict`] (default): reject the dataset.
//! - [`IntegrityPolicy::Lenient`]: accept it; the affected cells show `-`.
//!
//! Duplicate ids are not dangling references and are not reported; lookups use the
//! first match.

use crate::error::{CatalogError, Result};
use crate::join::{find_category, find_user};
use crate::model::{CategoryId, ProductId, UserId};
use crate::source::Dataset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityPolicy {
    #[default]
    Strict,
    Lenient,
}

impl fmt::Display for IntegrityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityPolicy::Strict => write!(f, "strict"),
            IntegrityPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for IntegrityPolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(IntegrityPolicy::Strict),
            "lenient" => Ok(IntegrityPolicy::Lenient),
            other => Err(CatalogError::Config(format!(
                "Unknown integrity policy '{}' (expected 'strict' or 'lenient')",
                other
            ))),
        }
    }
}

/// A foreign key that resolves to no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DanglingRef {
    Category {
        product_id: ProductId,
        category_id: CategoryId,
    },
    Owner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}

impl fmt::Display for DanglingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DanglingRef::Category {
                product_id,
                category_id,
            } => write!(
                f,
                "product {} references missing category {}",
                product_id, category_id
            ),
            DanglingRef::Owner {
                category_id,
                owner_id,
            } => write!(
                f,
                "category {} references missing owner {}",
                category_id, owner_id
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub dangling: Vec<DanglingRef>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dangling.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dangling.is_empty()
    }
}

/// Lists every dangling reference: products first, then categories, each in
/// source order.
pub fn check(dataset: &Dataset) -> IntegrityReport {
    let products = dataset.products.iter().filter_map(|p| {
        find_category(&dataset.categories, p.category_id)
            .is_none()
            .then_some(DanglingRef::Category {
                product_id: p.id,
                category_id: p.category_id,
            })
    });

    let owners = dataset.categories.iter().filter_map(|c| {
        find_user(&dataset.users, c.owner_id)
            .is_none()
            .then_some(DanglingRef::Owner {
                category_id: c.id,
                owner_id: c.owner_id,
            })
    });

    IntegrityReport {
        dangling: products.chain(owners).collect(),
    }
}

/// Applies `policy` to a report: strict rejects any dangling reference.
pub fn enforce(report: IntegrityReport, policy: IntegrityPolicy) -> Result<IntegrityReport> {
    match (policy, report.dangling.first()) {
        (IntegrityPolicy::Strict, Some(first)) => Err(CatalogError::Integrity(format!(
            "{} ({} dangling reference(s) in total; use --lenient to load anyway)",
            first,
            report.len()
        ))),
        _ => Ok(report),
    }
}
