//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for clients. Opening it reads the source,
//! applies the integrity policy and joins the data; after that every call is a pure
//! function of the immutable [`Catalog`] and the caller's [`ViewState`].
//!
//! The API owns no view state. Clients keep their own `ViewState`, mutate it through
//! its transitions, and ask the API for a fresh result after each change.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: filtering lives in `filter.rs`, controls in `commands/`
//! - **I/O beyond the source**: no stdout, stderr, or terminal assumptions
//! - **Presentation**: returns data structures, not strings

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::integrity::{self, IntegrityPolicy, IntegrityReport};
use crate::join::Catalog;
use crate::source::CatalogSource;
use crate::state::ViewState;
use tracing::{info, warn};

pub struct CatalogApi<S: CatalogSource> {
    source: S,
    catalog: Catalog,
    integrity: IntegrityReport,
}

impl<S: CatalogSource> CatalogApi<S> {
    /// Loads `source` once and builds the catalog.
    ///
    /// Fails on unreadable data, or on dangling references under
    /// [`IntegrityPolicy::Strict`].
    pub fn open(source: S, policy: IntegrityPolicy) -> Result<Self> {
        let dataset = source.load()?;
        let report = integrity::enforce(integrity::check(&dataset), policy)?;
        for dangling in &report.dangling {
            warn!(%dangling, "dangling reference");
        }

        let catalog = Catalog::build(dataset);
        info!(
            source = %source.describe(),
            %policy,
            users = catalog.users().len(),
            categories = catalog.categories().len(),
            products = catalog.products().len(),
            "catalog opened"
        );

        Ok(Self {
            source,
            catalog,
            integrity: report,
        })
    }

    /// Filtered products for `state`.
    pub fn products(&self, state: &ViewState) -> CmdResult {
        let mut result = commands::list::run(&self.catalog, state);
        self.add_integrity_warning(&mut result);
        result
    }

    /// Owner filter entries, with the active one flagged.
    pub fn users(&self, state: &ViewState) -> CmdResult {
        CmdResult::default().with_user_controls(commands::controls::users(&self.catalog, state))
    }

    /// Category filter entries, with the selected ones flagged.
    pub fn categories(&self, state: &ViewState) -> CmdResult {
        CmdResult::default()
            .with_category_controls(commands::controls::categories(&self.catalog, state))
    }

    /// Controls and filtered products together.
    pub fn view(&self, state: &ViewState) -> CmdResult {
        let mut result = commands::view::run(&self.catalog, state);
        self.add_integrity_warning(&mut result);
        result
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn integrity(&self) -> &IntegrityReport {
        &self.integrity
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn add_integrity_warning(&self, result: &mut CmdResult) {
        if !self.integrity.is_clean() {
            result.add_message(CmdMessage::warning(format!(
                "Catalog data has {} dangling reference(s); affected cells show `-`.",
                self.integrity.len()
            )));
        }
    }
}

pub use crate::commands::{CategoryControl, MessageLevel, UserControl};
pub use crate::integrity::DanglingRef;
