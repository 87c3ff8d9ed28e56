//! # Catalog Architecture
//!
//! Catalog is a **UI-agnostic product catalog library**. It joins three flat datasets
//! (users, categories, products) into enriched product records and filters them by
//! owner, name and category. The terminal client in `cli/` is one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders panels and tables              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads a source once, checks integrity, joins once        │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Runs the filter pipeline against a `ViewState`           │
//! │  - Builds filter controls                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - `CatalogSource` trait                                    │
//! │  - BuiltinSource, DirSource, MemorySource                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pipeline
//!
//! Joining happens exactly once, when [`api::CatalogApi::open`] builds the
//! [`join::Catalog`]. Every change to the [`state::ViewState`] is followed by a full
//! recomputation of [`filter::apply`] over the joined list. There is no caching and
//! no incremental update; the datasets are small and the pipeline is pure.
//!
//! Foreign-key lookups return `Option`. A product whose category is missing carries
//! `category: None` and `user: None`, and every consumer has to handle that case.
//! Whether such a dataset is accepted at all is decided by the
//! [`integrity::IntegrityPolicy`] given to `open`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Listing and filter-control commands
//! - [`source`]: Data source abstraction and implementations
//! - [`model`]: Record types (`User`, `Category`, `Product`, `EnrichedProduct`)
//! - [`join`]: Foreign-key resolution and the immutable `Catalog`
//! - [`filter`]: The filter pipeline
//! - [`state`]: View state and its transitions
//! - [`integrity`]: Dangling-reference detection and policy
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod integrity;
pub mod join;
pub mod model;
pub mod source;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;
