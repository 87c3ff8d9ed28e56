//! Styles for the catalog CLI.
//!
//! Templates only ever refer to **semantic** style names (`product-id`, `user-female`,
//! `control-active`). What those look like is decided here, once, so the table and
//! the filter panel stay consistent and the palette can change without touching a
//! template.
//!
//! Owners are colored by sex: link blue for `m`, danger red for `f`. The coloring
//! is presentation only and carries no meaning for the data.
//!
//! When color is disabled the `style` filter passes text through unchanged, so every
//! template must read correctly in plain text as well.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    // Filter panel
    pub const PANEL_HEADING: &str = "panel-heading";
    pub const CONTROL: &str = "control";
    pub const CONTROL_ACTIVE: &str = "control-active";
    pub const QUERY: &str = "query";
    // Product table
    pub const TABLE_HEADER: &str = "table-header";
    pub const PRODUCT_ID: &str = "product-id";
    pub const PRODUCT_NAME: &str = "product-name";
    pub const CATEGORY: &str = "category";
    pub const USER_MALE: &str = "user-male";
    pub const USER_FEMALE: &str = "user-female";
    pub const MISSING: &str = "missing";
}

pub static CATALOG_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let muted = Style::new().color256(rgb_to_ansi256((128, 128, 128)));
    let link = Style::new().color256(rgb_to_ansi256((72, 95, 199)));
    let danger = Style::new().color256(rgb_to_ansi256((241, 70, 104)));
    let info = Style::new().color256(rgb_to_ansi256((62, 142, 208)));

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::ERROR, danger.clone().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::PANEL_HEADING, Style::new().bold())
        .add(names::CONTROL, Style::new())
        .add(names::CONTROL_ACTIVE, info.clone().bold())
        .add(names::QUERY, Style::new().italic())
        .add(names::TABLE_HEADER, Style::new().bold().underlined())
        .add(names::PRODUCT_ID, Style::new().bold())
        .add(names::PRODUCT_NAME, Style::new())
        .add(names::CATEGORY, Style::new())
        .add(names::USER_MALE, link)
        .add(names::USER_FEMALE, danger)
        .add(names::MISSING, muted.italic())
}
