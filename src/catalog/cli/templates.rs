//! # CLI Templates
//!
//! Output goes through minijinja templates rendered by `outstanding`. Templates live
//! in `templates/` as standalone files and are embedded at compile time.
//!
//! Conventions:
//!
//! 1. Layout math (column widths, padding) happens in Rust; templates get
//!    pre-padded cells. Styling a padded cell keeps columns aligned because ANSI
//!    codes have no width.
//! 2. Templates select styles through variables computed in Rust
//!    (`row.user_style`, `control.style`) rather than through conditionals.
//! 3. Line breaks are explicit; `-` whitespace control keeps loops from adding
//!    blank lines.
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const PANEL_TEMPLATE: &str = include_str!("templates/panel.tmp");
pub const CONTROLS_TEMPLATE: &str = include_str!("templates/controls.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
