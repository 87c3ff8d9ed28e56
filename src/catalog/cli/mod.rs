//! # CLI Behavior
//!
//! This is **one possible UI client** for catalog, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## One Invocation, One Frame
//!
//! `catalog list --user 1 --query mac --category 4` starts from an empty
//! `ViewState`, applies one transition per flag (user, then query, then each
//! `--category` toggle in order) and renders the result. Repeating a category
//! toggles it back off, exactly as clicking it twice would.
//!
//! Running `catalog` with no subcommand is `catalog list`.
//!
//! ## Interactive Session
//!
//! `catalog browse` keeps one `ViewState` alive and reads commands from stdin, one
//! per line. Each command applies a single transition and redraws. See
//! `browse::HELP` for the command list.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `browse`: The interactive session
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting (panels, tables, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod browse;
mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
