use catalog::model::{CategoryId, UserId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    bin_name = "catalog",
    version,
    disable_help_subcommand = true,
    after_help = "Running `catalog` with no command lists every product.\nSet RUST_LOG=catalog=debug for detailed logs."
)]
#[command(about = "Browse a product catalog: filter by owner, name and category", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory with users.json, categories.json and products.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Load data with dangling references, showing them as `-`
    #[arg(long, global = true, conflicts_with = "strict", help_heading = "Options")]
    pub lenient: bool,

    /// Reject data with dangling references
    #[arg(long, global = true, help_heading = "Options")]
    pub strict: bool,

    /// Disable styled output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List products matching the given filters
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only products owned by this user (0 = all users)
        #[arg(short, long, value_name = "ID")]
        user: Option<UserId>,

        /// Only products whose name contains this text (case-insensitive)
        #[arg(short, long, value_name = "TEXT")]
        query: Option<String>,

        /// Toggle a category; repeat for several (e.g. -c 2 -c 5)
        #[arg(short = 'c', long = "category", value_name = "ID")]
        categories: Vec<CategoryId>,
    },

    /// Show the owner filter entries
    #[command(display_order = 2)]
    Users,

    /// Show the category filter entries
    #[command(alias = "cats", display_order = 3)]
    Categories,

    /// Interactive session: change filters line by line
    #[command(display_order = 4)]
    Browse,

    /// Show the resolved configuration
    #[command(display_order = 10)]
    Config,
}
