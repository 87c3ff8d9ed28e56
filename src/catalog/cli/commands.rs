//! # Dispatch
//!
//! `run()` resolves configuration, opens the catalog and hands off to one
//! `handle_*` function per subcommand. Handlers call the API, render the
//! `CmdResult` and print it; they hold no filtering logic of their own.

use super::browse;
use super::logging;
use super::render::{
    render_category_controls, render_messages, render_user_controls, render_view,
};
use super::setup::{Cli, Commands};
use catalog::api::CatalogApi;
use catalog::config::{config_path, CatalogConfig};
use catalog::error::Result;
use catalog::integrity::IntegrityPolicy;
use catalog::model::{CategoryId, UserId};
use catalog::source::builtin::BuiltinSource;
use catalog::source::dir::DirSource;
use catalog::source::CatalogSource;
use catalog::state::ViewState;
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;

const LIST_CLEAR_HINT: &str = "(drop --query to clear)";

struct AppContext {
    api: CatalogApi<Box<dyn CatalogSource>>,
    use_color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_file = config_path();
    let config = apply_overrides(CatalogConfig::load(config_file.as_deref())?, &cli);
    debug!(?config, "configuration resolved");

    match cli.command {
        Some(Commands::Config) => handle_config(&config, config_file.as_deref()),
        Some(Commands::List {
            user,
            query,
            categories,
        }) => handle_list(&init_context(&config)?, user, query, categories),
        Some(Commands::Users) => handle_users(&init_context(&config)?),
        Some(Commands::Categories) => handle_categories(&init_context(&config)?),
        Some(Commands::Browse) => handle_browse(&init_context(&config)?),
        None => handle_list(&init_context(&config)?, None, None, Vec::new()),
    }
}

/// Layers command-line flags over the loaded configuration.
fn apply_overrides(mut config: CatalogConfig, cli: &Cli) -> CatalogConfig {
    if let Some(dir) = &cli.data {
        config.data_dir = Some(dir.clone());
    }
    if cli.lenient {
        config.integrity = Some(IntegrityPolicy::Lenient);
    } else if cli.strict {
        config.integrity = Some(IntegrityPolicy::Strict);
    }
    if cli.no_color {
        config.color = false;
    }
    config
}

fn init_context(config: &CatalogConfig) -> Result<AppContext> {
    let source: Box<dyn CatalogSource> = match &config.data_dir {
        Some(dir) => Box::new(DirSource::new(dir.clone())),
        None => Box::new(BuiltinSource),
    };

    Ok(AppContext {
        api: CatalogApi::open(source, config.integrity())?,
        use_color: if config.color { None } else { Some(false) },
    })
}

/// Builds the state one invocation describes: user, then query, then each category toggle.
fn state_from_flags(
    user: Option<UserId>,
    query: Option<String>,
    categories: Vec<CategoryId>,
) -> ViewState {
    let mut state = ViewState::new();
    if let Some(id) = user {
        state.select_user(id);
    }
    if let Some(text) = query {
        state.set_query(text);
    }
    for id in categories {
        state.toggle_category(id);
    }
    state
}

fn handle_list(
    ctx: &AppContext,
    user: Option<UserId>,
    query: Option<String>,
    categories: Vec<CategoryId>,
) -> Result<()> {
    let state = state_from_flags(user, query, categories);
    let result = ctx.api.view(&state);
    print!(
        "{}",
        render_view(&result, &state, LIST_CLEAR_HINT, ctx.use_color)
    );
    Ok(())
}

fn handle_users(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.users(&ViewState::new());
    print!(
        "{}",
        render_user_controls(&result.user_controls, ctx.use_color)
    );
    print!("{}", render_messages(&result.messages, ctx.use_color));
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories(&ViewState::new());
    print!(
        "{}",
        render_category_controls(&result.category_controls, ctx.use_color)
    );
    print!("{}", render_messages(&result.messages, ctx.use_color));
    Ok(())
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout();
    let state = browse::run_session(&ctx.api, stdin.lock(), &mut stdout, ctx.use_color, prompt)?;
    debug!(?state, "browse session ended");
    Ok(())
}

fn handle_config(config: &CatalogConfig, config_path: Option<&Path>) -> Result<()> {
    let resolved = CatalogConfig {
        integrity: Some(config.integrity()),
        ..config.clone()
    };
    if let Some(path) = config_path {
        println!("# config file: {}", path.display());
    }
    if resolved.data_dir.is_none() {
        println!("# data_dir unset: using the built-in fixture");
    }
    print!("{}", resolved.to_toml()?);
    Ok(())
}
