//! # Interactive Session
//!
//! `catalog browse` draws the full view, then reads one command per line. Each
//! command maps to exactly one [`Transition`] on a session-local [`ViewState`]; the
//! view is recomputed from the immutable catalog and redrawn after every change.
//!
//! Input and output are generic so sessions can be driven from tests with
//! in-memory buffers.

use super::render::{render_messages, render_view};
use catalog::api::CatalogApi;
use catalog::commands::CmdMessage;
use catalog::error::Result;
use catalog::model::ALL_USERS;
use catalog::source::CatalogSource;
use catalog::state::{Transition, ViewState};
use std::io::{BufRead, Write};
use tracing::debug;

pub const CLEAR_HINT: &str = "(clear-query to clear)";
const PROMPT: &str = "> ";

pub const HELP: &str = "\
Commands:
  user <ID>        show products owned by one user (0 = all users)
  all-users        clear the owner filter
  query <TEXT>     show products whose name contains TEXT
  clear-query      clear the name filter
  toggle <ID>      select or deselect a category
  all-categories   clear the category filter
  reset            clear every filter
  show             redraw the current view
  help             show this list
  quit             end the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Apply(Transition),
    Show,
    Help,
    Quit,
}

fn parse_id(command: &str, arg: &str) -> std::result::Result<u32, String> {
    arg.parse()
        .map_err(|_| format!("`{}` expects a numeric id, got `{}`", command, arg))
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, arg) = line
        .split_once(char::is_whitespace)
        .map(|(c, a)| (c, a.trim_start()))
        .unwrap_or((line, ""));

    let parsed = match command {
        "user" => BrowseCommand::Apply(Transition::SelectUser(parse_id(command, arg)?)),
        "all-users" => BrowseCommand::Apply(Transition::SelectUser(ALL_USERS)),
        "query" => BrowseCommand::Apply(Transition::SetQuery(arg.to_string())),
        "clear-query" => BrowseCommand::Apply(Transition::ClearQuery),
        "toggle" => BrowseCommand::Apply(Transition::ToggleCategory(parse_id(command, arg)?)),
        "all-categories" => BrowseCommand::Apply(Transition::ClearCategories),
        "reset" => BrowseCommand::Apply(Transition::ResetAll),
        "show" => BrowseCommand::Show,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => {
            return Err(format!(
                "Unknown command `{}`. Type `help` for the list.",
                other
            ))
        }
    };
    Ok(Some(parsed))
}

fn draw<S: CatalogSource, W: Write>(
    api: &CatalogApi<S>,
    state: &ViewState,
    output: &mut W,
    use_color: Option<bool>,
) -> Result<()> {
    let result = api.view(state);
    write!(output, "{}", render_view(&result, state, CLEAR_HINT, use_color))?;
    Ok(())
}

/// Runs a session until `quit` or end of input, returning the final state.
pub fn run_session<S: CatalogSource, R: BufRead, W: Write>(
    api: &CatalogApi<S>,
    mut input: R,
    output: &mut W,
    use_color: Option<bool>,
    prompt: bool,
) -> Result<ViewState> {
    let mut state = ViewState::new();
    draw(api, &state, output, use_color)?;
    writeln!(output, "Type `help` for commands.")?;

    let mut line = String::new();
    loop {
        // The prompt must be visible while the next read blocks.
        if prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(BrowseCommand::Apply(transition))) => {
                debug!(?transition, "browse command");
                state.apply(transition);
                draw(api, &state, output, use_color)?;
            }
            Ok(Some(BrowseCommand::Show)) => draw(api, &state, output, use_color)?,
            Ok(Some(BrowseCommand::Help)) => write!(output, "{}", HELP)?,
            Ok(Some(BrowseCommand::Quit)) => break,
            Err(message) => write!(
                output,
                "{}",
                render_messages(&[CmdMessage::error(message)], use_color)
            )?,
        }
    }

    output.flush()?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::integrity::IntegrityPolicy;
    use catalog::model::{Category, Product, Sex, User};
    use catalog::source::memory::MemorySource;
    use catalog::source::Dataset;
    use std::io::Cursor;

    fn api() -> CatalogApi<MemorySource> {
        let dataset = Dataset {
            users: vec![
                User::new(1, "Roma", Sex::Male),
                User::new(2, "Anna", Sex::Female),
            ],
            categories: vec![
                Category::new(1, "Fruits", "🍎", 1),
                Category::new(2, "Electronics", "💻", 2),
            ],
            products: vec![
                Product::new(1, "Banana", 1),
                Product::new(2, "Macbook", 2),
                Product::new(3, "Apple", 1),
            ],
        };
        CatalogApi::open(MemorySource::new(dataset), IntegrityPolicy::Strict).unwrap()
    }

    fn session(script: &str) -> (ViewState, String) {
        let mut output = Vec::new();
        let state = run_session(&api(), Cursor::new(script), &mut output, Some(false), false).unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_transitions() {
        assert_eq!(
            parse_command("user 2"),
            Ok(Some(BrowseCommand::Apply(Transition::SelectUser(2))))
        );
        assert_eq!(
            parse_command("all-users"),
            Ok(Some(BrowseCommand::Apply(Transition::SelectUser(0))))
        );
        assert_eq!(
            parse_command("toggle 5"),
            Ok(Some(BrowseCommand::Apply(Transition::ToggleCategory(5))))
        );
        assert_eq!(
            parse_command("reset"),
            Ok(Some(BrowseCommand::Apply(Transition::ResetAll)))
        );
    }

    #[test]
    fn parse_query_keeps_inner_spaces() {
        assert_eq!(
            parse_command("query  orange juice "),
            Ok(Some(BrowseCommand::Apply(Transition::SetQuery(
                "orange juice".into()
            ))))
        );
    }

    #[test]
    fn parse_blank_line_is_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_command("user roma").unwrap_err().contains("numeric id"));
        assert!(parse_command("toggle").is_err());
        assert!(parse_command("sort name").unwrap_err().contains("Unknown command"));
    }

    #[test]
    fn session_starts_with_full_view() {
        let (state, output) = session("");
        assert!(state.is_default());
        assert!(output.contains("Banana"));
        assert!(output.contains("Macbook"));
        assert!(output.contains("Apple"));
    }

    #[test]
    fn session_applies_commands_in_order() {
        let (state, output) = session("user 1\nquery an\n");
        assert_eq!(state.selected_user_id(), 1);
        assert_eq!(state.query(), "an");

        let last_frame = output.rsplit("Users:").next().unwrap();
        assert!(last_frame.contains("Banana"));
        assert!(!last_frame.contains("Macbook"));
        assert!(!last_frame.contains("Apple"));
        assert!(last_frame.contains(CLEAR_HINT));
    }

    #[test]
    fn session_reports_no_matches() {
        let (_, output) = session("query zzz\n");
        let last_frame = output.rsplit("Users:").next().unwrap();
        assert!(last_frame.contains("No products matching selected criteria"));
    }

    #[test]
    fn session_stops_at_quit() {
        let (state, _) = session("toggle 2\nquit\ntoggle 1\n");
        assert_eq!(state.selected_category_ids(), &[2]);
    }

    #[test]
    fn session_survives_errors() {
        let (state, output) = session("user x\ntoggle 1\n");
        assert!(output.contains("expects a numeric id"));
        assert_eq!(state.selected_category_ids(), &[1]);
    }

    #[test]
    fn prompt_waits_for_each_command() {
        let mut output = Vec::new();
        run_session(&api(), Cursor::new("user 1\n"), &mut output, Some(false), true).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.matches(PROMPT).count(), 2);
        assert!(output.ends_with(PROMPT));
        let first_prompt = output.find(PROMPT).unwrap();
        let redraw = output.rfind("Users:").unwrap();
        assert!(first_prompt < redraw);
    }

    #[test]
    fn no_prompt_after_quit() {
        let mut output = Vec::new();
        run_session(&api(), Cursor::new("quit\n"), &mut output, Some(false), true).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.matches(PROMPT).count(), 1);
        assert!(output.ends_with(PROMPT));
    }

    #[test]
    fn help_lists_commands() {
        let (_, output) = session("help\n");
        assert!(output.contains("clear-query"));
        assert!(output.contains("all-categories"));
    }
}
