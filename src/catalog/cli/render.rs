//! # Rendering Module
//!
//! Styled terminal output via the `outstanding` crate. Each function turns a piece of
//! a `CmdResult` into template data and renders it with [`CATALOG_THEME`].
//!
//! Column widths are computed here with `unicode-width`, so emoji category icons
//! (two cells wide) keep the table aligned. Missing categories and owners render as
//! [`MISSING_CELL`] in the `missing` style.
//!
//! `use_color`: `None` auto-detects from the terminal, `Some(bool)` forces it.

use super::styles::{names, CATALOG_THEME};
use super::templates::{CONTROLS_TEMPLATE, MESSAGES_TEMPLATE, PANEL_TEMPLATE, TABLE_TEMPLATE};
use catalog::api::{CategoryControl, MessageLevel, UserControl};
use catalog::commands::{CmdMessage, CmdResult};
use catalog::model::{EnrichedProduct, Sex};
use catalog::state::ViewState;
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_MESSAGE: &str = "No products matching selected criteria";
pub const MISSING_CELL: &str = "-";
/// Sort affordance shown in every header cell. Sorting is not implemented.
pub const SORT_MARKER: &str = "↕";

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

#[derive(Serialize)]
struct RowData {
    id: String,
    name: String,
    category: String,
    user: String,
    category_style: &'static str,
    user_style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    empty: bool,
    empty_message: String,
    header: String,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct PanelControl {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct PanelData {
    users: Vec<PanelControl>,
    has_query: bool,
    query: String,
    clear_hint: String,
    categories: Vec<PanelControl>,
}

#[derive(Serialize)]
struct ControlLine {
    marker: &'static str,
    id: String,
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ControlsData {
    heading: String,
    controls: Vec<ControlLine>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
    fallback: impl FnOnce(String) -> String,
) -> String {
    let theme = ThemeChoice::from(&*CATALOG_THEME);
    let rendered = match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    };
    let mut output = rendered.unwrap_or_else(|e| fallback(e.to_string()));
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

fn pad_to(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn user_style(sex: Option<Sex>) -> &'static str {
    match sex {
        Some(Sex::Male) => names::USER_MALE,
        Some(Sex::Female) => names::USER_FEMALE,
        None => names::MISSING,
    }
}

/// Renders the product table, or the no-match message for an empty list.
pub fn render_product_table(products: &[EnrichedProduct], use_color: Option<bool>) -> String {
    let headers: Vec<String> = HEADERS
        .iter()
        .map(|h| format!("{} {}", h, SORT_MARKER))
        .collect();

    let cells: Vec<[String; 3]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.category_label().unwrap_or_else(|| MISSING_CELL.to_string()),
            ]
        })
        .collect();

    // The user column is last and stays unpadded.
    let widths: Vec<usize> = (0..3)
        .map(|col| {
            cells
                .iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(headers[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = format!(
        "{}  {}  {}  {}",
        pad_to(&headers[0], widths[0]),
        pad_to(&headers[1], widths[1]),
        pad_to(&headers[2], widths[2]),
        headers[3]
    );

    let rows = products
        .iter()
        .zip(cells)
        .map(|(p, [id, name, category])| RowData {
            id: pad_to(&id, widths[0]),
            name: pad_to(&name, widths[1]),
            category: pad_to(&category, widths[2]),
            user: p.user_name().unwrap_or(MISSING_CELL).to_string(),
            category_style: if p.category.is_some() {
                names::CATEGORY
            } else {
                names::MISSING
            },
            user_style: user_style(p.user.as_ref().map(|u| u.sex)),
        })
        .collect();

    let data = TableData {
        empty: products.is_empty(),
        empty_message: EMPTY_MESSAGE.to_string(),
        header,
        rows,
    };

    render_template(TABLE_TEMPLATE, &data, use_color, |e| {
        format!("Render error: {}\n", e)
    })
}

fn panel_control(label: &str, active: bool) -> PanelControl {
    if active {
        PanelControl {
            label: format!("[{}]", label),
            style: names::CONTROL_ACTIVE,
        }
    } else {
        PanelControl {
            label: label.to_string(),
            style: names::CONTROL,
        }
    }
}

/// Renders the filter summary: owner row, search line (only with a query), category row.
pub fn render_panel(
    result: &CmdResult,
    state: &ViewState,
    clear_hint: &str,
    use_color: Option<bool>,
) -> String {
    let data = PanelData {
        users: result
            .user_controls
            .iter()
            .map(|c| panel_control(&c.label, c.active))
            .collect(),
        has_query: state.has_query(),
        query: format!("\"{}\"", state.query()),
        clear_hint: clear_hint.to_string(),
        categories: result
            .category_controls
            .iter()
            .map(|c| panel_control(&c.title, c.selected))
            .collect(),
    };

    render_template(PANEL_TEMPLATE, &data, use_color, |e| {
        format!("Render error: {}\n", e)
    })
}

fn render_controls(heading: &str, controls: Vec<ControlLine>, use_color: Option<bool>) -> String {
    let width = controls.iter().map(|c| c.id.width()).max().unwrap_or(0);
    let controls = controls
        .into_iter()
        .map(|c| ControlLine {
            id: pad_to(&c.id, width),
            ..c
        })
        .collect();
    let data = ControlsData {
        heading: heading.to_string(),
        controls,
    };

    render_template(CONTROLS_TEMPLATE, &data, use_color, |e| {
        format!("Render error: {}\n", e)
    })
}

fn marker(active: bool) -> &'static str {
    if active {
        "[x]"
    } else {
        "[ ]"
    }
}

/// One line per owner filter entry: marker, id to pass to `--user`, name.
pub fn render_user_controls(controls: &[UserControl], use_color: Option<bool>) -> String {
    let lines = controls
        .iter()
        .map(|c| ControlLine {
            marker: marker(c.active),
            id: c.id.to_string(),
            label: c.label.clone(),
            style: match c.sex {
                Some(_) => user_style(c.sex),
                None => names::TITLE,
            },
        })
        .collect();
    render_controls("Users", lines, use_color)
}

/// One line per category filter entry: marker, id to pass to `--category`, icon and title.
pub fn render_category_controls(controls: &[CategoryControl], use_color: Option<bool>) -> String {
    let lines = controls
        .iter()
        .map(|c| ControlLine {
            marker: marker(c.selected),
            id: c
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| MISSING_CELL.to_string()),
            label: match &c.icon {
                Some(icon) => format!("{} {}", icon, c.title),
                None => c.title.clone(),
            },
            style: if c.id.is_some() {
                names::CATEGORY
            } else {
                names::TITLE
            },
        })
        .collect();
    render_controls("Categories", lines, use_color)
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color, |_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Panel, blank line, table, then any messages.
pub fn render_view(
    result: &CmdResult,
    state: &ViewState,
    clear_hint: &str,
    use_color: Option<bool>,
) -> String {
    format!(
        "{}\n{}{}",
        render_panel(result, state, clear_hint, use_color),
        render_product_table(&result.listed_products, use_color),
        render_messages(&result.messages, use_color)
    )
}
