//! # Rendering Module
//!
//! Turns `CmdResult`s into terminal text. Functions build `String`s so they can
//! be tested; the `print_*` wrappers write them to stdout.

use colored::Colorize;
use todoz::api::{CmdMessage, MessageLevel};
use todoz::index::DisplayTodo;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Renders a listing plus the "N items left" footer.
///
/// The footer appears whenever the collection has items, even if the current
/// filter hides all of them.
pub fn render_todo_list(todos: &[DisplayTodo], active_count: usize, total_count: usize) -> String {
    let mut output = String::new();

    if todos.is_empty() {
        output.push_str("No todos.\n");
    }

    let index_width = todos
        .iter()
        .map(|dt| dt.index.to_string().len())
        .max()
        .unwrap_or(1);

    for dt in todos {
        let idx_str = format!("{:>width$}. ", dt.index, width = index_width);
        let fixed_width = 2 + idx_str.width() + CHECKED.len() + 1;
        let text = truncate_to_width(&dt.item.text, LINE_WIDTH.saturating_sub(fixed_width));

        let line = if dt.item.completed {
            format!(
                "  {}{} {}",
                idx_str.dimmed(),
                CHECKED.green(),
                text.dimmed().strikethrough()
            )
        } else {
            format!("  {}{} {}", idx_str.yellow(), UNCHECKED, text)
        };
        output.push_str(&line);
        output.push('\n');
    }

    if total_count > 0 {
        output.push('\n');
        output.push_str(&items_left(active_count).dimmed().to_string());
        output.push('\n');
    }

    output
}

pub fn items_left(active_count: usize) -> String {
    let plural = if active_count == 1 { "" } else { "s" };
    format!("{} item{} left", active_count, plural)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_todo_list(todos: &[DisplayTodo], active_count: usize, total_count: usize) {
    print!("{}", render_todo_list(todos, active_count, total_count));
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
