use crate::commands::{CmdMessage, CmdResult, Skipped};
use crate::index::TodoSelector;

/// Uniform result for a selector that matched nothing.
pub fn not_found(selector: TodoSelector) -> CmdResult {
    let mut result = CmdResult::default().with_skipped(Skipped::ItemNotFound(selector));
    result.add_message(CmdMessage::warning(format!("No todo matches {}", selector)));
    result
}
