use crate::commands::{CmdMessage, CmdResult, Slot};
use crate::error::Result;
use crate::index::TodoSelector;
use crate::model::TodoList;
use crate::store::KeyValueStore;

use super::helpers::not_found;

/// Removes the selected item, or every item sharing a raw id.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    slot: &Slot,
    todos: &mut TodoList,
    selector: TodoSelector,
) -> Result<CmdResult> {
    let removed = selector.apply(todos, TodoList::remove_at, TodoList::remove);
    slot.persist(store, todos)?;

    if removed.is_empty() {
        return Ok(not_found(selector));
    }

    let mut result = CmdResult::default();
    for item in &removed {
        result.add_message(CmdMessage::success(format!(
            "Todo removed ({}): {}",
            selector, item.text
        )));
    }
    Ok(result.with_affected_todos(removed))
}
