use crate::commands::{CmdMessage, CmdResult, Skipped, Slot};
use crate::error::Result;
use crate::model::TodoList;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    store: &mut S,
    slot: &Slot,
    todos: &mut TodoList,
    text: &str,
) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        let mut result = CmdResult::default().with_skipped(Skipped::EmptyInput);
        result.add_message(CmdMessage::info("Nothing to add"));
        return Ok(result);
    }

    let item = todos.push(text.to_string())?.clone();
    let index = todos.len();
    slot.persist(store, todos)?;

    let mut result = CmdResult::default().with_affected_todos(vec![item.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Todo added ({}): {}",
        index, item.text
    )));
    Ok(result)
}
