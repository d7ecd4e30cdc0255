use crate::commands::{CmdMessage, CmdResult, Slot};
use crate::error::Result;
use crate::model::TodoList;
use crate::store::KeyValueStore;
use tracing::info;

/// Overwrites the slot with an empty list without reading it first.
///
/// This is the recovery path for a corrupt snapshot.
pub fn run<S: KeyValueStore>(store: &mut S, slot: &Slot) -> Result<(TodoList, CmdResult)> {
    let todos = TodoList::new();
    slot.persist(store, &todos)?;
    info!(key = %slot.key, "snapshot reset to empty");

    let mut result = CmdResult::default().with_counts(0, 0);
    result.add_message(CmdMessage::success(format!(
        "Reset \"{}\" to an empty list",
        slot.key
    )));
    Ok((todos, result))
}
