use crate::commands::{CmdMessage, CmdResult, Slot};
use crate::error::Result;
use crate::index::TodoSelector;
use crate::model::TodoList;
use crate::store::KeyValueStore;

use super::helpers::not_found;

/// Flips completion of the selected item, or of every item sharing a raw id.
///
/// The snapshot is written even when nothing matched.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    slot: &Slot,
    todos: &mut TodoList,
    selector: TodoSelector,
) -> Result<CmdResult> {
    let toggled = selector.apply(
        todos,
        |list, pos| list.toggle_at(pos).cloned(),
        TodoList::toggle,
    );
    slot.persist(store, todos)?;

    if toggled.is_empty() {
        return Ok(not_found(selector));
    }

    let mut result = CmdResult::default();
    for item in &toggled {
        let verb = if item.completed { "completed" } else { "reopened" };
        result.add_message(CmdMessage::success(format!(
            "Todo {} ({}): {}",
            verb, selector, item.text
        )));
    }
    Ok(result.with_affected_todos(toggled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::{item, seeded};
    use crate::commands::Skipped;
    use crate::model::TodoId;

    #[test]
    fn test_flips_only_selected_item() {
        let (mut store, slot, mut todos) = seeded();
        let result = run(&mut store, &slot, &mut todos, TodoSelector::Index(1)).unwrap();

        assert_eq!(
            todos.items(),
            &[
                item(1, "Buy milk", true),
                item(2, "Walk dog", true),
                item(3, "Call mom", false),
            ]
        );
        assert_eq!(result.affected_todos, vec![item(1, "Buy milk", true)]);
    }

    #[test]
    fn test_toggling_twice_restores_state() {
        let (mut store, slot, mut todos) = seeded();
        let before = todos.clone();
        let sel = TodoSelector::Id(TodoId(2));
        run(&mut store, &slot, &mut todos, sel).unwrap();
        run(&mut store, &slot, &mut todos, sel).unwrap();
        assert_eq!(todos, before);
    }

    #[test]
    fn test_unknown_item_still_persists() {
        let (mut store, slot, mut todos) = seeded();
        let before = todos.clone();

        let sel = TodoSelector::Id(TodoId(404));
        let result = run(&mut store, &slot, &mut todos, sel).unwrap();

        assert_eq!(todos, before);
        assert_eq!(result.skipped, Some(Skipped::ItemNotFound(sel)));
        assert_eq!(store.writes(), 1);
        assert_eq!(slot.load(&store).unwrap(), before);
    }

    #[test]
    fn test_persists_new_state() {
        let (mut store, slot, mut todos) = seeded();
        run(&mut store, &slot, &mut todos, TodoSelector::Index(3)).unwrap();
        let stored = slot.load(&store).unwrap();
        assert!(stored.items()[2].completed);
    }

    #[test]
    fn test_shared_id_index_and_raw_id() {
        let (mut store, slot, _) = seeded();
        let mut todos = TodoList::from(vec![item(5, "a", false), item(5, "b", false)]);

        run(&mut store, &slot, &mut todos, TodoSelector::Index(2)).unwrap();
        assert_eq!(todos.items(), &[item(5, "a", false), item(5, "b", true)]);

        let result = run(&mut store, &slot, &mut todos, TodoSelector::Id(TodoId(5))).unwrap();
        assert_eq!(todos.items(), &[item(5, "a", true), item(5, "b", false)]);
        assert_eq!(result.affected_todos.len(), 2);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn test_write_failure_keeps_toggle_in_memory() {
        let (mut store, slot, mut todos) = seeded();
        store.set_simulate_write_error(true);
        assert!(run(&mut store, &slot, &mut todos, TodoSelector::Index(1)).is_err());
        assert!(todos.items()[0].completed);
        assert_eq!(store.writes(), 0);

        store.set_simulate_write_error(false);
        run(&mut store, &slot, &mut todos, TodoSelector::Index(3)).unwrap();
        let stored = slot.load(&store).unwrap();
        assert_eq!(stored, todos);
        assert!(stored.items()[0].completed);
    }
}
