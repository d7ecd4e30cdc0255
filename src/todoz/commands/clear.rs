use crate::commands::{CmdMessage, CmdResult, Slot};
use crate::error::Result;
use crate::model::TodoList;
use crate::store::KeyValueStore;

/// Drops all completed todos.
pub fn run<S: KeyValueStore>(store: &mut S, slot: &Slot, todos: &mut TodoList) -> Result<CmdResult> {
    let cleared = todos.clear_completed();
    slot.persist(store, todos)?;

    let mut result = CmdResult::default();
    let message = match cleared.len() {
        0 => CmdMessage::info("No completed todos to clear"),
        1 => CmdMessage::success("Cleared 1 completed todo"),
        n => CmdMessage::success(format!("Cleared {} completed todos", n)),
    };
    result.add_message(message);
    Ok(result.with_affected_todos(cleared))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::{item, seeded};
    use crate::model::Filter;

    #[test]
    fn test_removes_completed_and_keeps_active() {
        let (mut store, slot, mut todos) = seeded();
        let result = run(&mut store, &slot, &mut todos).unwrap();

        assert!(todos.view(Filter::Completed).is_empty());
        assert_eq!(
            todos.items(),
            &[item(1, "Buy milk", false), item(3, "Call mom", false)]
        );
        assert_eq!(result.affected_todos, vec![item(2, "Walk dog", true)]);
        assert_eq!(slot.load(&store).unwrap(), todos);
    }

    #[test]
    fn test_write_failure_keeps_clear_in_memory() {
        let (mut store, slot, mut todos) = seeded();
        store.set_simulate_write_error(true);
        assert!(run(&mut store, &slot, &mut todos).is_err());
        assert!(todos.view(Filter::Completed).is_empty());
        assert_eq!(todos.len(), 2);

        store.set_simulate_write_error(false);
        run(&mut store, &slot, &mut todos).unwrap();
        assert_eq!(slot.load(&store).unwrap(), todos);
    }

    #[test]
    fn test_is_idempotent() {
        let (mut store, slot, mut todos) = seeded();
        run(&mut store, &slot, &mut todos).unwrap();
        let once = todos.clone();

        let second = run(&mut store, &slot, &mut todos).unwrap();
        assert_eq!(todos, once);
        assert!(second.affected_todos.is_empty());
        assert_eq!(store.writes(), 2);
    }
}
