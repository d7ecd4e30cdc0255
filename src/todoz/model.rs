use crate::error::{Result, TodozError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a todo item.
///
/// Ids are creation timestamps in milliseconds, bumped when needed so that
/// every new id is strictly greater than all ids already in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl TodoId {
    /// Picks the id for a new item given the largest id currently in use.
    ///
    /// `None` once the largest id is `i64::MAX` and nothing greater exists.
    pub fn next(latest: Option<TodoId>, now_millis: i64) -> Option<Self> {
        match latest {
            Some(TodoId(last)) if now_millis <= last => last.checked_add(1).map(TodoId),
            _ => Some(TodoId(now_millis)),
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse().map(TodoId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Which items a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        };
        f.write_str(name)
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!(
                "Unknown filter: {} (expected all, active or completed)",
                other
            )),
        }
    }
}

/// Ordered collection of todo items.
///
/// Ids assigned by [`TodoList::push`] never collide, but snapshots written by
/// other clients can repeat an id. Operations by id act on every match.
///
/// Serializes as a bare JSON array, which is the snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    fn latest_id(&self) -> Option<TodoId> {
        self.items.iter().map(|t| t.id).max()
    }

    /// Appends a new active item. `text` must already be trimmed and non-empty.
    ///
    /// Fails, leaving the list as it was, when no id greater than the existing
    /// ones is left.
    pub fn push(&mut self, text: String) -> Result<&TodoItem> {
        let latest = self.latest_id();
        let id = TodoId::next(latest, Utc::now().timestamp_millis()).ok_or_else(|| {
            TodozError::Api(format!(
                "No todo id left after {}",
                latest.unwrap_or(TodoId(i64::MAX))
            ))
        })?;
        self.items.push(TodoItem::new(id, text));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Flips completion on every item with `id`, returning them as toggled.
    pub fn toggle(&mut self, id: TodoId) -> Vec<TodoItem> {
        self.items
            .iter_mut()
            .filter(|t| t.id == id)
            .map(|t| {
                t.completed = !t.completed;
                t.clone()
            })
            .collect()
    }

    /// Flips completion on the item at `pos` (0-based).
    pub fn toggle_at(&mut self, pos: usize) -> Option<&TodoItem> {
        let item = self.items.get_mut(pos)?;
        item.completed = !item.completed;
        Some(&*item)
    }

    /// Drops every item with `id`, returning them.
    pub fn remove(&mut self, id: TodoId) -> Vec<TodoItem> {
        self.take_where(|t| t.id == id)
    }

    /// Drops the item at `pos` (0-based).
    pub fn remove_at(&mut self, pos: usize) -> Option<TodoItem> {
        (pos < self.items.len()).then(|| self.items.remove(pos))
    }

    fn take_where(&mut self, pred: impl Fn(&TodoItem) -> bool) -> Vec<TodoItem> {
        let (taken, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.items).into_iter().partition(|t| pred(t));
        self.items = kept;
        taken
    }

    /// Drops every completed item, returning them in collection order.
    pub fn clear_completed(&mut self) -> Vec<TodoItem> {
        self.take_where(|t| t.completed)
    }

    /// Items visible under `filter`, in collection order.
    pub fn view(&self, filter: Filter) -> Vec<&TodoItem> {
        self.items.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }
}

impl From<Vec<TodoItem>> for TodoList {
    fn from(items: Vec<TodoItem>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, text: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId(id),
            text: text.to_string(),
            completed,
        }
    }

    fn sample() -> TodoList {
        TodoList::from(vec![
            item(1, "a", false),
            item(2, "b", true),
            item(3, "c", false),
            item(4, "d", true),
        ])
    }

    /// Two items sharing id 5, as written by clients that stamp ids with the clock.
    fn shared_id() -> TodoList {
        TodoList::from(vec![
            item(5, "a", false),
            item(5, "b", false),
            item(6, "c", false),
        ])
    }

    #[test]
    fn test_next_id_uses_clock_when_ahead() {
        assert_eq!(TodoId::next(None, 500), Some(TodoId(500)));
        assert_eq!(TodoId::next(Some(TodoId(10)), 500), Some(TodoId(500)));
    }

    #[test]
    fn test_next_id_bumps_past_latest_when_clock_lags() {
        assert_eq!(TodoId::next(Some(TodoId(500)), 500), Some(TodoId(501)));
        assert_eq!(TodoId::next(Some(TodoId(900)), 500), Some(TodoId(901)));
    }

    #[test]
    fn test_next_id_runs_out_at_max() {
        assert_eq!(TodoId::next(Some(TodoId(i64::MAX)), 500), None);
    }

    #[test]
    fn test_push_assigns_strictly_increasing_ids() {
        let mut list = TodoList::new();
        for i in 0..50 {
            list.push(format!("item {}", i)).unwrap();
        }
        let ids: Vec<_> = list.items().iter().map(|t| t.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_push_after_future_id_stays_unique() {
        let mut list = TodoList::from(vec![item(i64::MAX - 1, "future", false)]);
        let id = list.push("now".into()).unwrap().id;
        assert_eq!(id, TodoId(i64::MAX));

        let before = list.clone();
        assert!(list.push("one too many".into()).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = sample();
        let before = list.clone();
        let toggled = list.toggle(TodoId(3));
        assert_eq!(toggled, vec![item(3, "c", true)]);

        for (old, new) in before.items().iter().zip(list.items()) {
            if old.id == TodoId(3) {
                assert_eq!(old.completed, !new.completed);
                assert_eq!(old.text, new.text);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut list = sample();
        assert!(list.toggle(TodoId(99)).is_empty());
        assert!(list.toggle_at(4).is_none());
        assert_eq!(list, sample());
    }

    #[test]
    fn test_toggle_by_id_flips_every_match() {
        let mut list = shared_id();
        assert_eq!(list.toggle(TodoId(5)).len(), 2);
        assert_eq!(
            list.items(),
            &[item(5, "a", true), item(5, "b", true), item(6, "c", false)]
        );
    }

    #[test]
    fn test_toggle_at_flips_that_position_only() {
        let mut list = shared_id();
        assert_eq!(list.toggle_at(1), Some(&item(5, "b", true)));
        assert_eq!(
            list.items(),
            &[item(5, "a", false), item(5, "b", true), item(6, "c", false)]
        );
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut list = sample();
        let removed = list.remove(TodoId(2));
        assert_eq!(removed, vec![item(2, "b", true)]);
        let texts: Vec<_> = list.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c", "d"]);
        assert!(list.get(TodoId(2)).is_none());
    }

    #[test]
    fn test_remove_by_id_drops_every_match() {
        let mut list = shared_id();
        assert_eq!(list.remove(TodoId(5)).len(), 2);
        assert!(list.get(TodoId(5)).is_none());
        assert_eq!(list.items(), &[item(6, "c", false)]);
    }

    #[test]
    fn test_remove_at_drops_that_position_only() {
        let mut list = shared_id();
        assert_eq!(list.remove_at(1), Some(item(5, "b", false)));
        assert_eq!(list.items(), &[item(5, "a", false), item(6, "c", false)]);
        assert!(list.remove_at(2).is_none());
    }

    #[test]
    fn test_clear_completed_keeps_active_items_intact() {
        let mut list = sample();
        let cleared = list.clear_completed();
        assert_eq!(cleared, vec![item(2, "b", true), item(4, "d", true)]);
        assert!(list.view(Filter::Completed).is_empty());
        assert_eq!(list.items(), &[item(1, "a", false), item(3, "c", false)]);

        list.clear_completed();
        assert_eq!(list.items(), &[item(1, "a", false), item(3, "c", false)]);
    }

    #[test]
    fn test_views_partition_collection() {
        let list = sample();
        assert_eq!(list.view(Filter::All).len(), list.len());
        assert_eq!(
            list.view(Filter::Active).len() + list.view(Filter::Completed).len(),
            list.len()
        );
        let active: Vec<_> = list.view(Filter::Active).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![TodoId(1), TodoId(3)]);
        assert_eq!(list.active_count(), list.view(Filter::Active).len());
    }

    #[test]
    fn test_filter_parses_and_displays() {
        assert_eq!("Active".parse::<Filter>().unwrap(), Filter::Active);
        assert!("done".parse::<Filter>().is_err());
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let list = TodoList::from(vec![item(1700000000000, "Buy milk", false)]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"id":1700000000000,"text":"Buy milk","completed":false}]"#
        );
    }
}
