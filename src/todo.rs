//! To-do List
//!
//! Task list behind the state page. The list itself is plain data with pure
//! helpers; the page keeps it in a reactive [`Store`] so each field (tasks,
//! draft, filter) re-renders on its own.

use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Creation timestamp in ms, bumped on collision
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Read-only view over the task list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "Todas",
            TaskFilter::Active => "Pendientes",
            TaskFilter::Completed => "Completadas",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

/// Totals shown under the list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }
}

/// First id at or above `now_ms` not already taken
fn next_task_id(tasks: &[Task], now_ms: u64) -> u64 {
    let mut id = now_ms;
    while tasks.iter().any(|t| t.id == id) {
        id += 1;
    }
    id
}

/// Append a task with trimmed `text`. Blank text adds nothing.
pub fn add_task(tasks: &mut Vec<Task>, text: &str, now_ms: u64) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let id = next_task_id(tasks, now_ms);
    tasks.push(Task {
        id,
        text: text.to_string(),
        completed: false,
    });
    Some(id)
}

/// Flip `completed` on the task with `id`
pub fn toggle_task(tasks: &mut [Task], id: u64) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

pub fn delete_task(tasks: &mut Vec<Task>, id: u64) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Tasks visible under `filter`, in list order
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

// ========================
// Reactive Board
// ========================

/// State page data with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoBoard {
    pub tasks: Vec<Task>,
    /// Text typed in the "new task" input
    pub draft: String,
    pub filter: TaskFilter,
}

pub type TodoStore = Store<TodoBoard>;

/// Add the current draft as a task and clear the input
pub fn store_add_draft(store: &TodoStore, now_ms: u64) {
    let text = store.draft().get_untracked();
    let added = add_task(&mut store.tasks().write(), &text, now_ms);
    if let Some(id) = added {
        tracing::debug!(id, "task added");
        store.draft().write().clear();
    }
}

pub fn store_toggle_task(store: &TodoStore, id: u64) {
    toggle_task(&mut store.tasks().write(), id);
}

pub fn store_delete_task(store: &TodoStore, id: u64) {
    if delete_task(&mut store.tasks().write(), id) {
        tracing::debug!(id, "task deleted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(texts: &[&str]) -> Vec<Task> {
        let mut tasks = Vec::new();
        for text in texts {
            add_task(&mut tasks, text, 1_000);
        }
        tasks
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_toggle_then_filter_completed() {
        let mut tasks = board(&["A", "B", "C"]);
        let b = tasks[1].id;
        assert!(toggle_task(&mut tasks, b));

        assert_eq!(texts(&filter_tasks(&tasks, TaskFilter::Completed)), ["B"]);
        assert_eq!(texts(&filter_tasks(&tasks, TaskFilter::Active)), ["A", "C"]);
    }

    #[test]
    fn test_add_trims_and_skips_blank() {
        let mut tasks = Vec::new();
        assert_eq!(add_task(&mut tasks, "   ", 5), None);
        assert_eq!(add_task(&mut tasks, "", 5), None);
        assert_eq!(add_task(&mut tasks, "  buy milk ", 5), Some(5));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "buy milk");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_ids_unique_when_timestamps_collide() {
        let tasks = board(&["a", "b", "c"]);
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1_000, 1_001, 1_002]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut tasks = board(&["a"]);
        let id = tasks[0].id;
        toggle_task(&mut tasks, id);
        toggle_task(&mut tasks, id);
        assert!(!tasks[0].completed);
        assert!(!toggle_task(&mut tasks, 42));
    }

    #[test]
    fn test_delete() {
        let mut tasks = board(&["a", "b"]);
        let a = tasks[0].id;
        assert!(delete_task(&mut tasks, a));
        assert!(!delete_task(&mut tasks, a));
        assert_eq!(texts(&tasks), ["b"]);
    }

    #[test]
    fn test_filter_invariants() {
        let mut tasks = board(&["a", "b", "c", "d", "e"]);
        for id in [tasks[0].id, tasks[3].id, tasks[4].id] {
            toggle_task(&mut tasks, id);
        }
        let snapshot = tasks.clone();

        for filter in TaskFilter::ALL {
            let visible = filter_tasks(&tasks, filter);
            assert!(visible.len() <= tasks.len());
            match filter {
                TaskFilter::All => assert_eq!(visible, tasks),
                TaskFilter::Active => assert!(visible.iter().all(|t| !t.completed)),
                TaskFilter::Completed => assert!(visible.iter().all(|t| t.completed)),
            }
        }
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_stats() {
        let mut tasks = board(&["a", "b", "c"]);
        let id = tasks[2].id;
        toggle_task(&mut tasks, id);
        assert_eq!(TaskStats::of(&tasks), TaskStats { total: 3, completed: 1 });
        assert_eq!(TaskStats::of(&[]), TaskStats::default());
    }
}
