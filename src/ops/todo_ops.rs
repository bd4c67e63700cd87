//! Pure transitions over the in-memory task list.
//!
//! Each mutating function returns whether it changed anything, so the store
//! can skip persistence for no-ops.

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

pub fn find<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|t| t.id == id)
}

fn find_mut<'a>(tasks: &'a mut [Task], id: &str) -> Option<&'a mut Task> {
    tasks.iter_mut().find(|t| t.id == id)
}

pub fn contains(tasks: &[Task], id: &str) -> bool {
    find(tasks, id).is_some()
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Append a task at the end. Refuses (returns false) if its id is already present.
pub fn append(tasks: &mut Vec<Task>, task: Task) -> bool {
    if contains(tasks, &task.id) {
        return false;
    }
    tasks.push(task);
    true
}

/// Flip `completed` on the task with `id`
pub fn toggle_completed(tasks: &mut [Task], id: &str) -> bool {
    match find_mut(tasks, id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Replace the text of the task with `id`. Identical text counts as no change.
pub fn set_text(tasks: &mut [Task], id: &str, text: &str) -> bool {
    match find_mut(tasks, id) {
        Some(task) if task.text != text => {
            task.text = text.to_string();
            true
        }
        _ => false,
    }
}

/// Remove the task with `id`, keeping the order of the rest
pub fn remove(tasks: &mut Vec<Task>, id: &str) -> bool {
    match tasks.iter().position(|t| t.id == id) {
        Some(idx) => {
            tasks.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Category;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("a".into(), "First".into(), Some(Category::Home)),
            Task::new("b".into(), "Second".into(), None),
            Task::new("c".into(), "Third".into(), Some(Category::Work)),
        ]
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn append_goes_to_the_end() {
        let mut tasks = sample();
        assert!(append(&mut tasks, Task::new("d".into(), "".into(), None)));
        assert_eq!(ids(&tasks), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn append_refuses_duplicate_id() {
        let mut tasks = sample();
        assert!(!append(&mut tasks, Task::new("b".into(), "dup".into(), None)));
        assert_eq!(tasks, sample());
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut tasks = sample();
        assert!(toggle_completed(&mut tasks, "b"));
        assert!(tasks[1].completed);
        assert!(toggle_completed(&mut tasks, "b"));
        assert_eq!(tasks, sample());
    }

    #[test]
    fn toggle_unknown_id_leaves_list_equal() {
        let mut tasks = sample();
        assert!(!toggle_completed(&mut tasks, "zzz"));
        assert_eq!(tasks, sample());
    }

    #[test]
    fn set_text_replaces_only_the_match() {
        let mut tasks = sample();
        assert!(set_text(&mut tasks, "c", "Third, edited"));
        assert_eq!(tasks[2].text, "Third, edited");
        assert_eq!(tasks[0].text, "First");
        assert_eq!(tasks[2].category, Some(Category::Work));
    }

    #[test]
    fn set_text_same_text_is_no_change() {
        let mut tasks = sample();
        assert!(!set_text(&mut tasks, "a", "First"));
        assert!(!set_text(&mut tasks, "missing", "x"));
        assert_eq!(tasks, sample());
    }

    #[test]
    fn remove_keeps_relative_order_and_is_idempotent() {
        let mut tasks = sample();
        assert!(remove(&mut tasks, "b"));
        assert_eq!(ids(&tasks), vec!["a", "c"]);
        let after_first = tasks.clone();
        assert!(!remove(&mut tasks, "b"));
        assert_eq!(tasks, after_first);
    }
}
