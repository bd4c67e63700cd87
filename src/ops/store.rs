use std::collections::HashSet;

use tracing::{debug, warn};

use crate::io::storage::KeyValueStore;
use crate::model::task::{Category, Task};
use crate::ops::ids::IdGenerator;
use crate::ops::todo_ops;

/// Storage key holding the whole serialized list
pub const TODOS_KEY: &str = "todos";

/// Serialize the list the way it is stored (compact JSON array)
pub fn encode_tasks(tasks: &[Task]) -> String {
    // Task has only string/bool fields, serialization cannot fail
    serde_json::to_string(tasks).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a stored list. Empty or malformed input yields an empty list;
/// repeated ids after the first occurrence are dropped.
pub fn decode_tasks(raw: &str) -> Vec<Task> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let decoded: Vec<Task> = match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!(error = %e, "stored task list is malformed, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    decoded
        .into_iter()
        .filter(|task| {
            let fresh = seen.insert(task.id.clone());
            if !fresh {
                warn!(id = %task.id, "dropping task with repeated id");
            }
            fresh
        })
        .collect()
}

/// Exclusive owner of the canonical task list.
///
/// Every operation that changes the list writes the full list back to the
/// backend before returning. Write failures are logged and kept in
/// `last_persist_error`; the in-memory change stands.
pub struct TodoStore {
    tasks: Vec<Task>,
    backend: Box<dyn KeyValueStore>,
    ids: Box<dyn IdGenerator>,
    last_persist_error: Option<String>,
}

impl TodoStore {
    /// Read the persisted list once. Absent, empty, unreadable or malformed
    /// data all yield an empty list.
    pub fn load(backend: Box<dyn KeyValueStore>, ids: Box<dyn IdGenerator>) -> Self {
        let tasks = match backend.get(TODOS_KEY) {
            Ok(Some(raw)) => decode_tasks(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read stored tasks, starting empty");
                Vec::new()
            }
        };
        debug!(count = tasks.len(), "loaded tasks");
        TodoStore {
            tasks,
            backend,
            ids,
            last_persist_error: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        todo_ops::find(&self.tasks, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        todo_ops::contains(&self.tasks, id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Error message of the most recent failed write, cleared by the next success
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Append a new task and return its id. Empty text is accepted.
    pub fn add(&mut self, text: &str, category: Option<Category>) -> String {
        let mut id = self.ids.next_id();
        while self.contains(&id) {
            id = self.ids.next_id();
        }
        let task = Task::new(id.clone(), text.to_string(), category);
        todo_ops::append(&mut self.tasks, task);
        debug!(%id, "added task");
        self.persist();
        id
    }

    pub fn toggle_completed(&mut self, id: &str) -> bool {
        self.apply(|tasks| todo_ops::toggle_completed(tasks, id))
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.apply(|tasks| todo_ops::set_text(tasks, id, text))
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.apply(|tasks| todo_ops::remove(tasks, id))
    }

    fn apply(&mut self, op: impl FnOnce(&mut Vec<Task>) -> bool) -> bool {
        let changed = op(&mut self.tasks);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&mut self) {
        let encoded = encode_tasks(&self.tasks);
        match self.backend.set(TODOS_KEY, &encoded) {
            Ok(()) => {
                debug!(count = self.tasks.len(), "persisted tasks");
                self.last_persist_error = None;
            }
            Err(e) => {
                warn!(error = %e, "could not persist tasks");
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}
