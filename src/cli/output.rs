use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson<'a> {
    pub id: &'a str,
    pub text: &'a str,
    pub category: Option<&'static str>,
    pub completed: bool,
}

pub fn task_to_json(task: &Task) -> TaskJson<'_> {
    TaskJson {
        id: &task.id,
        text: &task.text,
        category: task.category.map(|c| c.label()),
        completed: task.completed,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    let category = task
        .category
        .map(|c| format!(" ({})", c))
        .unwrap_or_default();
    format!("[{}] {}{}  {}", check, task.text, category, task.id)
}
