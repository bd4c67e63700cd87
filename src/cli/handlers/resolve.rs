use crate::ops::TodoStore;

use super::CliError;

/// Resolve a full id or a unique id prefix to a task id
pub fn resolve_id(store: &TodoStore, query: &str) -> Result<String, CliError> {
    if store.contains(query) {
        return Ok(query.to_string());
    }
    let mut matches: Vec<String> = store
        .tasks()
        .iter()
        .filter(|t| !query.is_empty() && t.id.starts_with(query))
        .map(|t| t.id.clone())
        .collect();
    match matches.len() {
        0 => Err(CliError::NotFound(query.to_string())),
        1 => Ok(matches.swap_remove(0)),
        _ => Err(CliError::Ambiguous {
            prefix: query.to_string(),
            matches,
        }),
    }
}
