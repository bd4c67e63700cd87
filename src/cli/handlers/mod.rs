mod resolve;
pub use resolve::resolve_id;

use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::storage::FileStore;
use crate::model::task::Category;
use crate::ops::store::TODOS_KEY;
use crate::ops::{TodoStore, UuidIds};

/// Error type for CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no task matches '{0}'")]
    NotFound(String),
    #[error("'{prefix}' is ambiguous: {}", .matches.join(", "))]
    Ambiguous {
        prefix: String,
        matches: Vec<String>,
    },
    #[error("unknown category '{0}' (expected Home, Work or Other)")]
    UnknownCategory(String),
    #[error("change not saved: {0}")]
    Persist(String),
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Open the task list stored under `dir`
pub fn open_store(dir: &Path) -> TodoStore {
    TodoStore::load(Box::new(FileStore::new(dir)), Box::new(UuidIds))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, store_dir: &Path) -> Result<(), CliError> {
    match command {
        Commands::Path => {
            println!("{}", FileStore::new(store_dir).path_for(TODOS_KEY).display());
            Ok(())
        }
        Commands::List(args) => cmd_list(&open_store(store_dir), args),
        Commands::Add(args) => cmd_add(&mut open_store(store_dir), args),
        Commands::Toggle(args) => cmd_toggle(&mut open_store(store_dir), args),
        Commands::Edit(args) => cmd_edit(&mut open_store(store_dir), args),
        Commands::Rm(args) => cmd_rm(&mut open_store(store_dir), args),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &TodoStore, args: ListArgs) -> Result<(), CliError> {
    if args.json {
        let tasks: Vec<TaskJson> = store.tasks().iter().map(task_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else if store.is_empty() {
        println!("(no tasks)");
    } else {
        for task in store.tasks() {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

fn cmd_add(store: &mut TodoStore, args: AddArgs) -> Result<(), CliError> {
    let category = parse_category(args.category.as_deref())?;
    let id = store.add(&args.text, category);
    check_persisted(store)?;
    println!("{}", id);
    Ok(())
}

fn cmd_toggle(store: &mut TodoStore, args: IdArg) -> Result<(), CliError> {
    let id = resolve_id(store, &args.id)?;
    store.toggle_completed(&id);
    check_persisted(store)?;
    print_task(store, &id);
    Ok(())
}

fn cmd_edit(store: &mut TodoStore, args: EditArgs) -> Result<(), CliError> {
    let id = resolve_id(store, &args.id)?;
    store.set_text(&id, &args.text);
    check_persisted(store)?;
    print_task(store, &id);
    Ok(())
}

fn cmd_rm(store: &mut TodoStore, args: IdArg) -> Result<(), CliError> {
    let id = resolve_id(store, &args.id)?;
    store.remove(&id);
    check_persisted(store)?;
    println!("removed {}", id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_category(label: Option<&str>) -> Result<Option<Category>, CliError> {
    match label {
        None => Ok(None),
        Some(label) => Category::from_label(label)
            .map(Some)
            .ok_or_else(|| CliError::UnknownCategory(label.to_string())),
    }
}

fn check_persisted(store: &TodoStore) -> Result<(), CliError> {
    match store.last_persist_error() {
        Some(msg) => Err(CliError::Persist(msg.to_string())),
        None => Ok(()),
    }
}

fn print_task(store: &TodoStore, id: &str) {
    if let Some(task) = store.get(id) {
        println!("{}", format_task_line(task));
    }
}
