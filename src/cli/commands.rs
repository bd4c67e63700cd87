use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jot", about = concat!("jot v", env!("CARGO_PKG_VERSION"), " - a small to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the task list
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks in order
    List(ListArgs),
    /// Add a task and print its id
    Add(AddArgs),
    /// Flip a task between done and not done
    Toggle(IdArg),
    /// Replace a task's text
    Edit(EditArgs),
    /// Delete a task
    Rm(IdArg),
    /// Print the storage file path
    Path,
}

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Category (Home, Work or Other)
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id or a unique prefix of one
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id or a unique prefix of one
    pub id: String,
    /// New text
    pub text: String,
}
