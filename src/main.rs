use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use jot::cli::commands::Cli;
use jot::cli::handlers;
use jot::io::config_io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log file inside the storage directory, used while the TUI owns the terminal
const LOG_FILE: &str = "jot.log";

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let store_dir = config_io::resolve_storage_dir(cli.store.as_deref(), &config);

    match cli.command {
        None => {
            // No subcommand → launch TUI
            init_tracing(Some(&store_dir));
            let store = handlers::open_store(&store_dir);
            if let Err(e) = jot::tui::run(store, &config.ui) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(command) => {
            init_tracing(None);
            if let Err(e) = handlers::dispatch(command, &store_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Tracing is opt-in via RUST_LOG. Invalid or huge filters are ignored.
/// With a log dir, output goes to a file there instead of stderr.
fn init_tracing(log_dir: Option<&Path>) {
    let Some(filter) = std::env::var("RUST_LOG").ok().and_then(|raw| {
        let raw = raw.trim();
        if raw.is_empty() || raw.len() > 4096 {
            return None;
        }
        EnvFilter::try_new(raw).ok()
    }) else {
        return;
    };

    match log_dir {
        Some(dir) => {
            let file = fs::create_dir_all(dir).and_then(|()| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(dir.join(LOG_FILE))
            });
            // Without a log file, stay silent rather than draw over the screen
            if let Ok(file) = file {
                tracing_subscriber::registry()
                    .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                    .with(filter)
                    .init();
            }
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
}
