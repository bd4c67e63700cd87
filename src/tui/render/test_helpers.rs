use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::io::storage::MemoryStore;
use crate::model::UiConfig;
use crate::ops::{SequentialIds, TodoStore};
use crate::tui::app::App;

/// Render the whole app into an in-memory buffer and return plain text (no styles).
pub fn render_to_string(w: u16, h: u16, app: &mut App) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over an empty in-memory backend with predictable ids
pub fn test_app() -> (App, MemoryStore) {
    let backend = MemoryStore::new();
    let store = TodoStore::load(Box::new(backend.clone()), Box::new(SequentialIds::new("t")));
    (App::new(store, &UiConfig::default()), backend)
}
