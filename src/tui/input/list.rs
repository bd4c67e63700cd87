use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};

/// Keys while the list has focus and no edit field is focused
pub(super) fn handle_list(app: &mut App, key: KeyEvent, now: Instant) {
    // Letter bindings are bare keys; Ctrl/Alt chords are unbound here
    if matches!(key.code, KeyCode::Char(_))
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, now),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, now),
        KeyCode::Home | KeyCode::Char('g') => app.move_cursor(isize::MIN / 2, now),
        KeyCode::End | KeyCode::Char('G') => app.move_cursor(isize::MAX / 2, now),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('a') => app.set_focus(Focus::TaskInput, now),
        _ => {
            let Some(id) = app.selected_id() else {
                return;
            };
            match key.code {
                KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle(&id),
                KeyCode::Char('e') | KeyCode::Enter => app.activate_edit(&id),
                KeyCode::Char('d') | KeyCode::Delete => app.delete(&id),
                _ => {}
            }
        }
    }
}

/// Keys while the selected row's edit field has focus
pub(super) fn handle_edit_field(app: &mut App, id: &str, key: KeyEvent, now: Instant) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => app.activate_edit(id),
        KeyCode::Char('t') if ctrl => app.toggle(id),
        KeyCode::Char('d') if ctrl => app.delete(id),
        KeyCode::Esc => app.blur_focused_edit(now),
        KeyCode::Tab => app.set_focus(app.focus.next(), now),
        KeyCode::BackTab => app.set_focus(app.focus.prev(), now),
        KeyCode::Up => app.move_cursor(-1, now),
        KeyCode::Down => app.move_cursor(1, now),
        _ => {
            if let Some(draft) = app.items.draft_mut(id) {
                draft.handle_key(key);
            }
        }
    }
}
