use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

/// Keys while one of the add-form controls has focus.
///
/// Enter submits from any form control and is consumed here, so it never
/// reaches another handler.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.submit_form();
        return;
    }

    match app.focus {
        Focus::TaskInput => {
            app.form.text.handle_key(key);
        }
        Focus::Category => match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => app.form.next_category(),
            KeyCode::Left | KeyCode::Char('h') => app.form.prev_category(),
            _ => {}
        },
        Focus::AddButton => {
            if key.code == KeyCode::Char(' ') {
                app.submit_form();
            }
        }
        Focus::List => {}
    }
}
