mod form;
mod list;
mod mouse;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::{App, Focus};

use form::handle_form;
use list::{handle_edit_field, handle_list};

/// Handle a key event for whichever control has focus
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts everything; ? or Esc closes it
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    if let Some(id) = app.focused_edit_id() {
        handle_edit_field(app, &id, key, now);
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Tab) => {
            let next = app.focus.next();
            app.set_focus(next, now);
            return;
        }
        (_, KeyCode::BackTab) => {
            let prev = app.focus.prev();
            app.set_focus(prev, now);
            return;
        }
        _ => {}
    }

    if app.focus == Focus::List {
        handle_list(app, key, now);
    } else {
        handle_form(app, key);
    }
}

/// Handle a mouse event (left clicks only)
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    mouse::handle_click(app, mouse, now);
}

/// Handle a bracketed paste: insert into the focused text field.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(id) = app.focused_edit_id() {
        if let Some(draft) = app.items.draft_mut(&id) {
            draft.insert_str(text);
        }
        return;
    }
    if app.focus == Focus::TaskInput {
        app.form.text.insert_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::model::Category;
    use crate::ops::store::TODOS_KEY;

    pub(super) use crate::tui::render::test_helpers::test_app;

    pub(super) fn press(app: &mut App, code: KeyCode, now: Instant) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    pub(super) fn chord(app: &mut App, c: char, now: Instant) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), now);
    }

    pub(super) fn type_str(app: &mut App, s: &str, now: Instant) {
        for c in s.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn add_through_the_form() {
        let t0 = Instant::now();
        let (mut app, backend) = test_app();
        type_str(&mut app, "Buy milk", t0);
        press(&mut app, KeyCode::Tab, t0);
        press(&mut app, KeyCode::Right, t0);
        press(&mut app, KeyCode::Enter, t0);

        let tasks = app.store.tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert_eq!(tasks[0].category, Some(Category::Home));
        assert!(!tasks[0].completed);
        assert!(app.form.text.is_empty());
        assert_eq!(app.form.category, None);
        assert_eq!(app.focus, Focus::Category);
        assert!(backend.raw(TODOS_KEY).is_some());
    }

    #[test]
    fn typing_never_submits() {
        let t0 = Instant::now();
        let (mut app, backend) = test_app();
        type_str(&mut app, "q x d e", t0);
        assert!(app.store.is_empty());
        assert_eq!(backend.write_count(), 0);
        assert!(!app.should_quit);
        assert_eq!(app.form.text.value(), "q x d e");
    }

    #[test]
    fn edit_type_and_confirm_commits_once() {
        let t0 = Instant::now();
        let (mut app, backend) = test_app();
        app.store.add("Buy milk", Some(Category::Home));
        app.focus = Focus::List;

        press(&mut app, KeyCode::Char('e'), t0);
        press(&mut app, KeyCode::End, t0);
        type_str(&mut app, " and eggs", t0);
        let writes = backend.write_count();
        press(&mut app, KeyCode::Enter, t0);

        assert_eq!(app.store.tasks()[0].text, "Buy milk and eggs");
        assert_eq!(backend.write_count(), writes + 1);
        app.tick(t0 + Duration::from_secs(1));
        assert_eq!(backend.write_count(), writes + 1);
    }

    #[test]
    fn escape_then_quick_edit_key_commits_once() {
        let t0 = Instant::now();
        let (mut app, backend) = test_app();
        app.store.add("a", None);
        app.focus = Focus::List;

        press(&mut app, KeyCode::Enter, t0);
        type_str(&mut app, "bc", t0);
        press(&mut app, KeyCode::Esc, t0);
        let writes = backend.write_count();

        let t1 = t0 + Duration::from_millis(30);
        app.tick(t1);
        press(&mut app, KeyCode::Char('e'), t1);
        app.tick(t0 + Duration::from_millis(500));

        assert_eq!(app.store.tasks()[0].text, "abc");
        assert_eq!(backend.write_count(), writes + 1);
        assert_eq!(app.items.editing_count(), 0);
    }

    #[test]
    fn paste_goes_to_the_focused_field() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        handle_paste(&mut app, "line one\nline two");
        assert_eq!(app.form.text.value(), "line one line two");

        let id = app.store.add("x", None);
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('e'), t0);
        handle_paste(&mut app, "yz");
        assert_eq!(app.items.draft(&id).unwrap().value(), "xyz");
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        app.store.add("x", None);
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('?'), t0);
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('d'), t0);
        assert_eq!(app.store.len(), 1);
        press(&mut app, KeyCode::Esc, t0);
        assert!(!app.show_help);
    }

    #[test]
    fn ctrl_c_quits_even_while_editing() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        app.store.add("x", None);
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('e'), t0);
        chord(&mut app, 'c', t0);
        assert!(app.should_quit);
    }
}
