use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, Focus, HitTarget};

/// Left click. Focus leaves the editing field before the click's own action
/// runs, the same order a browser delivers blur and click.
pub(super) fn handle_click(app: &mut App, mouse: MouseEvent, now: Instant) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.show_help {
        return;
    }
    let hit = app.hit_test(mouse.column, mouse.row);

    // Clicks on the focused field or elsewhere on its row keep it focused
    let keeps_focus = matches!(
        (&hit, app.focused_edit_id()),
        (Some((_, HitTarget::EditField(hit_id) | HitTarget::Row(hit_id))), Some(focused))
            if *hit_id == focused
    );
    if !keeps_focus {
        app.blur_focused_edit(now);
    }

    let Some((rect, target)) = hit else {
        return;
    };
    // Column inside the visible window of the field
    let col = usize::from(mouse.column.saturating_sub(rect.x));
    let width = usize::from(rect.width);
    match target {
        HitTarget::TaskInput => {
            app.focus = Focus::TaskInput;
            let start = app.form.text.window_start_col(width);
            app.form.text.set_cursor_col(start + col);
        }
        HitTarget::Category => {
            app.focus = Focus::Category;
            app.form.next_category();
        }
        HitTarget::AddButton => {
            app.focus = Focus::AddButton;
            app.submit_form();
        }
        HitTarget::Row(id) => {
            app.select(&id);
            app.items.refocus(&id);
        }
        HitTarget::Checkbox(id) => {
            app.select(&id);
            app.toggle(&id);
        }
        HitTarget::EditField(id) => {
            app.select(&id);
            app.items.refocus(&id);
            if let Some(draft) = app.items.draft_mut(&id) {
                let start = draft.window_start_col(width);
                draft.set_cursor_col(start + col);
            }
        }
        HitTarget::EditButton(id) => {
            app.select(&id);
            app.activate_edit(&id);
        }
        HitTarget::DeleteButton(id) => app.delete(&id),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{test_app, type_str};
    use super::*;
    use crate::tui::render::test_helpers::render_to_string;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn click(app: &mut App, column: u16, row: u16, now: Instant) {
        handle_click(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
            now,
        );
    }

    /// One row at y=5: checkbox, field, edit, del
    fn layout_row(app: &mut App, id: &str) {
        app.hit_regions = vec![
            (Rect::new(0, 5, 80, 1), HitTarget::Row(id.into())),
            (Rect::new(1, 5, 3, 1), HitTarget::Checkbox(id.into())),
            (Rect::new(5, 5, 50, 1), HitTarget::EditField(id.into())),
            (Rect::new(68, 5, 4, 1), HitTarget::EditButton(id.into())),
            (Rect::new(74, 5, 3, 1), HitTarget::DeleteButton(id.into())),
            (Rect::new(7, 2, 40, 1), HitTarget::TaskInput),
        ];
    }

    #[test]
    fn click_edit_twice_commits_once() {
        let t0 = Instant::now();
        let (mut app, backend) = test_app();
        let id = app.store.add("a", None);
        layout_row(&mut app, &id);

        click(&mut app, 69, 5, t0);
        assert!(app.items.has_focus(&id));
        type_str(&mut app, "b", t0);
        let writes = backend.write_count();

        // The click on "edit" blurs first, then activates
        click(&mut app, 69, 5, t0 + Duration::from_millis(5));
        assert_eq!(app.store.get(&id).unwrap().text, "ab");
        assert_eq!(backend.write_count(), writes + 1);
        app.tick(t0 + Duration::from_secs(1));
        assert_eq!(backend.write_count(), writes + 1);
    }

    #[test]
    fn click_elsewhere_commits_after_delay() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        let id = app.store.add("a", None);
        layout_row(&mut app, &id);

        click(&mut app, 69, 5, t0);
        type_str(&mut app, "!", t0);
        click(&mut app, 10, 2, t0);
        assert_eq!(app.focus, Focus::TaskInput);
        assert!(app.items.is_editing(&id));

        app.tick(t0 + Duration::from_millis(100));
        assert_eq!(app.store.get(&id).unwrap().text, "a!");
        assert!(!app.items.is_editing(&id));
    }

    #[test]
    fn click_inside_field_keeps_focus_and_moves_cursor() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        let id = app.store.add("abcdef", None);
        layout_row(&mut app, &id);

        click(&mut app, 69, 5, t0);
        click(&mut app, 7, 5, t0);
        assert!(app.items.has_focus(&id));
        assert_eq!(app.items.draft(&id).unwrap().cursor(), 2);
        assert!(app.items.next_deadline().is_none());
    }

    #[test]
    fn click_back_into_field_disarms_pending_commit() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        let id = app.store.add("a", None);
        layout_row(&mut app, &id);

        click(&mut app, 69, 5, t0);
        click(&mut app, 30, 9, t0);
        assert!(!app.items.has_focus(&id));
        click(&mut app, 6, 5, t0 + Duration::from_millis(20));
        assert!(app.items.has_focus(&id));
        app.tick(t0 + Duration::from_secs(1));
        assert!(app.items.is_editing(&id));
    }

    #[test]
    fn click_in_scrolled_draft_lands_on_visible_character() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        let id = app.store.add("abcdefghijklmnopqrstuvwxyz0123456789", None);
        app.focus = Focus::List;
        app.activate_edit(&id);

        // 40 cells leave a 24-cell field, so the draft is scrolled to 'n'
        let out = render_to_string(40, 10, &mut app);
        assert!(out.lines().nth(4).unwrap().starts_with(" [ ] nopqrstuvwxyz0123456789"));

        click(&mut app, 5, 4, t0);
        let draft = app.items.draft(&id).unwrap();
        assert_eq!(&draft.value()[draft.cursor()..draft.cursor() + 1], "n");
        assert!(app.items.has_focus(&id));
    }

    #[test]
    fn click_in_scrolled_form_field_lands_on_visible_character() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        app.form.text.insert_str("abcdefghijklmnopqrstuvwxyz0123");
        render_to_string(40, 10, &mut app);
        let (field, _) = app
            .hit_regions
            .iter()
            .find(|(_, t)| *t == HitTarget::TaskInput)
            .cloned()
            .unwrap();
        let start = app.form.text.window_start_col(usize::from(field.width));
        assert!(start > 0);

        click(&mut app, field.x + 1, field.y, t0);
        assert_eq!(app.form.text.cursor(), start + 1);
    }

    #[test]
    fn click_on_editing_row_keeps_field_focused() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        let id = app.store.add("a", None);
        layout_row(&mut app, &id);

        click(&mut app, 69, 5, t0);
        // Gap between the field and the edit button
        click(&mut app, 60, 5, t0);
        assert!(app.items.has_focus(&id));
        assert!(app.items.next_deadline().is_none());

        // A row click after leaving the field disarms the pending commit
        click(&mut app, 30, 9, t0);
        assert!(app.items.next_deadline().is_some());
        click(&mut app, 60, 5, t0 + Duration::from_millis(20));
        assert!(app.items.has_focus(&id));
        app.tick(t0 + Duration::from_secs(1));
        assert!(app.items.is_editing(&id));
    }

    #[test]
    fn checkbox_click_toggles_without_ending_display() {
        let t0 = Instant::now();
        let (mut app, _backend) = test_app();
        let id = app.store.add("a", None);
        layout_row(&mut app, &id);

        click(&mut app, 2, 5, t0);
        assert!(app.store.get(&id).unwrap().completed);
        assert!(!app.items.is_editing(&id));
    }

    #[test]
    fn delete_click_while_editing_discards_edit() {
        let t0 = Instant::now();
        let (mut app, backend) = test_app();
        let id = app.store.add("a", None);
        layout_row(&mut app, &id);

        click(&mut app, 69, 5, t0);
        type_str(&mut app, "zzz", t0);
        click(&mut app, 75, 5, t0);
        assert!(app.store.is_empty());
        let writes = backend.write_count();
        app.tick(t0 + Duration::from_secs(1));
        assert_eq!(backend.write_count(), writes);
        assert_eq!(app.items.editing_count(), 0);
    }
}
