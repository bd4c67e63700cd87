use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

use super::helpers::{display_width, truncate_to_width};

/// Key hints for whichever control has focus
fn hints(app: &App) -> &'static str {
    if app.focused_edit_id().is_some() {
        return "Enter save  Esc leave  ^T toggle  ^D delete";
    }
    match app.focus {
        Focus::TaskInput => "Enter add  Tab next",
        Focus::Category => "\u{2190}\u{2192} category  Enter add  Tab next",
        Focus::AddButton => "Space/Enter add  Tab next",
        Focus::List => "Space toggle  e edit  d delete  a add  ? help  q quit",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut spans = Vec::new();

    // Editing sessions waiting on their deferred save
    let open = app.items.editing_count();
    let left = if open > 0 {
        format!(" editing {}", open)
    } else {
        String::new()
    };
    let left_width = display_width(&left);
    spans.push(Span::styled(left, Style::default().fg(app.theme.highlight).bg(bg)));

    if app.show_key_hints {
        let room = width.saturating_sub(left_width + 2);
        let hint = truncate_to_width(hints(app), room);
        let hint_width = display_width(&hint);
        if hint_width > 0 {
            let padding = width - left_width - hint_width - 1;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{render_to_string, test_app};
    use crate::tui::app::Focus;

    fn last_line(out: &str) -> &str {
        out.lines().last().unwrap_or("")
    }

    #[test]
    fn hints_follow_focus() {
        let (mut app, _) = test_app();
        app.store.add("a", None);
        let out = render_to_string(80, 10, &mut app);
        assert!(last_line(&out).ends_with("Enter add  Tab next"));

        app.focus = Focus::List;
        let out = render_to_string(80, 10, &mut app);
        assert!(last_line(&out).contains("e edit"));

        let id = app.selected_id().unwrap();
        app.activate_edit(&id);
        let out = render_to_string(80, 10, &mut app);
        assert!(last_line(&out).starts_with(" editing 1"));
        assert!(last_line(&out).contains("Esc leave"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let (mut app, _) = test_app();
        app.store.add("a", None);
        app.show_key_hints = false;
        let out = render_to_string(80, 10, &mut app);
        assert!(!out.contains("Tab next"));
    }
}
