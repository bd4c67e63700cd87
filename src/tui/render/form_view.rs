use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus, HitTarget};

use super::helpers::{display_width, input_window};

const CATEGORY_WIDTH: u16 = 12;
const BUTTON_LABEL: &str = "[ Add ]";

/// Render the add form: text field, category selector and add button
pub fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let border_color = if app.focus.in_form() {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(
            " New task ",
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(CATEGORY_WIDTH),
            Constraint::Length(BUTTON_LABEL.len() as u16 + 2),
        ])
        .split(inner);

    render_text_field(frame, app, cols[0]);
    render_category(frame, app, cols[1]);
    render_add_button(frame, app, cols[2]);
}

fn render_text_field(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::TaskInput;
    let field = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    let style = Style::default().fg(app.theme.text_bright).bg(app.theme.input_bg);

    let line = if app.form.text.is_empty() && !focused {
        Line::from(Span::styled(
            "What needs doing?",
            Style::default().fg(app.theme.dim).bg(app.theme.input_bg),
        ))
    } else {
        let (shown, cursor) = input_window(&app.form.text, usize::from(field.width));
        if focused && field.width > 0 {
            frame.set_cursor_position(Position::new(field.x + cursor as u16, field.y));
        }
        Line::from(Span::styled(shown, style))
    };
    frame.render_widget(Paragraph::new(line).style(style), field);
    app.hit_regions.push((field, HitTarget::TaskInput));
}

fn render_category(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Category;
    let label = app.form.category.map_or("none", |c| c.label());
    let fg = match app.form.category {
        Some(c) => app.theme.category_color(c),
        None => app.theme.dim,
    };
    let mut style = Style::default().fg(fg).bg(app.theme.background);
    if focused {
        style = style.bg(app.theme.selection_bg).add_modifier(Modifier::BOLD);
    }

    let text = format!("\u{2039} {} \u{203A}", label);
    let width = (display_width(&text) as u16).min(area.width);
    let rect = Rect { width, ..area };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
    app.hit_regions.push((rect, HitTarget::Category));
}

fn render_add_button(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::AddButton;
    let mut style = Style::default().fg(app.theme.text).bg(app.theme.background);
    if focused {
        style = style
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD);
    }
    let rect = Rect {
        x: area.x + 1,
        width: (BUTTON_LABEL.len() as u16).min(area.width.saturating_sub(1)),
        ..area
    };
    frame.render_widget(Paragraph::new(Span::styled(BUTTON_LABEL, style)), rect);
    app.hit_regions.push((rect, HitTarget::AddButton));
}
