use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Focus, HitTarget};

use super::helpers::{checkbox_symbol, display_width, input_window, truncate_to_width};

const EDIT_LABEL: &str = "edit";
const SAVE_LABEL: &str = "save";
const DELETE_LABEL: &str = "del";
/// Cells right of the text column: " edit  del "
const ACTIONS_WIDTH: u16 = 11;
/// Cells left of the text column: " [ ] "
const TEXT_START: u16 = 5;
/// Room kept for a category tag
const TAG_WIDTH: u16 = 8;

/// Render the task list, one row per task
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    if area.height == 0 {
        return;
    }

    let tasks: Vec<Task> = app.store.tasks().to_vec();
    if tasks.is_empty() {
        let line = Line::from(Span::styled(
            " No tasks",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    // Keep the cursor in view
    let visible = usize::from(area.height);
    app.cursor = app.cursor.min(tasks.len() - 1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible {
        app.scroll_offset = app.cursor + 1 - visible;
    }
    app.scroll_offset = app.scroll_offset.min(tasks.len().saturating_sub(visible));

    for (row, (idx, task)) in tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible)
        .enumerate()
    {
        let row_area = Rect {
            y: area.y + row as u16,
            height: 1,
            ..area
        };
        render_row(frame, app, task, idx == app.cursor, row_area);
    }
}

fn render_row(frame: &mut Frame, app: &mut App, task: &Task, selected: bool, area: Rect) {
    let theme = &app.theme;
    let row_bg = if selected && app.focus == Focus::List {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(row_bg);
    let editing = app.items.is_editing(&task.id);
    let field_has_focus = selected && app.focus == Focus::List && app.items.has_focus(&task.id);

    let text_width = area.width.saturating_sub(TEXT_START + ACTIONS_WIDTH);
    let mut spans: Vec<Span> = Vec::new();

    // Checkbox
    let check_fg = if task.completed { theme.green } else { theme.text };
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(
        checkbox_symbol(task.completed),
        base.fg(check_fg),
    ));
    spans.push(Span::styled(" ", base));

    // Text column: the draft while editing, otherwise text and category tag
    let mut used = 0usize;
    let mut cursor_at = None;
    if let Some(draft) = app.items.draft(&task.id) {
        let (shown, cursor) = input_window(draft, usize::from(text_width));
        used = display_width(&shown);
        spans.push(Span::styled(
            shown,
            Style::default().fg(theme.text_bright).bg(theme.input_bg),
        ));
        spans.push(Span::styled(
            " ".repeat(usize::from(text_width).saturating_sub(used)),
            Style::default().bg(theme.input_bg),
        ));
        used = usize::from(text_width);
        if field_has_focus {
            cursor_at = Some(cursor as u16);
        }
    } else {
        let tag = task.category.map(|c| format!(" {}", c.label()));
        let tag_room = tag
            .as_ref()
            .map_or(0, |t| display_width(t).min(usize::from(TAG_WIDTH)));
        let budget = usize::from(text_width).saturating_sub(tag_room);
        let text = truncate_to_width(&task.text, budget);
        used += display_width(&text);

        let mut text_style = base.fg(if task.completed {
            theme.dim
        } else {
            theme.text_bright
        });
        if task.completed {
            text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(text, text_style));

        if let (Some(tag), Some(category)) = (tag, task.category) {
            let tag = truncate_to_width(&tag, tag_room);
            used += display_width(&tag);
            spans.push(Span::styled(tag, base.fg(theme.category_color(category))));
        }
    }
    spans.push(Span::styled(
        " ".repeat(usize::from(text_width).saturating_sub(used)),
        base,
    ));

    // Actions
    let edit_label = if editing { SAVE_LABEL } else { EDIT_LABEL };
    let action_style = base.fg(if selected { theme.text } else { theme.dim });
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(edit_label, action_style));
    spans.push(Span::styled("  ", base));
    spans.push(Span::styled(DELETE_LABEL, base.fg(theme.red)));
    spans.push(Span::styled(" ", base));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);

    let text_x = area.x + TEXT_START;
    if let Some(offset) = cursor_at
        && text_width > 0
    {
        frame.set_cursor_position(Position::new(text_x + offset, area.y));
    }

    // Click targets, row first so the controls sit on top
    let id = &task.id;
    let actions_x = text_x + text_width;
    let regions = [
        (area, HitTarget::Row(id.clone())),
        (
            Rect::new(area.x + 1, area.y, 3, 1),
            HitTarget::Checkbox(id.clone()),
        ),
        (
            Rect::new(text_x, area.y, text_width, 1),
            HitTarget::EditField(id.clone()),
        ),
        (
            Rect::new(actions_x + 1, area.y, EDIT_LABEL.len() as u16, 1),
            HitTarget::EditButton(id.clone()),
        ),
        (
            Rect::new(actions_x + 7, area.y, DELETE_LABEL.len() as u16, 1),
            HitTarget::DeleteButton(id.clone()),
        ),
    ];
    for (rect, target) in regions {
        if rect.right() <= area.right() {
            app.hit_regions.push((rect, target));
        }
    }
}
