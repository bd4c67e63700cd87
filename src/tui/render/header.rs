use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Title line with task counts
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let total = app.store.len();
    let done = app.store.tasks().iter().filter(|t| t.completed).count();

    let summary = match total {
        0 => "no tasks".to_string(),
        1 => format!("1 task, {} done", done),
        n => format!("{} tasks, {} done", n, done),
    };

    let line = Line::from(vec![
        Span::styled(
            " jot ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(summary, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
