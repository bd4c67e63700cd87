use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::debug;

use crate::model::UiConfig;
use crate::ops::TodoStore;

use super::form::AddForm;
use super::input;
use super::item::{Activation, ItemStates};
use super::render;
use super::theme::Theme;

/// Redraw interval when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TaskInput,
    Category,
    AddButton,
    List,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::TaskInput => Focus::Category,
            Focus::Category => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::TaskInput,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::TaskInput => Focus::List,
            Focus::Category => Focus::TaskInput,
            Focus::AddButton => Focus::Category,
            Focus::List => Focus::AddButton,
        }
    }

    pub fn in_form(self) -> bool {
        !matches!(self, Focus::List)
    }
}

/// Clickable region kinds, recorded during render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    TaskInput,
    Category,
    AddButton,
    Row(String),
    Checkbox(String),
    EditField(String),
    EditButton(String),
    DeleteButton(String),
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    pub form: AddForm,
    pub items: ItemStates,
    pub focus: Focus,
    /// Selected row index in the list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub theme: Theme,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub should_quit: bool,
    /// Debounce for focus-loss commits
    pub blur_delay: Duration,
    /// Click regions from the last frame; later entries sit on top
    pub hit_regions: Vec<(Rect, HitTarget)>,
}

impl App {
    pub fn new(store: TodoStore, ui: &UiConfig) -> Self {
        App {
            store,
            form: AddForm::new(),
            items: ItemStates::new(),
            focus: Focus::TaskInput,
            cursor: 0,
            scroll_offset: 0,
            theme: Theme::from_config(ui),
            show_help: false,
            show_key_hints: ui.show_key_hints,
            should_quit: false,
            blur_delay: Duration::from_millis(ui.blur_commit_delay_ms),
            hit_regions: Vec::new(),
        }
    }

    /// Id of the selected row
    pub fn selected_id(&self) -> Option<String> {
        self.store.tasks().get(self.cursor).map(|t| t.id.clone())
    }

    /// Id of the row whose edit field currently has keyboard focus
    pub fn focused_edit_id(&self) -> Option<String> {
        if self.focus != Focus::List {
            return None;
        }
        self.selected_id().filter(|id| self.items.has_focus(id))
    }

    /// Take focus away from the editing field, if one has it
    pub fn blur_focused_edit(&mut self, now: Instant) {
        if let Some(id) = self.focused_edit_id() {
            debug!(%id, "edit field lost focus");
            self.items.focus_lost(&id, now, self.blur_delay);
        }
    }

    pub fn set_focus(&mut self, focus: Focus, now: Instant) {
        if focus != self.focus {
            self.blur_focused_edit(now);
            self.focus = focus;
        }
    }

    /// Move the list selection by `delta` rows (clamped)
    pub fn move_cursor(&mut self, delta: isize, now: Instant) {
        self.blur_focused_edit(now);
        let len = self.store.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    /// Select a row by id (mouse)
    pub fn select(&mut self, id: &str) {
        if let Some(idx) = self.store.tasks().iter().position(|t| t.id == id) {
            self.cursor = idx;
            self.focus = Focus::List;
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    /// Submit the add form with its current values, then reset it
    pub fn submit_form(&mut self) {
        let (text, category) = self.form.take();
        let id = self.store.add(&text, category);
        debug!(%id, "submitted add form");
    }

    /// Edit affordance for a row
    pub fn activate_edit(&mut self, id: &str) {
        let Some(current) = self.store.get(id).map(|t| t.text.clone()) else {
            return;
        };
        if let Activation::Finished(draft) = self.items.activate_edit(id, &current) {
            self.commit_edit(id, &draft);
        }
    }

    /// Write a finished draft back to the store if it differs from the stored text
    fn commit_edit(&mut self, id: &str, draft: &str) {
        let differs = self.store.get(id).is_some_and(|t| t.text != draft);
        if differs {
            self.store.set_text(id, draft);
        }
        debug!(%id, changed = differs, "committed edit");
    }

    pub fn toggle(&mut self, id: &str) {
        self.store.toggle_completed(id);
    }

    pub fn delete(&mut self, id: &str) {
        self.store.remove(id);
        self.items.discard(id);
        self.clamp_cursor();
    }

    /// Fire due focus-loss commits and drop state for vanished rows
    pub fn tick(&mut self, now: Instant) {
        let store = &self.store;
        self.items.retain(|id| store.contains(id));
        for (id, draft) in self.items.take_due(now) {
            self.commit_edit(&id, &draft);
        }
    }

    /// Finish every open editing session (the whole UI is closing).
    pub fn finish_all_edits(&mut self) {
        let ids: Vec<String> = self
            .store
            .tasks()
            .iter()
            .filter(|t| self.items.is_editing(&t.id))
            .map(|t| t.id.clone())
            .collect();
        for id in ids {
            self.activate_edit(&id);
        }
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.items.next_deadline() {
            Some(due) => due.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Topmost click target at a terminal cell
    pub fn hit_test(&self, col: u16, row: u16) -> Option<(Rect, HitTarget)> {
        self.hit_regions
            .iter()
            .rev()
            .find(|(rect, _)| {
                col >= rect.x
                    && col < rect.x.saturating_add(rect.width)
                    && row >= rect.y
                    && row < rect.y.saturating_add(rect.height)
            })
            .cloned()
    }
}

/// Run the TUI application
pub fn run(store: TodoStore, ui: &UiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(store, ui);
    let mouse = ui.mouse;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableFocusChange
    )?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableFocusChange,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    app.finish_all_edits();

    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            let now = Instant::now();
            // Due commits land before the event that follows them
            app.tick(now);
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key, now)
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, now),
                Event::Paste(text) => input::handle_paste(app, &text),
                Event::FocusLost => app.blur_focused_edit(now),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
