//! Per-row editing state for the task list.
//!
//! Every row is either `Display` or `Editing`. Only editing rows are stored,
//! keyed by task id; a missing entry means `Display`. The deferred focus-loss
//! commit lives inside the editing state, so leaving `Editing` by any path
//! drops it and a session can commit at most once.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::deferred::Deferred;
use super::text_input::TextInput;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemState {
    #[default]
    Display,
    Editing {
        draft: TextInput,
        /// Armed when the field loses focus; fires the commit when due
        pending_blur: Option<Deferred>,
    },
}

impl ItemState {
    pub fn is_editing(&self) -> bool {
        matches!(self, ItemState::Editing { .. })
    }
}

/// Outcome of an edit-affordance activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Display → Editing
    Started,
    /// Editing → Display; carries the draft to commit
    Finished(String),
}

/// Editing state for all rows
#[derive(Debug, Default)]
pub struct ItemStates {
    states: HashMap<String, ItemState>,
}

impl ItemStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &str) -> Option<&ItemState> {
        self.states.get(id)
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.states.get(id).is_some_and(ItemState::is_editing)
    }

    /// Editing and the field still has focus (no commit armed)
    pub fn has_focus(&self, id: &str) -> bool {
        matches!(
            self.states.get(id),
            Some(ItemState::Editing {
                pending_blur: None,
                ..
            })
        )
    }

    pub fn draft(&self, id: &str) -> Option<&TextInput> {
        match self.states.get(id) {
            Some(ItemState::Editing { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self, id: &str) -> Option<&mut TextInput> {
        match self.states.get_mut(id) {
            Some(ItemState::Editing { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    /// Edit affordance. From Display, start editing with `current_text`
    /// (a fresh draft every session). From Editing, cancel any armed commit
    /// and finish the session.
    pub fn activate_edit(&mut self, id: &str, current_text: &str) -> Activation {
        match self.states.remove(id) {
            Some(ItemState::Editing { draft, .. }) => {
                Activation::Finished(draft.value().to_string())
            }
            _ => {
                self.states.insert(
                    id.to_string(),
                    ItemState::Editing {
                        draft: TextInput::with_value(current_text),
                        pending_blur: None,
                    },
                );
                Activation::Started
            }
        }
    }

    /// The editing field lost focus: arm the deferred commit.
    /// Already-armed sessions keep their original deadline.
    pub fn focus_lost(&mut self, id: &str, now: Instant, delay: Duration) {
        if let Some(ItemState::Editing { pending_blur, .. }) = self.states.get_mut(id)
            && pending_blur.is_none()
        {
            *pending_blur = Some(Deferred::arm(now, delay));
        }
    }

    /// The field got focus back before the commit fired: disarm it
    pub fn refocus(&mut self, id: &str) {
        if let Some(ItemState::Editing { pending_blur, .. }) = self.states.get_mut(id) {
            *pending_blur = None;
        }
    }

    /// Remove and return every session whose deferred commit is due,
    /// as `(id, draft)` pairs
    pub fn take_due(&mut self, now: Instant) -> Vec<(String, String)> {
        let due: Vec<String> = self
            .states
            .iter()
            .filter(|(_, state)| {
                matches!(state, ItemState::Editing { pending_blur: Some(d), .. } if d.is_due(now))
            })
            .map(|(id, _)| id.clone())
            .collect();

        due.into_iter()
            .filter_map(|id| match self.states.remove(&id) {
                Some(ItemState::Editing { draft, .. }) => Some((id, draft.value().to_string())),
                _ => None,
            })
            .collect()
    }

    /// Earliest armed deadline, for the event loop's poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.states
            .values()
            .filter_map(|state| match state {
                ItemState::Editing {
                    pending_blur: Some(d),
                    ..
                } => Some(d.due_at()),
                _ => None,
            })
            .min()
    }

    /// Drop a row's state without committing (row deleted)
    pub fn discard(&mut self, id: &str) {
        self.states.remove(id);
    }

    /// Drop state for rows that no longer exist
    pub fn retain(&mut self, mut exists: impl FnMut(&str) -> bool) {
        self.states.retain(|id, _| exists(id));
    }

    pub fn editing_count(&self) -> usize {
        self.states.values().filter(|s| s.is_editing()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn activation_cycles_display_and_editing() {
        let mut items = ItemStates::new();
        assert!(!items.is_editing("a"));
        assert_eq!(items.activate_edit("a", "Buy milk"), Activation::Started);
        assert!(items.has_focus("a"));
        assert_eq!(items.draft("a").unwrap().value(), "Buy milk");

        items.draft_mut("a").unwrap().insert_str(" today");
        assert_eq!(
            items.activate_edit("a", "Buy milk"),
            Activation::Finished("Buy milk today".into())
        );
        assert!(items.state("a").is_none());
    }

    #[test]
    fn new_session_starts_from_current_text() {
        let mut items = ItemStates::new();
        items.activate_edit("a", "old");
        items.draft_mut("a").unwrap().insert_str(" typed");
        items.activate_edit("a", "old");
        items.activate_edit("a", "stored now");
        assert_eq!(items.draft("a").unwrap().value(), "stored now");
    }

    #[test]
    fn blur_commit_fires_once_after_delay() {
        let t0 = Instant::now();
        let mut items = ItemStates::new();
        items.activate_edit("a", "x");
        items.focus_lost("a", t0, DELAY);
        assert!(items.is_editing("a"));
        assert!(!items.has_focus("a"));
        assert_eq!(items.next_deadline(), Some(t0 + DELAY));

        assert!(items.take_due(t0 + ms(50)).is_empty());
        assert_eq!(items.take_due(t0 + ms(100)), vec![("a".into(), "x".into())]);
        assert!(items.take_due(t0 + ms(500)).is_empty());
        assert!(items.next_deadline().is_none());
    }

    #[test]
    fn activation_supersedes_armed_blur() {
        let t0 = Instant::now();
        let mut items = ItemStates::new();
        items.activate_edit("a", "x");
        items.draft_mut("a").unwrap().insert_char('y');
        items.focus_lost("a", t0, DELAY);

        assert_eq!(items.activate_edit("a", "x"), Activation::Finished("xy".into()));
        assert!(items.take_due(t0 + ms(200)).is_empty());
    }

    #[test]
    fn repeated_focus_loss_keeps_first_deadline() {
        let t0 = Instant::now();
        let mut items = ItemStates::new();
        items.activate_edit("a", "x");
        items.focus_lost("a", t0, DELAY);
        items.focus_lost("a", t0 + ms(80), DELAY);
        assert_eq!(items.take_due(t0 + ms(100)).len(), 1);
    }

    #[test]
    fn refocus_disarms() {
        let t0 = Instant::now();
        let mut items = ItemStates::new();
        items.activate_edit("a", "x");
        items.focus_lost("a", t0, DELAY);
        items.refocus("a");
        assert!(items.has_focus("a"));
        assert!(items.take_due(t0 + ms(300)).is_empty());
        assert!(items.is_editing("a"));
    }

    #[test]
    fn discard_drops_armed_commit() {
        let t0 = Instant::now();
        let mut items = ItemStates::new();
        items.activate_edit("a", "x");
        items.activate_edit("b", "y");
        items.focus_lost("a", t0, DELAY);
        items.discard("a");
        assert!(items.take_due(t0 + ms(300)).is_empty());
        assert_eq!(items.editing_count(), 1);

        items.retain(|id| id != "b");
        assert_eq!(items.editing_count(), 0);
    }

    #[test]
    fn focus_loss_on_display_row_is_ignored() {
        let t0 = Instant::now();
        let mut items = ItemStates::new();
        items.focus_lost("a", t0, DELAY);
        assert!(items.state("a").is_none());
        assert!(items.next_deadline().is_none());
    }
}
