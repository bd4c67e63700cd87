use crate::model::task::Category;

use super::text_input::TextInput;

/// Draft state of the add form
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub text: TextInput,
    pub category: Option<Category>,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_category(&mut self) {
        self.category = Category::cycle_next(self.category);
    }

    pub fn prev_category(&mut self) {
        self.category = Category::cycle_prev(self.category);
    }

    /// Hand out the current values and reset both fields
    pub fn take(&mut self) -> (String, Option<Category>) {
        let text = self.text.value().to_string();
        let category = self.category.take();
        self.text.clear();
        (text, category)
    }
}
