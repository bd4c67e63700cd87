use serde::{Deserialize, Serialize};

/// Fixed set of task categories offered by the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Home,
    Work,
    Other,
}

impl Category {
    /// All categories in the order the form cycles through them
    pub const ALL: [Category; 3] = [Category::Home, Category::Work, Category::Other];

    /// The label stored on disk and shown in the tag
    pub fn label(self) -> &'static str {
        match self {
            Category::Home => "Home",
            Category::Work => "Work",
            Category::Other => "Other",
        }
    }

    /// Parse a stored label (case-insensitive). Empty or unknown labels yield None.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Next entry in the none → Home → Work → Other → none cycle
    pub fn cycle_next(current: Option<Category>) -> Option<Category> {
        match current {
            None => Some(Category::Home),
            Some(Category::Home) => Some(Category::Work),
            Some(Category::Work) => Some(Category::Other),
            Some(Category::Other) => None,
        }
    }

    /// Previous entry in the same cycle
    pub fn cycle_prev(current: Option<Category>) -> Option<Category> {
        match current {
            None => Some(Category::Other),
            Some(Category::Home) => None,
            Some(Category::Work) => Some(Category::Home),
            Some(Category::Other) => Some(Category::Work),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single to-do item as held by the store and persisted to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique id, assigned at creation and never changed
    pub id: String,
    /// Task text (may be empty)
    #[serde(default)]
    pub text: String,
    /// Category tag, written as "" when absent
    #[serde(default, with = "category_label")]
    pub category: Option<Category>,
    /// Completion flag, only ever toggled
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(id: String, text: String, category: Option<Category>) -> Self {
        Task {
            id,
            text,
            category,
            completed: false,
        }
    }
}

/// Serde adapter: `Option<Category>` <-> label string, with "" meaning none.
mod category_label {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Category;

    pub fn serialize<S: Serializer>(value: &Option<Category>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map_or("", Category::label))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Category>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.as_deref().and_then(Category::from_label))
    }
}
