/// The title currently held by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Title {
    /// Nothing typed or picked yet
    #[default]
    None,
    /// A candidate picked from the registry
    Existing(String),
    /// Text typed by the user (possibly empty after clearing the field)
    FreeText(String),
}

/// Where the selection state machine currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    NoSelection,
    FreeTyping,
    Committed,
}

/// Category plus title for the step being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub active_category: String,
    pub title: Title,
}

impl SelectionState {
    pub fn new(active_category: impl Into<String>) -> Self {
        SelectionState {
            active_category: active_category.into(),
            title: Title::None,
        }
    }

    /// The registry title, if one was picked
    pub fn chosen_title(&self) -> Option<&str> {
        match &self.title {
            Title::Existing(t) => Some(t),
            _ => None,
        }
    }

    /// The free text, or `""` when a registry title is active
    pub fn free_text(&self) -> &str {
        match &self.title {
            Title::FreeText(t) => t,
            _ => "",
        }
    }

    /// Chosen title if set, else non-empty free text, else nothing.
    pub fn resolved_title(&self) -> Option<&str> {
        match &self.title {
            Title::Existing(t) => Some(t),
            Title::FreeText(t) if !t.is_empty() => Some(t),
            _ => None,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match self.title {
            Title::None => SelectionPhase::NoSelection,
            Title::FreeText(_) => SelectionPhase::FreeTyping,
            Title::Existing(_) => SelectionPhase::Committed,
        }
    }
}
