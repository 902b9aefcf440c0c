use serde::Serialize;

/// One row of the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionOption {
    /// A candidate title from the active category
    Existing { title: String },
    /// Synthetic "use my typed text" entry
    Create { raw_text: String, label: String },
}

impl SuggestionOption {
    pub fn existing(title: impl Into<String>) -> Self {
        SuggestionOption::Existing {
            title: title.into(),
        }
    }

    /// Build the create entry; the label is `Add "<raw_text>"`.
    pub fn create(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let label = format!("Add \"{}\"", raw_text);
        SuggestionOption::Create { raw_text, label }
    }

    /// Text shown in the dropdown
    pub fn label(&self) -> &str {
        match self {
            SuggestionOption::Existing { title } => title,
            SuggestionOption::Create { label, .. } => label,
        }
    }

    /// Text placed in the title field when this option is picked
    pub fn value(&self) -> &str {
        match self {
            SuggestionOption::Existing { title } => title,
            SuggestionOption::Create { raw_text, .. } => raw_text,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, SuggestionOption::Create { .. })
    }
}
