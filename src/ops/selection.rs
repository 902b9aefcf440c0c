use std::sync::Arc;

use tracing::debug;

use crate::model::{
    CategoryRegistry, SelectionPhase, SelectionState, StepNavigator, StepOutput, SuggestionOption,
    Title, WordCount, WordCountBounds,
};
use crate::ops::suggest;

/// Error type for checked selection operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("'{title}' is not a title in category '{category}'")]
    NotACandidate { title: String, category: String },
}

/// Owns the state of the content-type step.
///
/// All mutation goes through the methods below; the view layer re-reads
/// the state after each call.
#[derive(Debug, Clone)]
pub struct SelectionController {
    registry: Arc<CategoryRegistry>,
    state: SelectionState,
    word_count: WordCount,
}

impl SelectionController {
    /// Fresh step: `initial_category`, default word count, no title.
    pub fn new(
        registry: Arc<CategoryRegistry>,
        initial_category: &str,
        bounds: WordCountBounds,
    ) -> Self {
        SelectionController {
            registry,
            state: SelectionState::new(initial_category),
            word_count: WordCount::new(bounds),
        }
    }

    /// Fresh step on the first registry category with default bounds
    pub fn with_registry(registry: Arc<CategoryRegistry>) -> Self {
        let first = registry.first_id().unwrap_or_default().to_string();
        Self::new(registry, &first, WordCountBounds::default())
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn active_category(&self) -> &str {
        &self.state.active_category
    }

    pub fn phase(&self) -> SelectionPhase {
        self.state.phase()
    }

    /// Switch category. Any title from the previous category is dropped.
    pub fn select_category(&mut self, id: &str) {
        if !self.registry.contains(id) {
            debug!(category = id, "selecting unknown category");
        }
        self.state.active_category = id.to_string();
        self.state.title = Title::None;
        debug!(category = id, "category selected");
    }

    /// Commit a title picked from the filtered suggestions.
    pub fn choose_existing_title(&mut self, title: &str) {
        self.state.title = Title::Existing(title.to_string());
        debug!(title, "existing title chosen");
    }

    /// Like `choose_existing_title`, but only for a candidate of the active
    /// category. The state is left untouched on error.
    pub fn choose_candidate(&mut self, title: &str) -> Result<(), SelectionError> {
        if !self.candidates().iter().any(|c| c == title) {
            return Err(SelectionError::NotACandidate {
                title: title.to_string(),
                category: self.state.active_category.clone(),
            });
        }
        self.choose_existing_title(title);
        Ok(())
    }

    /// Record raw input from the title field, including an empty field.
    pub fn enter_free_text(&mut self, text: &str) {
        self.state.title = Title::FreeText(text.to_string());
    }

    /// Commit the synthetic create option; same effect as typing the text.
    pub fn accept_create_option(&mut self, raw_text: &str) {
        self.enter_free_text(raw_text);
        debug!(title = raw_text, "create option accepted");
    }

    /// Dispatch a picked dropdown row to the matching operation
    pub fn pick_suggestion(&mut self, option: &SuggestionOption) {
        match option {
            SuggestionOption::Existing { title } => self.choose_existing_title(title),
            SuggestionOption::Create { raw_text, .. } => self.accept_create_option(raw_text),
        }
    }

    pub fn resolved_title(&self) -> Option<&str> {
        self.state.resolved_title()
    }

    /// Candidates of the active category (empty for unknown ids)
    pub fn candidates(&self) -> &[String] {
        self.registry.candidates(&self.state.active_category)
    }

    /// Visible dropdown rows for `query` in the active category
    pub fn suggestions(&self, query: &str) -> Vec<SuggestionOption> {
        suggest::filter(self.candidates(), query)
    }

    pub fn word_count(&self) -> u32 {
        self.word_count.value()
    }

    pub fn word_count_bounds(&self) -> WordCountBounds {
        self.word_count.bounds()
    }

    /// Slider position of the current value
    pub fn word_count_position(&self) -> u32 {
        self.word_count.position()
    }

    /// Store a word count, clamped and rounded onto the slider.
    pub fn set_word_count(&mut self, value: u32) -> u32 {
        let stored = self.word_count.set(value);
        if stored != value {
            debug!(requested = value, stored, "word count normalized");
        }
        stored
    }

    /// Move the slider by `steps` positions
    pub fn step_word_count(&mut self, steps: i32) -> u32 {
        self.word_count.step_by(steps)
    }

    /// Read-only snapshot of what "Next" would hand off
    pub fn snapshot(&self) -> StepOutput {
        StepOutput {
            category: self.state.active_category.clone(),
            title: self.resolved_title().map(str::to_string),
            word_count: self.word_count.value(),
        }
    }

    pub fn go_next(&self, navigator: &mut impl StepNavigator) {
        let output = self.snapshot();
        debug!(
            category = %output.category,
            title = ?output.title,
            word_count = output.word_count,
            "advancing to next step"
        );
        navigator.next(output);
    }

    pub fn go_back(&self, navigator: &mut impl StepNavigator) {
        debug!("leaving step");
        navigator.back();
    }
}
