use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::io::config_io::LoadedConfig;
use crate::model::{RecordingNavigator, StepConfig, StepOutcome, SuggestionOption};
use crate::ops::SelectionController;

use super::input;
use super::render;
use super::theme::Theme;

/// Which control receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Title,
    WordCount,
    Buttons,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Title,
            Focus::Title => Focus::WordCount,
            Focus::WordCount => Focus::Buttons,
            Focus::Buttons => Focus::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Categories => Focus::Buttons,
            Focus::Title => Focus::Categories,
            Focus::WordCount => Focus::Title,
            Focus::Buttons => Focus::WordCount,
        }
    }
}

/// Highlighted navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Back,
    Next,
}

/// Dropdown under the title field
#[derive(Debug, Clone, Default)]
pub struct SuggestionList {
    pub options: Vec<SuggestionOption>,
    /// Highlighted row; nothing is highlighted until the user moves
    pub selected: Option<usize>,
    pub visible: bool,
}

impl SuggestionList {
    /// Replace the rows, keeping the highlight in range
    pub fn set_options(&mut self, options: Vec<SuggestionOption>) {
        self.options = options;
        self.selected = match self.selected {
            Some(_) if self.options.is_empty() => None,
            Some(i) => Some(i.min(self.options.len() - 1)),
            None => None,
        };
    }

    pub fn is_open(&self) -> bool {
        self.visible && !self.options.is_empty()
    }

    pub fn move_down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.options.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn move_up(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    pub fn select_first(&mut self) {
        if !self.options.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.options.is_empty() {
            self.selected = Some(self.options.len() - 1);
        }
    }

    pub fn selected_option(&self) -> Option<&SuggestionOption> {
        self.selected.and_then(|i| self.options.get(i))
    }
}

/// Main application state
pub struct App {
    pub controller: SelectionController,
    pub config: StepConfig,
    pub theme: Theme,
    pub focus: Focus,
    /// Title field contents
    pub edit_buffer: String,
    /// Byte offset of the cursor in `edit_buffer`
    pub edit_cursor: usize,
    pub suggestions: SuggestionList,
    pub button: NavButton,
    pub outcome: Option<StepOutcome>,
    pub should_quit: bool,
}

impl App {
    pub fn new(loaded: LoadedConfig) -> Self {
        let controller = SelectionController::new(
            loaded.registry.clone(),
            &loaded.initial_category,
            loaded.config.word_count,
        );
        let theme = Theme::from_config(&loaded.config.ui);

        let mut app = App {
            controller,
            config: loaded.config,
            theme,
            focus: Focus::Categories,
            edit_buffer: String::new(),
            edit_cursor: 0,
            suggestions: SuggestionList::default(),
            button: NavButton::Next,
            outcome: None,
            should_quit: false,
        };
        app.refresh_suggestions();
        app
    }

    /// Whether the wide layout applies at this terminal width
    pub fn is_wide(&self, width: u16) -> bool {
        width >= self.config.ui.wide_min_width
    }

    /// Index of the active category in the selector row
    pub fn category_index(&self) -> Option<usize> {
        self.controller
            .registry()
            .index_of(self.controller.active_category())
    }

    /// Select the category at `index` in the selector row
    pub fn select_category_at(&mut self, index: usize) {
        let id = match self.controller.registry().ids().get(index) {
            Some(id) => id.to_string(),
            None => return,
        };
        self.controller.select_category(&id);
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.suggestions.selected = None;
        self.suggestions.visible = false;
        self.refresh_suggestions();
    }

    /// Push the field contents into the controller and refilter.
    pub fn title_input_changed(&mut self) {
        self.controller.enter_free_text(&self.edit_buffer);
        self.suggestions.visible = true;
        self.refresh_suggestions();
    }

    pub fn refresh_suggestions(&mut self) {
        let options = self.controller.suggestions(&self.edit_buffer);
        self.suggestions.set_options(options);
    }

    /// Commit the highlighted dropdown row. Returns false if none is highlighted.
    pub fn accept_suggestion(&mut self) -> bool {
        let option = match self.suggestions.selected_option() {
            Some(opt) => opt.clone(),
            None => return false,
        };
        self.controller.pick_suggestion(&option);
        self.edit_buffer = option.value().to_string();
        self.edit_cursor = self.edit_buffer.len();
        self.suggestions.selected = None;
        self.suggestions.visible = false;
        self.refresh_suggestions();
        true
    }

    pub fn press_next(&mut self) {
        let mut navigator = RecordingNavigator::default();
        self.controller.go_next(&mut navigator);
        self.finish(navigator);
    }

    pub fn press_back(&mut self) {
        let mut navigator = RecordingNavigator::default();
        self.controller.go_back(&mut navigator);
        self.finish(navigator);
    }

    fn finish(&mut self, navigator: RecordingNavigator) {
        self.outcome = navigator.outcome;
        self.should_quit = true;
    }
}

/// Run the TUI and return how the user left the step
pub fn run(loaded: LoadedConfig) -> Result<StepOutcome, Box<dyn std::error::Error>> {
    let mut app = App::new(loaded);
    info!(category = %app.controller.active_category(), "entering content-type step");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;
    let outcome = app.outcome.unwrap_or(StepOutcome::Back);
    info!(?outcome, "step finished");
    Ok(outcome)
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
