//! Interactive terminal form using ratatui
//!
//! A single UWP input field with field-level validation, a parse button
//! and a results table:
//! - Tab moves focus between the field and the button, validating the
//!   field as focus leaves it
//! - Enter on the field validates and parses; on the button it parses
//!   when the field is non-empty and valid
//! - Esc or Ctrl+C quits

mod components;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};

use crate::parser::{parse, validation_message, ParsedRecord};
use crate::reference::ReferenceData;
use components::{HelpBar, InputPanel, ResultsPanel, SubmitButton};

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Submit,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Continue,
    Quit,
}

/// Form state, independent of the terminal
#[derive(Debug, Clone)]
pub struct FormState {
    input: String,
    error: Option<String>,
    parsed: Option<ParsedRecord>,
    focus: Focus,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            error: None,
            parsed: None,
            focus: Focus::Input,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn parsed(&self) -> Option<&ParsedRecord> {
        self.parsed.as_ref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Editing does not re-validate; the error stays until focus leaves
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Focus leaves the input: validate it
    pub fn blur(&mut self) {
        self.error = validation_message(&self.input);
        self.focus = Focus::Submit;
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && self.error.is_none()
    }

    /// Parse the current input. Does nothing while submission is disabled.
    pub fn submit(&mut self, reference: &ReferenceData) {
        if !self.can_submit() {
            return;
        }
        self.parsed = parse(&self.input, reference).ok();
    }

    pub fn handle_key(&mut self, key: KeyEvent, reference: &ReferenceData) -> FormAction {
        if key.kind != KeyEventKind::Press {
            return FormAction::Continue;
        }
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return FormAction::Quit;
        }

        match (self.focus, key.code) {
            (Focus::Input, KeyCode::Tab) => self.blur(),
            (Focus::Input, KeyCode::Enter) => {
                self.blur();
                self.submit(reference);
            }
            (Focus::Input, KeyCode::Backspace) => self.pop_char(),
            (Focus::Input, KeyCode::Char('u')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_input()
            }
            (Focus::Input, KeyCode::Char(c)) => self.push_char(c),
            (Focus::Submit, KeyCode::Tab | KeyCode::BackTab) => self.focus_input(),
            (Focus::Submit, KeyCode::Enter | KeyCode::Char(' ')) => self.submit(reference),
            (Focus::Submit, KeyCode::Char(c)) => {
                self.focus_input();
                self.push_char(c);
            }
            _ => {}
        }

        FormAction::Continue
    }
}

/// Lay out and draw the whole form
pub fn draw_form(frame: &mut Frame, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Input field + error line
            Constraint::Length(1), // Parse button
            Constraint::Min(5),    // Results table
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    InputPanel::new(state).render(frame, chunks[0]);
    SubmitButton::new(state).render(frame, chunks[1]);
    ResultsPanel::new(state.parsed()).render(frame, chunks[2]);
    HelpBar.render(frame, chunks[3]);
}

/// Full-screen terminal application
pub struct UiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: FormState,
}

impl UiApp {
    /// Create the application and enter the alternate screen
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: FormState::new(),
        })
    }

    /// Run the event loop until the user quits
    pub fn run(mut self, reference: &ReferenceData) -> Result<()> {
        loop {
            let state = &self.state;
            self.terminal.draw(|frame| draw_form(frame, state))?;

            if let CrosstermEvent::Key(key) = event::read()? {
                if self.state.handle_key(key, reference) == FormAction::Quit {
                    break;
                }
            }
        }

        self.restore()
    }

    /// Restore the terminal
    pub fn restore(mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for UiApp {
    fn drop(&mut self) {
        // Best effort cleanup
        terminal::disable_raw_mode().ok();
        self.terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .ok();
        self.terminal.show_cursor().ok();
    }
}
