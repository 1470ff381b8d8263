//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation (form ↔ result)
//! - Input event handling
//! - Service integration
//!
//! Each user action triggers at most one synchronous recomputation; the
//! classifier and schema are loaded once at startup and never reloaded.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::LogisticModel;
use crate::application::PredictorService;
use crate::domain::PatientRecord;
use crate::NephroscanError;

use super::ui::{
    form::{render_form, FormState},
    render_disclaimer,
    result::{render_result, ResultState},
};

/// Default decision threshold when `NEPHROSCAN_THRESHOLD` is unset.
const DEFAULT_THRESHOLD: f64 = 0.6;

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Result,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Predictor service (immutable for the process lifetime)
    service: PredictorService<LogisticModel>,

    /// Form state
    form_state: FormState,

    /// Result state (present after the first prediction attempt)
    result_state: Option<ResultState>,
}

/// Parse and validate a decision threshold string.
///
/// # Errors
/// Returns `NephroscanError::Config` if the value is unparseable or outside
/// `[0, 1]`.
fn parse_threshold(raw: &str) -> Result<f64, NephroscanError> {
    let threshold: f64 = raw.trim().parse().map_err(|_| {
        NephroscanError::Config(format!("Invalid threshold {raw:?}: not a number"))
    })?;

    if !(0.0..=1.0).contains(&threshold) {
        return Err(NephroscanError::Config(format!(
            "Invalid threshold {threshold}: must be within [0, 1]"
        )));
    }

    Ok(threshold)
}

impl App {
    /// Create a new application instance from the environment.
    ///
    /// Loads the model artifact and decision threshold. Any failure here is
    /// a fatal startup fault: the process refuses to start rather than run
    /// without a usable classifier.
    ///
    /// # Errors
    /// Returns error if the artifact or configuration cannot be loaded.
    pub fn new() -> Result<Self> {
        let model_path =
            std::env::var("NEPHROSCAN_MODEL_PATH").unwrap_or_else(|_| "models".to_string());
        let model_dir = std::path::Path::new(&model_path);

        if !model_dir.exists() {
            return Err(anyhow!(
                "Model path not found at {:?}. Set NEPHROSCAN_MODEL_PATH to a directory containing model.json.",
                model_dir
            ));
        }

        let model = LogisticModel::load(model_dir)
            .map_err(|e| anyhow!("Failed to load model from {:?}: {}", model_dir, e))?;

        let threshold = match std::env::var("NEPHROSCAN_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_THRESHOLD,
        };

        tracing::info!("Using decision threshold {:.2}", threshold);

        Ok(Self::with_service(PredictorService::new(
            Arc::new(model),
            threshold,
        )))
    }

    /// Create an application with a pre-configured service.
    #[must_use]
    pub fn with_service(service: PredictorService<LogisticModel>) -> Self {
        Self {
            screen: Screen::Form,
            should_quit: false,
            service,
            form_state: FormState::default(),
            result_state: None,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            // Draw current screen
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match (&self.screen, &self.result_state) {
                    (Screen::Result, Some(result_state)) => {
                        render_result(f, content_area, result_state);
                    }
                    _ => render_form(f, content_area, &self.form_state),
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Form => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::BackTab => {
                self.form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
            }
            KeyCode::Left => {
                self.form_state.decrease(false);
            }
            KeyCode::Right => {
                self.form_state.increase(false);
            }
            KeyCode::PageDown => {
                self.form_state.decrease(true);
            }
            KeyCode::PageUp => {
                self.form_state.increase(true);
            }
            KeyCode::Char(' ') => {
                self.form_state.toggle();
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.form_state.reset_defaults();
            }
            KeyCode::Enter => {
                self.predict();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                self.screen = Screen::Form;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state.reset_defaults();
                self.screen = Screen::Form;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Run one prediction cycle for the current form values.
    ///
    /// An inference fault is fatal for this cycle only: it is rendered as a
    /// visible failure with no partial result, and the user returns to the
    /// form to retry.
    fn predict(&mut self) {
        let record = PatientRecord::new(self.form_state.snapshot());

        self.result_state = Some(match self.service.predict(&record.input) {
            Ok(prediction) => ResultState::Complete {
                prediction,
                assessed_at: record.created_at,
                threshold: self.service.threshold(),
            },
            Err(e) => {
                tracing::error!("Prediction failed: {}", e);
                ResultState::Error {
                    message: e.to_string(),
                }
            }
        });
        self.screen = Screen::Result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_accepts_valid_values() {
        assert_eq!(parse_threshold("0.6").expect("valid"), 0.6);
        assert_eq!(parse_threshold(" 0 ").expect("valid"), 0.0);
        assert_eq!(parse_threshold("1").expect("valid"), 1.0);
    }

    #[test]
    fn test_parse_threshold_rejects_out_of_range() {
        assert!(parse_threshold("1.5").is_err());
        assert!(parse_threshold("-0.1").is_err());
    }

    #[test]
    fn test_parse_threshold_rejects_garbage() {
        assert!(parse_threshold("sixty percent").is_err());
        assert!(parse_threshold("").is_err());
    }
}
