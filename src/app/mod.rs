//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, RoutineForm, ChatState)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, ChatEntry, ChatRole, ChatState, RoutineForm};

use crate::catalog::Catalog;
use crate::chat::AdvisorClient;
use crate::error::Result;
use crate::input::InputHandler;
use crate::routine::generate_routine;
use crate::types::{AgeRange, SkinType};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{error, info, warn};

/// Alert shown when the routine form is submitted with a missing field.
const MISSING_FIELDS_ALERT: &str = "Please fill out all fields to build your routine.";

/// Messages sent from chat worker threads to the main UI thread
#[derive(Debug)]
pub enum ChatEvent {
    /// The advisor replied to the request with this id
    Reply { id: u64, text: String },
    /// The request with this id failed; the error is logged, the
    /// transcript gets the fallback text
    Failed { id: u64, error: String },
}

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    input_handler: InputHandler,
    /// Advisor client; None when no API key was available at startup
    advisor: Option<Arc<AdvisorClient>>,
    /// Channel sender for chat replies (cloned to worker threads)
    chat_tx: Sender<ChatEvent>,
    /// Channel receiver for chat replies (polled in main loop)
    chat_rx: Receiver<ChatEvent>,
}

impl App {
    /// Create a new application instance
    pub fn new(catalog: Catalog, advisor: Option<AdvisorClient>) -> Self {
        info!("Creating new App instance");
        let (chat_tx, chat_rx) = mpsc::channel();

        Self {
            state: AppState::with_catalog(catalog),
            ui_renderer: UiRenderer::new(),
            input_handler: InputHandler::new(),
            advisor: advisor.map(Arc::new),
            chat_tx,
            chat_rx,
        }
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("Starting main application loop");

        loop {
            // Poll for advisor replies from worker threads
            self.poll_chat_events();

            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(_, _) => {
                        // Layout is recomputed on every draw
                    }
                    _ => {}
                }
            }

            if self.state.mode == AppMode::Complete {
                break;
            }

            // Render UI
            let ui_renderer = &self.ui_renderer;
            let state = &self.state;
            let input_handler = &self.input_handler;
            terminal.draw(|f| ui_renderer.render(f, state, input_handler))?;
        }

        Ok(())
    }

    /// Poll for chat events from worker threads.
    ///
    /// Each event carries the id of the request it answers, so it can only
    /// resolve its own placeholder entry.
    fn poll_chat_events(&mut self) {
        while let Ok(event) = self.chat_rx.try_recv() {
            match event {
                ChatEvent::Reply { id, text } => {
                    if !self.state.chat.resolve(id, text) {
                        warn!("no pending transcript entry for chat request {}", id);
                    }
                }
                ChatEvent::Failed { id, error } => {
                    error!("chat request {} failed: {}", id, error);
                    self.state.chat.fail(id);
                }
            }
        }
    }

    /// Handle keyboard input events. Returns true when the app should exit.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Ctrl+C always exits
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return true;
        }

        // Handle help overlay - ? or Esc dismisses it
        if self.state.help_visible {
            match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => self.toggle_help(),
                _ => {}
            }
            return false;
        }

        // Global help toggle with '?' (except while typing in a dialog or the chat input)
        if key_event.code == KeyCode::Char('?')
            && !self.input_handler.is_dialog_active()
            && self.state.mode != AppMode::Chat
        {
            self.toggle_help();
            return false;
        }

        // Active input dialog gets the keys first
        if self.input_handler.is_dialog_active() {
            if let Some(value) = self.input_handler.handle_input(key_event) {
                self.apply_dialog_value(value);
            }
            return false;
        }

        match self.state.mode {
            AppMode::MainMenu => self.handle_main_menu_key(key_event),
            AppMode::RoutineForm => self.handle_routine_form_key(key_event),
            AppMode::RoutineResult => self.handle_routine_result_key(key_event),
            AppMode::Chat => self.handle_chat_key(key_event),
            AppMode::Complete => true,
        }
    }

    /// Handle keys on the main menu
    fn handle_main_menu_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Up => {
                if self.state.main_menu_selection > 0 {
                    self.state.main_menu_selection -= 1;
                }
            }
            KeyCode::Down => {
                if self.state.main_menu_selection < 2 {
                    self.state.main_menu_selection += 1;
                }
            }
            KeyCode::Enter => match self.state.main_menu_selection {
                0 => {
                    self.state.mode = AppMode::RoutineForm;
                    self.state.status_message =
                        "Fill in all three fields, then build your routine".to_string();
                }
                1 => {
                    self.state.mode = AppMode::Chat;
                    self.state.status_message = if self.advisor.is_some() {
                        "Ask the advisor anything about your skincare routine".to_string()
                    } else {
                        "Advisor is offline (no API key configured)".to_string()
                    };
                }
                _ => return true,
            },
            KeyCode::Esc | KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    /// Handle keys on the routine form
    fn handle_routine_form_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Up => self.state.form.move_up(),
            KeyCode::Down => self.state.form.move_down(),
            KeyCode::Enter => {
                if self.state.form.selected_field == RoutineForm::BUILD_ROW {
                    self.submit_routine_form();
                } else {
                    self.open_field_dialog();
                }
            }
            KeyCode::Esc => {
                self.state.mode = AppMode::MainMenu;
            }
            _ => {}
        }
        false
    }

    /// Handle keys on the routine result screen
    fn handle_routine_result_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') => {
                self.state.mode = AppMode::RoutineForm;
            }
            _ => {}
        }
        false
    }

    /// Handle keys on the chat screen
    fn handle_chat_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Enter => self.submit_chat_message(),
            KeyCode::Backspace => {
                self.state.chat.input.pop();
            }
            KeyCode::Up => {
                self.state.chat.scroll_back += 1;
            }
            KeyCode::Down => {
                self.state.chat.scroll_back = self.state.chat.scroll_back.saturating_sub(1);
            }
            KeyCode::PageUp => {
                self.state.chat.scroll_back += 10;
            }
            KeyCode::PageDown => {
                self.state.chat.scroll_back = self.state.chat.scroll_back.saturating_sub(10);
            }
            KeyCode::Esc => {
                self.state.mode = AppMode::MainMenu;
            }
            KeyCode::Char(c) => {
                if !key_event.modifiers.contains(KeyModifiers::CONTROL) {
                    self.state.chat.input.push(c);
                }
            }
            _ => {}
        }
        false
    }

    /// Open the input dialog for the selected form field
    fn open_field_dialog(&mut self) {
        match self.state.form.selected_field {
            0 => {
                let current = self
                    .state
                    .form
                    .skin_type
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                self.input_handler.start_selection(
                    "Skin Type".to_string(),
                    InputHandler::get_predefined_options("Skin Type"),
                    current,
                );
            }
            1 => {
                let current = self
                    .state
                    .form
                    .age_range
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                self.input_handler.start_selection(
                    "Age Range".to_string(),
                    InputHandler::get_predefined_options("Age Range"),
                    current,
                );
            }
            2 => {
                self.input_handler.start_text_input(
                    "Concerns".to_string(),
                    self.state.form.concerns.clone(),
                    "e.g. acne and redness".to_string(),
                );
            }
            _ => {}
        }
    }

    /// Apply a confirmed dialog value to the selected form field
    fn apply_dialog_value(&mut self, value: String) {
        match self.state.form.selected_field {
            0 => {
                if let Ok(skin_type) = value.parse::<SkinType>() {
                    self.state.form.skin_type = Some(skin_type);
                }
            }
            1 => {
                if let Ok(age_range) = value.parse::<AgeRange>() {
                    self.state.form.age_range = Some(age_range);
                }
            }
            2 => {
                self.state.form.concerns = value;
            }
            _ => {}
        }
    }

    /// Build the routine from the form, or alert on missing fields.
    ///
    /// A missing field leaves the stored routine untouched; only the
    /// status line changes.
    fn submit_routine_form(&mut self) {
        match self.state.form.profile() {
            Some(profile) => {
                let routine = generate_routine(&self.state.catalog, &profile);
                info!(
                    "built routine with {} of 5 steps matched",
                    routine.len()
                );
                self.state.status_message = match routine.len() {
                    0 => "No products matched your profile".to_string(),
                    n => format!("Matched {} of 5 routine steps", n),
                };
                self.state.routine = Some(routine);
                self.state.mode = AppMode::RoutineResult;
            }
            None => {
                self.state.status_message = MISSING_FIELDS_ALERT.to_string();
            }
        }
    }

    /// Submit the chat input line to the advisor
    fn submit_chat_message(&mut self) {
        let message = self.state.chat.input.trim().to_string();
        if message.is_empty() {
            return;
        }
        self.state.chat.input.clear();

        let id = self.state.chat.begin_request(message.clone());
        match self.advisor.clone() {
            Some(client) => self.spawn_chat_request(client, id, message),
            None => {
                error!(
                    "chat request {} rejected: advisor client unavailable (missing API key)",
                    id
                );
                self.state.chat.fail(id);
            }
        }
    }

    /// Spawn a chat request on a worker thread; the reply comes back
    /// through the channel tagged with the request id.
    fn spawn_chat_request(&self, client: Arc<AdvisorClient>, id: u64, message: String) {
        let tx = self.chat_tx.clone();
        thread::spawn(move || {
            let event = match client.ask(&message) {
                Ok(text) => ChatEvent::Reply { id, text },
                Err(e) => ChatEvent::Failed {
                    id,
                    error: e.to_string(),
                },
            };
            // A send error means the app already exited
            let _ = tx.send(event);
        });
    }

    /// Read-only view of the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::types::RoutineStep;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![Product {
            name: "Clarifying Cleanser".to_string(),
            step: RoutineStep::Cleanser,
            skin_types: vec!["oily".to_string()],
            age_ranges: vec!["20-29".to_string()],
            concerns: vec!["acne".to_string()],
            image: None,
            description: "A test cleanser.".to_string(),
        }])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_incomplete_form_alerts_and_keeps_routine_untouched() {
        let mut app = App::new(test_catalog(), None);
        app.state.mode = AppMode::RoutineForm;
        app.state.form.selected_field = RoutineForm::BUILD_ROW;

        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.state.status_message, MISSING_FIELDS_ALERT);
        assert!(app.state.routine.is_none());
        assert_eq!(app.state.mode, AppMode::RoutineForm);
    }

    #[test]
    fn test_complete_form_builds_routine() {
        let mut app = App::new(test_catalog(), None);
        app.state.mode = AppMode::RoutineForm;
        app.state.form.skin_type = Some(SkinType::Oily);
        app.state.form.age_range = Some(AgeRange::Twenties);
        app.state.form.concerns = "I have acne".to_string();
        app.state.form.selected_field = RoutineForm::BUILD_ROW;

        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.state.mode, AppMode::RoutineResult);
        let routine = app.state.routine.as_ref().unwrap();
        assert_eq!(routine.len(), 1);
        assert_eq!(routine.products()[0].name, "Clarifying Cleanser");
    }

    #[test]
    fn test_chat_without_advisor_falls_back_immediately() {
        let mut app = App::new(Catalog::default(), None);
        app.state.mode = AppMode::Chat;
        app.state.chat.input = "is toner necessary?".to_string();

        app.handle_key_event(key(KeyCode::Enter));

        let entries = &app.state.chat.entries;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, ChatRole::User);
        assert_eq!(entries[0].text, "is toner necessary?");
        assert_eq!(entries[1].role, ChatRole::Advisor);
        assert!(!entries[1].is_pending());
        assert_eq!(entries[1].text, crate::chat::FALLBACK_REPLY);
        assert!(app.state.chat.input.is_empty());
    }

    #[test]
    fn test_blank_chat_input_is_ignored() {
        let mut app = App::new(Catalog::default(), None);
        app.state.mode = AppMode::Chat;
        app.state.chat.input = "   ".to_string();

        app.handle_key_event(key(KeyCode::Enter));

        assert!(app.state.chat.entries.is_empty());
    }

    #[test]
    fn test_failed_request_resolves_placeholder_with_fallback() {
        use crate::chat::FALLBACK_REPLY;
        use crate::config::ChatSettings;

        // Nothing listens on the discard port, so the request fails fast
        let settings = ChatSettings {
            endpoint: "http://127.0.0.1:9".to_string(),
            ..ChatSettings::default()
        };
        let client = AdvisorClient::new(settings, "test-key").unwrap();

        let mut app = App::new(Catalog::default(), Some(client));
        app.state.mode = AppMode::Chat;
        app.state.chat.input = "hello".to_string();
        app.handle_key_event(key(KeyCode::Enter));

        let deadline = std::time::Instant::now() + Duration::from_secs(10);
        while app.state.chat.has_pending() && std::time::Instant::now() < deadline {
            app.poll_chat_events();
            thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(app.state.chat.entries.len(), 2);
        assert_eq!(app.state.chat.entries[1].text, FALLBACK_REPLY);
    }

    #[test]
    fn test_quit_from_main_menu() {
        let mut app = App::new(Catalog::default(), None);
        assert!(app.handle_key_event(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_field_dialog_confirm_updates_form() {
        let mut app = App::new(Catalog::default(), None);
        app.state.mode = AppMode::RoutineForm;
        app.state.form.selected_field = 0;

        // Open the skin type selector and confirm the first option
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.input_handler.is_dialog_active());
        app.handle_key_event(key(KeyCode::Enter));

        assert!(app.state.form.skin_type.is_some());
        assert!(!app.input_handler.is_dialog_active());
    }
}
