//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Header, title, nav bar, and help overlay rendering
//! - `menus` - Main menu rendering
//! - `routine` - Routine form and result card rendering
//! - `chat` - Chat transcript rendering
//! - `dialogs` - Input dialog rendering

mod chat;
mod dialogs;
mod header;
mod menus;
mod routine;

use crate::app::{AppMode, AppState};
use crate::input::InputHandler;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

// Re-export for external use
pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to
/// specialized submodules for different parts of the UI.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, input_handler: &InputHandler) {
        // If a dialog is active, render ONLY the dialog
        if input_handler.is_dialog_active() {
            dialogs::render_input_dialog(f, input_handler);
            return;
        }

        // Main layout with nav bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match state.mode {
            AppMode::MainMenu => {
                menus::render_main_menu_in_area(f, state, content_area, &self.header);
            }
            AppMode::RoutineForm => {
                routine::render_form_in_area(f, state, content_area, &self.header);
            }
            AppMode::RoutineResult => {
                routine::render_result_in_area(f, state, content_area, &self.header);
            }
            AppMode::Chat => {
                chat::render_chat_in_area(f, state, content_area, &self.header);
            }
            AppMode::Complete => {}
        }

        // Render navigation bar
        header::render_nav_bar(f, state, nav_bar_area);

        // Render help overlay if visible (on top of everything)
        if state.help_visible {
            header::render_help_overlay(f, state);
        }
    }
}
