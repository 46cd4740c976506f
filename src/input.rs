//! Input handling module
//!
//! Handles the input dialogs used by the routine form: free-text entry
//! and selection from predefined options.

use crate::scrolling::ScrollState;
use crate::types::{AgeRange, SkinType};
use strum::IntoEnumIterator;

/// Types of input dialogs
#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    /// Text input for values like the concerns description
    TextInput {
        field_name: String,
        current_value: String,
        placeholder: String,
    },
    /// Selection from predefined options
    Selection {
        field_name: String,
        options: Vec<String>,
        scroll_state: ScrollState,
    },
}

/// Input dialog state
#[derive(Debug, Clone)]
pub struct InputDialog {
    /// Type of input dialog
    pub input_type: InputType,
    /// Title of the dialog
    pub title: String,
    /// Instructions for the user
    pub instructions: String,
}

impl InputDialog {
    /// Create a new input dialog
    pub fn new(input_type: InputType, title: String, instructions: String) -> Self {
        Self {
            input_type,
            title,
            instructions,
        }
    }

    /// Handle keyboard input for the dialog
    pub fn handle_input(&mut self, key_event: crossterm::event::KeyEvent) -> InputResult {
        match &mut self.input_type {
            InputType::TextInput { current_value, .. } => match key_event.code {
                crossterm::event::KeyCode::Enter => {
                    return InputResult::Confirm(current_value.clone());
                }
                crossterm::event::KeyCode::Esc => {
                    return InputResult::Cancel;
                }
                crossterm::event::KeyCode::Backspace => {
                    current_value.pop();
                }
                crossterm::event::KeyCode::Char(c) => {
                    current_value.push(c);
                }
                _ => {}
            },
            InputType::Selection {
                scroll_state,
                options,
                ..
            } => match key_event.code {
                crossterm::event::KeyCode::Up => {
                    scroll_state.move_up();
                }
                crossterm::event::KeyCode::Down => {
                    scroll_state.move_down();
                }
                crossterm::event::KeyCode::PageUp => {
                    scroll_state.page_up();
                }
                crossterm::event::KeyCode::PageDown => {
                    scroll_state.page_down();
                }
                crossterm::event::KeyCode::Enter => {
                    if let Some(selected) = options.get(scroll_state.selected_index) {
                        return InputResult::Confirm(selected.clone());
                    }
                    return InputResult::Cancel;
                }
                crossterm::event::KeyCode::Esc => {
                    return InputResult::Cancel;
                }
                _ => {}
            },
        }
        InputResult::Continue
    }

    /// Get the current display value for the input
    pub fn get_display_value(&self) -> String {
        match &self.input_type {
            InputType::TextInput {
                current_value,
                placeholder,
                ..
            } => {
                if current_value.is_empty() {
                    placeholder.clone()
                } else {
                    current_value.clone()
                }
            }
            InputType::Selection {
                scroll_state,
                options,
                ..
            } => options
                .get(scroll_state.selected_index)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

/// Result of input handling
#[derive(Debug, Clone)]
pub enum InputResult {
    /// User confirmed with a value
    Confirm(String),
    /// User cancelled
    Cancel,
    /// Continue processing input
    Continue,
}

/// Input handler for managing all input dialogs
pub struct InputHandler {
    /// Current active dialog
    pub current_dialog: Option<InputDialog>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler
    pub fn new() -> Self {
        Self {
            current_dialog: None,
        }
    }

    /// Start a text input dialog
    pub fn start_text_input(
        &mut self,
        field_name: String,
        current_value: String,
        placeholder: String,
    ) {
        let input_type = InputType::TextInput {
            field_name: field_name.clone(),
            current_value,
            placeholder,
        };

        self.current_dialog = Some(InputDialog::new(
            input_type,
            format!("Configure {}", field_name),
            "Type the value and press Enter to confirm, Esc to cancel".to_string(),
        ));
    }

    /// Start a selection dialog
    pub fn start_selection(
        &mut self,
        field_name: String,
        options: Vec<String>,
        current_value: String,
    ) {
        let selected_index = options
            .iter()
            .position(|opt| opt == &current_value)
            .unwrap_or(0);

        let mut scroll_state = ScrollState::new(options.len(), 10);
        scroll_state.set_selected(selected_index);

        let input_type = InputType::Selection {
            field_name: field_name.clone(),
            options,
            scroll_state,
        };

        self.current_dialog = Some(InputDialog::new(
            input_type,
            format!("Select {}", field_name),
            "Use ↑↓ to navigate, Enter to select, Esc to cancel".to_string(),
        ));
    }

    /// Handle keyboard input for the current dialog
    pub fn handle_input(&mut self, key_event: crossterm::event::KeyEvent) -> Option<String> {
        if let Some(ref mut dialog) = self.current_dialog {
            match dialog.handle_input(key_event) {
                InputResult::Confirm(value) => {
                    self.current_dialog = None;
                    Some(value)
                }
                InputResult::Cancel => {
                    self.current_dialog = None;
                    None
                }
                InputResult::Continue => None,
            }
        } else {
            None
        }
    }

    /// Check if a dialog is currently active
    pub fn is_dialog_active(&self) -> bool {
        self.current_dialog.is_some()
    }

    /// Get predefined options for the routine form fields.
    ///
    /// Uses enum iteration for type-safe option generation.
    pub fn get_predefined_options(field_name: &str) -> Vec<String> {
        match field_name {
            "Skin Type" => SkinType::iter().map(|v| v.to_string()).collect(),
            "Age Range" => AgeRange::iter().map(|v| v.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    #[test]
    fn test_text_input_collects_characters() {
        let mut handler = InputHandler::new();
        handler.start_text_input(
            "Concerns".to_string(),
            String::new(),
            "e.g. acne and redness".to_string(),
        );

        assert!(handler.is_dialog_active());
        assert!(handler.handle_input(KeyEvent::from(KeyCode::Char('a'))).is_none());
        assert!(handler.handle_input(KeyEvent::from(KeyCode::Char('c'))).is_none());
        assert!(handler.handle_input(KeyEvent::from(KeyCode::Backspace)).is_none());
        assert!(handler.handle_input(KeyEvent::from(KeyCode::Char('c'))).is_none());
        assert!(handler.handle_input(KeyEvent::from(KeyCode::Char('n'))).is_none());
        assert!(handler.handle_input(KeyEvent::from(KeyCode::Char('e'))).is_none());

        let value = handler.handle_input(KeyEvent::from(KeyCode::Enter));
        assert_eq!(value.as_deref(), Some("acne"));
        assert!(!handler.is_dialog_active());
    }

    #[test]
    fn test_selection_starts_at_current_value() {
        let mut handler = InputHandler::new();
        let options = InputHandler::get_predefined_options("Skin Type");
        handler.start_selection("Skin Type".to_string(), options, "dry".to_string());

        let value = handler.handle_input(KeyEvent::from(KeyCode::Enter));
        assert_eq!(value.as_deref(), Some("dry"));
    }

    #[test]
    fn test_selection_navigation_and_cancel() {
        let mut handler = InputHandler::new();
        let options = InputHandler::get_predefined_options("Age Range");
        handler.start_selection("Age Range".to_string(), options, String::new());

        assert!(handler.handle_input(KeyEvent::from(KeyCode::Down)).is_none());
        assert!(handler.handle_input(KeyEvent::from(KeyCode::Esc)).is_none());
        assert!(!handler.is_dialog_active());
    }

    #[test]
    fn test_predefined_options() {
        let skin_types = InputHandler::get_predefined_options("Skin Type");
        assert!(skin_types.contains(&"oily".to_string()));
        assert!(skin_types.contains(&"sensitive".to_string()));

        let ages = InputHandler::get_predefined_options("Age Range");
        assert_eq!(ages.len(), 5);
        assert_eq!(ages[0], "13-19");

        assert!(InputHandler::get_predefined_options("Unknown").is_empty());
    }
}
