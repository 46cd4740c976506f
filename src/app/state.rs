//! Application state definitions
//!
//! Contains all state-related types for the application including
//! AppState, AppMode, the routine form, and the chat transcript.

use crate::catalog::Catalog;
use crate::chat::FALLBACK_REPLY;
use crate::routine::{Routine, SkinProfile};
use crate::types::{AgeRange, SkinType};

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Main menu - entry point for both flows
    MainMenu,
    /// Routine form - collect skin type, concerns, age range
    RoutineForm,
    /// Routine result - show the matched products
    RoutineResult,
    /// Chat with the product advisor
    Chat,
    /// Exit requested
    Complete,
}

/// The routine form: three required fields plus the build action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutineForm {
    pub skin_type: Option<SkinType>,
    pub age_range: Option<AgeRange>,
    pub concerns: String,
    /// Highlighted row: 0..=2 are the fields, 3 is the build action.
    pub selected_field: usize,
}

impl RoutineForm {
    /// Field rows plus the build action row.
    pub const ROW_COUNT: usize = 4;
    /// Index of the build action row.
    pub const BUILD_ROW: usize = 3;

    /// A profile is only available once every field is filled in.
    pub fn profile(&self) -> Option<SkinProfile> {
        let skin_type = self.skin_type?;
        let age_range = self.age_range?;
        let concerns = self.concerns.trim();
        if concerns.is_empty() {
            return None;
        }
        Some(SkinProfile::new(skin_type, concerns, age_range))
    }

    pub fn move_up(&mut self) {
        if self.selected_field > 0 {
            self.selected_field -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_field + 1 < Self::ROW_COUNT {
            self.selected_field += 1;
        }
    }
}

/// Who authored a chat transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Advisor,
}

/// One entry in the chat transcript.
///
/// An advisor entry with a `pending_id` is the typing indicator for that
/// request; resolving the request replaces its text and clears the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    pub pending_id: Option<u64>,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            pending_id: None,
        }
    }

    fn pending(id: u64) -> Self {
        Self {
            role: ChatRole::Advisor,
            text: String::new(),
            pending_id: Some(id),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_id.is_some()
    }
}

/// Chat transcript plus input line state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub input: String,
    /// Lines scrolled back from the bottom of the transcript;
    /// 0 keeps the view pinned to the newest entry.
    pub scroll_back: usize,
    next_request_id: u64,
}

impl ChatState {
    /// Record a submission: the user message plus a pending advisor entry
    /// keyed by a fresh request id. Each in-flight request owns its own
    /// placeholder, so concurrent submissions resolve independently.
    pub fn begin_request(&mut self, message: impl Into<String>) -> u64 {
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.entries.push(ChatEntry::user(message));
        self.entries.push(ChatEntry::pending(id));
        self.scroll_back = 0;
        id
    }

    /// Fill the pending entry for `id` with the advisor's reply.
    /// Returns false when no such entry exists (already resolved).
    pub fn resolve(&mut self, id: u64, text: impl Into<String>) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.pending_id == Some(id))
        {
            Some(entry) => {
                entry.text = text.into();
                entry.pending_id = None;
                true
            }
            None => false,
        }
    }

    /// Replace the pending entry for `id` with the fixed fallback text.
    pub fn fail(&mut self, id: u64) -> bool {
        self.resolve(id, FALLBACK_REPLY)
    }

    /// Whether any request is still waiting for a reply.
    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(ChatEntry::is_pending)
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The product catalog, loaded once at startup
    pub catalog: Catalog,
    /// Routine form inputs
    pub form: RoutineForm,
    /// Most recently built routine, if any
    pub routine: Option<Routine>,
    /// Chat transcript and input line
    pub chat: ChatState,
    /// Status message for user feedback
    pub status_message: String,
    /// Main menu selection state
    pub main_menu_selection: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    pub fn with_catalog(catalog: Catalog) -> Self {
        let status_message = format!("Welcome to SkinTUI ({})", catalog.summary());
        Self {
            mode: AppMode::MainMenu,
            catalog,
            form: RoutineForm::default(),
            routine: None,
            chat: ChatState::default(),
            status_message,
            main_menu_selection: 0,
            help_visible: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(Catalog::default())
    }
}
