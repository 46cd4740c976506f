//! SkinTUI Library
//!
//! This library provides the core functionality for the SkinTUI skincare
//! routine builder: catalog loading, routine matching, the advisor chat
//! relay, and the terminal UI around them.

pub mod app;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod routine;
pub mod scrolling;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, ChatEntry, ChatRole, ChatState, RoutineForm};
pub use catalog::{Catalog, Product};
pub use chat::{AdvisorClient, ChatMessage, FALLBACK_REPLY};
pub use config::{AppConfig, ChatSettings};
pub use error::{Result, SkinTuiError};
pub use routine::{generate_routine, Routine, SkinProfile};
pub use types::{AgeRange, RoutineStep, SkinType};
