//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and pre-built styles so the
//! rendering modules stay visually consistent.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background - used for panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(24, 20, 28);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Magenta;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Informational feedback
    pub const INFO: Color = Color::Blue;

    /// Advisor messages in the chat transcript
    pub const ADVISOR: Color = Color::Cyan;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Magenta;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;
}

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Section/screen titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected list items
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Status line feedback
    pub fn status() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Field labels in the routine form
    pub fn label() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// The typing indicator in the chat transcript
    pub fn typing() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::ITALIC)
    }
}
