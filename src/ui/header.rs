//! Header and common widget rendering
//!
//! Contains the banner header, title rendering, the navigation bar,
//! and the help overlay.

use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Header renderer containing the banner header
pub struct HeaderRenderer {
    /// Banner header lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the banner header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    /// Create the banner header
    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                " ██████  ██   ██ ██ ███    ██ ████████ ██    ██ ██ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "██       ██  ██  ██ ████   ██    ██    ██    ██ ██ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                " █████   █████   ██ ██ ██  ██    ██    ██    ██ ██ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "     ██  ██  ██  ██ ██  ██ ██    ██    ██    ██ ██ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "██████   ██   ██ ██ ██   ████    ██     ██████  ██ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "routines and advice for your skin",
                Style::default().fg(Colors::FG_MUTED),
            )]),
        ]
    }
}

/// Render the status line / navigation bar
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints = match state.mode {
        AppMode::MainMenu => "↑↓ Navigate • Enter Select • ? Help • Q Quit",
        AppMode::RoutineForm => "↑↓ Navigate • Enter Edit/Build • ? Help • Esc Back",
        AppMode::RoutineResult => "Enter/Esc Back to form",
        AppMode::Chat => "Type a message • Enter Send • ↑↓ Scroll • Esc Back",
        AppMode::Complete => "",
    };

    let nav = Line::from(vec![
        Span::styled(state.status_message.clone(), Styles::status()),
        Span::raw("  •  "),
        Span::styled(hints, Style::default().fg(Colors::FG_MUTED)),
    ]);
    f.render_widget(Paragraph::new(nav), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let width = (area.width * 3 / 5).clamp(40, 70).min(area.width);
    let height = 18.min(area.height);
    let overlay = Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let mode_name = match state.mode {
        AppMode::MainMenu => "Main Menu",
        AppMode::RoutineForm => "Routine Builder",
        AppMode::RoutineResult => "Your Routine",
        AppMode::Chat => "Advisor Chat",
        AppMode::Complete => "Exiting",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "  SkinTUI Help  ",
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(mode_name, Style::default().fg(Colors::SECONDARY)),
        ]),
        Line::from(""),
    ];

    let sections: &[(&str, &[(&str, &str)])] = &[
        (
            "Navigation",
            &[
                ("↑ / ↓", "Move selection or scroll"),
                ("Enter", "Select, edit, or submit"),
                ("Esc", "Back / cancel"),
            ],
        ),
        (
            "Screens",
            &[
                ("Routine", "Pick skin type, age range, concerns, then build"),
                ("Chat", "Free-text questions for the product advisor"),
            ],
        ),
        (
            "Global",
            &[("?", "Toggle this help"), ("Ctrl+C", "Quit immediately")],
        ),
    ];

    for (title, items) in sections {
        lines.push(Line::from(Span::styled(
            format!("  {}  ", title),
            Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *items {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{:<10}", key),
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(Colors::FG_PRIMARY)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Colors::FG_MUTED),
    )));

    f.render_widget(Clear, overlay);
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
    );
    f.render_widget(help, overlay);
}
