//! Chat transcript rendering.
//!
//! The transcript is a word-wrapped scrollback; pending requests render
//! as an italic typing indicator until their reply (or the fallback)
//! arrives.

use super::header::HeaderRenderer;
use crate::app::{AppState, ChatEntry, ChatRole};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the chat screen in the specified area
pub fn render_chat_in_area(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Transcript
            Constraint::Length(3), // Input line
        ])
        .split(area);

    header.render_title(f, chunks[0], "Advisor Chat");
    render_transcript(f, state, chunks[1]);
    render_input_line(f, state, chunks[2]);
}

fn render_transcript(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Conversation ")
        .border_style(Style::default().fg(Colors::BORDER_INACTIVE));
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let inner_height = area.height.saturating_sub(2).max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    if state.chat.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask the advisor about products, ingredients, or routines.",
            Style::default().fg(Colors::FG_MUTED),
        )));
    }
    for entry in &state.chat.entries {
        lines.extend(entry_lines(entry, inner_width));
    }

    // Pin to the bottom unless the user scrolled back
    let total = lines.len();
    let bottom_offset = total.saturating_sub(inner_height);
    let offset = bottom_offset.saturating_sub(state.chat.scroll_back);

    let transcript = Paragraph::new(lines)
        .block(block)
        .scroll((offset as u16, 0));
    f.render_widget(transcript, area);
}

fn render_input_line(f: &mut Frame, state: &AppState, area: Rect) {
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Colors::PRIMARY)),
        Span::styled(
            state.chat.input.clone(),
            Style::default().fg(Colors::FG_PRIMARY),
        ),
        Span::styled("▌", Style::default().fg(Colors::SECONDARY)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
    );
    f.render_widget(input, area);
}

/// Lines for one transcript entry: a speaker-prefixed first line, then
/// wrapped continuation lines.
fn entry_lines(entry: &ChatEntry, width: usize) -> Vec<Line<'static>> {
    let (speaker, speaker_style) = match entry.role {
        ChatRole::User => (
            "You: ",
            Style::default()
                .fg(Colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
        ChatRole::Advisor => (
            "Advisor: ",
            Style::default()
                .fg(Colors::ADVISOR)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if entry.is_pending() {
        return vec![Line::from(vec![
            Span::styled(speaker.to_string(), speaker_style),
            Span::styled("Typing…", Styles::typing()),
        ])];
    }

    let body_width = width.saturating_sub(speaker.len()).max(1);
    let wrapped = wrap_text(&entry.text, body_width);
    let mut lines = Vec::with_capacity(wrapped.len().max(1));
    for (i, chunk) in wrapped.into_iter().enumerate() {
        if i == 0 {
            lines.push(Line::from(vec![
                Span::styled(speaker.to_string(), speaker_style),
                Span::styled(chunk, Style::default().fg(Colors::FG_PRIMARY)),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(speaker.len())),
                Span::styled(chunk, Style::default().fg(Colors::FG_PRIMARY)),
            ]));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(speaker.to_string(), speaker_style)));
    }
    lines
}

/// Greedy word wrap. Words longer than the width are split hard so a
/// pasted URL cannot push the transcript off-screen.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split: String = word.chars().take(width).collect();
            let rest_start = split.len();
            lines.push(split);
            word = &word[rest_start..];
        }
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
