//! Dialog rendering module
//!
//! Renders the input dialogs (text entry and selection) used by the
//! routine form.

use crate::input::{InputHandler, InputType};
use crate::theme::Colors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render input dialog overlay
pub fn render_input_dialog(f: &mut Frame, input_handler: &InputHandler) {
    let Some(dialog) = input_handler.current_dialog.as_ref() else {
        return;
    };

    let area = f.area();

    // Centered dialog box
    let dialog_width = (area.width * 3 / 5).clamp(30, 70).min(area.width);
    let dialog_height = match &dialog.input_type {
        InputType::TextInput { .. } => 7.min(area.height),
        InputType::Selection { options, .. } => {
            ((options.len() as u16) + 6).clamp(8, 18).min(area.height)
        }
    };
    let dialog_rect = Rect::new(
        (area.width.saturating_sub(dialog_width)) / 2,
        (area.height.saturating_sub(dialog_height)) / 2,
        dialog_width,
        dialog_height,
    );

    f.render_widget(Clear, dialog_rect);
    let frame_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", dialog.title))
        .title_style(
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(Colors::BORDER_ACTIVE));
    let inner = frame_block.inner(dialog_rect);
    f.render_widget(frame_block, dialog_rect);

    match &dialog.input_type {
        InputType::TextInput { current_value, placeholder, .. } => {
            let (text, style) = if current_value.is_empty() {
                (
                    placeholder.clone(),
                    Style::default().fg(Colors::FG_MUTED),
                )
            } else {
                (
                    current_value.clone(),
                    Style::default().fg(Colors::FG_PRIMARY),
                )
            };

            let value_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("> ", Style::default().fg(Colors::PRIMARY)),
                    Span::styled(text, style),
                    Span::styled("▌", Style::default().fg(Colors::SECONDARY)),
                ])),
                value_area,
            );
        }
        InputType::Selection { options, scroll_state, .. } => {
            let list_area = Rect::new(
                inner.x,
                inner.y,
                inner.width,
                inner.height.saturating_sub(2),
            );

            let items: Vec<ListItem> = options[scroll_state.visible_range()]
                .iter()
                .enumerate()
                .map(|(visible_index, option)| {
                    let index = scroll_state.offset + visible_index;
                    let selected = index == scroll_state.selected_index;
                    let prefix = if selected { "▸ " } else { "  " };
                    let style = if selected {
                        Style::default()
                            .fg(Colors::SECONDARY)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Colors::FG_PRIMARY)
                    };
                    ListItem::new(format!("{}{}", prefix, option)).style(style)
                })
                .collect();

            f.render_widget(List::new(items), list_area);
        }
    }

    // Instructions along the bottom edge
    let instruction_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    f.render_widget(
        Paragraph::new(dialog.instructions.clone())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::FG_SECONDARY)),
        instruction_area,
    );
}
