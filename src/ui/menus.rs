//! Menu rendering module
//!
//! Handles rendering of the main menu.

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::theme::Colors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render main menu in specified area
pub fn render_main_menu_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Menu
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Skincare Routine Toolkit");

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    let menu_items = [
        " ▶ Build Routine     (Personalized five-step plan)",
        " ▶ Chat with Advisor (Ask the AI product advisor)",
        " ▶ Quit",
    ];

    let menu_items: Vec<ListItem> = menu_items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == state.main_menu_selection {
                Style::default()
                    .fg(Colors::SECONDARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(*item).style(style)
        })
        .collect();

    let menu = List::new(menu_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Main Menu ")
            .title_style(
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );

    f.render_widget(menu, content_chunks[0]);

    // Description panel
    let description = match state.main_menu_selection {
        0 => {
            "Build a personalized skincare routine.\n\n\
             Pick your skin type and age range, describe your concerns in \
             your own words, and get one matched product per routine step: \
             Cleanser, Toner, Serum, Moisturizer, and SPF."
        }
        1 => {
            "Chat with the AI product advisor.\n\n\
             Free-text questions about products, ingredients, or routines. \
             Requires an OPENAI_API_KEY in the environment; without it the \
             advisor politely declines."
        }
        _ => "Exit the application.",
    };
    let desc_widget = Paragraph::new(description)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Overview ")
                .title_style(
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(desc_widget, content_chunks[1]);
}
