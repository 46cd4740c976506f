//! Routine form and result rendering.

use super::header::HeaderRenderer;
use crate::app::{AppState, RoutineForm};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Empty-state message when no product matched the profile.
const NO_ROUTINE_MESSAGE: &str =
    "No routine found for your skin profile. Try adjusting your inputs.";

/// Render the routine form in the specified area
pub fn render_form_in_area(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Form
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Build Your Routine");

    let form = &state.form;
    let rows: [(&str, String); 3] = [
        (
            "Skin Type",
            form.skin_type
                .map(|v| v.to_string())
                .unwrap_or_else(|| "<not set>".to_string()),
        ),
        (
            "Age Range",
            form.age_range
                .map(|v| v.to_string())
                .unwrap_or_else(|| "<not set>".to_string()),
        ),
        (
            "Concerns",
            if form.concerns.is_empty() {
                "<not set>".to_string()
            } else {
                form.concerns.clone()
            },
        ),
    ];

    let mut items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let selected = index == form.selected_field;
            let prefix = if selected { "▸ " } else { "  " };
            let value_style = if value == "<not set>" {
                Style::default().fg(Colors::FG_MUTED)
            } else if selected {
                Styles::selected()
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(format!("{:<12}", label), Styles::label()),
                Span::styled(value.clone(), value_style),
            ]))
        })
        .collect();

    let build_selected = form.selected_field == RoutineForm::BUILD_ROW;
    let build_style = if build_selected {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Colors::FG_SECONDARY)
    };
    items.push(ListItem::new(""));
    items.push(ListItem::new(Line::from(vec![
        Span::raw(if build_selected { "▸ " } else { "  " }),
        Span::styled("[ Build Routine ]", build_style),
    ])));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your Profile ")
            .title_style(
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
    );

    f.render_widget(list, chunks[2]);
}

/// Render the routine result in the specified area
pub fn render_result_in_area(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Cards
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Your Routine");

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recommended Steps ")
        .title_style(
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(Colors::BORDER_ACTIVE));

    let Some(routine) = state.routine.as_ref().filter(|r| !r.is_empty()) else {
        let empty = Paragraph::new(NO_ROUTINE_MESSAGE)
            .style(Style::default().fg(Colors::WARNING))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(empty, chunks[2]);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for product in routine.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", product.step.to_string()),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                product.name.clone(),
                Style::default()
                    .fg(Colors::FG_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        if !product.description.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("            "),
                Span::styled(
                    product.description.clone(),
                    Style::default().fg(Colors::FG_SECONDARY),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    let cards = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(cards, chunks[2]);
}
