//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! The textarea is owned by the main loop (it is a stateful widget) and
//! passed in by reference.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use libtally::Filter;

use crate::app::{AppState, Mode};

/// Placeholder shown when the filtered list has nothing to display
const EMPTY_LIST_PLACEHOLDER: &str = "No todos here!";

/// Render the application UI
///
/// Main rendering entry point: layout is a fixed column of input box,
/// filter bar, todo list, and status bar, with overlays on top.
pub fn render(frame: &mut Frame, state: &AppState, textarea: &TextArea) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Add-input box
            Constraint::Length(1), // Filter bar
            Constraint::Min(3),    // Todo list
            Constraint::Length(2), // Status bar
        ])
        .split(area);

    render_input(frame, chunks[0], state, textarea);
    render_filter_bar(frame, chunks[1], state);
    render_list(frame, chunks[2], state);
    render_status_bar(frame, chunks[3], state);

    if state.mode == Mode::Edit {
        render_edit_popup(frame, area, textarea);
    }

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

/// Render the add-input box. The live textarea is shown only while it
/// has focus; otherwise the stored draft (or a hint) is echoed back.
fn render_input(frame: &mut Frame, area: Rect, state: &AppState, textarea: &TextArea) {
    if state.mode == Mode::Input {
        frame.render_widget(textarea, area);
        return;
    }

    let block = Block::default()
        .title(" New todo ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let content = if state.input.is_empty() {
        Line::from(Span::styled(
            "What needs to be done? (press i)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(state.input.as_str())
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Display label for a filter tab
fn filter_label(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "All",
        Filter::Active => "Active",
        Filter::Completed => "Completed",
    }
}

/// Render the filter bar with the active filter highlighted
fn render_filter_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();

    for (pos, filter) in [Filter::All, Filter::Active, Filter::Completed]
        .into_iter()
        .enumerate()
    {
        if pos > 0 {
            spans.push(Span::raw("  "));
        }

        let label = format!("[{}] {}", pos + 1, filter_label(filter));
        let style = if filter == state.store.filter {
            if state.config.colors_enabled {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::REVERSED)
            }
        } else {
            Style::default().fg(Color::Gray)
        };

        spans.push(Span::styled(label, style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Render the filtered todo list, or the placeholder when it is empty
fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title(" Todos ").borders(Borders::ALL);

    let visible = state.store.visible();
    if visible.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            EMPTY_LIST_PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block)
        .alignment(Alignment::Center);

        frame.render_widget(placeholder, area);
        return;
    }

    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .map(|(pos, todo)| {
            let is_selected = pos == state.selected;

            let cursor = if is_selected { "> " } else { "  " };
            let checkbox = match (todo.completed, state.config.unicode_enabled) {
                (true, true) => "✓ ",
                (false, true) => "○ ",
                (true, false) => "[x] ",
                (false, false) => "[ ] ",
            };

            let cursor_style = if is_selected {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let text_style = if todo.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(cursor, cursor_style),
                Span::raw(checkbox),
                Span::styled(todo.text.clone(), text_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the status bar: remaining count, active filter, key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let remaining = state.store.remaining();
    let items = format!(
        "{} item{} left",
        remaining,
        if remaining == 1 { "" } else { "s" }
    );

    let hints = match state.mode {
        Mode::List => "i: add | space: toggle | e: edit | d: delete | tab: filter | F1: help | q: quit",
        Mode::Input => "enter: add | esc: back",
        Mode::Edit => "enter: save | esc: cancel",
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(items, Style::default().fg(Color::Cyan)),
            Span::raw(" | filter: "),
            Span::raw(state.store.filter.as_str()),
        ]),
        Line::from(Span::styled(hints, Style::default().fg(Color::Gray))),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the edit popup over the list
fn render_edit_popup(frame: &mut Frame, area: Rect, textarea: &TextArea) {
    let popup_area = centered_rect(60, 20, area);

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(textarea, popup_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("List:"),
        Line::from("  i / a     - Add a new todo"),
        Line::from("  j / k     - Move the cursor"),
        Line::from("  space     - Toggle completion"),
        Line::from("  e         - Edit the selected todo"),
        Line::from("  d         - Delete the selected todo"),
        Line::from("  1 / 2 / 3 - Filter: all / active / completed"),
        Line::from("  tab       - Cycle the filter"),
        Line::from("  q         - Quit"),
        Line::from(""),
        Line::from("Input / edit:"),
        Line::from("  enter     - Commit"),
        Line::from("  esc       - Cancel"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
