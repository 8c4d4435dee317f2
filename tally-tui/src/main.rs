//! tally-tui - Terminal UI for Tally
//!
//! Interactive todo list in the terminal. All state lives in a single
//! reducer-driven store; the main loop polls events, dispatches actions,
//! and re-renders.

use crossterm::event::KeyCode;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use libtally::{Filter, TodoAction};
use tally_tui::{
    app::{
        event::{EventHandler, TuiEvent},
        reduce, Action, AppState, Mode,
    },
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

const INPUT_PLACEHOLDER: &str = "What needs to be done?";

fn main() -> Result<()> {
    libtally::logging::init_default();

    // Fail before touching the terminal if the environment is bad
    let state = initial_state()?;

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    tracing::debug!("terminal ready, entering event loop");

    let result = run_app(&mut terminal, state);

    restore_terminal(terminal)?;
    tracing::debug!("terminal restored");

    result
}

/// Build the boot state, honoring `TALLY_FILTER` for the starting filter
fn initial_state() -> Result<AppState> {
    let mut state = AppState::new();

    if let Ok(raw) = std::env::var("TALLY_FILTER") {
        let filter: Filter = raw.parse()?;
        state = reduce(state, Action::Todo(TodoAction::SetFilter(filter)));
    }

    Ok(state)
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    // Stateful text widget, shared between the add box and the edit
    // popup; re-seeded on every mode change
    let mut textarea = seeded_textarea("");
    let mut prev_mode = state.mode;

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        if state.mode != prev_mode {
            textarea = match state.mode {
                Mode::Edit => seeded_textarea(&state.edit_draft),
                Mode::Input | Mode::List => seeded_textarea(&state.input),
            };
            prev_mode = state.mode;
        }

        style_textarea(&mut textarea, state.mode);

        terminal.draw(|frame| {
            ui::render(frame, &state, &textarea);
        })?;

        let tui_event = event_handler.next()?;

        let action = match tui_event {
            TuiEvent::Key(key) => {
                let editing = matches!(state.mode, Mode::Input | Mode::Edit);
                // Keys the reducer must see even while a text box has focus
                let reserved = matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::F(_));

                if editing && !state.help_visible && !reserved {
                    // Let the textarea handle the input, then sync the
                    // draft back into state
                    textarea.input(key);
                    let content = textarea.lines().join("\n");
                    match state.mode {
                        Mode::Edit => Action::EditDraftChanged(content),
                        Mode::Input | Mode::List => Action::InputChanged(content),
                    }
                } else {
                    Action::Key(key)
                }
            }
            other => other.into(),
        };

        // Update state through reducer
        state = reduce(state, action);

        // A successful add clears the draft while staying in input mode
        if state.mode == Mode::Input && state.input.is_empty() && !textarea.is_empty() {
            textarea = seeded_textarea("");
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Fresh textarea seeded with the given draft, cursor at the end
fn seeded_textarea(content: &str) -> TextArea<'static> {
    let mut textarea = if content.is_empty() {
        TextArea::default()
    } else {
        TextArea::from(content.lines())
    };
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea.move_cursor(CursorMove::End);
    textarea
}

/// Update the textarea's block to match the current mode
fn style_textarea(textarea: &mut TextArea, mode: Mode) {
    let (title, color) = match mode {
        Mode::Edit => (" Edit todo ", Color::Yellow),
        Mode::Input => (" New todo ", Color::Green),
        Mode::List => (" New todo ", Color::DarkGray),
    };

    textarea.set_block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
}
