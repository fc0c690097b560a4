//! Keyboard Input Handler
//!
//! Typing edits the focused input field; control keys drive the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use factdash::logic;
use factdash::model::InputField;
use factdash::ContentType;

use crate::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore release/repeat events (reported on some platforms)
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('c') if ctrl => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('t') if ctrl => {
            cycle_content_type(app);
        }
        KeyCode::F(2) => {
            cycle_content_type(app);
        }
        KeyCode::Char('u') if ctrl => {
            app.model.ui.focused_buffer_mut().clear();
        }
        KeyCode::Tab | KeyCode::BackTab => {
            let ui = &mut app.model.ui;
            ui.focus = logic::ui::next_input_field(ui.focus, ui.content_type);
        }
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => {
            app.model.ui.focused_buffer_mut().pop();
        }
        KeyCode::Char(c) if !ctrl => {
            app.model.ui.focused_buffer_mut().push(c);
        }
        _ => {}
    }
}

fn cycle_content_type(app: &mut App) {
    let ui = &mut app.model.ui;
    ui.content_type = logic::ui::cycle_content_type(ui.content_type);
    // The file field is hidden for text submissions
    if ui.content_type == ContentType::Text {
        ui.focus = InputField::Query;
    }
}
