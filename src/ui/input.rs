use crate::ui::app::App;
use crate::ui::view::{Tab, ViewIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.view().search_focused {
        handle_search_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch(ViewIntent::NextTab),
        KeyCode::Char('1') => app.dispatch(ViewIntent::SetActiveTab(Tab::Breeds)),
        KeyCode::Char('2') => app.dispatch(ViewIntent::SetActiveTab(Tab::Facts)),
        KeyCode::Char('/') => app.dispatch(ViewIntent::FocusSearch),
        _ if app.view().active_tab == Tab::Breeds => handle_breeds_key(app, key),
        _ => {}
    }
}

fn handle_breeds_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(ViewIntent::MoveCursor(-1)),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(ViewIntent::MoveCursor(1)),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('l') => {
            app.dispatch(ViewIntent::ToggleLikeAtCursor)
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.dispatch(ViewIntent::BlurSearch),
        KeyCode::Up => app.dispatch(ViewIntent::MoveCursor(-1)),
        KeyCode::Down => app.dispatch(ViewIntent::MoveCursor(1)),
        KeyCode::Backspace => {
            let mut query = app.view().search_query.clone();
            if query.pop().is_some() {
                app.dispatch(ViewIntent::SetSearchQuery(query));
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(ViewIntent::SetSearchQuery(String::new()))
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut query = app.view().search_query.clone();
            query.push(ch);
            app.dispatch(ViewIntent::SetSearchQuery(query));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
