//! Shared test helpers.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feline::config::Config;
use feline::ui::app::App;
use feline::ui::input::handle_key;

pub fn test_app() -> App {
    let mut config = Config::default();
    config.sparkles.enabled = false;
    App::new(&config)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}
