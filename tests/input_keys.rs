mod common;

use common::{ctrl, key, press, test_app, type_text};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use feline::ui::input::handle_key;
use feline::ui::view::Tab;

#[test]
fn q_quits_outside_search() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits_even_while_searching() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('/'));
    handle_key(&mut app, ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let mut app = test_app();
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert!(!app.should_quit());
}

#[test]
fn tab_and_digits_switch_tabs() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view().active_tab, Tab::Facts);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.view().active_tab, Tab::Breeds);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.view().active_tab, Tab::Facts);
}

#[test]
fn typing_in_search_updates_query() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('/'));
    assert!(app.view().search_focused);

    type_text(&mut app, "Maq");
    assert_eq!(app.view().search_query, "Maq");
    assert!(!app.should_quit(), "q must type while searching");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.view().search_query, "Ma");
    let names: Vec<_> = app.view().filtered().iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["Maine Coon"]);

    press(&mut app, KeyCode::Enter);
    assert!(!app.view().search_focused);
    assert_eq!(app.view().search_query, "Ma");
}

#[test]
fn ctrl_u_clears_query() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "bengal");
    handle_key(&mut app, ctrl('u'));
    assert_eq!(app.view().search_query, "");
}

#[test]
fn shifted_characters_are_typed() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('/'));
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT),
    );
    assert_eq!(app.view().search_query, "S");
}

#[test]
fn space_likes_highlighted_breed() {
    let mut app = test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.view().is_liked("Maine Coon"));

    press(&mut app, KeyCode::Char('l'));
    assert!(!app.view().is_liked("Maine Coon"));
}

#[test]
fn vim_keys_move_cursor() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.view().cursor, 2);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.view().cursor, 1);
}

#[test]
fn list_keys_do_nothing_on_facts_tab() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.view().cursor, 0);
    assert_eq!(app.view().liked_count(), 0);
}

#[test]
fn search_then_like_targets_filtered_breed() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "SPH");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Enter);
    assert!(app.view().is_liked("Sphynx"));
    assert!(!app.should_quit());
}
