mod common;

use common::{press, test_app, type_text};
use crossterm::event::KeyCode;
use feline::config::Config;
use feline::ui::app::App;
use feline::ui::render::draw;
use feline::ui::view::ViewIntent;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::time::Instant;

fn render(app: &App) -> Buffer {
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn breeds_tab_shows_title_tabs_and_list() {
    let app = test_app();
    let text = screen_text(&render(&app));

    assert!(text.contains("Feline Fascination"));
    assert!(text.contains("Cat Breeds"));
    assert!(text.contains("Cat Facts"));
    assert!(text.contains("Popular Cat Breeds"));
    for name in ["Siamese", "Maine Coon", "Persian", "Bengal", "Sphynx"] {
        assert!(text.contains(name), "missing {name}");
    }
    assert!(text.contains("distinctive coloring"));
}

#[test]
fn facts_tab_lists_facts() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    let text = screen_text(&render(&app));

    assert!(text.contains("Fascinating Cat Facts"));
    assert!(text.contains("clowder"));
    assert!(!text.contains("Popular Cat Breeds"));
}

#[test]
fn filtered_list_hides_non_matching_breeds() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "an");
    let text = screen_text(&render(&app));

    assert!(text.contains("Persian"));
    assert!(!text.contains("Bengal"));
    assert!(!text.contains("Siamese"));
}

#[test]
fn empty_result_shows_message() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "dog");
    let text = screen_text(&render(&app));
    assert!(text.contains("No breeds match \"dog\""));
}

#[test]
fn liked_count_appears_in_footer() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char(' '));
    let text = screen_text(&render(&app));
    assert!(text.contains("♥ 1"));
    assert!(text.contains("Liked"));
}

fn sparkled_app(seed: u64) -> App {
    let mut config = Config::default();
    config.sparkles.max_alive = 50;
    let mut app = App::with_sparkle_seed(&config, seed);
    let now = Instant::now();
    for _ in 0..50 {
        app.on_sparkle(now);
    }
    app
}

#[test]
fn sparkles_render_without_clobbering_text() {
    for seed in 0..200 {
        let app = sparkled_app(seed);
        assert_eq!(app.sparkles().len(), 50);

        let text = screen_text(&render(&app));
        for name in ["Siamese", "Maine Coon", "Persian", "Bengal", "Sphynx"] {
            assert!(text.contains(name), "seed {seed}: sparkle split {name}");
        }
        assert!(
            text.contains("Known for their distinctive coloring"),
            "seed {seed}: sparkle split the description"
        );
    }
}

#[test]
fn sparkles_leave_empty_result_message_intact() {
    for seed in 0..200 {
        let mut app = sparkled_app(seed);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "dog");

        let text = screen_text(&render(&app));
        assert!(
            text.contains("No breeds match \"dog\""),
            "seed {seed}: sparkle split the empty-result message"
        );
    }
}

#[test]
fn sparkles_appear_in_free_space() {
    let app = sparkled_app(7);
    let text = screen_text(&render(&app));
    assert!(
        ['✦', '✧', '⋆', '·'].iter().any(|glyph| text.contains(*glyph)),
        "no sparkle drawn"
    );
}

#[test]
fn search_cursor_clamps_for_very_long_query() {
    let mut app = test_app();
    app.dispatch(ViewIntent::FocusSearch);
    // 65_538 truncates to 2 as a u16
    app.dispatch(ViewIntent::SetSearchQuery("x".repeat(65_538)));

    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| draw(frame, &app)).expect("draw");
    let cursor = terminal.get_cursor_position().expect("cursor");
    assert_eq!(cursor.x, 98);
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = test_app();
    let backend = TestBackend::new(10, 4);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| draw(frame, &app)).expect("draw");
}
