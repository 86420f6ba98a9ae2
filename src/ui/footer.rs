use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER, LIKE_PINK};
use crate::ui::view::ViewState;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, view: &ViewState) -> Paragraph<'static> {
        let hints = if view.search_focused {
            " Type to filter │ Backspace: Delete │ Ctrl+U: Clear │ Enter/Esc: Done"
        } else {
            " Tab: Switch │ /: Search │ ↑↓: Move │ Space: Like │ q: Quit"
        };
        let liked = format!("♥ {} ", view.liked_count());
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count
        let hints_width = hints.chars().count();
        let right_width = liked.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(liked, Style::default().fg(LIKE_PINK)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
