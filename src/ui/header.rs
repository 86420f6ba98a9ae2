use crate::catalog::TITLE;
use crate::ui::theme::{GLOBAL_BORDER, HEADING_PURPLE, MUTED_TEXT, TITLE_PURPLE};
use crate::ui::view::{Tab, ViewState};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Paragraph<'static> {
        let line = Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(TITLE_PURPLE)
                .add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    pub fn tabs(&self, view: &ViewState) -> Tabs<'static> {
        let titles = Tab::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| Line::from(format!(" {} {} ", idx + 1, tab.title())));

        Tabs::new(titles)
            .select(view.active_tab.index())
            .style(Style::default().fg(MUTED_TEXT))
            .highlight_style(
                Style::default()
                    .fg(HEADING_PURPLE)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
