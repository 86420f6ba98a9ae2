use std::time::Instant;

use crate::catalog::{FACTS, INTRO};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{breed_regions, layout_regions, scaled_point};
use crate::ui::sparkles::{SparkleField, POSITION_SCALE};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, HEADING_PURPLE, LIKE_PINK, MUTED_TEXT, SPARKLE,
};
use crate::ui::view::{Tab, ViewState};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const LIKED_MARK: &str = "♥";
const UNLIKED_MARK: &str = "♡";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let view = app.view();

    let header = Header::new();
    frame.render_widget(header.title(), regions.header);
    frame.render_widget(header.tabs(view), regions.tabs);

    frame.render_widget(Clear, regions.body);
    match view.active_tab {
        Tab::Breeds => draw_breeds(frame, view, regions.body),
        Tab::Facts => draw_facts(frame, regions.body),
    }
    draw_sparkles(frame, app.sparkles(), regions.body, Instant::now());

    let intro = Paragraph::new(INTRO)
        .style(Style::default().fg(MUTED_TEXT))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(intro, regions.intro);

    let footer = Footer::new();
    frame.render_widget(footer.widget(regions.footer, view), regions.footer);
}

fn heading_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(HEADING_PURPLE)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_breeds(frame: &mut Frame<'_>, view: &ViewState, body: Rect) {
    let (search_area, list_area, detail_area) = breed_regions(body);

    let search_border = if view.search_focused {
        HEADING_PURPLE
    } else {
        GLOBAL_BORDER
    };
    let search = Paragraph::new(view.search_query.clone())
        .style(Style::default().fg(BODY_TEXT))
        .block(
            Block::default()
                .title(" Search (/) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(search_border)),
        );
    frame.render_widget(search, search_area);
    if view.search_focused && search_area.width > 2 && search_area.height > 2 {
        let typed = u16::try_from(view.search_query.chars().count()).unwrap_or(u16::MAX);
        let x = search_area.x + 1 + typed.min(search_area.width.saturating_sub(3));
        frame.set_cursor_position(Position::new(x, search_area.y + 1));
    }

    let breeds = view.filtered();
    if breeds.is_empty() {
        let empty = Paragraph::new(format!("No breeds match \"{}\"", view.search_query))
            .style(Style::default().fg(MUTED_TEXT))
            .wrap(Wrap { trim: true })
            .block(heading_block(" Popular Cat Breeds "));
        frame.render_widget(empty, list_area);
        frame.render_widget(heading_block(" Details "), detail_area);
        return;
    }

    let items: Vec<ListItem> = breeds
        .iter()
        .map(|breed| {
            let liked = view.is_liked(breed.name);
            let (mark, mark_color) = if liked {
                (LIKED_MARK, LIKE_PINK)
            } else {
                (UNLIKED_MARK, MUTED_TEXT)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{mark} "), Style::default().fg(mark_color)),
                Span::styled(breed.name, Style::default().fg(BODY_TEXT)),
            ]))
        })
        .collect();

    let cursor = view.cursor.min(breeds.len() - 1);
    let list = List::new(items)
        .block(heading_block(" Popular Cat Breeds "))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ");
    let mut state = ListState::default();
    state.select(Some(cursor));
    frame.render_stateful_widget(list, list_area, &mut state);

    let breed = breeds[cursor];
    let liked_line = if view.is_liked(breed.name) {
        Line::from(Span::styled(
            format!("{LIKED_MARK} Liked"),
            Style::default().fg(LIKE_PINK),
        ))
    } else {
        Line::from(Span::styled(
            format!("{UNLIKED_MARK} Press Space to like"),
            Style::default().fg(MUTED_TEXT),
        ))
    };
    let detail = Paragraph::new(vec![
        Line::from(Span::styled(
            breed.name,
            Style::default()
                .fg(HEADING_PURPLE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(breed.description, Style::default().fg(BODY_TEXT))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Image: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(breed.image_ref, Style::default().fg(BODY_TEXT)),
        ]),
        Line::from(""),
        liked_line,
    ])
    .wrap(Wrap { trim: false })
    .block(heading_block(" Details "));
    frame.render_widget(detail, detail_area);
}

fn draw_facts(frame: &mut Frame<'_>, body: Rect) {
    let items: Vec<ListItem> = FACTS
        .iter()
        .map(|fact| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(HEADING_PURPLE)),
                Span::styled(*fact, Style::default().fg(BODY_TEXT)),
            ]))
        })
        .collect();
    let list = List::new(items).block(heading_block(" Fascinating Cat Facts "));
    frame.render_widget(list, body);
}

/// Paints sparkles onto blank cells whose horizontal neighbors are blank too.
///
/// A lone space between two words is never a candidate, so text stays intact.
fn draw_sparkles(frame: &mut Frame<'_>, field: &SparkleField, area: Rect, now: Instant) {
    let buffer = frame.buffer_mut();
    for sparkle in field.sparkles() {
        let Some((x, y)) = scaled_point(area, sparkle.x, sparkle.y, POSITION_SCALE) else {
            continue;
        };
        let blank = |col: u16| {
            buffer
                .cell((col, y))
                .map_or(true, |cell| cell.symbol() == " ")
        };
        let left_blank = x == area.x || blank(x - 1);
        let right_blank = x + 1 >= area.right() || blank(x + 1);
        if !left_blank || !right_blank {
            continue;
        }
        let Some(cell) = buffer.cell_mut((x, y)) else {
            continue;
        };
        if cell.symbol() != " " {
            continue;
        }
        let mut style = Style::default().fg(SPARKLE);
        if sparkle.is_fading(now, field.lifetime()) {
            style = style.add_modifier(Modifier::DIM);
        }
        cell.set_char(sparkle.glyph).set_style(style);
    }
}
