use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub intro: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);
    Regions {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        intro: chunks[3],
        footer: chunks[4],
    }
}

/// Splits the breeds body into (search box, list, detail pane).
pub fn breed_regions(body: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    (rows[0], columns[0], columns[1])
}

/// Maps a position in thousandths onto a cell inside `area`.
pub fn scaled_point(area: Rect, x: u16, y: u16, scale: u16) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 || scale == 0 {
        return None;
    }
    let col = u32::from(x.min(scale - 1)) * u32::from(area.width) / u32::from(scale);
    let row = u32::from(y.min(scale - 1)) * u32::from(area.height) / u32::from(scale);
    Some((area.x + col as u16, area.y + row as u16))
}
