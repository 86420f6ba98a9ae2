use ratatui::style::Color;

pub const TITLE_PURPLE: Color = Color::Rgb(0x6b, 0x21, 0xa8);
pub const HEADING_PURPLE: Color = Color::Rgb(0x7e, 0x22, 0xce);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BODY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const LIKE_PINK: Color = Color::Rgb(0xec, 0x48, 0x99);
pub const SPARKLE: Color = Color::Rgb(0xf9, 0xa8, 0xd4);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x3b, 0x07, 0x64);
