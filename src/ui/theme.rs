use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x14, 0xb8, 0xa6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BUTTON_TEXT: Color = Color::Rgb(0x93, 0xc5, 0xfd);
pub const INPUT_TEXT: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BORDER: Color = Color::Rgb(0x0f, 0x76, 0x6e);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
