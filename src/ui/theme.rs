use ratatui::style::Color;

use crate::ui::presentation::CountStyle;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TITLE_ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const COUNT_NORMAL: Color = Color::Rgb(0x00, 0x99, 0xcc);
pub const COUNT_ALERT: Color = Color::Rgb(0xcc, 0x00, 0x00);
pub const CONTROL_BG: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn count_color(style: CountStyle) -> Color {
    match style {
        CountStyle::Normal => COUNT_NORMAL,
        CountStyle::Alert => COUNT_ALERT,
    }
}
