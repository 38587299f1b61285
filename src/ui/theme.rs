use crate::annotation::style::Hue;
use ratatui::style::Color;

/// Base colors of the terminal UI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            accent: Color::Rgb(59, 130, 246),   // #3B82F6 Selector Blue
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
            error: Color::Rgb(248, 113, 113),   // #F87171
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Terminal color for a highlight hue.
///
/// The UI background is dark, so the 400 shades are used.
pub fn hue_color(hue: Hue) -> Color {
    match hue {
        Hue::Emerald => Color::Rgb(52, 211, 153),
        Hue::Violet => Color::Rgb(167, 139, 250),
        Hue::Red => Color::Rgb(248, 113, 113),
        Hue::Amber => Color::Rgb(251, 191, 36),
        Hue::Sky => Color::Rgb(56, 189, 248),
        Hue::Orange => Color::Rgb(251, 146, 60),
        Hue::Yellow => Color::Rgb(250, 204, 21),
        Hue::Green => Color::Rgb(74, 222, 128),
        Hue::Lime => Color::Rgb(163, 230, 53),
        Hue::Cyan => Color::Rgb(34, 211, 238),
        Hue::Teal => Color::Rgb(45, 212, 191),
        Hue::Zinc => Color::Rgb(161, 161, 170),
        Hue::Indigo => Color::Rgb(129, 140, 248),
        Hue::Neutral => Color::Rgb(163, 163, 163),
        Hue::Purple => Color::Rgb(192, 132, 252),
        Hue::Pink => Color::Rgb(244, 114, 182),
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}
