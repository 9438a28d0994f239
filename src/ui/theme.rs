use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub quote: Color,
    pub author: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub field_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    quote: Color::Rgb(205, 214, 244),
    author: Color::Rgb(249, 226, 175),         // Yellow for author names
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    bar_bg: Color::Rgb(50, 50, 70),            // Slightly lighter BG for bars
    field_bg: Color::Rgb(40, 40, 58),
};
