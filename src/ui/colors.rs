use crossterm::style::Color;

// Board colors
pub fn title_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn header_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn caption_fg() -> Color {
    Color::AnsiValue(250)
} // Light gray
pub fn win_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn loss_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
