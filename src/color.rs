use ansi_term::Color as AnsiColor;

/// Escape sequence resetting all attributes.
pub const RESET: &str = "\x1b[0m";

/// The nine colors a reporter line can be painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    None,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    #[cfg(test)]
    pub const ALL: [Color; 9] = [
        Color::None,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    fn to_ansi_color(self) -> Option<AnsiColor> {
        match self {
            Color::None => None,
            Color::Black => Some(AnsiColor::Black),
            Color::Red => Some(AnsiColor::Red),
            Color::Green => Some(AnsiColor::Green),
            Color::Yellow => Some(AnsiColor::Yellow),
            Color::Blue => Some(AnsiColor::Blue),
            Color::Magenta => Some(AnsiColor::Purple),
            Color::Cyan => Some(AnsiColor::Cyan),
            Color::White => Some(AnsiColor::White),
        }
    }

    /// The escape sequence switching the terminal to this color. `None` resets.
    pub fn escape(self) -> String {
        match self.to_ansi_color() {
            Some(color) => color.prefix().to_string(),
            None => RESET.to_string(),
        }
    }

    /// Wrap `text` in this color's escape sequence followed by a reset.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.escape(), text, RESET)
    }
}
