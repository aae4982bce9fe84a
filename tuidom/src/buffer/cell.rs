use crate::types::{Rgb, TextStyle};

/// One terminal cell: a glyph and how to paint it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width character drawn in the previous cell.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl Cell {
    /// A glyph in the default colors: white on black, no attributes.
    pub fn new(char: char) -> Self {
        Self::styled(char, Rgb::new(255, 255, 255), Rgb::new(0, 0, 0), TextStyle::new())
    }

    pub fn styled(char: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }

    /// Placeholder occupying the second column of a wide glyph.
    pub fn continuation(bg: Rgb) -> Self {
        Self {
            wide_continuation: true,
            bg,
            ..Self::new(' ')
        }
    }
}
