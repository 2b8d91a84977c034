//! Fixed four-color palette shared by every screen.

use colored::{Color, ColoredString, Colorize};

/// Light blue, `ESC[96m`.
pub const LBLUE: Color = Color::BrightCyan;
/// Red, `ESC[91m`.
pub const RED: Color = Color::BrightRed;
/// Green, `ESC[32m`.
pub const GRN: Color = Color::Green;
/// Yellow, `ESC[93m`.
pub const YLW: Color = Color::BrightYellow;

/// Colors `text`; a no-op when colored output is disabled.
pub fn paint(text: &str, color: Color) -> ColoredString {
    text.color(color)
}

/// A box drawn with a single border color, padded to a fixed inner width.
pub struct Frame {
    border: Color,
    width: usize,
}

impl Frame {
    pub fn new(border: Color, width: usize) -> Self {
        Self { border, width }
    }

    pub fn top(&self) -> String {
        paint(&format!("╔{}╗", "═".repeat(self.width)), self.border).to_string()
    }

    pub fn bottom(&self) -> String {
        paint(&format!("╚{}╝", "═".repeat(self.width)), self.border).to_string()
    }

    /// One boxed row; segments longer than the inner width are not truncated.
    pub fn row(&self, segments: &[(&str, Color)]) -> String {
        let visible: usize = segments.iter().map(|(text, _)| text.chars().count()).sum();
        let padding = self.width.saturating_sub(visible);

        let mut line = paint("║", self.border).to_string();
        for (text, color) in segments {
            line.push_str(&paint(text, *color).to_string());
        }
        line.push_str(&" ".repeat(padding));
        line.push_str(&paint("║", self.border).to_string());
        line
    }

    pub fn blank(&self) -> String {
        self.row(&[])
    }
}
