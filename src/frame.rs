//! Padding and the rounded speech-bubble border.

use crate::ansi::visible_width;
use crate::palette::RESET;

/// Glyphs for one box style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

pub const ROUND: BorderGlyphs = BorderGlyphs {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

/// Right-pad `s` with spaces to `width` visible columns.
#[must_use]
pub fn pad_end(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Border strings for a bubble whose content is `width` columns wide.
///
/// Every piece starts with a reset so message styling cannot bleed into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub top: String,
    pub side: String,
    pub bottom: String,
    width: usize,
}

impl Frame {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self::with_glyphs(width, ROUND)
    }

    #[must_use]
    pub fn with_glyphs(width: usize, glyphs: BorderGlyphs) -> Self {
        // One column of margin on each side of the content.
        let horizontal = glyphs.horizontal.to_string().repeat(width + 2);
        Self {
            top: format!("{RESET}{}{horizontal}{}", glyphs.top_left, glyphs.top_right),
            side: format!("{RESET}{}{RESET}", glyphs.vertical),
            bottom: format!(
                "{RESET}{}{horizontal}{}",
                glyphs.bottom_left, glyphs.bottom_right
            ),
            width,
        }
    }

    /// Visible columns of a full bubble row, borders included.
    #[must_use]
    pub fn outer_width(&self) -> usize {
        self.width + 4
    }

    /// Pad a styled line and put it between the side borders.
    #[must_use]
    pub fn enclose(&self, line: &str) -> String {
        let padded = pad_end(&format!("{RESET}{line}{RESET}"), self.width);
        format!("{side} {padded} {side}", side = self.side)
    }

    #[must_use]
    pub fn enclose_all(&self, lines: &[String]) -> Vec<String> {
        lines.iter().map(|line| self.enclose(line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::strip_styles;
    use pretty_assertions::assert_eq;

    #[test]
    fn padding_ignores_styles() {
        let padded = pad_end("\x1b[31mhi\x1b[39m", 5);
        assert_eq!(visible_width(&padded), 5);
        assert!(padded.ends_with("   "));
        assert_eq!(pad_end("hi", 4), "hi  ");
        assert_eq!(pad_end("too wide", 3), "too wide");
    }

    #[test]
    fn borders_match_content_width() {
        let frame = Frame::new(24);
        assert_eq!(strip_styles(&frame.top), format!("╭{}╮", "─".repeat(26)));
        assert_eq!(strip_styles(&frame.bottom), format!("╰{}╯", "─".repeat(26)));
        assert_eq!(visible_width(&frame.top), frame.outer_width());
    }

    #[test]
    fn enclosed_line_is_framed_and_padded() {
        let frame = Frame::new(10);
        let line = frame.enclose("\x1b[35mhey");
        assert_eq!(strip_styles(&line), "│ hey        │");
        assert_eq!(visible_width(&line), frame.outer_width());
    }

    #[test]
    fn sides_are_wrapped_in_resets() {
        assert_eq!(Frame::new(3).side, "\x1b[0m│\x1b[0m");
    }
}
