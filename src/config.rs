//! Layout constants and per-call render options.

use crate::ansi::visible_width;

pub const DEFAULT_TOP_OFFSET: usize = 4;
pub const DEFAULT_LEFT_OFFSET: usize = crate::art::ROW_WIDTH;
pub const DEFAULT_WIDTH: usize = 24;
/// Beyond this many wrapped lines the bubble is taller than Gregg.
pub const MAX_LINES_BEFORE_OVERFLOW: usize = 7;

// === Types ===

/// Where the bubble sits relative to the drawing.
///
/// Copied into every render call, so adjustments made while compositing never
/// leak into the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Row just below the bubble's top border for a one-line message.
    pub top_offset: usize,
    /// Column where the bubble starts.
    pub left_offset: usize,
    /// Wrapped line count past which blank rows are added above the drawing.
    pub overflow_threshold: usize,
    /// Wrap width used when no `max_length` is requested.
    pub default_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            top_offset: DEFAULT_TOP_OFFSET,
            left_offset: DEFAULT_LEFT_OFFSET,
            overflow_threshold: MAX_LINES_BEFORE_OVERFLOW,
            default_width: DEFAULT_WIDTH,
        }
    }
}

/// Caller-supplied options for [`render`](crate::render).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Requested wrap width. `Some(0)` is treated as unset.
    pub max_length: Option<usize>,
}

impl RenderOptions {
    #[must_use]
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
        }
    }

    /// Wrap width for `plain`: the requested width, widened so that no word
    /// needs splitting.
    #[must_use]
    pub fn effective_width(&self, plain: &str, layout: &Layout) -> usize {
        match self.max_length.filter(|&n| n > 0) {
            Some(requested) => requested.max(longest_word_width(plain)),
            None => layout.default_width,
        }
    }
}

fn longest_word_width(plain: &str) -> usize {
    plain
        .to_lowercase()
        .split_whitespace()
        .map(visible_width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_width_without_request() {
        let layout = Layout::default();
        assert_eq!(RenderOptions::default().effective_width("hi", &layout), 24);
        assert_eq!(
            RenderOptions::with_max_length(0).effective_width("hi", &layout),
            24
        );
    }

    #[test]
    fn requested_width_wins_over_short_words() {
        let options = RenderOptions::with_max_length(10);
        assert_eq!(options.effective_width("a bb ccc", &Layout::default()), 10);
    }

    #[test]
    fn longest_word_widens_the_request() {
        let options = RenderOptions::with_max_length(5);
        assert_eq!(
            options.effective_width("tiny antidisestablishment", &Layout::default()),
            20
        );
    }

    #[test]
    fn layout_defaults_match_the_drawing() {
        let layout = Layout::default();
        assert_eq!(layout.top_offset, 4);
        assert_eq!(layout.left_offset, 42);
        assert_eq!(layout.overflow_threshold, 7);
    }
}
