//! Overlay the framed bubble onto the drawing.

use crate::ansi::visible_width;
use crate::config::Layout;
use crate::frame::{Frame, pad_end};

/// Splice `lines` (already enclosed by `frame`) onto `background`.
///
/// The bubble rises as the message grows so it stays centered against
/// Gregg; once it is taller than the drawing, blank rows are added on top.
#[must_use]
pub fn composite(
    frame: &Frame,
    lines: &[String],
    background: Vec<String>,
    layout: Layout,
) -> Vec<String> {
    let count = lines.len();
    let top_offset = match count {
        0 | 1 => layout.top_offset,
        2 => layout.top_offset.saturating_sub(1),
        _ => layout.top_offset.saturating_sub(2),
    };

    let padding = count
        .saturating_sub(layout.overflow_threshold)
        .div_ceil(2);
    let mut rows: Vec<String> = std::iter::repeat_n(String::new(), padding)
        .chain(background)
        .collect();

    tracing::debug!(count, top_offset, padding, "compositing speech bubble");

    let top_row = top_offset.saturating_sub(1);
    splice_row(&mut rows, top_row, &frame.top, layout.left_offset);
    for (index, line) in lines.iter().enumerate() {
        splice_row(&mut rows, top_offset + index, line, layout.left_offset);
    }
    splice_row(&mut rows, top_offset + count, &frame.bottom, layout.left_offset);

    rows
}

/// Append `content` to row `index`, growing the canvas and left-padding short
/// rows so the bubble always starts at `left_offset`.
fn splice_row(rows: &mut Vec<String>, index: usize, content: &str, left_offset: usize) {
    if rows.len() <= index {
        rows.resize(index + 1, String::new());
    }
    let row = &mut rows[index];
    if visible_width(row) < left_offset {
        *row = pad_end(row.as_str(), left_offset);
    }
    row.push_str(content);
}
