//! Gregg says things.
//!
//! [`render`] draws Gregg and puts a message next to him in a rounded speech
//! bubble. The message may carry its own terminal styling; it is measured and
//! wrapped on its visible text and the styling is put back afterwards.
//!
//! ```
//! use greggsay::{RenderOptions, render};
//!
//! let greeting = render(Some("I like turtles."), &RenderOptions::default());
//! assert!(greeting.ends_with('\n'));
//! ```

pub mod ansi;
pub mod art;
pub mod compose;
pub mod config;
pub mod frame;
pub mod palette;
pub mod restyle;
pub mod wrap;

pub use crate::ansi::{StyleRuns, extract_runs, strip_styles, visible_width};
pub use crate::config::{Layout, RenderOptions};
pub use crate::wrap::wrap;

use crate::frame::Frame;

/// Render Gregg saying `message`, using the default layout.
///
/// A missing or empty message falls back to the placeholder greeting. The
/// result is newline-joined rows ending with a trailing newline.
#[must_use]
pub fn render(message: Option<&str>, options: &RenderOptions) -> String {
    render_with_layout(message, options, Layout::default())
}

/// Same as [`render`] with an explicit [`Layout`].
#[must_use]
pub fn render_with_layout(
    message: Option<&str>,
    options: &RenderOptions,
    layout: Layout,
) -> String {
    let message = match message {
        Some(message) if !message.is_empty() => message.trim().to_string(),
        _ => palette::placeholder_greeting(),
    };

    let plain = strip_styles(&message);
    let width = options.effective_width(&plain, &layout);
    let runs = extract_runs(&message);
    let segments = wrap::wrap_segments(&plain, width);
    tracing::debug!(
        width,
        lines = segments.len(),
        style_runs = runs.len(),
        "wrapped message"
    );

    let frame = Frame::new(width);
    let lines = frame.enclose_all(&restyle::restyle(&segments, &runs));
    let rows = compose::composite(&frame, &lines, art::background(), layout);

    let mut out = rows.join("\n");
    out.push('\n');
    out
}
