//! Gregg color palette and semantic brushes.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const BOLD_OFF: &str = "\x1b[22m";
pub const FG_DEFAULT: &str = "\x1b[39m";

pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";
pub const GRAY: &str = "\x1b[90m";

/// Brushes used by the background drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Unstyled text, inherits whatever the terminal has.
    Plain,
    /// Feathers and outline.
    Body,
    /// Pupils.
    Eye,
    /// Beak outline.
    Beak,
    /// Shading inside the beak.
    Shade,
}

/// Closes a bold colored brush.
const BOLD_CLOSE: &[&str] = &[FG_DEFAULT, BOLD_OFF];

impl Tint {
    /// Sequences that start the brush, in order.
    #[must_use]
    pub fn open(self) -> &'static [&'static str] {
        match self {
            Tint::Plain => &[],
            Tint::Body => &[BOLD, YELLOW],
            Tint::Eye => &[GRAY],
            Tint::Beak => &[BOLD, MAGENTA],
            Tint::Shade => &[BOLD, GRAY],
        }
    }

    /// Sequences that end the brush, in order.
    #[must_use]
    pub fn close(self) -> &'static [&'static str] {
        match self {
            Tint::Plain => &[],
            Tint::Eye => &[FG_DEFAULT],
            Tint::Body | Tint::Beak | Tint::Shade => BOLD_CLOSE,
        }
    }
}

/// Wrap `text` in the open and close codes of `tint`.
#[must_use]
pub fn paint(tint: Tint, text: &str) -> String {
    format!("{}{text}{}", tint.open().concat(), tint.close().concat())
}

/// Message shown when nothing was given to say.
#[must_use]
pub fn placeholder_greeting() -> String {
    format!("What does the Gregg say?\n{MAGENTA}Squee squee!{FG_DEFAULT}")
}
