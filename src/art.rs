//! The Gregg drawing the speech bubble is overlaid onto.

use crate::palette::Tint::{Beak, Body, Eye, Plain, Shade};
use crate::palette::{Tint, paint};

/// Every row is exactly this many visible columns wide.
pub const ROW_WIDTH: usize = 42;

/// Gregg, one row per entry, split into painted segments.
pub const BACKGROUND: &[&[(Tint, &str)]] = &[
    &[(Body, "     ____                       ____      ")],
    &[(Body, "    /    \\  ___-----------___  /    \\     ")],
    &[(Body, "   /     /--                 --\\     \\    ")],
    &[(Body, "  /     /                       \\     \\   ")],
    &[
        (Body, " /     /"),
        (Plain, "  /---\\           /---\\"),
        (Body, "  \\     \\"),
        (Plain, " /"),
    ],
    &[
        (Body, " \\____/"),
        (Plain, "   |"),
        (Eye, " C "),
        (Plain, "|           |"),
        (Eye, " C "),
        (Plain, "|   "),
        (Body, "\\____/  "),
    ],
    &[
        (Body, "      |"),
        (Plain, "   \\---/"),
        (Beak, "  _______  "),
        (Plain, "\\---/"),
        (Body, "   |       "),
    ],
    &[
        (Body, "      |"),
        (Beak, "         / "),
        (Shade, " ___  "),
        (Beak, "\\"),
        (Body, "         |       "),
    ],
    &[
        (Body, "      |"),
        (Beak, "         |"),
        (Shade, "  \\ /  "),
        (Beak, "|"),
        (Body, "         |       "),
    ],
    &[
        (Body, "      |_"),
        (Beak, "        | \\_"),
        (Shade, "|"),
        (Beak, "_/ |"),
        (Body, "        _|       "),
    ],
    &[
        (Body, "     /  \\"),
        (Beak, "        \\_____/"),
        (Body, "        /  \\      "),
    ],
    &[(Body, "     \\   \\--___           ___--/   /      ")],
    &[(Body, "      \\   \\    -----------    /   /       ")],
    &[(Body, "       \\__/                   \\__/        ")],
];

/// Paint the drawing into one string per row.
#[must_use]
pub fn background() -> Vec<String> {
    BACKGROUND
        .iter()
        .map(|row| {
            row.iter()
                .map(|(tint, text)| paint(*tint, text))
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{strip_styles, visible_width};

    #[test]
    fn every_row_is_row_width_wide() {
        for (index, row) in background().iter().enumerate() {
            assert_eq!(visible_width(row), ROW_WIDTH, "row {index}");
        }
    }

    #[test]
    fn eyes_are_on_the_sixth_row() {
        let rows = background();
        assert_eq!(rows.len(), 14);
        assert!(strip_styles(&rows[5]).contains("| C |"));
    }
}
