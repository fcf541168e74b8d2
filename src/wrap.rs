//! Greedy hard word wrapping over style-free text.

use unicode_width::UnicodeWidthChar;

/// One wrapped line, remembering where it came from in the plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Char offset of the first char of `text` in the wrapped input.
    pub start: usize,
    pub text: String,
}

/// Wrap `plain` to `width` columns.
///
/// Breaks on whitespace, keeps explicit newlines, and only splits a word when
/// the word alone is wider than `width`. Empty input gives one empty line.
#[must_use]
pub fn wrap(plain: &str, width: usize) -> Vec<String> {
    wrap_segments(plain, width)
        .into_iter()
        .map(|segment| segment.text)
        .collect()
}

/// Same as [`wrap`], keeping each line's offset into `plain`.
#[must_use]
pub fn wrap_segments(plain: &str, width: usize) -> Vec<Segment> {
    let width = width.max(1);
    let chars: Vec<char> = plain.chars().collect();
    let mut out = Vec::new();

    let mut from = 0usize;
    loop {
        let to = chars[from..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(chars.len(), |pos| from + pos);
        wrap_paragraph(&chars, from, to, width, &mut out);
        if to == chars.len() {
            break;
        }
        from = to + 1;
    }

    out
}

fn wrap_paragraph(chars: &[char], from: usize, to: usize, width: usize, out: &mut Vec<Segment>) {
    let mut line: Option<(usize, usize)> = None;

    for (start, end) in words(chars, from, to) {
        if let Some((line_start, line_end)) = line {
            if span_width(&chars[line_start..end]) <= width {
                line = Some((line_start, end));
                continue;
            }
            out.push(slice(chars, line_start, line_end));
            line = None;
        }

        if span_width(&chars[start..end]) <= width {
            line = Some((start, end));
            continue;
        }

        // Hard split; the last piece stays open for the following words.
        let mut piece_start = start;
        let mut piece_width = 0usize;
        for idx in start..end {
            let w = char_width(chars[idx]);
            if idx > piece_start && piece_width + w > width {
                out.push(slice(chars, piece_start, idx));
                piece_start = idx;
                piece_width = 0;
            }
            piece_width += w;
        }
        line = Some((piece_start, end));
    }

    match line {
        Some((start, end)) => out.push(slice(chars, start, end)),
        None => out.push(Segment {
            start: from,
            text: String::new(),
        }),
    }
}

fn slice(chars: &[char], start: usize, end: usize) -> Segment {
    Segment {
        start,
        text: chars[start..end].iter().collect(),
    }
}

/// Maximal runs of non-whitespace chars in `chars[from..to]`.
fn words(chars: &[char], from: usize, to: usize) -> Vec<(usize, usize)> {
    let mut words = Vec::new();
    let mut start = None;
    for idx in from..to {
        match (chars[idx].is_whitespace(), start) {
            (false, None) => start = Some(idx),
            (true, Some(s)) => {
                words.push((s, idx));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push((s, to));
    }
    words
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

fn span_width(chars: &[char]) -> usize {
    chars.iter().copied().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_word_is_left_alone() {
        assert_eq!(wrap("turtles", 7), vec!["turtles"]);
        assert_eq!(wrap("turtles", 24), vec!["turtles"]);
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn breaks_greedily_on_whitespace() {
        assert_eq!(
            wrap("the quick brown fox jumps over", 10),
            vec!["the quick", "brown fox", "jumps over"]
        );
    }

    #[test]
    fn explicit_newlines_force_breaks() {
        assert_eq!(
            wrap("What does the Gregg say?\nSquee squee!", 24),
            vec!["What does the Gregg say?", "Squee squee!"]
        );
        assert_eq!(wrap("a\n\nb", 5), vec!["a", "", "b"]);
    }

    #[test]
    fn long_word_is_hard_split_and_remainder_keeps_filling() {
        assert_eq!(
            wrap("supercalifragilistic is long", 8),
            vec!["supercal", "ifragili", "stic is", "long"]
        );
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(wrap("日本語です", 4), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn segments_keep_source_offsets() {
        let segments = wrap_segments("ab  cd ef\ngh", 5);
        let starts: Vec<usize> = segments.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 4, 10]);
        assert_eq!(segments[0].text, "ab");
        assert_eq!(segments[1].text, "cd ef");
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        assert_eq!(wrap("a  b", 10), vec!["a  b"]);
    }
}
