//! Put style sequences back into wrapped plain text.
//!
//! Wrapping happens on the stripped message, so every style sequence that was
//! pulled out by [`extract_runs`](crate::ansi::extract_runs) has to be written
//! back in front of the char it was anchored to. Only one style is tracked at
//! a time: once a run has been crossed it is the "active" style, and it is
//! repeated in front of later chars according to the continuation rule below.
//! Nested or overlapping styles are not modeled.

use crate::ansi::StyleRuns;
use crate::wrap::Segment;

/// Walks the plain text in order, remembering which runs lie behind it.
#[derive(Debug)]
struct StyleCursor<'a> {
    runs: &'a StyleRuns,
    /// Plain chars already walked past; runs below this offset are crossed.
    consumed: usize,
    /// Text of the most recently crossed run.
    active: Option<&'a str>,
    /// How many run boundaries lie behind the cursor.
    crossed: usize,
}

impl<'a> StyleCursor<'a> {
    fn new(runs: &'a StyleRuns) -> Self {
        Self {
            runs,
            consumed: 0,
            active: None,
            crossed: 0,
        }
    }

    /// Move to plain offset `offset`, crossing every run strictly before it.
    fn seek(&mut self, offset: usize) {
        if offset <= self.consumed {
            return;
        }
        let runs = self.runs;
        for (_, text) in runs.range(self.consumed..offset) {
            self.crossed += 1;
            self.active = Some(text.as_str());
        }
        self.consumed = offset;
    }

    /// The active style keeps repeating once two boundaries are behind us, or
    /// one is behind and another still lies ahead. A single boundary with
    /// nothing after it stays pending.
    fn continues(&self, offset: usize) -> bool {
        match self.crossed {
            0 => false,
            1 => self.runs.range(offset + 1..).next().is_some(),
            _ => true,
        }
    }

    /// Style text to emit in front of the char at `offset`.
    fn prefix_at(&self, offset: usize) -> Option<&'a str> {
        if let Some(text) = self.runs.get(&offset) {
            return Some(text.as_str());
        }
        if self.continues(offset) {
            return self.active;
        }
        None
    }
}

/// Rebuild each wrapped line with its style sequences.
///
/// Besides the per-char rule, the active style is emitted again at the start
/// of every line whose first char does not get a prefix of its own. That
/// covers styles opened on an earlier line (each framed line ends with a
/// reset) and styles anchored on whitespace the wrapper dropped.
#[must_use]
pub fn restyle(segments: &[Segment], runs: &StyleRuns) -> Vec<String> {
    let mut cursor = StyleCursor::new(runs);

    segments
        .iter()
        .map(|segment| {
            let mut line = String::with_capacity(segment.text.len());
            for (i, ch) in segment.text.chars().enumerate() {
                let offset = segment.start + i;
                cursor.seek(offset);
                match cursor.prefix_at(offset) {
                    Some(prefix) => line.push_str(prefix),
                    None if i == 0 => {
                        if let Some(active) = cursor.active {
                            line.push_str(active);
                        }
                    }
                    None => {}
                }
                line.push(ch);
            }
            line.trim().to_string()
        })
        .collect()
}
