//! Escape-sequence aware measuring, stripping and style-run extraction.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Style text anchored at plain-text char offsets.
///
/// Offsets index into the style-stripped string. Several sequences landing on
/// the same offset are concatenated in the order they were found.
pub type StyleRuns = BTreeMap<usize, String>;

fn style_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // CSI/OSC style sequences, introduced by ESC or the 8-bit CSI byte.
        Regex::new(concat!(
            r"[\x1b\x{9b}][\[\]()#;?]*",
            r"(?:(?:(?:[a-zA-Z0-9]*(?:;[a-zA-Z0-9]*)*)?\x07)",
            r"|(?:(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-PR-TZcf-ntqry=><~]))",
        ))
        .expect("style regex should compile")
    })
}

/// Remove every style sequence, leaving all other characters untouched.
#[must_use]
pub fn strip_styles(s: &str) -> String {
    style_regex().replace_all(s, "").into_owned()
}

/// Terminal columns `s` occupies once its style sequences are ignored.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_styles(s).as_str())
}

/// Record where each style sequence sits relative to the stripped text.
#[must_use]
pub fn extract_runs(s: &str) -> StyleRuns {
    let mut runs = StyleRuns::new();
    let mut plain_chars = 0usize;
    let mut last_end = 0usize;

    for m in style_regex().find_iter(s) {
        plain_chars += s[last_end..m.start()].chars().count();
        runs.entry(plain_chars).or_default().push_str(m.as_str());
        last_end = m.end();
    }

    runs
}
