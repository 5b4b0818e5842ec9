//! Display-width measurement for terminal text.
//!
//! Widths follow the East-Asian-width model from [`unicode_width`]: wide and
//! fullwidth codepoints take two columns, combining marks and control
//! characters take none, everything else takes one. Escape sequences are
//! invisible to every function in this module, so decorated text measures
//! the same as its plain form.

use unicode_width::UnicodeWidthChar;

/// Marker appended when text is cut to fit a budget.
pub const ELLIPSIS: &str = "\u{2026}";

const ESC: char = '\x1b';

/// Sanitize a string by removing non-printable characters.
///
/// Keeps printable characters, spaces, and common whitespace (newlines, tabs).
/// Removes all other control characters, escape sequences included.
pub fn sanitize(s: &str) -> String {
    strip_ansi(s)
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Remove terminal escape sequences from `s`.
///
/// A sequence starts at `ESC` and runs through the first ASCII letter that
/// follows it, which covers SGR color codes (`ESC[1;36m`) and cursor
/// movement (`ESC[2J`, `ESC[H`).
pub fn strip_ansi(s: &str) -> String {
    if !s.contains(ESC) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        if c == ESC {
            in_escape = true;
            continue;
        }
        if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
            continue;
        }
        result.push(c);
    }
    result
}

/// Display width of a single codepoint: 0, 1, or 2 columns.
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Display width of `s` in terminal columns, ignoring escape sequences.
///
/// # Examples
///
/// ```
/// use cmdux_core::width::measure;
///
/// assert_eq!(measure("hello"), 5);
/// assert_eq!(measure("\u{4E16}\u{754C}"), 4);
/// assert_eq!(measure("\x1b[1;36mhi\x1b[0m"), 2);
/// ```
pub fn measure(s: &str) -> usize {
    visible(s).map(|(_, w)| w).sum()
}

/// Truncate `s` to fit within `max_width` display columns.
///
/// If the string already fits it is returned unchanged. Otherwise the longest
/// prefix that leaves room for `tail` is kept and `tail` is appended, so the
/// result never exceeds `max_width`. When `tail` is itself wider than the
/// budget, as much of `tail` as fits is returned; a zero budget always yields
/// an empty string.
///
/// Escape sequences in the kept prefix are copied through at zero width, and
/// a reset is emitted before the tail so decoration does not bleed into it.
///
/// # Examples
///
/// ```
/// use cmdux_core::width::truncate;
///
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("hi", 10, "..."), "hi");
/// assert_eq!(truncate("hello", 0, "\u{2026}"), "");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure(s) <= max_width {
        return s.to_string();
    }

    let tail_width = measure(tail);
    if tail_width >= max_width {
        return take_columns(tail, max_width).0;
    }

    let (mut result, saw_escape) = take_columns(s, max_width - tail_width);
    if saw_escape {
        result.push_str("\x1b[0m");
    }
    result.push_str(tail);
    result
}

/// Copy the longest prefix of `s` that fits in `budget` columns. Escape
/// sequences are copied without consuming budget. Returns the prefix and
/// whether any escape sequence was copied.
fn take_columns(s: &str, budget: usize) -> (String, bool) {
    let mut result = String::new();
    let mut used = 0;
    let mut saw_escape = false;
    let mut in_escape = false;

    for c in s.chars() {
        if c == ESC || in_escape {
            in_escape = c == ESC || !c.is_ascii_alphabetic();
            saw_escape = true;
            result.push(c);
            continue;
        }
        let cw = char_width(c);
        if used + cw > budget {
            break;
        }
        result.push(c);
        used += cw;
    }
    (result, saw_escape)
}

/// Iterate the visible codepoints of `s` with their widths.
fn visible(s: &str) -> impl Iterator<Item = (char, usize)> + '_ {
    let mut in_escape = false;
    s.chars().filter_map(move |c| {
        if c == ESC {
            in_escape = true;
            return None;
        }
        if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
            return None;
        }
        Some((c, char_width(c)))
    })
}
