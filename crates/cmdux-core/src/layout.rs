//! Line layout: padding, word wrapping, and glyph tiling under a column
//! budget.
//!
//! Every function here measures with [`crate::width::measure`], so wide
//! glyphs and decorated text are handled uniformly. A zero budget is never an
//! error; each operation has a fixed fallback:
//!
//! | Operation | Zero-width result |
//! |-----------|-------------------|
//! | [`pad`] | input unchanged |
//! | [`wrap`] | input as a single line |
//! | [`repeat`] | empty string |

use crate::symbols::BorderSet;
use crate::width::{char_width, measure, truncate, ELLIPSIS};

/// Assumed terminal size in columns and rows. No size negotiation is done.
pub const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Horizontal placement of text inside a wider slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Fit `text` into exactly `width` columns.
///
/// Text at least as wide as the budget is truncated with an ellipsis instead
/// of padded. Shorter text gets blank columns: trailing for
/// [`Alignment::Left`], leading for [`Alignment::Right`], and split for
/// [`Alignment::Center`] with the odd column on the right.
///
/// # Examples
///
/// ```
/// use cmdux_core::layout::{pad, Alignment};
///
/// assert_eq!(pad("ab", 5, Alignment::Left), "ab   ");
/// assert_eq!(pad("ab", 5, Alignment::Center), " ab  ");
/// assert_eq!(pad("ab", 5, Alignment::Right), "   ab");
/// ```
pub fn pad(text: &str, width: usize, align: Alignment) -> String {
    if width == 0 {
        return text.to_string();
    }

    let text_width = measure(text);
    if text_width >= width {
        return truncate(text, width, ELLIPSIS);
    }

    let padding = width - text_width;
    match align {
        Alignment::Left => format!("{text}{}", spaces(padding)),
        Alignment::Right => format!("{}{text}", spaces(padding)),
        Alignment::Center => {
            let left = padding / 2;
            let right = padding - left;
            format!("{}{text}{}", spaces(left), spaces(right))
        }
    }
}

/// Shorthand for [`pad`] with [`Alignment::Center`].
pub fn center(text: &str, width: usize) -> String {
    pad(text, width, Alignment::Center)
}

/// Word-wrap `text` into lines no wider than `width`.
///
/// Words are packed greedily with single spaces between them. A word wider
/// than the budget is placed on its own line and truncated with an ellipsis.
/// Text that already fits on one line is returned as-is, and input without
/// any words yields one empty line, so the result is never empty.
///
/// # Examples
///
/// ```
/// use cmdux_core::layout::wrap;
///
/// assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
/// assert_eq!(wrap("", 10), vec![""]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    if !text.contains('\n') && measure(text) <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = measure(word);
        let candidate_width = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if candidate_width <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = candidate_width;
        } else if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                lines.push(truncate(word, width, ELLIPSIS));
                current_width = 0;
            }
        } else {
            lines.push(truncate(word, width, ELLIPSIS));
            current_width = 0;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Tile `glyph` to fill `width` columns.
///
/// The repeat count is `width / glyph_width`, so a wide glyph on an odd
/// budget leaves the last column unfilled. Zero-width glyphs count as one
/// column.
pub fn repeat(glyph: char, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let glyph_width = char_width(glyph).max(1);
    std::iter::repeat(glyph).take(width / glyph_width).collect()
}

/// Pad every line to `width` with `align` and stack them.
pub fn join_vertical<S: AsRef<str>>(lines: &[S], width: usize, align: Alignment) -> String {
    lines
        .iter()
        .map(|line| pad(line.as_ref(), width, align))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Place `parts` side by side, separated by `separator`.
pub fn join_horizontal<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Draw a fixed-size undecorated frame around `content`.
///
/// Lines are left-aligned and fitted to the interior; missing lines are
/// blank and surplus lines are dropped. A frame smaller than 3x3 cannot be
/// drawn and returns `content` unchanged.
pub fn frame(content: &str, width: usize, height: usize, border: &BorderSet) -> String {
    if width < 3 || height < 3 {
        tracing::debug!(width, height, "frame too small to draw, returning content");
        return content.to_string();
    }

    let inner_width = width - 2;
    let inner_height = height - 2;
    let mut lines: Vec<&str> = content.split('\n').collect();
    lines.resize(inner_height.max(lines.len()), "");

    let rule = repeat(border.horizontal, inner_width);
    let mut result = Vec::with_capacity(height);
    result.push(format!("{}{rule}{}", border.top_left, border.top_right));
    for line in lines.iter().take(inner_height) {
        result.push(format!(
            "{v}{}{v}",
            pad(line, inner_width, Alignment::Left),
            v = border.vertical
        ));
    }
    result.push(format!("{}{rule}{}", border.bottom_left, border.bottom_right));
    result.join("\n")
}

/// The terminal size layout assumes, as `(columns, rows)`.
pub fn terminal_size() -> (u16, u16) {
    DEFAULT_TERMINAL_SIZE
}

pub(crate) fn spaces(n: usize) -> String {
    " ".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_left_right_center() {
        assert_eq!(pad("Test", 8, Alignment::Left), "Test    ");
        assert_eq!(pad("Test", 8, Alignment::Right), "    Test");
        assert_eq!(pad("Test", 8, Alignment::Center), "  Test  ");
    }

    #[test]
    fn pad_center_odd_leftover_goes_right() {
        assert_eq!(pad("Test", 9, Alignment::Center), "  Test   ");
    }

    #[test]
    fn pad_reaches_exact_width() {
        let samples = ["", "a", "hello", "\u{4E16}\u{754C}", "\u{1F680} go"];
        for s in samples {
            for w in measure(s)..measure(s) + 6 {
                for align in [Alignment::Left, Alignment::Center, Alignment::Right] {
                    if w == 0 {
                        continue;
                    }
                    assert_eq!(measure(&pad(s, w, align)), w, "{s:?} {w} {align:?}");
                }
            }
        }
    }

    #[test]
    fn pad_truncates_instead_of_overflowing() {
        assert_eq!(pad("hello world", 6, Alignment::Left), "hello\u{2026}");
        assert_eq!(pad("hello world", 6, Alignment::Right), "hello\u{2026}");
    }

    #[test]
    fn pad_exact_fit_unchanged() {
        assert_eq!(pad("hello", 5, Alignment::Center), "hello");
    }

    #[test]
    fn pad_zero_width_returns_input() {
        assert_eq!(pad("hello", 0, Alignment::Right), "hello");
    }

    #[test]
    fn pad_decorated_text_by_visible_width() {
        let padded = pad("\x1b[31mab\x1b[0m", 4, Alignment::Left);
        assert_eq!(padded, "\x1b[31mab\x1b[0m  ");
        assert_eq!(measure(&padded), 4);
    }

    #[test]
    fn center_is_pad_center() {
        assert_eq!(center("x", 3), " x ");
    }

    #[test]
    fn wrap_short_text_is_identity() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
        assert_eq!(wrap("a  b", 4), vec!["a  b"]);
    }

    #[test]
    fn wrap_greedy_packing() {
        assert_eq!(
            wrap("The quick brown fox jumps over the lazy dog", 10),
            vec!["The quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
    }

    #[test]
    fn wrap_long_word_truncated_on_own_line() {
        assert_eq!(
            wrap("hi supercalifragilistic there", 8),
            vec!["hi", "superca\u{2026}", "there"]
        );
    }

    #[test]
    fn wrap_long_first_word() {
        assert_eq!(wrap("abcdefghij k", 5), vec!["abcd\u{2026}", "k"]);
    }

    #[test]
    fn wrap_empty_and_blank_yield_one_line() {
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("   \n  ", 2), vec![""]);
    }

    #[test]
    fn wrap_zero_width_returns_whole_input() {
        assert_eq!(wrap("a b c", 0), vec!["a b c"]);
    }

    #[test]
    fn wrap_lines_within_budget() {
        let text = "\u{4E16}\u{754C} wide words \u{1F680}\u{1F680}\u{1F680} and narrow ones";
        for width in 1..20 {
            for line in wrap(text, width) {
                assert!(measure(&line) <= width, "{width}: {line:?}");
            }
        }
    }

    #[test]
    fn wrap_treats_newlines_as_spaces() {
        assert_eq!(wrap("one\ntwo three", 7), vec!["one two", "three"]);
    }

    #[test]
    fn repeat_fills_width() {
        assert_eq!(repeat('-', 5), "-----");
        assert_eq!(repeat('\u{2500}', 3), "\u{2500}\u{2500}\u{2500}");
    }

    #[test]
    fn repeat_wide_glyph_uses_integer_division() {
        assert_eq!(repeat('\u{4E16}', 5), "\u{4E16}\u{4E16}");
    }

    #[test]
    fn repeat_zero_width_glyph_counts_as_one() {
        assert_eq!(repeat('\u{0301}', 3).chars().count(), 3);
    }

    #[test]
    fn repeat_zero_budget_is_empty() {
        assert_eq!(repeat('x', 0), "");
    }

    #[test]
    fn join_vertical_pads_each_line() {
        assert_eq!(
            join_vertical(&["a", "bcd"], 3, Alignment::Right),
            "  a\nbcd"
        );
    }

    #[test]
    fn join_horizontal_uses_separator() {
        assert_eq!(join_horizontal(&["a", "b", "c"], " | "), "a | b | c");
    }

    #[test]
    fn frame_draws_fixed_box() {
        let out = frame("hi\nthere\nextra", 8, 4, &BorderSet::rounded());
        assert_eq!(
            out,
            "\u{256D}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{256E}\n\
             \u{2502}hi    \u{2502}\n\
             \u{2502}there \u{2502}\n\
             \u{2570}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{256F}"
        );
    }

    #[test]
    fn frame_fills_missing_lines() {
        let out = frame("x", 4, 4, &BorderSet::ascii());
        assert_eq!(out, "+--+\n|x |\n|  |\n+--+");
    }

    #[test]
    fn frame_too_small_returns_content() {
        assert_eq!(frame("content", 2, 5, &BorderSet::ascii()), "content");
        assert_eq!(frame("content", 5, 2, &BorderSet::ascii()), "content");
    }

    #[test]
    fn terminal_size_is_fixed() {
        assert_eq!(terminal_size(), (80, 24));
    }
}
