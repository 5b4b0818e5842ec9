//! Glyph sets for borders, selection markers, and status marks.

/// Glyphs used to draw box and table borders.
///
/// Boxes use the four corners plus the horizontal and vertical rules; tables
/// additionally use the tees and the cross at column boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// Left edge of a separator row (`├`).
    pub left_tee: char,
    /// Right edge of a separator row (`┤`).
    pub right_tee: char,
    /// Column boundary on the top border (`┬`).
    pub top_tee: char,
    /// Column boundary on the bottom border (`┴`).
    pub bottom_tee: char,
    /// Column boundary on a separator row (`┼`).
    pub cross: char,
}

impl BorderSet {
    /// Rounded unicode corners with light rules.
    pub const fn rounded() -> Self {
        Self {
            top_left: '\u{256D}',
            top_right: '\u{256E}',
            bottom_left: '\u{2570}',
            bottom_right: '\u{256F}',
            horizontal: '\u{2500}',
            vertical: '\u{2502}',
            left_tee: '\u{251C}',
            right_tee: '\u{2524}',
            top_tee: '\u{252C}',
            bottom_tee: '\u{2534}',
            cross: '\u{253C}',
        }
    }

    /// ASCII-only borders for terminals without box-drawing glyphs.
    pub const fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            left_tee: '+',
            right_tee: '+',
            top_tee: '+',
            bottom_tee: '+',
            cross: '+',
        }
    }
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::rounded()
    }
}

/// Status marks, selection markers, and progress glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet {
    pub check_mark: &'static str,
    pub cross_mark: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
    pub progress_full: char,
    pub progress_empty: char,
}

impl SymbolSet {
    pub const fn unicode() -> Self {
        Self {
            check_mark: "\u{2713}",
            cross_mark: "\u{2717}",
            warning: "\u{26A0}",
            info: "\u{2139}",
            selected: "\u{25B6}",
            unselected: " ",
            progress_full: '\u{2588}',
            progress_empty: '\u{2591}',
        }
    }

    pub const fn ascii() -> Self {
        Self {
            check_mark: "v",
            cross_mark: "x",
            warning: "!",
            info: "i",
            selected: ">",
            unselected: " ",
            progress_full: '#',
            progress_empty: '.',
        }
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::unicode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::{char_width, measure};

    #[test]
    fn rounded_glyphs_are_single_column() {
        let b = BorderSet::rounded();
        for c in [
            b.top_left,
            b.top_right,
            b.bottom_left,
            b.bottom_right,
            b.horizontal,
            b.vertical,
            b.left_tee,
            b.right_tee,
            b.top_tee,
            b.bottom_tee,
            b.cross,
        ] {
            assert_eq!(char_width(c), 1, "{c:?}");
        }
    }

    #[test]
    fn ascii_symbols_are_ascii() {
        let s = SymbolSet::ascii();
        for sym in [s.check_mark, s.cross_mark, s.warning, s.info, s.selected] {
            assert!(sym.is_ascii());
            assert_eq!(measure(sym), 1);
        }
    }
}
