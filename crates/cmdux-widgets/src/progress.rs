//! Determinate progress bar redrawn in place on a single terminal line.

use std::io::{self, Write};

use cmdux_core::layout::repeat;
use cmdux_core::symbols::SymbolSet;
use cmdux_core::theme::{paint_with, Role, Theme};
use cmdux_core::width::char_width;
use cmdux_core::Renderable;
use crossterm::style::{Color, ContentStyle};

/// A fixed-width bar showing `current` out of `total`.
///
/// A total of zero renders an indeterminate marker instead of a bar.
/// Wide fill or empty glyphs take two columns per cell, so the bar may end
/// one column short of `width` rather than overflow it.
/// [`ProgressBar::update`] and [`ProgressBar::complete`] write the bar
/// preceded by a carriage return so repeated calls overwrite one line.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    current: u64,
    total: u64,
    width: usize,
    prefix: String,
    suffix: String,
    completed: bool,
    show_percent: bool,
    show_numbers: bool,
    fill: char,
    empty: char,
    done_mark: &'static str,
    left_cap: String,
    right_cap: String,
    fill_style: Option<ContentStyle>,
    empty_style: Option<ContentStyle>,
    gradient: Option<(Color, Color)>,
}

impl ProgressBar {
    /// A bar `width` columns wide with a `Progress` prefix.
    pub fn new(width: usize) -> Self {
        let symbols = SymbolSet::unicode();
        Self {
            current: 0,
            total: 0,
            width,
            prefix: "Progress".to_string(),
            suffix: String::new(),
            completed: false,
            show_percent: true,
            show_numbers: true,
            fill: symbols.progress_full,
            empty: symbols.progress_empty,
            done_mark: symbols.check_mark,
            left_cap: "[".to_string(),
            right_cap: "]".to_string(),
            fill_style: None,
            empty_style: None,
            gradient: None,
        }
    }

    /// The value that counts as complete. Zero makes the bar indeterminate.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Starting position.
    pub fn with_current(mut self, current: u64) -> Self {
        self.current = current;
        self
    }

    /// Label before the bar. An empty prefix drops the separating space.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Text after the readouts.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Toggle the ` 42.0%` readout.
    pub fn with_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    /// Toggle the ` (current/total)` readout.
    pub fn with_numbers(mut self, show: bool) -> Self {
        self.show_numbers = show;
        self
    }

    /// Glyphs for the filled and empty cells.
    pub fn with_chars(mut self, fill: char, empty: char) -> Self {
        self.fill = fill;
        self.empty = empty;
        self
    }

    /// Take the fill, empty, and completion glyphs from a symbol set.
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.fill = symbols.progress_full;
        self.empty = symbols.progress_empty;
        self.done_mark = symbols.check_mark;
        self
    }

    /// Strings drawn on either side of the cells.
    pub fn with_caps(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_cap = left.into();
        self.right_cap = right.into();
        self
    }

    /// Override the theme's [`Role::Primary`] style for filled cells.
    pub fn with_fill_style(mut self, style: ContentStyle) -> Self {
        self.fill_style = Some(style);
        self
    }

    /// Override the theme's [`Role::Muted`] style for empty cells.
    pub fn with_empty_style(mut self, style: ContentStyle) -> Self {
        self.empty_style = Some(style);
        self
    }

    /// Color filled cells along a gradient from `from` to `to`.
    pub fn with_gradient(mut self, from: Color, to: Color) -> Self {
        self.gradient = Some((from, to));
        self
    }

    /// Current position, as set. Rendering clamps it to the total.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// The configured total.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Completion as a percentage in `0.0..=100.0`; zero when indeterminate.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current.min(self.total) as f64 / self.total as f64 * 100.0
    }

    /// True once [`ProgressBar::complete`] ran or the position reached the total.
    pub fn is_complete(&self) -> bool {
        self.completed || (self.total > 0 && self.current >= self.total)
    }

    /// Move to `current` without redrawing.
    pub fn set_current(&mut self, current: u64) {
        self.current = current;
    }

    /// Advance by one, never past the total.
    pub fn increment(&mut self) {
        self.increment_by(1);
    }

    /// Advance by `amount`, never past the total.
    pub fn increment_by(&mut self, amount: u64) {
        self.current = self.current.saturating_add(amount).min(self.total);
    }

    /// Set the position and redraw the bar over the current line.
    pub fn update<W: Write>(&mut self, current: u64, out: &mut W, theme: &Theme) -> io::Result<()> {
        self.current = current;
        write!(out, "\r{}", self.render(theme))?;
        out.flush()
    }

    /// Fill the bar, redraw it, and end the line with an optional message.
    pub fn complete<W: Write>(
        &mut self,
        message: &str,
        out: &mut W,
        theme: &Theme,
    ) -> io::Result<()> {
        self.current = self.total;
        self.completed = true;
        write!(out, "\r{}", self.render(theme))?;
        if message.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, "\n{} {message}", theme.paint(Role::Success, self.done_mark))?;
        }
        out.flush()
    }

    /// Draw `filled` fill glyphs.
    fn filled_cells(&self, theme: &Theme, filled: usize) -> String {
        let fill_width = char_width(self.fill).max(1);
        let Some((from, to)) = self.gradient else {
            let cells = repeat(self.fill, filled * fill_width);
            return theme.paint_or(self.fill_style, Role::Primary, &cells);
        };
        let span = (self.width / fill_width).saturating_sub(1).max(1) as f64;
        (0..filled)
            .map(|i| {
                let mut style = ContentStyle::new();
                style.foreground_color = Some(interpolate_color(from, to, i as f64 / span));
                paint_with(style, &self.fill.to_string())
            })
            .collect()
    }
}

impl Renderable for ProgressBar {
    fn render(&self, theme: &Theme) -> String {
        if self.total == 0 {
            return format!("{} [indeterminate]", self.prefix);
        }

        let current = self.current.min(self.total);
        let fill_width = char_width(self.fill).max(1);
        let filled_columns = (self.width as u128 * current as u128 / self.total as u128) as usize;
        let filled = filled_columns / fill_width;
        let empty_columns = self.width - filled * fill_width;

        let mut out = String::new();
        if !self.prefix.is_empty() {
            out.push_str(&self.prefix);
            out.push(' ');
        }
        out.push_str(&self.left_cap);
        out.push_str(&self.filled_cells(theme, filled));
        out.push_str(&theme.paint_or(
            self.empty_style,
            Role::Muted,
            &repeat(self.empty, empty_columns),
        ));
        out.push_str(&self.right_cap);

        if self.show_percent {
            out.push_str(&format!(" {:.1}%", self.percentage()));
        }
        if self.show_numbers {
            out.push_str(&format!(" ({current}/{})", self.total));
        }
        if !self.suffix.is_empty() {
            out.push(' ');
            out.push_str(&self.suffix);
        }
        out
    }
}

/// Interpolate between two colors based on `t` in `0.0..=1.0`.
///
/// RGB pairs blend per channel. Any other pair switches from `from` to `to`
/// at the midpoint.
pub fn interpolate_color(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (
            Color::Rgb { r: r1, g: g1, b: b1 },
            Color::Rgb { r: r2, g: g2, b: b2 },
        ) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb {
                r: mix(r1, r2),
                g: mix(g1, g2),
                b: mix(b1, b2),
            }
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
