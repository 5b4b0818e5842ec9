//! Column-aligned table with optional box-drawing borders.

use cmdux_core::layout::{pad, repeat, Alignment};
use cmdux_core::theme::{Role, Theme};
use cmdux_core::width::{measure, truncate, ELLIPSIS};
use cmdux_core::{BorderSet, Renderable};
use crossterm::style::ContentStyle;

/// A table of string cells laid out in fixed-width columns.
///
/// Column widths grow to fit the widest header or cell seen so far and never
/// shrink when rows are added. Supplying explicit widths with
/// [`Table::with_column_widths`] freezes them; cells that no longer fit are
/// truncated with an ellipsis.
///
/// Rows alternate between the theme's [`Role::Primary`] and
/// [`Role::Secondary`] styles.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
    fixed_widths: bool,
    alignments: Vec<Alignment>,
    border: bool,
    borders: BorderSet,
    hidden: bool,
    border_style: Option<ContentStyle>,
    header_style: Option<ContentStyle>,
    row_style: Option<ContentStyle>,
    alt_row_style: Option<ContentStyle>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// An empty bordered table with rounded corners.
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            widths: Vec::new(),
            fixed_widths: false,
            alignments: Vec::new(),
            border: true,
            borders: BorderSet::rounded(),
            hidden: false,
            border_style: None,
            header_style: None,
            row_style: None,
            alt_row_style: None,
        }
    }

    /// Create a table from simple CSV data.
    ///
    /// The first non-empty line is the header row; remaining non-empty lines
    /// are data rows. Fields are split on commas and trimmed. Quoting is not
    /// supported.
    pub fn from_csv(data: &str) -> Self {
        let mut lines = data.lines().filter(|l| !l.trim().is_empty());
        let split = |line: &str| -> Vec<String> {
            line.split(',').map(|s| s.trim().to_string()).collect()
        };

        let Some(header_line) = lines.next() else {
            return Self::new();
        };
        let rows = lines.map(split).collect();
        Self::new().with_headers(split(header_line)).with_rows(rows)
    }

    /// Set the column headers. The header count fixes the column count.
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        if !self.fixed_widths {
            self.recompute_widths();
        }
        self
    }

    /// Replace all data rows.
    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Append one data row.
    pub fn with_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_row(row);
        self
    }

    /// Fix column widths. Auto-sizing stops for the rest of the table's life.
    pub fn with_column_widths(mut self, widths: Vec<usize>) -> Self {
        self.widths = widths;
        self.fixed_widths = true;
        self
    }

    /// Per-column alignment. Columns without an entry are left-aligned.
    pub fn with_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Draw the frame. Without it cells are space-separated under a dashed rule.
    pub fn with_border(mut self, enabled: bool) -> Self {
        self.border = enabled;
        self
    }

    /// Glyphs for corners, rules, tees, and crosses.
    pub fn with_borders(mut self, borders: BorderSet) -> Self {
        self.borders = borders;
        self
    }

    /// Override the theme's [`Role::Border`] style.
    pub fn with_border_style(mut self, style: ContentStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Override the theme's [`Role::Header`] style for the header row.
    pub fn with_header_style(mut self, style: ContentStyle) -> Self {
        self.header_style = Some(style);
        self
    }

    /// Style for even rows, overriding [`Role::Primary`].
    pub fn with_row_style(mut self, style: ContentStyle) -> Self {
        self.row_style = Some(style);
        self
    }

    /// Style for odd rows, overriding [`Role::Secondary`].
    pub fn with_alt_row_style(mut self, style: ContentStyle) -> Self {
        self.alt_row_style = Some(style);
        self
    }

    /// Hidden tables render as an empty string.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Append a row, growing column widths to fit unless they are fixed.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if !self.fixed_widths {
            self.grow_widths(&row);
        }
        self.rows.push(row);
    }

    /// Replace all rows and size columns from the headers and the new rows.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
        if !self.fixed_widths {
            self.recompute_widths();
        }
    }

    /// The header labels.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The data rows, as added.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows, excluding the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Current column widths, one per header.
    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    fn recompute_widths(&mut self) {
        self.widths = self.headers.iter().map(|h| measure(h)).collect();
        let rows = std::mem::take(&mut self.rows);
        for row in &rows {
            self.grow_widths(row);
        }
        self.rows = rows;
    }

    /// Cells beyond the header count are ignored.
    fn grow_widths(&mut self, row: &[String]) {
        for (width, cell) in self.widths.iter_mut().zip(row) {
            *width = (*width).max(measure(cell));
        }
    }

    fn width(&self, col: usize) -> usize {
        self.widths.get(col).copied().unwrap_or(0)
    }

    fn alignment(&self, col: usize) -> Alignment {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    /// Fit a cell into its column: truncate if too wide, then pad.
    fn fit(&self, cells: &[String], col: usize) -> String {
        let width = self.width(col);
        let cell = cells.get(col).map(String::as_str).unwrap_or("");
        let cell = if measure(cell) > width {
            truncate(cell, width, ELLIPSIS)
        } else {
            cell.to_string()
        };
        pad(&cell, width, self.alignment(col))
    }

    fn rule(&self, left: char, join: char, right: char) -> String {
        let segments: Vec<String> = (0..self.headers.len())
            .map(|col| repeat(self.borders.horizontal, self.width(col) + 2))
            .collect();
        format!("{left}{}{right}", segments.join(&join.to_string()))
    }

    fn bordered_row(&self, theme: &Theme, cells: &[String], style: ContentStyle) -> String {
        let vertical = theme.paint_or(
            self.border_style,
            Role::Border,
            &self.borders.vertical.to_string(),
        );
        let mut line = vertical.clone();
        for col in 0..self.headers.len() {
            line.push(' ');
            line.push_str(&theme.paint_or(Some(style), Role::Primary, &self.fit(cells, col)));
            line.push(' ');
            line.push_str(&vertical);
        }
        line
    }

    fn plain_row(&self, theme: &Theme, cells: &[String], style: ContentStyle) -> String {
        (0..self.headers.len())
            .map(|col| theme.paint_or(Some(style), Role::Primary, &self.fit(cells, col)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn row_style(&self, theme: &Theme, index: usize) -> ContentStyle {
        if index % 2 == 0 {
            self.row_style.unwrap_or_else(|| theme.style(Role::Primary))
        } else {
            self.alt_row_style.unwrap_or_else(|| theme.style(Role::Secondary))
        }
    }
}

impl Renderable for Table {
    fn render(&self, theme: &Theme) -> String {
        if self.hidden || self.headers.is_empty() {
            return String::new();
        }

        let header_style = self
            .header_style
            .unwrap_or_else(|| theme.style(Role::Header));
        let border = |s: String| theme.paint_or(self.border_style, Role::Border, &s);
        let b = &self.borders;
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        if self.border {
            lines.push(border(self.rule(b.top_left, b.top_tee, b.top_right)));
            lines.push(self.bordered_row(theme, &self.headers, header_style));
            lines.push(border(self.rule(b.left_tee, b.cross, b.right_tee)));
            for (i, row) in self.rows.iter().enumerate() {
                lines.push(self.bordered_row(theme, row, self.row_style(theme, i)));
            }
            lines.push(border(self.rule(b.bottom_left, b.bottom_tee, b.bottom_right)));
        } else {
            lines.push(self.plain_row(theme, &self.headers, header_style));
            let total: usize = (0..self.headers.len()).map(|c| self.width(c)).sum::<usize>()
                + self.headers.len()
                - 1;
            lines.push(border(repeat('-', total)));
            for (i, row) in self.rows.iter().enumerate() {
                lines.push(self.plain_row(theme, row, self.row_style(theme, i)));
            }
        }

        lines.join("\n")
    }
}
