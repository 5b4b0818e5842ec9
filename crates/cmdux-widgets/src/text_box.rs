//! Bordered, titled, multi-line text box.

use cmdux_core::layout::{repeat, wrap};
use cmdux_core::theme::{Role, Theme};
use cmdux_core::width::{measure, truncate, ELLIPSIS};
use cmdux_core::{BorderSet, Renderable};
use crossterm::style::ContentStyle;

/// Columns taken by the `"[ "` and `" ]"` around a title.
const TITLE_BRACKETS: usize = 4;

/// A rectangular container with an optional border and title.
///
/// Width and height are derived from the content unless set explicitly.
/// Content is split on embedded newlines and each line is word-wrapped to
/// the interior width. With a border every output line, borders included,
/// measures exactly the resolved width.
///
/// # Example
///
/// ```
/// use cmdux_core::Theme;
/// use cmdux_core::testing::plain_lines;
/// use cmdux_widgets::text_box::TextBox;
///
/// let b = TextBox::new().with_title("Test").with_content("Test content").with_width(20);
/// let lines = plain_lines(&b, &Theme::default());
/// assert_eq!(lines[0], "╭─────[ Test ]─────╮");
/// ```
#[derive(Debug, Clone)]
pub struct TextBox {
    title: String,
    content: String,
    padding: usize,
    border: bool,
    width: Option<usize>,
    height: Option<usize>,
    hidden: bool,
    borders: BorderSet,
    border_style: Option<ContentStyle>,
    title_style: Option<ContentStyle>,
    content_style: Option<ContentStyle>,
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBox {
    /// An empty bordered box with padding 1 and automatic size.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            padding: 1,
            border: true,
            width: None,
            height: None,
            hidden: false,
            borders: BorderSet::rounded(),
            border_style: None,
            title_style: None,
            content_style: None,
        }
    }

    /// Set the heading drawn in the top border. Line breaks and tabs become
    /// spaces so the title stays on one row.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into().replace(['\n', '\r', '\t'], " ");
        self
    }

    /// Set the body text. Embedded `\n` starts a new paragraph.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Blank rows and columns between the border and the content.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Fix the total width in columns. Zero restores automatic width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = (width > 0).then_some(width);
        self
    }

    /// Fix the total height in rows. Zero restores automatic height.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = (height > 0).then_some(height);
        self
    }

    /// Draw the border. Without it the title becomes a plain first line.
    pub fn with_border(mut self, enabled: bool) -> Self {
        self.border = enabled;
        self
    }

    /// Glyphs used for the corners and rules.
    pub fn with_borders(mut self, borders: BorderSet) -> Self {
        self.borders = borders;
        self
    }

    /// Override the theme's [`Role::Border`] style.
    pub fn with_border_style(mut self, style: ContentStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Override the theme's [`Role::Header`] style for the title.
    pub fn with_title_style(mut self, style: ContentStyle) -> Self {
        self.title_style = Some(style);
        self
    }

    /// Override the theme's [`Role::Primary`] style for the body.
    pub fn with_content_style(mut self, style: ContentStyle) -> Self {
        self.content_style = Some(style);
        self
    }

    /// Hidden boxes render as an empty string.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Whether [`TextBox::with_hidden`] suppressed rendering.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The width the box renders at: explicit, or widest of title and
    /// content lines plus padding and border.
    pub fn resolved_width(&self) -> usize {
        if let Some(width) = self.width {
            return width;
        }
        let widest = self
            .content
            .split('\n')
            .map(measure)
            .chain(std::iter::once(measure(&self.title)))
            .max()
            .unwrap_or(0);
        widest + self.padding * 2 + 2
    }

    /// The height the box renders at: explicit, or wrapped content lines
    /// plus padding, border, and one row when titled.
    pub fn resolved_height(&self, width: usize) -> usize {
        if let Some(height) = self.height {
            return height;
        }
        let (_, content_width) = self.interior(width);
        let mut height = self.wrapped(content_width).len() + self.padding * 2 + 2;
        if !self.title.is_empty() {
            height += 1;
        }
        height
    }

    /// Horizontal padding and content width inside a bordered box of
    /// `width`. Padding shrinks so at least one content column remains.
    fn interior(&self, width: usize) -> (usize, usize) {
        let inner = width.saturating_sub(2);
        let pad_x = self.padding.min(inner.saturating_sub(1) / 2);
        (pad_x, inner - pad_x * 2)
    }

    fn wrapped(&self, width: usize) -> Vec<String> {
        self.content
            .split('\n')
            .flat_map(|line| wrap(line, width))
            .collect()
    }

    fn render_with_border(&self, theme: &Theme, width: usize, height: usize) -> String {
        if width < 3 || height < 3 {
            tracing::debug!(width, height, "box too small for a border, returning content");
            return self.content.clone();
        }

        let b = &self.borders;
        let border = |s: &str| theme.paint_or(self.border_style, Role::Border, s);
        let inner = width - 2;
        let (pad_x, content_width) = self.interior(width);
        let side_pad = " ".repeat(pad_x);
        let blank_row = format!(
            "{}{}{}",
            border(&b.vertical.to_string()),
            " ".repeat(inner),
            border(&b.vertical.to_string())
        );

        let mut result = Vec::with_capacity(height);
        result.push(self.top_border(theme, inner));

        let body_rows = height - 2;
        let top_pad = self.padding.min(body_rows);
        let bottom_pad = self.padding.min(body_rows - top_pad);
        let content_rows = body_rows - top_pad - bottom_pad;

        result.extend(std::iter::repeat(blank_row.clone()).take(top_pad));

        let lines = self.wrapped(content_width);
        for i in 0..content_rows {
            let text = lines
                .get(i)
                .map(|l| truncate(l, content_width, ELLIPSIS))
                .unwrap_or_default();
            let fill = content_width - measure(&text);
            result.push(format!(
                "{v}{side_pad}{}{}{side_pad}{v}",
                theme.paint_or(self.content_style, Role::Primary, &text),
                " ".repeat(fill),
                v = border(&b.vertical.to_string()),
            ));
        }

        result.extend(std::iter::repeat(blank_row).take(bottom_pad));
        result.push(border(&format!(
            "{}{}{}",
            b.bottom_left,
            repeat(b.horizontal, inner),
            b.bottom_right
        )));

        result.join("\n")
    }

    fn top_border(&self, theme: &Theme, inner: usize) -> String {
        let b = &self.borders;
        let border = |s: &str| theme.paint_or(self.border_style, Role::Border, s);

        if self.title.is_empty() || inner <= TITLE_BRACKETS {
            if !self.title.is_empty() {
                tracing::debug!(inner, "no room for title brackets, dropping title");
            }
            return border(&format!(
                "{}{}{}",
                b.top_left,
                repeat(b.horizontal, inner),
                b.top_right
            ));
        }

        let max_title = inner - TITLE_BRACKETS;
        let title = truncate(&self.title, max_title, ELLIPSIS);
        let total = inner - TITLE_BRACKETS - measure(&title);
        let left = total / 2;
        let right = total - left;

        format!(
            "{}{}{}",
            border(&format!("{}{}[ ", b.top_left, repeat(b.horizontal, left))),
            theme.paint_or(self.title_style, Role::Header, &title),
            border(&format!(" ]{}{}", repeat(b.horizontal, right), b.top_right)),
        )
    }

    fn render_without_border(&self, theme: &Theme, width: usize) -> String {
        let mut result = Vec::new();
        if !self.title.is_empty() {
            result.push(theme.paint_or(self.title_style, Role::Header, &self.title));
        }

        let content_width = match width.saturating_sub(self.padding * 2) {
            0 => width,
            w => w,
        };
        let indent = " ".repeat(self.padding);
        for line in self.wrapped(content_width) {
            result.push(format!(
                "{indent}{}",
                theme.paint_or(self.content_style, Role::Primary, &line)
            ));
        }
        result.join("\n")
    }
}

impl Renderable for TextBox {
    fn render(&self, theme: &Theme) -> String {
        if self.hidden {
            return String::new();
        }

        let width = self.resolved_width();
        let height = self.resolved_height(width);

        if self.border {
            self.render_with_border(theme, width, height)
        } else {
            self.render_without_border(theme, width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdux_core::testing::plain_lines;
    use cmdux_core::width::strip_ansi;

    fn top_line(b: &TextBox) -> String {
        plain_lines(b, &Theme::default()).remove(0)
    }

    #[test]
    fn short_title_centered() {
        let b = TextBox::new()
            .with_title("Test")
            .with_content("Test content")
            .with_width(20);
        assert_eq!(top_line(&b), "╭─────[ Test ]─────╮");
    }

    #[test]
    fn multi_line_title_stays_on_top_border() {
        let b = TextBox::new()
            .with_title("Two\nLines")
            .with_content("body")
            .with_width(20);
        let lines = plain_lines(&b, &Theme::default());
        assert_eq!(lines[0], "╭──[ Two Lines ]───╮");
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| measure(l) == 20));
    }

    #[test]
    fn medium_title_centered() {
        let b = TextBox::new()
            .with_title("Medium Title")
            .with_content("Test content")
            .with_width(30);
        assert_eq!(top_line(&b), "╭──────[ Medium Title ]──────╮");
    }

    #[test]
    fn long_title_truncated() {
        let b = TextBox::new()
            .with_title("Very Long Title That Should Be Truncated")
            .with_content("Test content")
            .with_width(25);
        assert_eq!(top_line(&b), "╭[ Very Long Title Th… ]╮");
    }

    #[test]
    fn emoji_title_uses_display_width() {
        let b = TextBox::new()
            .with_title("🚀 Title")
            .with_content("Test content")
            .with_width(25);
        assert_eq!(top_line(&b), "╭─────[ 🚀 Title ]──────╮");
    }

    #[test]
    fn untitled_top_border() {
        let b = TextBox::new().with_content("Test content").with_width(20);
        assert_eq!(top_line(&b), "╭──────────────────╮");
    }

    #[test]
    fn content_left_aligned_after_padding_row() {
        let b = TextBox::new()
            .with_title("Test")
            .with_content("Left aligned content")
            .with_width(30);
        let lines = plain_lines(&b, &Theme::default());
        assert!(lines[1].starts_with("│ ") && lines[1].trim_matches('│').trim().is_empty());
        assert!(lines[2].starts_with("│ Left aligned content"));
    }

    #[test]
    fn auto_size_full_output() {
        let b = TextBox::new().with_content("hello");
        let lines = plain_lines(&b, &Theme::plain());
        assert_eq!(
            lines,
            vec!["╭───────╮", "│       │", "│ hello │", "│       │", "╰───────╯"]
        );
    }

    #[test]
    fn titled_auto_height_adds_one_row() {
        let b = TextBox::new().with_title("T").with_content("Test content");
        let width = b.resolved_width();
        assert_eq!(width, 16);
        assert_eq!(b.resolved_height(width), 6);
        assert_eq!(plain_lines(&b, &Theme::default()).len(), 6);
    }

    #[test]
    fn every_line_matches_resolved_width() {
        let contents = [
            "",
            "short",
            "a much longer line of content that needs wrapping to fit",
            "line one\nline two is longer\n\nafter blank",
            "世界 wide 文字 and 🚀 rockets",
            "supercalifragilisticexpialidocious word",
        ];
        for content in contents {
            for padding in 0..4 {
                for width in [0, 3, 5, 8, 13, 21, 40] {
                    let b = TextBox::new()
                        .with_title("Title")
                        .with_content(content)
                        .with_padding(padding)
                        .with_width(width);
                    let resolved = b.resolved_width();
                    for line in plain_lines(&b, &Theme::default()) {
                        assert_eq!(
                            measure(&line),
                            resolved,
                            "content {content:?} padding {padding} width {width}: {line:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn wraps_content_to_interior() {
        let b = TextBox::new()
            .with_content("the quick brown fox jumps")
            .with_width(14);
        let lines = plain_lines(&b, &Theme::plain());
        assert_eq!(lines[2], "│ the quick  │");
        assert_eq!(lines[3], "│ brown fox  │");
        assert_eq!(lines[4], "│ jumps      │");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn explicit_height_clips_and_fills() {
        let b = TextBox::new()
            .with_content("one\ntwo\nthree")
            .with_padding(0)
            .with_height(4);
        let lines = plain_lines(&b, &Theme::plain());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "│one  │");
        assert_eq!(lines[2], "│two  │");

        let tall = TextBox::new().with_content("x").with_padding(0).with_height(5);
        let lines = plain_lines(&tall, &Theme::plain());
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "│ │");
    }

    #[test]
    fn too_small_returns_raw_content() {
        let narrow = TextBox::new().with_content("raw").with_width(2);
        assert_eq!(narrow.render(&Theme::default()), "raw");
        let short = TextBox::new().with_content("raw").with_height(2);
        assert_eq!(short.render(&Theme::default()), "raw");
    }

    #[test]
    fn title_dropped_when_brackets_do_not_fit() {
        let b = TextBox::new().with_title("Hi").with_content("x").with_width(5);
        assert_eq!(top_line(&b), "╭───╮");
    }

    #[test]
    fn without_border_indents_content() {
        let b = TextBox::new()
            .with_title("Notes")
            .with_content("first\nsecond")
            .with_border(false);
        let lines = plain_lines(&b, &Theme::default());
        assert_eq!(lines, vec!["Notes", " first", " second"]);
    }

    #[test]
    fn hidden_renders_nothing() {
        let b = TextBox::new().with_content("secret").with_hidden(true);
        assert_eq!(b.render(&Theme::default()), "");
    }

    #[test]
    fn ascii_borders() {
        let b = TextBox::new()
            .with_content("ok")
            .with_padding(0)
            .with_borders(BorderSet::ascii());
        assert_eq!(plain_lines(&b, &Theme::plain()), vec!["+--+", "|ok|", "+--+"]);
    }

    #[test]
    fn decoration_is_width_neutral() {
        let b = TextBox::new().with_title("Title").with_content("colored body");
        let decorated = b.render(&Theme::cyberpunk());
        let plain = b.render(&Theme::plain());
        assert_eq!(strip_ansi(&decorated), plain);
    }
}
