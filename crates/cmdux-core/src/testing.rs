use crate::bridge::Rendered;
use crate::component::Renderable;
use crate::theme::Theme;
use crate::width::strip_ansi;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Headless helpers for asserting on rendered components.
///
/// Two views are available: [`plain_lines`] gives the component's own
/// output with decoration stripped, and [`render_string`] shows what a
/// ratatui terminal of a fixed size would display after clipping.
///
/// # Example
///
/// ```rust,ignore
/// use cmdux_core::testing::plain_lines;
///
/// let lines = plain_lines(&table, &Theme::default());
/// assert_eq!(lines[0], "╭───────┬───────────╮");
/// ```
pub fn plain_lines<R: Renderable + ?Sized>(component: &R, theme: &Theme) -> Vec<String> {
    strip_ansi(&component.render(theme))
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Draw the component into a fresh [`Buffer`] of the given dimensions.
///
/// Returns the raw buffer, which you can inspect cell-by-cell. For a
/// simpler string-based assertion, see [`render_string`].
pub fn render_buffer<R: Renderable + ?Sized>(
    component: &R,
    theme: &Theme,
    width: u16,
    height: u16,
) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Rendered::new(component, theme).render(area, &mut buf);
    buf
}

/// Draw the component and return the visible cells as a plain string.
///
/// Each row of the buffer becomes one line; rows are separated by newlines.
/// Trailing whitespace within each row is preserved.
pub fn render_string<R: Renderable + ?Sized>(
    component: &R,
    theme: &Theme,
    width: u16,
    height: u16,
) -> String {
    let buf = render_buffer(component, theme, width, height);
    let area = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Role;
    use ratatui::style::{Color, Modifier};

    struct Label(&'static str);

    impl Renderable for Label {
        fn render(&self, theme: &Theme) -> String {
            theme.paint(Role::Error, self.0)
        }
    }

    #[test]
    fn plain_lines_strips_decoration() {
        let lines = plain_lines(&Label("one\ntwo"), &Theme::default());
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn render_string_pads_to_area() {
        let out = render_string(&Label("hi"), &Theme::plain(), 4, 2);
        assert_eq!(out, "hi  \n    ");
    }

    #[test]
    fn render_string_clips_to_area() {
        let out = render_string(&Label("hello"), &Theme::plain(), 3, 1);
        assert_eq!(out, "hel");
    }

    #[test]
    fn render_buffer_keeps_style() {
        let mut theme = Theme::plain();
        theme.error = crossterm::style::ContentStyle {
            attributes: crossterm::style::Attribute::Bold.into(),
            ..Default::default()
        };
        let buf = render_buffer(&Label("x"), &theme, 1, 1);
        assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(0, 0)].fg, Color::Reset);
    }

    #[test]
    fn boxed_components_render() {
        let boxed: Box<dyn Renderable> = Box::new(Label("boxed"));
        assert_eq!(plain_lines(&boxed, &Theme::default()), vec!["boxed"]);
    }
}
