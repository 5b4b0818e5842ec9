//! Drawing rendered components into a ratatui buffer.

use crate::ansi::parse_ansi;
use crate::component::Renderable;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget};

/// Adapter that lets any [`Renderable`] be drawn as a ratatui [`Widget`].
///
/// The component is rendered to a string, its SGR codes are parsed back into
/// styled spans, and the result is drawn top-left aligned and clipped to the
/// target area.
///
/// ```rust,ignore
/// frame.render_widget(Rendered::new(&table, &theme), area);
/// ```
pub struct Rendered<'a, R: ?Sized> {
    component: &'a R,
    theme: &'a Theme,
}

impl<'a, R: Renderable + ?Sized> Rendered<'a, R> {
    pub fn new(component: &'a R, theme: &'a Theme) -> Self {
        Self { component, theme }
    }

    /// The component's output as styled ratatui text.
    pub fn text(&self) -> Text<'static> {
        Text::from(parse_ansi(&self.component.render(self.theme)))
    }
}

impl<R: Renderable + ?Sized> Widget for Rendered<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Paragraph::new(self.text()).render(area, buf);
    }
}
