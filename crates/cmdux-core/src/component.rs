use crate::theme::Theme;

/// A visual component that composes itself into a decorated string.
///
/// `render` is a pure function of the component's configuration and the
/// given [`Theme`]: no global state is read and nothing is written. Output is
/// a complete multi-line string (lines joined with `\n`, no trailing
/// newline); writing it to a terminal is the caller's job.
///
/// # Example
///
/// ```rust
/// use cmdux_core::{Renderable, Role, Theme};
///
/// struct Banner(&'static str);
///
/// impl Renderable for Banner {
///     fn render(&self, theme: &Theme) -> String {
///         theme.paint(Role::Header, self.0)
///     }
/// }
///
/// let out = Banner("hello").render(&Theme::plain());
/// assert_eq!(out, "hello");
/// ```
pub trait Renderable {
    /// Compose the component using the roles in `theme`.
    fn render(&self, theme: &Theme) -> String;
}

impl<R: Renderable + ?Sized> Renderable for &R {
    fn render(&self, theme: &Theme) -> String {
        (**self).render(theme)
    }
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn render(&self, theme: &Theme) -> String {
        (**self).render(theme)
    }
}
