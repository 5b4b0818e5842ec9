//! Semantic color roles and theme presets.
//!
//! A [`Theme`] maps every [`Role`] to a crossterm [`ContentStyle`]. Painting
//! only wraps text in SGR codes; it never changes the visible glyphs, so
//! [`measure`](crate::width::measure) reports the same width before and
//! after decoration.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Semantic style slot resolved against a [`Theme`] at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Muted,
    Accent1,
    Accent2,
    Accent3,
    Bold,
    Italic,
    Underline,
    Faint,
    Border,
    Header,
    Footer,
    Selected,
    Disabled,
}

/// A cohesive set of styles, one per [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: ContentStyle,
    pub secondary: ContentStyle,
    pub success: ContentStyle,
    pub warning: ContentStyle,
    pub error: ContentStyle,
    pub muted: ContentStyle,
    pub accent1: ContentStyle,
    pub accent2: ContentStyle,
    pub accent3: ContentStyle,
    pub bold: ContentStyle,
    pub italic: ContentStyle,
    pub underline: ContentStyle,
    pub faint: ContentStyle,
    pub border: ContentStyle,
    pub header: ContentStyle,
    pub footer: ContentStyle,
    pub selected: ContentStyle,
    pub disabled: ContentStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: fg(Color::Cyan, &[Attribute::Bold]),
            secondary: fg(Color::Blue, &[]),
            success: fg(Color::Green, &[Attribute::Bold]),
            warning: fg(Color::Yellow, &[]),
            error: fg(Color::Red, &[Attribute::Bold]),
            muted: fg(Color::DarkGrey, &[]),
            accent1: fg(Color::Magenta, &[]),
            accent2: fg(Color::Cyan, &[]),
            accent3: fg(Color::White, &[]),
            bold: attrs(&[Attribute::Bold]),
            italic: attrs(&[Attribute::Italic]),
            underline: attrs(&[Attribute::Underlined]),
            faint: attrs(&[Attribute::Dim]),
            border: fg(Color::Cyan, &[]),
            header: fg(Color::White, &[Attribute::Bold]),
            footer: fg(Color::DarkGrey, &[]),
            selected: fg(Color::Magenta, &[]),
            disabled: fg(Color::DarkGrey, &[]),
        }
    }
}

impl Theme {
    /// Green-leaning palette for dark terminals.
    pub fn dark() -> Self {
        Self {
            primary: fg(Color::Green, &[Attribute::Bold]),
            secondary: fg(Color::DarkGreen, &[]),
            accent1: fg(Color::Yellow, &[]),
            border: fg(Color::DarkGreen, &[]),
            ..Self::default()
        }
    }

    /// Blue palette readable on light backgrounds.
    pub fn light() -> Self {
        Self {
            primary: fg(Color::DarkBlue, &[Attribute::Bold]),
            secondary: fg(Color::Blue, &[]),
            muted: fg(Color::Black, &[]),
            border: fg(Color::DarkBlue, &[]),
            ..Self::default()
        }
    }

    pub fn cyberpunk() -> Self {
        Self {
            primary: fg(Color::Magenta, &[Attribute::Bold]),
            secondary: fg(Color::DarkMagenta, &[]),
            success: fg(Color::Green, &[Attribute::Bold]),
            accent1: fg(Color::Cyan, &[]),
            accent2: fg(Color::Yellow, &[]),
            border: fg(Color::Magenta, &[]),
            selected: fg(Color::Yellow, &[Attribute::Bold]),
            ..Self::default()
        }
    }

    pub fn monochrome() -> Self {
        Self {
            primary: fg(Color::White, &[Attribute::Bold]),
            secondary: fg(Color::Grey, &[]),
            success: fg(Color::White, &[Attribute::Bold]),
            warning: fg(Color::White, &[Attribute::Bold]),
            error: fg(Color::White, &[Attribute::Bold]),
            accent1: fg(Color::Grey, &[]),
            accent2: fg(Color::White, &[]),
            accent3: fg(Color::Grey, &[]),
            border: fg(Color::Grey, &[]),
            selected: fg(Color::White, &[Attribute::Underlined]),
            ..Self::default()
        }
    }

    /// A theme that applies no decoration at all.
    pub fn plain() -> Self {
        let none = ContentStyle::new();
        Self {
            primary: none,
            secondary: none,
            success: none,
            warning: none,
            error: none,
            muted: none,
            accent1: none,
            accent2: none,
            accent3: none,
            bold: none,
            italic: none,
            underline: none,
            faint: none,
            border: none,
            header: none,
            footer: none,
            selected: none,
            disabled: none,
        }
    }

    /// Look up a preset by name (`default`, `dark`, `light`, `cyberpunk`,
    /// `monochrome`, `plain`), case-insensitively.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Some(Self::default()),
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "cyberpunk" => Some(Self::cyberpunk()),
            "monochrome" => Some(Self::monochrome()),
            "plain" | "none" => Some(Self::plain()),
            _ => None,
        }
    }

    /// The style bound to `role`.
    pub fn style(&self, role: Role) -> ContentStyle {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Success => self.success,
            Role::Warning => self.warning,
            Role::Error => self.error,
            Role::Muted => self.muted,
            Role::Accent1 => self.accent1,
            Role::Accent2 => self.accent2,
            Role::Accent3 => self.accent3,
            Role::Bold => self.bold,
            Role::Italic => self.italic,
            Role::Underline => self.underline,
            Role::Faint => self.faint,
            Role::Border => self.border,
            Role::Header => self.header,
            Role::Footer => self.footer,
            Role::Selected => self.selected,
            Role::Disabled => self.disabled,
        }
    }

    /// Decorate `text` with the style bound to `role`.
    pub fn paint(&self, role: Role, text: &str) -> String {
        paint_with(self.style(role), text)
    }

    /// Decorate `text` with `over` when given, otherwise with `role`.
    pub fn paint_or(&self, over: Option<ContentStyle>, role: Role, text: &str) -> String {
        paint_with(over.unwrap_or_else(|| self.style(role)), text)
    }
}

/// Wrap `text` in the SGR codes for `style`.
///
/// Empty text and empty styles produce no escape codes.
pub fn paint_with(style: ContentStyle, text: &str) -> String {
    if text.is_empty() || is_plain(&style) {
        return text.to_string();
    }
    style.apply(text).to_string()
}

fn is_plain(style: &ContentStyle) -> bool {
    style.foreground_color.is_none()
        && style.background_color.is_none()
        && style.underline_color.is_none()
        && style.attributes.is_empty()
}

fn fg(color: Color, attributes: &[Attribute]) -> ContentStyle {
    let mut style = attrs(attributes);
    style.foreground_color = Some(color);
    style
}

fn attrs(attributes: &[Attribute]) -> ContentStyle {
    let mut style = ContentStyle::new();
    for attribute in attributes {
        style.attributes.set(*attribute);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::{measure, strip_ansi};

    #[test]
    fn paint_is_width_neutral() {
        let theme = Theme::default();
        for role in [Role::Primary, Role::Error, Role::Border, Role::Faint] {
            let painted = theme.paint(role, "Hello \u{4E16}\u{754C}");
            assert_eq!(measure(&painted), measure("Hello \u{4E16}\u{754C}"));
            assert_eq!(strip_ansi(&painted), "Hello \u{4E16}\u{754C}");
        }
    }

    #[test]
    fn plain_theme_adds_nothing() {
        let theme = Theme::plain();
        assert_eq!(theme.paint(Role::Header, "title"), "title");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(Theme::default().paint(Role::Primary, ""), "");
    }

    #[test]
    fn paint_or_prefers_override() {
        let theme = Theme::default();
        let over = ContentStyle::new();
        assert_eq!(theme.paint_or(Some(over), Role::Error, "x"), "x");
    }

    #[test]
    fn presets_differ_from_default() {
        let default = Theme::default();
        assert_ne!(Theme::dark().primary, default.primary);
        assert_ne!(Theme::light().border, default.border);
        assert_ne!(Theme::cyberpunk().selected, default.selected);
        assert_ne!(Theme::monochrome().error, default.error);
        assert_eq!(Theme::dark().error, default.error);
    }

    #[test]
    fn by_name_lookup() {
        assert_eq!(Theme::by_name("Dark"), Some(Theme::dark()));
        assert_eq!(Theme::by_name("plain"), Some(Theme::plain()));
        assert!(Theme::by_name("nope").is_none());
    }

    #[test]
    fn style_maps_every_role() {
        let theme = Theme::cyberpunk();
        assert_eq!(theme.style(Role::Selected), theme.selected);
        assert_eq!(theme.style(Role::Accent2), theme.accent2);
        assert_eq!(theme.style(Role::Footer), theme.footer);
    }
}
