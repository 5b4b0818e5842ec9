//! Static option list with a highlighted selection.

use cmdux_core::symbols::SymbolSet;
use cmdux_core::theme::{Role, Theme};
use cmdux_core::width::measure;
use cmdux_core::Renderable;
use crossterm::style::ContentStyle;

/// A titled list of options, one of which is marked as selected.
///
/// Options may carry a description; descriptions line up in a column two
/// spaces past the widest option.
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    options: Vec<String>,
    descriptions: Vec<String>,
    selected: usize,
    prefix: String,
    selected_prefix: String,
    hidden: bool,
    title_style: Option<ContentStyle>,
    option_style: Option<ContentStyle>,
    selected_style: Option<ContentStyle>,
    description_style: Option<ContentStyle>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// An empty menu using the unicode selection marker.
    pub fn new() -> Self {
        let symbols = SymbolSet::unicode();
        Self {
            title: String::new(),
            options: Vec::new(),
            descriptions: Vec::new(),
            selected: 0,
            prefix: format!("{} ", symbols.unselected),
            selected_prefix: format!("{} ", symbols.selected),
            hidden: false,
            title_style: None,
            option_style: None,
            selected_style: None,
            description_style: None,
        }
    }

    /// Heading shown above the options, followed by a blank line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the options, dropping any descriptions.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self.descriptions.clear();
        self.clamp_selection();
        self
    }

    /// Replace the options with `(option, description)` pairs, kept in order.
    pub fn with_described_options<I, O, D>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (O, D)>,
        O: Into<String>,
        D: Into<String>,
    {
        let (options, descriptions) = options
            .into_iter()
            .map(|(o, d)| -> (String, String) { (o.into(), d.into()) })
            .unzip();
        self.options = options;
        self.descriptions = descriptions;
        self.clamp_selection();
        self
    }

    /// Select `index`. Out-of-range indices are ignored.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.select_index(index);
        self
    }

    /// Take both prefixes from a symbol set's selection markers.
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.prefix = format!("{} ", symbols.unselected);
        self.selected_prefix = format!("{} ", symbols.selected);
        self
    }

    /// Text placed before unselected options.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Text placed before the selected option.
    pub fn with_selected_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.selected_prefix = prefix.into();
        self
    }

    /// Override the theme's [`Role::Header`] style for the title.
    pub fn with_title_style(mut self, style: ContentStyle) -> Self {
        self.title_style = Some(style);
        self
    }

    /// Override the theme's [`Role::Primary`] style for unselected options.
    pub fn with_option_style(mut self, style: ContentStyle) -> Self {
        self.option_style = Some(style);
        self
    }

    /// Override the theme's [`Role::Selected`] style for the selected option.
    pub fn with_selected_style(mut self, style: ContentStyle) -> Self {
        self.selected_style = Some(style);
        self
    }

    /// Override the theme's [`Role::Muted`] style for descriptions.
    pub fn with_description_style(mut self, style: ContentStyle) -> Self {
        self.description_style = Some(style);
        self
    }

    /// Hidden menus render as an empty string.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Index of the selected option.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected option's text, or `None` when there are no options.
    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// The option labels in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Select `index` if it names an option.
    pub fn select_index(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    /// Select the first option equal to `option`, if any.
    pub fn select_option(&mut self, option: &str) {
        if let Some(i) = self.options.iter().position(|o| o == option) {
            self.selected = i;
        }
    }

    /// Move the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Move the selection up, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            let n = self.options.len();
            self.selected = (self.selected + n - 1) % n;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.options.len() {
            self.selected = 0;
        }
    }
}

impl Renderable for Menu {
    fn render(&self, theme: &Theme) -> String {
        if self.hidden || self.options.is_empty() {
            return String::new();
        }

        let mut lines = Vec::with_capacity(self.options.len() + 2);
        if !self.title.is_empty() {
            lines.push(theme.paint_or(self.title_style, Role::Header, &self.title));
            lines.push(String::new());
        }

        let widest = self.options.iter().map(|o| measure(o)).max().unwrap_or(0);

        for (i, option) in self.options.iter().enumerate() {
            let mut line = if i == self.selected {
                theme.paint_or(
                    self.selected_style,
                    Role::Selected,
                    &format!("{}{option}", self.selected_prefix),
                )
            } else {
                theme.paint_or(
                    self.option_style,
                    Role::Primary,
                    &format!("{}{option}", self.prefix),
                )
            };

            if let Some(desc) = self.descriptions.get(i).filter(|d| !d.is_empty()) {
                line.push_str(&" ".repeat(widest - measure(option) + 2));
                line.push_str(&theme.paint_or(self.description_style, Role::Muted, desc));
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}
