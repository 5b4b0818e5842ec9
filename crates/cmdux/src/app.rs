use std::io::{self, stderr, stdout, Stderr, Stdout, Write};
use std::path::Path;
use std::sync::Mutex;

use cmdux_core::layout::terminal_size;
use cmdux_core::{Renderable, Role, Theme};
use cmdux_widgets::effects::CLEAR_SCREEN;
use cmdux_widgets::input::{confirm, Form, FormResults, InputError, Prompt};
use cmdux_widgets::spinner::SpinnerError;
use cmdux_widgets::{Effects, Spinner, SpinnerHandle};
use crossterm::tty::IsTty;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Output target for an [`App`].
///
/// When your program's stdout is piped, switch to
/// [`Stderr`](OutputTarget::Stderr) so the UI still reaches the terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Writer that wraps either stdout or stderr.
#[derive(Debug)]
pub enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }

    fn is_tty(&self) -> bool {
        match self {
            Output::Stdout(w) => w.is_tty(),
            Output::Stderr(w) => w.is_tty(),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::Stderr(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::Stderr(w) => w.flush(),
        }
    }
}

/// Errors surfaced by [`App`] and [`log_to_file`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Spinner(#[from] SpinnerError),
    #[error("logging already initialized: {0}")]
    Logging(#[from] TryInitError),
}

/// Configuration for an [`App`].
///
/// Use struct update syntax to override only what you need:
///
/// ```
/// use cmdux::{AppOptions, OutputTarget, Theme};
///
/// let opts = AppOptions {
///     theme: Theme::dark(),
///     output: OutputTarget::Stderr,
///     ..AppOptions::default()
/// };
/// assert_eq!(opts.width, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Where output goes (default: stdout).
    pub output: OutputTarget,
    /// Palette used for every render.
    pub theme: Theme,
    /// Layout width in columns. `None` assumes 80.
    pub width: Option<u16>,
    /// Force colors on or off. `None` enables them unless `NO_COLOR` is set
    /// or the output is not a terminal.
    pub enable_colors: Option<bool>,
}

/// Rendering context: a theme, a writer, and a layout width.
///
/// # Example
///
/// ```
/// use cmdux::{App, AppOptions};
/// use cmdux::widgets::TextBox;
///
/// let mut app = App::with_writer(Vec::<u8>::new(), AppOptions::default());
/// app.render(&TextBox::new().with_title("Hello").with_content("Welcome to cmdux!")).unwrap();
/// assert!(!app.into_inner().is_empty());
/// ```
#[derive(Debug)]
pub struct App<W: Write = Output> {
    theme: Theme,
    out: W,
    width: u16,
    colors: bool,
}

impl App<Output> {
    /// An app writing to the configured terminal stream.
    pub fn new(options: AppOptions) -> Self {
        let out = Output::new(options.output);
        let colors = options
            .enable_colors
            .unwrap_or_else(|| !no_color_requested() && out.is_tty());
        Self::build(out, options, colors)
    }

    /// Show `spinner` on this app's stream until the handle is stopped.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spinner(&self, spinner: &Spinner, text: impl Into<String>) -> SpinnerHandle<Output> {
        let stream = match self.out {
            Output::Stdout(_) => Output::Stdout(stdout()),
            Output::Stderr(_) => Output::Stderr(stderr()),
        };
        spinner.start(text, stream, &self.theme)
    }
}

impl<W: Write> App<W> {
    /// An app writing to any writer. Colors follow `enable_colors`, or
    /// `NO_COLOR` when unset.
    pub fn with_writer(out: W, options: AppOptions) -> Self {
        let colors = options.enable_colors.unwrap_or_else(|| !no_color_requested());
        Self::build(out, options, colors)
    }

    fn build(out: W, options: AppOptions, colors: bool) -> Self {
        let width = options.width.unwrap_or_else(|| terminal_size().0);
        let theme = if colors { options.theme } else { Theme::plain() };
        tracing::debug!(width, colors, "app created");
        Self {
            theme,
            out,
            width,
            colors,
        }
    }

    /// The theme applied by [`App::render`] and [`App::print`].
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme. Ignored while colors are disabled.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.colors {
            self.theme = theme;
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a component's output followed by a newline. Empty output
    /// writes nothing.
    pub fn render<R: Renderable + ?Sized>(&mut self, component: &R) -> Result<(), Error> {
        let output = component.render(&self.theme);
        if output.is_empty() {
            return Ok(());
        }
        tracing::trace!(bytes = output.len(), "rendering component");
        writeln!(self.out, "{output}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Write `text`, painted with `role` when given.
    pub fn print(&mut self, text: &str, role: Option<Role>) -> Result<(), Error> {
        match role {
            Some(role) => write!(self.out, "{}", self.theme.paint(role, text))?,
            None => write!(self.out, "{text}")?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// [`App::print`] followed by a newline.
    pub fn println(&mut self, text: &str, role: Option<Role>) -> Result<(), Error> {
        self.print(text, role)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Erase the screen and home the cursor.
    pub fn clear(&mut self) -> Result<(), Error> {
        write!(self.out, "{CLEAR_SCREEN}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Move the cursor to 1-based column `x`, row `y`.
    pub fn move_cursor(&mut self, x: u16, y: u16) -> Result<(), Error> {
        write!(self.out, "\x1b[{y};{x}H")?;
        self.out.flush()?;
        Ok(())
    }

    /// Animations drawn on this app's writer with its theme.
    pub fn effects(&mut self) -> Effects<'_, W> {
        Effects::new(&mut self.out, &self.theme)
    }

    /// Ask `prompt`, reading the answer from stdin.
    pub fn prompt(&mut self, prompt: &Prompt) -> Result<String, Error> {
        Ok(prompt.run(&mut io::stdin().lock(), &mut self.out, &self.theme)?)
    }

    /// Ask a yes/no question on stdin.
    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool, Error> {
        Ok(confirm(
            message,
            default,
            &mut io::stdin().lock(),
            &mut self.out,
            &self.theme,
        )?)
    }

    /// Run `form` against stdin.
    pub fn form(&mut self, form: &Form) -> Result<FormResults, Error> {
        Ok(form.run(&mut io::stdin().lock(), &mut self.out, &self.theme)?)
    }
}

fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Send `tracing` output to a file, appending.
///
/// Stdout belongs to the rendered UI, so diagnostics go to a file instead.
/// The filter comes from `RUST_LOG`, defaulting to `cmdux=debug`.
///
/// # Example
///
/// ```no_run
/// cmdux::log_to_file("cmdux.log").unwrap();
/// tracing::debug!("written to cmdux.log");
/// ```
pub fn log_to_file(path: impl AsRef<Path>) -> Result<(), Error> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cmdux=debug"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;
    Ok(())
}

/// The library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdux_widgets::TextBox;

    fn app(colors: bool) -> App<Vec<u8>> {
        App::with_writer(
            Vec::new(),
            AppOptions {
                enable_colors: Some(colors),
                ..AppOptions::default()
            },
        )
    }

    fn output(app: App<Vec<u8>>) -> String {
        String::from_utf8(app.into_inner()).unwrap()
    }

    #[test]
    fn defaults() {
        let opts = AppOptions::default();
        assert_eq!(opts.output, OutputTarget::Stdout);
        assert_eq!(opts.theme, Theme::default());
        assert_eq!(app(true).width(), 80);
    }

    #[test]
    fn explicit_width() {
        let app = App::with_writer(
            Vec::<u8>::new(),
            AppOptions {
                width: Some(120),
                ..AppOptions::default()
            },
        );
        assert_eq!(app.width(), 120);
    }

    #[test]
    fn render_writes_component_and_newline() {
        let mut a = app(false);
        a.render(&TextBox::new().with_content("hi").with_padding(0)).unwrap();
        assert_eq!(output(a), "╭──╮\n│hi│\n╰──╯\n");
    }

    #[test]
    fn render_skips_empty_output() {
        let mut a = app(true);
        a.render(&TextBox::new().with_hidden(true)).unwrap();
        assert_eq!(output(a), "");
    }

    #[test]
    fn print_with_and_without_role() {
        let mut a = app(true);
        a.print("plain ", None).unwrap();
        a.println("ok", Some(Role::Success)).unwrap();
        let expected = format!("plain {}\n", Theme::default().paint(Role::Success, "ok"));
        assert_eq!(output(a), expected);
    }

    #[test]
    fn disabled_colors_use_plain_theme() {
        let mut a = app(false);
        assert!(!a.colors_enabled());
        a.set_theme(Theme::cyberpunk());
        assert_eq!(a.theme(), &Theme::plain());
        a.println("text", Some(Role::Error)).unwrap();
        assert_eq!(output(a), "text\n");
    }

    #[test]
    fn cursor_control_sequences() {
        let mut a = app(true);
        a.clear().unwrap();
        a.move_cursor(5, 3).unwrap();
        assert_eq!(output(a), "\x1b[2J\x1b[H\x1b[3;5H");
    }

    #[tokio::test]
    async fn effects_use_app_writer() {
        let mut a = app(false);
        a.effects().typewriter("abc", std::time::Duration::ZERO).await.unwrap();
        assert_eq!(output(a), "abc\n");
    }

    #[test]
    fn log_to_file_reports_errors() {
        let missing = std::env::temp_dir()
            .join("cmdux-missing-dir")
            .join("nested")
            .join("cmdux.log");
        assert!(matches!(log_to_file(&missing), Err(Error::Io(_))));

        let path = std::env::temp_dir().join(format!("cmdux-{}.log", std::process::id()));
        log_to_file(&path).unwrap();
        assert!(matches!(log_to_file(&path), Err(Error::Logging(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn version_matches_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
