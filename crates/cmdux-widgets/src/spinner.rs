//! Animated loading spinner driven by a background tokio task.

use std::io::{self, Write};
use std::time::Duration;

use cmdux_core::symbols::SymbolSet;
use cmdux_core::theme::{paint_with, Role, Theme};
use cmdux_core::width::measure;
use crossterm::style::ContentStyle;
use futures::StreamExt;
use tokio::sync::{oneshot, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio_stream::wrappers::IntervalStream;

/// Built-in spinner frame sets.
pub mod frames {
    /// Braille dots cycling through ten positions.
    pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    pub const CIRCLE: &[&str] = &["◐", "◓", "◑", "◒"];
    pub const ARROWS: &[&str] = &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"];
    /// A single braille dot bouncing vertically.
    pub const BOUNCE: &[&str] = &["⠁", "⠂", "⠄", "⠂"];
    /// A bar rising and falling through eighth-blocks.
    pub const PULSE: &[&str] = &[
        "▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃",
    ];
    pub const BLOCKS: &[&str] = &["▖", "▘", "▝", "▗"];
    pub const WAVES: &[&str] = &["▂", "▄", "▅", "▆", "▇", "▆", "▅", "▄"];
    /// Half-width katakana.
    pub const MATRIX: &[&str] = &["ｦ", "ｧ", "ｨ", "ｩ", "ｪ", "ｫ", "ｬ", "ｭ", "ｮ", "ｯ"];
}

/// Named frame sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpinnerStyle {
    #[default]
    Dots,
    Circle,
    Arrows,
    Bounce,
    Pulse,
    Blocks,
    Waves,
    Matrix,
}

impl SpinnerStyle {
    /// The frame sequence for this style.
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Dots => frames::DOTS,
            SpinnerStyle::Circle => frames::CIRCLE,
            SpinnerStyle::Arrows => frames::ARROWS,
            SpinnerStyle::Bounce => frames::BOUNCE,
            SpinnerStyle::Pulse => frames::PULSE,
            SpinnerStyle::Blocks => frames::BLOCKS,
            SpinnerStyle::Waves => frames::WAVES,
            SpinnerStyle::Matrix => frames::MATRIX,
        }
    }

    /// Look up a style by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        let style = match name {
            "dots" => SpinnerStyle::Dots,
            "circle" => SpinnerStyle::Circle,
            "arrows" => SpinnerStyle::Arrows,
            "bounce" => SpinnerStyle::Bounce,
            "pulse" => SpinnerStyle::Pulse,
            "blocks" => SpinnerStyle::Blocks,
            "waves" => SpinnerStyle::Waves,
            "matrix" => SpinnerStyle::Matrix,
            _ => return None,
        };
        Some(style)
    }
}

/// Errors surfaced when a running spinner is stopped.
#[derive(Debug, thiserror::Error)]
pub enum SpinnerError {
    #[error("spinner output failed: {0}")]
    Io(#[from] io::Error),
    #[error("spinner task failed: {0}")]
    Join(#[from] JoinError),
}

/// Spinner configuration. Call [`Spinner::start`] to begin animating.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    style: Option<ContentStyle>,
    delay: Duration,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(SpinnerStyle::default())
    }
}

impl Spinner {
    /// A spinner using `style`'s frames and a 100ms delay.
    pub fn new(style: SpinnerStyle) -> Self {
        Self {
            frames: style.frames(),
            style: None,
            delay: Duration::from_millis(100),
        }
    }

    /// A spinner for a named style, falling back to dots for unknown names.
    pub fn named(name: &str) -> Self {
        Self::new(SpinnerStyle::from_name(name).unwrap_or_default())
    }

    /// Use a custom frame set. An empty set keeps the current frames.
    pub fn with_frames(mut self, frames: &'static [&'static str]) -> Self {
        if !frames.is_empty() {
            self.frames = frames;
        }
        self
    }

    /// Override the theme's [`Role::Primary`] style for the frame glyph.
    pub fn with_style(mut self, style: ContentStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Time between frames (default 100ms).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Time between frames.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The frame shown on the `tick`th repaint.
    pub fn frame(&self, tick: usize) -> &'static str {
        self.frames[tick % self.frames.len()]
    }

    /// Start repainting `\r<frame> <text>` to `out` on every tick.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned
    /// handle cancels the animation without clearing the line.
    pub fn start<W>(&self, text: impl Into<String>, out: W, theme: &Theme) -> SpinnerHandle<W>
    where
        W: Write + Send + 'static,
    {
        let (text_tx, text_rx) = watch::channel(text.into());
        let (stop_tx, stop_rx) = oneshot::channel();
        let style = self.style.unwrap_or_else(|| theme.style(Role::Primary));
        let task = tokio::spawn(spin(
            self.frames,
            self.delay,
            style,
            text_rx,
            stop_rx,
            out,
        ));

        tracing::trace!(delay_ms = self.delay.as_millis() as u64, "spinner started");
        SpinnerHandle {
            text: text_tx,
            stop: Some(stop_tx),
            task,
            theme: theme.clone(),
        }
    }
}

async fn spin<W: Write>(
    frames: &'static [&'static str],
    delay: Duration,
    style: ContentStyle,
    text: watch::Receiver<String>,
    mut stop: oneshot::Receiver<()>,
    mut out: W,
) -> (W, io::Result<()>) {
    // tokio intervals reject a zero period.
    let period = delay.max(Duration::from_millis(1));
    let mut ticks = IntervalStream::new(tokio::time::interval(period));
    let mut i = 0usize;

    loop {
        tokio::select! {
            _ = &mut stop => break,
            tick = ticks.next() => {
                if tick.is_none() {
                    break;
                }
                let frame = paint_with(style, frames[i % frames.len()]);
                let line = format!("\r{frame} {}", text.borrow().as_str());
                if let Err(e) = out.write_all(line.as_bytes()).and_then(|_| out.flush()) {
                    return (out, Err(e));
                }
                i = i.wrapping_add(1);
            }
        }
    }
    (out, Ok(()))
}

/// Control handle for a running spinner.
pub struct SpinnerHandle<W> {
    text: watch::Sender<String>,
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<(W, io::Result<()>)>,
    theme: Theme,
}

impl<W: Write + Send + 'static> SpinnerHandle<W> {
    /// Replace the text shown next to the frame from the next tick on.
    pub fn set_text(&self, text: impl Into<String>) {
        self.text.send_replace(text.into());
    }

    /// Stop animating, blank the line, and return the writer.
    pub async fn stop(mut self) -> Result<W, SpinnerError> {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        let clear = measure(self.text.borrow().as_str()) + 3;
        let (mut out, result) = self.task.await?;
        result?;
        write!(out, "\r{}\r", " ".repeat(clear))?;
        out.flush()?;
        Ok(out)
    }

    /// Stop and print `✓ message`.
    pub async fn success(self, message: &str) -> Result<W, SpinnerError> {
        let mark = SymbolSet::unicode().check_mark;
        self.finish(Role::Success, mark, message).await
    }

    /// Stop and print `✗ message`.
    pub async fn error(self, message: &str) -> Result<W, SpinnerError> {
        let mark = SymbolSet::unicode().cross_mark;
        self.finish(Role::Error, mark, message).await
    }

    /// Stop and print `⚠ message`.
    pub async fn warning(self, message: &str) -> Result<W, SpinnerError> {
        let mark = SymbolSet::unicode().warning;
        self.finish(Role::Warning, mark, message).await
    }

    /// Stop and print `ℹ message`.
    pub async fn info(self, message: &str) -> Result<W, SpinnerError> {
        let mark = SymbolSet::unicode().info;
        self.finish(Role::Primary, mark, message).await
    }

    async fn finish(self, role: Role, mark: &str, message: &str) -> Result<W, SpinnerError> {
        let theme = self.theme.clone();
        let mut out = self.stop().await?;
        writeln!(out, "\r{} {message}", theme.paint(role, mark))?;
        out.flush()?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(style: SpinnerStyle) -> Spinner {
        Spinner::new(style).with_delay(Duration::from_millis(5))
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(40)).await;
    }

    #[test]
    fn every_style_has_frames() {
        for name in [
            "dots", "circle", "arrows", "bounce", "pulse", "blocks", "waves", "matrix",
        ] {
            let style = SpinnerStyle::from_name(name).unwrap();
            assert!(!style.frames().is_empty(), "{name}");
        }
    }

    #[test]
    fn unknown_name_falls_back_to_dots() {
        let s = Spinner::named("sparkles");
        assert_eq!(s.frame(0), "⠋");
        assert_eq!(s.delay(), Duration::from_millis(100));
    }

    #[test]
    fn frames_cycle() {
        let s = Spinner::new(SpinnerStyle::Circle);
        assert_eq!(s.frame(0), "◐");
        assert_eq!(s.frame(5), "◓");
    }

    #[test]
    fn empty_custom_frames_ignored() {
        let s = Spinner::new(SpinnerStyle::Blocks).with_frames(&[]);
        assert_eq!(s.frame(0), "▖");
    }

    #[tokio::test]
    async fn paints_until_stopped_then_clears() {
        let handle = fast(SpinnerStyle::Circle).start("Loading", Vec::new(), &Theme::plain());
        settle().await;
        let out = String::from_utf8(handle.stop().await.unwrap()).unwrap();
        assert!(out.starts_with("\r◐ Loading"));
        assert!(out.contains("\r◓ Loading"));
        assert!(out.ends_with(&format!("\r{}\r", " ".repeat(10))));
    }

    #[tokio::test]
    async fn set_text_applies_on_next_tick() {
        let handle = fast(SpinnerStyle::Dots).start("first", Vec::new(), &Theme::plain());
        settle().await;
        handle.set_text("second");
        settle().await;
        let out = String::from_utf8(handle.stop().await.unwrap()).unwrap();
        assert!(out.contains(" first"));
        assert!(out.contains(" second"));
    }

    #[tokio::test]
    async fn status_lines() {
        let cases = [
            ("✓ Done\n", 0),
            ("✗ Done\n", 1),
            ("⚠ Done\n", 2),
            ("ℹ Done\n", 3),
        ];
        for (expected, which) in cases {
            let handle = fast(SpinnerStyle::Bounce).start("work", Vec::new(), &Theme::plain());
            settle().await;
            let out = match which {
                0 => handle.success("Done").await,
                1 => handle.error("Done").await,
                2 => handle.warning("Done").await,
                _ => handle.info("Done").await,
            }
            .unwrap();
            let out = String::from_utf8(out).unwrap();
            assert!(out.ends_with(&format!("\r{expected}")), "{out:?}");
        }
    }

    #[tokio::test]
    async fn frame_is_painted_with_theme() {
        let theme = Theme::default();
        let handle = fast(SpinnerStyle::Circle).start("x", Vec::new(), &theme);
        settle().await;
        let out = String::from_utf8(handle.stop().await.unwrap()).unwrap();
        assert!(out.contains(&theme.paint(Role::Primary, "◐")));
    }
}
