//! Short-lived terminal text animations.
//!
//! Each animation is an async method on [`Effects`], which borrows a writer
//! and a theme. Frame construction lives in plain functions ([`rainbow`],
//! [`glitch_text`], [`wave_frame`], [`MatrixRain::frame`]) so it can be
//! tested without timing.

use std::io::{self, Write};
use std::time::Duration;

use cmdux_core::theme::{paint_with, Role, Theme};
use crossterm::style::ContentStyle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{sleep, Instant};

/// Erase the current line and return the cursor to column 0.
pub const CLEAR_LINE: &str = "\x1b[2K\r";
/// Erase the screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const MATRIX_FRAME: Duration = Duration::from_millis(50);
const WAVE_FRAME: Duration = Duration::from_millis(50);
const GLITCH_FRAME: Duration = Duration::from_millis(100);
const PULSE_FRAME: Duration = Duration::from_millis(200);
const BREATH_FRAME: Duration = Duration::from_millis(500);
const DOTS_FRAME: Duration = Duration::from_millis(300);

const RAIN_GLYPHS: &str = "ｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜｦﾝ0123456789";
const GLITCH_GLYPHS: &[char] = &[
    '$', '#', '@', '!', '%', '^', '*', '&', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', '|',
    ';', ':', ',', '.', '<', '>', '?',
];
const RAINBOW: [Role; 6] = [
    Role::Error,
    Role::Warning,
    Role::Success,
    Role::Primary,
    Role::Secondary,
    Role::Accent1,
];

/// Paint each non-space character with the next color of a six-role cycle.
///
/// The cycle position is the character's index in `text`, so spaces consume
/// a color without showing it.
pub fn rainbow(text: &str, theme: &Theme) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            if c == ' ' {
                " ".to_string()
            } else {
                theme.paint(RAINBOW[i % RAINBOW.len()], &c.to_string())
            }
        })
        .collect()
}

/// Replace each character with a random symbol with probability `rate`.
pub fn glitch_text<R: Rng + ?Sized>(text: &str, rng: &mut R, rate: f64) -> String {
    let rate = rate.clamp(0.0, 1.0);
    text.chars()
        .map(|c| {
            if rng.gen_bool(rate) {
                GLITCH_GLYPHS[rng.gen_range(0..GLITCH_GLYPHS.len())]
            } else {
                c
            }
        })
        .collect()
}

/// Lay `text` along a sine wave in a `width` x `height` character grid.
///
/// Character `x` sits on row `mid + 0.75 * mid * sin(0.5 * x + 0.01 * t)`
/// where `mid` is the middle row and `t` is `elapsed_ms`.
pub fn wave_frame(text: &str, width: usize, height: usize, elapsed_ms: u64) -> Vec<String> {
    let mut grid = vec![vec![' '; width]; height];
    let mid = height.saturating_sub(1) as f64 / 2.0;
    let amplitude = mid * 0.75;

    for (x, c) in text.chars().enumerate().take(width) {
        let phase = x as f64 * 0.5 + elapsed_ms as f64 * 0.01;
        let y = (mid + amplitude * phase.sin()) as usize;
        if let Some(row) = grid.get_mut(y) {
            row[x] = c;
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[derive(Debug, Clone, Copy)]
struct RainDrop {
    x: usize,
    y: usize,
    speed: usize,
}

/// State for the falling-glyph animation.
///
/// Every drop is a short vertical trail; the two cells nearest its head are
/// highlighted with [`Role::Success`], the rest use [`Role::Muted`].
#[derive(Debug, Clone)]
pub struct MatrixRain {
    width: usize,
    height: usize,
    drops: Vec<RainDrop>,
    glyphs: Vec<char>,
}

impl MatrixRain {
    /// Trail length behind each drop's head.
    pub const TRAIL: usize = 5;

    /// One drop per column at a random row and speed.
    pub fn new<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let drops = (0..width)
            .map(|x| RainDrop {
                x,
                y: rng.gen_range(0..height.max(1)),
                speed: rng.gen_range(1..=3),
            })
            .collect();
        Self {
            width,
            height,
            drops,
            glyphs: RAIN_GLYPHS.chars().collect(),
        }
    }

    /// Advance every drop and draw the next frame, one string per row.
    ///
    /// Every row is exactly `width` columns wide.
    pub fn frame<R: Rng + ?Sized>(&mut self, rng: &mut R, theme: &Theme) -> Vec<String> {
        // Cell contents: glyph plus whether it is near a drop's head.
        let mut grid: Vec<Vec<Option<(char, bool)>>> = vec![vec![None; self.width]; self.height];

        for drop in &mut self.drops {
            drop.y += drop.speed;
            if drop.y >= self.height {
                drop.y = 0;
                drop.x = rng.gen_range(0..self.width.max(1));
            }
            let top = drop.y.saturating_sub(Self::TRAIL);
            for y in top..=drop.y.min(self.height.saturating_sub(1)) {
                let glyph = self.glyphs[rng.gen_range(0..self.glyphs.len())];
                let head = y + 2 > drop.y;
                if let Some(cell) = grid.get_mut(y).and_then(|row| row.get_mut(drop.x)) {
                    *cell = Some((glyph, head));
                }
            }
        }

        grid.into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        Some((glyph, true)) => theme.paint(Role::Success, &glyph.to_string()),
                        Some((glyph, false)) => theme.paint(Role::Muted, &glyph.to_string()),
                        None => " ".to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Animation runner over a writer.
///
/// Every animation paints with a default [`Role`] unless a style override is
/// set with [`Effects::with_style`].
pub struct Effects<'a, W: Write> {
    out: &'a mut W,
    theme: &'a Theme,
    style: Option<ContentStyle>,
}

impl<'a, W: Write> Effects<'a, W> {
    pub fn new(out: &'a mut W, theme: &'a Theme) -> Self {
        Self {
            out,
            theme,
            style: None,
        }
    }

    /// Paint with `style` instead of each animation's default role.
    pub fn with_style(mut self, style: ContentStyle) -> Self {
        self.style = Some(style);
        self
    }

    fn style_or(&self, role: Role) -> ContentStyle {
        self.style.unwrap_or_else(|| self.theme.style(role))
    }

    fn redraw_line(&mut self, style: ContentStyle, text: &str) -> io::Result<()> {
        write!(self.out, "{CLEAR_LINE}{}", paint_with(style, text))?;
        self.out.flush()
    }

    fn finish_line(&mut self, style: ContentStyle, text: &str) -> io::Result<()> {
        writeln!(self.out, "{CLEAR_LINE}{}", paint_with(style, text))?;
        self.out.flush()
    }

    /// Print `text` one character at a time, then end the line.
    pub async fn typewriter(&mut self, text: &str, delay: Duration) -> io::Result<()> {
        let style = self.style_or(Role::Primary);
        for c in text.chars() {
            write!(self.out, "{}", paint_with(style, &c.to_string()))?;
            self.out.flush()?;
            sleep(delay).await;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Run an 80x15 falling-glyph animation for `duration`, then clear the
    /// screen.
    pub async fn matrix_rain(&mut self, duration: Duration) -> io::Result<()> {
        let (width, _) = cmdux_core::terminal_size();
        let mut rng = StdRng::from_entropy();
        let mut rain = MatrixRain::new(width as usize, 15, &mut rng);
        let start = Instant::now();

        while start.elapsed() < duration {
            let frame = rain.frame(&mut rng, self.theme);
            write!(self.out, "{CLEAR_SCREEN}")?;
            for row in frame {
                writeln!(self.out, "{row}")?;
            }
            self.out.flush()?;
            sleep(MATRIX_FRAME).await;
        }
        write!(self.out, "{CLEAR_SCREEN}")?;
        self.out.flush()
    }

    /// Ripple `text` along a sine wave for `duration`.
    pub async fn wave(&mut self, text: &str, duration: Duration) -> io::Result<()> {
        let style = self.style_or(Role::Primary);
        let (width, _) = cmdux_core::terminal_size();
        let start = Instant::now();

        while start.elapsed() < duration {
            let elapsed = start.elapsed().as_millis() as u64;
            write!(self.out, "{CLEAR_SCREEN}")?;
            for row in wave_frame(text, width as usize, 5, elapsed) {
                writeln!(self.out, "{}", paint_with(style, &row))?;
            }
            self.out.flush()?;
            sleep(WAVE_FRAME).await;
        }
        write!(self.out, "\x1b[H")?;
        self.out.flush()
    }

    /// Flicker random corruption over `text` for `duration`, then print it
    /// clean.
    pub async fn glitch(&mut self, text: &str, duration: Duration) -> io::Result<()> {
        let normal = self.style_or(Role::Primary);
        let corrupt = self.theme.style(Role::Error);
        let mut rng = StdRng::from_entropy();
        let start = Instant::now();

        while start.elapsed() < duration {
            let glitched = glitch_text(text, &mut rng, 0.1);
            let style = if rng.gen_bool(0.3) { corrupt } else { normal };
            self.redraw_line(style, &glitched)?;
            sleep(GLITCH_FRAME).await;
        }
        self.finish_line(normal, text)
    }

    /// Cycle `text` through `roles` for `duration`. An empty list uses
    /// primary, secondary, and accent colors.
    pub async fn pulse(
        &mut self,
        text: &str,
        duration: Duration,
        roles: &[Role],
    ) -> io::Result<()> {
        let roles = if roles.is_empty() {
            &[Role::Primary, Role::Secondary, Role::Accent1][..]
        } else {
            roles
        };
        let start = Instant::now();
        let mut i = 0;

        while start.elapsed() < duration {
            let style = self.theme.style(roles[i % roles.len()]);
            self.redraw_line(style, text)?;
            sleep(PULSE_FRAME).await;
            i += 1;
        }
        let style = self.style_or(Role::Primary);
        self.finish_line(style, text)
    }

    /// Redraw `text` with progressively brighter roles, at most four steps.
    pub async fn fade_in(
        &mut self,
        text: &str,
        steps: usize,
        step_delay: Duration,
    ) -> io::Result<()> {
        const RAMP: [Role; 4] = [Role::Faint, Role::Muted, Role::Secondary, Role::Primary];
        for role in RAMP.into_iter().take(steps) {
            let style = self.theme.style(role);
            self.redraw_line(style, text)?;
            sleep(step_delay).await;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Print `text` in rainbow colors and end the line.
    pub fn rainbow(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", rainbow(text, self.theme))?;
        self.out.flush()
    }

    /// Alternate `text` between its color and muted every half second.
    pub async fn breathing(&mut self, text: &str, duration: Duration) -> io::Result<()> {
        let bright = self.style_or(Role::Success);
        let dim = self.theme.style(Role::Muted);
        let start = Instant::now();

        while start.elapsed() < duration {
            self.redraw_line(bright, text)?;
            sleep(BREATH_FRAME).await;
            self.redraw_line(dim, text)?;
            sleep(BREATH_FRAME).await;
        }
        self.finish_line(bright, text)
    }

    /// Append zero to three animated dots to `text` for `duration`.
    pub async fn loading_dots(&mut self, text: &str, duration: Duration) -> io::Result<()> {
        const DOTS: [&str; 4] = ["", ".", "..", "..."];
        let style = self.style_or(Role::Primary);
        let start = Instant::now();
        let mut i = 0;

        while start.elapsed() < duration {
            self.redraw_line(style, &format!("{text}{}", DOTS[i % DOTS.len()]))?;
            sleep(DOTS_FRAME).await;
            i += 1;
        }
        self.finish_line(style, text)
    }
}
