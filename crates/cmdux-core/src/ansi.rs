//! Conversion of SGR-decorated strings into ratatui text.
//!
//! Rendered components are plain strings with embedded color codes. This
//! module turns them back into styled [`Line`]s so they can be drawn inside a
//! ratatui [`Buffer`](ratatui::buffer::Buffer) (see [`crate::bridge`]).

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Map one of the sixteen base color offsets (0-7) to a ratatui `Color`.
fn base_color(offset: u16, bright: bool) -> Option<Color> {
    let color = match (offset, bright) {
        (0, false) => Color::Black,
        (1, false) => Color::Red,
        (2, false) => Color::Green,
        (3, false) => Color::Yellow,
        (4, false) => Color::Blue,
        (5, false) => Color::Magenta,
        (6, false) => Color::Cyan,
        (7, false) => Color::Gray,
        (0, true) => Color::DarkGray,
        (1, true) => Color::LightRed,
        (2, true) => Color::LightGreen,
        (3, true) => Color::LightYellow,
        (4, true) => Color::LightBlue,
        (5, true) => Color::LightMagenta,
        (6, true) => Color::LightCyan,
        (7, true) => Color::White,
        _ => return None,
    };
    Some(color)
}

/// Parse an extended color (`5;N` or `2;R;G;B`) starting at `codes[0]`.
/// Returns the color and how many codes it consumed.
fn extended_color(codes: &[u16]) -> Option<(Color, usize)> {
    match codes {
        [5, n, ..] => Some((Color::Indexed(*n as u8), 2)),
        [2, r, g, b, ..] => Some((Color::Rgb(*r as u8, *g as u8, *b as u8), 4)),
        _ => None,
    }
}

/// Apply a sequence of SGR parameter codes to a `Style`.
fn apply_sgr_codes(codes: &[u16], style: &mut Style) {
    let mut i = 0;
    while i < codes.len() {
        let code = codes[i];
        match code {
            0 => *style = Style::default(),
            1 => *style = style.add_modifier(Modifier::BOLD),
            2 => *style = style.add_modifier(Modifier::DIM),
            3 => *style = style.add_modifier(Modifier::ITALIC),
            4 => *style = style.add_modifier(Modifier::UNDERLINED),
            5 => *style = style.add_modifier(Modifier::SLOW_BLINK),
            7 => *style = style.add_modifier(Modifier::REVERSED),
            9 => *style = style.add_modifier(Modifier::CROSSED_OUT),
            22 => *style = style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => *style = style.remove_modifier(Modifier::ITALIC),
            24 => *style = style.remove_modifier(Modifier::UNDERLINED),
            27 => *style = style.remove_modifier(Modifier::REVERSED),
            30..=37 => {
                if let Some(c) = base_color(code - 30, false) {
                    *style = style.fg(c);
                }
            }
            39 => style.fg = None,
            40..=47 => {
                if let Some(c) = base_color(code - 40, false) {
                    *style = style.bg(c);
                }
            }
            49 => style.bg = None,
            90..=97 => {
                if let Some(c) = base_color(code - 90, true) {
                    *style = style.fg(c);
                }
            }
            100..=107 => {
                if let Some(c) = base_color(code - 100, true) {
                    *style = style.bg(c);
                }
            }
            38 | 48 => {
                if let Some((color, used)) = extended_color(&codes[i + 1..]) {
                    *style = if code == 38 {
                        style.fg(color)
                    } else {
                        style.bg(color)
                    };
                    i += used;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

/// Parse a single line of text containing escape sequences into a `Line`.
fn parse_ansi_line(line: &str) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current_style = Style::default();
    let mut buf = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            buf.push(c);
            continue;
        }
        if chars.peek() != Some(&'[') {
            // Lone ESC, skip it.
            continue;
        }
        chars.next();

        let mut params = String::new();
        let mut final_byte = None;
        for pc in chars.by_ref() {
            if pc.is_ascii_digit() || pc == ';' {
                params.push(pc);
            } else {
                final_byte = Some(pc);
                break;
            }
        }

        // Non-SGR CSI sequences are dropped.
        if final_byte != Some('m') {
            continue;
        }

        if !buf.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut buf), current_style));
        }

        let codes: Vec<u16> = if params.is_empty() {
            vec![0]
        } else {
            params
                .split(';')
                .map(|s| s.parse::<u16>().unwrap_or(0))
                .collect()
        };
        apply_sgr_codes(&codes, &mut current_style);
    }

    if !buf.is_empty() {
        spans.push(Span::styled(buf, current_style));
    }

    if spans.is_empty() {
        Line::from(vec![Span::raw(String::new())])
    } else {
        Line::from(spans)
    }
}

/// Parse a string containing SGR escape sequences into styled `Line`s, one
/// per `\n`-separated line.
///
/// Supports bold/dim/italic/underline/blink/reverse/strikethrough and their
/// resets, 16 base colors, 256-color (`38;5;N`) and truecolor (`38;2;R;G;B`)
/// foregrounds and backgrounds.
///
/// # Examples
///
/// ```
/// use cmdux_core::ansi::parse_ansi;
///
/// let lines = parse_ansi("\x1b[31mhello\x1b[0m world");
/// assert_eq!(lines.len(), 1);
/// ```
pub fn parse_ansi(input: &str) -> Vec<Line<'static>> {
    input.split('\n').map(parse_ansi_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ansi_basic_foreground_color() {
        let lines = parse_ansi("\x1b[31mhello\x1b[0m");
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "hello");
        assert_eq!(spans[0].style, Style::default().fg(Color::Red));
    }

    #[test]
    fn parse_ansi_bold_and_color() {
        let lines = parse_ansi("\x1b[1;31mbold red\x1b[0m");
        let spans = &lines[0].spans;
        assert_eq!(spans[0].content, "bold red");
        assert_eq!(
            spans[0].style,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn parse_ansi_reset_mid_line() {
        let lines = parse_ansi("\x1b[32mgreen\x1b[0m plain");
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "green");
        assert_eq!(spans[1].content, " plain");
        assert_eq!(spans[1].style, Style::default());
    }

    #[test]
    fn parse_ansi_multi_line() {
        let lines = parse_ansi("\x1b[34mblue\x1b[0m\n\x1b[33myellow\x1b[0m");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].style, Style::default().fg(Color::Blue));
        assert_eq!(lines[1].spans[0].content, "yellow");
    }

    #[test]
    fn parse_ansi_256_color() {
        let lines = parse_ansi("\x1b[38;5;208morange\x1b[0m");
        assert_eq!(
            lines[0].spans[0].style,
            Style::default().fg(Color::Indexed(208))
        );
    }

    #[test]
    fn parse_ansi_truecolor_background() {
        let lines = parse_ansi("\x1b[48;2;10;20;30mbg\x1b[0m");
        assert_eq!(
            lines[0].spans[0].style,
            Style::default().bg(Color::Rgb(10, 20, 30))
        );
    }

    #[test]
    fn parse_ansi_bright_colors() {
        let lines = parse_ansi("\x1b[91mlight red\x1b[0m");
        assert_eq!(
            lines[0].spans[0].style,
            Style::default().fg(Color::LightRed)
        );
    }

    #[test]
    fn parse_ansi_cursor_codes_dropped() {
        let lines = parse_ansi("\x1b[2J\x1b[Hhome");
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].content, "home");
    }

    #[test]
    fn parse_ansi_empty_input() {
        assert_eq!(parse_ansi("").len(), 1);
    }
}
