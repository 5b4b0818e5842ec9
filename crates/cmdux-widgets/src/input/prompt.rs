use std::io::{BufRead, Write};
use std::sync::Arc;

use cmdux_core::theme::{Role, Theme};
use cmdux_core::width::sanitize;
use cmdux_core::SymbolSet;
use crossterm::style::ContentStyle;

use super::InputError;

/// Check an answer; `Err` carries the message shown before asking again.
pub type Validator = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Rewrite an answer before validation.
pub type Transformer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A single question answered with one line of input.
///
/// [`Prompt::run`] keeps asking until an answer passes every check:
///
/// 1. An empty answer takes the default, if there is one.
/// 2. A required prompt rejects an empty answer.
/// 3. The transformer, if any, rewrites the answer.
/// 4. The validator, if any, accepts or rejects it.
///
/// Rejections print `✗ <reason>` and re-ask. Closed input ends the loop
/// with [`InputError::Eof`].
#[derive(Clone)]
pub struct Prompt {
    message: String,
    default: String,
    required: bool,
    hidden: bool,
    prefix: String,
    validator: Option<Validator>,
    transformer: Option<Transformer>,
    style: Option<ContentStyle>,
    error_style: Option<ContentStyle>,
}

impl std::fmt::Debug for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompt")
            .field("message", &self.message)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("hidden", &self.hidden)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Prompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: String::new(),
            required: false,
            hidden: false,
            prefix: "? ".to_string(),
            validator: None,
            transformer: None,
            style: None,
            error_style: None,
        }
    }

    /// Answer used when the user enters nothing.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark the answer as secret. The reader is not switched out of echo
    /// mode; callers reading from a terminal handle that themselves.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_transformer<F>(mut self, transformer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    /// Override the theme's [`Role::Primary`] style for the question.
    pub fn with_style(mut self, style: ContentStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Override the theme's [`Role::Error`] style for rejections.
    pub fn with_error_style(mut self, style: ContentStyle) -> Self {
        self.error_style = Some(style);
        self
    }

    pub(crate) fn with_shared_validator(mut self, validator: Option<Validator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Ask until an answer is accepted.
    pub fn run<R, W>(&self, input: &mut R, out: &mut W, theme: &Theme) -> Result<String, InputError>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            self.ask(out, theme)?;
            let mut answer = read_answer(input)?;

            if answer.is_empty() && !self.default.is_empty() {
                answer = self.default.clone();
            }
            if self.required && answer.is_empty() {
                self.reject(out, theme, "This field is required")?;
                continue;
            }
            if let Some(transform) = &self.transformer {
                answer = transform(&answer);
            }
            if let Some(validate) = &self.validator {
                if let Err(reason) = validate(&answer) {
                    tracing::debug!(%reason, "prompt answer rejected");
                    self.reject(out, theme, &reason)?;
                    continue;
                }
            }
            return Ok(answer);
        }
    }

    fn ask<W: Write>(&self, out: &mut W, theme: &Theme) -> Result<(), InputError> {
        let mut question = theme.paint_or(
            self.style,
            Role::Primary,
            &format!("{}{}", self.prefix, self.message),
        );
        if !self.default.is_empty() {
            question.push_str(&theme.paint(Role::Muted, &format!(" ({})", self.default)));
        }
        if self.required {
            question.push_str(&theme.paint(Role::Error, " *"));
        }
        write!(out, "{question}: ")?;
        out.flush()?;
        Ok(())
    }

    fn reject<W: Write>(&self, out: &mut W, theme: &Theme, reason: &str) -> Result<(), InputError> {
        let mark = SymbolSet::unicode().cross_mark;
        writeln!(
            out,
            "{}",
            theme.paint_or(self.error_style, Role::Error, &format!("{mark} {reason}"))
        )?;
        Ok(())
    }
}

/// Read one line, trimmed and stripped of control characters.
pub(crate) fn read_answer<R: BufRead>(input: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(sanitize(line.trim()))
}

/// Ask a yes/no question. `y` or `yes` (any case) is true, an empty answer
/// is `default`, anything else is false.
pub fn confirm<R, W>(
    message: &str,
    default: bool,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<bool, InputError>
where
    R: BufRead,
    W: Write,
{
    let hint = if default { " (Y/n)" } else { " (y/N)" };
    write!(
        out,
        "{}{}: ",
        theme.paint(Role::Primary, &format!("? {message}")),
        theme.paint(Role::Muted, hint)
    )?;
    out.flush()?;

    let answer = read_answer(input)?.to_lowercase();
    if answer.is_empty() {
        return Ok(default);
    }
    Ok(answer == "y" || answer == "yes")
}

fn list_options<W, S>(
    out: &mut W,
    theme: &Theme,
    question: &str,
    options: &[S],
) -> Result<(), InputError>
where
    W: Write,
    S: AsRef<str>,
{
    writeln!(out, "{}", theme.paint(Role::Primary, &format!("? {question}")))?;
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, option.as_ref())?;
    }
    Ok(())
}

fn parse_choice(raw: &str, count: usize) -> Result<usize, InputError> {
    let choice: usize = raw
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidChoice(raw.trim().to_string()))?;
    if choice < 1 || choice > count {
        return Err(InputError::OutOfRange { min: 1, max: count });
    }
    Ok(choice - 1)
}

/// Pick one option by its 1-based number. Returns the 0-based index and the
/// option text.
pub fn select<R, W, S>(
    message: &str,
    options: &[S],
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<(usize, String), InputError>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    if options.is_empty() {
        return Err(InputError::NoOptions);
    }
    list_options(out, theme, message, options)?;
    write!(
        out,
        "{}",
        theme.paint(Role::Primary, &format!("Enter choice (1-{}): ", options.len()))
    )?;
    out.flush()?;

    let index = parse_choice(&read_answer(input)?, options.len())?;
    Ok((index, options[index].as_ref().to_string()))
}

/// Pick any number of options as comma-separated 1-based numbers. An empty
/// answer selects nothing.
pub fn multi_select<R, W, S>(
    message: &str,
    options: &[S],
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<Vec<(usize, String)>, InputError>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    if options.is_empty() {
        return Err(InputError::NoOptions);
    }
    list_options(out, theme, &format!("{message} (comma-separated numbers)"), options)?;
    write!(out, "{}", theme.paint(Role::Primary, "Enter choices: "))?;
    out.flush()?;

    let answer = read_answer(input)?;
    if answer.is_empty() {
        return Ok(Vec::new());
    }
    answer
        .split(',')
        .map(|part| -> Result<(usize, String), InputError> {
            let index = parse_choice(part, options.len())?;
            Ok((index, options[index].as_ref().to_string()))
        })
        .collect()
}

/// Ask for a required secret.
pub fn password<R, W>(
    message: &str,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<String, InputError>
where
    R: BufRead,
    W: Write,
{
    Prompt::new(message)
        .with_hidden(true)
        .with_required(true)
        .run(input, out, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(prompt: &Prompt, typed: &str) -> (Result<String, InputError>, String) {
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = prompt.run(&mut input, &mut out, &Theme::plain());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn returns_trimmed_answer() {
        let (answer, out) = run(&Prompt::new("Name"), "  Ada  \n");
        assert_eq!(answer.unwrap(), "Ada");
        assert_eq!(out, "? Name: ");
    }

    #[test]
    fn empty_answer_takes_default() {
        let (answer, out) = run(&Prompt::new("Port").with_default("8080"), "\n");
        assert_eq!(answer.unwrap(), "8080");
        assert_eq!(out, "? Port (8080): ");
    }

    #[test]
    fn required_reasks_until_answered() {
        let prompt = Prompt::new("Email").with_required(true);
        let (answer, out) = run(&prompt, "\n   \nme@example.com\n");
        assert_eq!(answer.unwrap(), "me@example.com");
        assert_eq!(out.matches("✗ This field is required\n").count(), 2);
        assert_eq!(out.matches("? Email *: ").count(), 3);
    }

    #[test]
    fn validator_rejection_prints_reason() {
        let prompt = Prompt::new("Age").with_validator(|s| {
            s.parse::<u8>().map(|_| ()).map_err(|_| "must be a number".to_string())
        });
        let (answer, out) = run(&prompt, "old\n42\n");
        assert_eq!(answer.unwrap(), "42");
        assert!(out.contains("✗ must be a number\n"));
    }

    #[test]
    fn transformer_runs_before_validator() {
        let prompt = Prompt::new("Code")
            .with_transformer(|s| s.to_uppercase())
            .with_validator(|s| {
                if s.chars().all(|c| !c.is_lowercase()) {
                    Ok(())
                } else {
                    Err("lowercase".into())
                }
            });
        let (answer, _) = run(&prompt, "abc\n");
        assert_eq!(answer.unwrap(), "ABC");
    }

    #[test]
    fn closed_input_is_eof() {
        let (answer, _) = run(&Prompt::new("Anything").with_required(true), "\n");
        assert!(matches!(answer, Err(InputError::Eof)));
    }

    #[test]
    fn control_characters_removed() {
        let (answer, _) = run(&Prompt::new("Name"), "A\x07da\n");
        assert_eq!(answer.unwrap(), "Ada");
    }

    #[test]
    fn confirm_answers() {
        let cases = [
            ("y\n", false, true),
            ("YES\n", false, true),
            ("no\n", true, false),
            ("maybe\n", true, false),
            ("\n", true, true),
            ("\n", false, false),
        ];
        for (typed, default, expected) in cases {
            let mut input = Cursor::new(typed);
            let mut out = Vec::<u8>::new();
            let answer = confirm("Continue?", default, &mut input, &mut out, &Theme::plain());
            assert_eq!(answer.unwrap(), expected, "{typed:?} default {default}");
        }
    }

    #[test]
    fn confirm_hint_reflects_default() {
        let mut out = Vec::new();
        confirm("Go", true, &mut Cursor::new("\n"), &mut out, &Theme::plain()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "? Go (Y/n): ");
    }

    #[test]
    fn select_lists_and_picks() {
        let mut out = Vec::new();
        let picked = select(
            "Color",
            &["red", "green", "blue"],
            &mut Cursor::new("2\n"),
            &mut out,
            &Theme::plain(),
        )
        .unwrap();
        assert_eq!(picked, (1, "green".to_string()));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "? Color\n  1) red\n  2) green\n  3) blue\nEnter choice (1-3): "
        );
    }

    #[test]
    fn select_errors() {
        let theme = Theme::plain();
        let empty: [&str; 0] = [];
        assert!(matches!(
            select("x", &empty, &mut Cursor::new("1\n"), &mut Vec::<u8>::new(), &theme),
            Err(InputError::NoOptions)
        ));
        assert!(matches!(
            select("x", &["a"], &mut Cursor::new("two\n"), &mut Vec::<u8>::new(), &theme),
            Err(InputError::InvalidChoice(s)) if s == "two"
        ));
        assert!(matches!(
            select("x", &["a", "b"], &mut Cursor::new("3\n"), &mut Vec::<u8>::new(), &theme),
            Err(InputError::OutOfRange { min: 1, max: 2 })
        ));
        assert!(matches!(
            select("x", &["a", "b"], &mut Cursor::new("0\n"), &mut Vec::<u8>::new(), &theme),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn multi_select_parses_list() {
        let mut out = Vec::new();
        let picked = multi_select(
            "Toppings",
            &["cheese", "ham", "olives"],
            &mut Cursor::new("3, 1\n"),
            &mut out,
            &Theme::plain(),
        )
        .unwrap();
        assert_eq!(picked, vec![(2, "olives".to_string()), (0, "cheese".to_string())]);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("? Toppings (comma-separated numbers)\n"));
    }

    #[test]
    fn multi_select_empty_and_invalid() {
        let theme = Theme::plain();
        let none = multi_select("x", &["a"], &mut Cursor::new("\n"), &mut Vec::<u8>::new(), &theme);
        assert!(none.unwrap().is_empty());
        let mut sink = Vec::<u8>::new();
        let bad = multi_select("x", &["a", "b"], &mut Cursor::new("1,z\n"), &mut sink, &theme);
        assert!(matches!(bad, Err(InputError::InvalidChoice(s)) if s == "z"));
    }

    #[test]
    fn password_is_required() {
        let mut out = Vec::new();
        let mut input = Cursor::new("\nhunter2\n");
        let secret = password("Password", &mut input, &mut out, &Theme::plain());
        assert_eq!(secret.unwrap(), "hunter2");
        assert!(String::from_utf8(out).unwrap().contains("✗ This field is required"));
    }
}
