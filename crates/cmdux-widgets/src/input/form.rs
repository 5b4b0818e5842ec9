use std::io::{BufRead, Write};
use std::sync::Arc;

use cmdux_core::theme::{Role, Theme};
use crossterm::style::ContentStyle;

use super::prompt::{confirm, multi_select, select, Prompt, Validator};
use super::InputError;

/// What a field asks for and how its answer is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Number,
    Boolean,
    Select(Vec<String>),
    MultiSelect(Vec<String>),
}

/// A collected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Bool(bool),
    Choice(String),
    Choices(Vec<String>),
}

impl FieldValue {
    /// Text of a `Text` or `Choice` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            FieldValue::Choices(c) => Some(c),
            _ => None,
        }
    }
}

/// Rust types a [`FieldValue`] can be read as.
pub trait FieldType: Sized {
    /// Name used in [`InputError::TypeMismatch`].
    const EXPECTED: &'static str;

    fn from_value(value: &FieldValue) -> Option<Self>;
}

impl FieldType for String {
    const EXPECTED: &'static str = "text";

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

impl FieldType for i64 {
    const EXPECTED: &'static str = "a number";

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_number()
    }
}

impl FieldType for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldType for Vec<String> {
    const EXPECTED: &'static str = "a list of choices";

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_choices().map(<[String]>::to_vec)
    }
}

/// Answers keyed by field name, in the order they were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormResults {
    values: Vec<(String, FieldValue)>,
}

impl FormResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `name`, replacing an earlier answer.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_number)
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    pub fn choice(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(FieldValue::Choice(c)) => Some(c),
            _ => None,
        }
    }

    pub fn choices(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(FieldValue::as_choices)
    }

    /// Read `name` as `T`, failing if it is absent or of another kind.
    pub fn value<T: FieldType>(&self, name: &str) -> Result<T, InputError> {
        let value = self
            .get(name)
            .ok_or_else(|| InputError::MissingField(name.to_string()))?;
        T::from_value(value).ok_or_else(|| InputError::TypeMismatch {
            field: name.to_string(),
            expected: T::EXPECTED,
        })
    }

    /// Build a `T` from these answers.
    pub fn bind<T: FromForm>(&self) -> Result<T, InputError> {
        T::from_form(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Types that can be assembled from collected form answers.
///
/// ```
/// use cmdux_widgets::input::{FieldValue, FormResults, FromForm, InputError};
///
/// struct Signup {
///     name: String,
///     age: i64,
/// }
///
/// impl FromForm for Signup {
///     fn from_form(results: &FormResults) -> Result<Self, InputError> {
///         Ok(Self {
///             name: results.value("name")?,
///             age: results.value("age")?,
///         })
///     }
/// }
///
/// let mut results = FormResults::new();
/// results.insert("name", FieldValue::Text("Ada".into()));
/// results.insert("age", FieldValue::Number(36));
/// let signup: Signup = results.bind().unwrap();
/// assert_eq!(signup.age, 36);
/// ```
pub trait FromForm: Sized {
    fn from_form(results: &FormResults) -> Result<Self, InputError>;
}

/// One question in a [`Form`].
#[derive(Clone)]
pub struct FormField {
    name: String,
    label: String,
    kind: FieldKind,
    required: bool,
    default: Option<FieldValue>,
    validator: Option<Validator>,
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            default: None,
            validator: None,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Value used for an empty answer. Only a default matching the field's
    /// kind (`Text` for text, `Number` for numbers, `Bool` for booleans)
    /// takes effect.
    pub fn with_default(mut self, value: FieldValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Extra check on text, password, and number answers.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    fn collect<R, W>(
        &self,
        input: &mut R,
        out: &mut W,
        theme: &Theme,
    ) -> Result<FieldValue, InputError>
    where
        R: BufRead,
        W: Write,
    {
        match &self.kind {
            FieldKind::Text => {
                let mut prompt = Prompt::new(&self.label)
                    .with_required(self.required)
                    .with_shared_validator(self.validator.clone());
                if let Some(FieldValue::Text(default)) = &self.default {
                    prompt = prompt.with_default(default);
                }
                prompt.run(input, out, theme).map(FieldValue::Text)
            }
            FieldKind::Password => Prompt::new(&self.label)
                .with_hidden(true)
                .with_required(true)
                .with_shared_validator(self.validator.clone())
                .run(input, out, theme)
                .map(FieldValue::Text),
            FieldKind::Number => self.collect_number(input, out, theme),
            FieldKind::Boolean => {
                let default = matches!(self.default, Some(FieldValue::Bool(true)));
                confirm(&self.label, default, input, out, theme).map(FieldValue::Bool)
            }
            FieldKind::Select(options) => {
                let (_, choice) = select(&self.label, options.as_slice(), input, out, theme)?;
                Ok(FieldValue::Choice(choice))
            }
            FieldKind::MultiSelect(options) => {
                let picked = multi_select(&self.label, options.as_slice(), input, out, theme)?;
                Ok(FieldValue::Choices(picked.into_iter().map(|(_, c)| c).collect()))
            }
        }
    }

    fn collect_number<R, W>(
        &self,
        input: &mut R,
        out: &mut W,
        theme: &Theme,
    ) -> Result<FieldValue, InputError>
    where
        R: BufRead,
        W: Write,
    {
        let default = match self.default {
            Some(FieldValue::Number(n)) => Some(n),
            _ => None,
        };
        let required = self.required;
        let extra = self.validator.clone();

        let mut prompt = Prompt::new(&self.label)
            .with_required(required)
            .with_validator(move |answer| {
                if answer.is_empty() && !required {
                    return Ok(());
                }
                answer
                    .parse::<i64>()
                    .map_err(|_| format!("{answer:?} is not a whole number"))?;
                match &extra {
                    Some(validate) => validate(answer),
                    None => Ok(()),
                }
            });
        if let Some(n) = default {
            prompt = prompt.with_default(n.to_string());
        }

        let answer = prompt.run(input, out, theme)?;
        if answer.is_empty() {
            return Ok(FieldValue::Number(default.unwrap_or(0)));
        }
        answer
            .parse()
            .map(FieldValue::Number)
            .map_err(|e: std::num::ParseIntError| InputError::Validation(e.to_string()))
    }
}

/// An ordered sequence of fields asked one after another.
#[derive(Debug, Clone)]
pub struct Form {
    title: String,
    fields: Vec<FormField>,
    title_style: Option<ContentStyle>,
}

impl Form {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            title_style: None,
        }
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_title_style(mut self, style: ContentStyle) -> Self {
        self.title_style = Some(style);
        self
    }

    pub fn text_field(
        self,
        name: &str,
        label: &str,
        required: bool,
        default: Option<&str>,
    ) -> Self {
        let mut field = FormField::new(name, label, FieldKind::Text).with_required(required);
        if let Some(d) = default {
            field = field.with_default(FieldValue::Text(d.to_string()));
        }
        self.with_field(field)
    }

    pub fn password_field(self, name: &str, label: &str) -> Self {
        self.with_field(FormField::new(name, label, FieldKind::Password).with_required(true))
    }

    pub fn number_field(
        self,
        name: &str,
        label: &str,
        required: bool,
        default: Option<i64>,
    ) -> Self {
        let mut field = FormField::new(name, label, FieldKind::Number).with_required(required);
        if let Some(d) = default {
            field = field.with_default(FieldValue::Number(d));
        }
        self.with_field(field)
    }

    pub fn boolean_field(self, name: &str, label: &str, default: bool) -> Self {
        self.with_field(
            FormField::new(name, label, FieldKind::Boolean).with_default(FieldValue::Bool(default)),
        )
    }

    pub fn select_field<S: Into<String>>(
        self,
        name: &str,
        label: &str,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        let options = options.into_iter().map(Into::into).collect();
        self.with_field(FormField::new(name, label, FieldKind::Select(options)))
    }

    pub fn multi_select_field<S: Into<String>>(
        self,
        name: &str,
        label: &str,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        let options = options.into_iter().map(Into::into).collect();
        self.with_field(FormField::new(name, label, FieldKind::MultiSelect(options)))
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Print the title banner and ask every field in order.
    pub fn run<R, W>(
        &self,
        input: &mut R,
        out: &mut W,
        theme: &Theme,
    ) -> Result<FormResults, InputError>
    where
        R: BufRead,
        W: Write,
    {
        if !self.title.is_empty() {
            let banner = format!("=== {} ===", self.title);
            writeln!(out, "{}", theme.paint_or(self.title_style, Role::Primary, &banner))?;
            writeln!(out)?;
        }

        let mut results = FormResults::new();
        for field in &self.fields {
            let value = field.collect(input, out, theme)?;
            tracing::debug!(field = %field.name, "form field collected");
            results.insert(field.name.clone(), value);
        }
        Ok(results)
    }
}
