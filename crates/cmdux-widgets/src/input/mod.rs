//! Line-oriented interactive input.
//!
//! - **Prompts** ([`Prompt`], [`confirm`], [`select`], [`multi_select`],
//!   [`password`]) -- read one answer from any [`BufRead`](std::io::BufRead),
//!   echoing questions and errors to any [`Write`](std::io::Write).
//! - **Forms** ([`Form`], [`FormResults`], [`FromForm`]) -- a sequence of
//!   typed fields collected into tagged [`FieldValue`]s.

mod form;
mod prompt;

pub use form::*;
pub use prompt::*;

/// Failures while collecting input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed")]
    Eof,
    #[error("no options provided")]
    NoOptions,
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
    #[error("choice must be between {min} and {max}")]
    OutOfRange { min: usize, max: usize },
    #[error("{0}")]
    Validation(String),
    #[error("missing form field: {0}")]
    MissingField(String),
    #[error("form field {field} is not {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
}
