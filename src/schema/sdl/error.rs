use crate::ast::ASTKind;
use crate::error::{get_location, print_span, Error, ErrorType};
use logos::Span;
use std::fmt;

/// Errors that occur while loading a schema from the schema definition language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The source text isn't valid schema definition language.
    Syntax(String),
    /// The definitions are syntactically valid but don't form a usable schema, e.g. because a
    /// field references an unknown type.
    Validation(String),
}

impl SchemaError {
    /// Converts the error into the crate's [`Error`]. Syntax errors point at the token in `span`
    /// and carry a snippet of the surrounding source text.
    pub(super) fn into_error(self, source: &str, span: Span) -> Error {
        match self {
            SchemaError::Syntax(message) => Error::new_with_context(
                message,
                Some(get_location(source, span.start)),
                print_span(source, span),
                Some(ErrorType::Syntax),
            ),
            error @ SchemaError::Validation(_) => {
                Error::new(error.to_string(), Some(ErrorType::GraphQL))
            }
        }
    }
}

/// Types, values, and applied directives are read by the query language parser, whose errors
/// only name the node that failed to parse.
impl From<ASTKind> for SchemaError {
    fn from(kind: ASTKind) -> Self {
        SchemaError::Syntax(format!("Invalid {}", kind))
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Syntax(message) => f.write_str(message),
            SchemaError::Validation(message) => write!(f, "Validation error: {}", message),
        }
    }
}

impl std::error::Error for SchemaError {}

macro_rules! syntax_err {
    ($($arg:tt)+) => {
        Err(SchemaError::Syntax(format!($($arg)+)))
    };
}

macro_rules! validation {
    ($($arg:tt)+) => {
        SchemaError::Validation(format!($($arg)+))
    };
}

pub(crate) use syntax_err;
pub(crate) use validation;
