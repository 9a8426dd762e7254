//! Error types for the parse, layout and render pipeline.
//!
//! Every error aborts the whole operation; nothing partial is returned.

use thiserror::Error;

/// What went wrong on a single source line.
///
/// The date and duration grammars return these bare; the statement handler
/// attaches the line number by wrapping them in a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("duplicate key: the element ID '{0}' already exists")]
    DuplicateKey(String),

    #[error("element not found: '{0}' is not defined as a task or milestone")]
    ReferenceNotFound(String),

    #[error("unknown unit in '{0}'; the unit should be one of D, W, H, m, M, S, Y")]
    UnknownUnit(String),

    #[error("event type '{0}' not recognized; use one of popup, goto")]
    UnknownEventType(String),

    #[error("invalid date '{0}'; expected YYYY-MM-DD, YYYY-MM-DD HH:MM[:SS] or RFC 3339")]
    InvalidDate(String),
}

/// A parse failure, located on its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Failures raised while turning a schedule into geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("dependency '{from}' of '{to}' is not defined as a task or milestone")]
    ReferenceNotFound { from: String, to: String },

    #[error("error generating click action: the URL is incorrect '{0}'")]
    InvalidUrl(String),

    #[error("invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },

    #[error("date arithmetic out of range while building the time axis")]
    DateOutOfRange,

    #[error("URL pattern failed to compile: {0}")]
    UrlPattern(String),
}

/// Top-level error returned by [`crate::render_dsl`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
