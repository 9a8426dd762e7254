//! Parser trait definition and shared line-classification helpers.

use crate::error::ParseError;
use crate::syntax::types::Schedule;

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for schedule parsers.
pub trait Parser {
    /// Parse the input source string into a Schedule.
    fn parse(&self, src: &str) -> Result<Schedule, ParseError>;
}

// ─── Keywords ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Option,
    Click,
    Group,
    Task,
    Milestone,
}

/// Statement keywords in precedence order, each with its trailing space.
pub const KEYWORDS: &[(&str, Keyword)] = &[
    ("option ", Keyword::Option),
    ("click ", Keyword::Click),
    ("group ", Keyword::Group),
    ("task ", Keyword::Task),
    ("milestone ", Keyword::Milestone),
];

pub const COMMENT_PREFIX: &str = "%%";

/// Field separator inside task, milestone and click bodies.
pub const FIELD_SEPARATOR: char = ',';

/// Human-readable list of everything a line may start with.
pub fn keyword_list() -> String {
    let mut names: Vec<&str> = KEYWORDS.iter().map(|(kw, _)| kw.trim_end()).collect();
    names.push(COMMENT_PREFIX);
    names.sort_unstable();
    names.join(", ")
}

// ─── Line classification ─────────────────────────────────────────────────────

/// What a single source line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// A keyword statement; `body` is the trimmed text after the keyword.
    Statement { keyword: Keyword, body: &'a str },
    /// Blank line or `%%` comment.
    Ignored,
    /// Anything else.
    Unknown,
}

/// Classify a line by case-insensitive keyword prefix.
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim_start();
    for (prefix, keyword) in KEYWORDS {
        if starts_with_ignore_case(line, prefix) {
            return Line::Statement {
                keyword: *keyword,
                body: line[prefix.len()..].trim(),
            };
        }
    }
    if line.starts_with(COMMENT_PREFIX) || line.trim().is_empty() {
        return Line::Ignored;
    }
    Line::Unknown
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

// ─── Field helpers ───────────────────────────────────────────────────────────

/// Split a statement body on commas. Fields are not trimmed here.
pub fn split_fields(body: &str) -> Vec<&str> {
    body.split(FIELD_SEPARATOR).collect()
}

/// Whitespace-separated tokens with empty tokens dropped.
pub fn split_words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_owned).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
