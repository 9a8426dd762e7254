//! Axis label patterns.
//!
//! `outputdateformat` takes either a chrono strftime pattern (anything with a
//! `%`) or a luxon-style token pattern such as `dd/MM/yyyy`. Token patterns
//! are rewritten to strftime before chrono sees them. Runs of an unknown
//! letter pass through as literal text, and `'quoted'` spans are literal
//! (`''` is a single quote).

use chrono::format::{Item, StrftimeItems};

/// Strftime equivalent of a run of `len` copies of `token`.
fn token_directive(token: char, len: usize) -> Option<&'static str> {
    let directive = match (token, len) {
        ('y', 1 | 4) => "%Y",
        ('y', 2) => "%y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', 4) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('E', 3) => "%a",
        ('E', 4) => "%A",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('a', 1) => "%p",
        _ => return None,
    };
    Some(directive)
}

/// Rewrite `pattern` as a strftime pattern. Strftime input is returned as is.
pub fn strftime_pattern(pattern: &str) -> String {
    if pattern.contains('%') {
        return pattern.to_string();
    }

    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            let literal: String = chars[i + 1..]
                .iter()
                .take_while(|&&q| q != '\'')
                .collect();
            out.push_str(&literal);
            // Opening quote, body, closing quote.
            i += literal.chars().count() + 2;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&d| d == c).count();
        match token_directive(c, run) {
            Some(directive) => out.push_str(directive),
            None => out.extend(std::iter::repeat_n(c, run)),
        }
        i += run;
    }
    out
}

/// Parsed items for `pattern`, or None when the pattern is malformed or
/// contains no date or time field at all.
pub fn axis_items(pattern: &str) -> Option<Vec<Item<'_>>> {
    let items: Vec<Item> = StrftimeItems::new(pattern).collect();
    let malformed = items.iter().any(|i| matches!(i, Item::Error));
    let has_field = items
        .iter()
        .any(|i| matches!(i, Item::Numeric(..) | Item::Fixed(_)));
    (!malformed && has_field).then_some(items)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_format.rs"]
mod tests;
