use regex::Regex;

use crate::error::LayoutError;
use crate::syntax::types::{Event, EventType};

use super::types::Action;

/// Host, then a path, query and fragment drawn from the RFC 3986 unreserved,
/// gen-delim and sub-delim characters.
const WEB_URL_PATTERN: &str = r"^(https?://.)?(www\.)?[-a-zA-Z0-9@:%._\+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_\+.~#?&/=!$'()*,;\[\]]*)$";

/// Accepts the two URL shapes a click action may carry: a web URL, or an
/// internal deep link of the form `<scheme>://open...`.
pub struct UrlValidator {
    web: Regex,
    deep_link: Regex,
}

impl UrlValidator {
    pub fn new(scheme: &str) -> Result<Self, LayoutError> {
        let deep_link_pattern = format!(
            r"^{}://open\b[-a-zA-Z0-9()!@:%_\+.~#?&/=]*$",
            regex::escape(scheme)
        );
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| LayoutError::UrlPattern(e.to_string()))
        };
        Ok(Self {
            web: compile(WEB_URL_PATTERN)?,
            deep_link: compile(&deep_link_pattern)?,
        })
    }

    pub fn is_valid(&self, url: &str) -> bool {
        self.web.is_match(url) || self.deep_link.is_match(url)
    }
}

/// Turn a click event into the action attached to its item's shapes.
pub fn resolve_action(event: &Event, validator: &UrlValidator) -> Result<Action, LayoutError> {
    if !validator.is_valid(&event.url) {
        return Err(LayoutError::InvalidUrl(event.url.clone()));
    }
    Ok(match event.event_type {
        EventType::GoTo => Action::Navigate(event.url.clone()),
        EventType::Popup => Action::Popup(event.url.clone()),
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_actions.rs"]
mod tests;
