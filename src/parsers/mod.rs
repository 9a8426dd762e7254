//! Parser entry point for the gantt schedule DSL.

pub mod base;
pub mod dates;
pub mod gantt;

pub use base::Parser;
pub use gantt::GanttParser;

use crate::error::ParseError;
use crate::syntax::types::Schedule;

/// Parse schedule text into a fully resolved Schedule.
///
/// Fails on the first malformed line; nothing partial is returned.
pub fn parse(src: &str) -> Result<Schedule, ParseError> {
    GanttParser.parse(src)
}
