//! Line-oriented parser for the gantt schedule DSL.
//!
//! One statement per line: `option`, `group`, `task`, `milestone`, `click`.
//! Each statement is validated completely before anything is appended, and
//! references only see items declared on earlier lines.

use tracing::{debug, warn};

use crate::error::{ErrorKind, ParseError};
use crate::syntax::types::{
    Event, EventType, Group, GroupId, Item, Milestone, OptionKey, Schedule, Task,
};

use super::base::{Keyword, Line, Parser, classify, keyword_list, split_fields, split_words};
use super::dates::{parse_date, try_parse_duration};

/// Parser for gantt schedule text.
pub struct GanttParser;

impl Parser for GanttParser {
    fn parse(&self, src: &str) -> Result<Schedule, ParseError> {
        let mut schedule = Schedule::new();
        // Group that subsequent tasks and milestones attach to.
        let mut current_group: Option<GroupId> = None;

        for (index, raw) in src.lines().enumerate() {
            let line_no = index + 1;
            let (keyword, body) = match classify(raw) {
                Line::Statement { keyword, body } => (keyword, body),
                Line::Ignored => continue,
                Line::Unknown => {
                    return Err(ParseError::new(
                        line_no,
                        ErrorKind::Syntax(format!(
                            "expecting the line to start with a keyword ({})",
                            keyword_list()
                        )),
                    ));
                }
            };

            let result = match keyword {
                Keyword::Option => {
                    parse_option(&mut schedule, body);
                    Ok(())
                }
                Keyword::Click => parse_click(&mut schedule, body),
                Keyword::Group => {
                    current_group = Some(parse_group(&mut schedule, body));
                    Ok(())
                }
                Keyword::Task => parse_task(&mut schedule, body, current_group),
                Keyword::Milestone => parse_milestone(&mut schedule, body, current_group),
            };
            result.map_err(|kind| ParseError::new(line_no, kind))?;
        }

        debug!(
            groups = schedule.groups.len(),
            tasks = schedule.tasks.len(),
            milestones = schedule.milestones.len(),
            events = schedule.events.len(),
            "schedule parsed"
        );
        Ok(schedule)
    }
}

// ─── Statements ──────────────────────────────────────────────────────────────

/// `option <key> <value...>`; fewer than two words is silently ignored.
fn parse_option(schedule: &mut Schedule, body: &str) {
    let words = split_words(body);
    if words.len() < 2 {
        debug!(body, "option without a value ignored");
        return;
    }
    let key = words[0].to_lowercase();
    let value = words[1..].join(" ");
    match OptionKey::from_key(&key) {
        Some(option) => schedule.options.set(option, value),
        None => warn!(key = %key, "unrecognized option ignored"),
    }
}

/// `group <title>`; returns the id of the new current group.
fn parse_group(schedule: &mut Schedule, body: &str) -> GroupId {
    debug!(title = body, "group");
    schedule.push_group(Group::new(body))
}

/// `task <title>,<id>,<class>,<start>,<end-or-duration>[,<deps>][,<progress>]`
fn parse_task(
    schedule: &mut Schedule,
    body: &str,
    group: Option<GroupId>,
) -> Result<(), ErrorKind> {
    let fields = split_fields(body);
    if !(5..=7).contains(&fields.len()) {
        return Err(ErrorKind::Syntax(format!(
            "'{body}': a task should have 5 to 7 arguments separated by a comma"
        )));
    }
    let mut item = parse_item_head(schedule, &fields, group)?;
    let end = try_parse_duration(fields[4].trim(), item.start)?;
    if let Some(deps) = fields.get(5) {
        item.dependencies = parse_dependencies(schedule, deps)?;
    }
    if let Some(progress) = fields.get(6) {
        item.progress = parse_progress(progress)?;
    }

    debug!(id = %item.id, start = %item.start, end = %end, "task");
    schedule.tasks.push(Task { item, end });
    Ok(())
}

/// `milestone <title>,<id>,<class>,<date>[,<deps>][,<progress>]`
fn parse_milestone(
    schedule: &mut Schedule,
    body: &str,
    group: Option<GroupId>,
) -> Result<(), ErrorKind> {
    let fields = split_fields(body);
    if !(4..=6).contains(&fields.len()) {
        return Err(ErrorKind::Syntax(format!(
            "'{body}': a milestone should have 4 to 6 arguments separated by a comma"
        )));
    }
    let mut item = parse_item_head(schedule, &fields, group)?;
    if let Some(deps) = fields.get(4) {
        item.dependencies = parse_dependencies(schedule, deps)?;
    }
    if let Some(progress) = fields.get(5) {
        item.progress = parse_progress(progress)?;
    }

    debug!(id = %item.id, date = %item.start, "milestone");
    schedule.milestones.push(Milestone { item });
    Ok(())
}

/// `click <id>,<goto|popup>,<url>`
fn parse_click(schedule: &mut Schedule, body: &str) -> Result<(), ErrorKind> {
    let fields = split_fields(body);
    if fields.len() != 3 {
        return Err(ErrorKind::Syntax(format!(
            "'{body}': a click should have 3 arguments (id, type, url) separated by a comma"
        )));
    }
    let task_id = fields[0].trim();
    if !schedule.id_exists(task_id) {
        return Err(ErrorKind::ReferenceNotFound(task_id.to_string()));
    }
    let type_token = fields[1].trim();
    let event_type = EventType::from_keyword(type_token)
        .ok_or_else(|| ErrorKind::UnknownEventType(type_token.to_lowercase()))?;

    debug!(id = task_id, event = event_type.keyword(), "click");
    schedule.events.push(Event {
        task_id: task_id.to_string(),
        event_type,
        url: fields[2].trim().to_string(),
    });
    Ok(())
}

// ─── Field helpers ───────────────────────────────────────────────────────────

/// Title, ID, class and start date: the first four fields of both item kinds.
fn parse_item_head(
    schedule: &Schedule,
    fields: &[&str],
    group: Option<GroupId>,
) -> Result<Item, ErrorKind> {
    let id = fields[1].trim();
    if id.is_empty() {
        return Err(ErrorKind::Syntax("the element ID must not be empty".to_string()));
    }
    if schedule.id_exists(id) {
        return Err(ErrorKind::DuplicateKey(id.to_string()));
    }
    let start = parse_date(fields[3].trim(), schedule)?;
    let mut item = Item::new(id, fields[0].trim(), fields[2].trim(), start);
    item.group = group;
    Ok(item)
}

/// Space-separated dependency IDs, each of which must already exist.
fn parse_dependencies(schedule: &Schedule, field: &str) -> Result<Vec<String>, ErrorKind> {
    let deps = split_words(field);
    if let Some(missing) = deps.iter().find(|id| !schedule.id_exists(id)) {
        return Err(ErrorKind::ReferenceNotFound(missing.clone()));
    }
    Ok(deps)
}

/// `40%`, `40 %` or `40` → 0.4. Empty means no progress.
fn parse_progress(field: &str) -> Result<Option<f64>, ErrorKind> {
    let cleaned: String = field.chars().filter(|c| !c.is_whitespace()).collect();
    let number = cleaned.strip_suffix('%').unwrap_or(&cleaned);
    if number.is_empty() {
        return Ok(None);
    }
    number
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| Some(n / 100.0))
        .ok_or_else(|| ErrorKind::Syntax(format!("progress '{}' should be a number", field.trim())))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_gantt.rs"]
mod tests;
