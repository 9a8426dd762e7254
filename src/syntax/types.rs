//! Schedule model for the gantt DSL.
//!
//! These types represent the parsed form of the input text:
//! groups, tasks, milestones, click events and render options, all owned by
//! a single [`Schedule`]. Items point back at their group by index only.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;

// ─── Group ───────────────────────────────────────────────────────────────────

/// Index of a [`Group`] inside [`Schedule::groups`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: String,
}

impl Group {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

// ─── Item ────────────────────────────────────────────────────────────────────

/// Fields shared by tasks and milestones.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique across tasks and milestones.
    pub id: String,
    pub title: String,
    /// Free-form style tag.
    pub class: String,
    pub start: NaiveDateTime,
    /// IDs this item depends on, in source order.
    pub dependencies: Vec<String>,
    /// Completion fraction, 0.0–1.0.
    pub progress: Option<f64>,
    /// Group that was current when the item was declared.
    pub group: Option<GroupId>,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        class: impl Into<String>,
        start: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            class: class.into(),
            start,
            dependencies: Vec::new(),
            progress: None,
            group: None,
        }
    }
}

// ─── Task / Milestone ────────────────────────────────────────────────────────

/// A schedule item with a start and an end instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub item: Item,
    pub end: NaiveDateTime,
}

/// A zero-duration schedule item.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub item: Item,
}

// ─── Event ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    GoTo,
    Popup,
}

impl EventType {
    pub const ALL: [EventType; 2] = [EventType::Popup, EventType::GoTo];

    /// Case-insensitive lookup of the DSL spelling.
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.keyword().eq_ignore_ascii_case(s))
    }

    pub fn keyword(self) -> &'static str {
        match self {
            EventType::GoTo => "goto",
            EventType::Popup => "popup",
        }
    }
}

/// A click action bound to a task or milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub task_id: String,
    pub event_type: EventType,
    pub url: String,
}

// ─── Render options ──────────────────────────────────────────────────────────

/// Recognized `option` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    Title,
    AxisTicks,
    TodayMarker,
    Dependencies,
    InputDateFormat,
    OutputDateFormat,
    BusinessDays,
}

impl OptionKey {
    pub const ALL: [OptionKey; 7] = [
        OptionKey::Title,
        OptionKey::AxisTicks,
        OptionKey::TodayMarker,
        OptionKey::Dependencies,
        OptionKey::InputDateFormat,
        OptionKey::OutputDateFormat,
        OptionKey::BusinessDays,
    ];

    /// Look up a key; callers lower-case it first.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Title => "title",
            OptionKey::AxisTicks => "axisticks",
            OptionKey::TodayMarker => "todaymarker",
            OptionKey::Dependencies => "dependencies",
            OptionKey::InputDateFormat => "inputdateformat",
            OptionKey::OutputDateFormat => "outputdateformat",
            OptionKey::BusinessDays => "businessdays",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw option values, interpreted lazily by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    values: BTreeMap<OptionKey, String>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later values overwrite earlier ones.
    pub fn set(&mut self, key: OptionKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: OptionKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the option is present and equals `on` (any case).
    pub fn is_on(&self, key: OptionKey) -> bool {
        self.get(key).is_some_and(|v| v.eq_ignore_ascii_case("on"))
    }

    pub fn title(&self) -> Option<&str> {
        self.get(OptionKey::Title)
    }

    /// Requested tick count, `None` when the option is absent.
    pub fn axis_ticks(&self) -> Option<Result<usize, std::num::ParseIntError>> {
        self.get(OptionKey::AxisTicks).map(|v| v.trim().parse())
    }

    pub fn output_date_format(&self) -> Option<&str> {
        self.get(OptionKey::OutputDateFormat)
    }
}

// ─── Schedule (aggregate root) ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    pub options: RenderOptions,
    pub groups: Vec<Group>,
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
    pub events: Vec<Event>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows the chart needs: one per task and per milestone.
    pub fn item_count(&self) -> usize {
        self.tasks.len() + self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.item.id == id)
    }

    pub fn milestone(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.item.id == id)
    }

    /// True if `id` names a task or milestone parsed so far.
    pub fn id_exists(&self, id: &str) -> bool {
        self.task(id).is_some() || self.milestone(id).is_some()
    }

    /// Instant that relative dates hang off: a task's end, else a milestone's start.
    pub fn anchor(&self, id: &str) -> Option<NaiveDateTime> {
        self.task(id)
            .map(|t| t.end)
            .or_else(|| self.milestone(id).map(|m| m.item.start))
    }

    /// Appends a group and returns its id.
    pub fn push_group(&mut self, group: Group) -> GroupId {
        self.groups.push(group);
        GroupId(self.groups.len() - 1)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
