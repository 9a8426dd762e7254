//! Layout types: Point, Shape, DrawInstruction, RowItem, Geometry.
//!
//! Everything a Draw Adapter needs is in here; renderers make no decisions.

use chrono::NaiveDateTime;

use crate::syntax::types::GroupId;

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    /// A square of side `size` rotated 45° about `center`.
    Diamond { center: Point, size: f64 },
    Line { from: Point, to: Point },
    /// Multi-line text; `y` is the baseline of the first line.
    Text {
        x: f64,
        y: f64,
        lines: Vec<String>,
        line_height: f64,
        anchor: TextAnchor,
    },
    Path { commands: Vec<PathCommand> },
}

/// Drawing layer, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Grid,
    GroupBlocks,
    GroupLabels,
    TodayMarker,
    Tasks,
    TaskLabels,
    Milestones,
    MilestoneLabels,
    Dependencies,
    Title,
}

impl Layer {
    /// Class name of the group element a renderer wraps the layer in.
    pub fn class_name(self) -> &'static str {
        match self {
            Layer::Grid => "x grid",
            Layer::GroupBlocks => "group-block",
            Layer::GroupLabels => "group-block-label",
            Layer::TodayMarker => "today-marker",
            Layer::Tasks => "tasks",
            Layer::TaskLabels => "tasks-labels",
            Layer::Milestones => "milestones",
            Layer::MilestoneLabels => "milestones-labels",
            Layer::Dependencies => "dependencies",
            Layer::Title => "title-block",
        }
    }
}

/// What clicking a shape should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to the URL.
    Navigate(String),
    /// Show the URL in a transient surface.
    Popup(String),
}

/// One shape to draw, with its style class and optional click action.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
    pub layer: Layer,
    pub shape: Shape,
    pub class: String,
    pub action: Option<Action>,
    /// Item ID for task and milestone shapes.
    pub item_id: Option<String>,
    pub progress: Option<f64>,
}

impl DrawInstruction {
    pub fn new(layer: Layer, shape: Shape, class: impl Into<String>) -> Self {
        Self {
            layer,
            shape,
            class: class.into(),
            action: None,
            item_id: None,
            progress: None,
        }
    }
}

// ─── Rows ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Task,
    Milestone,
}

/// A task or milestone placed on its row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowItem {
    pub id: String,
    pub title: String,
    pub class: String,
    pub kind: ItemKind,
    pub start: NaiveDateTime,
    /// Equal to `start` for milestones.
    pub end: NaiveDateTime,
    pub dependencies: Vec<String>,
    pub progress: Option<f64>,
    pub group: Option<GroupId>,
    /// 0-based row index.
    pub row: usize,
}

/// Contiguous row range `[start, end)` owned by one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBand {
    pub group: GroupId,
    pub title: String,
    pub start: usize,
    pub end: usize,
    /// `"even"` or `"odd"` for alternating bands.
    pub class: &'static str,
}

impl GroupBand {
    pub fn count(&self) -> usize {
        self.end - self.start
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────────

/// The full output of the layout pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    /// Chart time range.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub rows: Vec<RowItem>,
    pub bands: Vec<GroupBand>,
    /// Paint-ordered draw instructions.
    pub instructions: Vec<DrawInstruction>,
}

impl Geometry {
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawInstruction> {
        self.instructions.iter().filter(move |i| i.layer == layer)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
