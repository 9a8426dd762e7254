//! Dependency connector routing.
//!
//! Each connector leaves the source on its row center, runs right to a turn
//! column, drops vertically toward the target row, curves into it and runs
//! right again to the landing point:
//!
//! ```text
//!   [source]───┐
//!              │
//!              ╰──▶[target]
//! ```

use super::rows::RowMetrics;
use super::scale::TimeScale;
use super::types::{ItemKind, PathCommand, Point, RowItem};

/// Landing offset for milestone targets, in row heights. The diamond's left
/// corner sits well left of its anchor.
const MILESTONE_LANDING_OFFSET: f64 = 0.65;

const ARROW_LENGTH: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 5.0;

/// A routed connector: the line and its arrowhead as separate paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub path: Vec<PathCommand>,
    pub arrow_head: Vec<PathCommand>,
}

/// Route an edge from `source` to `target`.
///
/// Returns `None` for back-edges: a target that starts at or before its
/// source has no forward route.
pub fn route(
    source: &RowItem,
    target: &RowItem,
    scale: &TimeScale,
    metrics: &RowMetrics,
) -> Option<Connector> {
    if target.start <= source.start {
        return None;
    }
    let row_height = metrics.row_height;

    let target_x = match target.kind {
        ItemKind::Task => scale.x(target.start),
        ItemKind::Milestone => scale.x(target.start) - MILESTONE_LANDING_OFFSET * row_height,
    };
    let source_x = match source.kind {
        ItemKind::Task => scale.x(source.end),
        ItemKind::Milestone => scale.x(source.start),
    }
    .min(target_x);

    let source_y = metrics.row_center(source.row);
    let target_y = metrics.row_center(target.row);

    let turn_x = (source_x + row_height).min(target_x);
    let approach_y = if source.row < target.row {
        target_y - row_height / 2.0
    } else {
        target_y + row_height / 2.0
    };
    let bend_end_x = (turn_x + row_height / 2.0).min(target_x);

    let corner = Point::new(turn_x, target_y);
    let landing = Point::new(target_x, target_y);

    let path = vec![
        PathCommand::MoveTo(Point::new(source_x, source_y)),
        PathCommand::LineTo(Point::new(turn_x, source_y)),
        PathCommand::LineTo(Point::new(turn_x, approach_y)),
        PathCommand::CubicTo(corner, corner, Point::new(bend_end_x, target_y)),
        PathCommand::LineTo(landing),
    ];

    Some(Connector {
        path,
        arrow_head: arrow_head(landing),
    })
}

/// Closed triangle pointing right with its tip on `tip`.
pub fn arrow_head(tip: Point) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo(tip),
        PathCommand::LineTo(tip.offset(-ARROW_LENGTH, ARROW_HALF_WIDTH)),
        PathCommand::LineTo(tip.offset(-ARROW_LENGTH, -ARROW_HALF_WIDTH)),
        PathCommand::Close,
    ]
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_router.rs"]
mod tests;
