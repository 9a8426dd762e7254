//! Layout engine: turns a parsed Schedule into paint-ordered geometry.
//!
//! Pure over its inputs. The only ambient input is "now", which comes from
//! [`RenderConfig::now`] and can be pinned for reproducible output.

pub mod actions;
pub mod engine;
pub mod format;
pub mod graph;
pub mod router;
pub mod rows;
pub mod scale;
pub mod text;
pub mod types;

pub use engine::LayoutEngine;
pub use types::{Action, DrawInstruction, Geometry, Layer, PathCommand, Point, Shape, TextAnchor};

use crate::config::RenderConfig;
use crate::error::LayoutError;
use crate::syntax::types::Schedule;

/// Lay out `schedule` on a canvas `width` pixels wide, default metrics.
pub fn layout(schedule: &Schedule, width: f64) -> Result<Geometry, LayoutError> {
    layout_with_config(schedule, &RenderConfig::new().with_width(width))
}

/// Lay out `schedule` with custom metrics.
pub fn layout_with_config(
    schedule: &Schedule,
    config: &RenderConfig,
) -> Result<Geometry, LayoutError> {
    LayoutEngine::new(schedule, config)?.run()
}
