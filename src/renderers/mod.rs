//! Draw adapters and the Renderer trait.
//!
//! A renderer only translates [`Geometry`] into an output format; every
//! placement decision has already been made by the layout engine.

pub mod svg;

pub use svg::SvgRenderer;

use crate::layout::types::Geometry;

/// Trait for geometry renderers.
pub trait Renderer {
    /// Render laid-out geometry to a string.
    fn render(&self, geometry: &Geometry) -> String;
}
