//! gantt-svg: a small schedule DSL rendered as a Gantt chart.
//!
//! Pipeline: text → [`parsers::parse`] → [`syntax::types::Schedule`] →
//! [`layout::layout_with_config`] → [`layout::types::Geometry`] →
//! [`renderers::Renderer`] → SVG string.
//!
//! ```text
//! option title Release plan
//! group Build
//! task Design,t1,design,2024-01-01,5D
//! task Implement,t2,build,after t1,2W,t1,40%
//! milestone Ship,m1,ship,3D after t2,t2
//! click m1,goto,https://example.com/release
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::RenderConfig;
pub use error::{Error, ErrorKind, LayoutError, ParseError, Result};
pub use layout::{layout, layout_with_config};
pub use parsers::parse;
pub use renderers::{Renderer, SvgRenderer};

/// Parse schedule text and render it to an SVG document.
pub fn render_dsl(src: &str, config: &RenderConfig) -> Result<String> {
    render_dsl_with(src, config, &SvgRenderer::default())
}

/// Same as [`render_dsl`] with an explicit renderer.
pub fn render_dsl_with(src: &str, config: &RenderConfig, renderer: &dyn Renderer) -> Result<String> {
    let schedule = parse(src)?;
    let geometry = layout_with_config(&schedule, config)?;
    Ok(renderer.render(&geometry))
}
