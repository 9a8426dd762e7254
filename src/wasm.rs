//! WASM bindings for gantt-svg.
//!
//! Exposes `render` and `renderAt` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::parsers::dates::parse_absolute_date;

/// Render schedule DSL to SVG at the given canvas width.
#[wasm_bindgen]
pub fn render(src: &str, width: f64) -> Result<String, JsError> {
    let config = RenderConfig::new().with_width(width);
    crate::render_dsl(src, &config).map_err(|e| JsError::new(&e.to_string()))
}

/// Render with "now" pinned to `today` (any accepted date literal), for
/// reproducible today markers.
#[wasm_bindgen(js_name = "renderAt")]
pub fn render_at(src: &str, width: f64, today: &str) -> Result<String, JsError> {
    let now = parse_absolute_date(today).map_err(|e| JsError::new(&e.to_string()))?;
    let config = RenderConfig::new().with_width(width).with_now(now);
    crate::render_dsl(src, &config).map_err(|e| JsError::new(&e.to_string()))
}
