use chrono::{Local, NaiveDateTime};

/// Configuration for the layout and rendering pipeline.
///
/// Pixel metrics default to the proportions the chart has always used:
/// 50 px rows, 100 px of vertical padding, a 10% group column.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels. Height is derived from the row count.
    pub width: f64,
    pub row_height: f64,
    /// Added to `rows × row_height` to get the canvas height.
    pub height_padding: f64,
    /// Vertical inset of bars inside their row.
    pub task_padding: f64,
    /// Fraction of the plot area covered by the time scale.
    pub width_scale: f64,
    /// Fraction of the width reserved for group labels.
    pub group_column_size: f64,
    /// Average glyph width used to budget task and milestone labels.
    pub task_glyph_width: f64,
    /// Average glyph width used to budget group labels.
    pub group_glyph_width: f64,
    pub line_height: f64,
    /// Instant treated as "now". None = read the local clock at layout time.
    pub now: Option<NaiveDateTime>,
    /// Scheme accepted for internal deep links, e.g. `obsidian://open?...`.
    pub deep_link_scheme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            row_height: 50.0,
            height_padding: 100.0,
            task_padding: 5.0,
            width_scale: 0.95,
            group_column_size: 0.1,
            task_glyph_width: 6.0,
            group_glyph_width: 8.0,
            line_height: 15.0,
            now: None,
            deep_link_scheme: "obsidian".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    /// The configured "now", falling back to the local clock.
    pub fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }

    /// Canvas height for `rows` chart rows.
    pub fn height_for(&self, rows: usize) -> f64 {
        rows as f64 * self.row_height + self.height_padding
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
