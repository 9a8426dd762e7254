//! Layout phases, run in paint order over one schedule.

use std::collections::HashMap;
use std::fmt::Write as _;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::LayoutError;
use crate::syntax::types::{OptionKey, Schedule};

use super::actions::{UrlValidator, resolve_action};
use super::format::{axis_items, strftime_pattern};
use super::graph::DependencyGraph;
use super::router::route;
use super::rows::{RowMetrics, group_bands, order_rows};
use super::scale::TimeScale;
use super::text::{first_baseline, max_chars, wrap_label};
use super::types::{
    Action, DrawInstruction, Geometry, GroupBand, ItemKind, Layer, PathCommand, Point, RowItem,
    Shape, TextAnchor,
};

const DEFAULT_AXIS_TICKS: usize = 6;
/// `axisticks` is a hint; larger requests are clamped to this.
const MAX_AXIS_TICKS: usize = 100;
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Axis baseline as a fraction of canvas height.
const AXIS_POSITION: f64 = 0.95;
const TASK_CORNER_RADIUS: f64 = 10.0;
const LABEL_MARGIN: f64 = 5.0;
/// Milestone label budget, in row heights.
const MILESTONE_LABEL_ROWS: f64 = 3.0;

/// Everything the phases share. Built once, consumed by [`LayoutEngine::run`].
pub struct LayoutEngine<'a> {
    schedule: &'a Schedule,
    config: &'a RenderConfig,
    now: NaiveDateTime,
    scale: TimeScale,
    rows: Vec<RowItem>,
    metrics: RowMetrics,
    bands: Vec<GroupBand>,
    graph: DependencyGraph,
    actions: HashMap<String, Action>,
    instructions: Vec<DrawInstruction>,
}

impl<'a> LayoutEngine<'a> {
    /// Resolve the time range, rows, dependency graph and click actions.
    pub fn new(schedule: &'a Schedule, config: &'a RenderConfig) -> Result<Self, LayoutError> {
        let now = config.now();
        let scale = TimeScale::from_schedule(schedule, now, config)?;
        let rows = order_rows(schedule);
        let metrics = RowMetrics::new(rows.len(), config);
        let bands = group_bands(schedule, &rows);
        let graph = DependencyGraph::from_rows(&rows)?;

        let validator = UrlValidator::new(&config.deep_link_scheme)?;
        let mut actions = HashMap::new();
        for event in &schedule.events {
            let action = resolve_action(event, &validator)?;
            actions.entry(event.task_id.clone()).or_insert(action);
        }

        Ok(Self {
            schedule,
            config,
            now,
            scale,
            rows,
            metrics,
            bands,
            graph,
            actions,
            instructions: Vec::new(),
        })
    }

    pub fn run(mut self) -> Result<Geometry, LayoutError> {
        let schedule = self.schedule;
        let options = &schedule.options;

        self.grid()?;
        self.group_bands();
        if options.is_on(OptionKey::TodayMarker) {
            self.today_marker();
        }
        self.tasks();
        self.milestones();
        if options.is_on(OptionKey::Dependencies) {
            self.dependencies();
        }
        if let Some(title) = options.title() {
            self.title(title);
        }

        debug!(
            rows = self.rows.len(),
            bands = self.bands.len(),
            edges = self.graph.edge_count(),
            instructions = self.instructions.len(),
            "layout complete"
        );

        Ok(Geometry {
            width: self.config.width,
            height: self.metrics.height,
            start: self.scale.start,
            end: self.scale.end,
            rows: self.rows,
            bands: self.bands,
            instructions: self.instructions,
        })
    }

    fn push(&mut self, layer: Layer, shape: Shape, class: impl Into<String>) {
        self.instructions.push(DrawInstruction::new(layer, shape, class));
    }

    /// Text block vertically centered on `center_y`.
    fn label(&self, x: f64, center_y: f64, lines: Vec<String>, anchor: TextAnchor) -> Shape {
        let line_height = self.config.line_height;
        Shape::Text {
            x,
            y: first_baseline(center_y, lines.len(), line_height, line_height / 3.0),
            lines,
            line_height,
            anchor,
        }
    }

    // ─── Grid and axis ───────────────────────────────────────────────────────

    fn grid(&mut self) -> Result<(), LayoutError> {
        let schedule = self.schedule;
        let options = &schedule.options;
        let count = match options.axis_ticks() {
            None => DEFAULT_AXIS_TICKS,
            Some(Ok(n)) if n > MAX_AXIS_TICKS => {
                debug!(requested = n, used = MAX_AXIS_TICKS, "axis ticks clamped");
                MAX_AXIS_TICKS
            }
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                return Err(invalid_option(
                    OptionKey::AxisTicks,
                    options.get(OptionKey::AxisTicks),
                ));
            }
        };
        let raw_pattern = options.output_date_format().unwrap_or(DEFAULT_DATE_FORMAT);
        let pattern = strftime_pattern(raw_pattern);
        let Some(items) = axis_items(&pattern) else {
            return Err(invalid_option(OptionKey::OutputDateFormat, Some(raw_pattern)));
        };

        let axis_y = self.metrics.height * AXIS_POSITION;
        let domain = Shape::Line {
            from: Point::new(self.scale.x(self.scale.start), axis_y),
            to: Point::new(self.scale.x(self.scale.end), axis_y),
        };
        self.push(Layer::Grid, domain, "domain");

        for tick in self.scale.ticks(count)? {
            let x = self.scale.x(tick);
            let mut text = String::new();
            write!(text, "{}", tick.format_with_items(items.iter()))
                .map_err(|_| invalid_option(OptionKey::OutputDateFormat, Some(raw_pattern)))?;

            let line = Shape::Line {
                from: Point::new(x, 0.0),
                to: Point::new(x, axis_y),
            };
            self.push(Layer::Grid, line, "tick");
            let label = Shape::Text {
                x,
                y: axis_y + self.config.line_height,
                lines: vec![text],
                line_height: self.config.line_height,
                anchor: TextAnchor::Middle,
            };
            self.push(Layer::Grid, label, "tick-label");
        }
        Ok(())
    }

    // ─── Group bands ─────────────────────────────────────────────────────────

    fn group_bands(&mut self) {
        let budget = max_chars(
            self.config.width * self.config.group_column_size,
            self.config.group_glyph_width,
        );
        let pitch = self.metrics.pitch();
        let mut labels = Vec::new();

        for band in self.bands.clone() {
            if band.count() == 0 {
                continue;
            }
            let top = self.metrics.row_top(band.start);
            let height = band.count() as f64 * pitch;
            let rect = Shape::Rect {
                x: 0.0,
                y: top,
                width: self.config.width,
                height,
                corner_radius: 0.0,
            };
            self.push(Layer::GroupBlocks, rect, band.class);

            let lines = wrap_label(&band.title, budget);
            let text = self.label(LABEL_MARGIN, top + height / 2.0, lines, TextAnchor::Start);
            labels.push(DrawInstruction::new(Layer::GroupLabels, text, band.class));
        }
        self.instructions.extend(labels);
    }

    fn today_marker(&mut self) {
        let x = self.scale.x(self.now);
        let line = Shape::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, self.metrics.height),
        };
        self.push(Layer::TodayMarker, line, "today");
    }

    // ─── Items ───────────────────────────────────────────────────────────────

    /// Stamp item identity, progress and click action onto an instruction.
    fn item_instruction(&self, layer: Layer, shape: Shape, row: &RowItem) -> DrawInstruction {
        let mut instruction = DrawInstruction::new(layer, shape, row.class.clone());
        instruction.item_id = Some(row.id.clone());
        instruction.progress = row.progress;
        instruction.action = self.actions.get(&row.id).cloned();
        instruction
    }

    fn tasks(&mut self) {
        let mut bars = Vec::new();
        let mut labels = Vec::new();

        for row in self.rows.iter().filter(|r| r.kind == ItemKind::Task) {
            let x0 = self.scale.x(row.start);
            let x1 = self.scale.x(row.end);
            let left = x0.min(x1);
            let width = (x1 - x0).abs();

            let rect = Shape::Rect {
                x: left,
                y: self.metrics.bar_top(row.row),
                width,
                height: self.metrics.bar_height(),
                corner_radius: TASK_CORNER_RADIUS,
            };
            bars.push(self.item_instruction(Layer::Tasks, rect, row));

            let lines = wrap_label(&row.title, max_chars(width, self.config.task_glyph_width));
            let center = (x0 + x1) / 2.0;
            let text = self.label(center, self.metrics.row_center(row.row), lines, TextAnchor::Middle);
            labels.push(self.item_instruction(Layer::TaskLabels, text, row));
        }

        self.instructions.extend(bars);
        self.instructions.extend(labels);
    }

    fn milestones(&mut self) {
        let inner = self.metrics.bar_height();
        let size = inner / std::f64::consts::SQRT_2;
        let budget = max_chars(
            self.metrics.row_height * MILESTONE_LABEL_ROWS,
            self.config.task_glyph_width,
        );
        let mut diamonds = Vec::new();
        let mut labels = Vec::new();

        for row in self.rows.iter().filter(|r| r.kind == ItemKind::Milestone) {
            let center = Point::new(self.scale.x(row.start), self.metrics.row_center(row.row));
            let diamond = Shape::Diamond { center, size };
            diamonds.push(self.item_instruction(Layer::Milestones, diamond, row));

            let lines = wrap_label(&row.title, budget);
            let x = center.x + inner / 2.0 + LABEL_MARGIN;
            let text = self.label(x, center.y, lines, TextAnchor::Start);
            labels.push(self.item_instruction(Layer::MilestoneLabels, text, row));
        }

        self.instructions.extend(diamonds);
        self.instructions.extend(labels);
    }

    // ─── Dependencies ────────────────────────────────────────────────────────

    fn dependencies(&mut self) {
        let mut shapes = Vec::new();
        for (source, target) in self.graph.edges() {
            let (source, target) = (&self.rows[source], &self.rows[target]);
            let Some(connector) = route(source, target, &self.scale, &self.metrics) else {
                debug!(from = %source.id, to = %target.id, "back-edge skipped");
                continue;
            };
            shapes.push(path(connector.path, format!("{} path", source.class)));
            shapes.push(path(
                connector.arrow_head,
                format!("{} arrow-head", source.class),
            ));
        }
        self.instructions.extend(shapes);
    }

    fn title(&mut self, title: &str) {
        let center_y = self.metrics.pitch() / 2.0;
        let text = self.label(
            self.config.width / 2.0,
            center_y,
            vec![title.to_string()],
            TextAnchor::Middle,
        );
        self.push(Layer::Title, text, "title");
    }
}

fn path(commands: Vec<PathCommand>, class: String) -> DrawInstruction {
    DrawInstruction::new(Layer::Dependencies, Shape::Path { commands }, class)
}

fn invalid_option(key: OptionKey, value: Option<&str>) -> LayoutError {
    LayoutError::InvalidOption {
        key: key.to_string(),
        value: value.unwrap_or_default().to_string(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_engine.rs"]
mod tests;
