//! SVG renderer: draws paint-ordered instructions as SVG markup.
//!
//! Consecutive instructions on the same layer share one `<g>` element whose
//! class names the layer. Navigate actions wrap the shape in `<a href>`;
//! popup actions carry a `data-popup` attribute and a `<title>` tooltip.

use crate::layout::types::{
    Action, DrawInstruction, Geometry, Layer, PathCommand, Point, Shape, TextAnchor,
};

use super::Renderer;

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: i32 = 12;

const DEFAULT_STYLE: &str = "\
.x.grid .tick { stroke: #ddd; stroke-width: 1; }
.x.grid .domain { stroke: #888; stroke-width: 1; }
.x.grid .tick-label { fill: #444; }
.group-block .even { fill: #f4f4f8; }
.group-block .odd { fill: #ffffff; }
.group-block-label text { fill: #333; font-weight: bold; }
.today-marker .today { stroke: #d33; stroke-width: 2; }
.tasks rect { fill: #8a90dd; stroke: #534fbc; }
.tasks-labels text, .milestones-labels text { fill: #222; }
.milestones rect { fill: #e0a030; stroke: #a06010; }
.dependencies path { fill: none; stroke: #555; stroke-width: 1.5; }
.dependencies path.arrow-head { fill: #555; }
.title-block .title { font-size: 18px; fill: #111; }
";

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Coordinates to at most two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn point(p: Point) -> String {
    format!("{} {}", num(p.x), num(p.y))
}

fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|c| match *c {
            PathCommand::MoveTo(p) => format!("M {}", point(p)),
            PathCommand::LineTo(p) => format!("L {}", point(p)),
            PathCommand::CubicTo(c1, c2, p) => {
                format!("C {} {} {}", point(c1), point(c2), point(p))
            }
            PathCommand::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn anchor(a: TextAnchor) -> &'static str {
    match a {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
    }
}

// ── Shape rendering ──────────────────────────────────────────────────────────

/// Tag name, geometry attributes and inner markup of a shape.
fn shape_parts(shape: &Shape) -> (&'static str, String, String) {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            corner_radius,
        } => {
            let r = num(*corner_radius);
            let attrs = format!(
                r#"x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}""#,
                num(*x),
                num(*y),
                num(*width),
                num(*height)
            );
            ("rect", attrs, String::new())
        }
        Shape::Diamond { center, size } => {
            let (cx, cy) = (num(center.x), num(center.y));
            let attrs = format!(
                r#"x="{}" y="{}" width="{s}" height="{s}" transform="rotate(45 {cx} {cy})""#,
                num(center.x - size / 2.0),
                num(center.y - size / 2.0),
                s = num(*size)
            );
            ("rect", attrs, String::new())
        }
        Shape::Line { from, to } => {
            let attrs = format!(
                r#"x1="{}" y1="{}" x2="{}" y2="{}""#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y)
            );
            ("line", attrs, String::new())
        }
        Shape::Text {
            x,
            y,
            lines,
            line_height,
            anchor: a,
        } => {
            let attrs = format!(
                r#"x="{}" y="{}" text-anchor="{}" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}""#,
                num(*x),
                num(*y),
                anchor(*a)
            );
            let tspans: String = lines
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let ty = y + i as f64 * line_height;
                    format!(
                        r#"<tspan x="{}" y="{}">{}</tspan>"#,
                        num(*x),
                        num(ty),
                        escape(line)
                    )
                })
                .collect();
            ("text", attrs, tspans)
        }
        Shape::Path { commands } => {
            let attrs = format!(r#"d="{}""#, path_data(commands));
            ("path", attrs, String::new())
        }
    }
}

fn render_instruction(ins: &DrawInstruction) -> String {
    let (tag, geometry, mut inner) = shape_parts(&ins.shape);

    let mut attrs = geometry;
    if !ins.class.is_empty() {
        attrs.push_str(&format!(r#" class="{}""#, escape(&ins.class)));
    }
    if let Some(id) = &ins.item_id {
        attrs.push_str(&format!(r#" data-id="{}""#, escape(id)));
    }
    if let Some(progress) = ins.progress {
        attrs.push_str(&format!(r#" data-progress="{}""#, num(progress)));
    }
    if let Some(Action::Popup(url)) = &ins.action {
        attrs.push_str(&format!(r#" data-popup="{}""#, escape(url)));
        inner = format!("<title>{}</title>{inner}", escape(url));
    }

    let element = if inner.is_empty() {
        format!("<{tag} {attrs}/>")
    } else {
        format!("<{tag} {attrs}>{inner}</{tag}>")
    };

    match &ins.action {
        Some(Action::Navigate(url)) => format!(r#"<a href="{}">{element}</a>"#, escape(url)),
        _ => element,
    }
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Renders [`Geometry`] as a standalone SVG document.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    /// Embed a default `<style>` block so the output is legible on its own.
    pub embed_style: bool,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { embed_style: true }
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_style() -> Self {
        Self { embed_style: false }
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, geometry: &Geometry) -> String {
        let (w, h) = (num(geometry.width), num(geometry.height));
        let mut parts = vec![format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )];

        if self.embed_style {
            parts.push(format!("<defs><style>\n{DEFAULT_STYLE}</style></defs>"));
        }

        let mut open: Option<Layer> = None;
        for ins in &geometry.instructions {
            if open != Some(ins.layer) {
                if open.is_some() {
                    parts.push("</g>".to_string());
                }
                parts.push(format!(r#"<g class="{}">"#, ins.layer.class_name()));
                open = Some(ins.layer);
            }
            parts.push(render_instruction(ins));
        }
        if open.is_some() {
            parts.push("</g>".to_string());
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
