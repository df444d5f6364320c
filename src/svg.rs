//! Static SVG export through the canvas [`Renderer`] contract.
//!
//! Coordinates are written in world space; the document's `viewBox` frames
//! the content bounds so no viewport transform is applied.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use canvas::doc::{Area, Connection, Node};
use canvas::geom::{Point, Rect};
use canvas::hit::ResizeAnchor;
use canvas::render::{Renderer, arrowhead, node_outline, pill_radius};

/// Margin around the content bounds, in world units.
const MARGIN: f64 = 20.0;
const CONNECTION_COLOR: &str = "#475569";
const SELECTION_COLOR: &str = "#2563eb";
const HANDLE_SIZE: f64 = 8.0;

#[derive(Debug, Default)]
pub struct SvgRenderer {
    body: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the drawn elements in an `<svg>` document framing `bounds`.
    ///
    /// An empty scene yields a small blank document.
    #[must_use]
    pub fn finish(self, bounds: Option<Rect>) -> String {
        let frame = bounds.unwrap_or(Rect { x1: 0.0, y1: 0.0, x2: 100.0, y2: 100.0 }).expand(MARGIN);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n{}</svg>\n",
            num(frame.x1),
            num(frame.y1),
            num(frame.width()),
            num(frame.height()),
            num(frame.width()),
            num(frame.height()),
            self.body
        )
    }

    fn line(&mut self, element: &str) {
        self.body.push_str("  ");
        self.body.push_str(element);
        self.body.push('\n');
    }

    fn label(&mut self, at: Point, text: &str, color: &str, size: f64) {
        if text.is_empty() {
            return;
        }
        let lines: Vec<&str> = text.lines().collect();
        // Vertically center the block of lines on `at`.
        let first_dy = lines.iter().skip(1).fold(0.0, |acc, _| acc - 0.6);
        let mut el = format!(
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\">",
            num(at.x),
            num(at.y),
            escape_xml(color),
            num(size)
        );
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { first_dy } else { 1.2 };
            el.push_str(&format!("<tspan x=\"{}\" dy=\"{}em\">{}</tspan>", num(at.x), num(dy), escape_xml(line)));
        }
        el.push_str("</text>");
        self.line(&el);
    }
}

impl Renderer for SvgRenderer {
    fn draw_area(&mut self, area: &Area, selected: bool) {
        let r = area.rect;
        let bar = area.title_bar();
        let stroke = if selected { SELECTION_COLOR } else { area.style.outline_color.as_str() };
        self.line(&format!(
            "<rect class=\"area\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            num(r.x1),
            num(r.y1),
            num(r.width()),
            num(r.height()),
            escape_xml(&area.style.fill_color),
            escape_xml(stroke)
        ));
        self.line(&format!(
            "<rect class=\"area-title\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            num(bar.x1),
            num(bar.y1),
            num(bar.width()),
            num(bar.height()),
            escape_xml(&area.style.title_bg_color)
        ));
        self.label(bar.center(), &area.title, "#ffffff", 13.0);
    }

    fn draw_connection(&mut self, _conn: &Connection, path: &[Point], selected: bool) {
        let color = if selected { SELECTION_COLOR } else { CONNECTION_COLOR };
        self.line(&format!(
            "<polyline class=\"connection\" points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\"/>",
            points(path)
        ));
        if let Some(head) = arrowhead(path) {
            self.line(&format!("<polygon class=\"arrow\" points=\"{}\" fill=\"{color}\"/>", points(&head)));
        }
    }

    fn draw_node(&mut self, node: &Node, selected: bool) {
        let style = &node.style;
        let stroke = if selected { SELECTION_COLOR } else { style.outline_color.as_str() };
        let paint = format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            escape_xml(&style.fill_color),
            escape_xml(stroke),
            num(style.outline_width)
        );
        if let Some(outline) = node_outline(node) {
            self.line(&format!("<polygon class=\"node\" points=\"{}\" {paint}/>", points(&outline)));
        } else {
            let b = node.bounds();
            let radius = num(pill_radius(node));
            self.line(&format!(
                "<rect class=\"node\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{radius}\" ry=\"{radius}\" {paint}/>",
                num(b.x1),
                num(b.y1),
                num(b.width()),
                num(b.height())
            ));
        }
        self.label(node.center(), &node.text, &style.font_color, style.font_size);
    }

    fn draw_handles(&mut self, handles: &[(ResizeAnchor, Point)]) {
        let half = HANDLE_SIZE / 2.0;
        for (_, p) in handles {
            self.line(&format!(
                "<rect class=\"handle\" x=\"{}\" y=\"{}\" width=\"{HANDLE_SIZE}\" height=\"{HANDLE_SIZE}\" fill=\"#ffffff\" stroke=\"{SELECTION_COLOR}\"/>",
                num(p.x - half),
                num(p.y - half)
            ));
        }
    }

    fn draw_preview(&mut self, from: Point, to: Point) {
        self.line(&format!(
            "<line class=\"preview\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{SELECTION_COLOR}\" stroke-dasharray=\"6 4\"/>",
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y)
        ));
    }

    fn draw_marquee(&mut self, rect: Rect) {
        self.line(&format!(
            "<rect class=\"marquee\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{SELECTION_COLOR}\" stroke-dasharray=\"4 4\"/>",
            num(rect.x1),
            num(rect.y1),
            num(rect.width()),
            num(rect.height())
        ));
    }
}

/// Format a coordinate without a trailing `.0` for whole numbers.
fn num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

fn points(path: &[Point]) -> String {
    path.iter().map(|p| format!("{},{}", num(p.x), num(p.y))).collect::<Vec<_>>().join(" ")
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
