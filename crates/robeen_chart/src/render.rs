//! Materialising geometry on a drawing surface.
//!
//! The chart core only produces geometry. A [`RenderSurface`] knows its own
//! size and how to draw primitives; [`render_state`] walks a [`ChartState`]
//! and issues the draw calls. [`SvgCanvas`] is a headless surface.

use std::fmt::Write as _;

use crate::chart::ChartState;
use crate::error::Result;
use crate::layout::{Margin, Size};

pub const AXIS_COLOR: &str = "#333333";
pub const TEXT_COLOR: &str = "#333333";
pub const GRID_COLOR: &str = "#000000";

const TICK_SIZE: f32 = 6.0;
const LABEL_GAP: f32 = 3.0;
const FONT_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Drawing primitives, in surface pixels.
pub trait Canvas {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: &str, opacity: f32);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str, opacity: f32);
    fn text(&mut self, text: &str, x: f32, y: f32, anchor: TextAnchor, fill: &str);
}

/// A canvas that can report its size.
///
/// `bounds` fails with `SurfaceUnavailable` until the surface is attached.
pub trait RenderSurface: Canvas {
    fn bounds(&self) -> Result<Size>;
}

/// Draw grid, axes and bars of one redraw pass.
pub fn render_state<C: Canvas + ?Sized>(canvas: &mut C, state: &ChartState, margin: &Margin) {
    canvas.clear();

    let ox = margin.left;
    let oy = margin.top;
    let plot = state.plot;
    let geometry = &state.geometry;

    for g in &geometry.x_grid {
        canvas.line(ox + g.position, oy, ox + g.position, oy + g.length, GRID_COLOR, g.opacity);
    }
    for g in &geometry.y_grid {
        canvas.line(ox, oy + g.position, ox + g.length, oy + g.position, GRID_COLOR, g.opacity);
    }

    if !geometry.x_ticks.is_empty() {
        let base_y = oy + plot.height;
        canvas.line(ox, base_y, ox + plot.width, base_y, AXIS_COLOR, 1.0);
        for t in &geometry.x_ticks {
            let x = ox + t.position;
            canvas.line(x, base_y, x, base_y + TICK_SIZE, AXIS_COLOR, 1.0);
            canvas.text(
                &t.text,
                x,
                base_y + TICK_SIZE + LABEL_GAP + FONT_SIZE,
                TextAnchor::Middle,
                TEXT_COLOR,
            );
        }
    }

    if !geometry.y_ticks.is_empty() {
        canvas.line(ox, oy, ox, oy + plot.height, AXIS_COLOR, 1.0);
        for t in &geometry.y_ticks {
            let y = oy + t.position;
            canvas.line(ox - TICK_SIZE, y, ox, y, AXIS_COLOR, 1.0);
            canvas.text(
                &t.text,
                ox - TICK_SIZE - LABEL_GAP,
                y + FONT_SIZE * 0.35,
                TextAnchor::End,
                TEXT_COLOR,
            );
        }
    }

    for b in &geometry.bars {
        canvas.fill_rect(ox + b.x, oy + b.y, b.width, b.height, &b.color, 1.0);
    }
}

/// Replace the chart with a single line of text ("no data", setup errors).
pub fn render_message<C: Canvas + ?Sized>(canvas: &mut C, margin: &Margin, message: &str) {
    canvas.clear();
    canvas.text(
        message,
        margin.left,
        margin.top + FONT_SIZE,
        TextAnchor::Start,
        TEXT_COLOR,
    );
}

/// In-memory SVG document of a fixed size.
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    size: Size,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            body: String::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }

    /// Complete SVG document for what has been drawn so far.
    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\" font-size=\"{FONT_SIZE}\">\n\
             {body}</svg>\n",
            w = self.size.width,
            h = self.size.height,
            body = self.body,
        )
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: &str, opacity: f32) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{}\"{}/>",
            escape(fill),
            opacity_attr(opacity),
        );
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str, opacity: f32) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\"{}/>",
            escape(stroke),
            opacity_attr(opacity),
        );
    }

    fn text(&mut self, text: &str, x: f32, y: f32, anchor: TextAnchor, fill: &str) {
        let _ = writeln!(
            self.body,
            "  <text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"{}\" fill=\"{}\">{}</text>",
            anchor.as_svg(),
            escape(fill),
            escape(text),
        );
    }
}

impl RenderSurface for SvgCanvas {
    fn bounds(&self) -> Result<Size> {
        Ok(self.size)
    }
}

fn opacity_attr(opacity: f32) -> String {
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(" opacity=\"{opacity}\"")
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_escapes_text() {
        let mut svg = SvgCanvas::new(100.0, 50.0);
        svg.text("a<b & \"c\"", 1.0, 2.0, TextAnchor::Start, TEXT_COLOR);
        let doc = svg.to_svg();
        assert!(doc.contains("a&lt;b &amp; &quot;c&quot;"));
        assert!(doc.starts_with("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn clear_discards_previous_drawing() {
        let mut svg = SvgCanvas::new(100.0, 50.0);
        svg.fill_rect(0.0, 0.0, 10.0, 10.0, "red", 1.0);
        svg.clear();
        assert!(!svg.to_svg().contains("<rect"));
    }

    #[test]
    fn translucent_lines_carry_opacity() {
        let mut svg = SvgCanvas::new(10.0, 10.0);
        svg.line(0.0, 0.0, 0.0, 10.0, GRID_COLOR, 0.1);
        svg.line(0.0, 0.0, 10.0, 0.0, AXIS_COLOR, 1.0);
        let doc = svg.to_svg();
        assert_eq!(doc.matches("opacity=\"0.1\"").count(), 1);
    }

    #[test]
    fn message_replaces_content() {
        let mut svg = SvgCanvas::new(200.0, 100.0);
        svg.fill_rect(0.0, 0.0, 10.0, 10.0, "red", 1.0);
        render_message(&mut svg, &Margin::default(), "No data");
        let doc = svg.to_svg();
        assert!(doc.contains(">No data</text>"));
        assert!(!doc.contains("<rect"));
    }
}
