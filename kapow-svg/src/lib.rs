//! Typed SVG elements and XML serialization.
//!
//! This crate is the drawing surface for `kapow`: callers build an [`Svg`]
//! document out of rectangles, polygons, paths, circles, and text, then
//! serialize it with `to_string()` or write it to disk with [`Svg::save`].
//!
//! # Example
//!
//! ```rust
//! use kapow_svg::{Color, Rect, Svg};
//!
//! let mut svg = Svg::new(100.0, 100.0);
//! svg.push(Rect {
//!     x: 10.0,
//!     y: 10.0,
//!     width: 80.0,
//!     height: 80.0,
//!     fill: Color::parse("blue"),
//!     stroke: None,
//!     stroke_width: None,
//! });
//! assert!(svg.to_string().contains("<rect"));
//! ```

use std::fmt;
use std::fmt::Write as _;

use enum_dispatch::enum_dispatch;

mod style;
pub use style::{Color, LineCap, LineJoin};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element.
#[derive(Debug, Clone, Default)]
pub struct Svg {
    pub width: f64,
    pub height: f64,
    pub children: Vec<SvgNode>,
}

impl Svg {
    /// Create an empty document with the given pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            children: Vec::new(),
        }
    }

    /// Append a child element.
    pub fn push(&mut self, node: impl Into<SvgNode>) {
        self.children.push(node.into());
    }

    /// Serialize and write the document to a file.
    pub fn save(&self, path: &std::path::Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_string())
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write!(
            out,
            r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            SVG_NS,
            fmt_num(self.width),
            fmt_num(self.height),
            fmt_num(self.width),
            fmt_num(self.height),
        )?;
        out.push('\n');
        for child in &self.children {
            child.write_xml(&mut out);
            out.push('\n');
        }
        out.push_str("</svg>");
        f.write_str(&out)
    }
}

/// Serialization behavior shared by all node types.
#[enum_dispatch]
pub trait ToXml {
    fn write_xml(&self, out: &mut String);
}

/// Any SVG element we emit.
#[enum_dispatch(ToXml)]
#[derive(Debug, Clone)]
pub enum SvgNode {
    Rect,
    Circle,
    Polygon,
    Path,
    Text,
}

/// SVG rect element (`<rect>`)
#[derive(Debug, Clone, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
}

impl ToXml for Rect {
    fn write_xml(&self, out: &mut String) {
        push_open(out, "rect");
        push_num_attr(out, "x", self.x);
        push_num_attr(out, "y", self.y);
        push_num_attr(out, "width", self.width);
        push_num_attr(out, "height", self.height);
        push_attr(out, "fill", &self.fill.to_string());
        if let Some(ref stroke) = self.stroke {
            push_attr(out, "stroke", &stroke.to_string());
        }
        if let Some(sw) = self.stroke_width {
            push_num_attr(out, "stroke-width", sw);
        }
        out.push_str("/>");
    }
}

/// SVG circle element (`<circle>`)
#[derive(Debug, Clone, Default)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: Option<f64>,
}

impl ToXml for Circle {
    fn write_xml(&self, out: &mut String) {
        push_open(out, "circle");
        push_num_attr(out, "cx", self.cx);
        push_num_attr(out, "cy", self.cy);
        push_num_attr(out, "r", self.r);
        push_attr(out, "fill", &self.fill.to_string());
        push_attr(out, "stroke", &self.stroke.to_string());
        if let Some(sw) = self.stroke_width {
            push_num_attr(out, "stroke-width", sw);
        }
        out.push_str("/>");
    }
}

/// SVG polygon element (`<polygon>`)
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    pub points: Points,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: Option<f64>,
}

impl ToXml for Polygon {
    fn write_xml(&self, out: &mut String) {
        push_open(out, "polygon");
        push_attr(out, "points", &self.points.to_string());
        push_attr(out, "fill", &self.fill.to_string());
        push_attr(out, "stroke", &self.stroke.to_string());
        if let Some(sw) = self.stroke_width {
            push_num_attr(out, "stroke-width", sw);
        }
        out.push_str("/>");
    }
}

/// SVG path element (`<path>`)
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub d: String,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: Option<f64>,
    pub stroke_linecap: Option<LineCap>,
    pub stroke_linejoin: Option<LineJoin>,
}

impl ToXml for Path {
    fn write_xml(&self, out: &mut String) {
        push_open(out, "path");
        push_attr(out, "d", &self.d);
        push_attr(out, "fill", &self.fill.to_string());
        push_attr(out, "stroke", &self.stroke.to_string());
        if let Some(sw) = self.stroke_width {
            push_num_attr(out, "stroke-width", sw);
        }
        if let Some(cap) = self.stroke_linecap {
            push_attr(out, "stroke-linecap", &cap.to_string());
        }
        if let Some(join) = self.stroke_linejoin {
            push_attr(out, "stroke-linejoin", &join.to_string());
        }
        out.push_str("/>");
    }
}

/// SVG text element (`<text>`)
#[derive(Debug, Clone, Default)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub fill: Color,
    pub font_size: Option<String>,
    pub font_family: Option<String>,
    pub text_anchor: Option<String>,
    pub content: String,
}

impl ToXml for Text {
    fn write_xml(&self, out: &mut String) {
        push_open(out, "text");
        push_num_attr(out, "x", self.x);
        push_num_attr(out, "y", self.y);
        push_attr(out, "fill", &self.fill.to_string());
        if let Some(ref size) = self.font_size {
            push_attr(out, "font-size", size);
        }
        if let Some(ref family) = self.font_family {
            push_attr(out, "font-family", family);
        }
        if let Some(ref anchor) = self.text_anchor {
            push_attr(out, "text-anchor", anchor);
        }
        out.push('>');
        push_escaped(out, &self.content, false);
        out.push_str("</text>");
    }
}

/// Builder for the `points` attribute of a polygon.
#[derive(Debug, Clone, Default)]
pub struct Points {
    coords: Vec<(f64, f64)>,
}

impl Points {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, x: f64, y: f64) -> Self {
        self.coords.push((x, y));
        self
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (x, y)) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", fmt_num(*x), fmt_num(*y))?;
        }
        Ok(())
    }
}

fn push_open(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value, true);
    out.push('"');
}

fn push_num_attr(out: &mut String, name: &str, value: f64) {
    push_attr(out, name, &fmt_num(value));
}

fn push_escaped(out: &mut String, s: &str, in_attr: bool) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Format a number matching C's %g format (6 significant figures, trailing
/// zeros trimmed) so coordinates stay compact and stable.
pub fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;

    if value == 0.0 {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(1.25), "1.25");
        assert_eq!(fmt_num(-3.0), "-3");
    }

    #[test]
    fn fmt_num_six_significant_figures() {
        assert_eq!(fmt_num(123.456789), "123.457");
        assert_eq!(fmt_num(0.000123456789), "0.000123457");
        assert_eq!(fmt_num(1234567.0), "1234570");
    }

    #[test]
    fn document_shape() {
        let mut svg = Svg::new(800.0, 600.0);
        svg.push(Rect {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
            fill: Color::parse("#ffffff"),
            stroke: None,
            stroke_width: None,
        });
        let doc = svg.to_string();
        assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        assert!(doc.contains(r#"width="800" height="600""#));
        assert!(doc.contains(r#"<rect x="0" y="0" width="800" height="600" fill="rgb(255,255,255)"/>"#));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let text = Text {
            x: 10.0,
            y: 20.0,
            fill: Color::BLACK,
            font_size: None,
            font_family: None,
            text_anchor: None,
            content: "a < b & c".to_string(),
        };
        let mut out = String::new();
        text.write_xml(&mut out);
        assert!(out.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn polygon_points_attribute() {
        let points = Points::new().push(0.0, 0.0).push(10.0, 0.0).push(10.0, 5.5);
        assert_eq!(points.to_string(), "0,0 10,0 10,5.5");
    }

    #[test]
    fn path_stroke_attributes() {
        let path = Path {
            d: "M 0,0 L 10,10".to_string(),
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_width: Some(4.0),
            stroke_linecap: Some(LineCap::Round),
            stroke_linejoin: Some(LineJoin::Round),
        };
        let mut out = String::new();
        path.write_xml(&mut out);
        assert!(out.contains(r#"stroke-width="4""#));
        assert!(out.contains(r#"stroke-linecap="round""#));
        assert!(out.contains(r#"stroke-linejoin="round""#));
    }
}
