//! Paint and stroke attribute types.

use std::fmt;

/// A paint value for `fill` and `stroke` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Color {
    /// No paint (renders as `none`)
    #[default]
    None,
    /// RGB color
    Rgb(u8, u8, u8),
    /// Color name passed through verbatim (e.g. a CSS keyword)
    Named(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    /// Parse a color from `none`, `#rgb`, `#rrggbb`, `rgb(r,g,b)`, or a
    /// handful of common names. Anything else is kept as a named color.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Color::None;
        }

        if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
            if let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) = (
                channels.next(),
                channels.next(),
                channels.next(),
                channels.next(),
            ) {
                return Color::Rgb(r, g, b);
            }
        }

        if let Some(hex) = s.strip_prefix('#') {
            match hex.len() {
                6 => {
                    if let (Ok(r), Ok(g), Ok(b)) = (
                        u8::from_str_radix(&hex[0..2], 16),
                        u8::from_str_radix(&hex[2..4], 16),
                        u8::from_str_radix(&hex[4..6], 16),
                    ) {
                        return Color::Rgb(r, g, b);
                    }
                }
                3 => {
                    if let (Ok(r), Ok(g), Ok(b)) = (
                        u8::from_str_radix(&hex[0..1], 16),
                        u8::from_str_radix(&hex[1..2], 16),
                        u8::from_str_radix(&hex[2..3], 16),
                    ) {
                        // Expand 3-digit hex: #abc -> #aabbcc
                        return Color::Rgb(r * 17, g * 17, b * 17);
                    }
                }
                _ => {}
            }
        }

        match s.to_lowercase().as_str() {
            "black" => Color::Rgb(0, 0, 0),
            "white" => Color::Rgb(255, 255, 255),
            "red" => Color::Rgb(255, 0, 0),
            "green" => Color::Rgb(0, 128, 0),
            "blue" => Color::Rgb(0, 0, 255),
            "yellow" => Color::Rgb(255, 255, 0),
            "cyan" => Color::Rgb(0, 255, 255),
            "magenta" => Color::Rgb(255, 0, 255),
            "gray" | "grey" => Color::Rgb(128, 128, 128),
            _ => Color::Named(s.to_string()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Named(n) => write!(f, "{}", n),
        }
    }
}

/// Value for the `stroke-linecap` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineCap::Butt => write!(f, "butt"),
            LineCap::Round => write!(f, "round"),
            LineCap::Square => write!(f, "square"),
        }
    }
}

/// Value for the `stroke-linejoin` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineJoin::Miter => write!(f, "miter"),
            LineJoin::Round => write!(f, "round"),
            LineJoin::Bevel => write!(f, "bevel"),
        }
    }
}
