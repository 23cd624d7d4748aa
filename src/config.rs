//! Immutable configuration for pages and bubbles.
//!
//! Everything a generation run needs is collected up front into a config
//! struct and validated in one pass: [`PageConfig::validate`] and
//! [`BubbleConfig::validate`] report every violated constraint at once
//! instead of rejecting fields one at a time.

use std::str::FromStr;

use crate::errors::{ConfigViolation, InvalidConfig, UnknownSplitStyle};

/// The shape family used for the diagonal divider between two panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStyle {
    Straight,
    Arrow,
    Lightning,
}

impl FromStr for SplitStyle {
    type Err = UnknownSplitStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(SplitStyle::Straight),
            "arrow" => Ok(SplitStyle::Arrow),
            "lightning" => Ok(SplitStyle::Lightning),
            _ => Err(UnknownSplitStyle {
                name: s.to_string(),
            }),
        }
    }
}

/// Ratios for a single diagonal segment.
///
/// X-ratios are relative to the left panel's width: 1.0 is its inner edge,
/// values above 1.0 jut into the right panel, negative values are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightParams {
    pub top_x: f64,
    pub bot_x: f64,
}

impl Default for StraightParams {
    fn default() -> Self {
        Self {
            top_x: 1.3,
            bot_x: 0.7,
        }
    }
}

/// Ratios for a diagonal with an arrow-tip vertex between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowParams {
    pub top_x: f64,
    pub bot_x: f64,
    /// Vertical position of the tip as a fraction of panel height.
    pub mid_y: f64,
    /// Horizontal depth of the tip, as an X-ratio.
    pub depth_x: f64,
}

impl Default for ArrowParams {
    fn default() -> Self {
        Self {
            top_x: 1.3,
            bot_x: 0.7,
            mid_y: 0.5,
            depth_x: 1.5,
        }
    }
}

/// Ratios for the four control points of a lightning-bolt divider.
///
/// The center polyline runs top point, zig, zag, bottom point; zig and zag
/// each have a vertical fraction and a horizontal-depth X-ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightningParams {
    pub top_x: f64,
    pub bot_x: f64,
    pub zig_y: f64,
    pub zig_x: f64,
    pub zag_y: f64,
    pub zag_x: f64,
}

impl Default for LightningParams {
    fn default() -> Self {
        Self {
            top_x: 1.3,
            bot_x: 0.7,
            zig_y: 0.60,
            zig_x: 1.0,
            zag_y: 0.55,
            zag_x: 0.9,
        }
    }
}

/// A split style together with its own strongly-typed ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitSpec {
    Straight(StraightParams),
    Arrow(ArrowParams),
    Lightning(LightningParams),
}

impl SplitSpec {
    pub fn style(&self) -> SplitStyle {
        match self {
            SplitSpec::Straight(_) => SplitStyle::Straight,
            SplitSpec::Arrow(_) => SplitStyle::Arrow,
            SplitSpec::Lightning(_) => SplitStyle::Lightning,
        }
    }

    /// The default ratios for a given style.
    pub fn default_for(style: SplitStyle) -> Self {
        match style {
            SplitStyle::Straight => SplitSpec::Straight(StraightParams::default()),
            SplitStyle::Arrow => SplitSpec::Arrow(ArrowParams::default()),
            SplitStyle::Lightning => SplitSpec::Lightning(LightningParams::default()),
        }
    }

    /// Clamp Y-ratios to [0,1]. X-ratios stay unconstrained so the divider
    /// can jut beyond the panel edge. The geometry core never clamps; this
    /// is the input layer's convention.
    pub fn clamped(self) -> Self {
        match self {
            SplitSpec::Straight(p) => SplitSpec::Straight(p),
            SplitSpec::Arrow(mut p) => {
                p.mid_y = p.mid_y.clamp(0.0, 1.0);
                SplitSpec::Arrow(p)
            }
            SplitSpec::Lightning(mut p) => {
                p.zig_y = p.zig_y.clamp(0.0, 1.0);
                p.zag_y = p.zag_y.clamp(0.0, 1.0);
                SplitSpec::Lightning(p)
            }
        }
    }
}

impl Default for SplitSpec {
    fn default() -> Self {
        SplitSpec::Lightning(LightningParams::default())
    }
}

/// Layout of a full comic page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub width: u32,
    pub height: u32,
    /// Panel count per row, top to bottom.
    pub rows: Vec<u32>,
    pub margin: f64,
    pub gutter: f64,
    pub background: String,
    pub panel_stroke: String,
    pub panel_fill: String,
    /// `(row, starting-column)` of adjacent panel pairs drawn with a split
    /// divider instead of two plain rectangles.
    pub split_pairs: Vec<(usize, usize)>,
    pub split: SplitSpec,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            rows: vec![1, 2, 3],
            margin: 20.0,
            gutter: 10.0,
            background: "#ffffff".to_string(),
            panel_stroke: "#000000".to_string(),
            panel_fill: "none".to_string(),
            split_pairs: Vec::new(),
            split: SplitSpec::default(),
        }
    }
}

impl PageConfig {
    /// Check every constraint, reporting all violations together.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        let mut violations = Vec::new();

        if self.width == 0 {
            violations.push(ConfigViolation::PageWidth { value: self.width });
        }
        if self.height == 0 {
            violations.push(ConfigViolation::PageHeight { value: self.height });
        }
        for (row, &count) in self.rows.iter().enumerate() {
            if count == 0 {
                violations.push(ConfigViolation::EmptyRow { row });
            }
        }
        if !(self.margin >= 0.0 && self.margin.is_finite()) {
            violations.push(ConfigViolation::Margin { value: self.margin });
        }
        if !(self.gutter >= 0.0 && self.gutter.is_finite()) {
            violations.push(ConfigViolation::Gutter { value: self.gutter });
        }
        for &(row, col) in &self.split_pairs {
            let in_bounds = self
                .rows
                .get(row)
                .is_some_and(|&count| col + 1 < count as usize);
            if !in_bounds {
                violations.push(ConfigViolation::SplitPair { row, col });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(InvalidConfig { violations })
        }
    }
}

/// Style tag for a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BubbleStyle {
    #[default]
    Speech,
    Thought,
}

/// One speech or thought bubble, positioned by a clock time.
///
/// The tail points the way a clock hand would at `hour:minute` — 3:00 points
/// right, 6:00 straight down.
#[derive(Debug, Clone)]
pub struct BubbleConfig {
    pub style: BubbleStyle,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub hour: u32,
    pub minute: u32,
    /// Diagonal offset of the drop shadow, in pixels.
    pub shadow_size: f64,
    /// 1 (light gray) through 10 (pure black).
    pub shade_level: u8,
    pub tail_length: f64,
    pub text: String,
    /// Horizontal radius of the speech oval.
    pub rx: f64,
    /// Vertical radius of the speech oval.
    pub ry: f64,
    /// Base radius of the thought cloud.
    pub cloud_radius: f64,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            style: BubbleStyle::Speech,
            canvas_width: 800.0,
            canvas_height: 600.0,
            hour: 3,
            minute: 45,
            shadow_size: 5.0,
            shade_level: 5,
            tail_length: 15.0,
            text: "ZAP!".to_string(),
            rx: 150.0,
            ry: 100.0,
            cloud_radius: 130.0,
        }
    }
}

impl BubbleConfig {
    /// Check every constraint, reporting all violations together.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        let mut violations = Vec::new();

        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0)
            || !self.canvas_width.is_finite()
            || !self.canvas_height.is_finite()
        {
            violations.push(ConfigViolation::Canvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(1..=12).contains(&self.hour) {
            violations.push(ConfigViolation::Hour { value: self.hour });
        }
        if self.minute > 59 {
            violations.push(ConfigViolation::Minute { value: self.minute });
        }
        if !(self.shadow_size >= 0.0 && self.shadow_size.is_finite()) {
            violations.push(ConfigViolation::ShadowSize {
                value: self.shadow_size,
            });
        }
        if !(1..=10).contains(&self.shade_level) {
            violations.push(ConfigViolation::ShadeLevel {
                value: self.shade_level,
            });
        }
        if !(self.tail_length >= 0.0 && self.tail_length.is_finite()) {
            violations.push(ConfigViolation::TailLength {
                value: self.tail_length,
            });
        }
        if !(self.rx > 0.0 && self.ry > 0.0) {
            violations.push(ConfigViolation::BubbleRadii {
                rx: self.rx,
                ry: self.ry,
            });
        }
        if !(self.cloud_radius > 0.0) {
            violations.push(ConfigViolation::CloudRadius {
                value: self.cloud_radius,
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(InvalidConfig { violations })
        }
    }
}

/// Shadow palette, light gray through pure black.
pub const SHADOW_COLORS: [&str; 10] = [
    "#E0E0E0", "#C0C0C0", "#A0A0A0", "#808080", "#606060", "#404040", "#303030", "#202020",
    "#101010", "#000000",
];

/// Map a shade level (1-10) to its hex color, defaulting to black when the
/// level is out of range.
pub fn shadow_color(level: u8) -> &'static str {
    if (1..=10).contains(&level) {
        SHADOW_COLORS[(level - 1) as usize]
    } else {
        "#000000"
    }
}
