//! Fixed drawing constants.

/// Stroke width of panel borders (comic-weight line).
pub const PANEL_STROKE_WIDTH: f64 = 3.0;

/// Stroke width of bubble outlines.
pub const BUBBLE_STROKE_WIDTH: f64 = 4.0;

/// Thought-tail circles use a lighter line than the cloud body.
pub const TAIL_CIRCLE_STROKE_WIDTH: f64 = BUBBLE_STROKE_WIDTH / 2.0;

pub const TEXT_FONT_SIZE: &str = "22px";
pub const TEXT_FONT_FAMILY: &str = "Impact, sans-serif";

/// Vertical nudge so text sits on the bubble's optical center.
pub const TEXT_BASELINE_NUDGE: f64 = 10.0;
