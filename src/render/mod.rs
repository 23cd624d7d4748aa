//! SVG document assembly for pages and bubbles.
//!
//! The submodules compute pure geometry; this module owns draw order. For
//! bubbles that order matters visually: shadows go down first so the main
//! shape overlaps them, and text goes last so nothing covers it.

pub mod bubble;
pub mod defaults;
pub mod geometry;
pub mod layout;
pub mod split;

use glam::dvec2;
use kapow_svg::{Circle, Color, LineCap, LineJoin, Path, Rect, Svg, Text};

use crate::config::{BubbleConfig, BubbleStyle, PageConfig, shadow_color};

/// Render a comic page: full-bleed background, then the panel grid.
pub fn render_page(config: &PageConfig) -> Svg {
    crate::log::debug!(
        width = config.width,
        height = config.height,
        "rendering page"
    );
    let mut svg = Svg::new(config.width as f64, config.height as f64);
    svg.push(Rect {
        x: 0.0,
        y: 0.0,
        width: config.width as f64,
        height: config.height as f64,
        fill: Color::parse(&config.background),
        stroke: None,
        stroke_width: None,
    });
    layout::layout_page(config, &mut svg);
    svg
}

/// Render a single bubble centered on its own canvas.
pub fn render_bubble(config: &BubbleConfig) -> Svg {
    let mut svg = Svg::new(config.canvas_width, config.canvas_height);
    let center = dvec2(config.canvas_width / 2.0, config.canvas_height / 2.0);
    let angle = bubble::time_to_angle(config.hour, config.minute);
    let shadow_center = center + dvec2(config.shadow_size, config.shadow_size);
    let shadow_fill = Color::parse(shadow_color(config.shade_level));
    crate::log::debug!(hour = config.hour, minute = config.minute, angle, "rendering bubble");

    match config.style {
        BubbleStyle::Speech => {
            let shadow = bubble::speech_bubble_path(
                shadow_center,
                angle,
                config.rx,
                config.ry,
                config.tail_length,
            );
            svg.push(Path {
                d: bubble::path_data(&shadow),
                fill: shadow_fill,
                stroke: Color::None,
                stroke_width: None,
                stroke_linecap: None,
                stroke_linejoin: None,
            });

            let main =
                bubble::speech_bubble_path(center, angle, config.rx, config.ry, config.tail_length);
            svg.push(Path {
                d: bubble::path_data(&main),
                fill: Color::WHITE,
                stroke: Color::BLACK,
                stroke_width: Some(defaults::BUBBLE_STROKE_WIDTH),
                stroke_linecap: Some(LineCap::Round),
                stroke_linejoin: Some(LineJoin::Round),
            });
        }
        BubbleStyle::Thought => {
            let shadow = bubble::cloud_path(shadow_center, config.cloud_radius);
            svg.push(Path {
                d: bubble::path_data(&shadow),
                fill: shadow_fill.clone(),
                stroke: Color::None,
                stroke_width: None,
                stroke_linecap: None,
                stroke_linejoin: None,
            });

            let main = bubble::cloud_path(center, config.cloud_radius);
            svg.push(Path {
                d: bubble::path_data(&main),
                fill: Color::WHITE,
                stroke: Color::BLACK,
                stroke_width: Some(defaults::BUBBLE_STROKE_WIDTH),
                stroke_linecap: None,
                stroke_linejoin: None,
            });

            // Shadow circles all go down before any main circle so a long
            // tail's main circles never sit under a neighbor's shadow.
            let shadow_tail = bubble::thought_tail(
                shadow_center,
                angle,
                config.cloud_radius,
                config.tail_length,
            );
            for c in &shadow_tail {
                svg.push(Circle {
                    cx: c.center.x,
                    cy: c.center.y,
                    r: c.radius,
                    fill: shadow_fill.clone(),
                    stroke: Color::None,
                    stroke_width: None,
                });
            }

            let tail = bubble::thought_tail(center, angle, config.cloud_radius, config.tail_length);
            for c in &tail {
                svg.push(Circle {
                    cx: c.center.x,
                    cy: c.center.y,
                    r: c.radius,
                    fill: Color::WHITE,
                    stroke: Color::BLACK,
                    stroke_width: Some(defaults::TAIL_CIRCLE_STROKE_WIDTH),
                });
            }
        }
    }

    svg.push(Text {
        x: center.x,
        y: center.y + defaults::TEXT_BASELINE_NUDGE,
        fill: Color::BLACK,
        font_size: Some(defaults::TEXT_FONT_SIZE.to_string()),
        font_family: Some(defaults::TEXT_FONT_FAMILY.to_string()),
        text_anchor: Some("middle".to_string()),
        content: config.text.clone(),
    });

    svg
}
