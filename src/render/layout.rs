//! Page layout: rows of panels inside a margin, separated by gutters.

use kapow_svg::{Color, Rect, Svg};

use crate::config::PageConfig;

use super::defaults;
use super::split::draw_split_panels;

/// Lay out every panel of `config` onto `svg`.
///
/// All rows share the vertical space left after the margins and inter-row
/// gutters, and each row splits the horizontal space evenly among its
/// panels. A `(row, col)` entry in `split_pairs` consumes two columns and
/// spans `2 * standard_width + gutter`, so the row's outer edges stay
/// aligned with its neighbors.
pub fn layout_page(config: &PageConfig, svg: &mut Svg) {
    if config.rows.is_empty() {
        return;
    }

    let width = config.width as f64;
    let height = config.height as f64;
    let row_count = config.rows.len();
    let panel_height =
        (height - 2.0 * config.margin - (row_count - 1) as f64 * config.gutter) / row_count as f64;

    let stroke = Color::parse(&config.panel_stroke);
    let fill = Color::parse(&config.panel_fill);

    let mut y = config.margin;
    for (row, &count) in config.rows.iter().enumerate() {
        let total_cols = count as usize;
        if total_cols == 0 {
            // Nothing to draw, but the row still occupies its slot.
            y += panel_height + config.gutter;
            continue;
        }

        let standard_width = (width - 2.0 * config.margin
            - (total_cols - 1) as f64 * config.gutter)
            / total_cols as f64;
        crate::log::debug!(row, total_cols, "laying out row");

        let mut x = config.margin;
        let mut c = 0;
        while c < total_cols {
            if c + 1 < total_cols && config.split_pairs.contains(&(row, c)) {
                let pair_width = 2.0 * standard_width + config.gutter;
                x = draw_split_panels(
                    svg,
                    x,
                    y,
                    pair_width,
                    panel_height,
                    config.gutter,
                    &config.split,
                    &stroke,
                    &fill,
                );
                if c + 2 < total_cols {
                    x += config.gutter;
                }
                c += 2;
            } else {
                svg.push(Rect {
                    x,
                    y,
                    width: standard_width,
                    height: panel_height,
                    fill: fill.clone(),
                    stroke: Some(stroke.clone()),
                    stroke_width: Some(defaults::PANEL_STROKE_WIDTH),
                });
                x += standard_width + config.gutter;
                c += 1;
            }
        }

        y += panel_height + config.gutter;
    }
}
