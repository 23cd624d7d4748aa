//! Panel splitter: two adjacent panels divided by a straight, arrow, or
//! lightning boundary with a fixed-width gutter between them.
//!
//! All X-ratios are interpreted relative to the left panel's width as
//! `left_x + half_width * ratio`, so 1.0 is the left panel's inner edge and
//! larger values jut into the right panel.

use glam::{DVec2, dvec2};
use kapow_svg::{Color, Points, Polygon, Svg};

use crate::config::{LightningParams, SplitSpec};

use super::defaults;
use super::geometry::{Side, line_intersection, unit_normal};

/// The two clockwise vertex lists of a split panel pair.
#[derive(Debug, Clone)]
pub struct SplitPanels {
    pub left: Vec<DVec2>,
    pub right: Vec<DVec2>,
}

/// Compute the polygons for a pair of panels spanning `total_width`.
///
/// `half_width = (total_width - gutter) / 2` is each panel's width; the left
/// panel occupies `[left_x, left_x + half_width]` and the right panel
/// `[left_x + half_width + gutter, left_x + total_width]`.
///
/// Pure function of its inputs. For extreme ratio combinations (e.g. a
/// lightning bolt whose control points collapse onto one another) the
/// fallback joints can produce a locally non-convex or self-overlapping
/// polygon; the computation still completes and stays watertight at the
/// panel edges.
pub fn split_panels(
    left_x: f64,
    top_y: f64,
    total_width: f64,
    height: f64,
    gutter: f64,
    spec: &SplitSpec,
) -> SplitPanels {
    let half_width = (total_width - gutter) / 2.0;
    let right_start = left_x + half_width + gutter;
    let right_end = left_x + total_width;
    let bottom_y = top_y + height;
    let ratio_x = |r: f64| left_x + half_width * r;
    let across = dvec2(gutter, 0.0);

    match spec {
        SplitSpec::Straight(p) => {
            let top = dvec2(ratio_x(p.top_x), top_y);
            let bot = dvec2(ratio_x(p.bot_x), bottom_y);
            SplitPanels {
                left: vec![dvec2(left_x, top_y), top, bot, dvec2(left_x, bottom_y)],
                right: vec![
                    dvec2(right_end, top_y),
                    dvec2(right_end, bottom_y),
                    dvec2(right_start, bottom_y),
                    bot + across,
                    top + across,
                ],
            }
        }
        SplitSpec::Arrow(p) => {
            let top = dvec2(ratio_x(p.top_x), top_y);
            let tip = dvec2(ratio_x(p.depth_x), top_y + height * p.mid_y);
            let bot = dvec2(ratio_x(p.bot_x), bottom_y);
            SplitPanels {
                left: vec![
                    dvec2(left_x, top_y),
                    top,
                    tip,
                    bot,
                    dvec2(left_x, bottom_y),
                ],
                right: vec![
                    dvec2(right_end, top_y),
                    dvec2(right_end, bottom_y),
                    dvec2(right_start, bottom_y),
                    bot + across,
                    tip + across,
                    top + across,
                ],
            }
        }
        SplitSpec::Lightning(p) => lightning_panels(
            p,
            left_x,
            top_y,
            bottom_y,
            right_start,
            right_end,
            half_width,
            gutter,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn lightning_panels(
    p: &LightningParams,
    left_x: f64,
    top_y: f64,
    bottom_y: f64,
    right_start: f64,
    right_end: f64,
    half_width: f64,
    gutter: f64,
) -> SplitPanels {
    let height = bottom_y - top_y;
    let ratio_x = |r: f64| left_x + half_width * r;

    // Center polyline of the bolt: A -> B (zig) -> C (zag) -> D.
    let a = dvec2(ratio_x(p.top_x), top_y);
    let b = dvec2(ratio_x(p.zig_x), top_y + height * p.zig_y);
    let c = dvec2(ratio_x(p.zag_x), top_y + height * p.zag_y);
    let d = dvec2(ratio_x(p.bot_x), bottom_y);

    // Each panel's inner edge sits half a gutter away from the center line.
    let shift = gutter / 2.0;
    let left_boundary = offset_boundary([a, b, c, d], shift, Side::Left, top_y, bottom_y);
    let right_boundary = offset_boundary([a, b, c, d], shift, Side::Right, top_y, bottom_y);

    let mut left = Vec::with_capacity(6);
    left.push(dvec2(left_x, top_y));
    left.extend_from_slice(&left_boundary);
    left.push(dvec2(left_x, bottom_y));

    // Right panel traverses its jagged edge bottom-to-top.
    let [r_top, r_zig, r_zag, r_bot] = right_boundary;
    let right = vec![
        dvec2(right_end, top_y),
        dvec2(right_end, bottom_y),
        dvec2(right_start, bottom_y),
        r_bot,
        r_zag,
        r_zig,
        r_top,
    ];

    SplitPanels { left, right }
}

/// Offset each of the three center segments by `shift` perpendicular to that
/// segment, on the given side. The shifted copies no longer meet at the two
/// interior joints, so the actual joint vertex is the intersection of the two
/// adjacent offset infinite lines; this is what makes the corners sharp
/// instead of smoothly bent. Parallel adjacent offsets fall back to the first
/// segment's offset endpoint. The ends are sealed against the horizontal
/// panel edges, falling back to the offset endpoints when the offset segment
/// is itself horizontal.
fn offset_boundary(
    center: [DVec2; 4],
    shift: f64,
    side: Side,
    top_y: f64,
    bottom_y: f64,
) -> [DVec2; 4] {
    let [a, b, c, d] = center;
    let s_ab = unit_normal(a, b, shift, side);
    let s_bc = unit_normal(b, c, shift, side);
    let s_cd = unit_normal(c, d, shift, side);

    let (a1, b1) = (a + s_ab, b + s_ab);
    let (b2, c2) = (b + s_bc, c + s_bc);
    let (c3, d3) = (c + s_cd, d + s_cd);

    let zig = line_intersection(a1, b1, b2, c2).unwrap_or(b1);
    let zag = line_intersection(b2, c2, c3, d3).unwrap_or(c2);

    let top = line_intersection(a1, zig, dvec2(0.0, top_y), dvec2(1.0, top_y)).unwrap_or(a1);
    let bottom =
        line_intersection(zag, d3, dvec2(0.0, bottom_y), dvec2(1.0, bottom_y)).unwrap_or(d3);

    [top, zig, zag, bottom]
}

/// Draw both polygons of a split pair and return the X-coordinate of the
/// right panel's right edge, so the layout engine can continue placing
/// panels after the pair.
#[allow(clippy::too_many_arguments)]
pub fn draw_split_panels(
    svg: &mut Svg,
    left_x: f64,
    top_y: f64,
    total_width: f64,
    height: f64,
    gutter: f64,
    spec: &SplitSpec,
    stroke: &Color,
    fill: &Color,
) -> f64 {
    let panels = split_panels(left_x, top_y, total_width, height, gutter, spec);
    crate::log::debug!(left_x, top_y, total_width, "drawing split pair");

    for vertices in [&panels.left, &panels.right] {
        svg.push(Polygon {
            points: to_points(vertices),
            fill: fill.clone(),
            stroke: stroke.clone(),
            stroke_width: Some(defaults::PANEL_STROKE_WIDTH),
        });
    }

    left_x + total_width
}

fn to_points(vertices: &[DVec2]) -> Points {
    vertices
        .iter()
        .fold(Points::new(), |pts, v| pts.push(v.x, v.y))
}
