//! Speech and thought bubble geometry.
//!
//! Both bubble kinds point their tail the way a clock hand would: the caller
//! gives an hour and minute, [`time_to_angle`] turns it into degrees
//! clockwise from 12 o'clock, and every tail point is placed along that
//! direction. Screen coordinates are y-down, so the direction vector for an
//! angle `a` is `(sin a, -cos a)`.

use glam::{DVec2, dvec2};
use kapow_svg::fmt_num;

/// Angular half-spread of the speech tail's base on the oval, in degrees.
const TAIL_BASE_SPREAD: f64 = 5.0;
/// Angular displacement of the tail's bend control points, in degrees.
const TAIL_BEND: f64 = 2.0;
/// Bend control points sit this fraction of the way out to the tip.
const TAIL_BEND_RADIUS_RATIO: f64 = 0.6;

/// Radius of the semicircular arcs forming the cloud's bumps.
const CLOUD_BUMP_RADIUS: f64 = 30.0;

/// Number of diminishing circles in a thought tail.
const TAIL_CIRCLE_COUNT: u32 = 3;

/// Cloud perimeter as ratios of the cloud radius, clockwise from the right
/// edge. The jitter in the ratios gives the hand-drawn look.
const CLOUD_POINT_RATIOS: [(f64, f64); 12] = [
    (0.9, -0.1),
    (0.8, -0.4),
    (0.4, -0.9),
    (0.1, -0.8),
    (-0.5, -0.9),
    (-0.9, -0.5),
    (-0.8, -0.1),
    (-0.9, 0.5),
    (-0.4, 0.8),
    (0.1, 0.9),
    (0.5, 0.8),
    (0.9, 0.4),
];

/// One command of an SVG path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(DVec2),
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    QuadTo {
        ctrl: DVec2,
        to: DVec2,
    },
}

/// Serialize segments into a `d` attribute string.
pub fn path_data(segments: &[PathSegment]) -> String {
    let mut d = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        match segment {
            PathSegment::MoveTo(p) => {
                d.push_str("M ");
                push_point(&mut d, *p);
            }
            PathSegment::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                to,
            } => {
                d.push_str("A ");
                d.push_str(&fmt_num(*rx));
                d.push(',');
                d.push_str(&fmt_num(*ry));
                d.push(' ');
                d.push_str(&fmt_num(*rotation));
                d.push(' ');
                d.push(if *large_arc { '1' } else { '0' });
                d.push(',');
                d.push(if *sweep { '1' } else { '0' });
                d.push(' ');
                push_point(&mut d, *to);
            }
            PathSegment::QuadTo { ctrl, to } => {
                d.push_str("Q ");
                push_point(&mut d, *ctrl);
                d.push(' ');
                push_point(&mut d, *to);
            }
        }
    }
    d
}

fn push_point(d: &mut String, p: DVec2) {
    d.push_str(&fmt_num(p.x));
    d.push(',');
    d.push_str(&fmt_num(p.y));
}

/// Degrees clockwise from 12 o'clock for a clock hand at `hour:minute`.
///
/// 30 degrees per hour plus half a degree per minute; 12 o'clock is 0.
pub fn time_to_angle(hour: u32, minute: u32) -> f64 {
    f64::from(hour % 12) * 30.0 + f64::from(minute) * 0.5
}

/// A point `radius` away from `center` in the clock direction `angle_rad`.
fn clock_point(center: DVec2, angle_rad: f64, radius: f64) -> DVec2 {
    center + radius * dvec2(angle_rad.sin(), -angle_rad.cos())
}

/// Like [`clock_point`] but on an axis-aligned ellipse instead of a circle.
fn ellipse_point(center: DVec2, angle_rad: f64, rx: f64, ry: f64) -> DVec2 {
    center + dvec2(rx * angle_rad.sin(), -ry * angle_rad.cos())
}

/// The closed outline of an oval speech bubble with a smoothly bent tail.
///
/// The perimeter starts at one side of the tail's base, sweeps the large
/// elliptical arc around the body to the other side, then returns to the
/// start through two quadratic curves that meet at the tip. The second
/// curve's target is the starting point, so no explicit close is needed.
///
/// The tip sits `rx + tail_length` from the center along the clock angle;
/// the bend control points sit at 60% of the tail's extension, displaced
/// two degrees to either side of it.
pub fn speech_bubble_path(
    center: DVec2,
    angle_degrees: f64,
    rx: f64,
    ry: f64,
    tail_length: f64,
) -> Vec<PathSegment> {
    let angle = angle_degrees.to_radians();
    let spread = TAIL_BASE_SPREAD.to_radians();
    let bend = TAIL_BEND.to_radians();

    let p1 = ellipse_point(center, angle - spread, rx, ry);
    let p2 = ellipse_point(center, angle + spread, rx, ry);
    let tip = clock_point(center, angle, rx + tail_length);

    let bend_radius = rx + tail_length * TAIL_BEND_RADIUS_RATIO;
    let c1 = clock_point(center, angle + bend, bend_radius);
    let c2 = clock_point(center, angle - bend, bend_radius);

    vec![
        PathSegment::MoveTo(p1),
        PathSegment::Arc {
            rx,
            ry,
            rotation: 0.0,
            large_arc: true,
            sweep: false,
            to: p2,
        },
        PathSegment::QuadTo { ctrl: c1, to: tip },
        PathSegment::QuadTo { ctrl: c2, to: p1 },
    ]
}

/// The bumpy closed outline of a thought cloud.
///
/// Twelve jittered perimeter points joined by small outward-bulging arcs,
/// with a final arc back to the start.
pub fn cloud_path(center: DVec2, cloud_radius: f64) -> Vec<PathSegment> {
    let points: Vec<DVec2> = CLOUD_POINT_RATIOS
        .iter()
        .map(|&(x, y)| center + cloud_radius * dvec2(x, y))
        .collect();

    let mut segments = Vec::with_capacity(points.len() + 1);
    segments.push(PathSegment::MoveTo(points[0]));
    for &to in points.iter().skip(1).chain(std::iter::once(&points[0])) {
        segments.push(PathSegment::Arc {
            rx: CLOUD_BUMP_RADIUS,
            ry: CLOUD_BUMP_RADIUS,
            rotation: 0.0,
            large_arc: false,
            sweep: false,
            to,
        });
    }
    segments
}

/// One circle of a thought bubble's tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailCircle {
    pub center: DVec2,
    pub radius: f64,
}

/// The diminishing circles trailing off a thought cloud.
///
/// Three circles along the clock direction, starting one third of the tail
/// length past the cloud's radius and stepping outward by the same amount.
/// Radii shrink 11, 8, 5 from the cloud toward the tip.
pub fn thought_tail(
    center: DVec2,
    angle_degrees: f64,
    cloud_radius: f64,
    tail_length: f64,
) -> Vec<TailCircle> {
    let angle = angle_degrees.to_radians();
    let step = tail_length / f64::from(TAIL_CIRCLE_COUNT);

    (0..TAIL_CIRCLE_COUNT)
        .map(|i| TailCircle {
            center: clock_point(center, angle, cloud_radius + step + f64::from(i) * step),
            radius: 5.0 + f64::from(TAIL_CIRCLE_COUNT - 1 - i) * 3.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clock_angles_match_the_dial() {
        assert_relative_eq!(time_to_angle(12, 0), 0.0);
        assert_relative_eq!(time_to_angle(3, 0), 90.0);
        assert_relative_eq!(time_to_angle(6, 30), 195.0);
        assert_relative_eq!(time_to_angle(3, 45), 112.5);
    }

    #[test]
    fn clock_direction_is_y_down() {
        // 12 o'clock points up the page, 3 o'clock to the right.
        let center = dvec2(400.0, 300.0);
        let up = clock_point(center, time_to_angle(12, 0).to_radians(), 10.0);
        assert_relative_eq!(up.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(up.y, 290.0);

        let right = clock_point(center, time_to_angle(3, 0).to_radians(), 10.0);
        assert_relative_eq!(right.x, 410.0);
        assert_relative_eq!(right.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn speech_base_points_lie_on_the_oval() {
        let center = dvec2(400.0, 300.0);
        let (rx, ry) = (150.0, 100.0);
        let segments = speech_bubble_path(center, 90.0, rx, ry, 15.0);

        let PathSegment::MoveTo(p1) = segments[0] else {
            panic!("path must start with a move");
        };
        let PathSegment::Arc { to: p2, .. } = segments[1] else {
            panic!("second segment must be the body arc");
        };
        for p in [p1, p2] {
            let n = ((p.x - center.x) / rx).powi(2) + ((p.y - center.y) / ry).powi(2);
            assert_relative_eq!(n, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn speech_tail_tip_extends_past_the_oval() {
        let center = dvec2(400.0, 300.0);
        let segments = speech_bubble_path(center, 90.0, 150.0, 100.0, 20.0);

        // At 3 o'clock the tip points straight right.
        let PathSegment::QuadTo { to: tip, .. } = segments[2] else {
            panic!("third segment must curve out to the tip");
        };
        assert_relative_eq!(tip.x, 570.0);
        assert_relative_eq!(tip.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn speech_outline_closes_on_its_start() {
        let segments = speech_bubble_path(dvec2(400.0, 300.0), 112.5, 150.0, 100.0, 15.0);
        assert_eq!(segments.len(), 4);
        let PathSegment::MoveTo(start) = segments[0] else {
            panic!("path must start with a move");
        };
        let PathSegment::QuadTo { to: end, .. } = segments[3] else {
            panic!("last segment must curve back");
        };
        assert_eq!(start, end);
    }

    #[test]
    fn speech_path_data_format() {
        let d = path_data(&speech_bubble_path(
            dvec2(400.0, 300.0),
            90.0,
            150.0,
            100.0,
            15.0,
        ));
        assert!(d.starts_with("M "));
        assert!(d.contains("A 150,100 0 1,0 "));
        assert_eq!(d.matches("Q ").count(), 2);
    }

    #[test]
    fn cloud_is_a_closed_ring_of_bumps() {
        let center = dvec2(400.0, 300.0);
        let segments = cloud_path(center, 130.0);
        assert_eq!(segments.len(), 13); // move + 11 joining arcs + closing arc

        let PathSegment::MoveTo(start) = segments[0] else {
            panic!("path must start with a move");
        };
        let PathSegment::Arc { to: end, .. } = segments[12] else {
            panic!("cloud must close with an arc");
        };
        assert_eq!(start, end);

        for segment in &segments[1..] {
            let PathSegment::Arc {
                rx, ry, sweep, to, ..
            } = segment
            else {
                panic!("cloud perimeter is all arcs");
            };
            assert_relative_eq!(*rx, 30.0);
            assert_relative_eq!(*ry, 30.0);
            assert!(!sweep, "bumps must bulge outward");
            assert!(to.distance(center) <= 130.0 * 0.91 + 1e-9);
        }
    }

    #[test]
    fn tail_radii_match_observed_ordering() {
        let circles = thought_tail(dvec2(400.0, 300.0), 90.0, 130.0, 15.0);
        assert_eq!(circles.len(), 3);

        // Largest circle nearest the cloud, shrinking toward the tip.
        let radii: Vec<f64> = circles.iter().map(|c| c.radius).collect();
        assert_eq!(radii, vec![11.0, 8.0, 5.0]);

        // Distances step outward by a third of the tail length.
        let center = dvec2(400.0, 300.0);
        for (i, circle) in circles.iter().enumerate() {
            let expected = 130.0 + 5.0 + i as f64 * 5.0;
            assert_relative_eq!(circle.center.distance(center), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn tail_circles_follow_the_clock_direction() {
        let center = dvec2(400.0, 300.0);
        let circles = thought_tail(center, time_to_angle(6, 0), 130.0, 30.0);
        for circle in &circles {
            // 6 o'clock points straight down
            assert_relative_eq!(circle.center.x, 400.0, epsilon = 1e-9);
            assert!(circle.center.y > 300.0 + 130.0);
        }
    }
}
