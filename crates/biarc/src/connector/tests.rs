use super::*;
use crate::planar::{cross, dot, Arc, Complex2, Turn};
use nalgebra::vector;
use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};
use proptest::strategy::Strategy as PropStrategy;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI, TAU};

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::new(vector![x0, y0], vector![x1, y1])
}

/// ((0,0) → (1,0)) and ((2,1) → (2,2)).
fn right_angle() -> (Segment, Segment) {
    (seg(0.0, 0.0, 1.0, 0.0), seg(2.0, 1.0, 2.0, 2.0))
}

/// Angles at which travel enters and leaves `arc`.
fn travel_angles(arc: &Arc, turn: Turn) -> (f64, f64) {
    match turn {
        Turn::Left => (arc.start_angle, arc.end_angle),
        Turn::Right => (arc.end_angle, arc.start_angle),
    }
}

/// Unit direction of travel at angle `theta` on a circle.
fn heading(theta: f64, turn: Turn) -> Vec2 {
    let radial = vector![theta.cos(), theta.sin()];
    match turn {
        Turn::Left => radial.rot90(),
        Turn::Right => -radial.rot90(),
    }
}

/// First way in which `c` fails to join `seg0` to `seg1` with two tangent
/// arcs, if any. Distances are measured against `tol` times the size of the
/// configuration; headings against `tol` itself.
fn tangent_arc_defect(
    seg0: &Segment,
    seg1: &Segment,
    c: &Connector,
    tol: f64,
) -> Option<&'static str> {
    let (p0, p1, x) = (seg0.end, seg1.start, c.meeting_point);
    let (d0, d1) = (seg0.direction(), seg1.direction());
    let (a0, a1) = (c.arc0, c.arc1);
    let scale = 1.0 + a0.radius + a1.radius + p0.norm() + p1.norm();
    let eps = tol * scale;

    if !(a0.radius >= 0.0 && a1.radius >= 0.0) {
        return Some("negative radius");
    }
    // centers on the normals at the fixed endpoints, at radius distance
    if dot(a0.center - p0, d0).abs() > eps || dot(a1.center - p1, d1).abs() > eps {
        return Some("center off the endpoint normal");
    }
    if ((a0.center - p0).norm() - a0.radius).abs() > eps
        || ((a1.center - p1).norm() - a1.radius).abs() > eps
    {
        return Some("endpoint off its circle");
    }
    // meeting point on both circles, centers collinear with it
    if ((a0.center - x).norm() - a0.radius).abs() > eps
        || ((a1.center - x).norm() - a1.radius).abs() > eps
    {
        return Some("meeting point off a circle");
    }
    if cross(a0.center - x, a1.center - x).abs() > eps * scale {
        return Some("centers not collinear with the meeting point");
    }
    // stored endpoints follow the travel orientation
    let (from0, to0) = travel_angles(&a0, c.turn0);
    let (from1, to1) = travel_angles(&a1, c.turn1);
    if (a0.point_at(from0) - p0).norm() > eps || (a0.point_at(to0) - x).norm() > eps {
        return Some("arc 0 does not run from p0 to the meeting point");
    }
    if (a1.point_at(from1) - x).norm() > eps || (a1.point_at(to1) - p1).norm() > eps {
        return Some("arc 1 does not run from the meeting point to p1");
    }
    if (heading(from0, c.turn0) - d0).norm() > tol {
        return Some("arc 0 leaves p0 off segment 0's direction");
    }
    if (heading(to1, c.turn1) - d1).norm() > tol {
        return Some("arc 1 reaches p1 off segment 1's direction");
    }
    if (heading(to0, c.turn0) - heading(from1, c.turn1)).norm() > tol {
        return Some("kink at the meeting point");
    }
    for arc in [a0, a1] {
        if !(arc.sweep() >= 0.0 && arc.sweep() <= TAU + tol) {
            return Some("sweep outside [0, 2π]");
        }
    }
    None
}

fn assert_tangent_arcs(seg0: &Segment, seg1: &Segment, c: &Connector, tol: f64) {
    if let Some(defect) = tangent_arc_defect(seg0, seg1, c, tol) {
        panic!("{defect}: {c:?}");
    }
}

#[test]
fn right_angle_corner_quarter_circle() {
    let (s0, s1) = right_angle();
    let c = connect_with_defaults(&s0, &s1).expect("corner connects");
    let expected = vector![1.0 + FRAC_1_SQRT_2, 1.0 - FRAC_1_SQRT_2];
    assert!((c.meeting_point - expected).norm() < 1e-9);
    assert!(c.meeting_point.x > 1.0 && c.meeting_point.x < 2.0);
    assert!(c.meeting_point.y > 0.0 && c.meeting_point.y < 1.0);
    // both arcs lie on the unit circle around (1, 1)
    for arc in [c.arc0, c.arc1] {
        assert!((arc.center - vector![1.0, 1.0]).norm() < 1e-9);
        assert!((arc.radius - 1.0).abs() < 1e-9);
    }
    assert!((c.arc0.start_angle + FRAC_PI_2).abs() < 1e-9);
    assert!((c.arc0.end_angle + FRAC_PI_4).abs() < 1e-9);
    assert!((c.arc1.start_angle + FRAC_PI_4).abs() < 1e-9);
    assert!(c.arc1.end_angle.abs() < 1e-9);
    assert_eq!((c.turn0, c.turn1), (Turn::Left, Turn::Left));
    assert!((c.score - FRAC_PI_2).abs() < 1e-9);
    assert_tangent_arcs(&s0, &s1, &c, 1e-9);
}

#[test]
fn shortest_never_loses_to_other_roots() {
    let (s0, s1) = right_angle();
    let best = connect(&s0, &s1, ConnectOpts::new(true, 1.0)).unwrap();

    let all = candidates(&s0, &s1, ConnectOpts::new(false, 1.0)).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(
        all.iter().filter(|(s, _)| *s == Strategy::Algebraic).count(),
        2
    );
    let min_other = all
        .iter()
        .filter_map(|&(s, x)| evaluate(&s0, &s1, x, s, GeomCfg::default()))
        .map(|cand| cand.score)
        .fold(f64::INFINITY, f64::min);
    assert!(best.score <= min_other + 1e-9);

    let wide = connect(&s0, &s1, ConnectOpts::new(false, 1.0)).unwrap();
    assert!((wide.score - best.score).abs() < 1e-9);
    assert!((wide.meeting_point - best.meeting_point).norm() < 1e-9);
}

#[test]
fn shortest_keeps_one_algebraic_root() {
    let (s0, s1) = right_angle();
    let xs = candidates(&s0, &s1, ConnectOpts::default()).unwrap();
    assert_eq!(xs.len(), 2);
    assert_eq!(xs[0].0, Strategy::Algebraic);
    assert_eq!(xs[1].0, Strategy::Geometric);
}

#[test]
fn s_curve_between_parallel_segments() {
    // same direction, offset: linear fallback gives the midpoint and the
    // half-angle lines are parallel
    let s0 = seg(0.0, 0.0, 1.0, 0.0);
    let s1 = seg(3.0, 2.0, 4.0, 2.0);
    let xs = candidates(&s0, &s1, ConnectOpts::default()).unwrap();
    assert_eq!(xs.len(), 1);
    assert_eq!(xs[0].0, Strategy::Algebraic);

    let c = connect_with_defaults(&s0, &s1).unwrap();
    assert!((c.meeting_point - vector![2.0, 1.0]).norm() < 1e-12);
    assert!((c.arc0.center - vector![1.0, 1.0]).norm() < 1e-12);
    assert!((c.arc1.center - vector![3.0, 1.0]).norm() < 1e-12);
    assert!((c.arc0.radius - 1.0).abs() < 1e-12);
    assert!((c.arc1.radius - 1.0).abs() < 1e-12);
    assert_eq!((c.turn0, c.turn1), (Turn::Left, Turn::Right));
    assert!((c.arc0.start_angle + FRAC_PI_2).abs() < 1e-12);
    assert!(c.arc0.end_angle.abs() < 1e-12);
    assert!((c.arc1.start_angle - FRAC_PI_2).abs() < 1e-12);
    assert!((c.arc1.end_angle - PI).abs() < 1e-12);
    assert!((c.score - PI).abs() < 1e-12);
    assert_eq!(c.strategy, Strategy::Algebraic);
    assert_tangent_arcs(&s0, &s1, &c, 1e-12);
}

#[test]
fn polyline_runs_in_travel_order() {
    let s0 = seg(0.0, 0.0, 1.0, 0.0);
    let s1 = seg(3.0, 2.0, 4.0, 2.0);
    let c = connect_with_defaults(&s0, &s1).unwrap();
    let pts = c.polyline(4);
    assert_eq!(pts.len(), 9);
    assert!((pts[0] - s0.end).norm() < 1e-12);
    assert!((pts[4] - c.meeting_point).norm() < 1e-12);
    assert!((pts[8] - s1.start).norm() < 1e-12);
    // first half on circle 0, second half on circle 1
    for p in &pts[..5] {
        assert!(((p - c.arc0.center).norm() - 1.0).abs() < 1e-12);
    }
    for p in &pts[4..] {
        assert!(((p - c.arc1.center).norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn similarity_transform_is_respected() {
    // z ↦ α·z + β with |α| = 3
    let alpha = vector![3.0 * (PI / 6.0).cos(), 3.0 * (PI / 6.0).sin()];
    let beta = vector![5.0, -2.0];
    let map = |p: Vec2| alpha.cmul(&p) + beta;
    let (s0, s1) = right_angle();
    let t0 = Segment::new(map(s0.start), map(s0.end));
    let t1 = Segment::new(map(s1.start), map(s1.end));

    let base = connect_with_defaults(&s0, &s1).unwrap();
    let moved = connect_with_defaults(&t0, &t1).unwrap();
    assert!((moved.meeting_point - map(base.meeting_point)).norm() < 1e-9);
    assert!((moved.arc0.center - map(base.arc0.center)).norm() < 1e-9);
    assert!((moved.score - 3.0 * base.score).abs() < 1e-9);
    assert_tangent_arcs(&t0, &t1, &moved, 1e-9);
}

#[test]
fn collinear_contiguous_segments_have_no_connector() {
    let s0 = seg(0.0, 0.0, 1.0, 0.0);
    let s1 = seg(1.0, 0.0, 2.0, 0.0);
    let res = connect_with_defaults(&s0, &s1);
    assert!(matches!(
        res,
        Err(ConnectError::NoFeasibleConnector { candidates: 1 })
    ));
}

#[test]
fn degenerate_inputs_fail_fast() {
    let good = seg(0.0, 0.0, 1.0, 0.0);
    let point = seg(2.0, 2.0, 2.0, 2.0);
    assert_eq!(
        connect_with_defaults(&point, &good),
        Err(ConnectError::DegenerateSegment {
            index: 0,
            length: 0.0
        })
    );
    assert!(matches!(
        connect_with_defaults(&good, &point),
        Err(ConnectError::DegenerateSegment { index: 1, .. })
    ));
    let nan = seg(f64::NAN, 0.0, 1.0, 1.0);
    assert!(matches!(
        connect_with_defaults(&good, &nan),
        Err(ConnectError::DegenerateSegment { index: 1, .. })
    ));
    let (s0, s1) = right_angle();
    assert!(matches!(
        connect(&s0, &s1, ConnectOpts::new(true, f64::INFINITY)),
        Err(ConnectError::InvalidTension { .. })
    ));
    assert!(candidates(&s0, &s1, ConnectOpts::new(true, f64::NAN)).is_err());
}

#[test]
fn tension_moves_the_algebraic_meeting_point() {
    let (s0, s1) = right_angle();
    let (p0, p1) = (s0.end, s1.start);
    let roots = |t: f64| -> Vec<Vec2> {
        candidates(&s0, &s1, ConnectOpts::new(false, t))
            .unwrap()
            .into_iter()
            .filter(|(s, _)| *s == Strategy::Algebraic)
            .map(|(_, x)| x)
            .collect()
    };
    for t in [0.5, 1.0, 2.0, 3.5] {
        let xs = roots(t);
        assert_eq!(xs.len(), 2);
        for x in xs {
            let ratio = (x - p0).norm_squared() / (x - p1).norm_squared();
            assert!((ratio - t).abs() < 1e-9 * t.max(1.0), "t={t} ratio={ratio}");
        }
    }
    let near_one = roots(1.0);
    let near_two = roots(2.0);
    assert!((near_one[0] - near_two[0]).norm() > 1e-3);
    assert!((near_one[1] - near_two[1]).norm() > 1e-3);
}

#[test]
fn tension_moves_the_chosen_meeting_point() {
    // the algebraic root wins at both tensions; the geometric candidate
    // scores about three times worse here
    let s0 = seg(0.0, 0.0, 1.0, 0.0);
    let s1 = seg(4.0, 1.0, 5.0, 0.0);
    let (p0, p1) = (s0.end, s1.start);
    let at = |t: f64| connect(&s0, &s1, ConnectOpts::new(true, t)).unwrap();
    let (one, two) = (at(1.0), at(2.0));
    assert_eq!(one.strategy, Strategy::Algebraic);
    assert_eq!(two.strategy, Strategy::Algebraic);
    assert!((one.meeting_point - two.meeting_point).norm() > 0.1);
    for (t, c) in [(1.0, &one), (2.0, &two)] {
        let x = c.meeting_point;
        let ratio = (x - p0).norm_squared() / (x - p1).norm_squared();
        assert!((ratio - t).abs() < 1e-9, "t={t} ratio={ratio}");
        assert_tangent_arcs(&s0, &s1, c, 1e-9);
    }
}

#[test]
fn geometric_winner_holds_the_meeting_point() {
    // right angle: the geometric point does not depend on tension and wins
    // at every tension tried
    let (s0, s1) = right_angle();
    let expected = vector![1.0 + FRAC_1_SQRT_2, 1.0 - FRAC_1_SQRT_2];
    for t in [0.5, 1.0, 2.0, 3.0] {
        let c = connect(&s0, &s1, ConnectOpts::new(true, t)).unwrap();
        assert_eq!(c.strategy, Strategy::Geometric, "t={t}");
        assert!((c.meeting_point - expected).norm() < 1e-12, "t={t}");
    }

    // sharper turn, where the algebraic roots lose by a wide margin
    let s0 = seg(0.0, 0.0, 1.0, 0.0);
    let s1 = seg(3.0, 1.0, 2.0, 2.0);
    let base = connect(&s0, &s1, ConnectOpts::new(true, 1.0)).unwrap();
    assert_eq!(base.strategy, Strategy::Geometric);
    assert_tangent_arcs(&s0, &s1, &base, 1e-9);
    for t in [0.5, 2.0, 3.0] {
        let c = connect(&s0, &s1, ConnectOpts::new(true, t)).unwrap();
        assert_eq!(c.strategy, Strategy::Geometric, "t={t}");
        assert_eq!(c.meeting_point, base.meeting_point, "t={t}");
        assert_eq!(c.score, base.score, "t={t}");
    }
}

#[test]
fn repeated_calls_are_identical() {
    let s0 = seg(-1.0, 0.5, 0.3, 0.2);
    let s1 = seg(2.0, 1.7, 1.5, 3.0);
    let opts = ConnectOpts::new(false, 1.3);
    assert_eq!(connect(&s0, &s1, opts), connect(&s0, &s1, opts));
}

#[test]
fn error_messages() {
    let e = ConnectError::DegenerateSegment {
        index: 1,
        length: 0.0,
    };
    assert_eq!(e.to_string(), "segment 1 is degenerate (length 0)");
    let e = ConnectError::NoFeasibleConnector { candidates: 2 };
    assert!(e.to_string().starts_with("no feasible connector"));
    let (s0, s1) = right_angle();
    let mut raw = connect_with_defaults(&s0, &s1).unwrap();
    raw.arc1.radius = f64::NAN;
    assert!(!raw.is_finite());
    let e = ConnectError::InvalidGeometry(Box::new(raw));
    assert!(e.to_string().contains("NaN"));
}

#[test]
fn overflowing_radius_is_invalid_geometry() {
    // inputs are finite, but |c0 - x|² overflows at this scale
    let k = 1e153;
    let s0 = seg(0.0, 0.0, k, 0.0);
    let s1 = seg(4.0 * k, k, 5.0 * k, 0.0);
    match connect_with_defaults(&s0, &s1) {
        Err(ConnectError::InvalidGeometry(raw)) => {
            assert!(!raw.is_finite());
            assert!(raw.arc0.radius.is_infinite());
            assert!(raw.arc0.center.x.is_finite() && raw.arc0.center.y.is_finite());
            assert_eq!(raw.strategy, Strategy::Geometric);
        }
        other => panic!("expected InvalidGeometry, got {other:?}"),
    }
    // same shape, smaller scale: fine
    let k = 1e150;
    let s0 = seg(0.0, 0.0, k, 0.0);
    let s1 = seg(4.0 * k, k, 5.0 * k, 0.0);
    assert!(connect_with_defaults(&s0, &s1).unwrap().is_finite());
}

fn arb_segment() -> impl PropStrategy<Value = Segment> {
    (
        -10.0f64..10.0,
        -10.0f64..10.0,
        0.0f64..TAU,
        0.1f64..5.0,
    )
        .prop_map(|(x, y, a, len)| {
            let start = vector![x, y];
            Segment::new(start, start + vector![a.cos(), a.sin()] * len)
        })
}

proptest! {
    #[test]
    fn connector_invariants(
        s0 in arb_segment(),
        s1 in arb_segment(),
        shortest in any::<bool>(),
        tension in 0.2f64..5.0,
    ) {
        let opts = ConnectOpts::new(shortest, tension);
        match connect(&s0, &s1, opts) {
            Ok(c) => {
                prop_assert!(c.is_finite());
                for arc in [c.arc0, c.arc1] {
                    prop_assert!(arc.radius >= 0.0);
                    prop_assert!(arc.sweep() >= 0.0);
                    prop_assert!(arc.sweep() <= TAU + 1e-12);
                }
                prop_assert_eq!(c.score, c.arc0.length() + c.arc1.length());
                let defect = tangent_arc_defect(&s0, &s1, &c, 1e-6);
                prop_assert!(defect.is_none(), "{:?}: {:?}", defect, c);
                prop_assert_eq!(connect(&s0, &s1, opts), Ok(c));
            }
            Err(e) => {
                let is_degenerate = matches!(e, ConnectError::DegenerateSegment { .. }
                    | ConnectError::InvalidTension { .. });
                prop_assert!(!is_degenerate);
            }
        }
    }
}
