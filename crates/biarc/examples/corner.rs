//! Print the connector for a few hand-picked corners and a sampled batch.
//!
//! Usage:
//!   cargo run -p biarc --example corner
//!   cargo run -p biarc --example corner -- 50      (sampled pairs)

use biarc::planar::{Segment, Vec2};
use biarc::sample::{draw_segment_pairs, PairCfg, ReplayToken};
use biarc::{connect, ConnectOpts, Connector};

fn main() {
    let samples: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let corners = [
        (
            "right_angle",
            seg(0.0, 0.0, 1.0, 0.0),
            seg(2.0, 1.0, 2.0, 2.0),
        ),
        ("s_curve", seg(0.0, 0.0, 1.0, 0.0), seg(3.0, 2.0, 4.0, 2.0)),
        ("hairpin", seg(0.0, 0.0, 2.0, 0.0), seg(2.0, 1.0, 0.0, 1.0)),
        ("collinear", seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 2.0, 0.0)),
    ];
    for (name, s0, s1) in corners {
        match connect(&s0, &s1, ConnectOpts::default()) {
            Ok(c) => print_connector(name, &c),
            Err(e) => println!("{name}: error: {e}"),
        }
    }

    if samples > 0 {
        let pairs = draw_segment_pairs(&PairCfg::default(), ReplayToken::new(1, 0), samples);
        let mut ok = 0usize;
        let mut total_score = 0.0;
        for (s0, s1) in &pairs {
            if let Ok(c) = connect(s0, s1, ConnectOpts::default()) {
                ok += 1;
                total_score += c.score;
            }
        }
        println!(
            "sampled={samples} connected={ok} mean_score={:.6}",
            total_score / (ok.max(1) as f64)
        );
    }
}

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
}

fn print_connector(name: &str, c: &Connector) {
    println!(
        "{name}: meet=({:.6}, {:.6}) score={:.6} via {:?}",
        c.meeting_point.x, c.meeting_point.y, c.score, c.strategy
    );
    for (i, (arc, turn)) in [(c.arc0, c.turn0), (c.arc1, c.turn1)].iter().enumerate() {
        println!(
            "  arc{i}: center=({:.6}, {:.6}) r={:.6} angles=[{:.6}, {:.6}] turn={:?}",
            arc.center.x, arc.center.y, arc.radius, arc.start_angle, arc.end_angle, turn
        );
    }
}
