//! Tangent-arc connectors between directed segments.
//!
//! Given two directed segments, build two circular arcs that leave the first
//! segment's end along its direction, arrive at the second segment's start
//! along its direction, and meet with a common tangent in between.
//!
//! Layout
//! - `planar`: `Vec2` with complex-style products, line intersection, and
//!   the `Segment`/`Arc`/`Turn` value types.
//! - `connector`: candidate generation, arc evaluation and selection.
//! - `sample`: replayable random segment pairs for benches and sweeps.
//!
//! The crate is pure: no I/O, no global state. Diagnostics are emitted
//! through `tracing`; callers decide whether a subscriber is installed.

pub mod connector;
pub mod planar;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use connector::{connect, connect_with_defaults, ConnectError, ConnectOpts, Connector};
pub use planar::{Arc, GeomCfg, Segment, Turn, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::connector::{
        candidates, connect, connect_with_defaults, evaluate, Candidate, ConnectError, ConnectOpts,
        Connector, Strategy,
    };
    pub use crate::planar::{
        cross, dot, intersect_lines, intersect_lines_default, normalize, Arc, Complex2, GeomCfg,
        Segment, Turn, Vec2,
    };
    pub use crate::sample::{draw_segment_pair, draw_segment_pairs, PairCfg, ReplayToken};
}
