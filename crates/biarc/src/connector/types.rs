//! Options, results and errors of the connector.

use std::fmt;

use crate::planar::{Arc, GeomCfg, Turn, Vec2};

/// Connector options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectOpts {
    /// Keep only the `+` root of the algebraic quadratic.
    pub shortest: bool,
    /// Weight of segment 1 against segment 0 in the algebraic family;
    /// for positive values the meeting point satisfies `|x − p0|² = tension·|x − p1|²`.
    pub tension: f64,
    pub geom: GeomCfg,
}

impl ConnectOpts {
    #[inline]
    pub fn new(shortest: bool, tension: f64) -> Self {
        Self {
            shortest,
            tension,
            ..Self::default()
        }
    }
}

impl Default for ConnectOpts {
    fn default() -> Self {
        Self {
            shortest: true,
            tension: 1.0,
            geom: GeomCfg::default(),
        }
    }
}

/// Candidate producers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Roots of `d1·(x − p0)² = t·d0·(x − p1)²`.
    Algebraic,
    /// Intersection of the half-angle directions towards the chord.
    Geometric,
}

/// One evaluated meeting point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub meeting_point: Vec2,
    pub arc0: Arc,
    pub arc1: Arc,
    pub turn0: Turn,
    pub turn1: Turn,
    /// Combined arc length.
    pub score: f64,
    pub strategy: Strategy,
}

/// Two tangent arcs joined at `meeting_point`.
///
/// `arc0` runs between segment 0's end and the meeting point, `arc1` between
/// the meeting point and segment 1's start. Both are stored counter-clockwise;
/// `turn0`/`turn1` say whether travel follows (`Left`) or opposes (`Right`)
/// that sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub arc0: Arc,
    pub arc1: Arc,
    pub meeting_point: Vec2,
    pub turn0: Turn,
    pub turn1: Turn,
    pub score: f64,
    pub strategy: Strategy,
}

impl Connector {
    pub fn is_finite(&self) -> bool {
        self.arc0.is_finite()
            && self.arc1.is_finite()
            && self.meeting_point.x.is_finite()
            && self.meeting_point.y.is_finite()
    }

    /// Points in travel order: segment 0's end, the meeting point, segment 1's start.
    ///
    /// Each arc contributes `segments_per_arc + 1` samples; the shared meeting
    /// point appears once.
    pub fn polyline(&self, segments_per_arc: usize) -> Vec<Vec2> {
        let mut pts = self.arc0.sample(segments_per_arc, self.turn0 == Turn::Right);
        let tail = self.arc1.sample(segments_per_arc, self.turn1 == Turn::Right);
        pts.extend(tail.into_iter().skip(1));
        pts
    }
}

impl From<Candidate> for Connector {
    fn from(c: Candidate) -> Self {
        Self {
            arc0: c.arc0,
            arc1: c.arc1,
            meeting_point: c.meeting_point,
            turn0: c.turn0,
            turn1: c.turn1,
            score: c.score,
            strategy: c.strategy,
        }
    }
}

/// Errors surfaced by the connector.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectError {
    /// Segment `index` (0 or 1) has zero or non-finite length.
    DegenerateSegment { index: usize, length: f64 },
    /// Tension must be finite.
    InvalidTension { tension: f64 },
    /// No candidate produced both tangent circles.
    NoFeasibleConnector { candidates: usize },
    /// The winning candidate carries non-finite values; kept for inspection.
    ///
    /// Finite inputs reach this when intermediate squares overflow, e.g.
    /// coordinates near `1e153` giving a radius beyond `f64::MAX.sqrt()`.
    InvalidGeometry(Box<Connector>),
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSegment { index, length } => {
                write!(f, "segment {index} is degenerate (length {length})")
            }
            Self::InvalidTension { tension } => write!(f, "tension must be finite, got {tension}"),
            Self::NoFeasibleConnector { candidates } => write!(
                f,
                "no feasible connector ({candidates} candidate(s), none with both tangent circles)"
            ),
            Self::InvalidGeometry(raw) => write!(
                f,
                "connector has non-finite values (radii {}, {})",
                raw.arc0.radius, raw.arc1.radius
            ),
        }
    }
}

impl std::error::Error for ConnectError {}
