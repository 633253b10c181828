//! Serializable views of library types (the library itself stays serde-free).

use biarc::planar::{Arc, Segment, Turn, Vec2};
use biarc::{ConnectError, Connector};
use serde::{Deserialize, Serialize};

/// `x0,y0,x1,y1` as four numbers.
pub type SegmentRepr = [f64; 4];

pub fn segment_from_repr(r: SegmentRepr) -> Segment {
    Segment::new(Vec2::new(r[0], r[1]), Vec2::new(r[2], r[3]))
}

/// Parse `"x0,y0,x1,y1"`.
pub fn parse_segment(s: &str) -> Result<SegmentRepr, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid number in {s:?}: {e}"))?;
    match parts.as_slice() {
        &[x0, y0, x1, y1] => Ok([x0, y0, x1, y1]),
        _ => Err(format!("expected x0,y0,x1,y1, got {} value(s)", parts.len())),
    }
}

/// One input record of `batch`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PairIn {
    pub from: SegmentRepr,
    pub to: SegmentRepr,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArcOut {
    pub center: [f64; 2],
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub turn: &'static str,
}

impl ArcOut {
    fn new(arc: &Arc, turn: Turn) -> Self {
        Self {
            center: [arc.center.x, arc.center.y],
            radius: arc.radius,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            turn: match turn {
                Turn::Left => "left",
                Turn::Right => "right",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectorOut {
    pub arc0: ArcOut,
    pub arc1: ArcOut,
    pub meeting_point: [f64; 2],
    pub score: f64,
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<Vec<[f64; 2]>>,
}

impl ConnectorOut {
    pub fn new(c: &Connector, samples: Option<usize>) -> Self {
        Self {
            arc0: ArcOut::new(&c.arc0, c.turn0),
            arc1: ArcOut::new(&c.arc1, c.turn1),
            meeting_point: [c.meeting_point.x, c.meeting_point.y],
            score: c.score,
            strategy: format!("{:?}", c.strategy).to_lowercase(),
            polyline: samples.map(|n| c.polyline(n).iter().map(|p| [p.x, p.y]).collect()),
        }
    }
}

/// One output record of `batch`: either `ok` or `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct PairOut {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<ConnectorOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PairOut {
    pub fn new(index: usize, res: Result<Connector, ConnectError>) -> Self {
        match res {
            Ok(c) => Self {
                index,
                ok: Some(ConnectorOut::new(&c, None)),
                error: None,
            },
            Err(e) => Self {
                index,
                ok: None,
                error: Some(e.to_string()),
            },
        }
    }
}
