// Lattice -> plane mapping. Plane y grows downward (screen space), so +v points up.

use serde::{Deserialize, Serialize};

use crate::algorithms::topology::inc;
use crate::model::{GridEdge, GridVertex, Side};

/// sin(60°), the row height of the lattice.
pub const ROOT3_2: f64 = 0.866_025_403_784_438_6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[inline]
pub fn vertex_position(p: GridVertex) -> Point {
    let (u, v) = (p.u as f64, p.v as f64);
    Point { x: u + 0.5 * v, y: -ROOT3_2 * v }
}

/// Start point of the rendered segment. E edges hang from their upper endpoint.
#[inline]
pub fn edge_anchor(e: GridEdge) -> Point {
    match e.side {
        Side::E => vertex_position(GridVertex::new(e.u, inc(e.v))),
        Side::W | Side::S => vertex_position(e.cell()),
    }
}

#[inline]
pub fn edge_angle(e: GridEdge) -> f64 { e.side.angle() }

pub fn edge_midpoint(e: GridEdge) -> Point {
    let [a, b] = crate::algorithms::topology::endpoints(e);
    let (pa, pb) = (vertex_position(a), vertex_position(b));
    Point { x: 0.5 * (pa.x + pb.x), y: 0.5 * (pa.y + pb.y) }
}

#[inline]
pub fn scaled(p: Point, scale: f64) -> Point { Point { x: p.x * scale, y: p.y * scale } }

/// Point reached by walking `len` from `p` along `angle_deg` (clockwise, y down).
pub fn advance(p: Point, angle_deg: f64, len: f64) -> Point {
    let r = angle_deg.to_radians();
    Point { x: p.x + len * r.cos(), y: p.y + len * r.sin() }
}
