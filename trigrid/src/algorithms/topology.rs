// Structural adjacency on the lattice. Closed-form only, no tables.
//
// Unit steps wrap at the i32 extremes, so the lattice closes into a 2^32 torus
// there instead of overflowing; every incidence identity still holds.

use crate::model::{GridEdge, GridVertex, Side};

#[inline] pub(crate) fn inc(c: i32) -> i32 { c.wrapping_add(1) }
#[inline] pub(crate) fn dec(c: i32) -> i32 { c.wrapping_sub(1) }

/// The two vertices joined by `e`.
#[inline]
pub fn endpoints(e: GridEdge) -> [GridVertex; 2] {
    let GridEdge { u, v, side } = e;
    match side {
        Side::W => [GridVertex::new(u, v), GridVertex::new(u, inc(v))],
        Side::E => [GridVertex::new(u, inc(v)), GridVertex::new(inc(u), v)],
        Side::S => [GridVertex::new(u, v), GridVertex::new(inc(u), v)],
    }
}

/// The six edges touching `p`, in fixed order.
///
/// Two are owned by `p`'s own cell (W, S); the other four belong to the cells
/// below and to the left, whose W/E/S segments end at `p`.
pub fn protrudes(p: GridVertex) -> [GridEdge; 6] {
    let GridVertex { u, v } = p;
    [
        GridEdge::new(u, v, Side::W),
        GridEdge::new(u, v, Side::S),
        GridEdge::new(u, dec(v), Side::E),
        GridEdge::new(u, dec(v), Side::W),
        GridEdge::new(dec(u), v, Side::S),
        GridEdge::new(dec(u), v, Side::E),
    ]
}

/// The six lattice neighbours of `p`, clockwise on screen starting up-right.
pub fn adjacent(p: GridVertex) -> [GridVertex; 6] {
    let GridVertex { u, v } = p;
    [
        GridVertex::new(u, inc(v)),
        GridVertex::new(inc(u), v),
        GridVertex::new(inc(u), dec(v)),
        GridVertex::new(u, dec(v)),
        GridVertex::new(dec(u), v),
        GridVertex::new(dec(u), inc(v)),
    ]
}

#[inline]
pub fn is_incident(e: GridEdge, p: GridVertex) -> bool {
    endpoints(e).contains(&p)
}

/// Far endpoint of `e` seen from `p`, or `None` if `e` does not touch `p`.
#[inline]
pub fn other_end(e: GridEdge, p: GridVertex) -> Option<GridVertex> {
    match endpoints(e) {
        [a, b] if a == p => Some(b),
        [a, b] if b == p => Some(a),
        _ => None,
    }
}

/// The edge joining two neighbouring vertices.
pub fn edge_between(a: GridVertex, b: GridVertex) -> Option<GridEdge> {
    protrudes(a).into_iter().find(|e| other_end(*e, a) == Some(b))
}
