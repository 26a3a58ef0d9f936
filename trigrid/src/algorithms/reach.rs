//! Reachability over placed ("open") edges.
//!
//! Walks never cross the same edge twice, but may enter a vertex again through
//! a different open edge. Under that rule every vertex connected to `start` is
//! reachable, and `start` itself is reached again exactly when one of its open
//! edges lies on a cycle. Both facts are checked with worklist searches, so the
//! cost is linear in the size of the start's component.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use tracing::trace;

use crate::algorithms::topology::{endpoints, other_end, protrudes};
use crate::model::{GridEdge, GridVertex};

/// Read-only view of a set of open edges.
pub trait EdgeSet {
    fn contains_edge(&self, e: &GridEdge) -> bool;
    fn edge_count(&self) -> usize;
    fn each_edge(&self) -> impl Iterator<Item = GridEdge> + '_;
}

impl<S: BuildHasher> EdgeSet for HashSet<GridEdge, S> {
    fn contains_edge(&self, e: &GridEdge) -> bool { self.contains(e) }
    fn edge_count(&self) -> usize { self.len() }
    fn each_edge(&self) -> impl Iterator<Item = GridEdge> + '_ { self.iter().copied() }
}

impl EdgeSet for BTreeSet<GridEdge> {
    fn contains_edge(&self, e: &GridEdge) -> bool { self.contains(e) }
    fn edge_count(&self) -> usize { self.len() }
    fn each_edge(&self) -> impl Iterator<Item = GridEdge> + '_ { self.iter().copied() }
}

/// Vertices reachable from `start` by one or more crossings of open edges.
///
/// `start` itself is only included when a closed trail leads back to it.
pub fn reachable_from<S: EdgeSet + ?Sized>(start: GridVertex, open: &S) -> BTreeSet<GridVertex> {
    if open.edge_count() == 0 {
        return BTreeSet::new();
    }
    let mut out: BTreeSet<GridVertex> = walk(start, open, None, None).into_iter().collect();
    out.remove(&start);
    if on_cycle(start, open) {
        out.insert(start);
    }
    trace!(%start, open = open.edge_count(), reached = out.len(), "reach");
    out
}

pub fn is_reachable<S: EdgeSet + ?Sized>(start: GridVertex, target: GridVertex, open: &S) -> bool {
    reachable_from(start, open).contains(&target)
}

/// True when some open edge at `p` is not a bridge.
pub fn on_cycle<S: EdgeSet + ?Sized>(p: GridVertex, open: &S) -> bool {
    protrudes(p).into_iter().filter(|e| open.contains_edge(e)).any(|e| {
        other_end(e, p).is_some_and(|far| walk(far, open, Some(e), Some(p)).contains(&p))
    })
}

/// Worklist search from `from` over open edges, never crossing `skip`.
/// Stops as soon as `until` is seen.
fn walk<S: EdgeSet + ?Sized>(
    from: GridVertex,
    open: &S,
    skip: Option<GridEdge>,
    until: Option<GridVertex>,
) -> HashSet<GridVertex> {
    let mut seen = HashSet::new();
    seen.insert(from);
    let mut todo = vec![from];
    while let Some(p) = todo.pop() {
        for e in protrudes(p) {
            if Some(e) == skip || !open.contains_edge(&e) {
                continue;
            }
            let Some(q) = other_end(e, p) else { continue };
            if seen.insert(q) {
                if Some(q) == until {
                    return seen;
                }
                todo.push(q);
            }
        }
    }
    seen
}

/// All vertices touched by at least one open edge.
pub fn touched_vertices<S: EdgeSet + ?Sized>(open: &S) -> BTreeSet<GridVertex> {
    open.each_edge().flat_map(endpoints).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Side;

    fn set(edges: &[GridEdge]) -> BTreeSet<GridEdge> {
        edges.iter().copied().collect()
    }

    fn verts(vs: &[(i32, i32)]) -> BTreeSet<GridVertex> {
        vs.iter().map(|&(u, v)| GridVertex::new(u, v)).collect()
    }

    #[test]
    fn empty_open_set_reaches_nothing() {
        let open: BTreeSet<GridEdge> = BTreeSet::new();
        assert!(reachable_from(GridVertex::new(3, 3), &open).is_empty());
    }

    #[test]
    fn single_south_edge() {
        let open = set(&[GridEdge::new(0, 0, Side::S)]);
        assert_eq!(reachable_from(GridVertex::new(0, 0), &open), verts(&[(1, 0)]));
        // and back the other way
        assert_eq!(reachable_from(GridVertex::new(1, 0), &open), verts(&[(0, 0)]));
    }

    #[test]
    fn path_excludes_start() {
        let open = set(&[GridEdge::new(0, 0, Side::S), GridEdge::new(1, 0, Side::S)]);
        assert_eq!(reachable_from(GridVertex::new(0, 0), &open), verts(&[(1, 0), (2, 0)]));
        assert_eq!(reachable_from(GridVertex::new(1, 0), &open), verts(&[(0, 0), (2, 0)]));
    }

    #[test]
    fn triangle_returns_to_start() {
        // (0,0) -S- (1,0) -E(0,0)- (0,1) -W(0,0)- (0,0)
        let open = set(&[
            GridEdge::new(0, 0, Side::S),
            GridEdge::new(0, 0, Side::E),
            GridEdge::new(0, 0, Side::W),
        ]);
        assert_eq!(
            reachable_from(GridVertex::new(0, 0), &open),
            verts(&[(0, 0), (1, 0), (0, 1)])
        );
    }

    #[test]
    fn dangling_start_off_a_cycle_is_not_revisited() {
        let open = set(&[
            GridEdge::new(0, 0, Side::S),
            GridEdge::new(0, 0, Side::E),
            GridEdge::new(0, 0, Side::W),
            GridEdge::new(-1, 0, Side::S),
        ]);
        let got = reachable_from(GridVertex::new(-1, 0), &open);
        assert_eq!(got, verts(&[(0, 0), (1, 0), (0, 1)]));
    }

    #[test]
    fn disconnected_edge_is_ignored() {
        let open = set(&[GridEdge::new(0, 0, Side::S), GridEdge::new(5, 5, Side::W)]);
        assert_eq!(reachable_from(GridVertex::new(0, 0), &open), verts(&[(1, 0)]));
        assert!(reachable_from(GridVertex::new(9, 9), &open).is_empty());
    }

    #[test]
    fn bridge_start_between_path_and_cluster() {
        // (-1,0) -S- (0,0) -S- (1,0), then a strip of fused triangles to the right.
        let mut edges = vec![GridEdge::new(-1, 0, Side::S), GridEdge::new(0, 0, Side::S)];
        for u in 1..40 {
            edges.push(GridEdge::new(u, 0, Side::S));
            edges.push(GridEdge::new(u, 0, Side::W));
            edges.push(GridEdge::new(u, 0, Side::E));
        }
        let open = set(&edges);
        let begun = std::time::Instant::now();
        let got = reachable_from(GridVertex::new(0, 0), &open);
        assert!(begun.elapsed() < std::time::Duration::from_secs(1));
        let mut want: BTreeSet<_> = touched_vertices(&open);
        want.remove(&GridVertex::new(0, 0));
        assert_eq!(got, want);
        assert!(!on_cycle(GridVertex::new(0, 0), &open));
        assert!(on_cycle(GridVertex::new(2, 0), &open));
    }

    #[test]
    fn dense_block_with_bridged_start() {
        let mut edges = vec![GridEdge::new(-2, 0, Side::S), GridEdge::new(-1, 0, Side::S)];
        for u in 0..6 {
            for v in 0..6 {
                for side in Side::ALL {
                    edges.push(GridEdge::new(u, v, side));
                }
            }
        }
        let open = set(&edges);
        let got = reachable_from(GridVertex::new(-1, 0), &open);
        assert!(!got.contains(&GridVertex::new(-1, 0)));
        assert!(got.contains(&GridVertex::new(-2, 0)));
        assert!(got.contains(&GridVertex::new(6, 0)));
        assert_eq!(got.len(), touched_vertices(&open).len() - 1);
    }

    #[test]
    fn works_over_hash_sets() {
        let open: HashSet<GridEdge> = [GridEdge::new(0, 0, Side::W)].into_iter().collect();
        assert!(is_reachable(GridVertex::new(0, 0), GridVertex::new(0, 1), &open));
        assert!(!is_reachable(GridVertex::new(0, 0), GridVertex::new(1, 0), &open));
        assert_eq!(touched_vertices(&open), verts(&[(0, 0), (0, 1)]));
    }
}
