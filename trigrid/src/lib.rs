pub mod config;
pub mod error;
pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod position;
}
pub mod algorithms {
    pub mod reach;
    pub mod topology;
}
mod json;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use algorithms::reach::reachable_from;
use algorithms::topology::protrudes;
use geometry::limits::MAX_OPEN_EDGES;
pub use config::{SessionConfig, Validation};
pub use error::{Error, InvalidMove, Result};
pub use geometry::position::Point;
pub use model::{GridEdge, GridVertex, Side, ORIGIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Expand,
    Move,
    Resupply,
}

impl MoveKind {
    pub const ALL: [MoveKind; 3] = [MoveKind::Expand, MoveKind::Move, MoveKind::Resupply];

    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::Expand => "expand",
            MoveKind::Move => "move",
            MoveKind::Resupply => "resupply",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("move kind must be one of expand, move, resupply (got {0:?})")]
pub struct ParseMoveKindError(pub String);

impl FromStr for MoveKind {
    type Err = ParseMoveKindError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "expand" => Ok(MoveKind::Expand),
            "move" => Ok(MoveKind::Move),
            "resupply" => Ok(MoveKind::Resupply),
            other => Err(ParseMoveKindError(other.to_string())),
        }
    }
}

/// A user action. Serialises as `{ "kind": "expand", "payload": {"u":0,"v":0,"s":"W"} }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum Move {
    /// Place a protruding edge.
    Expand(GridEdge),
    /// Relocate to a reachable vertex.
    Move(GridVertex),
    /// Take an open edge back.
    Resupply(GridEdge),
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Expand(_) => MoveKind::Expand,
            Move::Move(_) => MoveKind::Move,
            Move::Resupply(_) => MoveKind::Resupply,
        }
    }
}

/// Immutable session snapshot: the open edges and the occupied vertex.
///
/// Transitions never touch `self`; each accepted move yields a new snapshot and
/// a rejected one leaves the caller holding the old, still valid, value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    open: BTreeSet<GridEdge>,
    node: GridVertex,
    validation: Validation,
}

impl Default for Session {
    fn default() -> Self { Session::new() }
}

impl Session {
    /// Origin-occupied session with the single seed edge (0,0,S).
    pub fn new() -> Session {
        Session::with_config(&SessionConfig::default())
    }

    pub fn with_config(cfg: &SessionConfig) -> Session {
        Session::from_parts(cfg.seed.iter().copied(), cfg.origin, cfg.validation)
    }

    pub fn from_parts(
        open: impl IntoIterator<Item = GridEdge>,
        node: GridVertex,
        validation: Validation,
    ) -> Session {
        Session { open: open.into_iter().collect(), node, validation }
    }

    pub fn node(&self) -> GridVertex { self.node }
    pub fn open_edges(&self) -> &BTreeSet<GridEdge> { &self.open }
    pub fn is_open(&self, e: &GridEdge) -> bool { self.open.contains(e) }
    pub fn validation(&self) -> Validation { self.validation }

    // Candidate sets offered to the presentation layer

    /// Protruding edges of the occupied vertex not yet open, in protrude order.
    pub fn expand_candidates(&self) -> Vec<GridEdge> {
        protrudes(self.node).into_iter().filter(|e| !self.open.contains(e)).collect()
    }

    pub fn move_candidates(&self) -> BTreeSet<GridVertex> {
        reachable_from(self.node, &self.open)
    }

    pub fn resupply_candidates(&self) -> Vec<GridEdge> {
        self.open.iter().copied().collect()
    }

    pub fn candidates(&self, kind: MoveKind) -> Vec<Move> {
        match kind {
            MoveKind::Expand => self.expand_candidates().into_iter().map(Move::Expand).collect(),
            MoveKind::Move => self.move_candidates().into_iter().map(Move::Move).collect(),
            MoveKind::Resupply => self.open.iter().copied().map(Move::Resupply).collect(),
        }
    }

    // Reducers

    pub fn apply(&self, mv: &Move) -> std::result::Result<Session, InvalidMove> {
        let res = match *mv {
            Move::Expand(e) => self.expand(e),
            Move::Move(p) => self.move_to(p),
            Move::Resupply(e) => self.resupply(e),
        };
        match &res {
            Ok(next) => debug!(?mv, node = %next.node, open = next.open.len(), "move applied"),
            Err(err) => warn!(?mv, node = %self.node, %err, "move rejected"),
        }
        res
    }

    pub fn expand(&self, edge: GridEdge) -> std::result::Result<Session, InvalidMove> {
        if self.strict() {
            if !protrudes(self.node).contains(&edge) {
                return Err(InvalidMove::NotProtruding { edge, node: self.node });
            }
            if self.open.contains(&edge) {
                return Err(InvalidMove::AlreadyOpen(edge));
            }
        }
        // Enforced in trusted mode too.
        if self.open.len() >= MAX_OPEN_EDGES && !self.open.contains(&edge) {
            return Err(InvalidMove::OpenLimit { max: MAX_OPEN_EDGES });
        }
        let mut next = self.clone();
        next.open.insert(edge);
        Ok(next)
    }

    pub fn move_to(&self, target: GridVertex) -> std::result::Result<Session, InvalidMove> {
        if self.strict() && !reachable_from(self.node, &self.open).contains(&target) {
            return Err(InvalidMove::Unreachable { target, node: self.node });
        }
        Ok(Session { node: target, ..self.clone() })
    }

    pub fn resupply(&self, edge: GridEdge) -> std::result::Result<Session, InvalidMove> {
        if self.strict() && !self.open.contains(&edge) {
            return Err(InvalidMove::NotOpen(edge));
        }
        let mut next = self.clone();
        next.open.remove(&edge);
        Ok(next)
    }

    /// `{ "node": {u,v}, "open": [{u,v,s}, ..] }`, edges in sorted order.
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    fn strict(&self) -> bool { self.validation == Validation::Strict }
}
