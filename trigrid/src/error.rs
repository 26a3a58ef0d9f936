//! Error types

use thiserror::Error;

use crate::model::{GridEdge, GridVertex};
use crate::MoveKind;

pub type Result<T> = std::result::Result<T, Error>;

/// A move whose payload lies outside the legal candidate set for its kind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("edge {edge} does not protrude from {node}")]
    NotProtruding { edge: GridEdge, node: GridVertex },

    #[error("edge {0} is already open")]
    AlreadyOpen(GridEdge),

    #[error("vertex {target} is not reachable from {node}")]
    Unreachable { target: GridVertex, node: GridVertex },

    #[error("edge {0} is not open")]
    NotOpen(GridEdge),

    #[error("open edge limit of {max} reached")]
    OpenLimit { max: usize },
}

impl InvalidMove {
    pub fn kind(&self) -> MoveKind {
        match self {
            InvalidMove::NotProtruding { .. }
            | InvalidMove::AlreadyOpen(_)
            | InvalidMove::OpenLimit { .. } => MoveKind::Expand,
            InvalidMove::Unreachable { .. } => MoveKind::Move,
            InvalidMove::NotOpen(_) => MoveKind::Resupply,
        }
    }

    /// Stable snake_case code for the JS boundary.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidMove::NotProtruding { .. } => "not_protruding",
            InvalidMove::AlreadyOpen(_) => "already_open",
            InvalidMove::Unreachable { .. } => "unreachable",
            InvalidMove::NotOpen(_) => "not_open",
            InvalidMove::OpenLimit { .. } => "open_limit",
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("too many {what}: {got} exceeds {max}")]
    Limit { what: &'static str, max: usize, got: usize },

    #[error("{what} out of bounds: {got}")]
    OutOfBounds { what: &'static str, got: i64 },
}
