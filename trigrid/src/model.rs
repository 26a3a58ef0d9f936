use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three edge orientations owned by a lattice cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    W = 0,
    E = 1,
    S = 2,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::W, Side::E, Side::S];

    /// Render angle in degrees (screen space, clockwise positive).
    pub fn angle(self) -> f64 {
        match self {
            Side::S => 0.0,
            Side::E => 60.0,
            Side::W => -60.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::W => "W",
            Side::E => "E",
            Side::S => "S",
        }
    }

    pub fn from_u8(b: u8) -> Option<Side> {
        match b {
            0 => Some(Side::W),
            1 => Some(Side::E),
            2 => Some(Side::S),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("side must be one of W, E, S (got {0:?})")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(Side::W),
            "E" => Ok(Side::E),
            "S" => Ok(Side::S),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}

/// Lattice point in axial coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridVertex {
    pub u: i32,
    pub v: i32,
}

pub const ORIGIN: GridVertex = GridVertex { u: 0, v: 0 };

impl GridVertex {
    pub const fn new(u: i32, v: i32) -> Self {
        GridVertex { u, v }
    }

    /// Collection key, e.g. `"2,-1"`.
    pub fn key(&self) -> String {
        format!("{},{}", self.u, self.v)
    }
}

impl fmt::Display for GridVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.u, self.v)
    }
}

/// Lattice segment addressed by its owning cell and orientation.
///
/// Serialises as `{ "u": .., "v": .., "s": "W" | "E" | "S" }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridEdge {
    pub u: i32,
    pub v: i32,
    #[serde(rename = "s")]
    pub side: Side,
}

impl GridEdge {
    pub const fn new(u: i32, v: i32, side: Side) -> Self {
        GridEdge { u, v, side }
    }

    /// Collection key, e.g. `"0,0,S"`.
    pub fn key(&self) -> String {
        format!("{},{},{}", self.u, self.v, self.side)
    }

    pub fn cell(&self) -> GridVertex {
        GridVertex::new(self.u, self.v)
    }
}

impl fmt::Display for GridEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}", self.u, self.v, self.side)
    }
}
