use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::geometry::limits::{in_coord_bounds, MAX_OPEN_EDGES};
use crate::model::{GridEdge, GridVertex, Side, ORIGIN};

/// How reducers treat a move outside its candidate set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Reject with `InvalidMove`; the snapshot is left untouched.
    #[default]
    Strict,
    /// Apply as given. Callers must only offer candidates.
    Trusted,
}

/// Startup parameters for a session.
///
/// ```json
/// { "seed": [{"u":0,"v":0,"s":"S"}], "origin": {"u":0,"v":0}, "validation": "strict" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub seed: Vec<GridEdge>,
    pub origin: GridVertex,
    pub validation: Validation,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            seed: vec![GridEdge::new(0, 0, Side::S)],
            origin: ORIGIN,
            validation: Validation::Strict,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: SessionConfig = serde_json::from_str(s)?;
        cfg.check()?;
        Ok(cfg)
    }

    pub fn from_json_value(v: Value) -> Result<Self> {
        let cfg: SessionConfig = serde_json::from_value(v)?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Enforce ingestion limits.
    pub fn check(&self) -> Result<()> {
        if self.seed.len() > MAX_OPEN_EDGES {
            return Err(Error::Limit { what: "seed edges", max: MAX_OPEN_EDGES, got: self.seed.len() });
        }
        check_coord("origin.u", self.origin.u)?;
        check_coord("origin.v", self.origin.v)?;
        for e in &self.seed {
            check_coord("seed.u", e.u)?;
            check_coord("seed.v", e.v)?;
        }
        Ok(())
    }
}

fn check_coord(what: &'static str, c: i32) -> Result<()> {
    if in_coord_bounds(c) {
        Ok(())
    } else {
        Err(Error::OutOfBounds { what, got: c as i64 })
    }
}
