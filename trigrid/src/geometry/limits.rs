// Centralized ingestion limits to harden against untrusted input (JSON config, JS calls)

// Open-edge cap, enforced on imported seeds and on every expand
pub const MAX_OPEN_EDGES: usize = 4_096;

// Coordinate bounds for untrusted input; keeps imported sessions away from the i32 wrap seam
pub const COORD_MIN: i32 = -1_000_000;
pub const COORD_MAX: i32 = 1_000_000;

// Display scale (px per lattice unit)
pub const SCALE_MAX: f64 = 10_000.0;

#[inline]
pub fn in_coord_bounds(c: i32) -> bool { (COORD_MIN..=COORD_MAX).contains(&c) }

#[inline]
pub fn in_scale_bounds(s: f64) -> bool { s.is_finite() && s > 0.0 && s <= SCALE_MAX }
