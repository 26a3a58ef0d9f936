use crate::Session;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop::{arr_f32, arr_i32, arr_u8, new_obj, set_kv, to_js};
use trigrid::geometry::limits::{in_coord_bounds, in_scale_bounds, COORD_MAX, COORD_MIN, SCALE_MAX};
use trigrid::geometry::position::{edge_anchor, edge_angle, edge_midpoint, scaled, vertex_position};
use trigrid::{GridEdge, GridVertex, Move, MoveKind, Side};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn check_coord(param: &str, c: i32) -> Result<(), JsValue> {
    if in_coord_bounds(c) {
        Ok(())
    } else {
        Err(error::out_of_range(param, COORD_MIN as f64, COORD_MAX as f64, c as f64))
    }
}

fn vertex_arg(u: i32, v: i32) -> Result<GridVertex, JsValue> {
    check_coord("u", u)?;
    check_coord("v", v)?;
    Ok(GridVertex::new(u, v))
}

fn edge_arg(u: i32, v: i32, side: &str) -> Result<GridEdge, JsValue> {
    let p = vertex_arg(u, v)?;
    let s: Side = side.parse().map_err(|_| error::invalid_side(side))?;
    Ok(GridEdge::new(p.u, p.v, s))
}

fn move_in_bounds(mv: &Move) -> Result<(), JsValue> {
    match *mv {
        Move::Expand(e) | Move::Resupply(e) => vertex_arg(e.u, e.v).map(|_| ()),
        Move::Move(p) => vertex_arg(p.u, p.v).map(|_| ()),
    }
}

fn vertex_obj(p: GridVertex) -> JsValue {
    let pos = vertex_position(p);
    let o = new_obj();
    set_kv(&o, "u", &JsValue::from_f64(p.u as f64));
    set_kv(&o, "v", &JsValue::from_f64(p.v as f64));
    set_kv(&o, "x", &JsValue::from_f64(pos.x));
    set_kv(&o, "y", &JsValue::from_f64(pos.y));
    set_kv(&o, "key", &JsValue::from_str(&p.key()));
    o.into()
}

fn edge_obj(e: GridEdge) -> JsValue {
    let a = edge_anchor(e);
    let m = edge_midpoint(e);
    let o = new_obj();
    set_kv(&o, "u", &JsValue::from_f64(e.u as f64));
    set_kv(&o, "v", &JsValue::from_f64(e.v as f64));
    set_kv(&o, "s", &JsValue::from_str(e.side.as_str()));
    set_kv(&o, "x", &JsValue::from_f64(a.x));
    set_kv(&o, "y", &JsValue::from_f64(a.y));
    set_kv(&o, "angle", &JsValue::from_f64(edge_angle(e)));
    set_kv(&o, "mx", &JsValue::from_f64(m.x));
    set_kv(&o, "my", &JsValue::from_f64(m.y));
    set_kv(&o, "key", &JsValue::from_str(&e.key()));
    o.into()
}

/// `[x, y]` of a lattice vertex in plane units.
#[wasm_bindgen]
pub fn vertex_position_res(u: i32, v: i32) -> JsValue {
    match vertex_arg(u, v) {
        Ok(p) => {
            let pos = vertex_position(p);
            error::ok(to_js(&[pos.x, pos.y]))
        }
        Err(e) => e,
    }
}

/// `{ u, v, s, x, y, angle, mx, my, key }` for one edge.
#[wasm_bindgen]
pub fn edge_geometry_res(u: i32, v: i32, side: &str) -> JsValue {
    match edge_arg(u, v, side) {
        Ok(e) => error::ok(edge_obj(e)),
        Err(e) => e,
    }
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Session {
        crate::Session::rs_new()
    }
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the session with one built from `{ seed, origin, validation }`.
    pub fn from_config_res(&mut self, cfg: JsValue) -> JsValue {
        let val = match serde_wasm_bindgen::from_value::<serde_json::Value>(cfg) {
            Ok(v) => v,
            Err(e) => return error::err("json_parse", format!("{}", e), None),
        };
        match trigrid::SessionConfig::from_json_value(val) {
            Ok(c) => {
                self.replace(trigrid::Session::with_config(&c));
                error::ok(JsValue::from_f64(self.version as f64))
            }
            Err(e) => error::from_core(&e),
        }
    }

    // Snapshot reads
    pub fn node(&self) -> JsValue {
        vertex_obj(self.inner.node())
    }
    pub fn open_edges(&self) -> JsValue {
        let arr = js_sys::Array::new();
        for e in self.inner.open_edges() {
            arr.push(&edge_obj(*e));
        }
        arr.into()
    }
    pub fn reachable(&self) -> JsValue {
        let arr = js_sys::Array::new();
        for p in self.inner.move_candidates() {
            arr.push(&vertex_obj(p));
        }
        arr.into()
    }
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json_value())
    }

    /// Candidate actions for one move kind, as `{ kind, payload }` objects.
    pub fn candidates_res(&self, kind: &str) -> JsValue {
        match kind.parse::<MoveKind>() {
            Ok(k) => error::ok(to_js(&self.inner.candidates(k))),
            Err(_) => error::invalid_kind(kind),
        }
    }

    // Moves
    pub fn apply_res(&mut self, action: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<Move>(action) {
            Ok(mv) => self.apply_move(mv),
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
    pub fn expand_res(&mut self, u: i32, v: i32, side: &str) -> JsValue {
        match edge_arg(u, v, side) {
            Ok(e) => self.apply_move(Move::Expand(e)),
            Err(e) => e,
        }
    }
    pub fn move_to_res(&mut self, u: i32, v: i32) -> JsValue {
        match vertex_arg(u, v) {
            Ok(p) => self.apply_move(Move::Move(p)),
            Err(e) => e,
        }
    }
    pub fn resupply_res(&mut self, u: i32, v: i32, side: &str) -> JsValue {
        match edge_arg(u, v, side) {
            Ok(e) => self.apply_move(Move::Resupply(e)),
            Err(e) => e,
        }
    }

    // Typed arrays getters

    /// Move candidates: `{ us, vs, positions }`, positions interleaved x,y and scaled.
    pub fn get_vertex_data_res(&self, scale: f64) -> JsValue {
        if !in_scale_bounds(scale) {
            return error::out_of_range("scale", 0.0, SCALE_MAX, scale);
        }
        let mut us = Vec::new();
        let mut vs = Vec::new();
        let mut pos = Vec::new();
        for p in self.inner.move_candidates() {
            let xy = scaled(vertex_position(p), scale);
            us.push(p.u);
            vs.push(p.v);
            pos.push(xy.x as f32);
            pos.push(xy.y as f32);
        }
        let obj = new_obj();
        set_kv(&obj, "us", &arr_i32(&us).into());
        set_kv(&obj, "vs", &arr_i32(&vs).into());
        set_kv(&obj, "positions", &arr_f32(&pos).into());
        error::ok(obj.into())
    }

    /// Edges offered for `kind` ("expand" or "resupply"):
    /// `{ us, vs, sides, anchors, angles }`, anchors scaled.
    pub fn get_edge_data_res(&self, kind: &str, scale: f64) -> JsValue {
        if !in_scale_bounds(scale) {
            return error::out_of_range("scale", 0.0, SCALE_MAX, scale);
        }
        let edges = match kind.parse::<MoveKind>() {
            Ok(MoveKind::Expand) => self.inner.expand_candidates(),
            Ok(MoveKind::Resupply) => self.inner.resupply_candidates(),
            _ => return error::invalid_kind(kind),
        };
        let mut us = Vec::with_capacity(edges.len());
        let mut vs = Vec::with_capacity(edges.len());
        let mut sides = Vec::with_capacity(edges.len());
        let mut anchors = Vec::with_capacity(edges.len() * 2);
        let mut angles = Vec::with_capacity(edges.len());
        for e in edges {
            let a = scaled(edge_anchor(e), scale);
            us.push(e.u);
            vs.push(e.v);
            sides.push(e.side as u8);
            anchors.push(a.x as f32);
            anchors.push(a.y as f32);
            angles.push(edge_angle(e) as f32);
        }
        let obj = new_obj();
        set_kv(&obj, "us", &arr_i32(&us).into());
        set_kv(&obj, "vs", &arr_i32(&vs).into());
        set_kv(&obj, "sides", &arr_u8(&sides).into());
        set_kv(&obj, "anchors", &arr_f32(&anchors).into());
        set_kv(&obj, "angles", &arr_f32(&angles).into());
        error::ok(obj.into())
    }
}

impl Session {
    fn apply_move(&mut self, mv: Move) -> JsValue {
        if let Err(e) = move_in_bounds(&mv) {
            return e;
        }
        match self.inner.apply(&mv) {
            Ok(next) => {
                self.replace(next);
                error::ok(to_js(&self.inner.to_json_value()))
            }
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!("rejected {}: {}", mv.kind(), e)));
                error::invalid_move(&e)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
