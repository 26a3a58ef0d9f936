use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_side(got: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_str(got));
    err("invalid_side", "side must be one of W, E, S", Some(d.into()))
}

#[inline]
pub fn invalid_kind(got: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_str(got));
    err("invalid_kind", "kind must be one of expand, move, resupply", Some(d.into()))
}

/// Rejected move; `data.reason` carries the core's stable code.
pub fn invalid_move(e: &trigrid::InvalidMove) -> JsValue {
    let d = new_obj();
    set_kv(&d, "reason", &JsValue::from_str(e.code()));
    set_kv(&d, "kind", &JsValue::from_str(e.kind().as_str()));
    err("invalid_move", e.to_string(), Some(d.into()))
}

/// Map a core error (config ingestion) onto a result object.
pub fn from_core(e: &trigrid::Error) -> JsValue {
    match e {
        trigrid::Error::InvalidMove(m) => invalid_move(m),
        trigrid::Error::Json(j) => err("json_parse", j.to_string(), None),
        trigrid::Error::Limit { what, max, got } => {
            let d = new_obj();
            set_kv(&d, "what", &JsValue::from_str(what));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
            err("limit", e.to_string(), Some(d.into()))
        }
        trigrid::Error::OutOfBounds { what, got } => {
            use trigrid::geometry::limits::{COORD_MAX, COORD_MIN};
            out_of_range(what, COORD_MIN as f64, COORD_MAX as f64, *got as f64)
        }
    }
}
