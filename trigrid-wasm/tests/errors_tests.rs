use js_sys::Reflect;
use trigrid_wasm::Session;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn code(v: &JsValue) -> Option<String> {
    let ok = Reflect::get(v, &JsValue::from_str("ok")).ok()?.as_bool()?;
    if ok {
        return None;
    }
    let err = Reflect::get(v, &JsValue::from_str("error")).ok()?;
    Reflect::get(&err, &JsValue::from_str("code")).ok()?.as_string()
}

fn reason(v: &JsValue) -> Option<String> {
    let err = Reflect::get(v, &JsValue::from_str("error")).ok()?;
    let data = Reflect::get(&err, &JsValue::from_str("data")).ok()?;
    Reflect::get(&data, &JsValue::from_str("reason")).ok()?.as_string()
}

#[wasm_bindgen_test]
fn illegal_moves_are_typed_and_do_not_mutate() {
    let mut s = Session::new();
    let ver = s.version();

    let r = s.move_to_res(0, 1);
    assert_eq!(code(&r).as_deref(), Some("invalid_move"));
    assert_eq!(reason(&r).as_deref(), Some("unreachable"));

    let r = s.expand_res(4, 4, "S");
    assert_eq!(reason(&r).as_deref(), Some("not_protruding"));

    let r = s.expand_res(0, 0, "S");
    assert_eq!(reason(&r).as_deref(), Some("already_open"));

    let r = s.resupply_res(0, 0, "E");
    assert_eq!(reason(&r).as_deref(), Some("not_open"));

    assert_eq!(s.version(), ver, "state mutated on error");
}

#[wasm_bindgen_test]
fn bad_arguments() {
    let mut s = Session::new();
    let ver = s.version();
    assert_eq!(code(&s.expand_res(0, 0, "N")).as_deref(), Some("invalid_side"));
    assert_eq!(code(&s.move_to_res(i32::MAX, 0)).as_deref(), Some("out_of_range"));
    assert_eq!(code(&s.candidates_res("jump")).as_deref(), Some("invalid_kind"));
    assert_eq!(code(&s.get_edge_data_res("move", 100.0)).as_deref(), Some("invalid_kind"));
    assert_eq!(code(&s.get_edge_data_res("expand", -1.0)).as_deref(), Some("out_of_range"));
    assert_eq!(code(&s.get_vertex_data_res(-1.0)).as_deref(), Some("out_of_range"));
    assert_eq!(code(&s.get_vertex_data_res(f64::NAN)).as_deref(), Some("out_of_range"));
    // Lower-case sides are rejected on both the argument and the action path.
    assert_eq!(code(&s.expand_res(0, 0, "w")).as_deref(), Some("invalid_side"));
    let lower = js_sys::JSON::parse(r#"{"kind":"expand","payload":{"u":0,"v":0,"s":"w"}}"#).unwrap();
    assert_eq!(code(&s.apply_res(lower)).as_deref(), Some("json_parse"));
    assert_eq!(code(&s.apply_res(JsValue::from_str("nope"))).as_deref(), Some("json_parse"));
    assert_eq!(code(&trigrid_wasm::edge_geometry_res(0, 0, "x")).as_deref(), Some("invalid_side"));
    assert_eq!(s.version(), ver);
}

#[wasm_bindgen_test]
fn bad_config_keeps_session() {
    let mut s = Session::new();
    let ver = s.version();
    let cfg = js_sys::JSON::parse(r#"{"origin":{"u":5000000,"v":0}}"#).unwrap();
    assert_eq!(code(&s.from_config_res(cfg)).as_deref(), Some("out_of_range"));
    let cfg = js_sys::JSON::parse(r#"{"validation":"loose"}"#).unwrap();
    assert_eq!(code(&s.from_config_res(cfg)).as_deref(), Some("json_parse"));
    assert_eq!(s.version(), ver);
}
