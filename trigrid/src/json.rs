use serde::Serialize;
use serde_json::Value;

use crate::model::{GridEdge, GridVertex};
use crate::Session;

pub fn to_json_impl(s: &Session) -> Value {
    #[derive(Serialize)]
    struct SessionSer<'a> {
        node: GridVertex,
        open: Vec<&'a GridEdge>,
    }
    let doc = SessionSer { node: s.node(), open: s.open_edges().iter().collect() };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}
