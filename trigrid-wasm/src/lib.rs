use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{edge_geometry_res, set_panic_hook, vertex_position_res};

/// The one live session snapshot held on the JS side.
#[wasm_bindgen]
pub struct Session {
    pub(crate) inner: trigrid::Session,
    pub(crate) version: u64, // bumps on every accepted move
}

impl Session {
    pub fn rs_new() -> Session { Session { inner: trigrid::Session::new(), version: 1 } }

    /// Swap in the next snapshot; the old one is dropped only after the swap.
    pub(crate) fn replace(&mut self, next: trigrid::Session) {
        self.inner = next;
        self.version = self.version.wrapping_add(1);
    }
}
