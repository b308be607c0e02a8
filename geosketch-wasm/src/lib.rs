use wasm_bindgen::prelude::*;
mod api;
mod board;
mod error;
mod interop;
mod logger;

pub use board::{Board, GeometryElement, JsxBoard};

#[wasm_bindgen]
pub struct Sketchpad { pub(crate) inner: geosketch::Sketchpad<JsxBoard> }

impl Sketchpad {
    pub fn rs_new(board: Board, config: geosketch::SketchConfig) -> Sketchpad {
        Sketchpad { inner: geosketch::Sketchpad::with_config(JsxBoard::new(board), config) }
    }
}
