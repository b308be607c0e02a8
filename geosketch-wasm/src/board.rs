//! `GeometryEngine` over a JSXGraph board passed in from JavaScript.

use geosketch::{CircleStyle, Color, GeometryEngine, PointStyle, StrokeStyle};
use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A `JXG.Board` (the result of `JXG.JSXGraph.initBoard`).
    pub type Board;

    // Creation is not caught: a throw escapes before the scene records
    // anything, so the registry stays consistent.
    #[wasm_bindgen(method)]
    fn create(this: &Board, kind: &str, parents: &Array, attributes: &JsValue) -> GeometryElement;

    #[wasm_bindgen(method, catch, js_name = removeObject)]
    fn remove_object(this: &Board, el: &GeometryElement) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getUsrCoordsOfMouse)]
    fn usr_coords_of_mouse(this: &Board, evt: &JsValue) -> JsValue;

    #[derive(Clone, Debug)]
    pub type GeometryElement;

    #[wasm_bindgen(method, js_name = X)]
    fn x(this: &GeometryElement) -> f64;

    #[wasm_bindgen(method, js_name = Y)]
    fn y(this: &GeometryElement) -> f64;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LabelAttrs {
    offset: [f64; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PointAttrs<'a> {
    name: &'a str,
    size: f64,
    fill_color: Color,
    stroke_color: Color,
    stroke_width: f64,
    with_label: bool,
    label: LabelAttrs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StrokeAttrs {
    stroke_color: Color,
    stroke_width: f64,
    fixed: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CircleAttrs {
    stroke_color: Color,
    stroke_width: f64,
    fill_color: Color,
    fill_opacity: f64,
    fixed: bool,
}

pub struct JsxBoard {
    board: Board,
}

impl JsxBoard {
    pub fn new(board: Board) -> JsxBoard { JsxBoard { board } }

    /// User-space coordinates of a pointer event, if the board reports a pair.
    pub fn event_coords(&self, evt: &JsValue) -> Option<(f64, f64)> {
        let v = self.board.usr_coords_of_mouse(evt);
        match serde_wasm_bindgen::from_value::<Vec<f64>>(v) {
            Ok(c) if c.len() >= 2 => Some((c[0], c[1])),
            _ => None,
        }
    }

    fn stroke(&self, kind: &str, a: &GeometryElement, b: &GeometryElement, style: &StrokeStyle) -> GeometryElement {
        let attrs = StrokeAttrs { stroke_color: style.color, stroke_width: style.width, fixed: style.fixed };
        self.board.create(kind, &Array::of2(a, b), &crate::interop::to_js(&attrs))
    }
}

impl GeometryEngine for JsxBoard {
    type Handle = GeometryElement;

    fn create_point(&mut self, x: f64, y: f64, label: &str, style: &PointStyle) -> GeometryElement {
        let attrs = PointAttrs {
            name: label,
            size: style.size,
            fill_color: style.fill,
            stroke_color: style.stroke,
            stroke_width: style.stroke_width,
            with_label: style.show_label,
            label: LabelAttrs { offset: style.label_offset },
        };
        let parents = Array::of2(&JsValue::from_f64(x), &JsValue::from_f64(y));
        self.board.create("point", &parents, &crate::interop::to_js(&attrs))
    }
    fn create_line(&mut self, a: &GeometryElement, b: &GeometryElement, style: &StrokeStyle) -> GeometryElement {
        self.stroke("line", a, b, style)
    }
    fn create_segment(&mut self, a: &GeometryElement, b: &GeometryElement, style: &StrokeStyle) -> GeometryElement {
        self.stroke("segment", a, b, style)
    }
    fn create_circle(&mut self, center: &GeometryElement, rim: &GeometryElement, style: &CircleStyle) -> GeometryElement {
        let attrs = CircleAttrs {
            stroke_color: style.color,
            stroke_width: style.width,
            fill_color: style.fill,
            fill_opacity: style.fill_opacity,
            fixed: style.fixed,
        };
        self.board.create("circle", &Array::of2(center, rim), &crate::interop::to_js(&attrs))
    }
    fn remove(&mut self, handle: &GeometryElement) {
        // a clear must run to completion, so a failed removal only logs
        if let Err(e) = self.board.remove_object(handle) {
            log::warn!("board refused to remove element: {:?}", e);
        }
    }
    fn point_coords(&self, handle: &GeometryElement) -> (f64, f64) {
        (handle.x(), handle.y())
    }
}
