#![allow(dead_code)]

use geosketch_wasm::{Board, Sketchpad};
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Minimal stand-in for a JSXGraph board: records created elements, points
// answer X()/Y(), removal only flags the element.
#[wasm_bindgen(inline_js = r#"
export function makeFakeBoard() {
    const board = {
        objects: [],
        create(kind, parents, attrs) {
            const el = { kind, parents, attrs, removed: false };
            if (kind === 'point') {
                el.px = parents[0];
                el.py = parents[1];
                el.X = () => el.px;
                el.Y = () => el.py;
            }
            board.objects.push(el);
            return el;
        },
        removeObject(el) { el.removed = true; },
        getUsrCoordsOfMouse(evt) { return [evt.x, evt.y]; },
    };
    return board;
}
export function failRemovals(board) {
    board.removeObject = (el) => { throw new Error('removeObject failed'); };
}
export function liveCount(board) { return board.objects.filter(o => !o.removed).length; }
export function objectAt(board, i) { return board.objects[i]; }
export function dragObject(board, i, x, y) { board.objects[i].px = x; board.objects[i].py = y; }
export function pointerEvent(x, y) { return { x, y }; }
"#)]
extern "C" {
    #[wasm_bindgen(js_name = makeFakeBoard)]
    pub fn make_fake_board() -> JsValue;
    #[wasm_bindgen(js_name = failRemovals)]
    pub fn fail_removals(board: &JsValue);
    #[wasm_bindgen(js_name = liveCount)]
    pub fn live_count(board: &JsValue) -> u32;
    #[wasm_bindgen(js_name = objectAt)]
    pub fn object_at(board: &JsValue, i: u32) -> JsValue;
    #[wasm_bindgen(js_name = dragObject)]
    pub fn drag_object(board: &JsValue, i: u32, x: f64, y: f64);
    #[wasm_bindgen(js_name = pointerEvent)]
    pub fn pointer_event(x: f64, y: f64) -> JsValue;
}

pub fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap()
}

pub fn is_ok(v: &JsValue) -> bool {
    get(v, "ok").as_bool().unwrap_or(false)
}

pub fn is_err(v: &JsValue, code: &str) -> bool {
    if is_ok(v) {
        return false;
    }
    get(&get(v, "error"), "code").as_string().map_or(false, |c| c == code)
}

/// Fresh pad over a fake board; the board is returned for inspection.
pub fn pad() -> (Sketchpad, JsValue) {
    let board = make_fake_board();
    let pad = Sketchpad::new(board.clone().unchecked_into::<Board>(), JsValue::UNDEFINED).unwrap();
    (pad, board)
}

pub fn pad_with_points(pts: &[(f64, f64)]) -> (Sketchpad, JsValue) {
    let (mut p, board) = pad();
    assert!(is_ok(&p.set_mode("point")));
    for &(x, y) in pts {
        assert!(is_ok(&p.click(x, y)));
    }
    (p, board)
}
