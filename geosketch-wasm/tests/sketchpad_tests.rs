mod common;

use common::*;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize, Debug, PartialEq)]
struct Stats {
    points: u32,
    lines: u32,
    circles: u32,
}

#[derive(Deserialize)]
struct Status {
    text: String,
    severity: String,
}

fn stats(p: &geosketch_wasm::Sketchpad) -> Stats {
    serde_wasm_bindgen::from_value(p.stats()).unwrap()
}

#[wasm_bindgen_test]
fn points_are_created_on_the_board_with_labels() {
    let (p, board) = pad_with_points(&[(0.1, 0.2), (-0.3, 0.4)]);
    assert_eq!(stats(&p), Stats { points: 2, lines: 0, circles: 0 });
    assert_eq!(live_count(&board), 2);
    let attrs = get(&object_at(&board, 1), "attrs");
    assert_eq!(get(&attrs, "name").as_string().unwrap(), "P2");
    assert_eq!(get(&attrs, "fillColor").as_string().unwrap(), "#667eea");
    assert_eq!(get(&attrs, "withLabel").as_bool(), Some(true));

    let data = p.get_point_data();
    let labels: Vec<String> = serde_wasm_bindgen::from_value(get(&data, "labels")).unwrap();
    assert_eq!(labels, vec!["P1", "P2"]);
    let pos = js_sys::Float64Array::new(&get(&data, "positions")).to_vec();
    assert_eq!(pos, vec![0.1, 0.2, -0.3, 0.4]);
}

#[wasm_bindgen_test]
fn line_mode_creates_line_from_two_picks() {
    let (mut p, board) = pad_with_points(&[(0.0, 0.0), (0.6, 0.0)]);
    assert!(is_ok(&p.set_mode("line")));
    let r = p.click(0.05, 0.0);
    assert_eq!(get(&get(&r, "value"), "kind").as_string().unwrap(), "selected");
    assert_eq!(p.pending_selection().to_vec(), vec![0]);
    let r = p.click(0.6, 0.1);
    let v = get(&r, "value");
    assert_eq!(get(&v, "kind").as_string().unwrap(), "shape_created");
    assert_eq!(get(&v, "shape").as_string().unwrap(), "line");
    assert_eq!(stats(&p).lines, 1);
    assert_eq!(get(&object_at(&board, 2), "kind").as_string().unwrap(), "line");
    assert_eq!(p.mode(), "line");
}

#[wasm_bindgen_test]
fn click_event_uses_board_coordinates() {
    let (mut p, _board) = pad();
    p.set_mode("point");
    let r = p.click_event(pointer_event(0.25, -0.5));
    assert!(is_ok(&r));
    let data = p.get_point_data();
    let pos = js_sys::Float64Array::new(&get(&data, "positions")).to_vec();
    assert_eq!(pos, vec![0.25, -0.5]);
}

#[wasm_bindgen_test]
fn dragged_points_are_located_at_their_live_position() {
    let (mut p, board) = pad_with_points(&[(0.0, 0.0), (0.5, 0.5)]);
    drag_object(&board, 0, -0.8, -0.8);
    p.set_mode("circle");
    assert!(is_err(&p.click(0.0, 0.0), "no_point_nearby"));
    assert!(is_ok(&p.click(-0.8, -0.8)));
    assert!(is_ok(&p.click(0.5, 0.5)));
    assert_eq!(stats(&p).circles, 1);
    let attrs = get(&object_at(&board, 2), "attrs");
    assert_eq!(get(&attrs, "fillOpacity").as_f64(), Some(0.05));
}

#[wasm_bindgen_test]
fn commands_match_click_results() {
    let (mut p, board) = pad_with_points(&[(0.0, 0.0), (0.5, 0.5), (-0.5, 0.5)]);
    assert!(is_ok(&p.execute("segment P1 P3")));
    let st: Status = serde_wasm_bindgen::from_value(p.status()).unwrap();
    assert_eq!(st.severity, "success");
    assert_eq!(st.text, "Segment created between P1 and P3");
    assert_eq!(get(&object_at(&board, 3), "kind").as_string().unwrap(), "segment");

    let help = p.execute("help");
    assert!(is_ok(&help));
    let st: Status = serde_wasm_bindgen::from_value(p.status()).unwrap();
    assert_eq!(st.severity, "info");
    assert!(st.text.contains("circle pointA pointB"));
}

#[wasm_bindgen_test]
fn clear_is_two_step() {
    let (mut p, board) = pad_with_points(&[(0.0, 0.0), (0.5, 0.5)]);
    p.execute("circle P1 P2");
    p.set_mode("line");
    let token = p.request_clear();
    assert_eq!(stats(&p).points, 2);
    assert!(is_ok(&p.confirm_clear(token)));
    assert_eq!(stats(&p), Stats { points: 0, lines: 0, circles: 0 });
    assert_eq!(live_count(&board), 0);
    assert_eq!(p.mode(), "none");
    assert!(is_err(&p.confirm_clear(token), "stale_clear_token"));
}

#[wasm_bindgen_test]
fn clear_completes_when_board_throws_on_remove() {
    let (mut p, board) = pad_with_points(&[(0.0, 0.0), (0.5, 0.5)]);
    p.execute("line P1 P2");
    fail_removals(&board);
    let token = p.request_clear();
    assert!(is_ok(&p.confirm_clear(token)));
    assert_eq!(stats(&p), Stats { points: 0, lines: 0, circles: 0 });
    assert_eq!(p.mode(), "none");
    // labels restart, so the registry really was emptied
    p.set_mode("point");
    let r = p.click(2.0, 2.0);
    assert!(is_ok(&r));
    assert_eq!(get(&get(&r, "value"), "label").as_string().as_deref(), Some("P1"));
}

#[wasm_bindgen_test]
fn config_overrides_threshold_and_styles() {
    let board = make_fake_board();
    let cfg = js_sys::JSON::parse(r##"{"snap_threshold": 0.05, "point_style": {"fill": "#000000"}}"##).unwrap();
    use wasm_bindgen::JsCast;
    let mut p = geosketch_wasm::Sketchpad::new(board.clone().unchecked_into(), cfg).unwrap();
    p.set_mode("point");
    p.click(0.0, 0.0);
    assert_eq!(get(&get(&object_at(&board, 0), "attrs"), "fillColor").as_string().unwrap(), "#000000");
    p.set_mode("line");
    assert!(is_err(&p.click(0.1, 0.0), "no_point_nearby"));

    let opts = p.board_options();
    assert_eq!(get(&opts, "grid").as_bool(), Some(true));
    assert_ne!(get(&opts, "boundingbox"), JsValue::UNDEFINED);
}
