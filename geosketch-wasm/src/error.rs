use geosketch::SketchError;
use js_sys::Object;
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

fn data_str(k: &str, v: &str) -> Object {
    let d = new_obj(); set_kv(&d, k, &JsValue::from_str(v)); d
}

/// Maps a core error onto `{ ok: false, error: { code, message, data } }`.
pub fn from_sketch(e: &SketchError) -> JsValue {
    let data: Option<JsValue> = match e {
        SketchError::UnknownCommand(token) => Some(data_str("token", token).into()),
        SketchError::MissingLabels { command } => Some(data_str("command", command).into()),
        SketchError::PointNotFound(label) => Some(data_str("label", label).into()),
        SketchError::InvalidMode(got) => Some(data_str("got", got).into()),
        SketchError::NonFinite(param) => Some(data_str("param", param).into()),
        SketchError::NoPointNearby { x, y } => {
            let d = new_obj();
            set_kv(&d, "x", &JsValue::from_f64(*x));
            set_kv(&d, "y", &JsValue::from_f64(*y));
            Some(d.into())
        }
        SketchError::OutOfRange { param, min, max, got } => {
            let d = data_str("param", param);
            set_kv(&d, "min", &JsValue::from_f64(*min));
            set_kv(&d, "max", &JsValue::from_f64(*max));
            set_kv(&d, "got", &JsValue::from_f64(*got));
            Some(d.into())
        }
        SketchError::InvalidId { kind, id } => {
            let d = data_str("kind", kind);
            set_kv(&d, "id", &JsValue::from_f64(*id as f64));
            Some(d.into())
        }
        SketchError::LimitReached { kind, max } => {
            let d = data_str("kind", kind);
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            Some(d.into())
        }
        SketchError::StaleClearToken | SketchError::Config(_) => None,
    };
    err(e.code(), e.to_string(), data)
}

#[inline]
pub fn invalid_config(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}
