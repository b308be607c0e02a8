use crate::{error, interop, logger, Board, Sketchpad};
use geosketch::{ClearToken, Mode, SketchConfig, HELP_TEXT};
use log::LevelFilter;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes core logging to the browser console. `level` is one of
/// off/error/warn/info/debug/trace; anything else falls back to warn.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Warn);
    logger::init(filter);
}

#[wasm_bindgen]
pub fn help_text() -> String {
    HELP_TEXT.to_string()
}

fn parse_config(config: JsValue) -> Result<SketchConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SketchConfig::default());
    }
    let cfg: SketchConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| error::invalid_config(e.to_string()))?;
    cfg.validate().map_err(|e| error::from_sketch(&e))?;
    Ok(cfg)
}

#[wasm_bindgen]
impl Sketchpad {
    /// Wraps an existing JSXGraph board. `config` may be omitted; on a bad
    /// config the error envelope is thrown.
    #[wasm_bindgen(constructor)]
    pub fn new(board: Board, config: JsValue) -> Result<Sketchpad, JsValue> {
        Ok(Sketchpad::rs_new(board, parse_config(config)?))
    }

    /// Board construction hints (`boundingbox`, `grid`) from the config.
    pub fn board_options(&self) -> JsValue {
        let cfg = self.inner.config();
        let obj = interop::new_obj();
        interop::set_kv(&obj, "boundingbox", &interop::arr_f64(&cfg.bounding_box).into());
        interop::set_kv(&obj, "grid", &JsValue::from_bool(cfg.grid));
        interop::set_kv(&obj, "axis", &JsValue::FALSE);
        interop::set_kv(&obj, "keepaspectratio", &JsValue::TRUE);
        obj.into()
    }

    // Mode
    pub fn mode(&self) -> String {
        self.inner.mode().name().to_string()
    }
    pub fn set_mode(&mut self, mode: &str) -> JsValue {
        match mode.parse::<Mode>() {
            Ok(m) => error::ok(interop::to_js(self.inner.set_mode(m))),
            Err(e) => error::from_sketch(&e),
        }
    }
    pub fn pending_selection(&self) -> js_sys::Uint32Array {
        let ids: Vec<u32> = self.inner.pending_selection().iter().map(|p| p.0).collect();
        interop::arr_u32(&ids)
    }

    // Input
    pub fn click(&mut self, x: f64, y: f64) -> JsValue {
        match self.inner.click(x, y) {
            Ok(outcome) => error::ok(interop::to_js(&outcome)),
            Err(e) => error::from_sketch(&e),
        }
    }
    /// Same as `click`, with coordinates taken from a board pointer event.
    pub fn click_event(&mut self, evt: JsValue) -> JsValue {
        match self.inner.engine().event_coords(&evt) {
            Some((x, y)) => self.click(x, y),
            None => error::err("invalid_event", "board returned no coordinates for event", None),
        }
    }
    pub fn execute(&mut self, line: &str) -> JsValue {
        match self.inner.execute(line) {
            Ok(outcome) => error::ok(interop::to_js(&outcome)),
            Err(e) => error::from_sketch(&e),
        }
    }

    // Clear
    pub fn request_clear(&mut self) -> u64 {
        self.inner.request_clear().0
    }
    pub fn confirm_clear(&mut self, token: u64) -> JsValue {
        match self.inner.confirm_clear(ClearToken(token)) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_sketch(&e),
        }
    }
    pub fn cancel_clear(&mut self) {
        self.inner.cancel_clear();
    }

    // Display
    pub fn status(&self) -> JsValue {
        interop::to_js(self.inner.status())
    }
    pub fn stats(&self) -> JsValue {
        interop::to_js(&self.inner.stats())
    }
    /// `{ labels: string[], positions: Float64Array }`, positions read live
    /// from the board.
    pub fn get_point_data(&self) -> JsValue {
        use geosketch::GeometryEngine;
        let scene = self.inner.scene();
        let labels = js_sys::Array::new();
        let mut positions = Vec::with_capacity(scene.points().len() * 2);
        for p in scene.points() {
            labels.push(&JsValue::from_str(&p.label));
            let (x, y) = self.inner.engine().point_coords(&p.handle);
            positions.push(x);
            positions.push(y);
        }
        let obj = interop::new_obj();
        interop::set_kv(&obj, "labels", &labels.into());
        interop::set_kv(&obj, "positions", &interop::arr_f64(&positions).into());
        obj.into()
    }
}
