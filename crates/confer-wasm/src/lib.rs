//! WebAssembly bindings for the Confer layout engine.
//!
//! This crate exposes the layout engine to the browser client. The host
//! pushes UI-state snapshots and device changes in; every pass produces the
//! full list of region bounds.
//!
//! ## Example
//!
//! ```js
//! import { ConferLayout } from 'confer-layout';
//!
//! const layout = new ConferLayout();
//! layout.setDirection(document.dir === 'rtl');
//! layout.resize(window.innerWidth, window.innerHeight, performance.now());
//! layout.setDeviceType('DESKTOP');
//!
//! layout.setInput({
//!   cameraDock: { position: 'TOP', numCameras: 2 },
//!   presentation: { isOpen: true, slideCount: 5 },
//! });
//!
//! for (const { key, value } of layout.updates()) {
//!   applyBounds(key, value);
//! }
//!
//! // Trailing resize pass
//! requestAnimationFrame((now) => layout.tick(now));
//! ```

use confer_core::LayoutInput;
use confer_layout::{LayoutEngine, LayoutTrigger};
use wasm_bindgen::prelude::*;
use web_sys::console;

mod storage;
mod types;

pub use storage::*;
pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The layout engine interface for JavaScript.
#[wasm_bindgen]
pub struct ConferLayout {
    trigger: LayoutTrigger<HostStore, LatestBatch>,
}

#[wasm_bindgen]
impl ConferLayout {
    /// Create a layout engine backed by `sessionStorage` when available.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let (store, fallback) = HostStore::detect();
        if let Some(err) = fallback {
            console::warn_1(&JsValue::from_str(&format!(
                "confer-layout: {}; camera dock size will not survive reloads",
                err
            )));
        }
        Self {
            trigger: LayoutTrigger::new(LayoutEngine::new(store), LatestBatch::default()),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Override layout constants. Missing fields keep their defaults.
    #[wasm_bindgen(js_name = setConstants)]
    pub fn set_constants(&mut self, constants: JsValue) -> Result<bool, JsError> {
        let partial: LayoutConstantsJs = serde_wasm_bindgen::from_value(constants)
            .map_err(|e| JsError::new(&format!("Invalid layout constants: {}", e)))?;

        self.trigger
            .set_constants(partial.into_core())
            .map_err(|e| JsError::new(&format!("Invalid layout constants: {}", e)))
    }

    /// Replace the UI-state snapshot.
    #[wasm_bindgen(js_name = setInput)]
    pub fn set_input(&mut self, input: JsValue) -> Result<bool, JsError> {
        let input: LayoutInput = serde_wasm_bindgen::from_value(input)
            .map_err(|e| JsError::new(&format!("Invalid layout input: {}", e)))?;

        Ok(self.trigger.set_input(input))
    }

    /// Set the detected device type (`MOBILE`, `TABLET`, `DESKTOP`), or
    /// `null` while detection is pending.
    #[wasm_bindgen(js_name = setDeviceType)]
    pub fn set_device_type(&mut self, device_type: Option<String>) -> Result<bool, JsError> {
        let device_type = parse_device_type(device_type.as_deref()).map_err(|e| {
            console::error_1(&JsValue::from_str(&e.to_string()));
            JsError::new(&format!("Invalid device type: {}", e))
        })?;

        Ok(self.trigger.set_device_type(device_type))
    }

    #[wasm_bindgen(js_name = setDirection)]
    pub fn set_direction(&mut self, is_rtl: bool) -> bool {
        self.trigger.set_direction(is_rtl)
    }

    /// Set the root font size in pixels.
    #[wasm_bindgen(js_name = setFontSize)]
    pub fn set_font_size(&mut self, font_size: f64) -> bool {
        self.trigger.set_font_size(font_size)
    }

    /// Set the id of the element currently in fullscreen, or `null`.
    #[wasm_bindgen(js_name = setFullscreenElement)]
    pub fn set_fullscreen_element(&mut self, element_id: Option<String>) -> bool {
        self.trigger.set_fullscreen_element(element_id)
    }

    /// Report a viewport resize. `now` is a `performance.now()` timestamp.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64, now: f64) -> bool {
        self.trigger.resize(width, height, now)
    }

    /// Run a throttled resize pass if it is due.
    #[wasm_bindgen]
    pub fn tick(&mut self, now: f64) -> bool {
        self.trigger.tick(now)
    }

    /// Timestamp at which a throttled resize pass is due, if any.
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.trigger.throttle().next_deadline()
    }

    /// Recompute with the current state.
    #[wasm_bindgen]
    pub fn refresh(&mut self) -> bool {
        self.trigger.refresh()
    }

    /// Updates from the most recent pass as `{ key, value }` objects.
    #[wasm_bindgen]
    pub fn updates(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.trigger.sink().updates)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Number of passes emitted so far.
    #[wasm_bindgen(js_name = passCount)]
    pub fn pass_count(&self) -> f64 {
        self.trigger.sink().passes as f64
    }

    /// Dock position of the drop zone under a pointer, or `null`.
    #[wasm_bindgen(js_name = dropZoneAt)]
    pub fn drop_zone_at(&self, x: f64, y: f64) -> Result<JsValue, JsError> {
        match self.trigger.sink().drop_target(x, y) {
            Some(position) => serde_wasm_bindgen::to_value(&position)
                .map_err(|e| JsError::new(&format!("Serialization error: {}", e))),
            None => Ok(JsValue::NULL),
        }
    }

    /// Whether the camera dock size survives page reloads.
    #[wasm_bindgen(js_name = isPersistent)]
    pub fn is_persistent(&self) -> bool {
        self.trigger.engine().store().is_persistent()
    }
}

impl Default for ConferLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the engine version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
