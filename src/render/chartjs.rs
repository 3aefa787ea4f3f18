//! Chart.js backend.
//!
//! Hands the configuration to the page's global `Chart` constructor. The
//! created chart instances are owned by Chart.js and the canvas; nothing here
//! keeps them.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{describe_js, ProgressChartError, Result};
use crate::render::backend::ChartBackend;
use crate::render::canvas::context_2d;
use crate::types::ChartConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(
        ctx: &CanvasRenderingContext2d,
        config: &JsValue,
    ) -> std::result::Result<ChartJs, JsValue>;
}

/// Whether the page defines a global `Chart` constructor.
pub fn chartjs_available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChartJsBackend;

impl ChartBackend<HtmlCanvasElement> for ChartJsBackend {
    fn draw(&mut self, canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<()> {
        let ctx = context_2d(canvas)?;
        // serde-wasm-bindgen keeps NaN as a JS number, unlike JSON.
        let js_config = serde_wasm_bindgen::to_value(config)
            .map_err(|e| ProgressChartError::Render(format!("Serialization error: {e}")))?;
        ChartJs::new(&ctx, &js_config)
            .map_err(|e| ProgressChartError::Render(format!("Chart.js: {}", describe_js(&e))))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "chart.js"
    }
}
