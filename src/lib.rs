//! progress-charts - progress bars for marked canvases
//!
//! Finds every `<canvas class="progress-chart">` on the page, reads its
//! `data-progress` (0-100) and `data-goal-id` attributes, and draws a
//! horizontal bar chart of that single value on a fixed 0-100 axis, either
//! through the page's Chart.js or with the built-in Canvas 2D renderer.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { install } from 'progress-charts';
//! await init();
//! const hook = install();            // renders on DOMContentLoaded
//! // hook.shutdown();                // cancel if still pending
//! ```
//!
//! Everything that does not touch the DOM (attribute parsing, configuration,
//! bar geometry, the scan-and-draw loop) is plain Rust and runs on any target.

pub mod chart_config;
pub mod error;
mod log;
pub mod progress;
pub mod render;
pub mod renderer;
pub mod target;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod dom;

use wasm_bindgen::prelude::*;

pub use error::{ProgressChartError, Result};
pub use renderer::ProgressChartRenderer;
pub use target::{extract_target, AttributeSource};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use dom::ReadyHook;

/// Read renderer options from an optional JS object.
#[cfg(target_arch = "wasm32")]
fn options_from_js(value: JsValue) -> std::result::Result<RendererOptions, JsValue> {
    let options = if value.is_undefined() || value.is_null() {
        RendererOptions::default()
    } else {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))?
    };
    options.validate()?;
    Ok(options)
}

/// Render progress charts once the document is ready
///
/// # Arguments
/// * `options` - Optional renderer options (camelCase keys, all optional)
///
/// # Errors
/// Returns an error if the options are invalid, or if the document was
/// already loaded and the immediate render pass failed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn install(options: JsValue) -> std::result::Result<ReadyHook, JsValue> {
    console_error_panic_hook::set_once();
    let options = options_from_js(options)?;
    Ok(dom::install_hook(options)?)
}

/// Render every progress chart in the document now
///
/// # Returns
/// A `{ found, drawn, skipped }` report
///
/// # Errors
/// Returns the first DOM, extraction (under the `fail` policy), or drawing error.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = renderProgressCharts)]
pub fn render_progress_charts(options: JsValue) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let options = options_from_js(options)?;
    let report = dom::render_document(&options)?;
    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Build the chart configuration for a raw `data-progress` value
///
/// Useful for pages that create the Chart.js instance themselves.
///
/// # Errors
/// Returns an error if the options are invalid.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = progressChartConfig)]
pub fn progress_chart_config(
    progress: &str,
    options: JsValue,
) -> std::result::Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let config = ChartConfig::progress_bar(progress::parse_float(progress), &options.style);
    serde_wasm_bindgen::to_value(&config)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Install the ready hook with default options when the module starts.
#[cfg(all(feature = "autostart", target_arch = "wasm32"))]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match dom::install_hook(RendererOptions::default()) {
        Ok(hook) => hook.forget(),
        Err(e) => log::error(&format!("progress charts: {e}")),
    }
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
