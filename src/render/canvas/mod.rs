//! Canvas 2D rendering backend.
//!
//! Draws the progress bar directly with the HTML Canvas 2D API via web-sys,
//! for pages that do not load Chart.js.

mod bar;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{describe_js, ProgressChartError, Result};

pub use bar::CanvasBackend;

/// Acquire the 2D drawing context of a canvas.
pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| ProgressChartError::Context(describe_js(&e)))?
        .ok_or_else(|| ProgressChartError::Context("No 2d context available".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| {
            ProgressChartError::Context("Failed to cast to CanvasRenderingContext2d".to_string())
        })
}
