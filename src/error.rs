//! Structured error types for progress-charts.

/// All errors that can occur while extracting, configuring, or drawing charts.
#[derive(Debug, thiserror::Error)]
pub enum ProgressChartError {
    /// A required data attribute is absent from a chart target.
    #[error("Missing attribute: {name}")]
    MissingAttribute { name: String },

    /// A data attribute is present but does not start with a number.
    #[error("Attribute {name} is not a number: {value:?}")]
    InvalidNumber { name: String, value: String },

    /// DOM access failed (no window, no document, bad selector).
    #[error("DOM error: {0}")]
    Dom(String),

    /// The 2D drawing context could not be acquired.
    #[error("Drawing context unavailable: {0}")]
    Context(String),

    /// The drawing backend rejected the chart.
    #[error("Render error: {0}")]
    Render(String),

    /// Renderer options failed validation.
    #[error("Invalid options: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON serialization: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProgressChartError>;

impl ProgressChartError {
    /// Whether this error comes from reading a target's attributes, as opposed
    /// to the DOM or the drawing backend.
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            Self::MissingAttribute { .. } | Self::InvalidNumber { .. }
        )
    }
}

impl From<String> for ProgressChartError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ProgressChartError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ProgressChartError> for wasm_bindgen::JsValue {
    fn from(e: ProgressChartError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

/// Render a thrown JS value as text for error messages.
#[cfg(target_arch = "wasm32")]
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
