use serde::Serialize;

/// Values read from one marked canvas.
///
/// `goal_id` is read but never used for drawing. It is kept for consumers
/// outside the renderer (for example a click handler that opens the goal).
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartTarget {
    /// Parsed progress value. Not clamped; NaN when unreadable and passed through.
    pub progress: f64,
    /// Opaque goal identifier, if the element carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
}

/// Outcome of one scan-and-draw pass.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    /// Elements matching the marker selector
    pub found: u32,
    /// Charts handed to the backend
    pub drawn: u32,
    /// Matches left undrawn: not a canvas, or skipped for an unreadable
    /// progress value
    pub skipped: u32,
}
