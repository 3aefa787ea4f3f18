use serde::{Deserialize, Serialize};

use crate::error::{ProgressChartError, Result};
use crate::render::colors::is_color;

/// What to do with a target whose progress attribute is missing or not a number
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum MalformedPolicy {
    /// Draw anyway with a NaN value and let the backend decide
    #[default]
    PassThrough,
    /// Leave the canvas untouched and log a warning
    Skip,
    /// Abort the pass with the extraction error
    Fail,
}

/// Which drawing backend to use
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum BackendChoice {
    /// Chart.js when a global `Chart` constructor exists, else built-in canvas
    #[default]
    Auto,
    /// Always Chart.js
    ChartJs,
    /// Always the built-in Canvas 2D renderer
    Canvas,
}

/// Labels and colors of the progress chart
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    /// The single category label
    pub category_label: String,
    /// Name of the data series
    pub dataset_label: String,
    /// Title under the x-axis
    pub axis_title: String,
    /// Bar fill color
    pub background_color: String,
    /// Bar outline color
    pub border_color: String,
    /// Bar outline width in pixels
    pub border_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            category_label: "Progress".to_string(),
            dataset_label: "Progress (%)".to_string(),
            axis_title: "Progress (%)".to_string(),
            background_color: "#28a745".to_string(),
            border_color: "#1e7e34".to_string(),
            border_width: 1.0,
        }
    }
}

/// Element selector built from an optional tag and a marker class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSelector {
    pub tag: Option<String>,
    pub class: String,
}

impl MarkerSelector {
    /// CSS selector text, e.g. `canvas.progress-chart`.
    pub fn css(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{tag}.{}", self.class),
            None => format!(".{}", self.class),
        }
    }

    /// Whether an element with this tag name and class list is selected.
    /// Tag names compare case-insensitively, class names exactly.
    pub fn matches<'a>(&self, tag: &str, classes: impl IntoIterator<Item = &'a str>) -> bool {
        let tag_ok = self
            .tag
            .as_deref()
            .map_or(true, |t| t.eq_ignore_ascii_case(tag));
        tag_ok && classes.into_iter().any(|c| c == self.class)
    }
}

/// Configuration of a render pass.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererOptions {
    /// Class that marks an element as a chart target
    pub marker_class: String,
    /// Tag the marked element must have; `None` accepts any element
    pub element_tag: Option<String>,
    /// Attribute holding the progress value
    pub progress_attribute: String,
    /// Attribute holding the goal identifier
    pub goal_id_attribute: String,
    pub style: ChartStyle,
    pub on_malformed: MalformedPolicy,
    pub backend: BackendChoice,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            marker_class: "progress-chart".to_string(),
            element_tag: Some("canvas".to_string()),
            progress_attribute: "data-progress".to_string(),
            goal_id_attribute: "data-goal-id".to_string(),
            style: ChartStyle::default(),
            on_malformed: MalformedPolicy::default(),
            backend: BackendChoice::default(),
        }
    }
}

impl RendererOptions {
    /// Selector for chart targets.
    pub fn marker(&self) -> MarkerSelector {
        MarkerSelector {
            tag: self.element_tag.clone(),
            class: self.marker_class.clone(),
        }
    }

    /// Reject options that would build an invalid selector or chart.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.marker_class) {
            return Err(ProgressChartError::Config(format!(
                "marker class must be a plain CSS identifier: {:?}",
                self.marker_class
            )));
        }
        if let Some(tag) = &self.element_tag {
            if !is_identifier(tag) {
                return Err(ProgressChartError::Config(format!(
                    "element tag must be a plain CSS identifier: {tag:?}"
                )));
            }
        }
        for (field, name) in [
            ("progressAttribute", &self.progress_attribute),
            ("goalIdAttribute", &self.goal_id_attribute),
        ] {
            if name.trim().is_empty() {
                return Err(ProgressChartError::Config(format!("{field} is empty")));
            }
        }
        for (field, color) in [
            ("backgroundColor", &self.style.background_color),
            ("borderColor", &self.style.border_color),
        ] {
            if !is_color(color) {
                return Err(ProgressChartError::Config(format!(
                    "{field} is not a color: {color:?}"
                )));
            }
        }
        if self.style.border_width.is_nan() || self.style.border_width < 0.0 {
            return Err(ProgressChartError::Config(format!(
                "borderWidth must be non-negative, got {}",
                self.style.border_width
            )));
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '-')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
