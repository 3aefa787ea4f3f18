use serde::{Deserialize, Serialize};

/// Type of chart
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    /// Bar chart (direction set by `indexAxis`)
    #[default]
    Bar,
}

/// Axis along which categories are laid out
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum IndexAxis {
    /// Categories on x, vertical bars
    #[default]
    X,
    /// Categories on y, horizontal bars
    Y,
}

/// A complete chart configuration, `{ type, data, options }`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Type of chart
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Labels and data series
    pub data: ChartData,
    /// Axes and plugin options
    pub options: ChartOptions,
}

/// Category labels plus the data series plotted against them
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A data series
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Series name (shown in legend and tooltips)
    pub label: String,
    /// One value per category label
    pub data: Vec<f64>,
    /// Bar fill color
    pub background_color: String,
    /// Bar outline color
    pub border_color: String,
    /// Bar outline width in pixels
    pub border_width: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub index_axis: IndexAxis,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub x: ScaleOptions,
    pub y: ScaleOptions,
}

/// Options for a single axis. Unset fields are left to the chart library.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOptions {
    /// Whether the axis is drawn at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    /// Force zero into the axis range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    /// Minimum value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Axis title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<ScaleTitle>,
}

impl ScaleOptions {
    /// A hidden axis (`{ display: false }`).
    pub fn hidden() -> Self {
        Self {
            display: Some(false),
            ..Self::default()
        }
    }

    /// Whether the axis is drawn. Chart.js shows axes unless told otherwise.
    pub fn is_displayed(&self) -> bool {
        self.display.unwrap_or(true)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScaleTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Plugins {
    pub legend: LegendOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub display: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { display: true }
    }
}
