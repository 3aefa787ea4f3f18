//! Building the progress bar configuration.
//!
//! The configuration is the same for every target apart from the single data
//! value: one category, one dataset, horizontal bars, x-axis fixed to
//! `[0, 100]`, y-axis and legend hidden.

use crate::progress::{PROGRESS_AXIS_MAX, PROGRESS_AXIS_MIN};
use crate::types::{
    ChartConfig, ChartData, ChartKind, ChartOptions, ChartStyle, Dataset, IndexAxis,
    LegendOptions, Plugins, ScaleOptions, ScaleTitle, Scales,
};

impl ChartConfig {
    /// Horizontal single-value progress bar.
    ///
    /// `progress` is passed through unchanged (out-of-range and NaN included);
    /// only the axis bounds limit what is displayed.
    pub fn progress_bar(progress: f64, style: &ChartStyle) -> Self {
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: vec![style.category_label.clone()],
                datasets: vec![Dataset {
                    label: style.dataset_label.clone(),
                    data: vec![progress],
                    background_color: style.background_color.clone(),
                    border_color: style.border_color.clone(),
                    border_width: style.border_width,
                }],
            },
            options: ChartOptions {
                index_axis: IndexAxis::Y,
                scales: Scales {
                    x: ScaleOptions {
                        display: None,
                        begin_at_zero: Some(true),
                        min: Some(PROGRESS_AXIS_MIN),
                        max: Some(PROGRESS_AXIS_MAX),
                        title: Some(ScaleTitle {
                            display: true,
                            text: style.axis_title.clone(),
                        }),
                    },
                    y: ScaleOptions::hidden(),
                },
                plugins: Plugins {
                    legend: LegendOptions { display: false },
                },
            },
        }
    }

    /// The first dataset, if any.
    pub fn primary_dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }

    /// The plotted value of the first dataset.
    pub fn value(&self) -> Option<f64> {
        self.primary_dataset()
            .and_then(|d| d.data.first())
            .copied()
    }

    /// Value-axis bounds as `(min, max)`, defaulting to `[0, 100]`.
    pub fn value_range(&self) -> (f64, f64) {
        let axis = match self.options.index_axis {
            IndexAxis::Y => &self.options.scales.x,
            IndexAxis::X => &self.options.scales.y,
        };
        (
            axis.min.unwrap_or(PROGRESS_AXIS_MIN),
            axis.max.unwrap_or(PROGRESS_AXIS_MAX),
        )
    }

    /// Title of the value axis, when displayed.
    pub fn value_axis_title(&self) -> Option<&str> {
        let axis = match self.options.index_axis {
            IndexAxis::Y => &self.options.scales.x,
            IndexAxis::X => &self.options.scales.y,
        };
        axis.title
            .as_ref()
            .filter(|t| t.display)
            .map(|t| t.text.as_str())
    }

    /// Serialize to the JSON shape Chart.js expects. NaN becomes `null`.
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn value_is_passed_through() {
        let config = ChartConfig::progress_bar(42.5, &ChartStyle::default());
        assert_eq!(config.value(), Some(42.5));
        assert_eq!(config.data.labels, vec!["Progress".to_string()]);
    }

    #[test]
    fn axis_is_fixed_regardless_of_value() {
        for value in [-20.0, 0.0, 150.0, f64::INFINITY] {
            let config = ChartConfig::progress_bar(value, &ChartStyle::default());
            assert_eq!(config.value_range(), (0.0, 100.0));
            assert_eq!(config.options.scales.x.max, Some(100.0));
        }
    }

    #[test]
    fn json_shape_matches_chartjs() {
        let config = ChartConfig::progress_bar(42.5, &ChartStyle::default());
        let json: serde_json::Value = serde_json::to_value(&config).unwrap();

        assert_eq!(json["type"], "bar");
        assert_eq!(json["data"]["labels"][0], "Progress");
        let dataset = &json["data"]["datasets"][0];
        assert_eq!(dataset["label"], "Progress (%)");
        assert_eq!(dataset["data"][0], 42.5);
        assert_eq!(dataset["backgroundColor"], "#28a745");
        assert_eq!(dataset["borderColor"], "#1e7e34");
        assert_eq!(dataset["borderWidth"], 1.0);

        let options = &json["options"];
        assert_eq!(options["indexAxis"], "y");
        assert_eq!(options["scales"]["x"]["beginAtZero"], true);
        assert_eq!(options["scales"]["x"]["max"], 100.0);
        assert_eq!(options["scales"]["x"]["title"]["display"], true);
        assert_eq!(options["scales"]["x"]["title"]["text"], "Progress (%)");
        assert!(options["scales"]["x"].get("display").is_none());
        assert_eq!(options["scales"]["y"], serde_json::json!({ "display": false }));
        assert_eq!(options["plugins"]["legend"]["display"], false);
    }

    #[test]
    fn nan_serializes_as_null() {
        let config = ChartConfig::progress_bar(f64::NAN, &ChartStyle::default());
        assert!(config.value().unwrap().is_nan());
        let json: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert!(json["data"]["datasets"][0]["data"][0].is_null());
    }

    #[test]
    fn axis_title_follows_style() {
        let style = ChartStyle {
            axis_title: "Fortschritt (%)".to_string(),
            ..ChartStyle::default()
        };
        let config = ChartConfig::progress_bar(1.0, &style);
        assert_eq!(config.value_axis_title(), Some("Fortschritt (%)"));
    }
}
