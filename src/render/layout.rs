//! Geometry of the horizontal progress bar.
//!
//! Pure computation: the canvas backend draws exactly what this returns, so
//! placement can be tested without a browser.

use crate::types::ChartConfig;

/// Space between the canvas edge and the plot area
const PADDING: f64 = 8.0;
/// Height reserved for tick labels under the plot
const TICK_LABEL_HEIGHT: f64 = 16.0;
/// Height reserved for the axis title under the tick labels
const AXIS_TITLE_HEIGHT: f64 = 18.0;
/// Fraction of the plot height taken by the bar
const BAR_THICKNESS: f64 = 0.6;
/// Number of intervals between tick marks
const TICK_INTERVALS: u32 = 5;

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// A tick mark on the value axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Horizontal canvas position
    pub x: f64,
    pub label: String,
}

/// Everything the canvas backend draws for one chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    /// Area between the axes
    pub plot: Rect,
    /// Full-width background track behind the bar
    pub track: Rect,
    /// Filled bar; `None` when the value is NaN or not above the axis minimum
    pub bar: Option<Rect>,
    pub ticks: Vec<Tick>,
    /// Baseline position of the tick labels
    pub tick_label_y: f64,
    /// Axis title and its center point
    pub title: Option<(String, f64, f64)>,
}

impl BarLayout {
    /// Lay out `config` on a canvas of `width` x `height` pixels.
    pub fn compute(width: f64, height: f64, config: &ChartConfig) -> Self {
        let title = config.value_axis_title();
        let bottom_reserved =
            TICK_LABEL_HEIGHT + if title.is_some() { AXIS_TITLE_HEIGHT } else { 0.0 };

        let plot = Rect {
            x: PADDING,
            y: PADDING,
            w: (width - PADDING * 2.0).max(0.0),
            h: (height - PADDING * 2.0 - bottom_reserved).max(0.0),
        };

        let thickness = plot.h * BAR_THICKNESS;
        let track = Rect {
            x: plot.x,
            y: plot.y + (plot.h - thickness) / 2.0,
            w: plot.w,
            h: thickness,
        };

        let (min, max) = config.value_range();
        let bar = config
            .value()
            .and_then(|value| fill_fraction(value, min, max))
            .map(|fraction| Rect {
                w: track.w * fraction,
                ..track
            });

        let ticks = (0..=TICK_INTERVALS)
            .map(|i| {
                let fraction = f64::from(i) / f64::from(TICK_INTERVALS);
                Tick {
                    x: plot.x + plot.w * fraction,
                    label: format_tick(min + (max - min) * fraction),
                }
            })
            .collect();

        let tick_label_y = plot.bottom() + TICK_LABEL_HEIGHT - 4.0;
        let title = title.map(|text| {
            (
                text.to_string(),
                plot.x + plot.w / 2.0,
                tick_label_y + AXIS_TITLE_HEIGHT,
            )
        });

        Self {
            plot,
            track,
            bar,
            ticks,
            tick_label_y,
            title,
        }
    }
}

/// Portion of the axis covered by `value`, clamped to `[0, 1]`.
///
/// `None` when nothing should be filled: NaN, a degenerate axis, or a value
/// at or below the minimum.
pub fn fill_fraction(value: f64, min: f64, max: f64) -> Option<f64> {
    let span = max - min;
    if value.is_nan() || span.is_nan() || span <= 0.0 {
        return None;
    }
    let fraction = ((value - min) / span).clamp(0.0, 1.0);
    (fraction > 0.0).then_some(fraction)
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
