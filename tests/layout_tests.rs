//! Bar geometry tests for the built-in canvas backend.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

use progress_charts::render::BarLayout;
use progress_charts::{ChartConfig, ChartStyle};

const WIDTH: f64 = 416.0;
const HEIGHT: f64 = 120.0;

fn layout_for(progress: f64) -> BarLayout {
    BarLayout::compute(
        WIDTH,
        HEIGHT,
        &ChartConfig::progress_bar(progress, &ChartStyle::default()),
    )
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn plot_area_fits_inside_canvas() {
    let layout = layout_for(50.0);
    assert!(layout.plot.x >= 0.0);
    assert!(layout.plot.right() <= WIDTH);
    assert!(layout.plot.bottom() <= HEIGHT);
    assert!(layout.plot.h > 0.0);
    let (_, _, title_y) = layout.title.clone().unwrap();
    assert!(title_y <= HEIGHT);
}

#[test]
fn bar_length_is_proportional_to_progress() {
    let half = layout_for(50.0);
    let bar = half.bar.unwrap();
    assert!(approx(bar.w, half.track.w / 2.0));
    assert_eq!(bar.x, half.track.x);
    assert_eq!(bar.y, half.track.y);
    assert_eq!(bar.h, half.track.h);

    let quarter = layout_for(25.0).bar.unwrap();
    assert!(approx(quarter.w * 2.0, bar.w));
}

#[test]
fn values_beyond_the_axis_are_clamped_for_display() {
    let over = layout_for(150.0);
    assert!(approx(over.bar.unwrap().w, over.track.w));

    assert!(layout_for(-10.0).bar.is_none());
    assert!(layout_for(0.0).bar.is_none());
}

#[test]
fn nan_draws_no_bar_but_keeps_axis() {
    let layout = layout_for(f64::NAN);
    assert!(layout.bar.is_none());
    assert_eq!(layout.ticks.len(), 6);
    assert!(layout.track.w > 0.0);
}

#[test]
fn ticks_span_zero_to_hundred() {
    let layout = layout_for(42.0);
    let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "20", "40", "60", "80", "100"]);
    assert!(approx(layout.ticks[0].x, layout.plot.x));
    assert!(approx(layout.ticks[5].x, layout.plot.right()));
}

#[test]
fn axis_title_is_centered_under_plot() {
    let layout = layout_for(42.0);
    let (text, x, _) = layout.title.unwrap();
    assert_eq!(text, "Progress (%)");
    assert!(approx(x, layout.plot.x + layout.plot.w / 2.0));
}

#[test]
fn hidden_axis_title_gives_the_plot_more_room() {
    let mut config = ChartConfig::progress_bar(42.0, &ChartStyle::default());
    let with_title = BarLayout::compute(WIDTH, HEIGHT, &config);

    if let Some(title) = config.options.scales.x.title.as_mut() {
        title.display = false;
    }
    let without_title = BarLayout::compute(WIDTH, HEIGHT, &config);

    assert!(without_title.title.is_none());
    assert!(without_title.plot.h > with_title.plot.h);
}

#[test]
fn tiny_canvas_collapses_without_negative_sizes() {
    let layout = BarLayout::compute(
        4.0,
        4.0,
        &ChartConfig::progress_bar(80.0, &ChartStyle::default()),
    );
    assert_eq!(layout.plot.w, 0.0);
    assert_eq!(layout.plot.h, 0.0);
    assert!(layout.bar.map_or(true, |b| b.w >= 0.0 && b.h >= 0.0));
}
