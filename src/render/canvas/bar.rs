//! Horizontal progress bar drawing for the Canvas 2D backend.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::Result;
use crate::render::backend::ChartBackend;
use crate::render::colors::{palette, Rgb};
use crate::render::layout::BarLayout;
use crate::types::ChartConfig;

use super::context_2d;

/// Built-in renderer that paints the chart itself. Repaints on every draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct CanvasBackend;

impl CanvasBackend {
    const TICK_FONT: &'static str = "12px Helvetica, Arial, sans-serif";
    const TITLE_FONT: &'static str = "bold 12px Helvetica, Arial, sans-serif";

    fn paint(ctx: &CanvasRenderingContext2d, layout: &BarLayout, config: &ChartConfig) {
        let dataset = config.primary_dataset();
        let fill = dataset.map_or(palette::TICK_TEXT, |d| d.background_color.as_str());
        let border = dataset.map_or(palette::TICK_TEXT, |d| d.border_color.as_str());
        let border_width = dataset.map_or(0.0, |d| d.border_width);
        let x_axis_visible = config.options.scales.x.is_displayed();

        // Grid lines behind the bar
        if x_axis_visible {
            ctx.set_stroke_style_str(palette::GRID_LINE);
            ctx.set_line_width(1.0);
            for tick in &layout.ticks {
                ctx.begin_path();
                ctx.move_to(tick.x, layout.plot.y);
                ctx.line_to(tick.x, layout.plot.bottom());
                ctx.stroke();
            }
        }

        // Unfilled track
        let track_color = Rgb::from_css(fill)
            .map(|c| c.lighten(palette::TRACK_TINT).to_hex())
            .unwrap_or_else(|| palette::WHITE.to_string());
        ctx.set_fill_style_str(&track_color);
        let track = layout.track;
        ctx.fill_rect(track.x, track.y, track.w, track.h);

        // Filled portion
        if let Some(bar) = layout.bar {
            ctx.set_fill_style_str(fill);
            ctx.fill_rect(bar.x, bar.y, bar.w, bar.h);
            if border_width > 0.0 {
                ctx.set_stroke_style_str(border);
                ctx.set_line_width(border_width);
                ctx.stroke_rect(bar.x, bar.y, bar.w, bar.h);
            }
        }

        if !x_axis_visible {
            return;
        }

        ctx.set_font(Self::TICK_FONT);
        ctx.set_fill_style_str(palette::TICK_TEXT);
        ctx.set_text_align("center");
        for tick in &layout.ticks {
            let _ = ctx.fill_text(&tick.label, tick.x, layout.tick_label_y);
        }

        if let Some((text, x, y)) = &layout.title {
            ctx.set_font(Self::TITLE_FONT);
            let _ = ctx.fill_text(text, *x, *y);
        }
        ctx.set_text_align("left");
    }
}

impl ChartBackend<HtmlCanvasElement> for CanvasBackend {
    fn draw(&mut self, canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<()> {
        let ctx = context_2d(canvas)?;
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());

        ctx.clear_rect(0.0, 0.0, width, height);
        let layout = BarLayout::compute(width, height, config);
        Self::paint(&ctx, &layout, config);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "canvas"
    }
}
