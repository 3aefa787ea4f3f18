//! The scan-and-draw pass.

use crate::error::Result;
use crate::log;
use crate::render::{ChartBackend, TargetQuery};
use crate::target::extract_with_policy;
use crate::types::{ChartConfig, RenderReport, RendererOptions};

/// Draws one progress chart per marked element.
///
/// Holds no state between passes besides its options and backend; running
/// [`render_all`](Self::render_all) twice re-reads every target and draws it again.
pub struct ProgressChartRenderer<B> {
    options: RendererOptions,
    backend: B,
}

impl<B> ProgressChartRenderer<B> {
    /// Create a renderer, rejecting invalid options.
    pub fn new(options: RendererOptions, backend: B) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, backend })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Scan `document` and draw every target, in document order.
    ///
    /// The first DOM or backend failure aborts the pass. Targets with an
    /// unreadable progress value follow the configured malformed policy.
    pub fn render_all<Q>(&mut self, document: &Q) -> Result<RenderReport>
    where
        Q: TargetQuery,
        B: ChartBackend<Q::Target>,
    {
        let marker = self.options.marker();
        let matches = document.query_targets(&marker)?;
        let mut report = RenderReport {
            found: u32::try_from(matches.targets.len())
                .unwrap_or(u32::MAX)
                .saturating_add(matches.unsupported),
            skipped: matches.unsupported,
            ..RenderReport::default()
        };
        if matches.unsupported > 0 {
            log::warn(&format!(
                "skipping {} {} elements that are not canvases",
                matches.unsupported,
                marker.css()
            ));
        }

        for element in &matches.targets {
            let Some(target) = extract_with_policy(element, &self.options)? else {
                log::warn(&format!(
                    "skipping {} target without a numeric {}",
                    marker.css(),
                    self.options.progress_attribute
                ));
                report.skipped += 1;
                continue;
            };
            let config = ChartConfig::progress_bar(target.progress, &self.options.style);
            self.backend.draw(element, &config)?;
            report.drawn += 1;
        }

        log::info(&format!(
            "{}: drew {} of {} progress charts with {}",
            marker.css(),
            report.drawn,
            report.found,
            self.backend.name()
        ));
        Ok(report)
    }
}
