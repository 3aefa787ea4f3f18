//! Backend traits for pluggable chart drawing.
//!
//! The renderer only knows about these traits, so the scan-and-draw loop runs
//! the same against the browser DOM and against in-memory test doubles.

use crate::error::Result;
use crate::target::AttributeSource;
use crate::types::{ChartConfig, MarkerSelector};

/// Elements selected by a marker query.
#[derive(Debug, Clone, PartialEq)]
pub struct Matches<T> {
    /// Selected elements that can hold a chart, in document order
    pub targets: Vec<T>,
    /// Selected elements that cannot hold a chart; never read
    pub unsupported: u32,
}

impl<T> Matches<T> {
    pub fn new(targets: Vec<T>) -> Self {
        Self {
            targets,
            unsupported: 0,
        }
    }
}

/// A document that can be searched for chart targets.
pub trait TargetQuery {
    type Target: AttributeSource;

    /// All elements selected by `marker`, in document order.
    ///
    /// Selected elements that are not drawing surfaces (e.g. a marked `<div>`
    /// when no tag is required) are counted in `unsupported`, not returned.
    fn query_targets(&self, marker: &MarkerSelector) -> Result<Matches<Self::Target>>;
}

/// Trait for chart backends
///
/// Implementations draw one configured chart onto one target surface
/// (Chart.js, Canvas 2D, a recorder in tests).
pub trait ChartBackend<T> {
    /// Draw `config` onto `target`.
    fn draw(&mut self, target: &T, config: &ChartConfig) -> Result<()>;

    /// Short backend name for logging.
    fn name(&self) -> &'static str;
}

impl<T, B: ChartBackend<T> + ?Sized> ChartBackend<T> for &mut B {
    fn draw(&mut self, target: &T, config: &ChartConfig) -> Result<()> {
        (**self).draw(target, config)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
