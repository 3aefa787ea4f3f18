//! Common test doubles: an in-memory document and a recording backend.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use progress_charts::render::{ChartBackend, Matches, TargetQuery};
use progress_charts::{AttributeSource, ChartConfig, MarkerSelector, ProgressChartError};

// ============================================================================
// Document
// ============================================================================

/// An element with a tag, classes, and attributes. Counts attribute reads.
#[derive(Debug, Clone)]
pub struct MockElement {
    pub id: usize,
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    reads: Rc<Cell<u32>>,
}

impl MockElement {
    pub fn new(tag: &str, classes: &[&str]) -> Self {
        Self {
            id: 0,
            tag: tag.to_string(),
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            attrs: HashMap::new(),
            reads: Rc::new(Cell::new(0)),
        }
    }

    /// A `<canvas class="progress-chart">` with the given attributes.
    pub fn chart(progress: Option<&str>, goal_id: Option<&str>) -> Self {
        let mut element = Self::new("canvas", &["progress-chart"]);
        if let Some(p) = progress {
            element = element.with_attr("data-progress", p);
        }
        if let Some(g) = goal_id {
            element = element.with_attr("data-goal-id", g);
        }
        element
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Number of attribute reads on this element (shared across clones).
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl AttributeSource for MockElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.attrs.get(name).cloned()
    }
}

/// Elements in document order.
#[derive(Debug, Default)]
pub struct MockDocument {
    pub elements: Vec<MockElement>,
}

impl MockDocument {
    pub fn new(elements: Vec<MockElement>) -> Self {
        let elements = elements
            .into_iter()
            .enumerate()
            .map(|(id, mut e)| {
                e.id = id;
                e
            })
            .collect();
        Self { elements }
    }
}

impl TargetQuery for MockDocument {
    type Target = MockElement;

    /// Like the browser adapter, only `<canvas>` elements become targets.
    fn query_targets(
        &self,
        marker: &MarkerSelector,
    ) -> progress_charts::Result<Matches<MockElement>> {
        let mut matches = Matches::new(Vec::new());
        for element in &self.elements {
            if !marker.matches(&element.tag, element.classes.iter().map(String::as_str)) {
                continue;
            }
            if element.tag.eq_ignore_ascii_case("canvas") {
                matches.targets.push(element.clone());
            } else {
                matches.unsupported += 1;
            }
        }
        Ok(matches)
    }
}

// ============================================================================
// Backend
// ============================================================================

/// Records every draw call; optionally fails on one element.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub draws: Vec<(usize, ChartConfig)>,
    pub fail_on: Option<usize>,
}

impl RecordingBackend {
    pub fn failing_on(id: usize) -> Self {
        Self {
            fail_on: Some(id),
            ..Self::default()
        }
    }

    /// Element ids in draw order.
    pub fn drawn_ids(&self) -> Vec<usize> {
        self.draws.iter().map(|(id, _)| *id).collect()
    }

    /// Plotted values in draw order.
    pub fn values(&self) -> Vec<f64> {
        self.draws
            .iter()
            .map(|(_, config)| config.value().expect("config has a data point"))
            .collect()
    }
}

impl ChartBackend<MockElement> for RecordingBackend {
    fn draw(&mut self, target: &MockElement, config: &ChartConfig) -> progress_charts::Result<()> {
        if self.fail_on == Some(target.id) {
            return Err(ProgressChartError::Render(format!(
                "canvas {} refused",
                target.id
            )));
        }
        self.draws.push((target.id, config.clone()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
