//! Chart drawing with pluggable backends.
//!
//! This module provides:
//! - Backend-agnostic traits for querying targets and drawing charts
//! - Bar geometry shared by the built-in backend and tests
//! - Chart.js backend (wasm32)
//! - Canvas 2D backend (wasm32)
//! - Color parsing utilities

pub mod backend;
pub mod colors;
pub mod layout;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod chartjs;

// Re-export commonly used types
pub use backend::{ChartBackend, Matches, TargetQuery};
pub use colors::{is_color, palette, Rgb};
pub use layout::{BarLayout, Rect, Tick};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasBackend;
#[cfg(target_arch = "wasm32")]
pub use chartjs::{chartjs_available, ChartJsBackend};

#[cfg(target_arch = "wasm32")]
use crate::error::Result;
#[cfg(target_arch = "wasm32")]
use crate::types::{BackendChoice, ChartConfig};

/// Backend enum for runtime selection.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
pub enum Backend {
    /// The page's Chart.js.
    ChartJs(ChartJsBackend),
    /// Built-in Canvas 2D drawing.
    Canvas(CanvasBackend),
}

#[cfg(target_arch = "wasm32")]
impl Backend {
    /// Resolve a [`BackendChoice`]; `Auto` prefers Chart.js when it is loaded.
    pub fn select(choice: BackendChoice) -> Self {
        match choice {
            BackendChoice::ChartJs => Self::ChartJs(ChartJsBackend),
            BackendChoice::Canvas => Self::Canvas(CanvasBackend),
            BackendChoice::Auto if chartjs_available() => Self::ChartJs(ChartJsBackend),
            BackendChoice::Auto => Self::Canvas(CanvasBackend),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ChartBackend<web_sys::HtmlCanvasElement> for Backend {
    fn draw(&mut self, target: &web_sys::HtmlCanvasElement, config: &ChartConfig) -> Result<()> {
        match self {
            Self::ChartJs(b) => b.draw(target, config),
            Self::Canvas(b) => b.draw(target, config),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::ChartJs(b) => b.name(),
            Self::Canvas(b) => b.name(),
        }
    }
}
