//! Data types for progress charts.

mod chart;
mod options;
mod target;

pub use chart::*;
pub use options::*;
pub use target::*;
