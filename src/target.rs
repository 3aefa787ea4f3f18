//! Reading chart targets from element attributes.

use crate::error::{ProgressChartError, Result};
use crate::progress::parse_float;
use crate::types::{ChartTarget, MalformedPolicy, RendererOptions};

/// Anything that exposes string attributes by name (a DOM element, a mock).
pub trait AttributeSource {
    /// Attribute value, `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}

/// Parse a progress attribute value.
///
/// Fails with `MissingAttribute` when absent and `InvalidNumber` when the
/// value has no numeric prefix.
pub fn read_progress(name: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or_else(|| ProgressChartError::MissingAttribute {
        name: name.to_string(),
    })?;
    let value = parse_float(raw);
    if value.is_nan() {
        return Err(ProgressChartError::InvalidNumber {
            name: name.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Read a chart target strictly: unreadable progress is an error.
pub fn extract_target<S: AttributeSource>(source: &S, options: &RendererOptions) -> Result<ChartTarget> {
    let raw = source.attribute(&options.progress_attribute);
    let progress = read_progress(&options.progress_attribute, raw.as_deref())?;
    Ok(ChartTarget {
        progress,
        goal_id: source.attribute(&options.goal_id_attribute),
    })
}

/// Read a chart target under the configured [`MalformedPolicy`].
///
/// Returns `Ok(None)` when the target should be skipped.
pub fn extract_with_policy<S: AttributeSource>(
    source: &S,
    options: &RendererOptions,
) -> Result<Option<ChartTarget>> {
    match extract_target(source, options) {
        Ok(target) => Ok(Some(target)),
        Err(e) if e.is_extraction() => match options.on_malformed {
            MalformedPolicy::PassThrough => Ok(Some(ChartTarget {
                progress: f64::NAN,
                goal_id: source.attribute(&options.goal_id_attribute),
            })),
            MalformedPolicy::Skip => Ok(None),
            MalformedPolicy::Fail => Err(e),
        },
        Err(e) => Err(e),
    }
}
