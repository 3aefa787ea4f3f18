//! Browser DOM adapters and the page-ready hook.
//!
//! The hook is an explicit handle rather than a global registration: while it
//! is pending, dropping it (or calling `shutdown`) removes the
//! `DOMContentLoaded` listener.

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use crate::error::{describe_js, ProgressChartError, Result};
use crate::log;
use crate::render::{Backend, Matches, TargetQuery};
use crate::renderer::ProgressChartRenderer;
use crate::target::AttributeSource;
use crate::types::{MarkerSelector, RenderReport, RendererOptions};

impl AttributeSource for HtmlCanvasElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// The current page's document.
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the global window.
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .ok_or_else(|| ProgressChartError::Dom("No window".to_string()))?
            .document()
            .ok_or_else(|| ProgressChartError::Dom("No document".to_string()))?;
        Ok(Self::new(document))
    }

    /// Whether the document is still being parsed.
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl TargetQuery for DomDocument {
    type Target = HtmlCanvasElement;

    fn query_targets(&self, marker: &MarkerSelector) -> Result<Matches<HtmlCanvasElement>> {
        let nodes = self
            .document
            .query_selector_all(&marker.css())
            .map_err(|e| ProgressChartError::Dom(describe_js(&e)))?;

        let mut matches = Matches::new(Vec::with_capacity(
            usize::try_from(nodes.length()).unwrap_or(0),
        ));
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            match node.dyn_into::<HtmlCanvasElement>() {
                Ok(canvas) => matches.targets.push(canvas),
                Err(_) => matches.unsupported += 1,
            }
        }
        Ok(matches)
    }
}

/// Run one pass over the current document.
pub fn render_document(options: &RendererOptions) -> Result<RenderReport> {
    let document = DomDocument::current()?;
    let mut renderer = ProgressChartRenderer::new(options.clone(), Backend::select(options.backend))?;
    renderer.render_all(&document)
}

/// Handle for a render pass scheduled on `DOMContentLoaded`.
#[wasm_bindgen]
pub struct ReadyHook {
    listener: Option<EventListener>,
}

#[wasm_bindgen]
impl ReadyHook {
    /// Whether the pass is still waiting for the document to load.
    #[wasm_bindgen(js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.listener.is_some()
    }

    /// Cancel a pending pass. No effect once the pass has run.
    pub fn shutdown(&mut self) {
        self.listener.take();
    }
}

impl ReadyHook {
    /// Keep a pending listener alive for the rest of the page's life.
    pub(crate) fn forget(self) {
        if let Some(listener) = self.listener {
            listener.forget();
        }
    }
}

/// Render now if the document is parsed, otherwise once it is.
///
/// A pass run immediately reports its error to the caller; a deferred pass
/// logs it to the console.
pub fn install_hook(options: RendererOptions) -> Result<ReadyHook> {
    options.validate()?;
    let document = DomDocument::current()?;

    if !document.is_loading() {
        render_document(&options)?;
        return Ok(ReadyHook { listener: None });
    }

    let listener = EventListener::once(&document.document, "DOMContentLoaded", move |_event| {
        if let Err(e) = render_document(&options) {
            log::error(&format!("progress charts: {e}"));
        }
    });
    Ok(ReadyHook {
        listener: Some(listener),
    })
}
