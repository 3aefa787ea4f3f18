//! Browser console logging.
//!
//! The console only exists in the browser; on other targets these are no-ops
//! so the renderer can run in host tests and the CLI.

#[cfg(target_arch = "wasm32")]
pub(crate) fn info(message: &str) {
    gloo::console::info!(message);
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    gloo::console::warn!(message);
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn error(message: &str) {
    gloo::console::error!(message);
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub(crate) fn error(_message: &str) {}
