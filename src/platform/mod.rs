//! Platform abstraction layer
//!
//! Browser implementations of the renderer's boundary traits:
//! - Canvas 2D surface
//! - Image asset store with polled readiness

#[cfg(target_arch = "wasm32")]
pub mod web;
