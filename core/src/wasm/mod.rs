//! WASM bindings for OTKit
//!
//! This module provides JavaScript-friendly bindings for the OT engine.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

// Re-export main types
#[cfg(feature = "wasm")]
pub use bindings::WasmOperation;
