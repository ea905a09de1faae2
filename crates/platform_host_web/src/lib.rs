//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for clipboard writes, device
//! classification, and page location. Bridge bindings live under `bridge/`, with
//! `bridge::interop` selecting the `web-sys` implementation or the non-WASM shim.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod clipboard;
pub mod device;
pub mod location;

pub use adapters::{
    build_host_services, clipboard_service, device_classifier, host_capabilities,
    host_strategy_name, location_service, selected_host_strategy,
};
pub use clipboard::{
    legacy_copy_with, web_clipboard_service, BrowserClipboardBackend, LegacyCopyDocument,
    WebClipboardService,
};
pub use device::WebDeviceClassifier;
pub use location::WebLocationService;
