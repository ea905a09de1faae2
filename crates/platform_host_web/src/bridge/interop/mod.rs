//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge facade.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn clipboard_write_text(text: &str) -> Result<(), String> {
    imp::clipboard_write_text(text).await
}

pub fn legacy_copy_text(text: &str) -> Result<bool, String> {
    imp::legacy_copy_text(text)
}

pub fn async_clipboard_supported() -> bool {
    imp::async_clipboard_supported()
}

pub fn document_available() -> bool {
    imp::document_available()
}

pub fn user_agent() -> Option<String> {
    imp::user_agent()
}

pub fn location_href() -> Option<String> {
    imp::location_href()
}

pub fn location_origin() -> Option<String> {
    imp::location_origin()
}
