//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! Calls route through [`interop`], which selects the `wasm32` implementation over `web-sys`
//! or the non-WASM fallback shim.

mod interop;

pub async fn clipboard_write_text(text: &str) -> Result<(), String> {
    interop::clipboard_write_text(text).await
}

pub fn legacy_copy_text(text: &str) -> Result<bool, String> {
    interop::legacy_copy_text(text)
}

pub fn async_clipboard_supported() -> bool {
    interop::async_clipboard_supported()
}

pub fn document_available() -> bool {
    interop::document_available()
}

pub fn user_agent() -> Option<String> {
    interop::user_agent()
}

pub fn location_href() -> Option<String> {
    interop::location_href()
}

pub fn location_origin() -> Option<String> {
    interop::location_origin()
}
