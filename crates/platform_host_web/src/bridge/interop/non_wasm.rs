fn unsupported() -> String {
    "Browser clipboard APIs are only available when compiled for wasm32".to_string()
}

pub async fn clipboard_write_text(_text: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn legacy_copy_text(_text: &str) -> Result<bool, String> {
    Err(unsupported())
}

pub fn async_clipboard_supported() -> bool {
    false
}

pub fn document_available() -> bool {
    false
}

pub fn user_agent() -> Option<String> {
    None
}

pub fn location_href() -> Option<String> {
    None
}

pub fn location_origin() -> Option<String> {
    None
}
