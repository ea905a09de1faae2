use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlElement, HtmlInputElement, Window};

use crate::clipboard::{legacy_copy_with, LegacyCopyDocument};

const OFFSCREEN_FIELD_STYLE: &str =
    "position:fixed;top:0;left:-9999px;width:1px;height:1px;opacity:0;pointer-events:none;";

fn js_error(context: &str, err: JsValue) -> String {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    format!("{context}: {detail}")
}

fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn document() -> Result<Document, String> {
    window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())
}

fn clipboard_handle() -> Option<web_sys::Clipboard> {
    let navigator = web_sys::window()?.navigator();
    let value = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into())
}

pub async fn clipboard_write_text(text: &str) -> Result<(), String> {
    let clipboard = clipboard_handle().ok_or_else(|| "clipboard API unavailable".to_string())?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| js_error("clipboard write rejected", err))
}

struct DomLegacyCopyDocument {
    document: Document,
    body: HtmlElement,
}

impl LegacyCopyDocument for DomLegacyCopyDocument {
    type Field = HtmlInputElement;

    fn attach_field(&self, text: &str) -> Result<HtmlInputElement, String> {
        let field = self
            .document
            .create_element("input")
            .map_err(|err| js_error("create input failed", err))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| "created element is not an input".to_string())?;
        field.set_value(text);
        field
            .set_attribute("style", OFFSCREEN_FIELD_STYLE)
            .map_err(|err| js_error("style input failed", err))?;
        field
            .set_attribute("aria-hidden", "true")
            .map_err(|err| js_error("style input failed", err))?;
        self.body
            .append_child(&field)
            .map_err(|err| js_error("attach input failed", err))?;
        Ok(field)
    }

    fn select_field(&self, field: &HtmlInputElement) {
        field.select();
    }

    fn exec_copy(&self) -> Result<bool, String> {
        self.document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| "document does not support execCommand".to_string())?
            .exec_command("copy")
            .map_err(|err| js_error("copy command failed", err))
    }

    fn detach_field(&self, field: HtmlInputElement) {
        field.remove();
    }
}

pub fn legacy_copy_text(text: &str) -> Result<bool, String> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| "document body unavailable".to_string())?;
    legacy_copy_with(&DomLegacyCopyDocument { document, body }, text)
}

pub fn async_clipboard_supported() -> bool {
    clipboard_handle().is_some()
}

pub fn document_available() -> bool {
    document().map(|doc| doc.body().is_some()).unwrap_or(false)
}

pub fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

pub fn location_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

pub fn location_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
