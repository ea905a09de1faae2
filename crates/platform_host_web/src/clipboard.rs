//! Clipboard host-service adapters for browser contexts.
//!
//! The primary path is `navigator.clipboard.writeText`. The legacy path places the text in an
//! offscreen `<input>`, selects it, and issues `document.execCommand("copy")`; the temporary
//! field is detached on every path once it has been attached.

use platform_host::{ClipboardBackend, ClipboardFuture, FallbackClipboardService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard write paths backed by the bridge interop layer.
pub struct BrowserClipboardBackend;

impl ClipboardBackend for BrowserClipboardBackend {
    fn write_async<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::clipboard_write_text(text).await })
    }

    fn write_legacy(&self, text: &str) -> Result<bool, String> {
        bridge::legacy_copy_text(text)
    }
}

/// Browser clipboard service: async Clipboard API first, `execCommand("copy")` second.
pub type WebClipboardService = FallbackClipboardService<BrowserClipboardBackend>;

/// Document operations needed by the legacy copy command.
pub trait LegacyCopyDocument {
    /// Handle to the temporary input field.
    type Field;

    /// Creates an offscreen editable field holding `text` and attaches it to the document.
    fn attach_field(&self, text: &str) -> Result<Self::Field, String>;

    /// Selects the field contents.
    fn select_field(&self, field: &Self::Field);

    /// Issues the copy command against the active document and returns its success flag.
    fn exec_copy(&self) -> Result<bool, String>;

    /// Removes the field from the document.
    fn detach_field(&self, field: Self::Field);
}

struct AttachedField<'a, D: LegacyCopyDocument> {
    document: &'a D,
    field: Option<D::Field>,
}

impl<D: LegacyCopyDocument> Drop for AttachedField<'_, D> {
    fn drop(&mut self) {
        if let Some(field) = self.field.take() {
            self.document.detach_field(field);
        }
    }
}

/// Runs the legacy copy sequence against `document`.
///
/// The temporary field is removed before returning, including when the copy command fails.
///
/// # Errors
///
/// Returns an error when the field cannot be attached or the copy command throws.
pub fn legacy_copy_with<D: LegacyCopyDocument>(document: &D, text: &str) -> Result<bool, String> {
    let attached = AttachedField {
        document,
        field: Some(document.attach_field(text)?),
    };
    if let Some(field) = attached.field.as_ref() {
        document.select_field(field);
    }
    document.exec_copy()
}

/// Returns the browser clipboard service.
pub fn web_clipboard_service() -> WebClipboardService {
    FallbackClipboardService::new(BrowserClipboardBackend)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use platform_host::{ClipboardError, ClipboardService};

    use super::*;

    #[derive(Default)]
    struct FakeDocument {
        nodes: RefCell<Vec<String>>,
        selected: RefCell<Option<String>>,
        copied: RefCell<Option<String>>,
        exec_result: Option<Result<bool, String>>,
        refuse_attach: bool,
    }

    impl LegacyCopyDocument for FakeDocument {
        type Field = usize;

        fn attach_field(&self, text: &str) -> Result<usize, String> {
            if self.refuse_attach {
                return Err("document body unavailable".to_string());
            }
            let mut nodes = self.nodes.borrow_mut();
            nodes.push(text.to_string());
            Ok(nodes.len() - 1)
        }

        fn select_field(&self, field: &usize) {
            *self.selected.borrow_mut() = self.nodes.borrow().get(*field).cloned();
        }

        fn exec_copy(&self) -> Result<bool, String> {
            let result = self.exec_result.clone().unwrap_or(Ok(true));
            if matches!(result, Ok(true)) {
                *self.copied.borrow_mut() = self.selected.borrow().clone();
            }
            result
        }

        fn detach_field(&self, field: usize) {
            self.nodes.borrow_mut().remove(field);
        }
    }

    #[test]
    fn legacy_copy_selects_field_and_removes_it() {
        let document = FakeDocument::default();

        let copied = legacy_copy_with(&document, "https://example.com/blog/a").expect("copy");

        assert!(copied);
        assert_eq!(
            document.copied.borrow().as_deref(),
            Some("https://example.com/blog/a")
        );
        assert!(document.nodes.borrow().is_empty());
    }

    #[test]
    fn failed_copy_command_still_removes_field() {
        let rejected = FakeDocument {
            exec_result: Some(Ok(false)),
            ..FakeDocument::default()
        };
        assert_eq!(legacy_copy_with(&rejected, "x"), Ok(false));
        assert!(rejected.nodes.borrow().is_empty());

        let throwing = FakeDocument {
            exec_result: Some(Err("SecurityError".to_string())),
            ..FakeDocument::default()
        };
        assert_eq!(
            legacy_copy_with(&throwing, "x"),
            Err("SecurityError".to_string())
        );
        assert!(throwing.nodes.borrow().is_empty());
        assert_eq!(*throwing.copied.borrow(), None);
    }

    #[test]
    fn attach_failure_skips_copy_command() {
        let document = FakeDocument {
            refuse_attach: true,
            ..FakeDocument::default()
        };
        assert_eq!(
            legacy_copy_with(&document, "x"),
            Err("document body unavailable".to_string())
        );
        assert_eq!(*document.selected.borrow(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_web_clipboard_reports_both_paths_unavailable() {
        let service = web_clipboard_service();
        let err = block_on(service.write_text("x")).expect_err("no browser");
        assert!(matches!(err, ClipboardError::Failed { .. }));
    }
}
