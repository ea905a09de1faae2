//! Clipboard host-service contracts and the copy-with-fallback strategy.
//!
//! Concrete environments provide a [`ClipboardBackend`] exposing two write paths: the async
//! platform clipboard and a legacy synchronous copy command. [`FallbackClipboardService`] owns the
//! ordering between them so every backend reports outcomes the same way.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ClipboardService`] and [`ClipboardBackend`].
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Write path that placed text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// The asynchronous platform clipboard capability accepted the write.
    AsyncClipboard,
    /// The legacy document copy command reported success.
    LegacyCommand,
}

impl CopyMethod {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AsyncClipboard => "async-clipboard",
            Self::LegacyCommand => "legacy-command",
        }
    }
}

/// Successful clipboard write report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReceipt {
    /// Path that completed the write.
    pub method: CopyMethod,
    /// Primary-path failure that triggered the fallback, when one occurred.
    pub fallback_reason: Option<String>,
}

impl CopyReceipt {
    /// Receipt for a write completed by the async clipboard.
    pub const fn primary() -> Self {
        Self {
            method: CopyMethod::AsyncClipboard,
            fallback_reason: None,
        }
    }

    /// Receipt for a write completed by the legacy command after `reason` failed the primary.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            method: CopyMethod::LegacyCommand,
            fallback_reason: Some(reason.into()),
        }
    }
}

/// Clipboard write failure after every available path was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard path exists on the active host.
    Unavailable,
    /// Both the primary and the legacy path failed.
    Failed {
        /// Primary (async clipboard) failure detail.
        primary: String,
        /// Legacy command failure detail.
        legacy: String,
    },
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "clipboard unavailable on this host"),
            Self::Failed { primary, legacy } => {
                write!(f, "clipboard write failed: {primary}; fallback: {legacy}")
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Host service for writing text to the user's clipboard.
pub trait ClipboardService {
    /// Writes `text` to the clipboard and reports which path succeeded.
    fn write_text<'a>(
        &'a self,
        text: &'a str,
    ) -> ClipboardFuture<'a, Result<CopyReceipt, ClipboardError>>;
}

/// Raw clipboard write paths supplied by a concrete environment.
pub trait ClipboardBackend {
    /// Writes through the asynchronous platform clipboard.
    ///
    /// Returns `Err` when the capability is absent or the platform rejects the write.
    fn write_async<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>>;

    /// Writes through the legacy synchronous copy command.
    ///
    /// Returns the command's own success flag; `Err` is reserved for failures before or while
    /// issuing the command.
    fn write_legacy(&self, text: &str) -> Result<bool, String>;
}

/// [`ClipboardService`] that tries the async clipboard first and the legacy command second.
///
/// The legacy command's return value is checked: a `false` result is a failure, not an
/// optimistic success.
#[derive(Debug, Clone, Default)]
pub struct FallbackClipboardService<B> {
    backend: B,
}

impl<B> FallbackClipboardService<B> {
    /// Wraps a backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ClipboardBackend> ClipboardService for FallbackClipboardService<B> {
    fn write_text<'a>(
        &'a self,
        text: &'a str,
    ) -> ClipboardFuture<'a, Result<CopyReceipt, ClipboardError>> {
        Box::pin(async move {
            let primary = match self.backend.write_async(text).await {
                Ok(()) => return Ok(CopyReceipt::primary()),
                Err(err) => err,
            };

            match self.backend.write_legacy(text) {
                Ok(true) => Ok(CopyReceipt::fallback(primary)),
                Ok(false) => Err(ClipboardError::Failed {
                    primary,
                    legacy: "copy command returned false".to_string(),
                }),
                Err(legacy) => Err(ClipboardError::Failed { primary, legacy }),
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard service for hosts without any clipboard.
pub struct NoopClipboardService;

impl ClipboardService for NoopClipboardService {
    fn write_text<'a>(
        &'a self,
        _text: &'a str,
    ) -> ClipboardFuture<'a, Result<CopyReceipt, ClipboardError>> {
        Box::pin(async { Err(ClipboardError::Unavailable) })
    }
}

/// In-memory clipboard backend with switchable write paths.
///
/// Clones share the same recorded contents.
#[derive(Debug, Clone)]
pub struct MemoryClipboardBackend {
    inner: Rc<RefCell<MemoryClipboardInner>>,
}

#[derive(Debug)]
struct MemoryClipboardInner {
    async_available: bool,
    legacy_result: Result<bool, String>,
    contents: Option<String>,
    async_writes: usize,
    legacy_writes: usize,
}

impl Default for MemoryClipboardBackend {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryClipboardInner {
                async_available: true,
                legacy_result: Ok(true),
                contents: None,
                async_writes: 0,
                legacy_writes: 0,
            })),
        }
    }
}

impl MemoryClipboardBackend {
    /// Enables or disables the async clipboard path.
    pub fn set_async_available(&self, available: bool) {
        self.inner.borrow_mut().async_available = available;
    }

    /// Sets the outcome reported by the legacy command path.
    pub fn set_legacy_result(&self, result: Result<bool, String>) {
        self.inner.borrow_mut().legacy_result = result;
    }

    /// Returns the last successfully written text.
    pub fn contents(&self) -> Option<String> {
        self.inner.borrow().contents.clone()
    }

    /// Returns `(async, legacy)` write attempt counts.
    pub fn attempts(&self) -> (usize, usize) {
        let inner = self.inner.borrow();
        (inner.async_writes, inner.legacy_writes)
    }
}

impl ClipboardBackend for MemoryClipboardBackend {
    fn write_async<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.async_writes += 1;
            if !inner.async_available {
                return Err("clipboard API unavailable".to_string());
            }
            inner.contents = Some(text.to_string());
            Ok(())
        })
    }

    fn write_legacy(&self, text: &str) -> Result<bool, String> {
        let mut inner = self.inner.borrow_mut();
        inner.legacy_writes += 1;
        let result = inner.legacy_result.clone();
        if matches!(result, Ok(true)) {
            inner.contents = Some(text.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn service() -> (FallbackClipboardService<MemoryClipboardBackend>, MemoryClipboardBackend) {
        let backend = MemoryClipboardBackend::default();
        (FallbackClipboardService::new(backend.clone()), backend)
    }

    #[test]
    fn primary_path_skips_legacy_command() {
        let (service, backend) = service();

        let receipt = block_on(service.write_text("https://example.com/a")).expect("copy");

        assert_eq!(receipt, CopyReceipt::primary());
        assert_eq!(backend.attempts(), (1, 0));
        assert_eq!(backend.contents().as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn missing_primary_falls_back_to_legacy_command() {
        let (service, backend) = service();
        backend.set_async_available(false);

        let receipt = block_on(service.write_text("https://example.com/b")).expect("copy");

        assert_eq!(receipt.method, CopyMethod::LegacyCommand);
        assert_eq!(
            receipt.fallback_reason.as_deref(),
            Some("clipboard API unavailable")
        );
        assert_eq!(backend.attempts(), (1, 1));
        assert_eq!(backend.contents().as_deref(), Some("https://example.com/b"));
    }

    #[test]
    fn legacy_false_is_reported_as_failure() {
        let (service, backend) = service();
        backend.set_async_available(false);
        backend.set_legacy_result(Ok(false));

        let err = block_on(service.write_text("x")).expect_err("both paths fail");

        assert_eq!(
            err,
            ClipboardError::Failed {
                primary: "clipboard API unavailable".to_string(),
                legacy: "copy command returned false".to_string(),
            }
        );
        assert_eq!(backend.contents(), None);
    }

    #[test]
    fn legacy_error_keeps_both_failure_details() {
        let (service, backend) = service();
        backend.set_async_available(false);
        backend.set_legacy_result(Err("no document body".to_string()));

        let err = block_on(service.write_text("x")).expect_err("both paths fail");

        assert!(err.to_string().contains("clipboard API unavailable"));
        assert!(err.to_string().contains("no document body"));
    }

    #[test]
    fn noop_service_reports_unavailable() {
        let service: &dyn ClipboardService = &NoopClipboardService;
        assert_eq!(
            block_on(service.write_text("x")),
            Err(ClipboardError::Unavailable)
        );
    }
}
