use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use platform_host::{ClipboardError, CopyReceipt, DeviceClass};

use crate::{
    feedback::{CopyFeedback, COPY_FEEDBACK_DURATION},
    runtime_context::ShareRuntimeContext,
};

/// Device class re-derived on every viewport resize.
pub(crate) fn use_device_class(runtime: ShareRuntimeContext) -> RwSignal<DeviceClass> {
    let device = create_rw_signal(runtime.device_class());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let next = runtime.device_class();
        if device.get_untracked() != next {
            device.set(next);
        }
    });
    on_cleanup(move || resize_listener.remove());

    device
}

// Headless builds have no timer queue; feedback holds until the next copy.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy)]
struct TimeoutHandle;

#[cfg(not(target_arch = "wasm32"))]
impl TimeoutHandle {
    fn clear(&self) {}
}

/// Single re-armable timeout owned by the current reactive scope.
///
/// Arming cancels the pending timeout; scope teardown cancels it too. Once the scope is gone,
/// arming schedules nothing.
#[derive(Clone, Copy)]
pub(crate) struct RevertTimer {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl RevertTimer {
    pub(crate) fn new() -> Self {
        let timer = Self {
            handle: store_value(None),
        };
        on_cleanup(move || timer.cancel());
        timer
    }

    pub(crate) fn arm(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        if self.handle.try_with_value(|_| ()).is_none() {
            return;
        }
        self.cancel();
        let Some(handle) = schedule(delay, callback) else {
            return;
        };
        if self
            .handle
            .try_update_value(|slot| *slot = Some(handle))
            .is_none()
        {
            handle.clear();
        }
    }

    pub(crate) fn cancel(&self) {
        if let Some(Some(handle)) = self.handle.try_update_value(Option::take) {
            handle.clear();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule(delay: Duration, callback: impl FnOnce() + 'static) -> Option<TimeoutHandle> {
    set_timeout_with_handle(callback, delay)
        .map_err(|err| logging::warn!("copy feedback timer failed to arm: {err:?}"))
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule(_delay: Duration, _callback: impl FnOnce() + 'static) -> Option<TimeoutHandle> {
    None
}

/// Copy-link action with transient feedback.
#[derive(Clone, Copy)]
pub(crate) struct CopyLinkAction {
    runtime: ShareRuntimeContext,
    pub(crate) feedback: RwSignal<CopyFeedback>,
    timer: RevertTimer,
}

impl CopyLinkAction {
    pub(crate) fn new(runtime: ShareRuntimeContext) -> Self {
        Self {
            runtime,
            feedback: create_rw_signal(CopyFeedback::default()),
            timer: RevertTimer::new(),
        }
    }

    /// Writes `url` to the clipboard, then shows feedback for [`COPY_FEEDBACK_DURATION`].
    pub(crate) fn copy(&self, url: String) {
        let Some(clipboard) = self
            .runtime
            .host
            .try_with_value(|host| host.clipboard.clone())
        else {
            return;
        };
        let action = *self;
        spawn_local(async move {
            let outcome = clipboard.write_text(&url).await;
            action.finish(&url, outcome);
        });
    }

    /// Applies a resolved clipboard write to the feedback state.
    ///
    /// The owning view may be gone by the time the write resolves; nothing is updated then.
    fn finish(&self, url: &str, outcome: Result<CopyReceipt, ClipboardError>) {
        match &outcome {
            Ok(receipt) => {
                if let Some(reason) = receipt.fallback_reason.as_deref() {
                    logging::warn!(
                        "clipboard API failed ({reason}); copied via {}",
                        receipt.method.as_str()
                    );
                }
            }
            Err(err) => logging::warn!("copy link failed for `{url}`: {err}"),
        }

        let Some(ticket) = self.feedback.try_update(|feedback| feedback.record(&outcome)) else {
            return;
        };
        let feedback = self.feedback;
        self.timer.arm(COPY_FEEDBACK_DURATION, move || {
            feedback.try_update(|feedback| feedback.expire(ticket));
        });
    }
}
