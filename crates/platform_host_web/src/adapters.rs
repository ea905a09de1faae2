use std::rc::Rc;

use platform_host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};

use crate::{
    bridge, web_clipboard_service, WebClipboardService, WebDeviceClassifier, WebLocationService,
};

/// Returns the host strategy for the active build target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

fn status(available: bool) -> CapabilityStatus {
    if available {
        CapabilityStatus::Available
    } else {
        CapabilityStatus::Unavailable
    }
}

/// Probes the browser for the capabilities the share components rely on.
///
/// `navigator.clipboard` is absent outside secure contexts, in which case only the legacy copy
/// command remains.
pub fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities {
            async_clipboard: status(bridge::async_clipboard_supported()),
            legacy_copy: status(bridge::document_available()),
            user_agent: status(bridge::user_agent().is_some()),
            location: status(bridge::location_href().is_some()),
        },
        HostStrategy::Headless => HostCapabilities::headless(),
    }
}

/// Returns the browser clipboard service.
pub fn clipboard_service() -> WebClipboardService {
    web_clipboard_service()
}

/// Returns the browser device classifier.
pub fn device_classifier() -> WebDeviceClassifier {
    WebDeviceClassifier
}

/// Returns the browser location service.
pub fn location_service() -> WebLocationService {
    WebLocationService
}

/// Builds the injected host bundle for the active target.
pub fn build_host_services() -> HostServices {
    HostServices {
        clipboard: Rc::new(clipboard_service()),
        device: Rc::new(device_classifier()),
        location: Rc::new(location_service()),
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_builds_headless_bundle() {
        let host = build_host_services();

        assert_eq!(host.host_strategy, HostStrategy::Headless);
        assert_eq!(host_strategy_name(), "headless");
        assert_eq!(host.capabilities, HostCapabilities::headless());
        assert_eq!(host.location.href(), None);
        assert!(!host.device.device_class().is_mobile());
    }
}
