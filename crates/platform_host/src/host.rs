//! Shared host-bundle and capability models for browser and headless composition.

use std::rc::Rc;

use crate::{
    ClipboardService, DeviceClassifier, FixedDeviceClassifier, LocationService,
    NoopClipboardService, NoopLocationService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition.
    Browser,
    /// Composition with no-op adapters (tests, non-browser builds).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not implemented or not supported on the active host.
    Unavailable,
}

/// Host capability snapshot exposed to component wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Asynchronous platform clipboard (`navigator.clipboard` in browsers).
    pub async_clipboard: CapabilityStatus,
    /// Legacy document copy command.
    pub legacy_copy: CapabilityStatus,
    /// User-agent string for device classification.
    pub user_agent: CapabilityStatus,
    /// Current page location.
    pub location: CapabilityStatus,
}

impl HostCapabilities {
    /// Headless capability posture.
    pub const fn headless() -> Self {
        Self {
            async_clipboard: CapabilityStatus::Unavailable,
            legacy_copy: CapabilityStatus::Unavailable,
            user_agent: CapabilityStatus::Unavailable,
            location: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the share components.
///
/// Environment-specific service selection happens before this bundle reaches the component
/// crate, which keeps components decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Clipboard write service.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Device-class capability.
    pub device: Rc<dyn DeviceClassifier>,
    /// Current-page location service.
    pub location: Rc<dyn LocationService>,
    /// Host availability snapshot for optional capability domains.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// No-op bundle: desktop device, no page, no clipboard.
    pub fn headless() -> Self {
        Self {
            clipboard: Rc::new(NoopClipboardService),
            device: Rc::new(FixedDeviceClassifier::default()),
            location: Rc::new(NoopLocationService),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("capabilities", &self.capabilities)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{ClipboardError, DeviceClass};

    #[test]
    fn headless_bundle_is_inert() {
        let host = HostServices::headless();

        assert_eq!(host.host_strategy.as_str(), "headless");
        assert_eq!(host.capabilities.async_clipboard, CapabilityStatus::Unavailable);
        assert_eq!(host.capabilities.legacy_copy, CapabilityStatus::Unavailable);
        assert_eq!(host.device.device_class(), DeviceClass::Desktop);
        assert_eq!(host.location.href(), None);
        assert_eq!(
            block_on(host.clipboard.write_text("x")),
            Err(ClipboardError::Unavailable)
        );
    }
}
