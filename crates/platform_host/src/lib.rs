//! Typed host-domain contracts shared by the share components and browser adapters.
//!
//! This crate is the API-first boundary for platform services: clipboard writes (with the
//! async-first, legacy-second strategy), device classification, current-page location, and the
//! capability snapshot. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod device;
pub mod host;
pub mod location;

pub use clipboard::{
    ClipboardBackend, ClipboardError, ClipboardFuture, ClipboardService, CopyMethod, CopyReceipt,
    FallbackClipboardService, MemoryClipboardBackend, NoopClipboardService,
};
pub use device::{
    classify_user_agent, DeviceClass, DeviceClassifier, FixedDeviceClassifier,
    UserAgentDeviceClassifier, MOBILE_USER_AGENT_TOKENS,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use location::{FixedLocationService, LocationService, NoopLocationService};
