//! Provider and context wiring for the share components.
//!
//! The entry layer assembles a [`HostServices`] bundle and [`SiteMetadata`]; components read
//! both through [`ShareRuntimeContext`] instead of touching the browser directly.

use leptos::*;
use platform_host::{DeviceClass, HostServices};

use crate::{
    config::SiteMetadata,
    share_url::{resolve_share_url, ShareUrlSource},
};

#[derive(Clone, Copy)]
/// Leptos context carrying injected host services and site metadata.
pub struct ShareRuntimeContext {
    /// Injected host bundle.
    pub host: StoredValue<HostServices>,
    /// Site-wide metadata.
    pub metadata: StoredValue<SiteMetadata>,
}

impl ShareRuntimeContext {
    /// Queries the injected device classifier.
    pub fn device_class(&self) -> DeviceClass {
        self.host.with_value(|host| host.device.device_class())
    }

    /// Resolves the URL to share for `slug`.
    pub fn share_url(&self, source: ShareUrlSource, slug: &str) -> String {
        self.host.with_value(|host| {
            self.metadata.with_value(|metadata| {
                resolve_share_url(source, host.location.as_ref(), metadata, slug)
            })
        })
    }

    /// Locale for date formatting.
    pub fn locale(&self) -> String {
        self.metadata.with_value(|metadata| metadata.locale.clone())
    }
}

#[component]
/// Provides [`ShareRuntimeContext`] to descendant components.
pub fn ShareProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Site-wide metadata.
    #[prop(optional)]
    metadata: SiteMetadata,
    children: Children,
) -> impl IntoView {
    logging::log!(
        "share runtime using {} host (async clipboard: {:?})",
        host_services.host_strategy.as_str(),
        host_services.capabilities.async_clipboard
    );
    let runtime = ShareRuntimeContext {
        host: store_value(host_services),
        metadata: store_value(metadata),
    };
    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`ShareRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShareProvider`].
pub fn use_share_runtime() -> ShareRuntimeContext {
    use_context::<ShareRuntimeContext>().expect("ShareRuntimeContext not provided")
}
