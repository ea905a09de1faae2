//! Current-page location contracts.

use url::Url;

/// Host service for reading the current navigable location.
pub trait LocationService {
    /// Full URL of the current page, when one exists.
    fn href(&self) -> Option<String>;

    /// Scheme + host (+ port) of the current page, when one exists.
    fn origin(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Location service for hosts without a navigable page.
pub struct NoopLocationService;

impl LocationService for NoopLocationService {
    fn href(&self) -> Option<String> {
        None
    }

    fn origin(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Location service pinned to a fixed page.
pub struct FixedLocationService {
    href: String,
    origin: Option<String>,
}

impl FixedLocationService {
    /// Pins the location to `href`, deriving the serialized origin from its parsed URL.
    ///
    /// The origin is `None` when `href` does not parse or has an opaque origin.
    pub fn new(href: impl Into<String>) -> Self {
        let href = href.into();
        let origin = Url::parse(&href)
            .ok()
            .map(|url| url.origin())
            .filter(|origin| origin.is_tuple())
            .map(|origin| origin.ascii_serialization());
        Self { href, origin }
    }
}

impl LocationService for FixedLocationService {
    fn href(&self) -> Option<String> {
        Some(self.href.clone())
    }

    fn origin(&self) -> Option<String> {
        self.origin.clone()
    }
}
