//! Current-page location adapter backed by `window.location`.

use platform_host::LocationService;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser location service.
pub struct WebLocationService;

impl LocationService for WebLocationService {
    fn href(&self) -> Option<String> {
        bridge::location_href()
    }

    fn origin(&self) -> Option<String> {
        bridge::location_origin()
    }
}
