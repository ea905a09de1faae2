//! Device-classification adapter backed by `navigator.userAgent`.

use platform_host::{classify_user_agent, DeviceClass, DeviceClassifier};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser device classifier; reads the user agent on every call.
///
/// Falls back to [`DeviceClass::Desktop`] when no navigator is reachable.
pub struct WebDeviceClassifier;

impl DeviceClassifier for WebDeviceClassifier {
    fn device_class(&self) -> DeviceClass {
        bridge::user_agent()
            .map(|agent| classify_user_agent(&agent))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_classifier_defaults_to_desktop() {
        assert_eq!(WebDeviceClassifier.device_class(), DeviceClass::Desktop);
    }
}
