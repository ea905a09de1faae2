//! Device-class contracts used to pick deep-link schemes over web share pages.

/// Coarse device classification derived from the user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Phone or tablet platform that can resolve native app URI schemes.
    Mobile,
    /// Everything else.
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Returns whether this is [`DeviceClass::Mobile`].
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }

    /// Returns a stable string token for diagnostics and `data-*` attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

/// User-agent substrings (matched case-insensitively) that mark a mobile platform.
pub const MOBILE_USER_AGENT_TOKENS: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// Classifies a user-agent string.
///
/// This is a cosmetic heuristic, not a reliable capability probe.
pub fn classify_user_agent(user_agent: &str) -> DeviceClass {
    let haystack = user_agent.to_ascii_lowercase();
    let mobile = MOBILE_USER_AGENT_TOKENS
        .iter()
        .any(|token| haystack.contains(&token.to_ascii_lowercase()));
    if mobile {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// Injected device-classification capability.
///
/// Implementations may read live environment state, so callers re-query on viewport changes
/// instead of caching the first answer.
pub trait DeviceClassifier {
    /// Returns the current device class.
    fn device_class(&self) -> DeviceClass;
}

#[derive(Debug, Clone, Copy, Default)]
/// Classifier that always returns the same class.
pub struct FixedDeviceClassifier(pub DeviceClass);

impl DeviceClassifier for FixedDeviceClassifier {
    fn device_class(&self) -> DeviceClass {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
/// Classifier over a captured user-agent string.
pub struct UserAgentDeviceClassifier {
    user_agent: String,
}

impl UserAgentDeviceClassifier {
    /// Captures `user_agent` for classification.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl DeviceClassifier for UserAgentDeviceClassifier {
    fn device_class(&self) -> DeviceClass {
        classify_user_agent(&self.user_agent)
    }
}
