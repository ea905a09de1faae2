//! Share-link composition for each social target and device class.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use platform_host::DeviceClass;

/// Characters left unescaped by ECMAScript `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Xiaohongshu web landing page. The web app has no share endpoint, so no article context is
/// carried on desktop.
pub const XIAOHONGSHU_WEB_URL: &str = "https://www.xiaohongshu.com/explore";
/// Weibo web share endpoint.
pub const WEIBO_WEB_SHARE_URL: &str = "https://service.weibo.com/share/share.php";
/// QR image generation endpoint used for the desktop WeChat card.
pub const QR_CODE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
/// QR edge length used by the standalone share widget.
pub const WIDGET_QR_SIZE_PX: u32 = 200;
/// QR edge length used inside the article card popover.
pub const CARD_QR_SIZE_PX: u32 = 150;

/// Percent-encodes `input` the way `encodeURIComponent` does.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Destination of a share action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    /// Xiaohongshu (RED).
    Xiaohongshu,
    /// Sina Weibo.
    Weibo,
    /// WeChat.
    Wechat,
    /// Copy the article link to the clipboard.
    CopyLink,
}

impl ShareTarget {
    /// Social targets rendered as share links, in display order.
    pub const SOCIAL: [ShareTarget; 3] = [Self::Xiaohongshu, Self::Weibo, Self::Wechat];

    /// Stable token for `data-*` attributes and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xiaohongshu => "xiaohongshu",
            Self::Weibo => "weibo",
            Self::Wechat => "wechat",
            Self::CopyLink => "copy-link",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xiaohongshu => "小红书",
            Self::Weibo => "微博",
            Self::Wechat => "微信",
            Self::CopyLink => "复制链接",
        }
    }

    /// Accessible label for the share control.
    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::Xiaohongshu => "分享到小红书",
            Self::Weibo => "分享到微博",
            Self::Wechat => "分享到微信",
            Self::CopyLink => "复制链接",
        }
    }

    /// Static icon asset, when the target uses an image icon.
    pub const fn icon_src(self) -> Option<&'static str> {
        match self {
            Self::Xiaohongshu => Some("/static/images/xiaohongshu.svg"),
            Self::Weibo => Some("/static/images/sinaweibo.svg"),
            Self::Wechat => Some("/static/images/wechat.svg"),
            Self::CopyLink => None,
        }
    }
}

/// Composed destination for one share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareLink {
    /// Navigable anchor.
    Navigate {
        /// Anchor `href`.
        href: String,
        /// Whether the anchor opens a new browsing context.
        new_tab: bool,
    },
    /// No navigable link; a QR image encoding `payload` is shown instead.
    QrCode {
        /// QR image `src`.
        image_src: String,
        /// URL encoded in the QR code.
        payload: String,
        /// Edge length of the square image.
        size_px: u32,
    },
    /// Clipboard copy of `text`.
    Copy {
        /// Text written to the clipboard.
        text: String,
    },
}

impl ShareLink {
    /// Anchor `href`, when the link is navigable.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Navigate { href, .. } => Some(href),
            Self::QrCode { .. } | Self::Copy { .. } => None,
        }
    }

    /// Anchor `target` attribute.
    pub fn anchor_target(&self) -> &'static str {
        match self {
            Self::Navigate { new_tab: true, .. } => "_blank",
            _ => "_self",
        }
    }

    /// Anchor `rel` attribute; omitted for same-tab deep links.
    pub fn anchor_rel(&self) -> Option<&'static str> {
        match self {
            Self::Navigate { new_tab: true, .. } => Some("noopener noreferrer"),
            _ => None,
        }
    }
}

/// Builds the QR image URL for `data` at `size_px` × `size_px`.
pub fn qr_code_image_url(data: &str, size_px: u32) -> String {
    format!(
        "{QR_CODE_ENDPOINT}?size={size_px}x{size_px}&margin=0&data={}",
        encode_component(data)
    )
}

/// Composes the destination for `target`.
///
/// Mobile devices get the native app URI scheme; desktops get the web endpoint, or a QR image
/// for WeChat, which has no web share page. Inputs are not validated.
pub fn compose_share_link(
    url: &str,
    title: &str,
    device: DeviceClass,
    target: ShareTarget,
    qr_size_px: u32,
) -> ShareLink {
    let mobile = device.is_mobile();
    let navigate = |href: String| ShareLink::Navigate {
        href,
        new_tab: !mobile,
    };

    match target {
        ShareTarget::Xiaohongshu if mobile => navigate(format!(
            "xiaohongshu://share?url={}&title={}",
            encode_component(url),
            encode_component(title)
        )),
        ShareTarget::Xiaohongshu => navigate(XIAOHONGSHU_WEB_URL.to_string()),
        ShareTarget::Weibo if mobile => navigate(format!(
            "sinaweibo://share?url={}&title={}",
            encode_component(url),
            encode_component(title)
        )),
        ShareTarget::Weibo => navigate(format!(
            "{WEIBO_WEB_SHARE_URL}?url={}&title={}",
            encode_component(url),
            encode_component(title)
        )),
        ShareTarget::Wechat if mobile => {
            navigate(format!("weixin://share?url={}", encode_component(url)))
        }
        ShareTarget::Wechat => ShareLink::QrCode {
            image_src: qr_code_image_url(url, qr_size_px),
            payload: url.to_string(),
            size_px: qr_size_px,
        },
        ShareTarget::CopyLink => ShareLink::Copy {
            text: url.to_string(),
        },
    }
}

/// All share destinations for one article and device class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    /// Article URL being shared.
    pub url: String,
    /// Xiaohongshu destination.
    pub xiaohongshu: ShareLink,
    /// Weibo destination.
    pub weibo: ShareLink,
    /// WeChat destination.
    pub wechat: ShareLink,
}

impl ShareLinks {
    /// Composes every social destination at once.
    pub fn compose(url: &str, title: &str, device: DeviceClass, qr_size_px: u32) -> Self {
        let link = |target| compose_share_link(url, title, device, target, qr_size_px);
        Self {
            url: url.to_string(),
            xiaohongshu: link(ShareTarget::Xiaohongshu),
            weibo: link(ShareTarget::Weibo),
            wechat: link(ShareTarget::Wechat),
        }
    }

    /// Destination for `target`.
    pub fn get(&self, target: ShareTarget) -> ShareLink {
        match target {
            ShareTarget::Xiaohongshu => self.xiaohongshu.clone(),
            ShareTarget::Weibo => self.weibo.clone(),
            ShareTarget::Wechat => self.wechat.clone(),
            ShareTarget::CopyLink => ShareLink::Copy {
                text: self.url.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;
    use pretty_assertions::assert_eq;

    use super::*;

    const URL: &str = "https://example.com/blog/my-post";
    const TITLE: &str = "Hello World";

    fn query_param<'a>(href: &'a str, name: &str) -> Option<&'a str> {
        let (_, query) = href.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
    }

    fn decode(value: &str) -> String {
        percent_decode_str(value)
            .decode_utf8()
            .expect("utf-8")
            .into_owned()
    }

    #[test]
    fn weibo_desktop_href_matches_official_endpoint() {
        let link = compose_share_link(URL, TITLE, DeviceClass::Desktop, ShareTarget::Weibo, 200);
        assert_eq!(
            link.href(),
            Some(
                "https://service.weibo.com/share/share.php?url=https%3A%2F%2Fexample.com%2Fblog%2Fmy-post&title=Hello%20World"
            )
        );
        assert_eq!(link.anchor_target(), "_blank");
        assert_eq!(link.anchor_rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn mobile_targets_use_app_schemes() {
        let links = ShareLinks::compose(URL, TITLE, DeviceClass::Mobile, WIDGET_QR_SIZE_PX);

        assert_eq!(
            links.xiaohongshu.href(),
            Some("xiaohongshu://share?url=https%3A%2F%2Fexample.com%2Fblog%2Fmy-post&title=Hello%20World")
        );
        assert_eq!(
            links.weibo.href(),
            Some("sinaweibo://share?url=https%3A%2F%2Fexample.com%2Fblog%2Fmy-post&title=Hello%20World")
        );
        assert_eq!(
            links.wechat.href(),
            Some("weixin://share?url=https%3A%2F%2Fexample.com%2Fblog%2Fmy-post")
        );
        for link in [&links.xiaohongshu, &links.weibo, &links.wechat] {
            assert_eq!(link.anchor_target(), "_self");
            assert_eq!(link.anchor_rel(), None);
        }
    }

    #[test]
    fn desktop_targets_use_https_or_qr_image() {
        let links = ShareLinks::compose(URL, TITLE, DeviceClass::Desktop, CARD_QR_SIZE_PX);

        assert_eq!(links.xiaohongshu.href(), Some(XIAOHONGSHU_WEB_URL));
        assert!(links
            .weibo
            .href()
            .is_some_and(|href| href.starts_with("https://")));
        assert_eq!(links.wechat.href(), None);
        assert_eq!(
            links.wechat,
            ShareLink::QrCode {
                image_src: "https://api.qrserver.com/v1/create-qr-code/?size=150x150&margin=0&data=https%3A%2F%2Fexample.com%2Fblog%2Fmy-post".to_string(),
                payload: URL.to_string(),
                size_px: 150,
            }
        );
    }

    #[test]
    fn encoded_parameters_decode_back_to_inputs() {
        let url = "https://example.com/blog/标签?x=1&y=a b#frag";
        let title = "Rust & Wasm: 100% «fun» (really)!";

        for device in [DeviceClass::Mobile, DeviceClass::Desktop] {
            let weibo = compose_share_link(url, title, device, ShareTarget::Weibo, 200);
            let href = weibo.href().expect("weibo is navigable");
            assert_eq!(decode(query_param(href, "url").expect("url")), url);
            assert_eq!(decode(query_param(href, "title").expect("title")), title);
        }

        let xiaohongshu =
            compose_share_link(url, title, DeviceClass::Mobile, ShareTarget::Xiaohongshu, 200);
        let href = xiaohongshu.href().expect("deep link");
        assert_eq!(decode(query_param(href, "url").expect("url")), url);
        assert_eq!(decode(query_param(href, "title").expect("title")), title);
    }

    #[test]
    fn encoding_matches_uri_component_rules() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("a b/c?d=e&f#g"), "a%20b%2Fc%3Fd%3De%26f%23g");
        assert_eq!(encode_component("中文"), "%E4%B8%AD%E6%96%87");
    }

    #[test]
    fn copy_target_carries_the_article_url() {
        let links = ShareLinks::compose(URL, TITLE, DeviceClass::Desktop, 200);
        assert_eq!(
            links.get(ShareTarget::CopyLink),
            ShareLink::Copy {
                text: URL.to_string()
            }
        );
        assert_eq!(links.get(ShareTarget::Weibo), links.weibo);
    }
}
