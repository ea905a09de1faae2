use leptos::*;

use super::icons::{CopyGlyph, TargetImage};
use crate::links::{ShareLink, ShareTarget};

/// Layout density of share items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShareItemSize {
    /// Standalone widget: large icons with captions.
    Widget,
    /// Article card popover: compact icons only.
    Compact,
}

impl ShareItemSize {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Widget => "widget",
            Self::Compact => "compact",
        }
    }

    const fn icon_class(self) -> &'static str {
        match self {
            Self::Widget => "share-item-icon h-10 w-10 object-contain",
            Self::Compact => "share-item-icon h-6 w-6 object-contain",
        }
    }

    const fn shows_caption(self) -> bool {
        matches!(self, Self::Widget)
    }
}

#[component]
fn ItemCaption(target: ShareTarget, size: ShareItemSize) -> impl IntoView {
    size.shows_caption()
        .then(|| view! { <span class="share-item-caption">{target.label()}</span> })
}

#[component]
/// Navigable share anchor for one social target.
pub(crate) fn ShareAnchor(
    target: ShareTarget,
    #[prop(into)] link: Signal<ShareLink>,
    size: ShareItemSize,
    #[prop(optional_no_strip)] on_activate: Option<Callback<ShareTarget>>,
) -> impl IntoView {
    view! {
        <a
            class="share-item"
            href=move || link.with(|link| link.href().unwrap_or_default().to_string())
            target=move || link.with(ShareLink::anchor_target)
            rel=move || link.with(ShareLink::anchor_rel)
            aria-label=target.aria_label()
            data-share-target=target.as_str()
            data-ui-size=size.token()
            on:click=move |_| {
                if let Some(on_activate) = on_activate.as_ref() {
                    on_activate.call(target);
                }
            }
        >
            <TargetImage target=target class=size.icon_class() />
            <ItemCaption target=target size=size />
        </a>
    }
}

#[component]
/// WeChat item: a deep link on mobile, a hover QR card on desktop.
pub(crate) fn WechatShare(
    #[prop(into)] link: Signal<ShareLink>,
    size: ShareItemSize,
    #[prop(optional)] on_activate: Option<Callback<ShareTarget>>,
) -> impl IntoView {
    let target = ShareTarget::Wechat;
    move || match link.get() {
        ShareLink::QrCode {
            image_src, size_px, ..
        } => {
            let frame = format!("width: {size_px}px; height: {size_px}px; display: block");
            view! {
                <div class="share-item share-qr group" data-share-target=target.as_str() data-ui-size=size.token()>
                    <button type="button" class="share-item" aria-label=target.aria_label()>
                        <TargetImage target=target class=size.icon_class() />
                        <ItemCaption target=target size=size />
                    </button>
                    <div class="share-qr-card" role="tooltip">
                        <img src=image_src alt="微信分享二维码" class="share-qr-image" style=frame />
                        <p class="share-qr-caption">"扫码分享到微信"</p>
                        {size
                            .shows_caption()
                            .then(|| view! { <p class="share-qr-hint">"长按图片可保存或分享"</p> })}
                    </div>
                </div>
            }
            .into_view()
        }
        ShareLink::Navigate { .. } => view! {
            <ShareAnchor target=target link=link size=size on_activate=on_activate />
        }
        .into_view(),
        ShareLink::Copy { .. } => ().into_view(),
    }
}

#[component]
/// Copy-link button.
pub(crate) fn CopyLinkButton(size: ShareItemSize, on_click: Callback<()>) -> impl IntoView {
    let target = ShareTarget::CopyLink;
    view! {
        <button
            type="button"
            class="share-item"
            aria-label=target.aria_label()
            data-share-target=target.as_str()
            data-ui-size=size.token()
            on:click=move |_| on_click.call(())
        >
            <CopyGlyph class=size.icon_class() />
            <ItemCaption target=target size=size />
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn activation_callback_is_optional_and_forwarded_as_is() {
        let runtime = create_runtime();
        let link = Signal::derive(|| ShareLink::Navigate {
            href: "weixin://dl/business/?t=https%3A%2F%2Fexample.com".to_string(),
            new_tab: false,
        });

        let plain = WechatShareProps::builder()
            .link(link)
            .size(ShareItemSize::Widget)
            .build();
        let anchor = ShareAnchorProps::builder()
            .target(ShareTarget::Wechat)
            .link(plain.link)
            .size(plain.size)
            .on_activate(plain.on_activate)
            .build();
        assert!(anchor.on_activate.is_none());

        let activated = create_rw_signal(None);
        let card = WechatShareProps::builder()
            .link(link)
            .size(ShareItemSize::Compact)
            .on_activate(Callback::new(move |target| activated.set(Some(target))))
            .build();
        let anchor = ShareAnchorProps::builder()
            .target(ShareTarget::Wechat)
            .link(card.link)
            .size(card.size)
            .on_activate(card.on_activate)
            .build();
        anchor
            .on_activate
            .expect("card callback")
            .call(ShareTarget::Wechat);
        assert_eq!(activated.get_untracked(), Some(ShareTarget::Wechat));

        runtime.dispose();
    }
}
