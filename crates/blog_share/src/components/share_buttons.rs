use leptos::*;

use super::{
    hooks::{use_device_class, CopyLinkAction},
    icons::CheckGlyph,
    share_item::{CopyLinkButton, ShareAnchor, ShareItemSize, WechatShare},
};
use crate::{
    feedback::CopyStatus,
    links::{ShareLinks, ShareTarget, WIDGET_QR_SIZE_PX},
    runtime_context::use_share_runtime,
    share_url::ShareUrlSource,
};

#[component]
/// Transient copy feedback badge.
pub fn CopyFeedbackBadge(#[prop(into)] status: Signal<CopyStatus>) -> impl IntoView {
    move || {
        let status = status.get();
        status.message().map(|message| {
            view! {
                <div class="share-feedback" role="status" data-copy-status=status.as_str()>
                    <span class="share-feedback-badge">
                        {(status == CopyStatus::Copied)
                            .then(|| view! { <CheckGlyph class="share-feedback-icon" /> })}
                        {message}
                    </span>
                </div>
            }
        })
    }
}

#[component]
/// Standalone share widget for a post page.
///
/// Shares the current page URL (falling back to the canonical post URL) to Xiaohongshu, Weibo,
/// and WeChat, and copies it to the clipboard.
pub fn ShareButtons(
    /// Post title carried by share links that accept one.
    #[prop(into)]
    title: String,
    /// Post slug used for the canonical fallback URL.
    #[prop(into)]
    slug: String,
) -> impl IntoView {
    let runtime = use_share_runtime();
    let device = use_device_class(runtime);
    let url = runtime.share_url(ShareUrlSource::CurrentPage, &slug);
    let links = create_memo(move |_| {
        ShareLinks::compose(&url, &title, device.get(), WIDGET_QR_SIZE_PX)
    });
    let copy_action = CopyLinkAction::new(runtime);

    let link_for =
        move |target: ShareTarget| Signal::derive(move || links.with(|links| links.get(target)));

    view! {
        <div class="share-buttons" data-device=move || device.get().as_str()>
            <h3 class="share-buttons-heading">"分享文章"</h3>
            <div class="share-buttons-row">
                <ShareAnchor
                    target=ShareTarget::Xiaohongshu
                    link=link_for(ShareTarget::Xiaohongshu)
                    size=ShareItemSize::Widget
                />
                <ShareAnchor
                    target=ShareTarget::Weibo
                    link=link_for(ShareTarget::Weibo)
                    size=ShareItemSize::Widget
                />
                <WechatShare link=link_for(ShareTarget::Wechat) size=ShareItemSize::Widget />
                <CopyLinkButton
                    size=ShareItemSize::Widget
                    on_click=Callback::new(move |()| {
                        copy_action.copy(links.with_untracked(|links| links.url.clone()));
                    })
                />
            </div>
            <CopyFeedbackBadge status=Signal::derive(move || copy_action.feedback.get().status()) />
        </div>
    }
}
