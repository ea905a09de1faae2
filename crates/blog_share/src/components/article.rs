use leptos::*;

use super::{
    hooks::{use_device_class, CopyLinkAction},
    icons::ShareGlyph,
    share_buttons::CopyFeedbackBadge,
    share_item::{CopyLinkButton, ShareAnchor, ShareItemSize, WechatShare},
};
use crate::{
    date::format_post_date,
    links::{ShareLinks, ShareTarget, CARD_QR_SIZE_PX},
    popover::SharePopover,
    post::{tag_slug, PostFrontMatter},
    runtime_context::use_share_runtime,
    share_url::ShareUrlSource,
};

#[component]
/// Tag link to `/tags/{slug}`.
pub fn TagChip(#[prop(into)] text: String) -> impl IntoView {
    let href = format!("/tags/{}", tag_slug(&text));
    view! {
        <a href=href class="tag-chip">
            {text}
        </a>
    }
}

#[component]
/// Post list item with cover, date, title, tags, summary, and a share popover.
pub fn ArticleCard(
    /// Post front matter to render.
    post: PostFrontMatter,
) -> impl IntoView {
    let runtime = use_share_runtime();
    let device = use_device_class(runtime);
    let popover = create_rw_signal(SharePopover::default());
    let copy_action = CopyLinkAction::new(runtime);

    let href = post.href();
    let url = runtime.share_url(ShareUrlSource::OriginSlug, &post.slug);
    let share_title = post.title.clone();
    let links = create_memo(move |_| {
        ShareLinks::compose(&url, &share_title, device.get(), CARD_QR_SIZE_PX)
    });
    let link_for =
        move |target: ShareTarget| Signal::derive(move || links.with(|links| links.get(target)));
    let activate = Callback::new(move |target: ShareTarget| {
        popover.update(|popover| popover.activate(target));
    });
    let copy_link = Callback::new(move |()| {
        copy_action.copy(links.with_untracked(|links| links.url.clone()));
        activate.call(ShareTarget::CopyLink);
    });

    let formatted_date = format_post_date(&post.date, &runtime.locale());
    let read_more_label = format!("Read \"{}\"", post.title);
    let cover = post.cover_image().map(|src| {
        view! {
            <dt class="article-cover">
                <a href=href.clone() class="article-cover-link" title=post.title.clone()>
                    <img alt=post.title.clone() class="article-cover-image" src=src.to_string() />
                </a>
            </dt>
        }
    });

    view! {
        <li class="article-card" data-device=move || device.get().as_str()>
            <article>
                <div class="article-layout">
                    <dl class="article-meta">
                        {cover}
                        <dd class="sr-only">"发布时间"</dd>
                        <dd class="article-date">
                            <time datetime=post.date.clone()>{formatted_date}</time>
                        </dd>
                    </dl>
                    <div class="article-body">
                        <div class="article-header">
                            <h2 class="article-title">
                                <a href=href.clone()>{post.title.clone()}</a>
                            </h2>
                            <div class="article-share">
                                <button
                                    type="button"
                                    class="article-share-trigger"
                                    aria-label="分享"
                                    aria-expanded=move || popover.get().is_open().to_string()
                                    on:click=move |_| popover.update(SharePopover::toggle)
                                >
                                    <ShareGlyph class="h-5 w-5" />
                                </button>
                                <Show when=move || popover.get().is_open()>
                                    <div class="article-share-popover" role="menu">
                                        <ShareAnchor
                                            target=ShareTarget::Xiaohongshu
                                            link=link_for(ShareTarget::Xiaohongshu)
                                            size=ShareItemSize::Compact
                                            on_activate=Some(activate)
                                        />
                                        <ShareAnchor
                                            target=ShareTarget::Weibo
                                            link=link_for(ShareTarget::Weibo)
                                            size=ShareItemSize::Compact
                                            on_activate=Some(activate)
                                        />
                                        <WechatShare
                                            link=link_for(ShareTarget::Wechat)
                                            size=ShareItemSize::Compact
                                            on_activate=activate
                                        />
                                        <CopyLinkButton size=ShareItemSize::Compact on_click=copy_link />
                                    </div>
                                </Show>
                            </div>
                        </div>
                        <div class="article-tags">
                            {post
                                .tags
                                .iter()
                                .map(|tag| view! { <TagChip text=tag.clone() /> })
                                .collect_view()}
                        </div>
                        <div class="article-summary">{post.summary.clone()}</div>
                    </div>
                    <CopyFeedbackBadge status=Signal::derive(move || copy_action.feedback.get().status()) />
                    <div class="article-read-more">
                        <a href=href aria-label=read_more_label>
                            "查看更多 →"
                        </a>
                    </div>
                </div>
            </article>
        </li>
    }
}
