use blog_share::{format_post_date, ArticleCard, PostFrontMatter, ShareButtons, ShareProvider};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

use crate::config::{load_posts, load_site_metadata};

#[derive(Clone)]
struct SiteContent {
    title: String,
    description: String,
    locale: String,
    posts: StoredValue<Vec<PostFrontMatter>>,
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let metadata = load_site_metadata();
    provide_context(SiteContent {
        title: metadata.title.clone(),
        description: metadata.description.clone(),
        locale: metadata.locale.clone(),
        posts: store_value(load_posts()),
    });
    let title = metadata.title.clone();
    let description = metadata.description.clone();

    view! {
        <Title text=title />
        <Meta name="description" content=description />

        <ShareProvider host_services=build_host_services() metadata=metadata>
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=BlogIndex />
                        <Route path="/blog/:slug" view=PostPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </Router>
        </ShareProvider>
    }
}

fn use_site_content() -> SiteContent {
    use_context::<SiteContent>().expect("SiteContent not provided")
}

#[component]
pub fn BlogIndex() -> impl IntoView {
    let content = use_site_content();
    let posts = content.posts.get_value();

    view! {
        <section class="blog-index">
            <header class="blog-index-header">
                <h1>{content.title}</h1>
                <p>{content.description}</p>
            </header>
            <ul class="article-list">
                {posts
                    .into_iter()
                    .map(|post| view! { <ArticleCard post=post /> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn PostPage() -> impl IntoView {
    let content = use_site_content();
    let params = use_params_map();
    let slug = move || params.with(|map| map.get("slug").cloned().unwrap_or_default());
    let posts = content.posts;
    let locale = content.locale;

    move || {
        let slug = slug();
        match posts.with_value(|posts| posts.iter().find(|post| post.slug == slug).cloned()) {
            Some(post) => view! {
                <article class="post-page">
                    <h1>{post.title.clone()}</h1>
                    <time datetime=post.date.clone()>{format_post_date(&post.date, &locale)}</time>
                    <p class="post-summary">{post.summary.clone()}</p>
                    <ShareButtons title=post.title.clone() slug=post.slug.clone() />
                    <A href="/">"← 返回列表"</A>
                </article>
            }
            .into_view(),
            None => view! { <NotFound /> }.into_view(),
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"页面不存在"</p>
            <A href="/">"返回首页"</A>
        </section>
    }
}
