mod config;
mod web_app;

pub use config::{load_posts, load_site_metadata};
pub use web_app::{BlogIndex, PostPage, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
