//! Embedded site configuration.

use blog_share::{posts_from_json_str, PostFrontMatter, SiteMetadata};
use leptos::logging;

const SITE_METADATA_JSON: &str = include_str!("../config/site_metadata.json");
const POSTS_JSON: &str = include_str!("../config/posts.json");

/// Loads the embedded site metadata, falling back to defaults on error.
pub fn load_site_metadata() -> SiteMetadata {
    SiteMetadata::from_json_str(SITE_METADATA_JSON).unwrap_or_else(|err| {
        logging::warn!("site metadata rejected, using defaults: {err}");
        SiteMetadata::default()
    })
}

/// Loads the embedded post list, newest first; an invalid list yields no posts.
pub fn load_posts() -> Vec<PostFrontMatter> {
    let mut posts = posts_from_json_str(POSTS_JSON).unwrap_or_else(|err| {
        logging::warn!("post list rejected: {err}");
        Vec::new()
    });
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let metadata = SiteMetadata::from_json_str(SITE_METADATA_JSON).expect("metadata");
        assert_eq!(metadata.site_url, "https://example.com");
        assert_eq!(metadata.post_url("my-post"), "https://example.com/blog/my-post");

        let posts = load_posts();
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|pair| pair[0].date >= pair[1].date));
        assert!(posts.iter().any(|post| post.slug == "my-post"));
    }
}
