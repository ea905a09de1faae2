//! Resolution of the article URL that share actions carry.

use platform_host::LocationService;

use crate::config::{parse_web_url, SiteMetadata};

/// Where the shared URL comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareUrlSource {
    /// The full current page URL (post pages).
    CurrentPage,
    /// Current origin joined with `/blog/{slug}` (post lists).
    OriginSlug,
}

/// Resolves the URL to share for `slug`.
///
/// Falls back to `{site_url}/blog/{slug}` when the host has no navigable page or the live
/// location is not an http(s) URL.
pub fn resolve_share_url(
    source: ShareUrlSource,
    location: &dyn LocationService,
    metadata: &SiteMetadata,
    slug: &str,
) -> String {
    let live = match source {
        ShareUrlSource::CurrentPage => location.href(),
        ShareUrlSource::OriginSlug => location
            .origin()
            .map(|origin| format!("{}/blog/{slug}", origin.trim_end_matches('/'))),
    };
    live.filter(|url| parse_web_url(url).is_some())
        .unwrap_or_else(|| metadata.post_url(slug))
}

#[cfg(test)]
mod tests {
    use platform_host::{FixedLocationService, NoopLocationService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn live_location_wins() {
        let location = FixedLocationService::new("https://blog.test/blog/my-post?ref=feed");
        let metadata = SiteMetadata::default();

        assert_eq!(
            resolve_share_url(ShareUrlSource::CurrentPage, &location, &metadata, "my-post"),
            "https://blog.test/blog/my-post?ref=feed"
        );
        assert_eq!(
            resolve_share_url(ShareUrlSource::OriginSlug, &location, &metadata, "other"),
            "https://blog.test/blog/other"
        );
    }

    #[test]
    fn missing_location_falls_back_to_site_url() {
        let metadata = SiteMetadata {
            site_url: "https://site.example".to_string(),
            ..SiteMetadata::default()
        };
        for source in [ShareUrlSource::CurrentPage, ShareUrlSource::OriginSlug] {
            assert_eq!(
                resolve_share_url(source, &NoopLocationService, &metadata, "my-post"),
                "https://site.example/blog/my-post"
            );
        }
    }

    #[test]
    fn non_web_locations_fall_back_to_site_url() {
        let metadata = SiteMetadata::default();
        for href in ["file:///tmp/index.html", "about:blank", "not a url"] {
            let location = FixedLocationService::new(href);
            assert_eq!(
                resolve_share_url(ShareUrlSource::CurrentPage, &location, &metadata, "my-post"),
                "https://example.com/blog/my-post",
                "{href}"
            );
            assert_eq!(
                resolve_share_url(ShareUrlSource::OriginSlug, &location, &metadata, "my-post"),
                "https://example.com/blog/my-post",
                "{href}"
            );
        }
    }
}
