//! Site metadata and post list configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::post::PostFrontMatter;

#[derive(Debug, Error)]
/// Configuration loading errors.
pub enum ConfigError {
    /// The document is not valid JSON for the expected shape.
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// `site_url` is not an absolute http(s) URL.
    #[error("site_url must be an absolute http(s) URL, got `{0}`")]
    InvalidSiteUrl(String),
    /// A post entry has no slug.
    #[error("post #{index} has an empty slug")]
    EmptySlug {
        /// Zero-based position in the post list.
        index: usize,
    },
}

/// Site-wide metadata consumed by the share components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Author display name.
    pub author: String,
    /// BCP 47 locale used for date formatting.
    pub locale: String,
    /// Canonical base URL; fallback origin for share links.
    pub site_url: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            author: String::new(),
            locale: "zh-CN".to_string(),
            site_url: "https://example.com".to_string(),
        }
    }
}

impl SiteMetadata {
    /// Parses and validates site metadata JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or `site_url` is not absolute.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut metadata: Self = serde_json::from_str(raw)?;
        let site_url = metadata.site_url.trim().trim_end_matches('/');
        if parse_web_url(site_url).is_none() {
            return Err(ConfigError::InvalidSiteUrl(metadata.site_url));
        }
        metadata.site_url = site_url.to_string();
        Ok(metadata)
    }

    /// Canonical URL of the post at `slug`.
    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{slug}", self.site_url.trim_end_matches('/'))
    }
}

/// Parses `raw` as an absolute http(s) URL with a non-empty host.
pub(crate) fn parse_web_url(raw: &str) -> Option<Url> {
    Url::parse(raw)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .filter(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

/// Parses and validates a JSON array of posts.
///
/// # Errors
///
/// Returns [`ConfigError`] when the JSON is malformed or a post has an empty slug.
pub fn posts_from_json_str(raw: &str) -> Result<Vec<PostFrontMatter>, ConfigError> {
    let posts: Vec<PostFrontMatter> = serde_json::from_str(raw)?;
    if let Some(index) = posts.iter().position(|post| post.slug.trim().is_empty()) {
        return Err(ConfigError::EmptySlug { index });
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn metadata_parses_and_normalizes_site_url() {
        let metadata = SiteMetadata::from_json_str(
            r#"{"title":"Notes","locale":"en-US","siteUrl":"https://blog.example.com/"}"#,
        )
        .expect("metadata");

        assert_eq!(metadata.title, "Notes");
        assert_eq!(metadata.locale, "en-US");
        assert_eq!(metadata.site_url, "https://blog.example.com");
        assert_eq!(metadata.author, "");
        assert_eq!(
            metadata.post_url("hello"),
            "https://blog.example.com/blog/hello"
        );
    }

    #[test]
    fn metadata_rejects_relative_site_url_and_bad_json() {
        let err = SiteMetadata::from_json_str(r#"{"siteUrl":"blog.example.com"}"#)
            .expect_err("relative url");
        assert_eq!(
            err.to_string(),
            "site_url must be an absolute http(s) URL, got `blog.example.com`"
        );

        assert!(matches!(
            SiteMetadata::from_json_str("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn metadata_rejects_site_url_without_host_or_web_scheme() {
        for raw in ["https://", "ftp://blog.example.com", "mailto:me@example.com"] {
            let json = format!(r#"{{"siteUrl":"{raw}"}}"#);
            assert!(
                matches!(
                    SiteMetadata::from_json_str(&json),
                    Err(ConfigError::InvalidSiteUrl(_))
                ),
                "{raw} should be rejected"
            );
        }

        let metadata = SiteMetadata::from_json_str(r#"{"siteUrl":"http://localhost:8080/"}"#)
            .expect("localhost");
        assert_eq!(metadata.post_url("a"), "http://localhost:8080/blog/a");
    }

    #[test]
    fn posts_require_slugs() {
        let posts = posts_from_json_str(
            r#"[{"slug":"a","date":"2024-01-05","title":"A"},{"slug":"b","date":"2024-02-01","title":"B"}]"#,
        )
        .expect("posts");
        assert_eq!(posts.len(), 2);

        let err = posts_from_json_str(r#"[{"slug":"a","date":"","title":"A"},{"slug":" ","date":"","title":"B"}]"#)
            .expect_err("empty slug");
        assert!(matches!(err, ConfigError::EmptySlug { index: 1 }));
    }
}
