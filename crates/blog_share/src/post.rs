//! Blog post front matter as consumed by the article card.

use heck::ToKebabCase;
use serde::{Deserialize, Serialize};

/// Cover image field: a single path or a list of paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostImages {
    /// Single image path.
    One(String),
    /// Ordered image paths; the first is the cover.
    Many(Vec<String>),
}

impl Default for PostImages {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// Front matter of one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFrontMatter {
    /// URL slug under `/blog/`.
    pub slug: String,
    /// Publication date, `YYYY-MM-DD` or RFC 3339.
    pub date: String,
    /// Post title.
    pub title: String,
    /// Short summary shown in lists.
    #[serde(default)]
    pub summary: String,
    /// Tag names.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image(s).
    #[serde(default)]
    pub images: PostImages,
}

impl PostFrontMatter {
    /// First cover image, if any.
    pub fn cover_image(&self) -> Option<&str> {
        let cover = match &self.images {
            PostImages::One(src) => Some(src.as_str()),
            PostImages::Many(list) => list.first().map(String::as_str),
        };
        cover.filter(|src| !src.trim().is_empty())
    }

    /// Site-relative path of the post page.
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Kebab-case slug for a tag page (`/tags/{slug}`).
pub fn tag_slug(tag: &str) -> String {
    tag.trim().to_kebab_case()
}
