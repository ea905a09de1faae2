//! Social sharing components for the blog front-end.
//!
//! The crate owns share-link composition per target and device class, the copy-link feedback
//! and share-popover state machines, site metadata loading, and the Leptos views
//! [`ShareButtons`] and [`ArticleCard`]. Host access (clipboard, user agent, location) is
//! injected as a [`platform_host::HostServices`] bundle through [`ShareProvider`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod config;
pub mod date;
pub mod feedback;
pub mod links;
pub mod popover;
pub mod post;
pub mod runtime_context;
pub mod share_url;

pub use components::{ArticleCard, CopyFeedbackBadge, ShareButtons, TagChip};
pub use config::{posts_from_json_str, ConfigError, SiteMetadata};
pub use date::format_post_date;
pub use feedback::{CopyFeedback, CopyStatus, FeedbackTicket, COPY_FEEDBACK_DURATION};
pub use links::{
    compose_share_link, encode_component, qr_code_image_url, ShareLink, ShareLinks, ShareTarget,
    CARD_QR_SIZE_PX, WIDGET_QR_SIZE_PX,
};
pub use popover::SharePopover;
pub use post::{tag_slug, PostFrontMatter, PostImages};
pub use runtime_context::{use_share_runtime, ShareProvider, ShareRuntimeContext};
pub use share_url::{resolve_share_url, ShareUrlSource};
