//! Leptos views for the share widget and the article card.
//!
//! Views read host services through [`crate::runtime_context`]; link composition and state
//! transitions live in the plain modules so they stay testable without a DOM.

mod article;
mod hooks;
mod icons;
mod share_buttons;
mod share_item;

pub use article::{ArticleCard, TagChip};
pub use share_buttons::{CopyFeedbackBadge, ShareButtons};
