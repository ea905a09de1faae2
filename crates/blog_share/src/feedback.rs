//! Transient copy-link feedback state.
//!
//! Each recorded outcome hands back a [`FeedbackTicket`]; only the ticket of the latest outcome
//! can expire the feedback, so re-copying before the delay elapses extends the feedback instead
//! of cutting it short.

use std::time::Duration;

use platform_host::{ClipboardError, CopyReceipt};

/// How long copy feedback stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Visible copy feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    /// Nothing shown.
    #[default]
    Idle,
    /// The link reached the clipboard.
    Copied,
    /// Every clipboard path failed.
    Failed,
}

impl CopyStatus {
    /// Stable token for `data-*` attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Copied => "copied",
            Self::Failed => "failed",
        }
    }

    /// User-facing message, if any.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Copied => Some("链接已复制到剪贴板！"),
            Self::Failed => Some("复制失败，请手动复制链接"),
        }
    }
}

/// Identifies one recorded copy outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTicket(u64);

/// Copy feedback state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    status: CopyStatus,
    generation: u64,
}

impl CopyFeedback {
    /// Current status.
    pub const fn status(&self) -> CopyStatus {
        self.status
    }

    /// Whether the copied confirmation is showing.
    pub const fn is_copied(&self) -> bool {
        matches!(self.status, CopyStatus::Copied)
    }

    /// Records a clipboard outcome and returns the ticket that may later expire it.
    pub fn record(&mut self, outcome: &Result<CopyReceipt, ClipboardError>) -> FeedbackTicket {
        self.status = match outcome {
            Ok(_) => CopyStatus::Copied,
            Err(_) => CopyStatus::Failed,
        };
        self.generation = self.generation.wrapping_add(1);
        FeedbackTicket(self.generation)
    }

    /// Returns to [`CopyStatus::Idle`] if `ticket` belongs to the latest outcome.
    ///
    /// Returns whether the state changed.
    pub fn expire(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.0 != self.generation || self.status == CopyStatus::Idle {
            return false;
        }
        self.status = CopyStatus::Idle;
        true
    }
}
