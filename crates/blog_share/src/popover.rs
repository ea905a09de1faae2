//! Share popover visibility.

use crate::links::ShareTarget;

/// Visibility of the article card's share popover.
///
/// There is no outside-click dismissal; only the trigger and share actions change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SharePopover {
    open: bool,
}

impl SharePopover {
    /// Whether the popover is visible.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flips visibility (trigger click).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Hides the popover.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handles activation of a share target; every activation closes the popover.
    pub fn activate(&mut self, _target: ShareTarget) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_visibility() {
        let mut popover = SharePopover::default();
        popover.toggle();
        assert!(popover.is_open());
        popover.toggle();
        assert_eq!(popover, SharePopover::default());
    }

    #[test]
    fn any_activation_closes_regardless_of_toggle_count() {
        let targets = [
            ShareTarget::Xiaohongshu,
            ShareTarget::Weibo,
            ShareTarget::Wechat,
            ShareTarget::CopyLink,
        ];
        for toggles in 0..5 {
            for target in targets {
                let mut popover = SharePopover::default();
                for _ in 0..toggles {
                    popover.toggle();
                }
                popover.activate(target);
                assert!(!popover.is_open(), "{} after {toggles} toggles", target.as_str());
            }
        }
    }
}
