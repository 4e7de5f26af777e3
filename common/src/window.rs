use std::ops::RangeInclusive;

/// Count of page numbers shown as direct selectors
pub const WINDOW_SIZE: u32 = 3;

/// Distance covered by jump shortcuts
pub const JUMP_DISTANCE: u32 = 3;

/// Visible part of the page set for one (current, total_pages) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Consecutive page numbers, may be empty
    pub pages: RangeInclusive<u32>,
    /// Back jump target, if shortcut is shown
    pub back_jump: Option<u32>,
    /// Forward jump target, if shortcut is shown
    pub forward_jump: Option<u32>,
}

impl PageWindow {
    /// Compute window for given page.
    /// Never fails, out-of-range `current` is handled with saturating math.
    pub fn compute(current: u32, total_pages: u32) -> Self {
        let pages = if total_pages == 0 {
            RangeInclusive::new(1, 0)
        } else {
            let start = if current == 1 {
                1
            } else if current == total_pages {
                total_pages.saturating_sub(WINDOW_SIZE - 1).max(1)
            } else {
                current.saturating_sub(1).max(1)
            };
            let end = total_pages.min(start.saturating_add(WINDOW_SIZE - 1));
            start..=end
        };

        let jumps_allowed = total_pages > WINDOW_SIZE;

        let back_jump = (jumps_allowed && current >= 3)
            .then(|| current.saturating_sub(JUMP_DISTANCE).max(1));

        let forward_jump = (jumps_allowed && current.saturating_add(2) <= total_pages)
            .then(|| total_pages.min(current.saturating_add(JUMP_DISTANCE)));

        Self {
            pages,
            back_jump,
            forward_jump,
        }
    }

    /// Whether page is one of the direct selectors
    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains(&page)
    }

    /// Count of direct selectors
    pub fn len(&self) -> usize {
        self.pages.clone().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
