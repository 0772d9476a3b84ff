use std::sync::Arc;

use crate::Layout;

/// Host callback carrying a card index (`on_card_selected`,
/// `on_selection_changed`).
pub type IndexCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Host callback fired when the switcher has fully dismissed.
pub type DismissCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::Switcher`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so hosts can tweak a few
/// fields and hand the options back without reallocating closures.
pub struct SwitcherOptions {
    /// Number of back-stack entries. The host re-syncs this whenever the
    /// back stack changes (`Switcher::set_count`).
    pub count: usize,

    pub layout: Layout,

    /// Fired when a tapped card's expand-out completes, before the
    /// dismissal callback. The host navigates here.
    pub on_card_selected: Option<IndexCallback>,

    /// Fired when the switcher finishes dismissing (plain dismiss, tap on
    /// empty space, or after the post-select linger).
    pub on_switcher_dismissed: Option<DismissCallback>,

    /// Fired when a fling settle lands on its target index.
    pub on_selection_changed: Option<IndexCallback>,
}

impl SwitcherOptions {
    pub fn new(count: usize, layout: Layout) -> Self {
        Self {
            count,
            layout,
            on_card_selected: None,
            on_switcher_dismissed: None,
            on_selection_changed: None,
        }
    }

    pub fn with_on_card_selected(
        mut self,
        f: impl Fn(usize) + Send + Sync + 'static,
    ) -> Self {
        self.on_card_selected = Some(Arc::new(f));
        self
    }

    pub fn with_on_switcher_dismissed(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_switcher_dismissed = Some(Arc::new(f));
        self
    }

    pub fn with_on_selection_changed(
        mut self,
        f: impl Fn(usize) + Send + Sync + 'static,
    ) -> Self {
        self.on_selection_changed = Some(Arc::new(f));
        self
    }
}

impl Clone for SwitcherOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            layout: self.layout,
            on_card_selected: self.on_card_selected.clone(),
            on_switcher_dismissed: self.on_switcher_dismissed.clone(),
            on_selection_changed: self.on_selection_changed.clone(),
        }
    }
}

impl core::fmt::Debug for SwitcherOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwitcherOptions")
            .field("count", &self.count)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
