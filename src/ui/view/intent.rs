use crate::ui::mvi::Intent;
use crate::ui::view::state::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    SetActiveTab(Tab),
    /// Cycle to the following tab, wrapping at the end.
    NextTab,
    /// Replace the query verbatim. No trimming, no case normalization.
    SetSearchQuery(String),
    FocusSearch,
    BlurSearch,
    /// Flip membership of `name` in the liked set. Unknown names are ignored.
    ToggleLike(String),
    /// Flip the like on whichever breed the cursor is on.
    ToggleLikeAtCursor,
    /// Move the cursor through the filtered list, wrapping at both ends.
    MoveCursor(isize),
}

impl Intent for ViewIntent {}
