//! Project-card filtering by category.

use std::time::Duration;

/// Filter value that shows every card.
pub const ALL: &str = "all";
/// Wait before fading a re-shown card in, so `display` applies first.
pub const SHOW_DELAY: Duration = Duration::from_millis(50);
/// Wait for the fade-out transition before hiding a card.
pub const HIDE_DELAY: Duration = Duration::from_millis(300);
/// Scale a hidden card shrinks to while fading out.
pub const HIDDEN_SCALE: f32 = 0.8;

/// What to do with a card when a filter is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    Show,
    Hide,
}

/// Decide a card's fate from the chosen filter and the card's
/// whitespace-separated category list.
pub fn filter_action(filter: &str, categories: &str) -> FilterAction {
    if filter == ALL || categories.split_whitespace().any(|c| c == filter) {
        FilterAction::Show
    } else {
        FilterAction::Hide
    }
}
