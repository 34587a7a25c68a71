//! Selection state for the artworks table: an ordered set of row
//! identities plus the raw target-count text typed into the overlay.
//!
//! Two distinct paths mutate the selection from the target count. Page
//! loads grow it toward the target and never remove anything, so a
//! selection built up across several pages survives further paging.
//! [`SelectionAccumulator::submit`] instead rebuilds the selection from
//! the rows of the current page only. The two paths are not
//! interchangeable and must stay separate.

use std::collections::HashSet;

use shared::domain::{Artwork, ArtworkId};

pub struct SelectionAccumulator {
    ordered: Vec<ArtworkId>,
    members: HashSet<ArtworkId>,
    target_text: String,
}

impl SelectionAccumulator {
    pub fn new() -> Self {
        Self {
            ordered: Vec::new(),
            members: HashSet::new(),
            target_text: "0".to_string(),
        }
    }

    /// Selected identities in the order they were added.
    pub fn selected(&self) -> &[ArtworkId] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.members.contains(&id)
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    /// Parsed target count. `None` while the text is empty or does not
    /// fit; no selection change is driven from that state.
    pub fn target_count(&self) -> Option<usize> {
        self.target_text.parse().ok()
    }

    /// Replaces the target text if it is zero or more ASCII digits.
    /// Anything else is rejected and the previous text stays.
    pub fn set_target_text(&mut self, text: &str) -> bool {
        if !text.chars().all(|ch| ch.is_ascii_digit()) {
            return false;
        }
        self.target_text = text.to_string();
        true
    }

    /// Grows the selection toward the target from a freshly loaded page,
    /// taking not-yet-selected rows in page order. Never removes
    /// anything: with the target at or below the current size this is a
    /// no-op. Returns whether the selection changed.
    pub fn on_page_loaded(&mut self, items: &[Artwork]) -> bool {
        let Some(target) = self.target_count() else {
            return false;
        };
        if target <= self.ordered.len() {
            return false;
        }
        let remaining = target - self.ordered.len();
        let mut appended = 0;
        for item in items {
            if appended == remaining {
                break;
            }
            if self.members.insert(item.id) {
                self.ordered.push(item.id);
                appended += 1;
            }
        }
        appended > 0
    }

    /// Rebuilds the selection from `current_items`: the first `target`
    /// rows that were not selected before the call, in page order.
    /// Page-local: identities accumulated from other pages are dropped,
    /// and rows selected before the call never appear in the new set.
    /// Returns false (and changes nothing) while the target text does
    /// not parse.
    pub fn submit(&mut self, current_items: &[Artwork]) -> bool {
        let Some(target) = self.target_count() else {
            return false;
        };
        let replacement: Vec<ArtworkId> = current_items
            .iter()
            .map(|item| item.id)
            .filter(|id| !self.members.contains(id))
            .take(target)
            .collect();
        self.members = replacement.iter().copied().collect();
        self.ordered = replacement;
        true
    }

    /// Single-row checkbox edit; does not consult the target count.
    pub fn toggle_row(&mut self, id: ArtworkId) {
        if self.members.remove(&id) {
            self.ordered.retain(|existing| *existing != id);
        } else {
            self.members.insert(id);
            self.ordered.push(id);
        }
    }

    /// Wholesale assignment, e.g. from a header checkbox. The first
    /// occurrence wins when the input repeats an identity.
    pub fn set_selection(&mut self, ids: Vec<ArtworkId>) {
        self.ordered.clear();
        self.members.clear();
        for id in ids {
            if self.members.insert(id) {
                self.ordered.push(id);
            }
        }
    }
}

impl Default for SelectionAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
