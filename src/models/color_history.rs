//! Undo/redo history for color edits, scoped to the current selection.
//!
//! This is deliberately separate from any document-level history: it tracks
//! only the colors of the tiles currently being edited, and is discarded
//! whenever the selection changes. Classic branch-discarding semantics --
//! pushing a new state after an undo drops the redo candidates.

/// Bounded-by-usage undo/redo stack over color sets.
///
/// States are whole color sets (ordered hex strings); every transition
/// replaces the present wholesale, so callers can hold clones of past
/// states without aliasing concerns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorHistory {
    past: Vec<Vec<String>>,
    present: Vec<String>,
    future: Vec<Vec<String>>,
}

impl ColorHistory {
    /// Creates a history with the given colors as the initial present state.
    #[must_use]
    pub fn new(initial_colors: Vec<String>) -> Self {
        Self {
            past: Vec::new(),
            present: initial_colors,
            future: Vec::new(),
        }
    }

    /// The current color set.
    #[must_use]
    pub fn present(&self) -> &[String] {
        &self.present
    }

    /// Records a new color set.
    ///
    /// No-op if `new_colors` is element-wise equal to the present state, so
    /// repeated identical edits do not pollute the stack. Otherwise the
    /// present moves onto the past and any redo candidates are discarded.
    pub fn push(&mut self, new_colors: Vec<String>) {
        if self.present == new_colors {
            return;
        }

        let previous = std::mem::replace(&mut self.present, new_colors);
        self.past.push(previous);
        self.future.clear();
    }

    /// Steps back to the most recent past state. No-op if there is none.
    pub fn undo(&mut self) {
        let Some(previous) = self.past.pop() else {
            return;
        };

        let current = std::mem::replace(&mut self.present, previous);
        self.future.insert(0, current);
    }

    /// Re-applies the nearest redo candidate. No-op if there is none.
    pub fn redo(&mut self) {
        if self.future.is_empty() {
            return;
        }

        let next = self.future.remove(0);
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Restarts the history around a new baseline.
    ///
    /// Used whenever the editing target changes: past states belonged to a
    /// different working set and must not leak across selections.
    pub fn reset(&mut self, colors: Vec<String>) {
        *self = Self::new(colors);
    }
}
