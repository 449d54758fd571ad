// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the extension search.
//!
//! This module provides O(1) checkpoints by recording state changes in a trail.
//! When backtracking occurs, the trail is unwound and every recorded slot is
//! restored to its previous value, most recent first.

pub mod trailed;

pub use trailed::TrailRestore;

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEntry {
    /// Identifier of the slot that was changed
    pub id: usize,
    /// The value before the change (stored as u64)
    pub old_value: u64,
}

/// The trail system for O(1) backtracking.
///
/// # Memory Model
///
/// - DYNAMIC: The trail is mutable state (Tier 2) that changes during search
/// - Each SearchContext owns its own trail; it is cleared between independent
///   extendability tests
///
/// A checkpoint is simply the trail length at the time it was taken, so
/// checkpoints nest naturally and need no bookkeeping of their own.
#[derive(Debug)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
    /// Most live entries allowed
    limit: usize,
}

impl Trail {
    /// Create a new empty trail with no limit on its length.
    pub fn new() -> Self {
        Self::with_limit(usize::MAX)
    }

    /// Create a trail that panics once more than `limit` entries are live.
    ///
    /// The owner derives the limit from the size of the state it trails, so
    /// an overflow means changes are being recorded that are never undone.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::with_capacity(limit.min(256)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record a checkpoint for later backtracking.
    ///
    /// Returns the checkpoint, i.e. the current trail length.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record a state change in the trail.
    ///
    /// # Panics
    ///
    /// Panics if the trail would exceed its limit.
    pub fn record_change(&mut self, id: usize, old_value: u64) {
        if self.entries.len() >= self.limit {
            panic!("Trail overflow: exceeded {} entries", self.limit);
        }

        self.entries.push(TrailEntry { id, old_value });
    }

    /// Unwind the trail to `checkpoint`, restoring every recorded slot of
    /// `target` in reverse order.
    ///
    /// Rewinding to the current length is a no-op, so repeated rewinds to
    /// the same checkpoint are idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `checkpoint` lies beyond the end of the trail; such a
    /// checkpoint was never handed out by [`Trail::checkpoint`] for this
    /// state of the trail.
    pub fn rewind_to<R: TrailRestore + ?Sized>(&mut self, checkpoint: usize, target: &mut R) {
        assert!(
            checkpoint <= self.entries.len(),
            "Trail rewind past end: checkpoint {} > length {}",
            checkpoint,
            self.entries.len()
        );
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                target.restore(entry.id, entry.old_value);
            }
        }
    }

    /// Forget all entries without restoring anything.
    ///
    /// Used when the trailed state is about to be reinitialized wholesale.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries recorded since `checkpoint`, oldest first.
    pub fn entries_since(&self, checkpoint: usize) -> &[TrailEntry] {
        &self.entries[checkpoint.min(self.entries.len())..]
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
