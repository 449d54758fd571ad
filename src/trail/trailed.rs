// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Restoring trailed state during backtracking.

/// State whose slots can be restored from the trail.
///
/// Each slot has a unique identifier within the implementing type; the
/// trail stores that identifier together with the old value widened to u64.
/// Implementations decode the identifier and write the value back.
pub trait TrailRestore {
    /// Restore slot `id` to `old_value`.
    fn restore(&mut self, id: usize, old_value: u64);
}

/// Encoding of optional small values as u64 trail words.
///
/// `None` is stored as 0 and `Some(v)` as `v + 1`.
pub fn encode_option(value: Option<u8>) -> u64 {
    value.map_or(0, |v| v as u64 + 1)
}

/// Inverse of [`encode_option`].
pub fn decode_option(word: u64) -> Option<u8> {
    match word {
        0 => None,
        w => Some((w - 1) as u8),
    }
}
