//! Held-key detection for terminals that may never report key releases.
//!
//! Without release events a key counts as held while its last press or
//! repeat is recent.  The OS waits 250–600 ms before it starts repeating a
//! key, so a fresh press gets a longer window than a key that is already
//! repeating.

use std::collections::HashMap;
use std::hash::Hash;

/// Frames a repeating key stays held after its last event.  The OS repeat
/// rate is ≥ 15 Hz, so 8 frames (≈133 ms at 60 FPS) is refreshed before
/// expiry.
pub const HOLD_WINDOW: u64 = 8;

/// Frames a freshly pressed key stays held while waiting for the first
/// repeat (≈667 ms at 60 FPS).
pub const FIRST_HOLD_WINDOW: u64 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Seen {
    last: u64,
    repeating: bool,
}

#[derive(Clone, Debug)]
pub struct HoldTracker<K> {
    seen: HashMap<K, Seen>,
}

impl<K: Eq + Hash> Default for HoldTracker<K> {
    fn default() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> HoldTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press.  Terminals without keyboard enhancement report
    /// auto-repeat as further presses, so a press of a key that is still
    /// held counts as a repeat.
    pub fn press(&mut self, key: K, frame: u64) {
        let repeating = self.is_held(&key, frame);
        self.seen.insert(key, Seen { last: frame, repeating });
    }

    pub fn repeat(&mut self, key: K, frame: u64) {
        self.seen.insert(key, Seen { last: frame, repeating: true });
    }

    pub fn release(&mut self, key: &K) {
        self.seen.remove(key);
    }

    pub fn is_held(&self, key: &K, frame: u64) -> bool {
        self.seen
            .get(key)
            .map(|seen| {
                let window = if seen.repeating {
                    HOLD_WINDOW
                } else {
                    FIRST_HOLD_WINDOW
                };
                frame.saturating_sub(seen.last) <= window
            })
            .unwrap_or(false)
    }
}
