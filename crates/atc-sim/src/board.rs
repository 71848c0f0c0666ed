//! Shared status-message board.
//!
//! # Why per-slot locks
//!
//! The board is written by every actor task and read by the presentation
//! layer with no global coordination — the display race is benign and kept
//! deliberately (it is part of what the unguarded policy demonstrates).
//! What must *not* happen is one actor's write corrupting another actor's
//! entry, so each actor gets its own `RwLock<String>` slot and only ever
//! writes its own.  Entries are overwritten in place and never removed; the
//! empty string means "no message".
//!
//! One extra slot, the banner, is reserved for the global "COLLISION!"
//! message.  It is the only slot multiple tasks may write, and a plain
//! last-writer-wins overwrite is exactly the behavior wanted there.

use parking_lot::RwLock;

use atc_core::ActorId;

/// Status strings for one run: one slot per actor plus the collision banner.
pub struct MessageBoard {
    slots: Vec<RwLock<String>>,
    banner: RwLock<String>,
}

impl MessageBoard {
    /// An empty board for a fleet of `fleet_size` actors.
    pub fn new(fleet_size: u32) -> Self {
        let slots = (0..fleet_size).map(|_| RwLock::new(String::new())).collect();
        Self {
            slots,
            banner: RwLock::new(String::new()),
        }
    }

    /// Overwrite `actor`'s status line.
    pub fn publish(&self, actor: ActorId, text: impl Into<String>) {
        *self.slots[actor.index()].write() = text.into();
    }

    /// Reset `actor`'s status line to "no message".
    pub fn clear(&self, actor: ActorId) {
        self.slots[actor.index()].write().clear();
    }

    /// Read `actor`'s current status line.
    pub fn read(&self, actor: ActorId) -> String {
        self.slots[actor.index()].read().clone()
    }

    /// Overwrite the global banner.
    pub fn set_banner(&self, text: impl Into<String>) {
        *self.banner.write() = text.into();
    }

    /// Read the global banner ("" when no collision has been announced).
    pub fn banner(&self) -> String {
        self.banner.read().clone()
    }

    /// All non-empty status lines in actor order.  Each slot is read under
    /// its own short-lived lock; no actor task is blocked across the scan.
    pub fn messages(&self) -> Vec<(ActorId, String)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                let text = slot.read();
                if text.is_empty() {
                    None
                } else {
                    Some((ActorId::from_index(i), text.clone()))
                }
            })
            .collect()
    }

    /// Number of actor slots (excludes the banner).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
