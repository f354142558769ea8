use std::collections::BTreeSet;

use crate::key::Key;

/// Pressed/released snapshot of the tracked keys.
///
/// Mutated by key-down/key-up handlers between frames and read once per frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: BTreeSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down event by identifier. Returns false for untracked keys.
    pub fn key_down(&mut self, id: &str) -> bool {
        match Key::from_id(id) {
            Some(key) => {
                self.press(key);
                true
            }
            None => {
                tracing::trace!(id, "ignoring key-down for untracked key");
                false
            }
        }
    }

    /// Handle a key-up event by identifier. Returns false for untracked keys.
    pub fn key_up(&mut self, id: &str) -> bool {
        match Key::from_id(id) {
            Some(key) => {
                self.release(key);
                true
            }
            None => {
                tracing::trace!(id, "ignoring key-up for untracked key");
                false
            }
        }
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Pressed keys in a stable order.
    pub fn pressed(&self) -> impl Iterator<Item = Key> + '_ {
        self.pressed.iter().copied()
    }
}

impl FromIterator<Key> for KeyState {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            pressed: iter.into_iter().collect(),
        }
    }
}
