//! Fixed-capacity table of active game objects
//!
//! Slots are stable for an object's lifetime; the slot index is the
//! object's handle. Running out of slots, querying a free slot, and
//! deleting twice are all expected outcomes, not errors.

use super::types::GameObject2d;

/// Default number of object slots.
pub const DEFAULT_CAPACITY: usize = 256;

/// Slot table of game objects with a parallel active bitmap.
#[derive(Debug)]
pub struct Registry {
    slots: Vec<GameObject2d>,
    active: Vec<bool>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Capacity is fixed for the registry's lifetime.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, GameObject2d::default);
        Self {
            slots,
            active: vec![false; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live objects.
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Claim the first free slot, zero-initialized. `None` when full.
    pub fn create(&mut self) -> Option<usize> {
        let index = self.active.iter().position(|&a| !a)?;
        self.slots[index].reset();
        self.active[index] = true;
        Some(index)
    }

    /// Live object at `index`; `None` for free slots and out-of-range
    /// indices alike.
    pub fn get(&self, index: usize) -> Option<&GameObject2d> {
        if *self.active.get(index)? {
            Some(&self.slots[index])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut GameObject2d> {
        if *self.active.get(index)? {
            Some(&mut self.slots[index])
        } else {
            None
        }
    }

    /// Free the slot, dropping its sprite buffer. Returns false when the
    /// index is out of range or already free (idempotent).
    pub fn delete(&mut self, index: usize) -> bool {
        match self.active.get_mut(index) {
            Some(active) if *active => {
                *active = false;
                self.slots[index].reset();
                true
            }
            _ => false,
        }
    }

    /// Live objects in ascending slot order.
    ///
    /// This is the paint order for the renderer: later slots draw over
    /// earlier ones.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GameObject2d)> + '_ {
        self.active
            .iter()
            .zip(self.slots.iter())
            .enumerate()
            .filter_map(|(index, (&active, slot))| active.then_some((index, slot)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
