//! Generic object pool.
//!
//! A `Pool` lends handles out and takes them back. It never destroys
//! anything on its own: `clear` hands every known handle back to the owner,
//! which decides how to dispose of them.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::{BuildHasherDefault, DefaultHasher, Hash};

use tracing::warn;

/// Hash builder with a fixed key, so iteration order depends only on the
/// insertion sequence. Keeps same-seed runs reproducible.
pub type StableState = BuildHasherDefault<DefaultHasher>;

#[derive(Debug)]
pub struct Pool<T> {
    /// Handles ready to lend, reused last-in first-out.
    available: Vec<T>,
    lent: HashSet<T, StableState>,
    total_created: usize,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self {
            available: Vec::new(),
            lent: HashSet::default(),
            total_created: 0,
        }
    }
}

impl<T: Copy + Eq + Hash + Debug> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lend a handle, reusing an available one or calling `create` when
    /// the pool is empty. Never fails.
    pub fn acquire(&mut self, create: impl FnOnce() -> T) -> T {
        let item = match self.available.pop() {
            Some(item) => item,
            None => {
                self.total_created += 1;
                create()
            }
        };
        if !self.lent.insert(item) {
            warn!(?item, "pool lent a handle that was already out");
        }
        item
    }

    /// Take a lent handle back. Returns false, changing nothing, when the
    /// handle is not currently lent (double release or a foreign handle).
    pub fn release(&mut self, item: T) -> bool {
        if !self.lent.remove(&item) {
            warn!(?item, "ignored release of a handle that is not lent");
            return false;
        }
        self.available.push(item);
        true
    }

    /// Forget every handle, available and lent, returning them all.
    ///
    /// Lent handles are not released first; the caller owns whatever it
    /// still considers live.
    pub fn clear(&mut self) -> Vec<T> {
        let mut all: Vec<T> = self.available.drain(..).collect();
        all.extend(self.lent.drain());
        all
    }

    pub fn is_available(&self, item: T) -> bool {
        self.available.contains(&item)
    }

    pub fn is_lent(&self, item: T) -> bool {
        self.lent.contains(&item)
    }

    pub fn available(&self) -> usize {
        self.available.len()
    }

    pub fn lent(&self) -> usize {
        self.lent.len()
    }

    /// Number of handles ever created through `acquire`.
    pub fn total_created(&self) -> usize {
        self.total_created
    }
}
