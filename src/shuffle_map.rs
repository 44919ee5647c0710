use std::collections::HashMap;

use crate::Dealable;

/// Sparse view of a permutation of `0..count`. A position without an entry
/// still holds itself.
pub(crate) struct ShuffleMap<T: Dealable> {
    moved: HashMap<T::Key, T>,
}

impl<T: Dealable> ShuffleMap<T> {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moved: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moved.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }

    /// Returns the value at position `i` and moves the value at `last` into
    /// its place. `last` is retired: its entry is dropped and must not be
    /// asked for again.
    pub fn swap(&mut self, i: T, last: T) -> T {
        if i == last {
            return self.moved.remove(&last.key()).unwrap_or(last);
        }
        // whatever sits at `last` is never selected again, so it leaves the map
        let tail = self.moved.remove(&last.key()).unwrap_or(last);
        self.moved.insert(i.key(), tail).unwrap_or(i)
    }
}
