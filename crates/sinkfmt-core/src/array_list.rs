//! Contiguous growable list with explicit capacity management.
//!
//! Unlike `Vec`, every growth step is fallible and reported as
//! [`ListError::Resource`], and the growth factor is chosen per list.
//!
//! Invariants:
//! - `len() <= capacity()`
//! - capacity only changes through `resize` or an append that needs room

use crate::error::ListError;

/// Growth factor used when none is configured.
pub const DEFAULT_GROW_FACTOR: usize = 2;

/// Capacity reserved by the first append into an empty list.
pub const MIN_GROW_CAPACITY: usize = 4;

#[derive(Debug)]
pub struct ArrayList<T> {
    items: Vec<T>,
    cap: usize,
    grow_factor: usize,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Empty list with no storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            cap: 0,
            grow_factor: DEFAULT_GROW_FACTOR,
        }
    }

    /// Empty list with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        let mut list = Self::new();
        list.resize(capacity)?;
        Ok(list)
    }

    /// Set the factor applied to the length when an append needs room.
    ///
    /// Factors below 2 are raised to 2 so growth stays geometric.
    #[must_use]
    pub fn with_grow_factor(mut self, factor: usize) -> Self {
        self.grow_factor = factor.max(2);
        self
    }

    pub fn grow_factor(&self) -> usize {
        self.grow_factor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Drop all items, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Set the capacity to exactly `new_capacity`.
    ///
    /// Shrinking below the current length drops the items past the new end.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ListError> {
        if new_capacity < self.items.len() {
            self.items.truncate(new_capacity);
        }
        if new_capacity > self.items.capacity() {
            let additional = new_capacity - self.items.len();
            self.items
                .try_reserve_exact(additional)
                .map_err(|_| ListError::Resource {
                    requested: new_capacity,
                })?;
        } else {
            self.items.shrink_to(new_capacity);
        }
        self.cap = new_capacity;
        Ok(())
    }

    /// Make room for `extra` more items, growing geometrically.
    fn reserve_for(&mut self, extra: usize) -> Result<(), ListError> {
        let needed = self
            .items
            .len()
            .checked_add(extra)
            .ok_or(ListError::Resource {
                requested: usize::MAX,
            })?;
        if needed <= self.cap {
            return Ok(());
        }
        let grown = self.items.len().saturating_mul(self.grow_factor);
        self.resize(grown.max(needed).max(MIN_GROW_CAPACITY))
    }

    /// Append one item.
    pub fn append(&mut self, item: T) -> Result<(), ListError> {
        self.reserve_for(1)?;
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the last item.
    pub fn pop(&mut self) -> Result<T, ListError> {
        self.items.pop().ok_or(ListError::Empty)
    }

    /// Remove the item at `index`, filling the hole with the last item.
    pub fn swap_remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        Ok(self.items.swap_remove(index))
    }

    /// Remove the item at `index`, shifting later items down by one.
    pub fn ordered_remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        let len = self.items.len();
        if len == 0 {
            return Err(ListError::Empty);
        }
        if index >= len {
            return Err(ListError::OutOfBounds { index, len });
        }
        Ok(())
    }
}

impl<T: Clone> ArrayList<T> {
    /// Append `n` copies of `item`.
    pub fn append_n_times(&mut self, item: T, n: usize) -> Result<(), ListError> {
        self.reserve_for(n)?;
        self.items.extend(std::iter::repeat_n(item, n));
        Ok(())
    }

    /// Append a copy of every item in `items`.
    pub fn append_slice(&mut self, items: &[T]) -> Result<(), ListError> {
        self.reserve_for(items.len())?;
        self.items.extend_from_slice(items);
        Ok(())
    }

    /// Append the whole of `items`, `n` times.
    pub fn append_slice_n_times(&mut self, items: &[T], n: usize) -> Result<(), ListError> {
        let total = items.len().checked_mul(n).ok_or(ListError::Resource {
            requested: usize::MAX,
        })?;
        self.reserve_for(total)?;
        for _ in 0..n {
            self.items.extend_from_slice(items);
        }
        Ok(())
    }

    /// Copy of this list sized to its length, keeping the grow factor.
    pub fn try_clone(&self) -> Result<Self, ListError> {
        let mut copy = Self::with_capacity(self.items.len())?.with_grow_factor(self.grow_factor);
        copy.items.extend_from_slice(&self.items);
        Ok(copy)
    }
}

impl<T> std::ops::Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
