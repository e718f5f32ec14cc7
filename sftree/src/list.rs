//! An ordered, append/pop container with an explicit growth policy.
//!
//! [`GrowableList`] wraps a `Vec` but owns the decision of when and how much
//! to grow: directory listings arrive one entry at a time with no size hint,
//! so capacity is over-allocated on every growth step and all reservations
//! are fallible.

use std::ops::Index;

use crate::error::{Error, Result};

/// Capacity to grow to when `requested` slots are needed.
///
/// Over-allocates by one eighth plus a constant and rounds down to a
/// multiple of four. The result is always at least `requested + 3`.
///
/// # Examples
///
/// ```
/// use sftree::list::grown_capacity;
///
/// assert_eq!(grown_capacity(1), 4);
/// assert_eq!(grown_capacity(5), 8);
/// assert_eq!(grown_capacity(16), 24);
/// ```
#[must_use]
pub const fn grown_capacity(requested: usize) -> usize {
    requested.saturating_add(requested >> 3).saturating_add(6) & !3
}

/// Ordered, index-addressable sequence with amortized O(1) append.
///
/// `len() <= capacity()` always holds, and elements keep their insertion
/// order across `append` and `remove_last`.
///
/// # Examples
///
/// ```
/// use sftree::GrowableList;
///
/// let mut list = GrowableList::new(0).unwrap();
/// list.append("a").unwrap();
/// list.append("b").unwrap();
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.remove_last(), Some("b"));
/// assert_eq!(list.remove_last(), Some("a"));
/// assert_eq!(list.remove_last(), None);
/// assert!(list.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowableList<T> {
    items: Vec<T>,
    allocated: usize,
}

impl<T> GrowableList<T> {
    /// Creates an empty list with room for exactly `initial_capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the storage cannot be reserved.
    pub fn new(initial_capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(initial_capacity)
            .map_err(|source| Error::AllocationFailure {
                requested: initial_capacity,
                source,
            })?;
        Ok(Self {
            items,
            allocated: initial_capacity,
        })
    }

    /// Ensures room for at least `required` elements.
    fn reserve_for(&mut self, required: usize) -> Result<()> {
        if self.allocated >= required {
            return Ok(());
        }

        let new_capacity = grown_capacity(required);
        let additional = new_capacity - self.items.len();
        if let Err(source) = self.items.try_reserve_exact(additional) {
            log::error!(
                "Couldn't reallocate list storage, tried to allocate {new_capacity} element(s)"
            );
            return Err(Error::AllocationFailure {
                requested: additional,
                source,
            });
        }

        log::debug!(
            "Grew list capacity from {} to {new_capacity}",
            self.allocated
        );
        self.allocated = new_capacity;
        Ok(())
    }

    /// Appends an element at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if growth fails. The list is left
    /// untouched at its prior length in that case.
    pub fn append(&mut self, element: T) -> Result<()> {
        self.reserve_for(self.items.len() + 1)?;
        self.items.push(element);
        Ok(())
    }

    /// Removes and returns the tail element, or `None` when empty.
    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns true when the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of elements the list can hold before growing again.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.allocated
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the tail element without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Views the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list, returning the elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            allocated: 0,
        }
    }
}

impl<T> Index<usize> for GrowableList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IntoIterator for GrowableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_elements() {
        let list: GrowableList<u32> = GrowableList::new(8).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 8);
    }

    #[test]
    fn test_grown_capacity_policy() {
        assert_eq!(grown_capacity(1), 4);
        assert_eq!(grown_capacity(2), 8);
        assert_eq!(grown_capacity(4), 8);
        assert_eq!(grown_capacity(9), 16);
        assert_eq!(grown_capacity(100), 116);
        for requested in 0..2048 {
            assert!(grown_capacity(requested) >= requested + 3);
            assert_eq!(grown_capacity(requested) % 4, 0);
        }
    }

    #[test]
    fn test_append_grows_only_when_full() {
        let mut list = GrowableList::new(2).unwrap();
        list.append(1).unwrap();
        list.append(2).unwrap();
        assert_eq!(list.capacity(), 2);

        list.append(3).unwrap();
        assert_eq!(list.capacity(), grown_capacity(3));
        assert!(list.len() <= list.capacity());
    }

    #[test]
    fn test_append_then_pop_all_is_empty() {
        let mut list = GrowableList::new(0).unwrap();
        for i in 0..100 {
            list.append(i).unwrap();
        }
        assert_eq!(list.len(), 100);
        for i in (0..100).rev() {
            assert_eq!(list.remove_last(), Some(i));
        }
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut list: GrowableList<String> = GrowableList::default();
        assert_eq!(list.remove_last(), None);
        assert_eq!(list.remove_last(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let mut list = GrowableList::new(1).unwrap();
        for word in ["alpha", "beta", "gamma"] {
            list.append(word).unwrap();
        }
        assert_eq!(list[0], "alpha");
        assert_eq!(list.get(2), Some(&"gamma"));
        assert_eq!(list.get(3), None);
        assert_eq!(list.last(), Some(&"gamma"));
        let collected: Vec<_> = list.iter().copied().collect();
        assert_eq!(collected, vec!["alpha", "beta", "gamma"]);
        assert_eq!(list.into_vec(), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_new_with_impossible_capacity_fails() {
        let result: Result<GrowableList<u64>> = GrowableList::new(usize::MAX);
        assert!(matches!(result, Err(Error::AllocationFailure { .. })));
    }
}
