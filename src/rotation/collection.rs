//! Content store: the fixed, ordered list a carousel rotates through.

use super::error::RotationError;
use super::item::Placeholder;

/// Ordered, non-empty sequence of items.
///
/// The non-empty invariant is established at construction, so index
/// arithmetic on a collection can never divide by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Build a collection, rejecting an empty list.
    pub fn new(items: Vec<T>) -> Result<Self, RotationError> {
        if items.is_empty() {
            return Err(RotationError::EmptyCollection);
        }
        Ok(Self { items })
    }

    /// Item at `index`, taken modulo the collection length.
    pub fn get(&self, index: usize) -> &T {
        &self.items[index % self.items.len()]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Placeholder> Collection<T> {
    /// Build a collection, substituting a single placeholder item when the
    /// input is empty.
    pub fn or_placeholder(items: Vec<T>) -> Self {
        match Self::new(items) {
            Ok(collection) => collection,
            Err(err) => {
                tracing::warn!(error = %err, "Empty collection, using placeholder item");
                Self {
                    items: vec![T::placeholder()],
                }
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
