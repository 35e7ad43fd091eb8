//! Resizable array with a movable minimum index.

use crate::error::{Error, Result};
use log::trace;
use std::cmp;
use std::vec::Vec;

/// The capacity used by `DynamicArray::new()`.
pub const DEFAULT_CAPACITY: usize = 16;

/// A resizable array whose valid indices are `min_index()..=max_index()`.
///
/// The minimum index starts wherever the array is constructed with and moves down when elements
/// are prepended, so prepending never changes the index of an existing element. Storage doubles
/// when full and is halved once no more than a quarter of it is in use. Accessing an index outside
/// the valid range fails with `Error::OutOfBounds`.
///
/// # Examples
///
/// ```
/// use balanced_trees::dynamic_array::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push(1);
/// array.push(2);
/// array.prepend(0);
///
/// assert_eq!(array.min_index(), -1);
/// assert_eq!(array.get(-1), Ok(&0));
/// assert_eq!(array.get(1), Ok(&2));
/// assert!(array.get(2).is_err());
/// ```
pub struct DynamicArray<T> {
    elements: Vec<T>,
    min: isize,
}

impl<T> DynamicArray<T> {
    /// Constructs a new, empty `DynamicArray<T>` starting at index 0.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `DynamicArray<T>` starting at index 0 with room for `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_min_index(0, capacity)
    }

    /// Constructs a new, empty `DynamicArray<T>` whose first element will be at index `min`.
    ///
    /// # Panics
    ///
    /// Panics if `min` is `isize::min_value()`, since the maximum index of an empty array is one
    /// below its minimum index.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::with_min_index(1, 4);
    /// array.push('a');
    /// assert_eq!(array.get(1), Ok(&'a'));
    /// ```
    pub fn with_min_index(min: isize, capacity: usize) -> Self {
        assert!(
            min > isize::min_value(),
            "Error: minimum index must be greater than isize::min_value()."
        );
        DynamicArray {
            elements: Vec::with_capacity(capacity),
            min,
        }
    }

    fn offset(&self, index: isize) -> Result<usize> {
        if index < self.min || index > self.max_index() {
            return Err(Error::OutOfBounds {
                index,
                min: self.min,
                max: self.max_index(),
            });
        }
        Ok(index.wrapping_sub(self.min) as usize)
    }

    fn grow(&mut self) {
        let capacity = self.elements.capacity();
        if self.elements.len() == capacity {
            trace!("growing dynamic array from capacity {}", capacity);
            self.elements.reserve_exact(cmp::max(capacity, 1));
        }
    }

    fn shrink(&mut self) {
        let capacity = self.elements.capacity();
        if capacity > DEFAULT_CAPACITY && self.elements.len() <= capacity / 4 {
            trace!("shrinking dynamic array from capacity {}", capacity);
            self.elements.shrink_to(capacity / 2);
        }
    }

    /// Appends an element after the current maximum index.
    ///
    /// # Panics
    ///
    /// Panics if the maximum index is already `isize::max_value()`.
    pub fn push(&mut self, elem: T) {
        assert!(
            self.max_index() < isize::max_value(),
            "Error: maximum index would overflow."
        );
        self.grow();
        self.elements.push(elem);
    }

    /// Inserts an element before the current minimum index, which moves down by one.
    ///
    /// # Panics
    ///
    /// Panics if the minimum index is already `isize::min_value() + 1`.
    pub fn prepend(&mut self, elem: T) {
        assert!(
            self.min - 1 > isize::min_value(),
            "Error: minimum index would overflow."
        );
        self.grow();
        self.elements.insert(0, elem);
        self.min -= 1;
    }

    /// Removes and returns the element at `index`, moving every later element back by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// array.push(0);
    /// array.push(1);
    /// assert_eq!(array.remove(0), Ok(0));
    /// assert_eq!(array.get(0), Ok(&1));
    /// ```
    pub fn remove(&mut self, index: isize) -> Result<T> {
        self.remove_shifting(index, false)
    }

    /// Removes and returns the element at `index`. If `forwards` is `true`, the gap is closed by
    /// moving the minimum index up by one, so earlier elements move forward and later elements
    /// keep their indices. Otherwise later elements move back by one. Removing the element at
    /// `isize::max_value()` forwards leaves the minimum index in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// array.push(0);
    /// array.push(1);
    /// array.push(2);
    /// assert_eq!(array.remove_shifting(1, true), Ok(1));
    /// assert_eq!(array.get(1), Ok(&0));
    /// assert_eq!(array.get(2), Ok(&2));
    /// ```
    pub fn remove_shifting(&mut self, index: isize, forwards: bool) -> Result<T> {
        let offset = self.offset(index)?;
        let ret = self.elements.remove(offset);
        if forwards && self.min < isize::max_value() {
            self.min += 1;
        }
        self.shrink();
        Ok(ret)
    }

    /// Swaps the elements at the two indices.
    pub fn swap(&mut self, index: isize, other_index: isize) -> Result<()> {
        let offset = self.offset(index)?;
        let other_offset = self.offset(other_index)?;
        self.elements.swap(offset, other_offset);
        Ok(())
    }

    pub fn get(&self, index: isize) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.elements[offset])
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let offset = self.offset(index)?;
        Ok(&mut self.elements[offset])
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub fn min_index(&self) -> isize {
        self.min
    }

    /// Returns the largest valid index. For an empty array this is `min_index() - 1`.
    pub fn max_index(&self) -> isize {
        (self.min - 1).wrapping_add(self.elements.len() as isize)
    }

    /// Returns an iterator over the elements from the minimum index up.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            elements: &self.elements,
            cursor: 0,
        }
    }
}

impl<T> DynamicArray<T>
where
    T: PartialEq,
{
    /// Returns the index of the `n`-th occurrence of `elem`, counting from zero. A negative `n`
    /// counts from the end instead, where `-1` is the last occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// for elem in &[0, 4, 6, 9, 4, 3, 4] {
    ///     array.push(*elem);
    /// }
    /// assert_eq!(array.index_of(&4, 0), Some(1));
    /// assert_eq!(array.index_of(&4, 1), Some(4));
    /// assert_eq!(array.index_of(&4, -1), Some(6));
    /// assert_eq!(array.index_of(&4, 3), None);
    /// ```
    pub fn index_of(&self, elem: &T, n: isize) -> Option<isize> {
        let mut matches = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, curr)| *curr == elem)
            .map(|(offset, _)| offset);
        let offset = if n < 0 {
            matches.rev().nth(!n as usize)
        } else {
            matches.nth(n as usize)
        }?;
        Some(self.min.wrapping_add(offset as isize))
    }

    pub fn first_index_of(&self, elem: &T) -> Option<isize> {
        self.index_of(elem, 0)
    }

    pub fn last_index_of(&self, elem: &T) -> Option<isize> {
        self.index_of(elem, -1)
    }

    pub fn contains(&self, elem: &T) -> bool {
        self.first_index_of(elem).is_some()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a `DynamicArray<T>` that can jump ahead.
pub struct Iter<'a, T> {
    elements: &'a [T],
    cursor: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Advances the iterator by `amount` elements without yielding them. Skipping past the end
    /// leaves the iterator exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// for elem in 0..5 {
    ///     array.push(elem);
    /// }
    /// let mut iter = array.iter();
    /// iter.skip_ahead(3);
    /// assert_eq!(iter.next(), Some(&3));
    /// iter.skip_ahead(100);
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn skip_ahead(&mut self, amount: usize) {
        self.cursor = cmp::min(self.cursor.saturating_add(amount), self.elements.len());
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ret = self.elements.get(self.cursor)?;
        self.cursor += 1;
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::DynamicArray;
    use crate::error::Error;

    #[test]
    fn test_empty() {
        let array: DynamicArray<u32> = DynamicArray::new();
        assert!(array.is_empty());
        assert_eq!(array.min_index(), 0);
        assert_eq!(array.max_index(), -1);
        assert_eq!(
            array.get(0),
            Err(Error::OutOfBounds {
                index: 0,
                min: 0,
                max: -1,
            }),
        );
    }

    #[test]
    fn test_push_get() {
        let mut array = DynamicArray::new();
        for elem in 0..100 {
            array.push(elem);
        }
        assert_eq!(array.len(), 100);
        assert!(array.capacity() >= 100);
        for index in 0..100 {
            assert_eq!(array.get(index), Ok(&(index as i32)));
        }
        *array.get_mut(5).unwrap() = 50;
        assert_eq!(array.get(5), Ok(&50));
    }

    #[test]
    fn test_prepend_keeps_indices() {
        let mut array = DynamicArray::new();
        array.push(1);
        array.push(2);
        array.prepend(0);
        array.prepend(-1);
        assert_eq!(array.min_index(), -2);
        assert_eq!(array.max_index(), 1);
        assert_eq!(array.get(-2), Ok(&-1));
        assert_eq!(array.get(0), Ok(&1));
        assert_eq!(array.iter().cloned().collect::<Vec<_>>(), vec![-1, 0, 1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut array = DynamicArray::new();
        for elem in 0..4 {
            array.push(elem);
        }
        assert_eq!(array.remove(1), Ok(1));
        assert_eq!(array.iter().cloned().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(array.max_index(), 2);
        assert_eq!(
            array.remove(3),
            Err(Error::OutOfBounds {
                index: 3,
                min: 0,
                max: 2,
            }),
        );
    }

    #[test]
    fn test_remove_forwards() {
        let mut array = DynamicArray::new();
        for elem in 0..4 {
            array.push(elem);
        }
        assert_eq!(array.remove_shifting(2, true), Ok(2));
        assert_eq!(array.min_index(), 1);
        assert_eq!(array.max_index(), 3);
        assert_eq!(array.get(1), Ok(&0));
        assert_eq!(array.get(2), Ok(&1));
        assert_eq!(array.get(3), Ok(&3));
    }

    #[test]
    fn test_shrink() {
        let mut array = DynamicArray::new();
        for elem in 0..256 {
            array.push(elem);
        }
        let capacity = array.capacity();
        while array.len() > 8 {
            array.remove(0).unwrap();
        }
        assert!(array.capacity() < capacity);
        assert!(array.capacity() >= array.len());
        assert_eq!(array.get(0), Ok(&248));
    }

    #[test]
    fn test_swap() {
        let mut array = DynamicArray::with_min_index(10, 4);
        array.push('a');
        array.push('b');
        assert_eq!(array.swap(10, 11), Ok(()));
        assert_eq!(array.get(10), Ok(&'b'));
        assert_eq!(
            array.swap(10, 12),
            Err(Error::OutOfBounds {
                index: 12,
                min: 10,
                max: 11,
            }),
        );
    }

    #[test]
    fn test_index_of() {
        let mut array = DynamicArray::with_min_index(-3, 8);
        for elem in &[0, 4, 6, 9, 4, 3, 4] {
            array.push(*elem);
        }
        assert_eq!(array.first_index_of(&4), Some(-2));
        assert_eq!(array.index_of(&4, 2), Some(3));
        assert_eq!(array.index_of(&4, -2), Some(1));
        assert_eq!(array.last_index_of(&4), Some(3));
        assert_eq!(array.last_index_of(&7), None);
        assert!(array.contains(&9));
        assert!(!array.contains(&7));
    }

    #[test]
    fn test_index_of_extreme_occurrences() {
        let mut array = DynamicArray::new();
        array.push(1);
        array.push(1);
        assert_eq!(array.index_of(&1, isize::min_value()), None);
        assert_eq!(array.index_of(&1, isize::max_value()), None);
        assert_eq!(array.index_of(&1, -2), Some(0));
    }

    #[test]
    #[should_panic]
    fn test_min_index_at_lower_limit() {
        let _array: DynamicArray<u32> = DynamicArray::with_min_index(isize::min_value(), 4);
    }

    #[test]
    fn test_indices_near_limits() {
        let mut array = DynamicArray::with_min_index(isize::min_value() + 1, 4);
        assert_eq!(array.max_index(), isize::min_value());
        array.push('a');
        assert_eq!(array.get(isize::min_value() + 1), Ok(&'a'));
        assert_eq!(array.max_index(), isize::min_value() + 1);
        assert_eq!(array.last_index_of(&'a'), Some(isize::min_value() + 1));

        let mut array = DynamicArray::with_min_index(isize::max_value(), 4);
        array.push('b');
        assert_eq!(array.max_index(), isize::max_value());
        assert_eq!(array.get(isize::max_value()), Ok(&'b'));
        assert_eq!(array.remove_shifting(isize::max_value(), true), Ok('b'));
        assert!(array.is_empty());
        assert_eq!(array.min_index(), isize::max_value());
    }

    #[test]
    #[should_panic]
    fn test_prepend_past_lower_limit() {
        let mut array = DynamicArray::with_min_index(isize::min_value() + 1, 4);
        array.prepend(0);
    }

    #[test]
    #[should_panic]
    fn test_push_past_upper_limit() {
        let mut array = DynamicArray::with_min_index(isize::max_value(), 4);
        array.push(0);
        array.push(1);
    }

    #[test]
    fn test_skip_ahead() {
        let mut array = DynamicArray::new();
        for elem in 0..4 {
            array.push(elem);
        }
        let mut iter = array.iter();
        assert_eq!(iter.next(), Some(&0));
        iter.skip_ahead(2);
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next(), Some(&3));
        iter.skip_ahead(usize::max_value());
        assert_eq!(iter.next(), None);
    }
}
