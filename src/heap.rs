//! Array-backed binary heap.

use crate::dynamic_array::DynamicArray;
use crate::error::{Error, Result};
use crate::tree::Tree;
use std::cmp::Ordering;
use std::fmt;

/// A collection that gives efficient access to its highest priority element.
pub trait Heap<T>: Tree<T> {
    /// Returns the element with the highest priority, or `None` if the heap is empty.
    fn top(&self) -> Option<&T>;

    /// Removes and returns the element with the highest priority.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCollection` if the heap is empty.
    fn remove(&mut self) -> Result<T>;
}

/// Decides which of two elements has the higher priority.
pub enum Priority<T> {
    /// Smaller elements have higher priority.
    Lowest,
    /// Larger elements have higher priority.
    Highest,
    /// The element comparing `Greater` has higher priority.
    By(fn(&T, &T) -> Ordering),
}

impl<T> Priority<T>
where
    T: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Priority::Lowest => b.cmp(a),
            Priority::Highest => a.cmp(b),
            Priority::By(compare) => compare(a, b),
        }
    }
}

impl<T> Clone for Priority<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Priority<T> {}

impl<T> fmt::Debug for Priority<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Priority::Lowest => write!(f, "Lowest"),
            Priority::Highest => write!(f, "Highest"),
            Priority::By(_) => write!(f, "By(..)"),
        }
    }
}

/// A binary heap stored level by level in a `DynamicArray<T>`.
///
/// The children of the element at index `i` are at `2i + 1` and `2i + 2`, and no child has a
/// higher priority than its parent.
///
/// # Examples
///
/// ```
/// use balanced_trees::heap::BinaryHeap;
/// use balanced_trees::Error;
///
/// let mut heap = BinaryHeap::min_heap();
/// heap.add(5);
/// heap.add(1);
/// heap.add(9);
///
/// assert_eq!(heap.top(), Some(&1));
/// assert_eq!(heap.remove(), Ok(1));
/// assert_eq!(heap.remove(), Ok(5));
/// assert_eq!(heap.remove(), Ok(9));
/// assert_eq!(heap.remove(), Err(Error::EmptyCollection));
/// ```
pub struct BinaryHeap<T> {
    elements: DynamicArray<T>,
    priority: Priority<T>,
}

impl<T> BinaryHeap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinaryHeap<T>` ordered by `priority`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::heap::{BinaryHeap, Priority};
    ///
    /// let mut heap = BinaryHeap::new(Priority::By(|a: &i32, b: &i32| a.abs().cmp(&b.abs())));
    /// heap.add(-7);
    /// heap.add(3);
    /// assert_eq!(heap.top(), Some(&-7));
    /// ```
    pub fn new(priority: Priority<T>) -> Self {
        BinaryHeap {
            elements: DynamicArray::new(),
            priority,
        }
    }

    /// Constructs a new, empty heap whose top is its minimum element.
    pub fn min_heap() -> Self {
        Self::new(Priority::Lowest)
    }

    /// Constructs a new, empty heap whose top is its maximum element.
    pub fn max_heap() -> Self {
        Self::new(Priority::Highest)
    }

    fn has_priority(&self, index: isize, other_index: isize) -> Result<bool> {
        let ordering = self
            .priority
            .compare(self.elements.get(index)?, self.elements.get(other_index)?);
        Ok(ordering == Ordering::Greater)
    }

    fn sift_up(&mut self, mut index: isize) -> Result<()> {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.has_priority(index, parent)? {
                break;
            }
            self.elements.swap(parent, index)?;
            index = parent;
        }
        Ok(())
    }

    fn sift_down(&mut self, mut index: isize) -> Result<()> {
        let max_index = self.elements.max_index();
        loop {
            let mut best = index;
            for child in &[2 * index + 1, 2 * index + 2] {
                if *child <= max_index && self.has_priority(*child, best)? {
                    best = *child;
                }
            }
            if best == index {
                return Ok(());
            }
            self.elements.swap(index, best)?;
            index = best;
        }
    }

    // Scans the elements from `start` on for the one that compares `wanted` against all others.
    fn scan(&self, start: usize, wanted: Ordering) -> Option<&T> {
        let mut iter = self.elements.iter();
        iter.skip_ahead(start);
        iter.fold(None, |best, elem| match best {
            Some(best) if elem.cmp(best) != wanted => Some(best),
            _ => Some(elem),
        })
    }

    /// Adds an element to the heap.
    pub fn add(&mut self, elem: T) {
        self.elements.push(elem);
        let last = self.elements.max_index();
        self.sift_up(last)
            .expect("Expected heap indices to be in bounds.");
    }

    /// Returns the element with the highest priority, or `None` if the heap is empty.
    pub fn top(&self) -> Option<&T> {
        self.elements.get(0).ok()
    }

    /// Removes and returns the element with the highest priority.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCollection` if the heap is empty.
    pub fn remove(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let last = self.elements.max_index();
        self.elements.swap(0, last)?;
        let ret = self.elements.remove(last)?;
        if !self.elements.is_empty() {
            self.sift_down(0)?;
        }
        Ok(ret)
    }

    /// Checks if an element exists in the heap. This is a linear scan.
    pub fn contains(&self, elem: &T) -> bool {
        self.elements.contains(elem)
    }

    /// Returns the minimum element of the heap. Returns `None` if the heap is empty.
    ///
    /// For a min-heap this is the top. For a max-heap the minimum is one of the leaves, so only
    /// the second half of the array is scanned.
    pub fn min(&self) -> Option<&T> {
        match self.priority {
            Priority::Lowest => self.top(),
            Priority::Highest => self.scan(self.len() / 2, Ordering::Less),
            Priority::By(_) => self.scan(0, Ordering::Less),
        }
    }

    /// Returns the maximum element of the heap. Returns `None` if the heap is empty.
    ///
    /// For a max-heap this is the top. For a min-heap the maximum is one of the leaves, so only
    /// the second half of the array is scanned.
    pub fn max(&self) -> Option<&T> {
        match self.priority {
            Priority::Highest => self.top(),
            Priority::Lowest => self.scan(self.len() / 2, Ordering::Greater),
            Priority::By(_) => self.scan(0, Ordering::Greater),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> Tree<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn add(&mut self, elem: T) {
        BinaryHeap::add(self, elem);
    }

    fn contains(&mut self, elem: &T) -> bool {
        BinaryHeap::contains(self, elem)
    }

    fn find_min(&mut self) -> Option<&T> {
        self.min()
    }

    fn find_max(&mut self) -> Option<&T> {
        self.max()
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}

impl<T> Heap<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn top(&self) -> Option<&T> {
        BinaryHeap::top(self)
    }

    fn remove(&mut self) -> Result<T> {
        BinaryHeap::remove(self)
    }
}
