//! Fast, but limited allocator.

use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// The number of objects per chunk used by `TypedArena::default()`.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// A handle to an object allocated in a `TypedArena<T>`.
///
/// Handles are small and `Copy`, so they can be freely stored as links between objects in the
/// same arena without any ownership or lifetime concerns.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// All objects inside the arena are destroyed when the typed arena is destroyed or cleared;
/// individual objects are never deallocated. The underlying container is simply a `Vec` of chunks
/// so the code itself uses no unsafe code. When the typed arena is full, it will allocate another
/// chunk of objects so no memory is reallocated and handles stay valid.
///
/// # Examples
///
/// ```
/// use balanced_trees::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
/// ```
pub struct TypedArena<T> {
    chunks: Vec<Vec<T>>,
    chunk_size: usize,
    len: usize,
}

impl<T> TypedArena<T> {
    fn is_valid_handle(&self, handle: &Handle) -> bool {
        handle.chunk_index < self.chunks.len()
            && handle.block_index < self.chunks[handle.chunk_index].len()
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::arena::TypedArena;
    ///
    /// // creates a new TypedArena<T> that contains a maximum of 1024 u32's per chunk
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            chunks: Vec::new(),
            chunk_size,
            len: 0,
        }
    }

    /// Allocates an object in the typed arena and returns a `Handle`. The handle can later be used
    /// to retrieve mutable and immutable references to the object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() == self.chunk_size,
            None => true,
        };
        if needs_chunk {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }
        self.len += 1;

        let chunk_count = self.chunks.len();
        let last_chunk = &mut self.chunks[chunk_count - 1];
        last_chunk.push(value);
        Handle {
            chunk_index: chunk_count - 1,
            block_index: last_chunk.len() - 1,
        }
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the
    /// handle does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        Some(&self.chunks[handle.chunk_index][handle.block_index])
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the handle
    /// does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        Some(&mut self.chunks[handle.chunk_index][handle.block_index])
    }

    /// Returns the number of objects allocated in the typed arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been allocated in the typed arena.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Destroys every object in the typed arena. All previously returned handles become invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// arena.clear();
    /// assert_eq!(arena.get(&x), None);
    /// ```
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }
}

impl<T> Default for TypedArena<T> {
    fn default() -> Self {
        TypedArena::new(DEFAULT_CHUNK_SIZE)
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle out of bounds.")
    }
}
