use crate::cursor::{Cursor, CursorMut};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::row::{Directory, Row};
use crate::Error;
use core::cmp::Ordering;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;
use std::alloc::handle_alloc_error;
use std::collections::VecDeque;
use std::fmt;

/// A trait for abstraction over different double-ended queue types.
pub trait AnyDeque<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push_back(&mut self, item: T);
    fn push_front(&mut self, item: T);
    fn pop_back(&mut self) -> Option<T>;
    fn pop_front(&mut self) -> Option<T>;
    fn get(&self, index: usize) -> Option<&T>;
    fn front(&self) -> Option<&T>;
    fn back(&self) -> Option<&T>;
    fn clear(&mut self);
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// A double-ended queue backed by a directory of fixed-capacity rows.
///
/// # Overview
/// Storage is two-level: a growable directory of rows, each row a contiguous
/// slab of `C` element slots. Pushes at either end are amortized O(1),
/// indexing is O(1) (one division and one modulo by `C`), and iterators cross
/// row boundaries transparently. New elements are centered within the owned
/// slots so the first pushes at either end need no reallocation.
///
/// # Invariants
/// * `front + len <= dir.slot_count()`.
/// * Exactly the slots in `[front, front + len)` hold constructed elements.
/// * Positions are canonical absolute slot indices; "one past the last
///   element" is exactly `front + len`, never an equivalent (row, offset)
///   spelling.
/// * `C` must be non-zero (enforced at compile time).
pub struct BlockDeque<T, const C: usize> {
    dir: Directory<T, C>,
    front: usize,
    len: usize,
}

impl<T, const C: usize> AnyDeque<T> for BlockDeque<T, C> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T, const C: usize> BlockDeque<T, C> {
    /// Creates a new empty deque owning no rows.
    pub const fn new() -> Self {
        Self {
            dir: Directory::new(),
            front: 0,
            len: 0,
        }
    }

    /// Creates an empty deque with room for at least `capacity` elements,
    /// positioned so early pushes at either end need no reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        let dir = match Directory::try_with_rows(Directory::<T, C>::rows_for(capacity)) {
            Ok(dir) => dir,
            Err(_) => handle_alloc_error(Row::<T, C>::layout()),
        };
        let front = dir.slot_count() / 2;
        Self { dir, front, len: 0 }
    }

    /// Creates a deque of `n` clones of `value`, centered within the smallest
    /// whole number of rows that holds `n` elements.
    pub fn from_elem(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut deque = Self::with_capacity(n);
        deque.resize(n, value);
        deque
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slot capacity currently owned (`rows * C`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.dir.slot_count()
    }

    // --- Access ---

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: index < len, so the slot holds a constructed element.
            Some(unsafe { &*self.slot(index) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            // SAFETY: index < len, so the slot holds a constructed element.
            Some(unsafe { &mut *self.slot(index) })
        } else {
            None
        }
    }

    /// Bounds-checked access that reports the failure instead of panicking.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    // --- Modification ---

    /// Appends an element to the back. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        self.make_back_slack();
        // SAFETY: the slot one past the last element exists and is free.
        unsafe { ptr::write(self.slot(self.len), value) };
        self.len += 1;
    }

    /// Prepends an element to the front. Amortized O(1).
    pub fn push_front(&mut self, value: T) {
        self.make_front_slack();
        self.front -= 1;
        // SAFETY: the slot below the first element exists and is free.
        unsafe { ptr::write(self.dir.slot(self.front), value) };
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty. O(1).
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old back holds a constructed element, and
        // len is shrunk first so no other path touches it again.
        Some(unsafe { ptr::read(self.slot(self.len)) })
    }

    /// Removes and returns the first element, or `None` if empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: the front slot holds a constructed element; advancing the
        // front cursor retires the slot before anything can re-read it.
        let value = unsafe { ptr::read(self.dir.slot(self.front)) };
        self.front += 1;
        self.len -= 1;
        Some(value)
    }

    /// Inserts `value` at `index`, shifting whichever side of the position is
    /// shorter. O(min(index, len - index)) element moves.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.len;
        assert!(index <= len, "index out of bounds");

        if index == 0 {
            return self.push_front(value);
        }
        if index == len {
            return self.push_back(value);
        }
        if len == self.dir.slot_count() {
            self.grow_infallible(self.dir.slot_count() + 1);
        }

        let front_slack = self.front > 0;
        let back_slack = self.front + len < self.dir.slot_count();
        let shift_front = match (front_slack, back_slack) {
            (true, true) => index <= len - index,
            (true, false) => true,
            (false, true) => false,
            (false, false) => unreachable!("no slack after growth"),
        };

        unsafe {
            if shift_front {
                // Slide [0, index) down one slot; the hole opens at `index`.
                for i in 0..index {
                    ptr::write(
                        self.dir.slot(self.front - 1 + i),
                        ptr::read(self.dir.slot(self.front + i)),
                    );
                }
                self.front -= 1;
            } else {
                // Slide [index, len) up one slot.
                for i in (index..len).rev() {
                    ptr::write(
                        self.dir.slot(self.front + i + 1),
                        ptr::read(self.dir.slot(self.front + i)),
                    );
                }
            }
            ptr::write(self.slot(index), value);
        }
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting whichever side of
    /// the position is shorter. Returns `None` if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len, so the slot holds a constructed element; the
        // shift below repopulates the hole (or the front cursor retires it).
        let value = unsafe { ptr::read(self.slot(index)) };
        unsafe {
            if index < self.len - index - 1 {
                // Slide [0, index) up one slot into the hole.
                for i in (0..index).rev() {
                    ptr::write(
                        self.dir.slot(self.front + i + 1),
                        ptr::read(self.dir.slot(self.front + i)),
                    );
                }
                self.front += 1;
            } else {
                // Slide (index, len) down one slot into the hole.
                for i in index + 1..self.len {
                    ptr::write(
                        self.dir.slot(self.front + i - 1),
                        ptr::read(self.dir.slot(self.front + i)),
                    );
                }
            }
        }
        self.len -= 1;
        Some(value)
    }

    /// Shortens the deque to at most `new_len` elements, destroying the tail.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;
            // SAFETY: the retired slot held a constructed element, and len is
            // already shrunk, so a panicking Drop unwinds cleanly.
            unsafe { ptr::drop_in_place(self.slot(self.len)) };
        }
    }

    /// Resizes to exactly `new_len` elements, filling with clones of `value`.
    ///
    /// Shrinking destroys the tail; growing within capacity re-centers the
    /// surviving elements first so both ends regain slack.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len < self.len {
            self.truncate(new_len);
        } else if new_len > self.len {
            if new_len > self.dir.slot_count() {
                self.grow_infallible(new_len);
            }
            let new_front = (self.dir.slot_count() - new_len) / 2;
            // SAFETY: new_front + new_len <= slot_count.
            unsafe { self.move_span(new_front) };
            // len advances with each construction, so a panicking Clone
            // leaves a valid shorter deque behind.
            while self.len < new_len {
                unsafe { ptr::write(self.slot(self.len), value.clone()) };
                self.len += 1;
            }
        }
    }

    /// Destroys all elements and resets the cursors to the middle of the
    /// retained capacity. No storage is freed.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.front = self.dir.slot_count() / 2;
    }

    /// Ensures room for at least `additional` more elements, reporting
    /// allocation failure instead of aborting. On failure the deque is
    /// unmodified.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error> {
        let needed = self.len + additional;
        if needed > self.dir.slot_count() {
            self.grow(needed)
        } else {
            Ok(())
        }
    }

    /// Ensures room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        if self.try_reserve(additional).is_err() {
            handle_alloc_error(Row::<T, C>::layout());
        }
    }

    /// Exchanges the contents of two deques in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    // --- Iteration & cursors ---

    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self.dir.rows(), self.front, self.front + self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T, C> {
        IterMut::new(self.dir.rows(), self.front, self.front + self.len)
    }

    /// Returns a cursor positioned at logical index `at`; `at == len` is the
    /// end sentinel.
    ///
    /// # Panics
    /// Panics if `at > len`.
    pub fn cursor(&self, at: usize) -> Cursor<'_, T, C> {
        assert!(at <= self.len, "cursor position out of bounds");
        Cursor::new(self, at)
    }

    /// Mutable counterpart of [`cursor`](Self::cursor).
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T, C> {
        assert!(at <= self.len, "cursor position out of bounds");
        CursorMut::new(self, at)
    }

    // --- Internals ---

    /// Raw pointer to the slot holding logical index `index`.
    #[inline]
    fn slot(&self, index: usize) -> *mut T {
        self.dir.slot(self.front + index)
    }

    /// Rebuilds the directory at the growth-policy target for `requested`
    /// slots and re-centers the elements. The replacement directory is fully
    /// allocated before any element moves, so failure leaves `self` intact.
    fn grow(&mut self, requested: usize) -> Result<(), Error> {
        let target = Directory::<T, C>::target_slots(requested, self.len);
        let new_dir = Directory::try_with_rows(Directory::<T, C>::rows_for(target))?;
        let new_front = (new_dir.slot_count() - self.len) / 2;
        // SAFETY: the new directory has at least `len` slots past new_front;
        // each constructed element moves out of the old slabs exactly once
        // before those slabs are freed.
        unsafe {
            for i in 0..self.len {
                ptr::write(new_dir.slot(new_front + i), ptr::read(self.slot(i)));
            }
        }
        self.dir = new_dir;
        self.front = new_front;
        Ok(())
    }

    fn grow_infallible(&mut self, requested: usize) {
        if self.grow(requested).is_err() {
            handle_alloc_error(Row::<T, C>::layout());
        }
    }

    /// Moves the live span so its first element sits at absolute slot
    /// `new_front`, walking in memmove order.
    ///
    /// # Safety
    /// `new_front + self.len` must not exceed the slot count.
    unsafe fn move_span(&mut self, new_front: usize) {
        if new_front == self.front {
            return;
        }
        if new_front < self.front {
            for i in 0..self.len {
                ptr::write(
                    self.dir.slot(new_front + i),
                    ptr::read(self.dir.slot(self.front + i)),
                );
            }
        } else {
            for i in (0..self.len).rev() {
                ptr::write(
                    self.dir.slot(new_front + i),
                    ptr::read(self.dir.slot(self.front + i)),
                );
            }
        }
        self.front = new_front;
    }

    /// Guarantees at least one free slot after the last element.
    fn make_back_slack(&mut self) {
        let tsize = self.dir.slot_count();
        if self.front + self.len < tsize {
            return;
        }
        if self.len < tsize {
            // The back is pinned against the window but capacity remains:
            // re-centering always frees at least one back slot.
            let new_front = (tsize - self.len) / 2;
            unsafe { self.move_span(new_front) };
        } else {
            self.grow_infallible(tsize + 1);
        }
    }

    /// Guarantees at least one free slot before the first element.
    fn make_front_slack(&mut self) {
        if self.front > 0 {
            return;
        }
        let tsize = self.dir.slot_count();
        if self.len < tsize && (tsize - self.len) / 2 > 0 {
            let new_front = (tsize - self.len) / 2;
            unsafe { self.move_span(new_front) };
        } else {
            // Request two extra slots so centering leaves room below the
            // front even when only one slot of slack exists.
            self.grow_infallible(tsize + 2);
        }
    }
}

// --- Traits ---

impl<T, const C: usize> Drop for BlockDeque<T, C> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T: Clone, const C: usize> Clone for BlockDeque<T, C> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.front = (copy.dir.slot_count() - self.len) / 2;
        for item in self.iter() {
            // len advances per element so a panicking Clone unwinds only the
            // constructed prefix.
            unsafe { ptr::write(copy.slot(copy.len), item.clone()) };
            copy.len += 1;
        }
        copy
    }
}

impl<T: fmt::Debug, const C: usize> fmt::Debug for BlockDeque<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const C: usize> Default for BlockDeque<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const C: usize> Index<usize> for BlockDeque<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T, const C: usize> IndexMut<usize> for BlockDeque<T, C> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T: PartialEq, const C: usize> PartialEq for BlockDeque<T, C> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const C: usize> Eq for BlockDeque<T, C> {}

impl<T: PartialOrd, const C: usize> PartialOrd for BlockDeque<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const C: usize> Ord for BlockDeque<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, const C: usize> Extend<T> for BlockDeque<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const C: usize> FromIterator<T> for BlockDeque<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, const C: usize> IntoIterator for BlockDeque<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const C: usize> IntoIterator for &'a BlockDeque<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const C: usize> IntoIterator for &'a mut BlockDeque<T, C> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, C>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// --- Tests ---
