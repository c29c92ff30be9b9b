use crate::Error;
use core::ptr::NonNull;
use std::alloc::{alloc, dealloc, Layout};

/// A fixed-capacity contiguous slab of `C` element slots.
///
/// # Overview
/// A `Row` owns raw storage only. It never tracks which slots hold live
/// elements and never runs element destructors; the deque constructs and
/// destroys elements individually, and dropping a `Row` frees the slab.
///
/// # Invariants
/// * `ptr` addresses `C` slots of `T` (dangling for zero-sized `T`).
/// * Slots are uninitialized unless the owning deque says otherwise.
pub(crate) struct Row<T, const C: usize> {
    ptr: NonNull<T>,
}

impl<T, const C: usize> Row<T, C> {
    /// The layout of one row's slab.
    pub(crate) fn layout() -> Layout {
        const {
            assert!(C > 0, "row capacity C must be non-zero");
        }
        match Layout::array::<T>(C) {
            Ok(layout) => layout,
            Err(_) => panic!("row capacity overflows a memory layout"),
        }
    }

    /// Allocates one row of `C` uninitialized slots.
    pub(crate) fn try_new() -> Result<Self, Error> {
        let layout = Self::layout();
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
            });
        }
        // SAFETY: the layout has non-zero size.
        let raw = unsafe { alloc(layout) } as *mut T;
        match NonNull::new(raw) {
            Some(ptr) => Ok(Self { ptr }),
            None => Err(Error::AllocationFailure),
        }
    }

    /// Returns a raw pointer to the slot at `offset`.
    ///
    /// The slot may be uninitialized; the caller decides whether reading or
    /// writing through the pointer is sound.
    #[inline]
    pub(crate) fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(offset < C);
        // SAFETY: offset < C keeps the pointer inside this row's slab.
        unsafe { self.ptr.as_ptr().add(offset) }
    }
}

impl<T, const C: usize> Drop for Row<T, C> {
    fn drop(&mut self) {
        let layout = Self::layout();
        if layout.size() != 0 {
            // SAFETY: ptr was returned by `alloc` with this same layout.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

// Rows own their storage like a Box<[T]> would.
unsafe impl<T: Send, const C: usize> Send for Row<T, C> {}
unsafe impl<T: Sync, const C: usize> Sync for Row<T, C> {}

/// The row directory: an owned, growable sequence of rows.
///
/// # Overview
/// The directory defines the addressable window of `rows * C` slots and owns
/// the bulk (de)allocation of rows. Absolute slot indices resolve to a row
/// and an offset by division and modulo with `C`.
pub(crate) struct Directory<T, const C: usize> {
    rows: Vec<Row<T, C>>,
}

impl<T, const C: usize> Directory<T, C> {
    /// An empty directory owning no rows.
    pub(crate) const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Allocates a directory of exactly `n` rows.
    ///
    /// All rows are allocated before the directory is returned; if any single
    /// row allocation fails, the rows already allocated are freed and the
    /// error propagates with nothing else modified.
    pub(crate) fn try_with_rows(n: usize) -> Result<Self, Error> {
        let mut rows = Vec::with_capacity(n);
        for _ in 0..n {
            rows.push(Row::try_new()?);
        }
        Ok(Self { rows })
    }

    /// Total number of element slots across all rows.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.rows.len() * C
    }

    #[inline]
    pub(crate) fn rows(&self) -> &[Row<T, C>] {
        &self.rows
    }

    /// Resolves an absolute slot index to a raw element pointer.
    #[inline]
    pub(crate) fn slot(&self, abs: usize) -> *mut T {
        self.rows[abs / C].slot(abs % C)
    }

    /// Number of rows needed to hold `slots` element slots.
    #[inline]
    pub(crate) fn rows_for(slots: usize) -> usize {
        slots.div_ceil(C)
    }

    /// Growth sizing in slots: double when the request fits within twice the
    /// current element count, otherwise service the request exactly. This
    /// bounds total reallocation work over n insertions to O(n) while still
    /// honoring large one-shot requests.
    #[inline]
    pub(crate) fn target_slots(requested: usize, len: usize) -> usize {
        if requested <= 2 * len {
            2 * len
        } else {
            requested
        }
    }
}
