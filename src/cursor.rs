use crate::deque::BlockDeque;
use core::fmt;
use core::ptr;

/// A read-only cursor over a `BlockDeque`.
///
/// A cursor is a pure computed position: a canonical logical index resolved
/// against the owning deque at dereference time. Index `len()` is the end
/// sentinel and never dereferences. Because positions are canonical, two
/// cursors that reach the same slot by different walks compare equal.
pub struct Cursor<'a, T, const C: usize> {
    at: usize,
    deque: &'a BlockDeque<T, C>,
}

/// A cursor over a `BlockDeque` with mutable access to its elements.
pub struct CursorMut<'a, T, const C: usize> {
    at: usize,
    deque: &'a mut BlockDeque<T, C>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a, const C: usize> $CURSOR<'a, T, C> {
            /// The cursor's logical index; equals `len()` at the end
            /// sentinel.
            pub fn index(&self) -> usize {
                self.at
            }

            pub fn is_end(&self) -> bool {
                self.at == self.deque.len()
            }

            /// Steps one position toward the back. Returns `false` (and does
            /// not move) when already at the end sentinel.
            pub fn move_next(&mut self) -> bool {
                if self.at < self.deque.len() {
                    self.at += 1;
                    return true;
                }
                false
            }

            /// Steps one position toward the front. Returns `false` (and
            /// does not move) when already at the first element.
            pub fn move_prev(&mut self) -> bool {
                if self.at > 0 {
                    self.at -= 1;
                    return true;
                }
                false
            }

            /// Advances by `d` positions, crossing row boundaries as needed;
            /// landing exactly on the end sentinel is allowed. Returns
            /// `false` (and does not move) if the target is past the end.
            pub fn seek_forward(&mut self, d: usize) -> bool {
                if self.at + d <= self.deque.len() {
                    self.at += d;
                    return true;
                }
                false
            }

            /// Retreats by `d` positions. Returns `false` (and does not
            /// move) if the target is before the first element.
            pub fn seek_backward(&mut self, d: usize) -> bool {
                if d <= self.at {
                    self.at -= d;
                    return true;
                }
                false
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T, const C: usize> Cursor<'a, T, C> {
    pub(crate) fn new(deque: &'a BlockDeque<T, C>, at: usize) -> Self {
        Self { at, deque }
    }

    /// The element under the cursor, or `None` at the end sentinel.
    pub fn current(&self) -> Option<&'a T> {
        self.deque.get(self.at)
    }
}

impl<'a, T, const C: usize> CursorMut<'a, T, C> {
    pub(crate) fn new(deque: &'a mut BlockDeque<T, C>, at: usize) -> Self {
        Self { at, deque }
    }

    /// The element under the cursor, or `None` at the end sentinel.
    pub fn current(&self) -> Option<&T> {
        self.deque.get(self.at)
    }

    /// Mutable access to the element under the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.deque.get_mut(self.at)
    }
}

impl<T, const C: usize> Clone for Cursor<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const C: usize> Copy for Cursor<'_, T, C> {}

impl<T, const C: usize> PartialEq for Cursor<'_, T, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.deque, other.deque) && self.at == other.at
    }
}

impl<T, const C: usize> Eq for Cursor<'_, T, C> {}

impl<T, const C: usize> fmt::Debug for Cursor<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("index", &self.at).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walk_matches_iteration() {
        let d: BlockDeque<u32, 4> = (0..11).collect();
        let mut cursor = d.cursor(0);
        let mut seen = Vec::new();
        while let Some(&value) = cursor.current() {
            seen.push(value);
            cursor.move_next();
        }
        assert!(cursor.is_end());
        assert_eq!(seen, d.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn test_cursor_boundaries() {
        let d: BlockDeque<u32, 4> = (0..5).collect();
        let mut cursor = d.cursor(0);
        assert!(!cursor.move_prev());
        assert_eq!(cursor.index(), 0);

        let mut end = d.cursor(d.len());
        assert!(end.is_end());
        assert_eq!(end.current(), None);
        assert!(!end.move_next());
        assert!(end.move_prev());
        assert_eq!(end.current(), Some(&4));
    }

    #[test]
    fn test_cursor_seek_crossing_rows() {
        let d: BlockDeque<u32, 4> = (0..11).collect();
        let mut cursor = d.cursor(0);
        // Jump from row 0 into row 2.
        assert!(cursor.seek_forward(9));
        assert_eq!(cursor.current(), Some(&9));
        assert!(cursor.seek_backward(7));
        assert_eq!(cursor.current(), Some(&2));

        // Landing exactly on the end sentinel is allowed; overshooting not.
        assert!(cursor.seek_forward(9));
        assert!(cursor.is_end());
        assert!(!cursor.seek_forward(1));
        assert!(!cursor.seek_backward(12));
        assert_eq!(cursor.index(), d.len());
    }

    #[test]
    fn test_cursor_equality_is_positional() {
        let d: BlockDeque<u32, 4> = (0..8).collect();
        // Two different walks to index 5.
        let mut a = d.cursor(0);
        a.seek_forward(7);
        a.seek_backward(2);
        let mut b = d.cursor(d.len());
        b.move_prev();
        b.move_prev();
        b.move_prev();
        assert_eq!(a, b);

        let other: BlockDeque<u32, 4> = (0..8).collect();
        assert_ne!(d.cursor(5), other.cursor(5));
    }

    #[test]
    fn test_cursor_mut_edits_in_place() {
        let mut d: BlockDeque<u32, 4> = (0..6).collect();
        let mut cursor = d.cursor_mut(0);
        while !cursor.is_end() {
            if let Some(value) = cursor.current_mut() {
                *value *= 10;
            }
            cursor.move_next();
        }
        assert_eq!(
            d.iter().copied().collect::<Vec<_>>(),
            vec![0, 10, 20, 30, 40, 50]
        );
    }
}
