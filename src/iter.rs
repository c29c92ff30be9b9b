use crate::deque::BlockDeque;
use crate::row::Row;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Immutable iterator over a `BlockDeque`, crossing row boundaries
/// transparently.
///
/// Positions are absolute slot indices into the row directory; `head == tail`
/// is the exhausted state.
pub struct Iter<'a, T, const C: usize> {
    rows: &'a [Row<T, C>],
    head: usize,
    tail: usize,
}

impl<'a, T, const C: usize> Iter<'a, T, C> {
    pub(crate) fn new(rows: &'a [Row<T, C>], head: usize, tail: usize) -> Self {
        debug_assert!(head <= tail && tail <= rows.len() * C);
        Self { rows, head, tail }
    }
}

impl<'a, T, const C: usize> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let slot = self.rows[self.head / C].slot(self.head % C);
        self.head += 1;
        // SAFETY: slots in [head, tail) hold constructed elements for the
        // lifetime of the borrow.
        Some(unsafe { &*slot })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T, const C: usize> DoubleEndedIterator for Iter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        let slot = self.rows[self.tail / C].slot(self.tail % C);
        // SAFETY: as in `next`.
        Some(unsafe { &*slot })
    }
}

impl<T, const C: usize> ExactSizeIterator for Iter<'_, T, C> {}
impl<T, const C: usize> FusedIterator for Iter<'_, T, C> {}

impl<T, const C: usize> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            head: self.head,
            tail: self.tail,
        }
    }
}

/// Mutable iterator over a `BlockDeque`.
pub struct IterMut<'a, T, const C: usize> {
    rows: &'a [Row<T, C>],
    head: usize,
    tail: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, const C: usize> IterMut<'a, T, C> {
    pub(crate) fn new(rows: &'a [Row<T, C>], head: usize, tail: usize) -> Self {
        debug_assert!(head <= tail && tail <= rows.len() * C);
        Self {
            rows,
            head,
            tail,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, const C: usize> Iterator for IterMut<'a, T, C> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let slot = self.rows[self.head / C].slot(self.head % C);
        self.head += 1;
        // SAFETY: slots in [head, tail) hold constructed elements, the range
        // only shrinks, and each slot is yielded at most once, so the
        // exclusive borrows never alias.
        Some(unsafe { &mut *slot })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T, const C: usize> DoubleEndedIterator for IterMut<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        let slot = self.rows[self.tail / C].slot(self.tail % C);
        // SAFETY: as in `next`.
        Some(unsafe { &mut *slot })
    }
}

impl<T, const C: usize> ExactSizeIterator for IterMut<'_, T, C> {}
impl<T, const C: usize> FusedIterator for IterMut<'_, T, C> {}

/// Consuming iterator for `BlockDeque`.
pub struct IntoIter<T, const C: usize> {
    deque: BlockDeque<T, C>,
}

impl<T, const C: usize> IntoIter<T, C> {
    pub(crate) fn new(deque: BlockDeque<T, C>) -> Self {
        Self { deque }
    }
}

impl<T, const C: usize> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T, const C: usize> DoubleEndedIterator for IntoIter<T, C> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T, const C: usize> ExactSizeIterator for IntoIter<T, C> {}
impl<T, const C: usize> FusedIterator for IntoIter<T, C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_order_across_rows() {
        let d: BlockDeque<u32, 4> = (0..13).collect();
        let forward: Vec<u32> = d.iter().copied().collect();
        assert_eq!(forward, (0..13).collect::<Vec<_>>());

        let backward: Vec<u32> = d.iter().rev().copied().collect();
        assert_eq!(backward, (0..13).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_count_matches_len() {
        let mut d: BlockDeque<u32, 4> = BlockDeque::new();
        assert_eq!(d.iter().count(), 0);
        for i in 0..50 {
            if i % 3 == 0 {
                d.push_front(i);
            } else {
                d.push_back(i);
            }
            assert_eq!(d.iter().count(), d.len());
            assert_eq!(d.iter().len(), d.len());
        }
    }

    #[test]
    fn test_iter_mixed_end_consumption() {
        let d: BlockDeque<u32, 4> = (0..6).collect();
        let mut it = d.iter();
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        // Fused: stays exhausted.
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_iter_mut_writes_visible() {
        let mut d: BlockDeque<u32, 3> = (0..10).collect();
        for (i, item) in d.iter_mut().enumerate() {
            *item += i as u32;
        }
        for i in 0..10 {
            assert_eq!(d[i], 2 * i as u32);
        }

        // Reverse traversal sees the same slots.
        let doubled: Vec<u32> = d.iter_mut().rev().map(|x| *x).collect();
        assert_eq!(doubled, (0..10).map(|i| 2 * i).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_into_iter_both_directions() {
        let d: BlockDeque<u32, 4> = (0..7).collect();
        let mut it = d.into_iter();
        assert_eq!(it.size_hint(), (7, Some(7)));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(6));
        let rest: Vec<u32> = it.collect();
        assert_eq!(rest, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iter_clone_is_independent() {
        let d: BlockDeque<u32, 4> = (0..5).collect();
        let mut a = d.iter();
        a.next();
        let mut b = a.clone();
        assert_eq!(a.next(), b.next());
        b.next();
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }
}
