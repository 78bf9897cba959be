// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use core::cell::Cell;
use core::iter::FusedIterator;

use crate::StridedView;

/// An iterator over the cells of a view, in increasing index order.
///
/// Created with [`.cells()`](StridedView::cells).
pub struct Cells<'a, A> {
    data: &'a [Cell<A>],
    /// Storage position of the next element from the front
    pos: isize,
    stride: isize,
    remaining: usize,
}

copy_and_clone! {['a, A] Cells<'a, A>}

impl<'a, A> Iterator for Cells<'a, A> {
    type Item = &'a Cell<A>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cell = &self.data[self.pos as usize];
        self.pos = self.pos.wrapping_add(self.stride);
        self.remaining -= 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, A> DoubleEndedIterator for Cells<'a, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let pos = self.pos + self.stride * self.remaining as isize;
        Some(&self.data[pos as usize])
    }
}

impl<'a, A> ExactSizeIterator for Cells<'a, A> {}

impl<'a, A> FusedIterator for Cells<'a, A> {}

/// An iterator over the elements of a view, in increasing index order.
///
/// Created with [`.iter()`](StridedView::iter).
pub struct Iter<'a, A> {
    inner: Cells<'a, A>,
}

copy_and_clone! {['a, A] Iter<'a, A>}

impl<'a, A: Copy> Iterator for Iter<'a, A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> Option<A> {
        self.inner.next().map(Cell::get)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, A: Copy> DoubleEndedIterator for Iter<'a, A> {
    #[inline]
    fn next_back(&mut self) -> Option<A> {
        self.inner.next_back().map(Cell::get)
    }
}

impl<'a, A: Copy> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A: Copy> FusedIterator for Iter<'a, A> {}

impl<'a, A> StridedView<'a, A> {
    /// Return an iterator over the cells of the view.
    pub fn cells(&self) -> Cells<'a, A> {
        // an empty view may carry any offset; never do arithmetic with it
        let pos = if self.upper == 0 { 0 } else { self.index(1) };
        Cells {
            data: self.data,
            pos,
            stride: self.stride,
            remaining: self.upper,
        }
    }

    /// Return an iterator over the elements of the view.
    pub fn iter(&self) -> Iter<'a, A>
    where
        A: Copy,
    {
        Iter { inner: self.cells() }
    }

    /// Return a vector with the elements of the view.
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Copy,
    {
        self.iter().collect()
    }
}

impl<'a, A: Copy> IntoIterator for StridedView<'a, A> {
    type Item = A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, A: Copy> IntoIterator for &'b StridedView<'a, A> {
    type Item = A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{s, StridedView};
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn iterate_both_ends() {
        let mut data = [1, 2, 3, 4, 5, 6];
        let v = StridedView::from_slice_mut(&mut data).slice(s![..; -2]);
        assert_eq!(v.iter().collect::<Vec<_>>(), [6, 4, 2]);
        assert_eq!(v.iter().rev().collect::<Vec<_>>(), [2, 4, 6]);
        let mut it = v.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(6));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn empty_view_iterates_nothing() {
        let mut data: [u8; 0] = [];
        let v = StridedView::from_slice_mut(&mut data);
        assert_eq!(v.cells().count(), 0);
        assert!(v.to_vec().is_empty());
    }

    #[test]
    fn empty_view_with_extreme_offset() {
        let cells: [Cell<i32>; 2] = Default::default();
        for offset in [isize::MAX, isize::MIN] {
            let v = StridedView::from_shape_stride(&cells, offset, 1, 0).unwrap();
            assert_eq!(v.cells().len(), 0);
            assert_eq!(v.iter().rev().count(), 0);
        }
    }
}
