// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::cell::Cell;
use core::ops::RangeInclusive;

use crate::error::{from_kind, ErrorKind, ViewError};
use crate::overlap::{self, Extent};
use crate::section::{ResolvedSection, Section};
use crate::source::ElementSource;
use crate::{Ix, StridedView};

/// # Methods For All Views
impl<'a, A> StridedView<'a, A> {
    /// Return the number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.upper
    }

    /// Return whether the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.upper == 0
    }

    /// Lower index, always `1`.
    #[inline]
    pub fn lower(&self) -> Ix {
        1
    }

    /// Upper index; equal to the number of elements.
    #[inline]
    pub fn upper(&self) -> Ix {
        self.upper as Ix
    }

    /// The valid indices, `1..=upper`.
    #[inline]
    pub fn range(&self) -> RangeInclusive<Ix> {
        1..=self.upper()
    }

    /// Step between consecutive elements in the storage.
    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Storage position of the (virtual) element `0`.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Return `true` if consecutive elements are adjacent in the storage
    /// (stride `1`).
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.stride == 1
    }

    /// The distance from the index origin to the first element: `1`.
    #[inline]
    pub fn shift(&self) -> isize {
        1
    }

    /// The storage the view borrows.
    pub fn storage(&self) -> &'a [Cell<A>] {
        self.data
    }

    /// Storage position of element `i`: `offset + stride * i`.
    ///
    /// `i` is not checked; a position computed from an index outside the
    /// view may lie outside the storage.
    #[inline]
    pub fn index(&self, i: Ix) -> isize {
        self.offset + self.stride * i
    }

    /// Return `true` if `i` is a valid index, `1 <= i <= upper`.
    #[inline]
    pub fn contains(&self, i: Ix) -> bool {
        1 <= i && i <= self.upper()
    }

    /// Number of elements along dimension `d`.
    ///
    /// **Panics** if `d` is not 1.
    #[track_caller]
    pub fn len_of(&self, d: usize) -> usize {
        or_panic!(self.try_len_of(d))
    }

    /// Number of elements along dimension `d`, or `InvalidDimension` if
    /// `d` is not 1.
    pub fn try_len_of(&self, d: usize) -> Result<usize, ViewError> {
        match d {
            1 => Ok(self.upper),
            _ => Err(from_kind(ErrorKind::InvalidDimension)),
        }
    }

    /// Upper index of dimension `d`.
    ///
    /// **Panics** if `d` is not 1.
    #[track_caller]
    pub fn upper_of(&self, d: usize) -> Ix {
        self.len_of(d) as Ix
    }

    /// Index range of dimension `d`.
    ///
    /// **Panics** if `d` is not 1.
    #[track_caller]
    pub fn range_of(&self, d: usize) -> RangeInclusive<Ix> {
        1..=self.upper_of(d)
    }

    /// Return `true` if `d` is a dimension of the view, i.e. `d == 1`.
    #[inline]
    pub fn is_dimension(&self, d: usize) -> bool {
        d == 1
    }

    /// Return the cell of element `i`.
    ///
    /// **Panics** if `i` is not in `1..=upper`.
    #[inline]
    #[track_caller]
    pub fn cell(&self, i: Ix) -> &'a Cell<A> {
        bounds_check!(self, i);
        &self.data[self.index(i) as usize]
    }

    /// Return the cell of element `i`, or `None` if `i` is out of range.
    pub fn get_cell(&self, i: Ix) -> Option<&'a Cell<A>> {
        if self.contains(i) {
            self.data.get(self.index(i) as usize)
        } else {
            None
        }
    }

    /// Return the cell of the element at zero-based position `j`, that is
    /// of element `j + 1`.
    ///
    /// **Panics** if `j` is not less than `len()`.
    #[inline]
    #[track_caller]
    pub fn cell0(&self, j: usize) -> &'a Cell<A> {
        if j >= self.upper {
            panic!(
                "StridedView: zero-based index {} out of range for length {}",
                j, self.upper
            );
        }
        &self.data[self.index(j as Ix + 1) as usize]
    }

    /// Return the memory extent of the view, or `None` if it is empty.
    pub fn extent(&self) -> Option<Extent> {
        overlap::strided_extent(self.data, self.offset, self.stride, self.upper)
    }

    /// Return `true` if the view and `other` may touch the same memory:
    /// their extents intersect.
    ///
    /// Sources without an extent (plain slices, arrays, vectors) and empty
    /// views never overlap.
    pub fn overlaps<S>(&self, other: &S) -> bool
    where
        A: Copy,
        S: ElementSource<A> + ?Sized,
    {
        match (self.extent(), other.extent()) {
            (Some(a), Some(b)) => a.intersects(&b),
            _ => false,
        }
    }

    /// Return `true` if the view and `other` have the same number of
    /// elements, and can be combined elementwise.
    pub fn conformable<B, S>(&self, other: &S) -> bool
    where
        B: Copy,
        S: ElementSource<B> + ?Sized,
    {
        self.upper == other.len()
    }

    /// Same as [`conformable`](Self::conformable).
    pub fn equal_dimensions<B, S>(&self, other: &S) -> bool
    where
        B: Copy,
        S: ElementSource<B> + ?Sized,
    {
        self.conformable(other)
    }

    /// Return a view of the elements selected by `section`.
    ///
    /// The new view addresses the same storage: its stride is
    /// `stride * step` and element `j` of it is element
    /// `start + (j - 1) * step` of `self`.
    ///
    /// **Panics** if a non-empty section reaches outside `1..=upper`, or if
    /// its step is zero.
    ///
    /// ```
    /// use sectionview::{s, StridedView};
    ///
    /// let mut data = [10, 20, 30, 40, 50];
    /// let v = StridedView::from_slice_mut(&mut data);
    /// let w = v.slice(s![2..=5; 3]);
    /// assert_eq!(w.to_vec(), vec![20, 50]);
    /// w.set(2, 0);
    /// assert_eq!(v.at(5), 0);
    /// ```
    #[track_caller]
    pub fn slice<I>(&self, section: I) -> StridedView<'a, A>
    where
        I: Into<Section>,
    {
        or_panic!(self.try_slice(section))
    }

    /// Return a view of the elements selected by `section`, or
    /// `IndexOutOfRange`/`ZeroStride` if the section does not fit.
    pub fn try_slice<I>(&self, section: I) -> Result<StridedView<'a, A>, ViewError>
    where
        I: Into<Section>,
    {
        let section = section.into().resolve(self.upper)?;
        Ok(self.slice_resolved(section))
    }

    /// Return a view of the elements selected by a section resolved
    /// against this view; the section is only checked with debug assertions.
    pub(crate) fn slice_resolved(&self, r: ResolvedSection) -> StridedView<'a, A> {
        debug_assert!(
            r.len == 0 || self.contains(r.start) && self.contains(r.last()),
            "StridedView::slice_resolved: {:?} outside 1..={}",
            r,
            self.upper
        );
        let offset = if r.len == 0 {
            self.offset
        } else {
            self.offset + self.stride * (r.start - r.step)
        };
        StridedView::new_(self.data, offset, self.stride * r.step, r.len)
    }
}

/// # Element Access
impl<'a, A: Copy> StridedView<'a, A> {
    /// Return element `i`.
    ///
    /// **Panics** if `i` is not in `1..=upper`.
    #[inline]
    #[track_caller]
    pub fn at(&self, i: Ix) -> A {
        self.cell(i).get()
    }

    /// Set element `i` to `value`.
    ///
    /// **Panics** if `i` is not in `1..=upper`.
    #[inline]
    #[track_caller]
    pub fn set(&self, i: Ix, value: A) {
        self.cell(i).set(value)
    }

    /// Return element `i`, or `None` if `i` is out of range.
    pub fn get(&self, i: Ix) -> Option<A> {
        self.get_cell(i).map(Cell::get)
    }

    /// Set element `i` to `value`, or return `IndexOutOfRange`.
    pub fn try_set(&self, i: Ix, value: A) -> Result<(), ViewError> {
        match self.get_cell(i) {
            Some(cell) => {
                cell.set(value);
                Ok(())
            }
            None => Err(from_kind(ErrorKind::IndexOutOfRange)),
        }
    }

    /// Return the element at zero-based position `j`.
    ///
    /// **Panics** if `j` is not less than `len()`.
    #[inline]
    #[track_caller]
    pub fn get0(&self, j: usize) -> A {
        self.cell0(j).get()
    }

    /// Set the element at zero-based position `j` to `value`.
    ///
    /// **Panics** if `j` is not less than `len()`.
    #[inline]
    #[track_caller]
    pub fn set0(&self, j: usize, value: A) {
        self.cell0(j).set(value)
    }

    /// Return the first element, or `None` if the view is empty.
    pub fn first(&self) -> Option<A> {
        self.get(1)
    }

    /// Return the last element, or `None` if the view is empty.
    pub fn last(&self) -> Option<A> {
        self.get(self.upper())
    }

    /// Swap elements `i` and `j`.
    ///
    /// **Panics** if either index is out of range.
    #[track_caller]
    pub fn swap(&self, i: Ix, j: Ix) {
        self.cell(i).swap(self.cell(j))
    }
}

/// Return `true` if `a` and `b` have the same number of elements.
pub fn conformable<A, B>(a: &StridedView<'_, A>, b: &StridedView<'_, B>) -> bool {
    a.len() == b.len()
}
