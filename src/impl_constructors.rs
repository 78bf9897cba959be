// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for views.

use alloc::vec::Vec;
use core::cell::Cell;

use crate::error::{from_kind, ErrorKind, ViewError};
use crate::StridedView;

/// Check that `offset` and `stride` keep elements `1..=upper` inside a
/// storage of `len` elements.
fn can_index_storage(len: usize, offset: isize, stride: isize, upper: usize) -> Result<(), ViewError> {
    if stride == 0 {
        return Err(from_kind(ErrorKind::ZeroStride));
    }
    if upper == 0 {
        return Ok(());
    }
    let oob = || from_kind(ErrorKind::OutOfBounds);
    let upper = isize::try_from(upper).map_err(|_| oob())?;
    let first = offset.checked_add(stride).ok_or_else(oob)?;
    let last = stride
        .checked_mul(upper)
        .and_then(|s| s.checked_add(offset))
        .ok_or_else(oob)?;
    let in_storage = |pos: isize| 0 <= pos && (pos as usize) < len;
    if in_storage(first) && in_storage(last) {
        Ok(())
    } else {
        Err(oob())
    }
}

/// # Constructor Methods
impl<'a, A> StridedView<'a, A> {
    /// Create a contiguous view of all of `data`: stride 1, element `i` is
    /// `data[i - 1]`.
    ///
    /// ```
    /// use std::cell::Cell;
    /// use sectionview::StridedView;
    ///
    /// let cells = [Cell::new(1.), Cell::new(2.)];
    /// let a = StridedView::from_cells(&cells);
    /// let b = StridedView::from_cells(&cells);
    /// a.set(1, 5.);
    /// assert_eq!(b.at(1), 5.);
    /// ```
    pub fn from_cells(data: &'a [Cell<A>]) -> Self {
        StridedView::new_(data, -1, 1, data.len())
    }

    /// Create a contiguous view of all of `data`.
    ///
    /// The mutable borrow of `data` lasts as long as the view (and any view
    /// derived from it) is in use.
    pub fn from_slice_mut(data: &'a mut [A]) -> Self {
        StridedView::from_cells(Cell::from_mut(data).as_slice_of_cells())
    }

    /// Create a view of `upper` elements of `data`, element `i` being
    /// `data[offset + stride * i]`.
    ///
    /// Errors if `stride` is zero (`ZeroStride`) or if the first or last
    /// element falls outside `data` (`OutOfBounds`). An empty view
    /// (`upper == 0`) accepts any offset.
    ///
    /// ```
    /// use std::cell::Cell;
    /// use sectionview::StridedView;
    ///
    /// let mut data = [1, 2, 3];
    /// let cells = Cell::from_mut(&mut data[..]).as_slice_of_cells();
    /// // reversed: element i is data[3 - i]
    /// let r = StridedView::from_shape_stride(cells, 3, -1, 3).unwrap();
    /// assert_eq!(r.to_vec(), vec![3, 2, 1]);
    /// assert!(StridedView::from_shape_stride(cells, 0, 1, 3).is_err());
    /// ```
    pub fn from_shape_stride(
        data: &'a [Cell<A>],
        offset: isize,
        stride: isize,
        upper: usize,
    ) -> Result<Self, ViewError> {
        can_index_storage(data.len(), offset, stride, upper)?;
        Ok(StridedView::new_(data, offset, stride, upper))
    }

    /// Create a view like [`from_shape_stride`](Self::from_shape_stride),
    /// checking the configuration with debug assertions only.
    ///
    /// An inconsistent configuration stays memory safe: accessing an
    /// element outside `data` panics.
    pub fn from_shape_stride_unchecked(
        data: &'a [Cell<A>],
        offset: isize,
        stride: isize,
        upper: usize,
    ) -> Self {
        if cfg!(debug_assertions) {
            if let Err(e) = can_index_storage(data.len(), offset, stride, upper) {
                panic!(
                    "StridedView::from_shape_stride_unchecked: {} (len={}, offset={}, stride={}, upper={})",
                    e,
                    data.len(),
                    offset,
                    stride,
                    upper
                );
            }
        }
        StridedView::new_(data, offset, stride, upper)
    }

    #[inline(always)]
    pub(crate) fn new_(data: &'a [Cell<A>], offset: isize, stride: isize, upper: usize) -> Self {
        debug_assert_ne!(stride, 0, "StridedView: stride must be nonzero");
        StridedView {
            data,
            offset,
            stride,
            upper,
        }
    }
}

impl<'a, A> From<&'a [Cell<A>]> for StridedView<'a, A> {
    fn from(data: &'a [Cell<A>]) -> Self {
        StridedView::from_cells(data)
    }
}

impl<'a, A> From<&'a mut [A]> for StridedView<'a, A> {
    fn from(data: &'a mut [A]) -> Self {
        StridedView::from_slice_mut(data)
    }
}

impl<'a, A> From<&'a mut Vec<A>> for StridedView<'a, A> {
    fn from(data: &'a mut Vec<A>) -> Self {
        StridedView::from_slice_mut(data)
    }
}

impl<'a, A, const N: usize> From<&'a mut [A; N]> for StridedView<'a, A> {
    fn from(data: &'a mut [A; N]) -> Self {
        StridedView::from_slice_mut(data)
    }
}
