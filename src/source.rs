// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use crate::overlap::Extent;
use crate::StridedView;

/// A sized sequence of elements that can be the right hand side of a view
/// assignment.
///
/// Implemented for views, slices, arrays and vectors.
///
/// Plain `[A]`, `[A; N]` and `Vec<A>` sources report no extent: they cannot
/// share memory with a view, since a view's storage is borrowed as cells
/// for as long as the view lives. Sources that can alias a view must
/// report their [`Extent`] so that assignment can take the overlap-safe
/// path. To assign from storage that is already a slice of cells, wrap it
/// with [`StridedView::from_cells`].
pub trait ElementSource<A: Copy> {
    /// Number of elements
    fn len(&self) -> usize;

    /// Element at zero-based position `j`.
    ///
    /// **Panics** if `j` is not less than `len()`.
    fn elem(&self, j: usize) -> A;

    /// Addresses the source reads from, if it may alias a view.
    fn extent(&self) -> Option<Extent> {
        None
    }
}

impl<'a, A: Copy> ElementSource<A> for StridedView<'a, A> {
    #[inline]
    fn len(&self) -> usize {
        StridedView::len(self)
    }

    #[inline]
    fn elem(&self, j: usize) -> A {
        self.get0(j)
    }

    fn extent(&self) -> Option<Extent> {
        StridedView::extent(self)
    }
}

impl<A: Copy> ElementSource<A> for [A] {
    #[inline]
    fn len(&self) -> usize {
        <[A]>::len(self)
    }

    #[inline]
    fn elem(&self, j: usize) -> A {
        self[j]
    }
}

impl<A: Copy, const N: usize> ElementSource<A> for [A; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn elem(&self, j: usize) -> A {
        self[j]
    }
}

impl<A: Copy> ElementSource<A> for Vec<A> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn elem(&self, j: usize) -> A {
        self[j]
    }
}

impl<'s, A: Copy, S> ElementSource<A> for &'s S
where
    S: ElementSource<A> + ?Sized,
{
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn elem(&self, j: usize) -> A {
        (**self).elem(j)
    }

    fn extent(&self) -> Option<Extent> {
        (**self).extent()
    }
}
