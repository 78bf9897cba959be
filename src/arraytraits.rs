// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use core::cell::Cell;
use core::hash;
use core::ops::Index;

use crate::StridedView;

/// Access the cell of the element at zero-based position `j`, that is of
/// element `j + 1`.
///
/// **Panics** if `j` is not less than `len()`.
impl<'a, A> Index<usize> for StridedView<'a, A> {
    type Output = Cell<A>;

    #[inline]
    #[track_caller]
    fn index(&self, j: usize) -> &Cell<A> {
        self.cell0(j)
    }
}

/// Return `true` if the views have the same length and equal elements.
/// Strides and offsets are not compared.
impl<'a, 'b, A, B> PartialEq<StridedView<'b, B>> for StridedView<'a, A>
where
    A: Copy + PartialEq<B>,
    B: Copy,
{
    fn eq(&self, rhs: &StridedView<'b, B>) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, A: Copy + Eq> Eq for StridedView<'a, A> {}

impl<'a, A, B> PartialEq<[B]> for StridedView<'a, A>
where
    A: Copy + PartialEq<B>,
{
    fn eq(&self, rhs: &[B]) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs).all(|(a, b)| a == *b)
    }
}

impl<'a, A, B, const N: usize> PartialEq<[B; N]> for StridedView<'a, A>
where
    A: Copy + PartialEq<B>,
{
    fn eq(&self, rhs: &[B; N]) -> bool {
        *self == rhs[..]
    }
}

impl<'a, A, B> PartialEq<Vec<B>> for StridedView<'a, A>
where
    A: Copy + PartialEq<B>,
{
    fn eq(&self, rhs: &Vec<B>) -> bool {
        *self == rhs[..]
    }
}

impl<'a, A: Copy + hash::Hash> hash::Hash for StridedView<'a, A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}
