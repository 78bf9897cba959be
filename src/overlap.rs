// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Memory extents and the overlap test behind overlap-safe assignment.

use core::cell::Cell;
use core::mem::size_of;

/// The closed interval of addresses `[begin, end]` holding the first and
/// the last element a non-empty view may touch.
///
/// `begin` is the lowest element address and `end` the highest, whatever
/// the sign of the stride.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    begin: usize,
    end: usize,
}

impl Extent {
    /// Create an extent from two element addresses, in any order.
    pub fn new(a: usize, b: usize) -> Self {
        Extent {
            begin: a.min(b),
            end: a.max(b),
        }
    }

    /// Lowest address
    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Highest address
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Return `true` if the two closed intervals share an address.
    #[inline]
    pub fn intersects(&self, other: &Extent) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }
}

/// Address of storage position `pos` of `data`; not dereferenced.
#[inline]
fn address_of<A>(data: &[Cell<A>], pos: isize) -> usize {
    (data.as_ptr() as usize).wrapping_add((pos as usize).wrapping_mul(size_of::<A>()))
}

/// Extent of the elements `offset + stride * i`, `i` in `1..=upper`.
///
/// An empty selection touches nothing and has no extent.
pub(crate) fn strided_extent<A>(
    data: &[Cell<A>],
    offset: isize,
    stride: isize,
    upper: usize,
) -> Option<Extent> {
    if upper == 0 {
        return None;
    }
    let first = offset.wrapping_add(stride);
    let last = offset.wrapping_add(stride.wrapping_mul(upper as isize));
    Some(Extent::new(address_of(data, first), address_of(data, last)))
}
