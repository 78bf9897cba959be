// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "sectionview"]
#![doc(html_root_url = "https://docs.rs/sectionview/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::len_without_is_empty
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `sectionview` crate provides [`StridedView`], a one-dimensional,
//! one-based, strided *section* of existing storage, in the manner of a
//! Fortran array section `a(l:u:s)`.
//!
//! - A view never owns its elements. It borrows a slice of
//!   [`Cell`](core::cell::Cell)s for the lifetime `'a`, so the storage
//!   outlives every view over it, and any number of views may alias the
//!   same storage at the same time.
//! - Logical indices run from `1` to [`upper()`](StridedView::upper);
//!   element `i` lives at storage position `offset + stride * i`. The
//!   stride may be negative (a reversed view), but never zero.
//! - Views are sliced with a [`Section`] (see the [`s!`] macro); a section
//!   of a section is itself a plain view of the original storage.
//! - Whole-view assignment and compound arithmetic (`assign`, `+=`, `*=`,
//!   ...) are *overlap-safe*: when the source aliases the destination the
//!   source is read in full before any element is written, so
//!   `a(2:n) = a(1:n-1)` shifts the data instead of smearing it.
//!
//! Misuse (an index out of range, a shape mismatch, division by zero) is
//! reported as a [`ViewError`] by the `try_*` methods and panics
//! everywhere else.
//!
//! ```
//! use sectionview::{s, StridedView};
//!
//! let mut data = [1, 2, 3, 4, 5];
//! let a = StridedView::from_slice_mut(&mut data);
//! // a(2:5) = a(1:4)
//! a.slice(s![2..=5]).assign(&a.slice(s![1..=4]));
//! assert_eq!(a.to_vec(), vec![1, 1, 2, 3, 4]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: Rust standard library (enabled by default); required for the
//!   floating point helpers (`magnitude`, `distance`).
//! - `approx`: implementations of the `approx` comparison traits for views.
//! - `serde`: serialization of a view as a sequence of its elements.

extern crate alloc;

use core::cell::Cell;

#[macro_use]
mod macro_utils;
mod section;
mod error;
mod overlap;
mod scalar;
mod source;
mod impl_constructors;
mod impl_methods;
mod impl_ops_inplace;
mod iterators;
mod numeric;
mod arraytraits;
mod arrayformat;
#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;

pub mod prelude;

pub use crate::error::{ErrorKind, ViewError};
pub use crate::impl_methods::conformable;
pub use crate::impl_ops_inplace::AssignOp;
pub use crate::iterators::{Cells, Iter};
pub use crate::numeric::dot_bool;
pub use crate::overlap::Extent;
pub use crate::scalar::{Divisor, Scalar};
pub use crate::section::{ResolvedSection, Section};
pub use crate::source::ElementSource;

/// One-based logical index type.
pub type Ix = isize;

/// A one-dimensional, one-based, strided view of borrowed storage.
///
/// The view holds the storage slice `data`, a constant `offset` and a
/// `stride`; its element `i`, for `i` in `1..=upper`, is
/// `data[offset + stride * i]`. None of the four change after construction:
/// slicing produces a new view.
///
/// `StridedView` is `Copy`. Copies are independent handles with the same
/// configuration, sharing the same storage. Elements are read and written
/// through `&self`, because the storage is a slice of `Cell`s.
///
/// ## Indexing
///
/// One-based: [`at`](Self::at), [`set`](Self::set), [`cell`](Self::cell),
/// and the checked [`get`](Self::get). Zero-based, for zero-indexed
/// callers: `view[j]` is the `Cell` of element `j + 1`, and
/// [`get0`](Self::get0)/[`set0`](Self::set0).
///
/// ## Slicing
///
/// [`slice`](Self::slice) takes a [`Section`]:
///
/// ```
/// use sectionview::{s, StridedView};
///
/// let mut data = [1, 2, 3, 4, 5, 6, 7];
/// let v = StridedView::from_slice_mut(&mut data);
/// let odd = v.slice(s![1..=7; 2]);
/// assert_eq!(odd.to_vec(), vec![1, 3, 5, 7]);
/// // a section of a section
/// let rev = odd.slice(s![..; -1]);
/// assert_eq!(rev.to_vec(), vec![7, 5, 3, 1]);
/// assert_eq!(rev.stride(), -2);
/// ```
pub struct StridedView<'a, A> {
    /// Borrowed backing storage
    data: &'a [Cell<A>],
    /// Storage position of the (virtual) element 0
    offset: isize,
    /// Step between consecutive elements; never zero
    stride: isize,
    /// Highest valid index, and the number of elements
    upper: usize,
}

copy_and_clone! {['a, A] StridedView<'a, A>}
