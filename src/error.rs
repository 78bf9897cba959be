// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

/// An error from a checked view operation: a misuse of an index, a shape,
/// a divisor or a storage layout.
///
/// The panicking counterparts of the checked methods (`at`, `slice`,
/// `apply`, ...) panic with the same message.
#[derive(Clone, Debug)]
pub struct ViewError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ViewError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ViewError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for a misused view.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// one-based index outside `1..=upper`
    IndexOutOfRange,
    /// source and destination hold a different number of elements
    ShapeMismatch,
    /// scalar division by zero
    DivisionByZero,
    /// dimension number other than 1
    InvalidDimension,
    /// offset and stride address elements outside the storage
    OutOfBounds,
    /// stride is zero
    ZeroStride,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ViewError {
    ViewError { repr: k }
}

impl PartialEq for ViewError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Eq for ViewError {}

#[cfg(feature = "std")]
impl std::error::Error for ViewError {}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::IndexOutOfRange => "index out of range",
            ErrorKind::ShapeMismatch => "shapes are not conformable",
            ErrorKind::DivisionByZero => "division by zero",
            ErrorKind::InvalidDimension => "dimension must be 1",
            ErrorKind::OutOfBounds => "offset and stride lead to out of bounds indexing",
            ErrorKind::ZeroStride => "stride must be nonzero",
        };
        write!(f, "ViewError/{:?}: {}", self.kind(), description)
    }
}
