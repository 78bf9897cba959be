// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;
use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::error::{from_kind, ErrorKind, ViewError};

/// A section (one-based, inclusive range with step) of a view's index
/// space, in the manner of a Fortran array section `a(start:end:step)`.
///
/// A `None` bound is the view's own bound: `start` defaults to the first
/// element visited (`1`, or `upper` for a negative step) and `end` to the
/// last one (`upper`, or `1` for a negative step).
///
/// ## Examples
///
/// `Section::new(None, None, 1)` is the full range of a view. It can also be
/// created with `Section::from(..)` or `s![..]`. The Fortran equivalent is
/// `a(:)`.
///
/// `Section::new(Some(a), Some(b), 2)` is every second element from `a`
/// through `b`. It can also be created with `Section::from(a..=b).step_by(2)`
/// or `s![a..=b; 2]`. The Fortran equivalent is `a(a:b:2)`.
///
/// `Section::new(None, None, -1)` is every element in reverse order. It can
/// also be created with `s![..; -1]`. The Fortran equivalent is `a(u:1:-1)`.
///
/// Half-open ranges are accepted too: `Section::from(2..5)` is `2..=4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Section {
    pub start: Option<isize>,
    pub end: Option<isize>,
    pub step: isize,
}

impl Section {
    /// Create a new `Section` with the given extents.
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    pub fn new(start: Option<isize>, end: Option<isize>, step: isize) -> Section {
        debug_assert_ne!(step, 0, "Section::new: step must be nonzero");
        Section { start, end, step }
    }

    /// Create a new `Section` with the given step size (multiplied with the
    /// previous step size).
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        debug_assert_ne!(step, 0, "Section::step_by: step must be nonzero");
        Section {
            step: self.step * step,
            ..self
        }
    }

    /// Resolve the section against a view with upper index `upper`.
    ///
    /// Returns `ZeroStride` if the step is zero and `IndexOutOfRange` if a
    /// non-empty section reaches outside `1..=upper`. An empty section
    /// (for example `3..=2`) resolves successfully whatever its bounds.
    pub fn resolve(&self, upper: usize) -> Result<ResolvedSection, ViewError> {
        let step = self.step;
        if step == 0 {
            return Err(from_kind(ErrorKind::ZeroStride));
        }
        let u = upper as isize;
        let (default_start, default_end) = if step > 0 { (1, u) } else { (u, 1) };
        let start = self.start.unwrap_or(default_start);
        let end = self.end.unwrap_or(default_end);
        // widened so that any pair of bounds gives an exact count
        let (start128, step128) = (start as i128, step as i128);
        let count = ((end as i128 - start128 + step128) / step128).max(0);
        if count > 0 {
            let in_range = |i: i128| 1 <= i && i <= upper as i128;
            let last = start128 + (count - 1) * step128;
            if !in_range(start128) || !in_range(last) {
                return Err(from_kind(ErrorKind::IndexOutOfRange));
            }
        }
        Ok(ResolvedSection {
            start,
            step,
            len: count as usize,
        })
    }

    /// Combine `outer`, applied to a view with upper index `upper`, with
    /// `inner`, applied to the result, into one explicit section of the
    /// original view.
    ///
    /// Slicing by the combined section gives the same view as slicing twice.
    pub fn compose(outer: Section, inner: Section, upper: usize) -> Result<Section, ViewError> {
        let outer = outer.resolve(upper)?;
        let inner = inner.resolve(outer.len)?;
        Ok(outer.compose(inner).into())
    }
}

/// A section with explicit start, step and element count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedSection {
    /// First index visited
    pub start: isize,
    pub step: isize,
    /// Number of elements
    pub len: usize,
}

impl ResolvedSection {
    /// The last index visited (equal to `start - step` when empty).
    #[inline]
    pub fn last(&self) -> isize {
        self.start
            .wrapping_add((self.len as isize).wrapping_sub(1).wrapping_mul(self.step))
    }

    /// Section of the original index space that visits, in order, the
    /// elements `inner` selects out of `self`.
    pub fn compose(self, inner: ResolvedSection) -> ResolvedSection {
        debug_assert!(
            inner.len == 0
                || (1..=self.len as isize).contains(&inner.start)
                    && (1..=self.len as isize).contains(&inner.last()),
            "ResolvedSection::compose: inner section {:?} outside 1..={}",
            inner,
            self.len
        );
        ResolvedSection {
            start: self.start + (inner.start - 1) * self.step,
            step: self.step * inner.step,
            len: inner.len,
        }
    }
}

impl From<ResolvedSection> for Section {
    fn from(r: ResolvedSection) -> Section {
        if r.len == 0 {
            return Section::new(Some(1), Some(0), 1);
        }
        Section::new(Some(r.start), Some(r.last()), r.step)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(i) = self.start {
            write!(f, "{}", i)?;
        }
        write!(f, "..")?;
        if let Some(i) = self.end {
            write!(f, "={}", i)?;
        }
        if self.step != 1 {
            write!(f, ";{}", self.step)?;
        }
        Ok(())
    }
}

macro_rules! impl_section_from_index_type {
    ($index:ty) => {
        impl From<$index> for Section {
            #[inline]
            fn from(i: $index) -> Section {
                Section {
                    start: Some(i as isize),
                    end: Some(i as isize),
                    step: 1,
                }
            }
        }

        impl From<RangeInclusive<$index>> for Section {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Section {
                Section {
                    start: Some(*r.start() as isize),
                    end: Some(*r.end() as isize),
                    step: 1,
                }
            }
        }

        impl From<Range<$index>> for Section {
            #[inline]
            fn from(r: Range<$index>) -> Section {
                Section {
                    start: Some(r.start as isize),
                    end: Some((r.end as isize).saturating_sub(1)),
                    step: 1,
                }
            }
        }

        impl From<RangeFrom<$index>> for Section {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Section {
                Section {
                    start: Some(r.start as isize),
                    end: None,
                    step: 1,
                }
            }
        }

        impl From<RangeTo<$index>> for Section {
            #[inline]
            fn from(r: RangeTo<$index>) -> Section {
                Section {
                    start: None,
                    end: Some((r.end as isize).saturating_sub(1)),
                    step: 1,
                }
            }
        }

        impl From<RangeToInclusive<$index>> for Section {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Section {
                Section {
                    start: None,
                    end: Some(r.end as isize),
                    step: 1,
                }
            }
        }
    };
}

impl_section_from_index_type!(isize);
impl_section_from_index_type!(usize);
impl_section_from_index_type!(i32);

impl From<RangeFull> for Section {
    #[inline]
    fn from(_: RangeFull) -> Section {
        Section {
            start: None,
            end: None,
            step: 1,
        }
    }
}

/// Section argument constructor.
///
/// `s![]` takes a range or index, with an optional step size separated from
/// the range by a semicolon, and converts it into a [`Section`].
///
/// Indices are one-based. *range* may be any of `a..=b`, `a..b`, `a..`,
/// `..b`, `..=b` or `..` with `isize`, `usize` or `i32` bounds; *step* is
/// anything that converts to `isize` with `as`, and must not be zero.
///
/// ```
/// use sectionview::{s, StridedView};
///
/// let mut data = [1, 2, 3, 4, 5, 6];
/// let v = StridedView::from_slice_mut(&mut data);
/// assert_eq!(v.slice(s![2..=6; 2]).to_vec(), vec![2, 4, 6]);
/// assert_eq!(v.slice(s![..; -1]).to_vec(), vec![6, 5, 4, 3, 2, 1]);
/// assert_eq!(v.slice(s![4..]).to_vec(), vec![4, 5, 6]);
/// ```
#[macro_export]
macro_rules! s(
    ($r:expr ; $s:expr) => {
        <$crate::Section as ::core::convert::From<_>>::from($r).step_by($s as isize)
    };
    ($r:expr) => {
        <$crate::Section as ::core::convert::From<_>>::from($r)
    };
);
