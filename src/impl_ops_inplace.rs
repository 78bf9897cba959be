// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use log::trace;
use num_traits::Zero;

use crate::error::{from_kind, ErrorKind, ViewError};
use crate::scalar::Scalar;
use crate::source::ElementSource;
use crate::StridedView;

/// An elementwise assignment: `dst = src` or `dst @= src`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssignOp {
    /// `dst = src`
    Assign,
    /// `dst += src`
    Add,
    /// `dst -= src`
    Sub,
    /// `dst *= src`
    Mul,
    /// `dst /= src`
    Div,
}

impl AssignOp {
    /// Return the new value of `dst`.
    #[inline]
    pub fn combine<A: Scalar>(self, dst: A, src: A) -> A {
        match self {
            AssignOp::Assign => src,
            AssignOp::Add => dst + src,
            AssignOp::Sub => dst - src,
            AssignOp::Mul => dst * src,
            AssignOp::Div => dst / src,
        }
    }
}

/// # Assignment
///
/// Every assignment from a source first checks that the source has as many
/// elements as the view; nothing is written otherwise.
///
/// When the source may share memory with the view (see
/// [`overlaps`](StridedView::overlaps)), the source is first copied to a
/// temporary buffer, so that the result is the same as if the whole source
/// had been read before any element of the view was written. Otherwise
/// elements are combined directly, in increasing index order.
impl<'a, A: Copy> StridedView<'a, A> {
    /// Set each element `x` of the view to `f(x, y)`, where `y` is the
    /// corresponding element of `src`, or return `ShapeMismatch`.
    pub fn try_zip_assign_with<S, F>(&self, src: &S, mut f: F) -> Result<(), ViewError>
    where
        S: ElementSource<A> + ?Sized,
        F: FnMut(A, A) -> A,
    {
        if !self.conformable(src) {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        if self.overlaps(src) {
            trace!(
                "StridedView: buffering {} source elements for overlap-safe assignment",
                self.len()
            );
            let mut buffer = Vec::with_capacity(self.len());
            buffer.extend((0..self.len()).map(|j| src.elem(j)));
            for (cell, y) in self.cells().zip(buffer) {
                cell.set(f(cell.get(), y));
            }
        } else {
            for (j, cell) in self.cells().enumerate() {
                cell.set(f(cell.get(), src.elem(j)));
            }
        }
        Ok(())
    }

    /// Set each element `x` of the view to `f(x, y)`, where `y` is the
    /// corresponding element of `src`.
    ///
    /// **Panics** if `src` has a different number of elements.
    #[track_caller]
    pub fn zip_assign_with<S, F>(&self, src: &S, f: F)
    where
        S: ElementSource<A> + ?Sized,
        F: FnMut(A, A) -> A,
    {
        or_panic!(self.try_zip_assign_with(src, f))
    }

    /// Copy the elements of `src` into the view, or return `ShapeMismatch`.
    pub fn try_assign<S>(&self, src: &S) -> Result<(), ViewError>
    where
        S: ElementSource<A> + ?Sized,
    {
        self.try_zip_assign_with(src, |_, y| y)
    }

    /// Copy the elements of `src` into the view.
    ///
    /// Assigning a view to itself, or to any view of the same storage,
    /// is safe:
    ///
    /// ```
    /// use sectionview::{s, StridedView};
    ///
    /// let mut data = [1, 2, 3, 4, 5];
    /// let a = StridedView::from_slice_mut(&mut data);
    /// a.assign(&a.slice(s![..; -1]));
    /// assert_eq!(a.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    ///
    /// **Panics** if `src` has a different number of elements.
    #[track_caller]
    pub fn assign<S>(&self, src: &S)
    where
        S: ElementSource<A> + ?Sized,
    {
        or_panic!(self.try_assign(src))
    }

    /// Set every element to `x`.
    pub fn fill(&self, x: A) {
        for cell in self.cells() {
            cell.set(x);
        }
    }

    /// Set every element `x` to `f(x)`, in increasing index order.
    pub fn map_inplace<F>(&self, mut f: F)
    where
        F: FnMut(A) -> A,
    {
        for cell in self.cells() {
            cell.set(f(cell.get()));
        }
    }
}

/// # Arithmetic Assignment
impl<'a, A: Scalar> StridedView<'a, A> {
    /// Combine `src` into the view with `op`, or return `ShapeMismatch`.
    ///
    /// Division by a zero element of `src` follows the element type's own
    /// arithmetic.
    pub fn try_apply<S>(&self, op: AssignOp, src: &S) -> Result<(), ViewError>
    where
        S: ElementSource<A> + ?Sized,
    {
        self.try_zip_assign_with(src, |x, y| op.combine(x, y))
    }

    /// Combine `src` into the view with `op`.
    ///
    /// **Panics** if `src` has a different number of elements.
    #[track_caller]
    pub fn apply<S>(&self, op: AssignOp, src: &S)
    where
        S: ElementSource<A> + ?Sized,
    {
        or_panic!(self.try_apply(op, src))
    }

    /// Combine the scalar `x` into every element with `op`, or return
    /// `DivisionByZero` for a division by zero.
    ///
    /// Division goes through [`Scalar::divisor`]: floating point elements
    /// are multiplied by the reciprocal of `x`.
    pub fn try_apply_scalar(&self, op: AssignOp, x: A) -> Result<(), ViewError> {
        match op {
            AssignOp::Div => {
                if x.is_zero() {
                    return Err(from_kind(ErrorKind::DivisionByZero));
                }
                let divisor = A::divisor(x);
                self.map_inplace(|e| divisor.divide(e));
            }
            _ => self.map_inplace(|e| op.combine(e, x)),
        }
        Ok(())
    }

    /// Combine the scalar `x` into every element with `op`.
    ///
    /// **Panics** on division by zero.
    #[track_caller]
    pub fn apply_scalar(&self, op: AssignOp, x: A) {
        or_panic!(self.try_apply_scalar(op, x))
    }

    /// `self += src` elementwise.
    ///
    /// **Panics** if `src` has a different number of elements.
    #[track_caller]
    pub fn add_assign_from<S>(&self, src: &S)
    where
        S: ElementSource<A> + ?Sized,
    {
        self.apply(AssignOp::Add, src)
    }

    /// `self -= src` elementwise.
    ///
    /// **Panics** if `src` has a different number of elements.
    #[track_caller]
    pub fn sub_assign_from<S>(&self, src: &S)
    where
        S: ElementSource<A> + ?Sized,
    {
        self.apply(AssignOp::Sub, src)
    }

    /// `self *= src` elementwise.
    ///
    /// **Panics** if `src` has a different number of elements.
    #[track_caller]
    pub fn mul_assign_from<S>(&self, src: &S)
    where
        S: ElementSource<A> + ?Sized,
    {
        self.apply(AssignOp::Mul, src)
    }

    /// `self /= src` elementwise.
    ///
    /// **Panics** if `src` has a different number of elements.
    #[track_caller]
    pub fn div_assign_from<S>(&self, src: &S)
    where
        S: ElementSource<A> + ?Sized,
    {
        self.apply(AssignOp::Div, src)
    }
}

macro_rules! impl_assign_op {
    ($trt:ident, $method:ident, $op:expr, $doc:expr) => {
        /// Perform elementwise
        #[doc=$doc]
        /// between `self` and `rhs`, *in place*, overlap-safe.
        ///
        /// **Panics** if their lengths differ.
        impl<'a, 'b, A: Scalar> $trt<&StridedView<'b, A>> for StridedView<'a, A> {
            #[track_caller]
            fn $method(&mut self, rhs: &StridedView<'b, A>) {
                self.apply($op, rhs)
            }
        }

        /// Perform elementwise
        #[doc=$doc]
        /// between `self` and `rhs`, *in place*, overlap-safe.
        ///
        /// **Panics** if their lengths differ.
        impl<'a, 'b, A: Scalar> $trt<StridedView<'b, A>> for StridedView<'a, A> {
            #[track_caller]
            fn $method(&mut self, rhs: StridedView<'b, A>) {
                self.apply($op, &rhs)
            }
        }

        /// Perform elementwise
        #[doc=$doc]
        /// between `self` and the scalar `x`, *in place*.
        impl<'a, A: Scalar> $trt<A> for StridedView<'a, A> {
            #[track_caller]
            fn $method(&mut self, x: A) {
                self.apply_scalar($op, x)
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, AssignOp::Add, "addition");
impl_assign_op!(SubAssign, sub_assign, AssignOp::Sub, "subtraction");
impl_assign_op!(MulAssign, mul_assign, AssignOp::Mul, "multiplication");
impl_assign_op!(DivAssign, div_assign, AssignOp::Div, "division");
