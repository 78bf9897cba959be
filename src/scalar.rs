// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt::Debug;

use num_complex::Complex;
use num_traits::{NumAssign, One};

/// Elements that can take part in view arithmetic, and that can be used as
/// direct scalar operands.
///
/// For example, `f64` is a `Scalar` which means that for a view `v` over
/// `f64` elements, `v += &w`, `v *= 2.` and `v /= 3.` are allowed.
///
/// `Scalar` also picks how a view is divided by a scalar: see
/// [`Scalar::divisor`].
pub trait Scalar: 'static + Copy + Debug + PartialEq + NumAssign {
    /// Prepare `d` for dividing many elements by it.
    ///
    /// Floating point types multiply by the reciprocal (one division, then
    /// cheaper multiplications, with the rounding that implies); integer
    /// types divide exactly, truncating.
    ///
    /// `d` must not be zero.
    fn divisor(d: Self) -> Divisor<Self>;
}

/// How to divide by a scalar, see [`Scalar::divisor`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Divisor<A> {
    /// Multiply by this reciprocal.
    Reciprocal(A),
    /// Divide by this value.
    Exact(A),
}

impl<A: Scalar> Divisor<A> {
    /// Divide `x`.
    #[inline]
    pub fn divide(&self, x: A) -> A {
        match *self {
            Divisor::Reciprocal(r) => x * r,
            Divisor::Exact(d) => x / d,
        }
    }
}

macro_rules! impl_scalar_exact {
    ($($t:ty),*) => {
        $(
        impl Scalar for $t {
            #[inline]
            fn divisor(d: Self) -> Divisor<Self> {
                Divisor::Exact(d)
            }
        }
        )*
    };
}

macro_rules! impl_scalar_reciprocal {
    ($($t:ty),*) => {
        $(
        impl Scalar for $t {
            #[inline]
            fn divisor(d: Self) -> Divisor<Self> {
                Divisor::Reciprocal(<$t>::one() / d)
            }
        }
        )*
    };
}

impl_scalar_exact!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
impl_scalar_reciprocal!(f32, f64, Complex<f32>, Complex<f64>);
