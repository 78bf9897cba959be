// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "std")]
use num_traits::Float;

use crate::scalar::Scalar;
use crate::source::ElementSource;
use crate::StridedView;

/// # Numerical Methods
impl<'a, A: Scalar> StridedView<'a, A> {
    /// Return the sum of all elements; zero for an empty view.
    pub fn sum(&self) -> A {
        self.iter().fold(A::zero(), |acc, x| acc + x)
    }

    /// Return the dot product of the view and `rhs`, which may be another
    /// view or a fixed-size array such as `[A; 3]`.
    ///
    /// **Panics** if their lengths differ.
    ///
    /// ```
    /// use sectionview::StridedView;
    ///
    /// let mut data = [1., 2., 3.];
    /// let v = StridedView::from_slice_mut(&mut data);
    /// assert_eq!(v.dot(&[1., 0., -1.]), -2.);
    /// ```
    #[track_caller]
    pub fn dot<S>(&self, rhs: &S) -> A
    where
        S: ElementSource<A> + ?Sized,
    {
        assert!(
            self.conformable(rhs),
            "StridedView::dot: lengths differ ({} and {})",
            self.len(),
            rhs.len()
        );
        self.iter()
            .enumerate()
            .fold(A::zero(), |acc, (j, x)| acc + x * rhs.elem(j))
    }

    /// Same as [`dot`](Self::dot).
    #[track_caller]
    pub fn dot_product<S>(&self, rhs: &S) -> A
    where
        S: ElementSource<A> + ?Sized,
    {
        self.dot(rhs)
    }

    /// Return the sum of the squared elements.
    pub fn magnitude_squared(&self) -> A {
        self.iter().fold(A::zero(), |acc, x| acc + x * x)
    }

    /// Return the squared euclidean distance between the view and `rhs`.
    ///
    /// **Panics** if their lengths differ.
    #[track_caller]
    pub fn distance_squared<S>(&self, rhs: &S) -> A
    where
        S: ElementSource<A> + ?Sized,
    {
        assert!(
            self.conformable(rhs),
            "StridedView::distance_squared: lengths differ ({} and {})",
            self.len(),
            rhs.len()
        );
        self.iter().enumerate().fold(A::zero(), |acc, (j, x)| {
            let d = x - rhs.elem(j);
            acc + d * d
        })
    }
}

/// # Floating Point Methods
///
/// **Requires crate feature `"std"`**
#[cfg(feature = "std")]
impl<'a, A: Scalar + Float> StridedView<'a, A> {
    /// Return the euclidean norm of the view.
    pub fn magnitude(&self) -> A {
        self.magnitude_squared().sqrt()
    }

    /// Return the euclidean distance between the view and `rhs`.
    ///
    /// **Panics** if their lengths differ.
    #[track_caller]
    pub fn distance<S>(&self, rhs: &S) -> A
    where
        S: ElementSource<A> + ?Sized,
    {
        self.distance_squared(rhs).sqrt()
    }
}

/// # Comparisons With a Value
impl<'a, A: Copy + PartialOrd> StridedView<'a, A> {
    /// Return `true` if every element equals `x`; `true` for an empty view.
    pub fn all_eq(&self, x: A) -> bool {
        self.iter().all(|e| e == x)
    }

    /// Return `true` if some element differs from `x`.
    pub fn any_ne(&self, x: A) -> bool {
        !self.all_eq(x)
    }

    /// Return `true` if some element is less than `x`.
    pub fn any_lt(&self, x: A) -> bool {
        self.iter().any(|e| e < x)
    }

    /// Return `true` if some element is greater than `x`.
    pub fn any_gt(&self, x: A) -> bool {
        self.iter().any(|e| e > x)
    }
}

/// Return `true` if, at some index, both `a` and `b` are `true`: the dot
/// product of two logical vectors.
///
/// **Panics** if their lengths differ.
#[track_caller]
pub fn dot_bool(a: &StridedView<'_, bool>, b: &StridedView<'_, bool>) -> bool {
    assert!(
        a.len() == b.len(),
        "dot_bool: lengths differ ({} and {})",
        a.len(),
        b.len()
    );
    a.iter().zip(b.iter()).any(|(x, y)| x && y)
}
