// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::StridedView;

/// **Requires crate feature `"approx"`**
impl<'a, 'b, A, B> AbsDiffEq<StridedView<'b, B>> for StridedView<'a, A>
where
    A: Copy + AbsDiffEq<B>,
    A::Epsilon: Clone,
    B: Copy,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &StridedView<'b, B>, epsilon: A::Epsilon) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::abs_diff_eq(&a, &b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<'a, 'b, A, B> RelativeEq<StridedView<'b, B>> for StridedView<'a, A>
where
    A: Copy + RelativeEq<B>,
    A::Epsilon: Clone,
    B: Copy,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &StridedView<'b, B>,
        epsilon: A::Epsilon,
        max_relative: A::Epsilon,
    ) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::relative_eq(&a, &b, epsilon.clone(), max_relative.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<'a, 'b, A, B> UlpsEq<StridedView<'b, B>> for StridedView<'a, A>
where
    A: Copy + UlpsEq<B>,
    A::Epsilon: Clone,
    B: Copy,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &StridedView<'b, B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::ulps_eq(&a, &b, epsilon.clone(), max_ulps))
    }
}
