// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::StridedView;

fn format_view<A, F>(view: &StridedView<'_, A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    A: Copy,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    f.write_str("[")?;
    for (j, elt) in view.iter().enumerate() {
        if j > 0 {
            f.write_str(", ")?;
        }
        format(&elt, f)?;
    }
    f.write_str("]")
}

/// Format the view using `Display` and apply the formatting parameters used
/// to each element.
impl<'a, A: Copy + fmt::Display> fmt::Display for StridedView<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_view(self, f, <_>::fmt)
    }
}

/// Format the view using `Debug` and apply the formatting parameters used
/// to each element.
impl<'a, A: Copy + fmt::Debug> fmt::Debug for StridedView<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_view(self, f, <_>::fmt)?;
        write!(
            f,
            " upper={}, stride={}, offset={}, contiguous={}",
            self.upper(),
            self.stride(),
            self.offset(),
            self.is_contiguous()
        )
    }
}

/// Format the view using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<'a, A: Copy + fmt::LowerExp> fmt::LowerExp for StridedView<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_view(self, f, <_>::fmt)
    }
}

/// Format the view using `UpperExp` and apply the formatting parameters used
/// to each element.
impl<'a, A: Copy + fmt::UpperExp> fmt::UpperExp for StridedView<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_view(self, f, <_>::fmt)
    }
}
