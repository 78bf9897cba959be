// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! sectionview prelude.
//!
//! This module contains the most used types, traits and macros that you
//! can import easily as a group.
//!
//! ```
//! use sectionview::prelude::*;
//!
//! let mut data = [1., 2., 3.];
//! let mut v = StridedView::from_slice_mut(&mut data);
//! v *= 2.;
//! assert_eq!(v.slice(s![..; -1]), [6., 4., 2.]);
//! ```

#[doc(no_inline)]
pub use crate::{StridedView, Ix};

#[doc(no_inline)]
pub use crate::{AssignOp, ElementSource, ErrorKind, Scalar, Section, ViewError};

pub use crate::s;
