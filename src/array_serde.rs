// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::StridedView;

/// Serialize the view as a sequence of its elements, in index order.
///
/// A view borrows its storage, so there is no `Deserialize`: deserialize
/// into a `Vec<A>` and view it with
/// [`from_slice_mut`](StridedView::from_slice_mut).
///
/// **Requires crate feature `"serde"`**
impl<'a, A> Serialize for StridedView<'a, A>
where
    A: Copy + Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elt in self.iter() {
            seq.serialize_element(&elt)?;
        }
        seq.end()
    }
}
