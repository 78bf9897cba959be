// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Derive Copy and Clone using the parameters (and bounds) as specified in []
macro_rules! copy_and_clone {
    ([$($parm:tt)*] $type_:ty) => {
        impl<$($parm)*> Copy for $type_ { }
        impl<$($parm)*> Clone for $type_ {
            #[inline(always)]
            fn clone(&self) -> Self { *self }
        }
    };
    ($type_:ty) => {
        copy_and_clone!{ [] $type_ }
    }
}

/// Unwrap the result of a checked view operation, panicking with the
/// error's message (and the caller's location, through `#[track_caller]`
/// on the enclosing method).
macro_rules! or_panic {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    };
}

/// Check the one-based index `$i` against the view `$view`; only verbose
/// when debug assertions are enabled.
#[cfg(debug_assertions)]
macro_rules! bounds_check {
    ($view:expr, $i:expr) => {
        if !$view.contains($i) {
            panic!(
                "StridedView: index {} out of range 1..={} (stride={}, offset={})",
                $i,
                $view.upper(),
                $view.stride(),
                $view.offset()
            );
        }
    };
}

#[cfg(not(debug_assertions))]
macro_rules! bounds_check {
    ($view:expr, $i:expr) => {
        if !$view.contains($i) {
            panic!("StridedView: index out of range");
        }
    };
}
