use approx::assert_abs_diff_eq;

use sectionview::dot_bool;
use sectionview::prelude::*;

#[test]
fn sum_and_dot() {
    let mut data = [1., 2., 3., 4., 5., 6.];
    let v = StridedView::from_slice_mut(&mut data);
    let odd = v.slice(s![..; 2]);
    let even = v.slice(s![2..; 2]);
    assert_eq!(odd.sum(), 9.);
    assert_eq!(odd.dot(&even), 1. * 2. + 3. * 4. + 5. * 6.);
    assert_eq!(odd.dot_product(&even.slice(s![..; -1])), 1. * 6. + 3. * 4. + 5. * 2.);
    assert_eq!(odd.dot(&[1., 1., 1.]), 9.);
    assert_eq!(v.slice(s![1..=3]).dot(&vec![0., 0., 1.]), 3.);
    assert_eq!(v.slice(s![2..=1]).dot(&[0.; 0]), 0.);
}

#[test]
fn magnitude_and_distance() {
    let mut data = [3., 0., 4.];
    let v = StridedView::from_slice_mut(&mut data);
    let xz = v.slice(s![..; 2]);
    assert_eq!(xz.magnitude_squared(), 25.);
    assert_abs_diff_eq!(xz.magnitude(), 5.);
    assert_abs_diff_eq!(v.distance(&[0., 0., 0.]), 5.);
    assert_abs_diff_eq!(xz.distance(&[0., 0.]), 5.);
    assert_eq!(v.distance_squared(&[3., 1., 4.]), 1.);
    assert_abs_diff_eq!(v.distance(&v), 0.);
}

#[test]
fn integer_helpers() {
    let mut data = [2i64, -1, 3];
    let v = StridedView::from_slice_mut(&mut data);
    assert_eq!(v.sum(), 4);
    assert_eq!(v.magnitude_squared(), 14);
    assert_eq!(v.dot(&v), 14);
    assert_eq!(v.distance_squared(&[0, 0, 0]), 14);
}

#[test]
fn value_predicates() {
    let mut data = [5, 1, 5, 9, 5];
    let v = StridedView::from_slice_mut(&mut data);
    let fives = v.slice(s![..; 2]);
    assert!(fives.all_eq(5));
    assert!(!fives.any_ne(5));
    assert!(v.any_ne(5));
    assert!(v.any_lt(2));
    assert!(!v.any_lt(1));
    assert!(v.any_gt(8));
    assert!(!v.any_gt(9));
}

#[test]
fn logical_dot_product() {
    let mut x = [false, true, false, true];
    let mut y = [true, false, false, true];
    let a = StridedView::from_slice_mut(&mut x);
    let b = StridedView::from_slice_mut(&mut y);
    assert!(dot_bool(&a, &b));
    assert!(!dot_bool(&a.slice(s![..=3]), &b.slice(s![..=3])));
    assert!(dot_bool(&a.slice(s![..; -1]), &b.slice(s![..=4])));
}

#[test]
#[should_panic]
fn logical_dot_product_length_mismatch() {
    let mut x = [true, true];
    let mut y = [true];
    dot_bool(&StridedView::from_slice_mut(&mut x), &StridedView::from_slice_mut(&mut y));
}
