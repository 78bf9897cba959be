use approx::assert_abs_diff_eq;
use defmac::defmac;
use itertools::Itertools;
use num_complex::Complex;

use sectionview::prelude::*;
use sectionview::{Divisor, ElementSource};

#[test]
fn shift_right_by_one() {
    let mut data = [1, 2, 3, 4, 5];
    let a = StridedView::from_slice_mut(&mut data);
    a.slice(s![2..=5]).assign(&a.slice(s![1..=4]));
    assert_eq!(data, [1, 1, 2, 3, 4]);
}

#[test]
fn shift_left_by_one() {
    let mut data = [1, 2, 3, 4, 5];
    let a = StridedView::from_slice_mut(&mut data);
    a.slice(s![1..=4]).assign(&a.slice(s![2..=5]));
    assert_eq!(data, [2, 3, 4, 5, 5]);
}

#[test]
fn reverse_in_place() {
    let mut data = (1..=7).collect_vec();
    let a = StridedView::from_slice_mut(&mut data);
    a.assign(&a.slice(s![..; -1]));
    assert_eq!(data, [7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn self_assignment_is_identity() {
    let mut data = [3, 1, 4, 1, 5, 9];
    let a = StridedView::from_slice_mut(&mut data);
    let odd = a.slice(s![..; 2]);
    odd.assign(&odd);
    assert_eq!(data, [3, 1, 4, 1, 5, 9]);
}

#[test]
fn interleaved_sections() {
    let mut data = [1, 10, 2, 20, 3, 30];
    let a = StridedView::from_slice_mut(&mut data);
    let mut odd = a.slice(s![1..=5; 2]);
    let even = a.slice(s![2..=6; 2]);
    odd += &even;
    even.assign(&odd.slice(s![..; -1]));
    assert_eq!(data, [11, 33, 22, 22, 33, 11]);
}

#[test]
fn assign_from_plain_sources() {
    let mut data = [0; 6];
    let a = StridedView::from_slice_mut(&mut data);
    let odd = a.slice(s![..; 2]);
    odd.assign(&[1, 2, 3]);
    a.slice(s![2..=6; 2]).assign(&vec![4, 5, 6]);
    assert_eq!(a.to_vec(), [1, 4, 2, 5, 3, 6]);
    a.slice(s![1..=2]).assign(&[7, 8][..]);
    assert_eq!(data, [7, 8, 2, 5, 3, 6]);
}

#[test]
fn mismatch_leaves_destination_untouched() {
    defmac!(check_untouched op => {
        let mut data = [1, 2, 3, 4];
        let a = StridedView::from_slice_mut(&mut data);
        let err = a.slice(s![..=3]).try_apply(op, &a).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(data, [1, 2, 3, 4]);
    });
    check_untouched!(AssignOp::Assign);
    check_untouched!(AssignOp::Add);
    check_untouched!(AssignOp::Sub);
    check_untouched!(AssignOp::Mul);
    check_untouched!(AssignOp::Div);
}

#[test]
#[should_panic]
fn mismatch_panics() {
    let mut data = [1, 2, 3, 4];
    let a = StridedView::from_slice_mut(&mut data);
    a.assign(&[1, 2, 3]);
}

#[test]
fn compound_assignment_with_views() {
    let mut x = [1., 2., 3.];
    let mut y = [4., 5., 6.];
    let mut a = StridedView::from_slice_mut(&mut x);
    let b = StridedView::from_slice_mut(&mut y);
    a += &b;
    assert_eq!(a, [5., 7., 9.]);
    a -= b;
    assert_eq!(a, [1., 2., 3.]);
    a *= &b;
    assert_eq!(a, [4., 10., 18.]);
    a /= b.slice(s![..; -1]);
    assert_eq!(a, [4. / 6., 2., 18. / 4.]);
}

#[test]
fn compound_assignment_from_sources() {
    let mut data = [10, 20, 30];
    let a = StridedView::from_slice_mut(&mut data);
    a.add_assign_from(&[1, 2, 3]);
    a.sub_assign_from(&vec![10, 10, 10]);
    a.mul_assign_from(&[2, 2, 2]);
    a.div_assign_from(&[1, 3, 7]);
    assert_eq!(data, [2, 8, 6]);
}

#[test]
fn overlapping_compound_assignment() {
    let mut data = [1, 2, 3, 4, 5];
    let a = StridedView::from_slice_mut(&mut data);
    let mut tail = a.slice(s![2..=5]);
    // a(2:5) += a(1:4), every addend read before any write
    tail += a.slice(s![1..=4]);
    assert_eq!(a.to_vec(), [1, 3, 5, 7, 9]);
}

#[test]
fn scalar_operators() {
    let mut data = [2, 4, 6, 8];
    let mut a = StridedView::from_slice_mut(&mut data);
    a += 1;
    a -= 2;
    a *= 3;
    a /= 2;
    assert_eq!(data, [1, 4, 7, 10]);
}

#[test]
fn scalar_fill_and_map() {
    let mut data = [0; 6];
    let a = StridedView::from_slice_mut(&mut data);
    a.slice(s![..; 3]).fill(9);
    a.slice(s![2..=3]).map_inplace(|x| x + 1);
    assert_eq!(data, [9, 1, 1, 9, 0, 0]);
}

#[test]
fn integer_division_is_exact() {
    let mut data = [7, -7, 9];
    let mut a = StridedView::from_slice_mut(&mut data);
    a /= 2;
    assert_eq!(data, [3, -3, 4]);
    assert_eq!(i32::divisor(2), Divisor::Exact(2));
}

#[test]
fn float_division_uses_reciprocal() {
    assert_eq!(f64::divisor(4.), Divisor::Reciprocal(0.25));
    let mut data = [1., 2., 3.];
    let mut a = StridedView::from_slice_mut(&mut data);
    a /= 3.;
    assert_abs_diff_eq!(data[..], [1. / 3., 2. / 3., 1.][..], epsilon = 1e-15);
}

#[test]
fn complex_elements() {
    let mut data = [Complex::new(1., 1.), Complex::new(0., 2.)];
    let mut a = StridedView::from_slice_mut(&mut data);
    a *= Complex::new(0., 1.);
    assert_eq!(a, [Complex::new(-1., 1.), Complex::new(-2., 0.)]);
    a /= Complex::new(2., 0.);
    assert_eq!(a.at(2), Complex::new(-1., 0.));
}

#[test]
fn division_by_zero_scalar() {
    let mut data = [1, 2];
    let a = StridedView::from_slice_mut(&mut data);
    assert_eq!(
        a.try_apply_scalar(AssignOp::Div, 0).unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
    a.try_apply_scalar(AssignOp::Mul, 0).unwrap();
    assert_eq!(data, [0, 0]);
}

#[test]
#[should_panic]
fn division_by_zero_scalar_panics() {
    let mut data = [1., 2.];
    let mut a = StridedView::from_slice_mut(&mut data);
    a /= 0.;
}

#[test]
fn multiply_then_divide_restores() {
    let mut data = [1.5, -2.25, 8.];
    let mut a = StridedView::from_slice_mut(&mut data);
    a *= 4.;
    a /= 4.;
    assert_eq!(data, [1.5, -2.25, 8.]);
}

#[test]
fn zip_assign_with_closure() {
    let mut data = [1, 2, 3, 4];
    let a = StridedView::from_slice_mut(&mut data);
    a.zip_assign_with(&a.slice(s![..; -1]), |x, y| x.max(y));
    assert_eq!(data, [4, 3, 3, 4]);
}

#[test]
fn custom_source() {
    struct Ramp(usize);

    impl ElementSource<i64> for Ramp {
        fn len(&self) -> usize {
            self.0
        }

        fn elem(&self, j: usize) -> i64 {
            j as i64 * 10
        }
    }

    let mut data = [1; 4];
    let a = StridedView::from_slice_mut(&mut data);
    a.assign(&Ramp(4));
    assert_eq!(data, [0, 10, 20, 30]);
    assert!(StridedView::from_slice_mut(&mut [0; 3]).try_assign(&Ramp(4)).is_err());
}

#[test]
fn empty_views_touch_nothing() {
    let mut data = [1, 2, 3];
    let a = StridedView::from_slice_mut(&mut data);
    let mut e = a.slice(s![3..=2]);
    e.assign(&[0; 0]);
    e.assign(&a.slice(s![2..=1]));
    e += 5;
    e /= 2;
    e.fill(9);
    for op in [AssignOp::Assign, AssignOp::Add, AssignOp::Div] {
        e.try_apply(op, &Vec::<i32>::new()).unwrap();
    }
    assert_eq!(
        e.try_apply(AssignOp::Add, &[1]).unwrap_err().kind(),
        ErrorKind::ShapeMismatch
    );
    assert_eq!(data, [1, 2, 3]);
}

#[test]
fn empty_view_with_extreme_offset() {
    defmac!(check offset => {
        let cells: [std::cell::Cell<i32>; 2] = Default::default();
        let mut e = StridedView::from_shape_stride(&cells, offset, 1, 0).unwrap();
        e.fill(7);
        e.assign(&[0i32; 0]);
        e += 1;
        let whole = e.slice(s![..]);
        e *= &whole;
        assert_eq!(format!("{}", e), "[]");
        assert!(cells.iter().all(|c| c.get() == 0));
    });
    check!(isize::MAX);
    check!(isize::MIN);
}
