use sectionview::prelude::*;

#[test]
fn formatting() {
    let mut data = [1.5f64, -2., 1e3, 0.3];
    let v = StridedView::from_slice_mut(&mut data);
    assert_eq!(format!("{}", v), "[1.5, -2, 1000, 0.3]");
    assert_eq!(format!("{:.1}", v.slice(s![..; 3])), "[1.5, 0.3]");
    assert_eq!(format!("{:e}", v.slice(s![3..=3])), "[1e3]");
    assert_eq!(format!("{:E}", v.slice(s![4..])), "[3E-1]");
    assert_eq!(format!("{:6.2}", v.slice(s![1..=2])), "[  1.50,  -2.00]");
}

#[test]
fn debug_format() {
    let mut data = [1, 2, 3, 4, 5];
    let v = StridedView::from_slice_mut(&mut data);
    assert_eq!(
        format!("{:?}", v),
        "[1, 2, 3, 4, 5] upper=5, stride=1, offset=-1, contiguous=true"
    );
    assert_eq!(
        format!("{:?}", v.slice(s![..; -2])),
        "[5, 3, 1] upper=3, stride=-2, offset=6, contiguous=false"
    );
}

#[test]
fn empty_view_format() {
    let mut data: Vec<i32> = Vec::new();
    let v = StridedView::from_slice_mut(&mut data);
    assert_eq!(format!("{}", v), "[]");
}

#[test]
fn error_messages() {
    let mut data = [1, 2, 3];
    let v = StridedView::from_slice_mut(&mut data);
    let err = v.try_slice(s![2..=4]).unwrap_err();
    assert_eq!(err.to_string(), "ViewError/IndexOutOfRange: index out of range");
    let err = v.try_assign(&[1, 2]).unwrap_err();
    assert_eq!(err.to_string(), "ViewError/ShapeMismatch: shapes are not conformable");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("ShapeMismatch"));
}
