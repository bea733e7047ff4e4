//! range / repeat / empty.

use lazyseq::prelude::*;

#[test]
fn test_range() {
    assert_eq!(range(1, 5).unwrap().to_list(), vec![1, 2, 3, 4, 5]);
    assert_eq!(range(-2, 3).unwrap().to_list(), vec![-2, -1, 0]);
    assert_eq!(range(7, 0).unwrap().count(), 0);
}

#[test]
fn test_range_bounds() {
    assert!(matches!(range(0, -1), Err(Error::InvalidArgument(_))));
    assert!(matches!(range(i32::MAX, 2), Err(Error::InvalidArgument(_))));
    assert_eq!(range(i32::MAX, 1).unwrap().to_list(), vec![i32::MAX]);
    assert_eq!(range(i32::MAX, 0).unwrap().count(), 0);
    assert_eq!(range(i32::MIN, 2).unwrap().to_list(), vec![i32::MIN, i32::MIN + 1]);
}

#[test]
fn test_repeat() {
    assert_eq!(repeat("x", 3).unwrap().to_list(), vec!["x", "x", "x"]);
    assert!(repeat("x", 0).unwrap().to_list().is_empty());
    assert!(matches!(repeat("x", -1), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_empty() {
    assert_eq!(empty::<i32>().count(), 0);
    assert!(empty::<String>().to_list().is_empty());
}

#[test]
fn test_generators_restart() {
    let r = range(1, 3).unwrap();
    assert_eq!(r.to_list(), r.to_list());
    assert_eq!(r.sum(), Ok(6));
}

#[test]
fn test_large_range_bounded_by_take() {
    let big = range(0, i32::MAX).unwrap();
    assert_eq!((&big).skip(10).take(2).to_list(), vec![10, 11]);
    assert_eq!(big.first_where(|n| *n > 1_000), Ok(1_001));
}
