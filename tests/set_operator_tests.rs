//! distinct / union / intersect / except.

use lazyseq::prelude::*;

fn a() -> Source<i32> {
    Source::from(vec![1, 2, 2, 3, 4])
}

fn b() -> Source<i32> {
    Source::from(vec![3, 4, 5, 6])
}

#[test]
fn test_distinct_keeps_first_occurrence() {
    assert_eq!(a().distinct().to_list(), vec![1, 2, 3, 4]);
    let words = Source::from(vec!["b", "a", "b", "c", "a"]);
    assert_eq!(words.distinct().to_list(), vec!["b", "a", "c"]);
}

#[test]
fn test_union() {
    assert_eq!(a().union(b()).to_list(), vec![1, 2, 3, 4, 5, 6]);
    // b's own duplicates are removed too.
    let dup = Source::from(vec![7, 7, 1]);
    assert_eq!(a().union(dup).to_list(), vec![1, 2, 3, 4, 7]);
}

#[test]
fn test_intersect() {
    assert_eq!(a().intersect(b()).to_list(), vec![3, 4]);
    let repeated = Source::from(vec![4, 3, 4, 3]);
    assert_eq!(repeated.intersect(b()).to_list(), vec![4, 3]);
}

#[test]
fn test_except() {
    assert_eq!(a().except(b()).to_list(), vec![1, 2]);
    assert_eq!(b().except(a()).to_list(), vec![5, 6]);
}

#[test]
fn test_set_ops_with_empty() {
    assert_eq!(a().union(empty()).to_list(), vec![1, 2, 3, 4]);
    assert!(a().intersect(empty()).to_list().is_empty());
    assert_eq!(a().except(empty()).to_list(), vec![1, 2, 3, 4]);
    assert!(empty::<i32>().except(a()).to_list().is_empty());
}

#[test]
fn test_set_ops_restart_cleanly() {
    let distinct = a().distinct();
    assert_eq!(distinct.to_list(), distinct.to_list());
    let inter = a().intersect(b());
    assert_eq!(inter.count(), 2);
    assert_eq!(inter.count(), 2);
}
