//! Deferred vs materialized evaluation.


use lazyseq::prelude::*;
use test_data_gen::counted;

#[test]
fn test_deferred_filter_sees_later_push() {
    let numbers = Source::from(vec![1, 2, 3]);

    let deferred = (&numbers).filter(|n| *n > 1);
    let immediate = (&numbers).filter(|n| *n > 1).to_list();

    numbers.push(4);

    assert_eq!(deferred.to_list(), vec![2, 3, 4]);
    assert_eq!(immediate, vec![2, 3]);
}

#[test]
fn test_composition_pulls_nothing() {
    let src = counted(range(1, 100).unwrap());
    let pipeline = (&src)
        .filter(|n| n % 2 == 0)
        .map(|n| n * 10)
        .order_by(|n| -n)
        .take(3);

    assert_eq!(src.opens.get(), 0);
    assert_eq!(src.pulls.get(), 0);

    assert_eq!(pipeline.to_list(), vec![1000, 980, 960]);
    assert_eq!(src.opens.get(), 1);
}

#[test]
fn test_each_enumeration_is_independent() {
    let src = counted(Source::from(vec![1, 2, 3, 4]));
    let evens = (&src).filter(|n| n % 2 == 0);

    assert_eq!(evens.to_list(), vec![2, 4]);
    assert_eq!(evens.to_list(), vec![2, 4]);
    assert_eq!(src.opens.get(), 2);
    assert_eq!(src.pulls.get(), 8);
}

#[test]
fn test_predicate_reevaluated_every_pass() {
    use std::cell::Cell;

    let threshold = Cell::new(2);
    let numbers = Source::from(vec![1, 2, 3, 4]);
    let above = (&numbers).filter(|n| *n > threshold.get());

    assert_eq!(above.to_list(), vec![3, 4]);
    threshold.set(3);
    assert_eq!(above.to_list(), vec![4]);
}

#[test]
fn test_take_stops_pulling_upstream() {
    let src = counted(range(1, 1_000_000).unwrap());
    let first_three = (&src).map(|n| n * 2).take(3).to_list();

    assert_eq!(first_three, vec![2, 4, 6]);
    assert_eq!(src.pulls.get(), 3);
}

#[test]
fn test_short_circuit_terminals_stop_early() {
    let src = counted(range(1, 1_000).unwrap());

    assert!((&src).any_where(|n| *n == 5));
    assert_eq!(src.pulls.get(), 5);

    src.pulls.set(0);
    assert_eq!((&src).first_where(|n| *n > 9), Ok(10));
    assert_eq!(src.pulls.get(), 10);

    src.pulls.set(0);
    assert!(!(&src).all(|n| *n < 3));
    assert_eq!(src.pulls.get(), 3);
}

#[test]
fn test_materialized_copy_is_detached() {
    let numbers = Source::from(vec![3, 1, 2]);
    let sorted = (&numbers).order_by(|n| *n).to_array();
    numbers.push(0);

    assert_eq!(&*sorted, &[1, 2, 3]);
    assert_eq!((&numbers).order_by(|n| *n).to_list(), vec![0, 1, 2, 3]);
}

#[test]
fn test_clone_of_source_shares_buffer() {
    let numbers = Source::from(vec![1]);
    let handle = numbers.clone();
    let doubled = handle.map(|n| n * 2);

    numbers.push(2);
    assert_eq!(doubled.to_list(), vec![2, 4]);
    assert_eq!(numbers.snapshot(), vec![1, 2]);
}

#[test]
fn test_extend_from_pipeline_over_same_buffer() {
    let numbers = Source::from(vec![1, 2, 3]);
    let mut alias = numbers.clone();
    alias.extend((&numbers).map(|n| n * 10).iter());

    assert_eq!(numbers.snapshot(), vec![1, 2, 3, 10, 20, 30]);
    assert_eq!(numbers.len(), 6);
}

#[test]
fn test_push_while_enumerating_is_observed() {
    let numbers = Source::from(vec![1, 2]);
    let mut seen = Vec::new();
    for n in numbers.iter() {
        if n == 1 {
            numbers.push(3);
        }
        seen.push(n);
    }
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_slices_are_sequences() {
    let owned = vec![3, 1, 2, 3];
    let slice = &owned[..];

    assert_eq!(slice.to_list(), vec![3, 1, 2, 3]);
    assert_eq!(slice.count_where(|n| *n == 3), 2);
    assert_eq!(slice.sum(), Ok(9));
    assert_eq!(
        slice.filter(|n| *n > 1).distinct().to_list(),
        vec![3, 2]
    );
    assert_eq!(
        owned.as_slice().order_by(|n| *n).to_list(),
        vec![1, 2, 3, 3]
    );
    assert!(Sequence::sequence_equal(slice, &Source::from(owned.clone())));
    assert_eq!(slice.plan().op, "slice");
    assert_eq!(slice.plan().evaluation, Evaluation::Source);

    // Inherent slice methods are untouched.
    assert_eq!(slice.first(), Some(&3));
}
