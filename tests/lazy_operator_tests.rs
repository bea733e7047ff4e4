//! Stateless lazy operators: filter/map/flat_map/partitioning/concatenation.


use lazyseq::prelude::*;
use test_data_gen::{counted, people};

#[test]
fn test_filter_evens_and_threshold() {
    let numbers = Source::from(vec![1, 2, 3, 4, 5, 6]);
    assert_eq!((&numbers).filter(|n| n % 2 == 0).to_list(), vec![2, 4, 6]);
    assert_eq!((&numbers).filter(|n| *n > 3).to_list(), vec![4, 5, 6]);
}

#[test]
fn test_map_preserves_order_and_count() {
    let names = people().map(|p| p.name).to_list();
    assert_eq!(names, vec!["Ali", "Sara", "Reza", "Niloofar"]);

    let info = people()
        .map(|p| (format!("{} ({})", p.name, p.age), p.city))
        .first()
        .unwrap();
    assert_eq!(info, ("Ali (25)".to_string(), "Tehran"));
}

#[test]
fn test_flat_map_is_outer_major() {
    let classes = Source::from(vec![
        ("A", vec!["Ali", "Sara"]),
        ("B", vec![]),
        ("C", vec!["Reza"]),
    ]);
    let all = classes.flat_map(|(_, students)| students).to_list();
    assert_eq!(all, vec!["Ali", "Sara", "Reza"]);

    let pairs = range(1, 2)
        .unwrap()
        .flat_map(|i| vec![(i, 'x'), (i, 'y')])
        .to_list();
    assert_eq!(pairs, vec![(1, 'x'), (1, 'y'), (2, 'x'), (2, 'y')]);
}

#[test]
fn test_flat_map_pulls_outer_on_demand() {
    let src = counted(range(1, 100).unwrap());
    let firsts = (&src).flat_map(|n| vec![n; 2]).take(3).to_list();
    assert_eq!(firsts, vec![1, 1, 2]);
    assert_eq!(src.pulls.get(), 2);
}

#[test]
fn test_take_and_skip() {
    let numbers = Source::from(vec![1, 2, 3, 4, 5]);
    assert_eq!((&numbers).take(3).to_list(), vec![1, 2, 3]);
    assert_eq!((&numbers).skip(2).to_list(), vec![3, 4, 5]);
    assert_eq!((&numbers).take(10).to_list(), vec![1, 2, 3, 4, 5]);
    assert!((&numbers).skip(10).to_list().is_empty());
    assert!((&numbers).take(0).to_list().is_empty());
}

#[test]
fn test_take_zero_never_opens_upstream() {
    let src = counted(Source::from(vec![1, 2, 3]));
    assert_eq!((&src).take(0).count(), 0);
    assert_eq!(src.opens.get(), 0);
}

#[test]
fn test_take_while_stops_permanently() {
    let numbers = Source::from(vec![1, 2, -1, 3, 4]);
    assert_eq!((&numbers).take_while(|n| *n > 0).to_list(), vec![1, 2]);
}

#[test]
fn test_skip_while_yields_everything_after_first_failure() {
    let numbers = Source::from(vec![1, 2, 3, 1, 5]);
    // The trailing 1 would satisfy the predicate but is still yielded.
    assert_eq!((&numbers).skip_while(|n| *n < 3).to_list(), vec![3, 1, 5]);
}

#[test]
fn test_concat_append_prepend() {
    let a = Source::from(vec![1, 2, 3]);
    let b = Source::from(vec![4, 5]);

    assert_eq!((&a).concat(&b).to_list(), vec![1, 2, 3, 4, 5]);
    assert_eq!((&a).append(99).to_list(), vec![1, 2, 3, 99]);
    assert_eq!((&a).prepend(0).to_list(), vec![0, 1, 2, 3]);
    assert_eq!(
        (&a).prepend(0).append(9).concat(&b).to_list(),
        vec![0, 1, 2, 3, 9, 4, 5]
    );
}

#[test]
fn test_concat_opens_second_only_after_first_drained() {
    let a = Source::from(vec![1, 2]);
    let b = counted(Source::from(vec![3, 4]));
    let joined = (&a).concat(&b);

    assert_eq!(joined.take(2).to_list(), vec![1, 2]);
    assert_eq!(b.opens.get(), 0);

    assert_eq!((&a).concat(&b).to_list(), vec![1, 2, 3, 4]);
    assert_eq!(b.opens.get(), 1);
}

#[test]
fn test_operators_chain_in_textual_order() {
    let numbers = range(1, 10).unwrap();
    let skip_then_take = (&numbers).skip(2).take(3).to_list();
    let take_then_skip = (&numbers).take(3).skip(2).to_list();
    assert_eq!(skip_then_take, vec![3, 4, 5]);
    assert_eq!(take_then_skip, vec![3]);
}
