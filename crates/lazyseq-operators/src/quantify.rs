//! Quantifiers. All short-circuit left to right.

use crate::traits::Sequence;

pub fn any<S: Sequence + ?Sized>(source: &S) -> bool {
    source.iter().next().is_some()
}

pub fn any_where<S, P>(source: &S, predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    source.iter().any(|x| predicate(&x))
}

pub fn all<S, P>(source: &S, predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    source.iter().all(|x| predicate(&x))
}

pub fn contains<S>(source: &S, value: &S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    source.iter().any(|x| x == *value)
}
