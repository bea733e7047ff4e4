//! Composite comparators for the ordering operator.

use std::cmp::Ordering;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// A (possibly composite) ordering over `T`.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Number of keys in declared order.
    fn arity(&self) -> usize;

    fn directions(&self, out: &mut Vec<Direction>);
}

/// One key selector plus its direction.
pub struct ByKey<F, K> {
    key: F,
    direction: Direction,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new(key: F, direction: Direction) -> Self {
        Self {
            key,
            direction,
            _key: PhantomData,
        }
    }
}

impl<T, F, K> Comparator<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply((self.key)(a).cmp(&(self.key)(b)))
    }

    fn arity(&self) -> usize {
        1
    }

    fn directions(&self, out: &mut Vec<Direction>) {
        out.push(self.direction);
    }
}

/// `primary`, falling back to `secondary` only on a tie.
pub struct ThenBy<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> ThenBy<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<T, A, B> Comparator<T> for ThenBy<A, B>
where
    A: Comparator<T>,
    B: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.primary
            .compare(a, b)
            .then_with(|| self.secondary.compare(a, b))
    }

    fn arity(&self) -> usize {
        self.primary.arity() + self.secondary.arity()
    }

    fn directions(&self, out: &mut Vec<Direction>) {
        self.primary.directions(out);
        self.secondary.directions(out);
    }
}
