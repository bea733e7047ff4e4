//! The `Sequence` trait: a restartable, pull-based producer of elements.
//!
//! A `Sequence` is a descriptor, not a cursor. Calling `iter()` opens a fresh
//! enumeration that pulls from upstream on demand; dropping the iterator early
//! stops pulling. Two `iter()` calls are two independent passes.
//!
//! Combinators (`filter`, `map`, `order_by`, ...) take `self` and return a new
//! descriptor. Use `&seq` to compose over a sequence without giving it up.
//! Terminals (`count`, `first`, `to_list`, ...) take `&self` and drive one
//! enumeration to produce a concrete value.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use lazyseq_core::config::OverflowPolicy;
use lazyseq_core::error::Result;

use crate::aggregate::{self, Numeric};
use crate::concat::{Append, Concat, Prepend};
use crate::convert::{self, Dynamic, OfType};
use crate::element;
use crate::filter::Filter;
use crate::group::GroupBy;
use crate::join::InnerJoin;
use crate::map::{FlatMap, Map};
use crate::partition::{Skip, SkipWhile, Take, TakeWhile};
use crate::plan::OpPlan;
use crate::quantify;
use crate::set::{Distinct, Except, Intersect, Union};
use crate::sort::{ByKey, Direction, Ordered};

/// One open enumeration over a sequence.
pub type SeqIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

pub trait Sequence {
    type Item;

    /// Stable operator name, used in plans.
    fn name(&self) -> &'static str;

    /// Open a new enumeration. Nothing upstream is pulled before this call.
    fn iter(&self) -> SeqIter<'_, Self::Item>;

    /// Describe this node and its upstream without enumerating anything.
    fn plan(&self) -> OpPlan;

    // ---------------------------------------------------------------------
    // Lazy operators
    // ---------------------------------------------------------------------

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn map<U, F>(self, transform: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, transform)
    }

    /// Outer-major, inner-minor: each inner sequence is drained before the
    /// next outer element is pulled.
    fn flat_map<I, F>(self, to_sequence: F) -> FlatMap<Self, F, I>
    where
        Self: Sized,
        F: Fn(Self::Item) -> I,
        I: IntoIterator,
    {
        FlatMap::new(self, to_sequence)
    }

    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    fn append(self, value: Self::Item) -> Append<Self>
    where
        Self: Sized,
    {
        Append::new(self, value)
    }

    fn prepend(self, value: Self::Item) -> Prepend<Self>
    where
        Self: Sized,
    {
        Prepend::new(self, value)
    }

    /// Keep only elements whose runtime type is exactly `U`.
    fn filter_by_type<U>(self) -> OfType<Self, U>
    where
        Self: Sized + Sequence<Item = Dynamic>,
        U: Any + Clone,
    {
        OfType::new(self)
    }

    // ---------------------------------------------------------------------
    // Materializing operators
    // ---------------------------------------------------------------------

    fn order_by<K, F>(self, key: F) -> Ordered<Self, ByKey<F, K>>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        Ordered::new(self, ByKey::new(key, Direction::Ascending))
    }

    fn order_by_descending<K, F>(self, key: F) -> Ordered<Self, ByKey<F, K>>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        Ordered::new(self, ByKey::new(key, Direction::Descending))
    }

    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F, K>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        GroupBy::new(self, key)
    }

    /// Inner join: outer elements without a matching inner key yield nothing.
    fn join<I, K, OK, IK, R, U>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> InnerJoin<Self, I, OK, IK, R, K, U>
    where
        Self: Sized,
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        R: Fn(&Self::Item, &I::Item) -> U,
        K: Hash + Eq,
    {
        InnerJoin::new(self, inner, outer_key, inner_key, result)
    }

    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Hash + Eq + Clone,
    {
        Distinct::new(self)
    }

    fn union<B>(self, other: B) -> Union<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
        Self::Item: Hash + Eq + Clone,
    {
        Union::new(self, other)
    }

    fn intersect<B>(self, other: B) -> Intersect<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
        Self::Item: Hash + Eq,
    {
        Intersect::new(self, other)
    }

    fn except<B>(self, other: B) -> Except<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
        Self::Item: Hash + Eq + Clone,
    {
        Except::new(self, other)
    }

    // ---------------------------------------------------------------------
    // Aggregation
    // ---------------------------------------------------------------------

    /// Seeded fold; never fails.
    fn fold<U, F>(&self, seed: U, combine: F) -> U
    where
        F: FnMut(U, Self::Item) -> U,
    {
        self.iter().fold(seed, combine)
    }

    /// Unseeded fold: the first element is the initial accumulator.
    fn reduce<F>(&self, combine: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        aggregate::reduce(self, combine)
    }

    fn count(&self) -> usize {
        self.iter().count()
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iter().filter(|x| predicate(x)).count()
    }

    /// Checked sum; an empty sequence sums to zero.
    fn sum(&self) -> Result<Self::Item>
    where
        Self::Item: Numeric,
    {
        aggregate::sum(self, OverflowPolicy::Checked)
    }

    fn sum_with(&self, policy: OverflowPolicy) -> Result<Self::Item>
    where
        Self::Item: Numeric,
    {
        aggregate::sum(self, policy)
    }

    fn average(&self) -> Result<f64>
    where
        Self::Item: Numeric,
    {
        aggregate::average(self)
    }

    fn average_or(&self, fallback: f64) -> f64
    where
        Self::Item: Numeric,
    {
        aggregate::average(self).unwrap_or(fallback)
    }

    fn min(&self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        aggregate::min(self)
    }

    fn min_or(&self, fallback: Self::Item) -> Self::Item
    where
        Self::Item: PartialOrd,
    {
        aggregate::min(self).unwrap_or(fallback)
    }

    fn max(&self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        aggregate::max(self)
    }

    fn max_or(&self, fallback: Self::Item) -> Self::Item
    where
        Self::Item: PartialOrd,
    {
        aggregate::max(self).unwrap_or(fallback)
    }

    // ---------------------------------------------------------------------
    // Quantifiers
    // ---------------------------------------------------------------------

    fn any(&self) -> bool {
        quantify::any(self)
    }

    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        quantify::any_where(self, predicate)
    }

    /// Vacuously true on an empty sequence.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        quantify::all(self, predicate)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        quantify::contains(self, value)
    }

    // ---------------------------------------------------------------------
    // Element access
    // ---------------------------------------------------------------------

    fn first(&self) -> Result<Self::Item> {
        element::first(self, |_| true)
    }

    fn first_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::first(self, predicate)
    }

    fn first_or(&self, fallback: Self::Item) -> Self::Item {
        element::first(self, |_| true).unwrap_or(fallback)
    }

    fn first_where_or<P>(&self, predicate: P, fallback: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::first(self, predicate).unwrap_or(fallback)
    }

    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::first(self, |_| true).unwrap_or_default()
    }

    fn last(&self) -> Result<Self::Item> {
        element::last(self, |_| true)
    }

    fn last_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::last(self, predicate)
    }

    fn last_or(&self, fallback: Self::Item) -> Self::Item {
        element::last(self, |_| true).unwrap_or(fallback)
    }

    fn last_where_or<P>(&self, predicate: P, fallback: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::last(self, predicate).unwrap_or(fallback)
    }

    fn single(&self) -> Result<Self::Item> {
        element::single(self, |_| true)
    }

    fn single_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::single(self, predicate)
    }

    /// Fallback on an empty sequence; more than one element is still an error.
    fn single_or(&self, fallback: Self::Item) -> Result<Self::Item> {
        element::single_or(self, |_| true, fallback)
    }

    fn single_where_or<P>(&self, predicate: P, fallback: Self::Item) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::single_or(self, predicate, fallback)
    }

    fn element_at(&self, index: i64) -> Result<Self::Item> {
        element::element_at(self, index)
    }

    fn element_at_or(&self, index: i64, fallback: Self::Item) -> Self::Item {
        element::element_at(self, index).unwrap_or(fallback)
    }

    // ---------------------------------------------------------------------
    // Equality & conversion
    // ---------------------------------------------------------------------

    fn sequence_equal<B>(&self, other: &B) -> bool
    where
        B: Sequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        convert::sequence_equal(self, other)
    }

    fn to_list(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }

    fn to_array(&self) -> Box<[Self::Item]> {
        self.iter().collect()
    }

    fn to_unique_map<K, V, KF, VF>(&self, key: KF, value: VF) -> Result<HashMap<K, V>>
    where
        KF: Fn(&Self::Item) -> K,
        VF: Fn(&Self::Item) -> V,
        K: Hash + Eq + Debug,
    {
        convert::to_unique_map(self, key, value)
    }

    /// Exact-type cast of every element; fails at the first mismatch.
    fn narrow<U>(&self) -> Result<Vec<U>>
    where
        Self: Sequence<Item = Dynamic>,
        U: Any + Clone,
    {
        convert::narrow(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn iter(&self) -> SeqIter<'_, Self::Item> {
        (**self).iter()
    }

    fn plan(&self) -> OpPlan {
        (**self).plan()
    }
}
