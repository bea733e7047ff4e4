//! Projection operators: `map` (1:1) and `flat_map` (1:n).

use std::marker::PhantomData;

use crate::plan::{Evaluation, OpPlan};
use crate::traits::{SeqIter, Sequence};

pub struct Map<S, F, U> {
    upstream: S,
    transform: F,
    _out: PhantomData<fn() -> U>,
}

impl<S, F, U> Map<S, F, U> {
    pub fn new(upstream: S, transform: F) -> Self {
        Self {
            upstream,
            transform,
            _out: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for Map<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn name(&self) -> &'static str {
        "map"
    }

    fn iter(&self) -> SeqIter<'_, U> {
        Box::new(self.upstream.iter().map(move |x| (self.transform)(x)))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}

/// Flattens the inner sequence produced for each upstream element.
///
/// The inner sequence for an element is built only when that element is
/// pulled, and is fully drained before the next upstream pull.
pub struct FlatMap<S, F, I> {
    upstream: S,
    to_sequence: F,
    _inner: PhantomData<fn() -> I>,
}

impl<S, F, I> FlatMap<S, F, I> {
    pub fn new(upstream: S, to_sequence: F) -> Self {
        Self {
            upstream,
            to_sequence,
            _inner: PhantomData,
        }
    }
}

impl<S, F, I> Sequence for FlatMap<S, F, I>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn name(&self) -> &'static str {
        "flat_map"
    }

    fn iter(&self) -> SeqIter<'_, I::Item> {
        Box::new(self.upstream.iter().flat_map(move |x| (self.to_sequence)(x)))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}
