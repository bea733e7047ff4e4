//! Concatenation: `concat`, `append`, `prepend`.

use crate::plan::{Evaluation, OpPlan};
use crate::traits::{SeqIter, Sequence};

/// All of `first`, then all of `second`. `second` is opened only once
/// `first` is exhausted.
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn name(&self) -> &'static str {
        "concat"
    }

    fn iter(&self) -> SeqIter<'_, A::Item> {
        let mut second = None;
        let mut first = Some(self.first.iter());
        Box::new(std::iter::from_fn(move || {
            if let Some(it) = first.as_mut() {
                if let Some(x) = it.next() {
                    return Some(x);
                }
                first = None;
            }
            second.get_or_insert_with(|| self.second.iter()).next()
        }))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy)
            .with_input(self.first.plan())
            .with_input(self.second.plan())
    }
}

pub struct Append<S: Sequence> {
    upstream: S,
    value: S::Item,
}

impl<S: Sequence> Append<S> {
    pub fn new(upstream: S, value: S::Item) -> Self {
        Self { upstream, value }
    }
}

impl<S> Sequence for Append<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "append"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        let tail = std::iter::once_with(move || self.value.clone());
        Box::new(self.upstream.iter().chain(tail))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}

pub struct Prepend<S: Sequence> {
    upstream: S,
    value: S::Item,
}

impl<S: Sequence> Prepend<S> {
    pub fn new(upstream: S, value: S::Item) -> Self {
        Self { upstream, value }
    }
}

impl<S> Sequence for Prepend<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "prepend"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        // Upstream is opened only after the prepended value is consumed.
        let mut head = Some(self.value.clone());
        let mut rest = None;
        Box::new(std::iter::from_fn(move || {
            if let Some(x) = head.take() {
                return Some(x);
            }
            rest.get_or_insert_with(|| self.upstream.iter()).next()
        }))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}
