//! Partitioning operators: take/skip and their predicate forms.
//!
//! All four are single forward passes; nothing is buffered.

use crate::plan::{Evaluation, OpPlan};
use crate::traits::{SeqIter, Sequence};

/// At most the first `n` elements. Stops pulling once `n` have been yielded.
pub struct Take<S> {
    upstream: S,
    n: usize,
}

impl<S> Take<S> {
    pub fn new(upstream: S, n: usize) -> Self {
        Self { upstream, n }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "take"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        if self.n == 0 {
            // Don't even open upstream.
            return Box::new(std::iter::empty());
        }
        Box::new(self.upstream.iter().take(self.n))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}

/// Everything after the first `n` elements.
pub struct Skip<S> {
    upstream: S,
    n: usize,
}

impl<S> Skip<S> {
    pub fn new(upstream: S, n: usize) -> Self {
        Self { upstream, n }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "skip"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        Box::new(self.upstream.iter().skip(self.n))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}

/// Yields until the first element failing `predicate`, then stops for good.
pub struct TakeWhile<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "take_while"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        Box::new(self.upstream.iter().take_while(move |x| (self.predicate)(x)))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}

/// Drops elements until the first one failing `predicate`; from there on
/// everything is yielded, including later elements that would pass.
pub struct SkipWhile<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> SkipWhile<S, P> {
    pub fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "skip_while"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        Box::new(self.upstream.iter().skip_while(move |x| (self.predicate)(x)))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}
