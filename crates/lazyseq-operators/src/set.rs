//! Set-algebra operators: distinct, union, intersect, except.
//!
//! All four deduplicate with a hash set scoped to one enumeration and yield in
//! first-encounter order. `distinct` and `union` stream; `intersect` and
//! `except` index the right-hand side when the enumeration is opened.

use std::collections::HashSet;
use std::hash::Hash;

use crate::plan::{Evaluation, OpPlan};
use crate::trace;
use crate::traits::{SeqIter, Sequence};

pub struct Distinct<S> {
    upstream: S,
}

impl<S> Distinct<S> {
    pub fn new(upstream: S) -> Self {
        Self { upstream }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "distinct"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        let mut seen = HashSet::new();
        Box::new(self.upstream.iter().filter(move |x| seen.insert(x.clone())))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}

/// Distinct elements of `a`, then those of `b` not already yielded.
pub struct Union<A, B> {
    a: A,
    b: B,
}

impl<A, B> Union<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Sequence for Union<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Hash + Eq + Clone,
{
    type Item = A::Item;

    fn name(&self) -> &'static str {
        "union"
    }

    fn iter(&self) -> SeqIter<'_, A::Item> {
        let mut seen = HashSet::new();
        let mut b_iter = None;
        let mut a_iter = Some(self.a.iter());
        let both = std::iter::from_fn(move || {
            if let Some(it) = a_iter.as_mut() {
                if let Some(x) = it.next() {
                    return Some(x);
                }
                a_iter = None;
            }
            b_iter.get_or_insert_with(|| self.b.iter()).next()
        });
        Box::new(both.filter(move |x| seen.insert(x.clone())))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy)
            .with_input(self.a.plan())
            .with_input(self.b.plan())
    }
}

/// Distinct elements of `a` that also occur in `b`, in `a`'s order.
pub struct Intersect<A, B> {
    a: A,
    b: B,
}

impl<A, B> Intersect<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Sequence for Intersect<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Hash + Eq,
{
    type Item = A::Item;

    fn name(&self) -> &'static str {
        "intersect"
    }

    fn iter(&self) -> SeqIter<'_, A::Item> {
        let mut right: HashSet<A::Item> = HashSet::new();
        let mut rows = 0usize;
        for x in self.b.iter() {
            rows += 1;
            right.insert(x);
        }
        trace::materialized(self.name(), rows, right.len());
        // Removing on hit keeps later duplicates in `a` from matching again.
        Box::new(self.a.iter().filter(move |x| right.remove(x)))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Materializing)
            .with_input(self.a.plan())
            .with_input(self.b.plan())
    }
}

/// Distinct elements of `a` that do not occur in `b`, in `a`'s order.
pub struct Except<A, B> {
    a: A,
    b: B,
}

impl<A, B> Except<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Sequence for Except<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Hash + Eq + Clone,
{
    type Item = A::Item;

    fn name(&self) -> &'static str {
        "except"
    }

    fn iter(&self) -> SeqIter<'_, A::Item> {
        // Seeding `seen` with `b` excludes b's elements and dedups `a` at once.
        let mut seen: HashSet<A::Item> = HashSet::new();
        let mut rows = 0usize;
        for x in self.b.iter() {
            rows += 1;
            seen.insert(x);
        }
        trace::materialized(self.name(), rows, seen.len());
        Box::new(self.a.iter().filter(move |x| seen.insert(x.clone())))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Materializing)
            .with_input(self.a.plan())
            .with_input(self.b.plan())
    }
}
