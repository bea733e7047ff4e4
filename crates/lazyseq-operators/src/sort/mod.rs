//! Ordering operator: stable multi-key sort.
//!
//! `order_by` starts an ordered-key tuple; each `then_by` appends a key that
//! only breaks ties left by the keys before it. Elements equal on every key
//! keep their upstream (insertion) order.

pub mod keys;

pub use keys::{ByKey, Comparator, Direction, ThenBy};

use crate::plan::{Evaluation, OpPlan};
use crate::trace;
use crate::traits::{SeqIter, Sequence};

pub struct Ordered<S, C> {
    upstream: S,
    keys: C,
}

impl<S, C> Ordered<S, C> {
    pub fn new(upstream: S, keys: C) -> Self {
        Self { upstream, keys }
    }
}

impl<S, C> Ordered<S, C>
where
    S: Sequence,
    C: Comparator<S::Item>,
{
    pub fn then_by<K, F>(self, key: F) -> Ordered<S, ThenBy<C, ByKey<F, K>>>
    where
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        Ordered {
            upstream: self.upstream,
            keys: ThenBy::new(self.keys, ByKey::new(key, Direction::Ascending)),
        }
    }

    pub fn then_by_descending<K, F>(self, key: F) -> Ordered<S, ThenBy<C, ByKey<F, K>>>
    where
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        Ordered {
            upstream: self.upstream,
            keys: ThenBy::new(self.keys, ByKey::new(key, Direction::Descending)),
        }
    }
}

impl<S, C> Sequence for Ordered<S, C>
where
    S: Sequence,
    C: Comparator<S::Item>,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "order_by"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        let mut buf: Vec<S::Item> = self.upstream.iter().collect();
        trace::materialized(self.name(), buf.len(), self.keys.arity());
        // `sort_by` is a stable merge sort.
        buf.sort_by(|a, b| self.keys.compare(a, b));
        Box::new(buf.into_iter())
    }

    fn plan(&self) -> OpPlan {
        let mut dirs = Vec::with_capacity(self.keys.arity());
        self.keys.directions(&mut dirs);
        OpPlan::new(self.name(), Evaluation::Materializing)
            .with_input(self.upstream.plan())
            .with_keys(dirs)
    }
}
