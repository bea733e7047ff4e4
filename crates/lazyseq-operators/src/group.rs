//! Grouping operator.
//!
//! One forward pass builds a key -> bucket index plus the list of keys in
//! first-occurrence order. No group is yielded until the whole upstream has
//! been consumed, since any bucket may still grow at the last element.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::plan::{Evaluation, OpPlan};
use crate::trace;
use crate::traits::{SeqIter, Sequence};

/// A key and its members, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    key: K,
    members: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn new(key: K, members: Vec<T>) -> Self {
        Self { key, members }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn members(&self) -> &[T] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.members)
    }
}

/// A grouping is itself a materialized sequence of its members.
impl<K, T: Clone> Sequence for Grouping<K, T> {
    type Item = T;

    fn name(&self) -> &'static str {
        "grouping"
    }

    fn iter(&self) -> SeqIter<'_, T> {
        Box::new(self.members.iter().cloned())
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Source)
    }
}

pub struct GroupBy<S, F, K> {
    upstream: S,
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<S, F, K> GroupBy<S, F, K> {
    pub fn new(upstream: S, key: F) -> Self {
        Self {
            upstream,
            key,
            _key: PhantomData,
        }
    }
}

impl<S, F, K> Sequence for GroupBy<S, F, K>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq + Clone,
{
    type Item = Grouping<K, S::Item>;

    fn name(&self) -> &'static str {
        "group_by"
    }

    fn iter(&self) -> SeqIter<'_, Self::Item> {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<Grouping<K, S::Item>> = Vec::new();
        let mut rows = 0usize;

        for item in self.upstream.iter() {
            rows += 1;
            let key = (self.key)(&item);
            match index.get(&key) {
                Some(&slot) => groups[slot].members.push(item),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(Grouping::new(key, vec![item]));
                }
            }
        }

        trace::materialized(self.name(), rows, groups.len());
        Box::new(groups.into_iter())
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Materializing).with_input(self.upstream.plan())
    }
}
