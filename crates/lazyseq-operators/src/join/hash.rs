//! Hash inner join.
//!
//! Build: index `inner` by `inner_key`, each bucket in inner order.
//! Probe: stream `outer`; per outer element, emit one result per bucket member
//! (bucket order). Outer elements with no bucket emit nothing.
//!
//! The index is built when an enumeration is opened and dropped with it.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::plan::{Evaluation, OpPlan};
use crate::trace;
use crate::traits::{SeqIter, Sequence};

pub struct InnerJoin<O, I, OK, IK, R, K, U> {
    outer: O,
    inner: I,
    outer_key: OK,
    inner_key: IK,
    result: R,
    _types: PhantomData<fn() -> (K, U)>,
}

impl<O, I, OK, IK, R, K, U> InnerJoin<O, I, OK, IK, R, K, U> {
    pub fn new(outer: O, inner: I, outer_key: OK, inner_key: IK, result: R) -> Self {
        Self {
            outer,
            inner,
            outer_key,
            inner_key,
            result,
            _types: PhantomData,
        }
    }
}

impl<O, I, OK, IK, R, K, U> Sequence for InnerJoin<O, I, OK, IK, R, K, U>
where
    O: Sequence,
    I: Sequence,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(&O::Item, &I::Item) -> U,
    K: Hash + Eq,
{
    type Item = U;

    fn name(&self) -> &'static str {
        "join"
    }

    fn iter(&self) -> SeqIter<'_, U> {
        let mut index: HashMap<K, Vec<I::Item>> = HashMap::new();
        let mut rows = 0usize;
        for item in self.inner.iter() {
            rows += 1;
            index.entry((self.inner_key)(&item)).or_default().push(item);
        }
        trace::materialized(self.name(), rows, index.len());

        Box::new(ProbeIter {
            outer: self.outer.iter(),
            index,
            outer_key: &self.outer_key,
            result: &self.result,
            current: None,
            pos: 0,
        })
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Materializing)
            .with_input(self.outer.plan())
            .with_input(self.inner.plan())
    }
}

/// Probe side: walks the current outer element's bucket before pulling the
/// next outer element.
struct ProbeIter<'a, T, V, K, OK, R> {
    outer: SeqIter<'a, T>,
    index: HashMap<K, Vec<V>>,
    outer_key: &'a OK,
    result: &'a R,
    current: Option<(T, K)>,
    pos: usize,
}

impl<T, V, K, OK, R, U> Iterator for ProbeIter<'_, T, V, K, OK, R>
where
    OK: Fn(&T) -> K,
    R: Fn(&T, &V) -> U,
    K: Hash + Eq,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            if let Some((outer, key)) = &self.current {
                if let Some(member) = self.index.get(key).and_then(|b| b.get(self.pos)) {
                    self.pos += 1;
                    return Some((self.result)(outer, member));
                }
                self.current = None;
            }

            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            if self.index.contains_key(&key) {
                self.current = Some((outer, key));
                self.pos = 0;
            }
        }
    }
}
