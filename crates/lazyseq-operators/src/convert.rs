//! Equality and conversion: sequence_equal, to_unique_map, narrow, of-type.
//!
//! Runtime-typed elements are `Dynamic` (`Rc<dyn Any>`). Narrowing requires
//! an exact type match: an `i32` element does not narrow to `i64`.

use std::any::{type_name, Any};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use std::rc::Rc;

use lazyseq_core::error::{Error, Result};

use crate::plan::{Evaluation, OpPlan};
use crate::traits::{SeqIter, Sequence};

/// A type-erased, cheaply clonable element.
pub type Dynamic = Rc<dyn Any>;

pub fn dynamic<T: Any>(value: T) -> Dynamic {
    Rc::new(value)
}

/// Pairwise comparison; false at the first differing pair or length mismatch.
pub fn sequence_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    let mut left = a.iter();
    let mut right = b.iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => continue,
            _ => return false,
        }
    }
}

pub fn to_unique_map<S, K, V, KF, VF>(source: &S, key: KF, value: VF) -> Result<HashMap<K, V>>
where
    S: Sequence + ?Sized,
    KF: Fn(&S::Item) -> K,
    VF: Fn(&S::Item) -> V,
    K: Hash + Eq + Debug,
{
    let mut out = HashMap::new();
    for item in source.iter() {
        match out.entry(key(&item)) {
            Entry::Occupied(e) => return Err(Error::DuplicateKey(format!("{:?}", e.key()))),
            Entry::Vacant(e) => {
                e.insert(value(&item));
            }
        }
    }
    Ok(out)
}

pub fn narrow<S, U>(source: &S) -> Result<Vec<U>>
where
    S: Sequence<Item = Dynamic> + ?Sized,
    U: Any + Clone,
{
    source
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.downcast_ref::<U>().cloned().ok_or(Error::InvalidCast {
                index,
                target: type_name::<U>(),
            })
        })
        .collect()
}

/// Lazily keeps the elements whose runtime type is exactly `U`.
pub struct OfType<S, U> {
    upstream: S,
    _target: PhantomData<fn() -> U>,
}

impl<S, U> OfType<S, U> {
    pub fn new(upstream: S) -> Self {
        Self {
            upstream,
            _target: PhantomData,
        }
    }
}

impl<S, U> Sequence for OfType<S, U>
where
    S: Sequence<Item = Dynamic>,
    U: Any + Clone,
{
    type Item = U;

    fn name(&self) -> &'static str {
        "filter_by_type"
    }

    fn iter(&self) -> SeqIter<'_, U> {
        Box::new(
            self.upstream
                .iter()
                .filter_map(|item| item.downcast_ref::<U>().cloned()),
        )
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}
