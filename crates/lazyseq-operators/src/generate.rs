//! Generators: sequences computed without an upstream.

use std::marker::PhantomData;

use lazyseq_core::error::{Error, Result};

use crate::plan::{Evaluation, OpPlan};
use crate::traits::{SeqIter, Sequence};

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i32,
    count: i32,
}

/// Fails if `count` is negative or the last value would exceed `i32::MAX`.
pub fn range(start: i32, count: i32) -> Result<Range> {
    if count < 0 {
        return Err(Error::InvalidArgument(format!(
            "range count must be non-negative, got {count}"
        )));
    }
    if i64::from(start) + i64::from(count) - 1 > i64::from(i32::MAX) {
        return Err(Error::InvalidArgument(format!(
            "range({start}, {count}) overflows i32"
        )));
    }
    Ok(Range { start, count })
}

impl Sequence for Range {
    type Item = i32;

    fn name(&self) -> &'static str {
        "range"
    }

    fn iter(&self) -> SeqIter<'_, i32> {
        // Validated in `range`, so `start + i` cannot overflow.
        let start = self.start;
        Box::new((0..self.count).map(move |i| start + i))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Generated)
    }
}

/// `value` repeated `count` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<T> {
    value: T,
    count: usize,
}

pub fn repeat<T: Clone>(value: T, count: i32) -> Result<Repeat<T>> {
    let count = usize::try_from(count).map_err(|_| {
        Error::InvalidArgument(format!("repeat count must be non-negative, got {count}"))
    })?;
    Ok(Repeat { value, count })
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn name(&self) -> &'static str {
        "repeat"
    }

    fn iter(&self) -> SeqIter<'_, T> {
        Box::new((0..self.count).map(move |_| self.value.clone()))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Generated)
    }
}

/// A sequence that never yields.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn name(&self) -> &'static str {
        "empty"
    }

    fn iter(&self) -> SeqIter<'_, T> {
        Box::new(std::iter::empty())
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Generated)
    }
}
