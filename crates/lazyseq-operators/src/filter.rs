//! Filter operator.

use crate::plan::{Evaluation, OpPlan};
use crate::traits::{SeqIter, Sequence};

/// Yields upstream elements satisfying `predicate`.
///
/// The predicate runs on every enumeration; results are never cached.
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "filter"
    }

    fn iter(&self) -> SeqIter<'_, S::Item> {
        Box::new(self.upstream.iter().filter(move |x| (self.predicate)(x)))
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Lazy).with_input(self.upstream.plan())
    }
}
