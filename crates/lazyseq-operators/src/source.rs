//! Materialized sources.
//!
//! `Source<T>` is a shared handle to a growable buffer. Pipelines built over a
//! `Source` read it at enumeration time, so elements pushed after composition
//! are visible to later passes.
//!
//! Mutating the buffer while an enumeration over it is in progress is allowed
//! (each pull re-borrows) but the elements observed by that pass are then the
//! caller's problem.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::plan::{Evaluation, OpPlan};
use crate::traits::{SeqIter, Sequence};

pub struct Source<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> Source<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    pub fn push(&self, value: T) {
        self.items.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

impl<T: Clone> Source<T> {
    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

// Handles share one buffer; cloning never copies elements.
impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for Source<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Source").field(&*self.items.borrow()).finish()
    }
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Source<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Source<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // `iter` may itself be reading this buffer.
        let incoming: Vec<T> = iter.into_iter().collect();
        self.items.borrow_mut().extend(incoming);
    }
}

impl<T: Clone> Sequence for Source<T> {
    type Item = T;

    fn name(&self) -> &'static str {
        "source"
    }

    fn iter(&self) -> SeqIter<'_, T> {
        Box::new(SourceIter {
            items: &self.items,
            pos: 0,
        })
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Source)
    }
}

/// Index cursor that re-borrows the buffer on every pull.
struct SourceIter<'a, T> {
    items: &'a RefCell<Vec<T>>,
    pos: usize,
}

impl<T: Clone> Iterator for SourceIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.borrow().get(self.pos).cloned()?;
        self.pos += 1;
        Some(item)
    }
}

/// Borrowed slices are fixed materialized sources; use `&v[..]` or
/// `v.as_slice()` to compose over a `Vec`.
///
/// `Vec<T>` is intentionally not a `Sequence`: `Sequence::iter`/`first`/`last`
/// would shadow the slice methods of the same name on every `Vec` in scope.
impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn name(&self) -> &'static str {
        "slice"
    }

    fn iter(&self) -> SeqIter<'_, T> {
        Box::new(<[T]>::iter(self).cloned())
    }

    fn plan(&self) -> OpPlan {
        OpPlan::new(self.name(), Evaluation::Source)
    }
}
