//! Element access: first/last/single/element_at.

use lazyseq_core::error::{Error, Result};

use crate::traits::Sequence;

/// First matching element; stops pulling at the match.
pub fn first<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    source.iter().find(|x| predicate(x)).ok_or(Error::EmptySequence)
}

/// Last matching element; always drains the sequence.
pub fn last<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    source
        .iter()
        .filter(|x| predicate(x))
        .last()
        .ok_or(Error::EmptySequence)
}

/// The only matching element. Stops at the second match.
pub fn single<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    single_inner(source, predicate)?.ok_or(Error::EmptySequence)
}

/// Like [`single`] but returns `fallback` when nothing matches. More than one
/// match is still `MultipleMatch`.
pub fn single_or<S, P>(source: &S, predicate: P, fallback: S::Item) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    Ok(single_inner(source, predicate)?.unwrap_or(fallback))
}

fn single_inner<S, P>(source: &S, predicate: P) -> Result<Option<S::Item>>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let mut matches = source.iter().filter(|x| predicate(x));
    let found = matches.next();
    if found.is_some() && matches.next().is_some() {
        return Err(Error::MultipleMatch);
    }
    Ok(found)
}

pub fn element_at<S>(source: &S, index: i64) -> Result<S::Item>
where
    S: Sequence + ?Sized,
{
    let pos = usize::try_from(index).map_err(|_| Error::IndexOutOfRange { index, len: None })?;

    let mut len = 0usize;
    for (i, item) in source.iter().enumerate() {
        if i == pos {
            return Ok(item);
        }
        len = i + 1;
    }
    Err(Error::IndexOutOfRange {
        index,
        len: Some(len),
    })
}
