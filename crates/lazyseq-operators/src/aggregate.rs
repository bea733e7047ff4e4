//! Aggregation: unseeded fold, numeric sum/average, min/max.
//!
//! Overflow policy: integer sums are checked unless the caller picks another
//! `OverflowPolicy` via `sum_with`. Floats follow IEEE rules and never fail.
//! `average` accumulates in `f64`, so it cannot overflow for any integer width
//! (precision drops past 2^53).

use lazyseq_core::config::OverflowPolicy;
use lazyseq_core::error::{Error, Result};

use crate::traits::Sequence;

/// Numeric element types accepted by `sum` and `average`.
pub trait Numeric: Copy {
    const ZERO: Self;

    /// `None` only when `policy` is `Checked` and the addition overflows.
    fn add(self, rhs: Self, policy: OverflowPolicy) -> Option<Self>;

    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;

                fn add(self, rhs: Self, policy: OverflowPolicy) -> Option<Self> {
                    match policy {
                        OverflowPolicy::Checked => self.checked_add(rhs),
                        OverflowPolicy::Saturating => Some(self.saturating_add(rhs)),
                        OverflowPolicy::Wrapping => Some(self.wrapping_add(rhs)),
                    }
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0.0;

                fn add(self, rhs: Self, _policy: OverflowPolicy) -> Option<Self> {
                    Some(self + rhs)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

pub fn reduce<S, F>(source: &S, mut combine: F) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut it = source.iter();
    let seed = it.next().ok_or(Error::EmptySequence)?;
    Ok(it.fold(seed, |acc, x| combine(acc, x)))
}

pub fn sum<S>(source: &S, policy: OverflowPolicy) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Numeric,
{
    let mut total = <S::Item as Numeric>::ZERO;
    for x in source.iter() {
        total = total.add(x, policy).ok_or(Error::Overflow("sum"))?;
    }
    Ok(total)
}

pub fn average<S>(source: &S) -> Result<f64>
where
    S: Sequence + ?Sized,
    S::Item: Numeric,
{
    let (total, n) = source
        .iter()
        .fold((0.0f64, 0usize), |(t, n), x| (t + x.to_f64(), n + 1));
    if n == 0 {
        return Err(Error::EmptySequence);
    }
    Ok(total / n as f64)
}

/// Smallest element; ties and incomparable values keep the earlier element.
pub fn min<S>(source: &S) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    reduce(source, |best, x| if x < best { x } else { best })
}

/// Largest element; ties and incomparable values keep the earlier element.
pub fn max<S>(source: &S) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    reduce(source, |best, x| if x > best { x } else { best })
}
