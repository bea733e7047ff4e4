#![forbid(unsafe_code)]
//! lazyseq-operators: pull-based sequence operators (filter/map/sort/group/join/...).
//!
//! Design intent:
//! - Every non-terminal operator is a small owned descriptor over its upstream.
//!   Nothing is pulled until a terminal operator (or a caller) opens an
//!   enumeration with `Sequence::iter`.
//! - Each `iter()` call is an independent pass; descriptors hold no progress.
//! - Ordering, grouping, joins and the set operators that need a lookup
//!   (`intersect`, `except`) buffer upstream into an index scoped to that one
//!   enumeration.
//! - Single-threaded. `Source` uses `Rc<RefCell<_>>` and is deliberately `!Send`.

pub mod plan;
pub mod traits;

pub mod source;
pub mod generate;

pub mod concat;
pub mod filter;
pub mod map;
pub mod partition;

pub mod group;
pub mod join;
pub mod set;
pub mod sort;

pub mod aggregate;
pub mod convert;
pub mod element;
pub mod quantify;

mod trace;

pub use generate::{empty, range, repeat};
pub use plan::{Evaluation, OpPlan};
pub use source::Source;
pub use traits::{SeqIter, Sequence};

pub use aggregate::Numeric;
pub use convert::{dynamic, Dynamic};
pub use group::Grouping;
pub use sort::{Direction, Ordered};
