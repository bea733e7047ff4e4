//! Join operators.
//!
//! Only the hash inner join exists: it indexes the inner side, then streams
//! the outer side and probes.

pub mod hash;

pub use hash::InnerJoin;
