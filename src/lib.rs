#![forbid(unsafe_code)]
//! lazyseq: a lazy sequence-combinator engine.
//!
//! Build pipelines of filtering, projection, ordering, grouping, joining and
//! set-algebra operators over a `Sequence`; nothing runs until a terminal
//! operator (`to_list`, `count`, `first`, ...) or a caller's `iter()` pulls.
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let numbers = Source::from(vec![1, 2, 3]);
//! let deferred = (&numbers).filter(|n| *n > 1);
//! numbers.push(4);
//! assert_eq!(deferred.to_list(), vec![2, 3, 4]);
//! ```

pub use lazyseq_core::config::{EngineConfig, OverflowPolicy};
pub use lazyseq_core::error::{Error, Result};
pub use lazyseq_operators::*;

pub mod prelude {
    pub use lazyseq_core::prelude::*;
    pub use lazyseq_operators::{
        dynamic, empty, range, repeat, Direction, Dynamic, Evaluation, Grouping, Numeric, OpPlan,
        Ordered, SeqIter, Sequence, Source,
    };
}
