//! Operator plans: a serializable description of a composed pipeline.
//!
//! Plans mirror the order operators were composed in. Nothing here rewrites
//! or reorders; `plan()` is purely descriptive and never pulls an element.

use serde::{Deserialize, Serialize};

use crate::sort::Direction;

/// How an operator produces its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    /// Backed by an already-allocated container.
    Source,
    /// Computed algorithmically with no upstream.
    Generated,
    /// Streams from its upstream one element at a time.
    Lazy,
    /// Buffers some or all of its upstream into an index before yielding.
    Materializing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpPlan {
    pub op: String,
    pub evaluation: Evaluation,

    /// Upstream plans in argument order (outer before inner, `a` before `b`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<OpPlan>,

    /// Declared sort directions, only set by ordering operators.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<Direction>,
}

impl OpPlan {
    pub fn new(op: impl Into<String>, evaluation: Evaluation) -> Self {
        Self {
            op: op.into(),
            evaluation,
            inputs: vec![],
            keys: vec![],
        }
    }

    pub fn with_input(mut self, input: OpPlan) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_keys(mut self, keys: Vec<Direction>) -> Self {
        self.keys = keys;
        self
    }

    /// Longest chain from this node down to a leaf, counting this node.
    pub fn depth(&self) -> usize {
        1 + self.inputs.iter().map(OpPlan::depth).max().unwrap_or(0)
    }

    /// Names of materializing operators, upstream first.
    pub fn materializing_ops(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_materializing(&mut out);
        out
    }

    fn collect_materializing<'a>(&'a self, out: &mut Vec<&'a str>) {
        for input in &self.inputs {
            input.collect_materializing(out);
        }
        if self.evaluation == Evaluation::Materializing {
            out.push(&self.op);
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
