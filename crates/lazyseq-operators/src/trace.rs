//! Tracing hooks for materializing operators.
//!
//! Compiled to no-ops unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
pub(crate) fn materialized(op: &'static str, rows: usize, keys: usize) {
    tracing::trace!(op, rows, keys, "materialized auxiliary index");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn materialized(_op: &'static str, _rows: usize, _keys: usize) { /* no-op */
}
