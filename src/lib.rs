//! Table-driven character substitution for Unicode text.
//!
//! Re-exports the `moji-core` API and adds process-level setup.

mod trace_init;

pub use moji_core::*;
pub use trace_init::init_tracing;
