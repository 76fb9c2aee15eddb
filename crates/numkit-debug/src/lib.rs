#![deny(missing_docs)]

//! Debug-build checks with ULP-tolerant floating-point comparison.
//!
//! The macro family (`check!`, `expect_eq!` and friends,
//! `expect_non_null!`) is active only in debug builds; in release
//! builds every invocation compiles away entirely and its arguments are
//! never evaluated. A failed check writes a diagnostic record naming
//! the source location, the enclosing function and both operand values
//! to stdout, mirrors it through the [`log`] facade, then traps the
//! process for debugger inspection. Failed checks are not an error
//! handling path: release code must never depend on them for input
//! validation.
//!
//! Floating-point equality is approximate. Two floats compare equal
//! when they are at most [`MAX_ULPS`] units in the last place apart;
//! mixed `f32`/`f64` operands are widened to `f64` first. Relational
//! comparisons stay exact.
//!
//! ```no_run
//! use numkit_debug::{check, expect_eq};
//!
//! let samples = vec![0.1_f64; 10];
//! check!(!samples.is_empty());
//! expect_eq!(samples.iter().sum::<f64>(), 1.0_f64);
//! ```

pub mod cmp;
mod macros;
pub mod nullcheck;
pub mod report;

pub use cmp::{
    almost_eq_f32, almost_eq_f64, ulps_between_f32, ulps_between_f64, CmpOp, Pair, MAX_ULPS,
};
pub use nullcheck::Nullable;
