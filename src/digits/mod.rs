//! digits — leading-digit extraction and filter policy.
//!
//! Purpose
//! -------
//! First stage of the Benford pipeline: decide which raw values enter the
//! sample ([`FilterPolicy`], [`NonFiniteHandling`]) and derive the leading
//! significant digit of each admitted value ([`extract`]).
//!
//! Key behaviors
//! -------------
//! - Per-value classification into a digit in [1, 9] or a typed exclusion
//!   ([`Extraction`], [`ExclusionReason`]); sign and scale are ignored.
//! - No aggregation and no error construction here; the
//!   [`distribution`](crate::distribution) subtree owns both.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`LeadingDigit`] values always lie in [1, 9].
//! - Classification is total: every `f64`, including NaN and ±∞, maps to
//!   exactly one [`Extraction`].
//!
//! Downstream usage
//! ----------------
//! - Typical callers use the pipeline entry point
//!   [`BenfordOutcome::analyze`](crate::analysis::BenfordOutcome::analyze)
//!   and never touch this subtree directly; it is public for hosts that
//!   want per-value classification (e.g. row-level drill-down views).
//!
//! Testing notes
//! -------------
//! - Unit tests in [`extract`](mod@extract) cover scale/sign invariance,
//!   all exclusion branches, and the digit range invariant; tests in
//!   [`policy`] pin the default switches.

pub mod extract;
pub mod policy;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::extract::{extract, ExclusionReason, Extraction, LeadingDigit};
pub use self::policy::{FilterPolicy, NonFiniteHandling};
