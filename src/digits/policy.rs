//! Filtering policy for the digit extractor — which values enter the sample.
//!
//! Purpose
//! -------
//! Provide the small plain-data configuration types that decide, before any
//! digit is extracted, which raw values participate in the analysis
//! (zeros, negatives) and how non-finite values are treated (fail fast or
//! exclude and continue).
//!
//! Key behaviors
//! -------------
//! - [`FilterPolicy`] captures the two exclusion switches the hosting layer
//!   exposes to users: ignore zeros and ignore negatives.
//! - [`NonFiniteHandling`] selects between surfacing the first NaN/±∞ as an
//!   error and silently dropping (but tallying) such values.
//! - Both types are `Copy`, carry `Default` values matching the original
//!   tool's defaults, and contain no invariants beyond their fields.
//!
//! Invariants & assumptions
//! ------------------------
//! - Policies are applied exactly once, before digit extraction; excluded
//!   values are dropped, not replaced.
//! - Exact zeros never have a leading digit and are excluded regardless of
//!   `ignore_zeros`; the flag exists so hosts can distinguish "user chose
//!   to drop zeros" from "zero has no defined digit" in their messaging.
//!
//! Downstream usage
//! ----------------
//! - [`crate::digits::extract`] consumes a [`FilterPolicy`] per value.
//! - [`crate::distribution::ObservedDistribution::from_sequence`] consumes
//!   both types while aggregating a full sequence.

/// FilterPolicy — exclusion switches applied before digit extraction.
///
/// Purpose
/// -------
/// Represent the host-configurable value filters for a Benford analysis
/// run: whether zeros and negative values are excluded from the sample.
///
/// Fields
/// ------
/// - `ignore_zeros`: `bool`
///   Drop values equal to zero. Defaults to `true`: Benford's Law applies
///   to significant numbers, and zero has no leading digit either way.
/// - `ignore_negatives`: `bool`
///   Drop values strictly below zero. Defaults to `false`: the leading
///   digit is taken from the absolute value, so negatives are analyzable
///   unless the host opts out.
///
/// Invariants
/// ----------
/// - None beyond the field types; any combination of flags is valid.
///
/// Performance
/// -----------
/// - `Copy`; passed by value everywhere.
///
/// Notes
/// -----
/// - Exact zeros are excluded even when `ignore_zeros` is `false`, since a
///   leading digit is undefined for zero. See [`crate::digits::extract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Drop values equal to zero (default `true`).
    pub ignore_zeros: bool,
    /// Drop values strictly below zero (default `false`).
    pub ignore_negatives: bool,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        FilterPolicy { ignore_zeros: true, ignore_negatives: false }
    }
}

impl FilterPolicy {
    /// Construct a policy from the two exclusion switches.
    pub fn new(ignore_zeros: bool, ignore_negatives: bool) -> Self {
        FilterPolicy { ignore_zeros, ignore_negatives }
    }
}

/// NonFiniteHandling — how NaN/±∞ input values are treated.
///
/// Purpose
/// -------
/// Select the engine's reaction to non-finite input. The default fails
/// fast on the first occurrence to surface data-quality issues; hosts that
/// prefer to analyze what remains can opt into exclusion, in which case
/// dropped values are tallied on the result.
///
/// Notes
/// -----
/// - Under `Exclude`, non-finite values count toward the "excluded"
///   accounting exposed by
///   [`ExclusionTally`](crate::distribution::ExclusionTally) and are never
///   silently lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonFiniteHandling {
    /// Abort the run with
    /// [`BenfordError::NonFiniteValue`](crate::errors::BenfordError) on
    /// the first NaN/±∞.
    #[default]
    Fail,
    /// Drop non-finite values, tally them, and continue.
    Exclude,
}
