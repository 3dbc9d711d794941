//! Error type shared by every fallible operation of the crate.
//!
//! Errors are always reported before any state is mutated, so a counter that
//! returned an error is left exactly as it was before the call.

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Precision outside of the supported `[4, 18]` range.
    #[error("precision {0} is outside of the supported range [4, 18]")]
    InvalidPrecision(u8),

    /// Merge attempted between counters of different precision.
    #[error("cannot merge counters of precision {left} and {right}")]
    PrecisionMismatch { left: u8, right: u8 },

    /// Internal invariant broken; never caused by caller input.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// Bit range `lo..hi` does not fit into a `width`-bit word.
    #[error("bit range {lo}..{hi} does not fit into {width} bits")]
    BitRange { hi: u32, lo: u32, width: u32 },

    /// Malformed bias-correction reference row.
    #[error("invalid bias correction table: {0}")]
    InvalidBiasTable(&'static str),

    /// Externally supplied counter state violating the data model.
    #[error("invalid counter state: {0}")]
    InvalidState(&'static str),
}
