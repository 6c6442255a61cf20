//! Error type for the runtime entry points.
//!
//! Statically described units are checked by the compiler and never produce these errors; only ratios built from
//! runtime integers, descriptors compared at runtime and the runtime-ratio registry return [`UnitError`].

use crate::dimension::Dimension;
use crate::ratio::Ratio;
use crate::runtime::RuntimeKey;

/// Errors raised by runtime construction and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// A ratio was built with a zero denominator.
    #[error("malformed ratio: {numerator}/0 has a zero denominator")]
    ZeroDenominator {
        /// Numerator of the rejected ratio.
        numerator: i128,
    },

    /// A custom base dimension was requested on a value that is not an unreserved prime.
    #[error("{value} cannot be used as a base dimension: custom dimensions must be primes >= 17")]
    InvalidBaseDimension {
        /// The rejected value.
        value: u64,
    },

    /// Two descriptors with different dimensions were combined.
    #[error("dimension mismatch: {from} is not equivalent to {to}")]
    DimensionMismatch {
        /// Dimension of the source unit.
        from: Dimension,
        /// Dimension of the target unit.
        to: Dimension,
    },

    /// A runtime unit ratio was written twice.
    #[error("runtime ratio for {key} is already set to {current}")]
    RatioAlreadySet {
        /// Identity of the runtime unit.
        key: RuntimeKey,
        /// The ratio that stays in effect.
        current: Ratio,
    },

    /// A runtime unit ratio of zero was supplied.
    #[error("runtime ratio for {key} must be non-zero")]
    ZeroRatio {
        /// Identity of the runtime unit.
        key: RuntimeKey,
    },

    /// Ratio arithmetic overflowed `i128`.
    #[error("ratio arithmetic overflowed i128")]
    Overflow,
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, UnitError>;
