//! Core type system for dimension-checked quantities.
//!
//! `ratiodim-core` encodes physical dimensions as reduced rationals over primes and unit scales as reduced rationals,
//! so checking and converting units is ordinary rational arithmetic evaluated at compile time:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`]: a [`Dimension`], a [`Ratio`] to the canonical unit of
//!   that dimension, and a [`Numeric`] representation.
//! - Units are built with the constructors [`Base`], [`Scaled`], [`Inverse`], [`Multi`], [`Specified`] and
//!   [`SpecifiedAs`]; affine scales use [`Offset`] and runtime-configured scales use [`RuntimeUnit`].
//! - A value tagged with a unit is a [`Quantity<U>`]. Conversion is explicit via [`Quantity::to`].
//!
//! Most users should depend on `ratiodim` (the facade crate), which also ships a catalog of named units.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of conversions and sums between different dimensions.
//! - Exact, reduced conversion factors computed once per pair of units, at compile time.
//! - Exact integer scaling when the destination is integral and the factor is a whole number.
//! - Custom orthogonal dimensions on any prime `>= 17`, isolated from the six reserved base dimensions.
//!
//! # What this crate does not try to solve
//!
//! - Parsing or formatting quantities.
//! - A bidirectional affine algebra: [`Offset`] values only convert out to their base unit.
//!
//! # Dimension encoding
//!
//! | Base dimension | Prime |
//! |---|---|
//! | mass | 2 |
//! | length | 3 |
//! | time | 5 |
//! | temperature | 7 |
//! | current | 11 |
//! | luminous intensity | 13 |
//!
//! A composite dimension is the product of its bases raised to their exponents: force (`kg·m·s⁻²`) is
//! `2·3/5² = 6/25`. Unique factorization makes this encoding collision-free.
//!
//! # Quick start
//!
//! ```rust
//! use ratiodim_core::dimension::{LENGTH, MASS, TIME};
//! use ratiodim_core::{Base, Inverse, Multi, Quantity, Scaled};
//!
//! type Kilogram = Base<{ MASS }>;
//! type Meter = Base<{ LENGTH }>;
//! type Second = Base<{ TIME }>;
//! type Foot = Scaled<Meter, 3048, 10_000>;
//! type Newton = Multi<(Kilogram, Meter, Inverse<Second>, Inverse<Second>)>;
//!
//! let d = Quantity::<Meter>::new(5.0) + Quantity::<Foot>::new(5.0);
//! assert!((d.to::<Meter>().value() - 6.524).abs() < 1e-12);
//!
//! let a = Quantity::<Meter>::new(2.0) / Quantity::<Second>::new(1.0) / Quantity::<Second>::new(1.0);
//! let f: Quantity<Newton> = (Quantity::<Kilogram>::new(3.0) * a).to();
//! assert_eq!(f.value(), 6.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `ratiodim-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! ratiodim-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! Without `std` the [`RuntimeRatios`] registry and the conversions that read it are unavailable.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support and the runtime-ratio registry.
//! - `serde`: enables `serde` support for [`Quantity<U>`] (serialized as the raw value), [`Offset`], [`RuntimeUnit`],
//!   [`Ratio`], [`Dimension`] and [`UnitDescriptor`].
//!
//! # Panics and errors
//!
//! Statically described units are checked while the program is compiled: a conversion between different dimensions,
//! an integral sum across a fractional ratio, a zero denominator in a unit's ratio or a reserved-prime violation are
//! compile errors. Runtime entry points ([`Ratio::try_new`], [`Dimension::try_custom`], [`UnitDescriptor`]
//! conversions and [`RuntimeRatios::set`]) return [`UnitError`]. Floating-point conversions follow IEEE-754 behavior.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod conversion;
mod descriptor;
pub mod dimension;
mod error;
pub mod numeric;
mod offset;
mod ops;
mod quantity;
mod ratio;
mod runtime;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use descriptor::{convert_value, UnitDescriptor};
pub use dimension::{BaseDimension, Dimension};
pub use error::UnitError;
pub use numeric::{Numeric, Promote, Representation};
pub use offset::Offset;
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use runtime::{RuntimeKey, RuntimeUnit};
pub use unit::{Base, Inverse, Multi, Scaled, Specified, SpecifiedAs, Unit, UnitList, Unitless};

#[cfg(feature = "std")]
pub use runtime::RuntimeRatios;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::dimension::LENGTH;

    type Meter = Base<{ LENGTH }>;
    type Foot = Scaled<Meter, 3048, 10_000>;

    #[test]
    fn quantity_serializes_as_raw_value() {
        let q = Quantity::<Foot>::new(12.5);
        assert_eq!(serde_json::to_string(&q).unwrap(), "12.5");
        let back: Quantity<Foot> = serde_json::from_str("12.5").unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn offset_serializes_as_raw_value() {
        type Celsius = Offset<Base<{ dimension::TEMPERATURE }>, 27315, 100>;
        let c = Celsius::new(21.0);
        assert_eq!(serde_json::to_string(&c).unwrap(), "21.0");
        let back: Celsius = serde_json::from_str("21.0").unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn descriptor_roundtrips() {
        let desc = Foot::DESCRIPTOR;
        let json = serde_json::to_string(&desc).unwrap();
        let back: UnitDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, desc);
    }

    #[test]
    fn malformed_ratio_is_rejected() {
        assert!(serde_json::from_str::<Ratio>("[1, 0]").is_err());
        assert_eq!(serde_json::from_str::<Ratio>("[2, 4]").unwrap(), Ratio::new(1, 2));
    }
}
