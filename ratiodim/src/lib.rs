//! Dimension-checked physical quantities with exact rational unit conversion.
//!
//! `ratiodim` is the user-facing crate in this workspace. It re-exports the full API from `ratiodim-core` plus a
//! catalog of named units (SI, non-SI, foot–pound–second, temperature scales, prefixes).
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is a zero-sized type describing the unit's dimension
//! and its ratio to the canonical unit of that dimension. Both are rationals computed at compile time, so converting
//! between units is a single multiply by a precomputed factor, and converting between dimensions does not compile.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`).
//! - Keeps integral quantities exact when the conversion factor is a whole number.
//! - Lets composite units (`kg·m·s⁻²`) be written as products of existing units and compared structurally.
//!
//! # What this crate does not try to solve
//!
//! - Parsing or formatting quantities.
//! - Converting *into* an affine scale: Celsius and Fahrenheit values convert out to kelvin, not back.
//!
//! # Quick start
//!
//! ```rust
//! use ratiodim::fps::{Feet, Pound};
//! use ratiodim::si::{Meter, Meters, Newtons};
//! use ratiodim::Quantity;
//!
//! let d = Meters::new(5.0) + Feet::new(5.0);
//! assert!((d.to::<Meter>().value() - 6.524).abs() < 1e-12);
//!
//! let lbf: Quantity<Pound> = Newtons::new(100.0).to();
//! assert!((lbf.value() - 22.4809).abs() < 1e-4);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use ratiodim::si::{Meters, Seconds};
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0); // different dimensions
//! ```
//!
//! # Modules
//!
//! - `ratiodim::si` (base units and the coherent derived units)
//! - `ratiodim::non_si` (minute, hour, day, astronomical unit, hectare, litre, tonne)
//! - `ratiodim::fps` (foot, mile, inch, slug, pound-force, psi, …)
//! - `ratiodim::other` (gram, atmosphere, torr, speeds, rankine, Celsius, Fahrenheit)
//! - `ratiodim::helpers` (`Square`, `Cubic`, `Per`, SI prefixes, `conversion_factor`)
//! - `ratiodim::information` (bit and byte on a custom dimension)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `ratiodim-core`, including the runtime-ratio registry.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the raw value only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! ratiodim = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Static misuse (mismatched dimensions, malformed ratios, integral sums across fractional ratios) is rejected at
//! compile time. Runtime-described units report [`UnitError`]. Floating-point conversions follow IEEE-754 behavior.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use ratiodim_core::*;

/// Derive macro minting a nominal unit marker type.
///
/// This macro expands in terms of `crate::Unit`, `crate::Dimension` and `crate::Ratio`, so it is intended for crates
/// exposing the same crate-root API (such as this one, or a crate that glob-imports it).
pub use ratiodim_derive::Unit;

pub mod units;

pub use units::fps;
pub use units::helpers;
pub use units::information;
pub use units::non_si;
pub use units::other;
pub use units::si;
