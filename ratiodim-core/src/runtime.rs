//! Units whose ratio is configured at runtime.
//!
//! A [`RuntimeUnit`] has a static dimension but no static ratio. Its ratio is looked up in a [`RuntimeRatios`]
//! registry under the unit's [`RuntimeKey`], so every conversion involving the unit takes the registry by
//! reference.
//!
//! The registry is write-once per key: the first [`RuntimeRatios::set`] wins and later writes are rejected with
//! [`UnitError::RatioAlreadySet`]. Reading a key that was never set yields `1/1`.
//!
//! ```rust
//! use ratiodim_core::{dimension::LENGTH, Base, Quantity, Ratio, RuntimeRatios, RuntimeUnit};
//!
//! type Meter = Base<{ LENGTH }>;
//! type Stride = RuntimeUnit<{ LENGTH }, 1>;
//!
//! let ratios = RuntimeRatios::new();
//! ratios.set(Stride::KEY, Ratio::new(3, 4))?;
//!
//! let stride = Stride::from_quantity(Quantity::<Meter>::new(3.0), &ratios);
//! assert_eq!(stride.value(), 4.0);
//! assert_eq!(stride.to::<Meter>(&ratios).value(), 3.0);
//! # Ok::<(), ratiodim_core::UnitError>(())
//! ```

use crate::dimension::Dimension;
use crate::numeric::Numeric;
use core::fmt;

#[cfg(feature = "std")]
use crate::conversion;
#[cfg(feature = "std")]
use crate::descriptor::UnitDescriptor;
#[cfg(feature = "std")]
use crate::error::{Result, UnitError};
#[cfg(feature = "std")]
use crate::quantity::Quantity;
#[cfg(feature = "std")]
use crate::ratio::Ratio;
#[cfg(feature = "std")]
use crate::unit::{Base, Unit};
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::sync::{PoisonError, RwLock};

/// Identity of a runtime unit: its dimension plus a tag distinguishing units of the same dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeKey {
    dimension: Dimension,
    id: u32,
}

impl RuntimeKey {
    /// Creates a key.
    #[inline]
    pub const fn new(dimension: Dimension, id: u32) -> Self {
        Self { dimension, id }
    }

    /// The dimension of the unit.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The distinguishing tag.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for RuntimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.dimension, self.id)
    }
}

/// Write-once registry of runtime unit ratios.
///
/// Safe to share between threads; reads take a shared lock.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct RuntimeRatios {
    ratios: RwLock<HashMap<RuntimeKey, Ratio>>,
}

#[cfg(feature = "std")]
impl RuntimeRatios {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ratio for `key`.
    ///
    /// # Errors
    ///
    /// - [`UnitError::ZeroRatio`] if `ratio` is zero.
    /// - [`UnitError::RatioAlreadySet`] if `key` already has a ratio; the existing one is kept.
    pub fn set(&self, key: RuntimeKey, ratio: Ratio) -> Result<()> {
        if ratio.is_zero() {
            return Err(UnitError::ZeroRatio { key });
        }
        let mut ratios = self.ratios.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(&current) = ratios.get(&key) {
            log::warn!("rejected ratio {ratio} for runtime unit {key}: already set to {current}");
            return Err(UnitError::RatioAlreadySet { key, current });
        }
        ratios.insert(key, ratio);
        log::debug!("runtime unit {key} set to ratio {ratio}");
        Ok(())
    }

    /// The ratio for `key`, or `1/1` if it was never set.
    pub fn get(&self, key: RuntimeKey) -> Ratio {
        let ratios = self.ratios.read().unwrap_or_else(PoisonError::into_inner);
        match ratios.get(&key) {
            Some(&ratio) => ratio,
            None => {
                log::debug!("runtime unit {key} read before its ratio was set; using 1/1");
                Ratio::ONE
            }
        }
    }

    /// Returns `true` if `key` has been set.
    pub fn is_set(&self, key: RuntimeKey) -> bool {
        self.ratios
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }

    /// Number of keys set.
    pub fn len(&self) -> usize {
        self.ratios.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if no key has been set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rescales `value` by an exact factor, or in `f64` when the factor does not fit in `i128`.
#[cfg(feature = "std")]
fn rescale_or_real<F: Numeric, T: Numeric>(value: F, exact: Option<Ratio>, approximate: f64) -> T {
    match exact {
        Some(factor) => conversion::rescale(value, factor),
        None => {
            log::warn!("runtime conversion factor overflows i128; scaling in f64");
            T::from_f64(value.to_f64() * approximate)
        }
    }
}

/// A value in a unit of base dimension `PRIME` whose ratio is held in a [`RuntimeRatios`] registry.
///
/// `ID` tells apart runtime units of the same dimension. The value is stored in the runtime unit itself; converting
/// in or out multiplies by the registered ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuntimeUnit<const PRIME: u64, const ID: u32, V = f64> {
    value: V,
}

impl<const PRIME: u64, const ID: u32, V: Numeric> RuntimeUnit<PRIME, ID, V> {
    /// Dimension of the unit.
    pub const DIMENSION: Dimension = Dimension::from_prime(PRIME);

    /// Registry key of the unit.
    pub const KEY: RuntimeKey = RuntimeKey::new(Self::DIMENSION, ID);

    /// Wraps a value already expressed in this unit.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self { value }
    }

    /// The raw value.
    #[inline]
    pub fn value(self) -> V {
        self.value
    }
}

#[cfg(feature = "std")]
impl<const PRIME: u64, const ID: u32, V: Numeric> RuntimeUnit<PRIME, ID, V> {
    /// The ratio currently registered for this unit.
    pub fn ratio(ratios: &RuntimeRatios) -> Ratio {
        ratios.get(Self::KEY)
    }

    /// Runtime descriptor of this unit under `ratios`.
    pub fn descriptor(ratios: &RuntimeRatios) -> UnitDescriptor {
        UnitDescriptor::new(Self::DIMENSION, Self::ratio(ratios), V::REPRESENTATION)
    }

    /// Converts a statically typed quantity into this unit.
    ///
    /// The factor is `U::RATIO` divided by the registered ratio, so integral values with a whole-number factor are
    /// scaled exactly. Quantities of another dimension do not compile.
    pub fn from_quantity<U: Unit>(quantity: Quantity<U>, ratios: &RuntimeRatios) -> Self {
        let canonical = conversion::factor::<U, Base<PRIME, V>>();
        let ratio = Self::ratio(ratios);
        Self::new(rescale_or_real(
            quantity.value(),
            canonical.checked_div(ratio),
            canonical.to_f64() / ratio.to_f64(),
        ))
    }

    /// Converts this value into a statically typed unit of the same dimension.
    ///
    /// The factor is the registered ratio divided by `T::RATIO`.
    pub fn to<T: Unit>(self, ratios: &RuntimeRatios) -> Quantity<T> {
        let canonical = conversion::factor::<Base<PRIME, V>, T>();
        let ratio = Self::ratio(ratios);
        Quantity::new(rescale_or_real(
            self.value,
            ratio.checked_mul(canonical),
            ratio.to_f64() * canonical.to_f64(),
        ))
    }

    /// Converts this value into a unit described at runtime.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `target` has a different dimension.
    pub fn try_to_descriptor(self, target: &UnitDescriptor, ratios: &RuntimeRatios) -> Result<f64> {
        Self::descriptor(ratios).convert(self.value.to_f64(), target)
    }
}
