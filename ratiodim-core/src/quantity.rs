//! Quantity type and its conversions.

use crate::conversion::{self, Conversion, Passthrough};
use crate::descriptor::UnitDescriptor;
use crate::error::UnitError;
use crate::numeric::Numeric;
use crate::unit::{SpecifiedAs, Unit};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value tagged with a unit.
///
/// `Quantity<U>` holds a single `U::Value` and carries `U` only at the type level, so it has the size of the bare
/// number. Quantities are never rescaled in place: conversions and arithmetic return new quantities.
///
/// # Examples
///
/// ```rust
/// use ratiodim_core::{dimension::LENGTH, Base, Quantity, Scaled};
///
/// type Meter = Base<{ LENGTH }>;
/// type Kilometer = Scaled<Meter, 1000>;
///
/// let km = Quantity::<Kilometer>::new(1.25);
/// let m: Quantity<Meter> = km.to();
/// assert_eq!(m.value(), 1250.0);
/// ```
///
/// Units of different dimensions do not convert:
///
/// ```compile_fail
/// use ratiodim_core::{dimension::{LENGTH, TIME}, Base, Quantity};
///
/// let m = Quantity::<Base<{ LENGTH }>>::new(1.0);
/// let s: Quantity<Base<{ TIME }>> = m.to();
/// ```
pub struct Quantity<U: Unit>(U::Value, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity with the given value.
    #[inline]
    pub const fn new(value: U::Value) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub fn value(self) -> U::Value {
        self.0
    }

    /// The static descriptor of `U`.
    #[inline]
    pub const fn descriptor(&self) -> UnitDescriptor {
        U::DESCRIPTOR
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// The factor `U::RATIO / T::RATIO` is computed at compile time. With an integral `T::Value` and a whole-number
    /// factor the scaling is exact integer arithmetic.
    ///
    /// ```rust
    /// use ratiodim_core::{dimension::LENGTH, Base, Quantity, Scaled};
    ///
    /// type Meter = Base<{ LENGTH }, i64>;
    /// type Kilometer = Scaled<Meter, 1000>;
    ///
    /// let m: Quantity<Meter> = Quantity::<Kilometer>::new(9_007_199_254_741).to();
    /// assert_eq!(m.value(), 9_007_199_254_741_000);
    /// ```
    #[inline]
    pub fn to<T: Unit>(self) -> Quantity<T> {
        let factor = Conversion::<U, T>::FACTOR;
        Quantity::new(conversion::rescale(self.0, factor))
    }

    /// Re-types this quantity to representation `V` without changing its unit.
    #[inline]
    pub fn cast<V: Numeric>(self) -> Quantity<SpecifiedAs<U, V>> {
        self.to()
    }

    /// Unwraps the value of a unit with ratio `1/1`.
    ///
    /// This is the passthrough between canonical quantities and plain numeric code; using it on a unit with any
    /// other ratio fails to compile.
    ///
    /// ```rust
    /// use ratiodim_core::{dimension::TIME, Base, Quantity};
    ///
    /// let s = Quantity::<Base<{ TIME }>>::new(2.5);
    /// let raw: f64 = s.into_number();
    /// assert_eq!(raw, 2.5);
    /// ```
    ///
    /// ```compile_fail
    /// use ratiodim_core::{dimension::LENGTH, Base, Quantity, Scaled};
    ///
    /// type Meter = Base<{ LENGTH }>;
    /// let _ = Quantity::<Scaled<Meter, 3048, 10_000>>::new(1.0).into_number();
    /// ```
    #[inline]
    pub fn into_number(self) -> U::Value {
        let () = Passthrough::<U>::CHECK;
        self.0
    }

    /// Wraps a bare number as a quantity of a unit with ratio `1/1`.
    ///
    /// ```compile_fail
    /// use ratiodim_core::{dimension::LENGTH, Base, Quantity, Scaled};
    ///
    /// type Kilometer = Scaled<Base<{ LENGTH }>, 1000>;
    /// let _ = Quantity::<Kilometer>::from_number(1.0);
    /// ```
    #[inline]
    pub fn from_number(value: U::Value) -> Self {
        let () = Passthrough::<U>::CHECK;
        Self::new(value)
    }

    /// Converts into a unit known only at runtime.
    ///
    /// Returns [`UnitError::DimensionMismatch`] when `target` has a different dimension.
    pub fn try_to_descriptor(self, target: &UnitDescriptor) -> Result<f64, UnitError> {
        U::DESCRIPTOR.convert(self.0.to_f64(), target)
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

// Manual impls keep the bounds on `U::Value` only; unit markers need not implement these traits.

impl<U: Unit> Clone for Quantity<U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for Quantity<U> {}

impl<U: Unit> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quantity").field(&self.0).finish()
    }
}

impl<U: Unit> Default for Quantity<U> {
    #[inline]
    fn default() -> Self {
        Self::new(U::Value::default())
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U>
where
    U::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U>
where
    U::Value: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        U::Value::deserialize(deserializer).map(Quantity::new)
    }
}
