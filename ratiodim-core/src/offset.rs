//! Affine units: a base unit shifted by a constant.
//!
//! An [`Offset<U, N, D>`](Offset) value `v` stands for `v + N/D` in `U`. Celsius is kelvin shifted by `273.15`,
//! Fahrenheit is rankine shifted by `459.67`.
//!
//! Offset values only convert *out*: first into `U` by adding the offset, then onward to any unit of `U`'s dimension
//! through the ordinary ratio conversion. There is no route from a plain quantity back into an offset unit, and offset
//! values do not take part in arithmetic.

use crate::numeric::Numeric;
use crate::quantity::Quantity;
use crate::ratio::Ratio;
use crate::unit::Unit;
use core::marker::PhantomData;

/// A value of `U` shifted by `NUM/DEN`, held as `V`.
///
/// ```rust
/// use ratiodim_core::{dimension::TEMPERATURE, Base, Offset, Quantity};
///
/// type Kelvin = Base<{ TEMPERATURE }>;
/// type Celsius = Offset<Kelvin, 27315, 100>;
///
/// let k: Quantity<Kelvin> = Celsius::new(25.0).to();
/// assert!((k.value() - 298.15).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Offset<U, const NUM: i128, const DEN: i128 = 1, V = f64> {
    value: V,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

impl<U: Unit, const NUM: i128, const DEN: i128, V: Numeric> Offset<U, NUM, DEN, V> {
    /// The shift added to a value to express it in `U`.
    pub const OFFSET: Ratio = Ratio::new(NUM, DEN);

    /// Creates an offset value.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// The raw value, before the offset is applied.
    #[inline]
    pub fn value(self) -> V {
        self.value
    }

    /// Expresses this value in the base unit `U`.
    ///
    /// The shift is applied in `f64` and the sum is then narrowed to `U::Value`.
    #[inline]
    pub fn to_base(self) -> Quantity<U> {
        Quantity::new(U::Value::from_f64(self.value.to_f64() + Self::OFFSET.to_f64()))
    }

    /// Expresses this value in any unit sharing `U`'s dimension.
    #[inline]
    pub fn to<T: Unit>(self) -> Quantity<T> {
        self.to_base().to()
    }
}

impl<U: Unit, const NUM: i128, const DEN: i128, V: Numeric> From<Offset<U, NUM, DEN, V>> for Quantity<U> {
    #[inline]
    fn from(value: Offset<U, NUM, DEN, V>) -> Self {
        value.to_base()
    }
}
