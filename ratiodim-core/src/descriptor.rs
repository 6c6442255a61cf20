//! Runtime unit descriptors.
//!
//! A [`UnitDescriptor`] is the `(dimension, ratio, representation)` triple that every [`crate::Unit`] exposes as
//! [`crate::Unit::DESCRIPTOR`]. Statically typed quantities never need it; it exists for units whose description is
//! only known at runtime (notably [`crate::RuntimeUnit`]) and for code that picks a target unit dynamically. The
//! checks the compiler performs on typed quantities are repeated here and reported as [`UnitError`].
//!
//! # Conversion formula
//!
//! ```text
//! factor = from.ratio / to.ratio          (reduced)
//! v_dst  = v_src * factor
//! ```

use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::numeric::Representation;
use crate::ratio::Ratio;

/// Dimension, ratio and numeric representation of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDescriptor {
    dimension: Dimension,
    ratio: Ratio,
    representation: Representation,
}

impl UnitDescriptor {
    /// Creates a descriptor.
    #[inline]
    pub const fn new(dimension: Dimension, ratio: Ratio, representation: Representation) -> Self {
        Self {
            dimension,
            ratio,
            representation,
        }
    }

    /// The dimension.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The ratio to the canonical unit of the dimension.
    #[inline]
    pub const fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// The numeric representation.
    #[inline]
    pub const fn representation(&self) -> Representation {
        self.representation
    }

    /// Returns `true` when both descriptors share a dimension.
    #[inline]
    pub const fn is_equivalent(&self, other: &UnitDescriptor) -> bool {
        self.dimension.equivalent(other.dimension)
    }

    /// Returns `true` when values in this unit may be exchanged with bare numbers (ratio `1/1`).
    #[inline]
    pub const fn is_passthrough(&self) -> bool {
        self.ratio.is_one()
    }

    /// Reduced factor that turns a value in `self` into a value in `to`.
    ///
    /// ```rust
    /// use ratiodim_core::{dimension::{LENGTH, TIME}, Base, Ratio, Scaled, Unit, UnitError};
    ///
    /// type Meter = Base<{ LENGTH }>;
    /// type Kilometer = Scaled<Meter, 1000>;
    ///
    /// let factor = Kilometer::DESCRIPTOR.conversion_factor(&Meter::DESCRIPTOR);
    /// assert_eq!(factor, Ok(Ratio::integer(1000)));
    ///
    /// let err = Meter::DESCRIPTOR.conversion_factor(&Base::<{ TIME }>::DESCRIPTOR);
    /// assert!(matches!(err, Err(UnitError::DimensionMismatch { .. })));
    /// ```
    pub fn conversion_factor(&self, to: &UnitDescriptor) -> Result<Ratio, UnitError> {
        if !self.is_equivalent(to) {
            return Err(UnitError::DimensionMismatch {
                from: self.dimension,
                to: to.dimension,
            });
        }
        self.ratio.try_div(to.ratio)
    }

    /// Converts `value` from `self` into `to`.
    ///
    /// When `to` is integral and the factor is a whole number, the result is computed exactly and truncated like an
    /// integral quantity would be; otherwise the multiplication happens in `f64`.
    pub fn convert(&self, value: f64, to: &UnitDescriptor) -> Result<f64, UnitError> {
        let factor = self.conversion_factor(to)?;
        let converted = if to.representation.is_integral() && factor.is_integer() {
            (value * factor.num() as f64).trunc()
        } else {
            value * factor.to_f64()
        };
        log::trace!("converted {value} from {self:?} to {converted} in {to:?} (factor {factor})");
        Ok(converted)
    }
}

/// Converts `value` between two runtime descriptors. See [`UnitDescriptor::convert`].
#[inline]
pub fn convert_value(value: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> Result<f64, UnitError> {
    from.convert(value, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::BaseDimension;
    use approx::assert_relative_eq;

    fn length(ratio: Ratio, representation: Representation) -> UnitDescriptor {
        UnitDescriptor::new(BaseDimension::Length.dimension(), ratio, representation)
    }

    #[test]
    fn accessors() {
        let d = length(Ratio::new(3048, 10_000), Representation::Real);
        assert_eq!(d.dimension(), BaseDimension::Length.dimension());
        assert_eq!(d.ratio(), Ratio::new(381, 1250));
        assert_eq!(d.representation(), Representation::Real);
        assert!(!d.is_passthrough());
        assert!(length(Ratio::ONE, Representation::Real).is_passthrough());
    }

    #[test]
    fn factor_between_lengths() {
        let km = length(Ratio::integer(1000), Representation::Real);
        let ft = length(Ratio::new(3048, 10_000), Representation::Real);
        assert_eq!(km.conversion_factor(&ft), Ok(Ratio::new(1_250_000, 381)));
    }

    #[test]
    fn mismatch_is_an_error() {
        let m = length(Ratio::ONE, Representation::Real);
        let s = UnitDescriptor::new(
            BaseDimension::Time.dimension(),
            Ratio::ONE,
            Representation::Real,
        );
        assert_eq!(
            convert_value(1.0, &m, &s),
            Err(UnitError::DimensionMismatch {
                from: m.dimension(),
                to: s.dimension(),
            })
        );
    }

    #[test]
    fn integral_target_with_whole_factor_truncates() {
        let km = length(Ratio::integer(1000), Representation::Real);
        let m = length(Ratio::ONE, Representation::Integral);
        assert_eq!(km.convert(1.0005, &m), Ok(1000.0));
    }

    #[test]
    fn fractional_factor_uses_floats() {
        let ft = length(Ratio::new(3048, 10_000), Representation::Real);
        let m = length(Ratio::ONE, Representation::Integral);
        assert_relative_eq!(ft.convert(10.0, &m).unwrap(), 3.048, max_relative = 1e-12);
    }
}
