//! Power, reciprocal and SI-prefix shorthands for building units from other units.
//!
//! ```rust
//! use ratiodim::helpers::{Kilo, Milli, Square};
//! use ratiodim::si::Meter;
//! use ratiodim::{Quantity, Ratio, Unit};
//!
//! assert_eq!(<Kilo<Meter>>::RATIO, Ratio::integer(1000));
//! assert_eq!(<Square<Milli<Meter>>>::RATIO, Ratio::new(1, 1_000_000));
//! ```

use crate::{Inverse, Multi, Quantity, Scaled, Unit};

/// `U²`.
pub type Square<U> = Multi<(U, U)>;
/// `U³`.
pub type Cubic<U> = Multi<(U, U, U)>;
/// `U⁴`.
pub type Quartic<U> = Multi<(U, U, U, U)>;
/// "Per `U`", i.e. `U⁻¹`.
pub type Per<U> = Inverse<U>;

/// `10⁻⁹ U`.
pub type Nano<U> = Scaled<U, 1, 1_000_000_000>;
/// `10⁻⁶ U`.
pub type Micro<U> = Scaled<U, 1, 1_000_000>;
/// `10⁻³ U`.
pub type Milli<U> = Scaled<U, 1, 1000>;
/// `10⁻² U`.
pub type Centi<U> = Scaled<U, 1, 100>;
/// `10⁻¹ U`.
pub type Deci<U> = Scaled<U, 1, 10>;
/// `10 U`.
pub type Deca<U> = Scaled<U, 10>;
/// `10² U`.
pub type Hecto<U> = Scaled<U, 100>;
/// `10³ U`.
pub type Kilo<U> = Scaled<U, 1000>;
/// `10⁶ U`.
pub type Mega<U> = Scaled<U, 1_000_000>;
/// `10⁹ U`.
pub type Giga<U> = Scaled<U, 1_000_000_000>;
/// `10¹² U`.
pub type Tera<U> = Scaled<U, 1_000_000_000_000>;

/// A conversion factor of `factor` `A` per `B`.
///
/// Multiplying a quantity of `B` by the factor and converting yields `A`:
///
/// ```rust
/// use ratiodim::helpers::conversion_factor;
/// use ratiodim::fps::Mile;
/// use ratiodim::non_si::{Hour, Hours};
/// use ratiodim::Quantity;
///
/// let speed = conversion_factor::<Mile, Hour>(60.0);
/// let distance: Quantity<Mile> = (speed * Hours::new(1.5)).to();
/// assert_eq!(distance.value(), 90.0);
/// ```
#[inline]
pub const fn conversion_factor<A: Unit, B: Unit>(
    factor: <Multi<(A, Per<B>)> as Unit>::Value,
) -> Quantity<Multi<(A, Per<B>)>>
where
    Multi<(A, Per<B>)>: Unit,
{
    Quantity::new(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{Meter, Second};
    use crate::Ratio;
    use approx::assert_relative_eq;

    #[test]
    fn powers_multiply_dimension_and_ratio() {
        type Cm = Centi<Meter>;
        assert_eq!(<Cubic<Cm>>::RATIO, Ratio::new(1, 1_000_000));
        assert_eq!(<Quartic<Meter>>::DIMENSION, Meter::DIMENSION.powi(4));
        assert_eq!(<Per<Second>>::DIMENSION, Second::DIMENSION.recip());
    }

    #[test]
    fn prefixes() {
        assert_eq!(<Nano<Second>>::RATIO, Ratio::new(1, 1_000_000_000));
        assert_eq!(<Tera<Meter>>::RATIO, Ratio::integer(1_000_000_000_000));
        assert_eq!(<Mega<Micro<Meter>>>::RATIO, Ratio::ONE);
        assert_eq!(<Hecto<Deca<Deci<Meter>>>>::RATIO, Ratio::integer(100));
    }

    #[test]
    fn prefixed_conversion() {
        let mm: Quantity<Milli<Meter>> = Quantity::<Kilo<Meter>>::new(1.5).to();
        assert_relative_eq!(mm.value(), 1_500_000.0, max_relative = 1e-12);
        let gs: Quantity<Giga<Second>> = Quantity::<Mega<Second>>::new(2500.0).to();
        assert_relative_eq!(gs.value(), 2.5, max_relative = 1e-12);
    }

    #[test]
    fn conversion_factor_is_a_rate() {
        let per_second = conversion_factor::<Meter, Second>(3.0);
        assert_eq!(per_second.value(), 3.0);
        let d: Quantity<Meter> = (per_second * Quantity::<Second>::new(4.0)).to();
        assert_relative_eq!(d.value(), 12.0, max_relative = 1e-12);
    }
}
