//! Unit trait and the unit constructors.
//!
//! Every unit is a zero-sized marker type whose [`Unit`] impl carries a static descriptor: a [`Dimension`], a
//! [`Ratio`] to the canonical (ratio `1/1`) unit of that dimension, and the [`Numeric`] type its quantities hold.
//! New units are minted from existing ones with the generic constructors in this module:
//!
//! | Constructor | Dimension | Ratio |
//! |---|---|---|
//! | [`Base<P>`](Base) | prime `P` | `1/1` |
//! | [`Scaled<U, N, D>`](Scaled) | `U` | `U · N/D` |
//! | [`Inverse<U>`](Inverse) | `1/U` | `1/U` |
//! | [`Multi<(U1, …, Un)>`](Multi) | `∏ Ui` | `∏ Ui` |
//! | [`Specified<DN, DD, N, D>`](Specified) | `DN/DD` | `N/D` |
//! | [`SpecifiedAs<U, V>`](SpecifiedAs) | `U` | `U` |
//!
//! Composite identity is structural: two marker types with equal dimensions are interconvertible whatever their
//! names, so `Multi<(Newton, Meter)>` and a hand-written `Specified` joule convert freely.

use crate::descriptor::UnitDescriptor;
use crate::dimension::Dimension;
use crate::numeric::{Numeric, Promote};
use crate::ratio::Ratio;
use core::fmt::Debug;
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `DIMENSION` identifies the physical quantity; conversions require equal dimensions.
/// * `RATIO` is the size of one unit expressed in the canonical unit of the dimension: with metres canonical, a
///   foot has `RATIO == 3048/10000`.
/// * `Value` is the numeric representation of quantities in this unit.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` should be non-zero.
pub trait Unit: Copy + Debug + 'static {
    /// Dimension of this unit.
    const DIMENSION: Dimension;

    /// Scale relative to the canonical unit of [`Unit::DIMENSION`].
    const RATIO: Ratio;

    /// Numeric representation backing quantities in this unit.
    type Value: Numeric;

    /// The runtime view of this unit's static description.
    const DESCRIPTOR: UnitDescriptor = UnitDescriptor::new(
        Self::DIMENSION,
        Self::RATIO,
        <Self::Value as Numeric>::REPRESENTATION,
    );
}

/// Root unit of a base-dimension family.
///
/// `PRIME` is one of the reserved primes in [`crate::dimension`] or a client-reserved prime `>= 17`; anything else
/// fails to compile when the unit is used.
///
/// ```rust
/// use ratiodim_core::{dimension::LENGTH, Base, Unit, Ratio};
///
/// type Meter = Base<{ LENGTH }>;
/// assert_eq!(Meter::RATIO, Ratio::ONE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Base<const PRIME: u64, V = f64>(PhantomData<V>);

impl<const PRIME: u64, V: Numeric> Unit for Base<PRIME, V> {
    const DIMENSION: Dimension = Dimension::from_prime(PRIME);
    const RATIO: Ratio = Ratio::ONE;
    type Value = V;
}

/// `U` re-expressed at `NUM/DEN` of its size.
///
/// ```rust
/// use ratiodim_core::{dimension::LENGTH, Base, Ratio, Scaled, Unit};
///
/// type Meter = Base<{ LENGTH }>;
/// type Foot = Scaled<Meter, 3048, 10_000>;
/// type Inch = Scaled<Foot, 1, 12>;
/// assert_eq!(Inch::RATIO, Ratio::new(254, 10_000));
/// ```
///
/// A zero denominator is rejected when the unit is used:
///
/// ```compile_fail
/// use ratiodim_core::{dimension::LENGTH, Base, Quantity, Scaled};
///
/// type Meter = Base<{ LENGTH }>;
/// let _ = Quantity::<Scaled<Meter, 1, 0>>::new(1.0).to::<Meter>();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scaled<U, const NUM: i128, const DEN: i128 = 1>(PhantomData<U>);

impl<U: Unit, const NUM: i128, const DEN: i128> Unit for Scaled<U, NUM, DEN> {
    const DIMENSION: Dimension = U::DIMENSION;
    const RATIO: Ratio = U::RATIO.mul(Ratio::new(NUM, DEN));
    type Value = U::Value;
}

/// Reciprocal of `U`: hertz from second, "per metre" from metre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inverse<U>(PhantomData<U>);

impl<U: Unit> Unit for Inverse<U> {
    const DIMENSION: Dimension = U::DIMENSION.recip();
    const RATIO: Ratio = U::RATIO.recip();
    type Value = U::Value;
}

/// An ordered list of units folded by multiplication. Implemented for tuples of one to eight units.
pub trait UnitList: Copy + Debug + 'static {
    /// Product of the members' dimensions.
    const DIMENSION: Dimension;
    /// Product of the members' ratios.
    const RATIO: Ratio;
    /// Common type of the members' representations.
    type Value: Numeric;
}

macro_rules! impl_unit_list {
    ($head:ident) => {
        impl<$head: Unit> UnitList for ($head,) {
            const DIMENSION: Dimension = <$head as Unit>::DIMENSION;
            const RATIO: Ratio = <$head as Unit>::RATIO;
            type Value = <$head as Unit>::Value;
        }
    };
    ($head:ident, $($tail:ident),+) => {
        impl<$head: Unit, $($tail: Unit),+> UnitList for ($head, $($tail),+)
        where
            ($($tail,)+): UnitList,
            <$head as Unit>::Value: Promote<<($($tail,)+) as UnitList>::Value>,
        {
            const DIMENSION: Dimension =
                <$head as Unit>::DIMENSION.mul(<($($tail,)+) as UnitList>::DIMENSION);
            const RATIO: Ratio = <$head as Unit>::RATIO.mul(<($($tail,)+) as UnitList>::RATIO);
            type Value =
                <<$head as Unit>::Value as Promote<<($($tail,)+) as UnitList>::Value>>::Output;
        }

        impl_unit_list!($($tail),+);
    };
}

impl_unit_list!(A, B, C, D, E, F, G, H);

/// Composite unit: the product of every unit in the tuple `L`.
///
/// ```rust
/// use ratiodim_core::{dimension::{LENGTH, MASS, TIME}, Base, Inverse, Multi, Unit};
///
/// type Kilogram = Base<{ MASS }>;
/// type Meter = Base<{ LENGTH }>;
/// type Hertz = Inverse<Base<{ TIME }>>;
/// type Newton = Multi<(Kilogram, Meter, Hertz, Hertz)>;
/// assert_eq!(Newton::DIMENSION.exponent(TIME), -2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Multi<L>(PhantomData<L>);

impl<L: UnitList> Unit for Multi<L> {
    const DIMENSION: Dimension = L::DIMENSION;
    const RATIO: Ratio = L::RATIO;
    type Value = L::Value;
}

/// Ad hoc unit with dimension `DIM_NUM/DIM_DEN`, ratio `NUM/DEN` and representation `V`.
///
/// Used to mint dimensions or ratios that no existing unit provides, e.g. a dimension on an unreserved prime.
///
/// ```rust
/// use ratiodim_core::{Specified, Unit};
///
/// type Kibibit = Specified<17, 1, 1024, 1, u64>;
/// assert!(Kibibit::DIMENSION.exponent(17) == 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Specified<
    const DIM_NUM: i128,
    const DIM_DEN: i128 = 1,
    const NUM: i128 = 1,
    const DEN: i128 = 1,
    V = f64,
>(PhantomData<V>);

impl<const DIM_NUM: i128, const DIM_DEN: i128, const NUM: i128, const DEN: i128, V: Numeric> Unit
    for Specified<DIM_NUM, DIM_DEN, NUM, DEN, V>
{
    const DIMENSION: Dimension = Dimension::from_ratio(Ratio::new(DIM_NUM, DIM_DEN));
    const RATIO: Ratio = Ratio::new(NUM, DEN);
    type Value = V;
}

/// Specified unit sharing `U`'s dimension and ratio, backed by `V`.
///
/// This is the form produced by the arithmetic operators when they re-type a quantity, and the way to pick a
/// different representation for an existing unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecifiedAs<U, V>(PhantomData<(U, V)>);

impl<U: Unit, V: Numeric> Unit for SpecifiedAs<U, V> {
    const DIMENSION: Dimension = U::DIMENSION;
    const RATIO: Ratio = U::RATIO;
    type Value = V;
}

/// The canonical dimensionless unit.
pub type Unitless<V = f64> = Specified<1, 1, 1, 1, V>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{BaseDimension, LENGTH, MASS, TIME};
    use crate::numeric::Representation;

    type Kilogram = Base<{ MASS }>;
    type Meter = Base<{ LENGTH }>;
    type Second = Base<{ TIME }>;
    type Hertz = Inverse<Second>;
    type Foot = Scaled<Meter, 3048, 10_000>;

    #[test]
    fn base_unit_descriptor() {
        assert_eq!(Meter::DIMENSION, BaseDimension::Length.dimension());
        assert_eq!(Meter::RATIO, Ratio::ONE);
        assert_eq!(
            <Base<{ LENGTH }, i64> as Unit>::DESCRIPTOR.representation(),
            Representation::Integral
        );
    }

    #[test]
    fn custom_prime_base_unit() {
        type Bit = Base<17, u64>;
        assert!(!Bit::DIMENSION.equivalent(Meter::DIMENSION));
        assert_eq!(Bit::DIMENSION.exponent(17), 1);
    }

    #[test]
    fn scaled_composes_ratios() {
        type Inch = Scaled<Foot, 1, 12>;
        type Mile = Scaled<Foot, 5280>;
        assert_eq!(Inch::DIMENSION, Meter::DIMENSION);
        assert_eq!(Inch::RATIO, Ratio::new(127, 5000));
        assert_eq!(Mile::RATIO, Ratio::new(201_168, 125));
    }

    #[test]
    fn scaling_twice_equals_scaling_by_product() {
        type Twice = Scaled<Scaled<Meter, 3, 7>, 14, 9>;
        type Once = Scaled<Meter, 42, 63>;
        assert_eq!(Twice::RATIO, Once::RATIO);
    }

    #[test]
    fn inverse_inverts_dimension_and_ratio() {
        type PerFoot = Inverse<Foot>;
        assert_eq!(PerFoot::DIMENSION, Meter::DIMENSION.recip());
        assert_eq!(PerFoot::RATIO, Ratio::new(10_000, 3048));
        assert_eq!(<Inverse<Inverse<Foot>>>::RATIO, Foot::RATIO);
    }

    #[test]
    fn multi_folds_members() {
        type Newton = Multi<(Kilogram, Meter, Hertz, Hertz)>;
        let force = Kilogram::DIMENSION
            .mul(Meter::DIMENSION)
            .div(Second::DIMENSION.powi(2));
        assert_eq!(Newton::DIMENSION, force);
        assert_eq!(Newton::RATIO, Ratio::ONE);

        type SquareFoot = Multi<(Foot, Foot)>;
        assert_eq!(SquareFoot::RATIO, Foot::RATIO.powi(2));
        assert_eq!(SquareFoot::DIMENSION, Meter::DIMENSION.powi(2));
    }

    #[test]
    fn multi_promotes_representation() {
        type Mixed = Multi<(Base<{ LENGTH }, i32>, Base<{ TIME }, i64>)>;
        type Real = Multi<(Base<{ LENGTH }, i64>, Base<{ TIME }, f32>, Base<{ MASS }, f64>)>;
        let mixed: <Mixed as Unit>::Value = 1i64;
        let real: <Real as Unit>::Value = 1.0f64;
        assert_eq!(mixed, 1);
        assert_eq!(real, 1.0);
    }

    #[test]
    fn specified_units() {
        type Joule = Specified<18, 25>;
        type NewtonMeter = Multi<(Kilogram, Meter, Meter, Hertz, Hertz)>;
        assert!(Joule::DIMENSION.equivalent(NewtonMeter::DIMENSION));
        assert!(Unitless::<f64>::DIMENSION.is_dimensionless());

        type IntegralFoot = SpecifiedAs<Foot, i64>;
        assert_eq!(IntegralFoot::RATIO, Foot::RATIO);
        assert_eq!(
            IntegralFoot::DESCRIPTOR.representation(),
            Representation::Integral
        );
    }
}
