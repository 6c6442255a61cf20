//! Conversion engine.
//!
//! Converting from unit `F` to unit `T` multiplies the held value by `F::RATIO / T::RATIO`, reduced. The factor and
//! the dimension check are associated constants, so both are settled when the conversion is monomorphized: asking
//! for a conversion between units of different dimensions is a compile error.
//!
//! The multiply itself stays exact when it can. If the destination representation is integral and the reduced
//! factor is a whole number, the value is scaled in integer arithmetic; in every other case it is scaled in `f64`.

use crate::numeric::Numeric;
use crate::ratio::Ratio;
use crate::unit::Unit;
use core::marker::PhantomData;

/// Compile-time facts about converting `F` into `T`.
pub(crate) struct Conversion<F, T>(PhantomData<(F, T)>);

impl<F: Unit, T: Unit> Conversion<F, T> {
    /// `F::RATIO / T::RATIO`; fails to compile unless `F` and `T` share a dimension.
    pub(crate) const FACTOR: Ratio = {
        assert!(
            F::DIMENSION.equivalent(T::DIMENSION),
            "dimension mismatch: units do not share a dimension"
        );
        F::RATIO.div(T::RATIO)
    };
}

/// Compile-time guard for exchanging values of `U` with bare numbers.
pub(crate) struct Passthrough<U>(PhantomData<U>);

impl<U: Unit> Passthrough<U> {
    pub(crate) const CHECK: () = assert!(
        U::RATIO.is_one(),
        "only units with ratio 1/1 convert to and from bare numbers"
    );
}

/// Reduced factor that converts a value in `F` into a value in `T`.
///
/// ```rust
/// use ratiodim_core::{conversion::factor, dimension::LENGTH, Base, Ratio, Scaled};
///
/// type Meter = Base<{ LENGTH }>;
/// type Foot = Scaled<Meter, 3048, 10_000>;
/// type Yard = Scaled<Foot, 3>;
///
/// assert_eq!(factor::<Yard, Foot>(), Ratio::integer(3));
/// assert_eq!(factor::<Foot, Yard>(), Ratio::new(1, 3));
/// ```
#[inline]
pub const fn factor<F: Unit, T: Unit>() -> Ratio {
    Conversion::<F, T>::FACTOR
}

/// Scales `value` by `factor`, producing the destination representation.
///
/// Integral destinations with a whole-number factor are scaled exactly (integral sources in `i128`, real sources
/// truncated after the multiply); everything else goes through `f64`. Integral results outside the destination's
/// range saturate at its bounds.
#[inline]
pub fn rescale<F: Numeric, T: Numeric>(value: F, factor: Ratio) -> T {
    if T::REPRESENTATION.is_integral() && factor.is_integer() {
        if F::REPRESENTATION.is_integral() {
            T::from_i128(value.to_i128().saturating_mul(factor.num()))
        } else {
            T::from_f64(value.to_f64() * factor.num() as f64)
        }
    } else {
        T::from_f64(value.to_f64() * factor.to_f64())
    }
}
