//! Numeric representations backing quantities.
//!
//! A unit chooses the scalar type its quantities hold. [`Numeric`] is implemented for the primitive integers and
//! floats this crate supports, and [`Promote`] names the common type two representations widen to when they meet in
//! an arithmetic expression.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Whether a representation is exact integer arithmetic or floating point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Representation {
    /// Integer arithmetic.
    Integral,
    /// Floating-point arithmetic.
    Real,
}

impl Representation {
    /// `const` test for [`Representation::Integral`].
    #[inline]
    pub const fn is_integral(self) -> bool {
        matches!(self, Representation::Integral)
    }
}

/// Scalar types a unit may be backed by.
///
/// Float-to-integer casts truncate toward zero and saturate, following `as`. Integer-to-integer casts saturate at
/// the bounds of the target type.
pub trait Numeric:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Integral or real.
    const REPRESENTATION: Representation;

    /// Value as `f64`.
    fn to_f64(self) -> f64;
    /// Value from `f64`.
    fn from_f64(value: f64) -> Self;
    /// Value as `i128`.
    fn to_i128(self) -> i128;
    /// Value from `i128`.
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_numeric {
    ($kind:ident, $repr:expr => $($t:ty),*) => {
        $(
            impl Numeric for $t {
                const REPRESENTATION: Representation = $repr;
                #[inline]
                fn to_f64(self) -> f64 { self as f64 }
                #[inline]
                fn from_f64(value: f64) -> Self { value as $t }
                #[inline]
                fn to_i128(self) -> i128 { self as i128 }
                #[inline]
                fn from_i128(value: i128) -> Self { impl_numeric!(@from_i128 $kind, $t, value) }
            }
        )*
    };
    (@from_i128 integral, $t:ty, $value:ident) => {
        $value.clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t
    };
    (@from_i128 real, $t:ty, $value:ident) => {
        $value as $t
    };
}

impl_numeric!(integral, Representation::Integral => i32, i64, u32, u64);
impl_numeric!(real, Representation::Real => f32, f64);

/// Casts between representations, exactly when both are integral.
#[inline]
pub fn cast<F: Numeric, T: Numeric>(value: F) -> T {
    if F::REPRESENTATION.is_integral() && T::REPRESENTATION.is_integral() {
        T::from_i128(value.to_i128())
    } else {
        T::from_f64(value.to_f64())
    }
}

/// The common type of `Self` and `Rhs`.
///
/// Equal types stay put, any float widens to the widest float involved, and integers widen to the larger width,
/// preferring the unsigned type when signedness differs at the same width.
pub trait Promote<Rhs: Numeric = Self>: Numeric {
    /// The widened type.
    type Output: Numeric;
}

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $( impl Promote<$rhs> for $lhs { type Output = $out; } )*
    };
}

promote! {
    i32, i32 => i32; i32, i64 => i64; i32, u32 => u32; i32, u64 => u64; i32, f32 => f32; i32, f64 => f64;
    i64, i32 => i64; i64, i64 => i64; i64, u32 => i64; i64, u64 => u64; i64, f32 => f32; i64, f64 => f64;
    u32, i32 => u32; u32, i64 => i64; u32, u32 => u32; u32, u64 => u64; u32, f32 => f32; u32, f64 => f64;
    u64, i32 => u64; u64, i64 => u64; u64, u32 => u64; u64, u64 => u64; u64, f32 => f32; u64, f64 => f64;
    f32, i32 => f32; f32, i64 => f32; f32, u32 => f32; f32, u64 => f32; f32, f32 => f32; f32, f64 => f64;
    f64, i32 => f64; f64, i64 => f64; f64, u32 => f64; f64, u64 => f64; f64, f32 => f64; f64, f64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promoted<A: Promote<B>, B: Numeric>() -> Representation {
        <<A as Promote<B>>::Output as Numeric>::REPRESENTATION
    }

    #[test]
    fn representations() {
        assert_eq!(i32::REPRESENTATION, Representation::Integral);
        assert_eq!(u64::REPRESENTATION, Representation::Integral);
        assert_eq!(f32::REPRESENTATION, Representation::Real);
        assert!(Representation::Integral.is_integral());
        assert!(!Representation::Real.is_integral());
    }

    #[test]
    fn integer_casts_are_exact() {
        let big: i64 = 9_007_199_254_740_993;
        assert_eq!(cast::<i64, u64>(big), 9_007_199_254_740_993u64);
        assert_eq!(cast::<i32, i64>(-7), -7i64);
    }

    #[test]
    fn float_to_integer_truncates() {
        assert_eq!(cast::<f64, i32>(2.9), 2);
        assert_eq!(cast::<f64, i32>(-2.9), -2);
        assert_eq!(cast::<f64, u32>(-1.0), 0);
    }

    #[test]
    fn integer_casts_saturate() {
        assert_eq!(cast::<i64, i32>(i64::MAX), i32::MAX);
        assert_eq!(cast::<i64, u32>(-5), 0);
        assert_eq!(cast::<u64, i64>(u64::MAX), i64::MAX);
        assert_eq!(i64::from_i128(i128::MIN), i64::MIN);
        assert_eq!(u64::from_i128(i128::MAX), u64::MAX);
    }

    #[test]
    fn promotion_table() {
        assert_eq!(promoted::<i32, i32>(), Representation::Integral);
        assert_eq!(promoted::<i64, u32>(), Representation::Integral);
        assert_eq!(promoted::<i32, f64>(), Representation::Real);
        assert_eq!(promoted::<f32, u64>(), Representation::Real);
        let widened: <i32 as Promote<i64>>::Output = 3_000_000_000;
        assert_eq!(widened, 3_000_000_000i64);
        let real: <u64 as Promote<f32>>::Output = 0.5;
        assert_eq!(real, 0.5f32);
    }
}
