//! Arithmetic between quantities and scalars.
//!
//! Every operator returns a new quantity whose unit is built from the operands' units:
//!
//! | Expression | Result unit |
//! |---|---|
//! | `a: A * b: B` | `Multi<(A, B)>` |
//! | `a: A / b: B` | `Multi<(A, Inverse<B>)>` |
//! | `a: U * s`, `a: U / s` | `SpecifiedAs<U, common type>` |
//! | `s * a: U` | `SpecifiedAs<U, U::Value>` |
//! | `s / a: U` | `Inverse<SpecifiedAs<U, U::Value>>` |
//!
//! A scalar on the right may be any [`Numeric`] type and promotes with the unit's representation. A scalar on the
//! left must already have the unit's representation, so unsuffixed literals infer on both sides.
//! | `a: A + b: B`, `a: A - b: B` | `SpecifiedAs<A, common type>` |
//!
//! Sums and differences are left-dominant: the right operand is first converted into the left operand's unit, and
//! the two units must share a dimension.
//!
//! The result of `+`/`-` keeps the operands' common representation. That is only exact when the right-to-left
//! ratio is a whole number, so combining integral quantities across a fractional ratio does not compile; use
//! [`Quantity::sum_real`] or [`Quantity::difference_real`], which always produce an `f64` result.
//!
//! ```compile_fail
//! use ratiodim_core::{dimension::LENGTH, Base, Quantity, Scaled};
//!
//! type Meter = Base<{ LENGTH }, i64>;
//! type Foot = Scaled<Meter, 3048, 10_000>;
//!
//! let _ = Quantity::<Meter>::new(5) + Quantity::<Foot>::new(5);
//! ```

use crate::conversion::Conversion;
use crate::numeric::{cast, Numeric, Promote};
use crate::quantity::Quantity;
use crate::unit::{Inverse, Multi, SpecifiedAs, Unit};
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Compile-time check for left-dominant sums of `B` into `A` held as `P`.
struct Sum<A, B, P>(PhantomData<(A, B, P)>);

impl<A: Unit, B: Unit, P: Numeric> Sum<A, B, P> {
    const CHECK: () = {
        let factor = Conversion::<B, A>::FACTOR;
        assert!(
            !P::REPRESENTATION.is_integral() || factor.is_integer(),
            "integral sum across a fractional ratio would truncate; use sum_real/difference_real"
        );
    };
}

impl<A: Unit> Quantity<A> {
    /// Left-dominant sum in the real representation.
    ///
    /// ```rust
    /// use ratiodim_core::{dimension::LENGTH, Base, Quantity, Scaled};
    ///
    /// type Meter = Base<{ LENGTH }, i64>;
    /// type Foot = Scaled<Meter, 3048, 10_000>;
    ///
    /// let sum = Quantity::<Meter>::new(5).sum_real(Quantity::<Foot>::new(5));
    /// assert!((sum.value() - 6.524).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn sum_real<B: Unit>(self, rhs: Quantity<B>) -> Quantity<SpecifiedAs<A, f64>> {
        let rhs: Quantity<SpecifiedAs<A, f64>> = rhs.to();
        Quantity::new(self.value().to_f64() + rhs.value())
    }

    /// Left-dominant difference in the real representation.
    #[inline]
    pub fn difference_real<B: Unit>(self, rhs: Quantity<B>) -> Quantity<SpecifiedAs<A, f64>> {
        let rhs: Quantity<SpecifiedAs<A, f64>> = rhs.to();
        Quantity::new(self.value().to_f64() - rhs.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity ⊗ Quantity
// ─────────────────────────────────────────────────────────────────────────────

impl<A: Unit, B: Unit> Mul<Quantity<B>> for Quantity<A>
where
    Multi<(A, B)>: Unit,
{
    type Output = Quantity<Multi<(A, B)>>;

    #[inline]
    fn mul(self, rhs: Quantity<B>) -> Self::Output {
        let lhs: <Multi<(A, B)> as Unit>::Value = cast(self.value());
        Quantity::new(lhs * cast(rhs.value()))
    }
}

impl<A: Unit, B: Unit> Div<Quantity<B>> for Quantity<A>
where
    Multi<(A, Inverse<B>)>: Unit,
{
    type Output = Quantity<Multi<(A, Inverse<B>)>>;

    #[inline]
    fn div(self, rhs: Quantity<B>) -> Self::Output {
        let lhs: <Multi<(A, Inverse<B>)> as Unit>::Value = cast(self.value());
        Quantity::new(lhs / cast(rhs.value()))
    }
}

/// Left-dominant sum: `rhs` is converted into `A` first.
///
/// The result keeps the operands' common representation. When that representation is integral, the `B`-to-`A`
/// factor must be a whole number or the expression does not compile. Integral operands are not promoted to a real
/// type automatically; call [`Quantity::sum_real`] for a real-valued sum across a fractional factor.
impl<A: Unit, B: Unit> Add<Quantity<B>> for Quantity<A>
where
    A::Value: Promote<B::Value>,
{
    type Output = Quantity<SpecifiedAs<A, <A::Value as Promote<B::Value>>::Output>>;

    #[inline]
    fn add(self, rhs: Quantity<B>) -> Self::Output {
        let () = Sum::<A, B, <A::Value as Promote<B::Value>>::Output>::CHECK;
        let rhs: Self::Output = rhs.to();
        Quantity::new(cast::<_, <A::Value as Promote<B::Value>>::Output>(self.value()) + rhs.value())
    }
}

/// Left-dominant difference, under the same representation rule as `+`. See [`Quantity::difference_real`] for
/// integral operands across a fractional factor.
impl<A: Unit, B: Unit> Sub<Quantity<B>> for Quantity<A>
where
    A::Value: Promote<B::Value>,
{
    type Output = Quantity<SpecifiedAs<A, <A::Value as Promote<B::Value>>::Output>>;

    #[inline]
    fn sub(self, rhs: Quantity<B>) -> Self::Output {
        let () = Sum::<A, B, <A::Value as Promote<B::Value>>::Output>::CHECK;
        let rhs: Self::Output = rhs.to();
        Quantity::new(cast::<_, <A::Value as Promote<B::Value>>::Output>(self.value()) - rhs.value())
    }
}

impl<U: Unit> Neg for Quantity<U>
where
    U::Value: Neg<Output = U::Value>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity ⊗ scalar
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, S: Numeric> Mul<S> for Quantity<U>
where
    U::Value: Promote<S>,
{
    type Output = Quantity<SpecifiedAs<U, <U::Value as Promote<S>>::Output>>;

    #[inline]
    fn mul(self, rhs: S) -> Self::Output {
        let lhs: <U::Value as Promote<S>>::Output = cast(self.value());
        Quantity::new(lhs * cast(rhs))
    }
}

impl<U: Unit, S: Numeric> Div<S> for Quantity<U>
where
    U::Value: Promote<S>,
{
    type Output = Quantity<SpecifiedAs<U, <U::Value as Promote<S>>::Output>>;

    #[inline]
    fn div(self, rhs: S) -> Self::Output {
        let lhs: <U::Value as Promote<S>>::Output = cast(self.value());
        Quantity::new(lhs / cast(rhs))
    }
}

// A scalar on the left must be the quantity's own representation. Mixed representations promote through the
// right-hand scalar forms above.
macro_rules! impl_scalar_lhs_ops {
    ($($s:ty),*) => {
        $(
            impl<U: Unit<Value = $s>> Mul<Quantity<U>> for $s {
                type Output = Quantity<SpecifiedAs<U, $s>>;

                #[inline]
                fn mul(self, rhs: Quantity<U>) -> Self::Output {
                    Quantity::new(self * rhs.value())
                }
            }

            impl<U: Unit<Value = $s>> Div<Quantity<U>> for $s {
                type Output = Quantity<Inverse<SpecifiedAs<U, $s>>>;

                #[inline]
                fn div(self, rhs: Quantity<U>) -> Self::Output {
                    Quantity::new(self / rhs.value())
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(i32, i64, u32, u64, f32, f64);
