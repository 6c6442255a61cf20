//! Reduced rational numbers.
//!
//! [`Ratio`] is the single numeric building block of the crate: unit scale factors are ratios, and so are dimensions
//! (see [`crate::Dimension`]). Every arithmetic operation is a `const fn`, which lets unit descriptors be computed
//! entirely at compile time. In a const context a zero denominator or an `i128` overflow aborts compilation; the
//! `try_*` variants report the same conditions as [`UnitError`] at runtime.

use crate::error::UnitError;
use core::fmt;
use core::ops::{Div, Mul};

/// Greatest common divisor of `|a|` and `|b|`.
const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i128
}

/// A rational number kept in lowest terms with a strictly positive denominator.
///
/// Two ratios compare equal exactly when they denote the same rational value.
///
/// ```rust
/// use ratiodim_core::Ratio;
///
/// let foot = Ratio::new(3048, 10_000);
/// assert_eq!(foot, Ratio::new(381, 1250));
/// assert_eq!(foot.mul(Ratio::new(1, 12)), Ratio::new(127, 5000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i128, i128)", into = "(i128, i128)")
)]
pub struct Ratio {
    num: i128,
    den: i128,
}

impl Ratio {
    /// The multiplicative identity, `1/1`.
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Builds and reduces `num/den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero, or if moving the sign onto the numerator overflows. In a const context this is a
    /// compile error.
    #[inline]
    pub const fn new(num: i128, den: i128) -> Self {
        if den == 0 {
            panic!("malformed ratio: denominator must be non-zero");
        }
        match Self::checked_new(num, den) {
            Some(ratio) => ratio,
            None => panic!("ratio overflow"),
        }
    }

    /// Builds and reduces `num/den`, or returns `None` if `den` is zero or the reduced value has no `i128` form
    /// with a positive denominator.
    pub const fn checked_new(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);
        if den > 0 {
            return Some(Self { num, den });
        }
        match (num.checked_neg(), den.checked_neg()) {
            (Some(num), Some(den)) => Some(Self { num, den }),
            _ => None,
        }
    }

    /// Runtime counterpart of [`Ratio::new`].
    ///
    /// ```rust
    /// use ratiodim_core::{Ratio, UnitError};
    ///
    /// assert_eq!(Ratio::try_new(6, -4), Ok(Ratio::new(-3, 2)));
    /// assert_eq!(Ratio::try_new(1, 0), Err(UnitError::ZeroDenominator { numerator: 1 }));
    /// assert_eq!(Ratio::try_new(1, i128::MIN), Err(UnitError::Overflow));
    /// ```
    pub fn try_new(num: i128, den: i128) -> Result<Self, UnitError> {
        if den == 0 {
            return Err(UnitError::ZeroDenominator { numerator: num });
        }
        Self::checked_new(num, den).ok_or(UnitError::Overflow)
    }

    /// The integer `n` as the ratio `n/1`.
    #[inline]
    pub const fn integer(n: i128) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator in lowest terms. Carries the sign.
    #[inline]
    pub const fn num(self) -> i128 {
        self.num
    }

    /// Denominator in lowest terms. Always positive.
    #[inline]
    pub const fn den(self) -> i128 {
        self.den
    }

    /// Product of two ratios, or `None` on overflow.
    ///
    /// Factors are cross-cancelled before multiplying, so the result is already reduced and intermediate values
    /// stay as small as possible.
    pub const fn checked_mul(self, rhs: Ratio) -> Option<Self> {
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        let num = match (self.num / g1).checked_mul(rhs.num / g2) {
            Some(n) => n,
            None => return None,
        };
        let den = match (self.den / g2).checked_mul(rhs.den / g1) {
            Some(d) => d,
            None => return None,
        };
        Some(Self { num, den })
    }

    /// Reciprocal, or `None` for zero and for a numerator of `i128::MIN`.
    pub const fn checked_recip(self) -> Option<Self> {
        if self.num == 0 {
            return None;
        }
        if self.num < 0 {
            match self.num.checked_neg() {
                Some(den) => Some(Self { num: -self.den, den }),
                None => None,
            }
        } else {
            Some(Self {
                num: self.den,
                den: self.num,
            })
        }
    }

    /// Quotient of two ratios, or `None` if `rhs` is zero or the result overflows.
    pub const fn checked_div(self, rhs: Ratio) -> Option<Self> {
        match rhs.checked_recip() {
            Some(inv) => self.checked_mul(inv),
            None => None,
        }
    }

    /// Product of two ratios.
    ///
    /// # Panics
    ///
    /// Panics on `i128` overflow.
    #[inline]
    pub const fn mul(self, rhs: Ratio) -> Self {
        match self.checked_mul(rhs) {
            Some(r) => r,
            None => panic!("ratio overflow"),
        }
    }

    /// Quotient of two ratios.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or on `i128` overflow.
    #[inline]
    pub const fn div(self, rhs: Ratio) -> Self {
        match self.checked_div(rhs) {
            Some(r) => r,
            None => panic!("ratio division by zero or overflow"),
        }
    }

    /// Reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    pub const fn recip(self) -> Self {
        match self.checked_recip() {
            Some(r) => r,
            None => panic!("reciprocal of a zero ratio"),
        }
    }

    /// `self` raised to an integer power (negative exponents invert).
    ///
    /// # Panics
    ///
    /// Panics on overflow or when inverting zero.
    pub const fn powi(self, exp: i32) -> Self {
        let base = if exp < 0 { self.recip() } else { self };
        let mut out = Self::ONE;
        let mut i = 0;
        while i < exp.unsigned_abs() {
            out = out.mul(base);
            i += 1;
        }
        out
    }

    /// Runtime product returning [`UnitError::Overflow`] instead of panicking.
    pub fn try_mul(self, rhs: Ratio) -> Result<Self, UnitError> {
        self.checked_mul(rhs).ok_or(UnitError::Overflow)
    }

    /// Runtime quotient returning an error instead of panicking.
    pub fn try_div(self, rhs: Ratio) -> Result<Self, UnitError> {
        if rhs.num == 0 {
            return Err(UnitError::ZeroDenominator { numerator: self.num });
        }
        self.checked_div(rhs).ok_or(UnitError::Overflow)
    }

    /// `const` equality; `==` is not callable in const contexts.
    #[inline]
    pub const fn const_eq(self, other: Ratio) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// Returns `true` if the denominator is 1.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Returns `true` for `1/1`.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Returns `true` for `0/1`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Nearest `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ONE
    }
}

impl Mul for Ratio {
    type Output = Ratio;
    #[inline]
    fn mul(self, rhs: Ratio) -> Ratio {
        Ratio::mul(self, rhs)
    }
}

impl Div for Ratio {
    type Output = Ratio;
    #[inline]
    fn div(self, rhs: Ratio) -> Ratio {
        Ratio::div(self, rhs)
    }
}

impl From<i128> for Ratio {
    fn from(n: i128) -> Self {
        Self::integer(n)
    }
}

impl TryFrom<(i128, i128)> for Ratio {
    type Error = UnitError;
    fn try_from((num, den): (i128, i128)) -> Result<Self, Self::Error> {
        Self::try_new(num, den)
    }
}

impl From<Ratio> for (i128, i128) {
    fn from(r: Ratio) -> Self {
        (r.num, r.den)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
