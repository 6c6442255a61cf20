//! Dimension encoding and algebra.
//!
//! Every orthogonal base dimension is assigned a distinct prime, and a composite dimension is the rational number
//! whose prime factorization carries the exponents: force (`M·L·T⁻²`) is `2·3 / 5²`. Because factorizations are
//! unique, two dimensions are physically equal exactly when their reduced rationals are equal, and composing
//! dimensions is plain rational multiplication.
//!
//! ```rust
//! use ratiodim_core::{BaseDimension, Dimension};
//!
//! let mass = BaseDimension::Mass.dimension();
//! let length = BaseDimension::Length.dimension();
//! let time = BaseDimension::Time.dimension();
//!
//! let force = mass.mul(length).div(time.mul(time));
//! assert_eq!(force.exponent(5), -2);
//! assert!(force.mul(force.recip()).is_dimensionless());
//! ```

use crate::error::UnitError;
use crate::ratio::Ratio;
use core::fmt;

/// The six reserved base dimensions and their primes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u64)]
pub enum BaseDimension {
    /// Mass, prime 2.
    Mass = 2,
    /// Length, prime 3.
    Length = 3,
    /// Time, prime 5.
    Time = 5,
    /// Thermodynamic temperature, prime 7.
    Temperature = 7,
    /// Electric current, prime 11.
    Current = 11,
    /// Luminous intensity, prime 13.
    LuminousIntensity = 13,
}

impl BaseDimension {
    /// All reserved base dimensions, in prime order.
    pub const ALL: [BaseDimension; 6] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Temperature,
        BaseDimension::Current,
        BaseDimension::LuminousIntensity,
    ];

    /// The prime reserved for this dimension.
    #[inline]
    pub const fn prime(self) -> u64 {
        self as u64
    }

    /// This base dimension as a [`Dimension`].
    #[inline]
    pub const fn dimension(self) -> Dimension {
        Dimension(Ratio::integer(self.prime() as i128))
    }

    /// Looks up the reserved dimension for `prime`.
    pub const fn from_prime(prime: u64) -> Option<Self> {
        match prime {
            2 => Some(BaseDimension::Mass),
            3 => Some(BaseDimension::Length),
            5 => Some(BaseDimension::Time),
            7 => Some(BaseDimension::Temperature),
            11 => Some(BaseDimension::Current),
            13 => Some(BaseDimension::LuminousIntensity),
            _ => None,
        }
    }
}

/// Prime of [`BaseDimension::Mass`], usable as a const generic argument.
pub const MASS: u64 = BaseDimension::Mass.prime();
/// Prime of [`BaseDimension::Length`].
pub const LENGTH: u64 = BaseDimension::Length.prime();
/// Prime of [`BaseDimension::Time`].
pub const TIME: u64 = BaseDimension::Time.prime();
/// Prime of [`BaseDimension::Temperature`].
pub const TEMPERATURE: u64 = BaseDimension::Temperature.prime();
/// Prime of [`BaseDimension::Current`].
pub const CURRENT: u64 = BaseDimension::Current.prime();
/// Prime of [`BaseDimension::LuminousIntensity`].
pub const LUMINOUS_INTENSITY: u64 = BaseDimension::LuminousIntensity.prime();

/// Smallest prime available for client-defined dimensions.
pub const FIRST_CUSTOM_PRIME: u64 = 17;

const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Returns `true` if `value` may be used as a base dimension: one of the six reserved primes, or a prime `>= 17`.
pub const fn is_base_prime(value: u64) -> bool {
    BaseDimension::from_prime(value).is_some() || (value >= FIRST_CUSTOM_PRIME && is_prime(value))
}

/// A physical dimension encoded as a reduced rational over base-dimension primes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension(Ratio);

impl Dimension {
    /// The dimension of pure numbers, `1/1`.
    pub const DIMENSIONLESS: Dimension = Dimension(Ratio::ONE);

    /// Base dimension for a reserved or custom prime.
    ///
    /// # Panics
    ///
    /// Panics (a compile error in const context) if `prime` is not a valid base prime; see [`is_base_prime`].
    pub const fn from_prime(prime: u64) -> Self {
        if !is_base_prime(prime) {
            panic!("base dimensions must be a reserved prime or a prime >= 17");
        }
        Dimension(Ratio::integer(prime as i128))
    }

    /// A client-defined orthogonal dimension on an unreserved prime.
    ///
    /// # Panics
    ///
    /// Panics (a compile error in const context) unless `prime` is a prime `>= 17`.
    pub const fn custom(prime: u64) -> Self {
        if prime < FIRST_CUSTOM_PRIME || !is_prime(prime) {
            panic!("custom dimensions must be primes >= 17");
        }
        Dimension(Ratio::integer(prime as i128))
    }

    /// Runtime counterpart of [`Dimension::custom`].
    ///
    /// ```rust
    /// use ratiodim_core::{Dimension, UnitError};
    ///
    /// assert!(Dimension::try_custom(19).is_ok());
    /// assert_eq!(Dimension::try_custom(21), Err(UnitError::InvalidBaseDimension { value: 21 }));
    /// assert_eq!(Dimension::try_custom(7), Err(UnitError::InvalidBaseDimension { value: 7 }));
    /// ```
    pub fn try_custom(prime: u64) -> Result<Self, UnitError> {
        if prime >= FIRST_CUSTOM_PRIME && is_prime(prime) {
            Ok(Dimension(Ratio::integer(prime as i128)))
        } else {
            Err(UnitError::InvalidBaseDimension { value: prime })
        }
    }

    /// Wraps an arbitrary rational as a dimension. Used by specified units.
    #[inline]
    pub const fn from_ratio(ratio: Ratio) -> Self {
        Dimension(ratio)
    }

    /// The underlying reduced rational.
    #[inline]
    pub const fn ratio(self) -> Ratio {
        self.0
    }

    /// Product dimension.
    #[inline]
    pub const fn mul(self, rhs: Dimension) -> Self {
        Dimension(self.0.mul(rhs.0))
    }

    /// Quotient dimension.
    #[inline]
    pub const fn div(self, rhs: Dimension) -> Self {
        Dimension(self.0.div(rhs.0))
    }

    /// Inverse dimension.
    #[inline]
    pub const fn recip(self) -> Self {
        Dimension(self.0.recip())
    }

    /// Integer power of this dimension.
    #[inline]
    pub const fn powi(self, exp: i32) -> Self {
        Dimension(self.0.powi(exp))
    }

    /// Returns `true` when both dimensions describe the same physical quantity.
    #[inline]
    pub const fn equivalent(self, other: Dimension) -> bool {
        self.0.const_eq(other.0)
    }

    /// Returns `true` for `1/1`.
    #[inline]
    pub const fn is_dimensionless(self) -> bool {
        self.0.is_one()
    }

    /// Exponent of the base dimension identified by `prime`.
    ///
    /// Only meaningful for base primes; for other values it reports how often `prime` divides the encoding.
    pub const fn exponent(self, prime: u64) -> i32 {
        let p = prime as i128;
        if p < 2 {
            return 0;
        }
        let mut exp = 0;
        let mut num = self.0.num();
        while num != 0 && num % p == 0 {
            num /= p;
            exp += 1;
        }
        let mut den = self.0.den();
        while den % p == 0 {
            den /= p;
            exp -= 1;
        }
        exp
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl From<BaseDimension> for Dimension {
    fn from(base: BaseDimension) -> Self {
        base.dimension()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
