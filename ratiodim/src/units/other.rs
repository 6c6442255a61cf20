//! Miscellaneous units: mass, pressure, speed and temperature scales.
//!
//! Celsius and Fahrenheit are [`Offset`] scales. Their values convert into kelvin or rankine (and onward to any
//! temperature unit), but nothing converts back into them.
//!
//! ```rust
//! use ratiodim::other::Celsius;
//! use ratiodim::si::Kelvin;
//! use ratiodim::Quantity;
//!
//! let k: Quantity<Kelvin> = Celsius::new(0.0).to();
//! assert!((k.value() - 273.15).abs() < 1e-12);
//! ```

use super::fps::Mile;
use super::non_si::Hour;
use super::si::{Hertz, Kelvin, Kilogram, Meter, Pascal};
use crate::{Inverse, Multi, Offset, Quantity, Scaled};

/// Gram (`10⁻³ kg`).
pub type Gram = Scaled<Kilogram, 1, 1000>;
/// Standard atmosphere (exactly `101 325 Pa`).
pub type Atmosphere = Scaled<Pascal, 101_325>;
/// Torr (`1/760 atm`).
pub type Torr = Scaled<Atmosphere, 1, 760>;
/// Millimetre of mercury, taken equal to the [`Torr`].
pub type MmHg = Torr;
/// Metres per second.
pub type MetersPerSecond = Multi<(Meter, Hertz)>;
/// Miles per hour.
pub type MilesPerHour = Multi<(Mile, Inverse<Hour>)>;
/// Rankine (`5/9 K`).
pub type Rankine = Scaled<Kelvin, 10, 18>;

/// Degree Celsius: kelvin shifted by `273.15`.
pub type Celsius = Offset<Kelvin, 27_315, 100>;
/// Degree Fahrenheit: rankine shifted by `459.67`.
pub type Fahrenheit = Offset<Rankine, 45_967, 100>;

/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;
/// A quantity measured in atmospheres.
pub type Atmospheres = Quantity<Atmosphere>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ratio, SpecifiedAs, Unit};
    use approx::assert_relative_eq;

    #[test]
    fn atmosphere_is_exact_in_integral_pascals() {
        let pa: Quantity<SpecifiedAs<Pascal, i64>> = Quantity::<SpecifiedAs<Atmosphere, i64>>::new(3).to();
        assert_eq!(pa.value(), 303_975);
    }

    #[test]
    fn torr() {
        assert_eq!(Torr::RATIO, Ratio::new(101_325, 760));
        let torr: Quantity<Torr> = Atmospheres::new(1.0).to();
        assert_relative_eq!(torr.value(), 760.0, max_relative = 1e-12);
    }

    #[test]
    fn speeds() {
        let mps: Quantity<MetersPerSecond> = Quantity::<MilesPerHour>::new(60.0).to();
        assert_relative_eq!(mps.value(), 26.8224, max_relative = 1e-12);
    }

    #[test]
    fn temperature_scales() {
        assert_eq!(Rankine::RATIO, Ratio::new(5, 9));
        let k: Quantity<Kelvin> = Fahrenheit::new(-40.0).to();
        let c: Quantity<Kelvin> = Celsius::new(-40.0).to();
        assert_relative_eq!(k.value(), c.value(), max_relative = 1e-12);
    }

    #[test]
    fn grams() {
        let kg: Quantity<Kilogram> = Grams::new(2500.0).to();
        assert_relative_eq!(kg.value(), 2.5, max_relative = 1e-12);
    }
}
