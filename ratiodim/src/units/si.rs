//! SI base and derived units.
//!
//! The six base units are the canonical (`RATIO == 1/1`) units of the six reserved dimensions. Every derived unit is a
//! [`Multi`] of them, so all of them are canonical too and pass through to bare numbers.
//!
//! ```rust
//! use ratiodim::si::{Joule, Newton, Newtons, Meters};
//! use ratiodim::Quantity;
//!
//! let work: Quantity<Joule> = (Newtons::new(10.0) * Meters::new(3.0)).to();
//! assert_eq!(work.into_number(), 30.0);
//! ```

use crate::dimension::{CURRENT, LENGTH, LUMINOUS_INTENSITY, MASS, TEMPERATURE, TIME};
use crate::{Base, Inverse, Multi, Quantity};

// ─────────────────────────────────────────────────────────────────────────────
// Base units
// ─────────────────────────────────────────────────────────────────────────────

/// Kilogram (SI base unit of mass).
pub type Kilogram = Base<{ MASS }>;
/// Metre (SI base unit of length).
pub type Meter = Base<{ LENGTH }>;
/// Second (SI base unit of time).
pub type Second = Base<{ TIME }>;
/// Kelvin (SI base unit of thermodynamic temperature).
pub type Kelvin = Base<{ TEMPERATURE }>;
/// Ampere (SI base unit of electric current).
pub type Ampere = Base<{ CURRENT }>;
/// Candela (SI base unit of luminous intensity).
pub type Candela = Base<{ LUMINOUS_INTENSITY }>;

/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// A quantity measured in kelvins.
pub type Kelvins = Quantity<Kelvin>;
/// A quantity measured in amperes.
pub type Amperes = Quantity<Ampere>;
/// A quantity measured in candelas.
pub type Candelas = Quantity<Candela>;

// ─────────────────────────────────────────────────────────────────────────────
// Derived units
// ─────────────────────────────────────────────────────────────────────────────

/// Hertz (`s⁻¹`).
pub type Hertz = Inverse<Second>;
/// Newton (`kg·m·s⁻²`).
pub type Newton = Multi<(Kilogram, Meter, Hertz, Hertz)>;
/// Pascal (`N·m⁻²`).
pub type Pascal = Multi<(Kilogram, Inverse<Meter>, Hertz, Hertz)>;
/// Joule (`N·m`).
pub type Joule = Multi<(Newton, Meter)>;
/// Watt (`J·s⁻¹`).
pub type Watt = Multi<(Joule, Hertz)>;
/// Coulomb (`s·A`).
pub type Coulomb = Multi<(Second, Ampere)>;
/// Volt (`W·A⁻¹`).
pub type Volt = Multi<(Watt, Inverse<Ampere>)>;
/// Farad (`C·V⁻¹`).
pub type Farad = Multi<(Coulomb, Inverse<Volt>)>;
/// Ohm (`V·A⁻¹`).
pub type Ohm = Multi<(Volt, Inverse<Ampere>)>;
/// Siemens (`Ω⁻¹`).
pub type Siemens = Inverse<Ohm>;
/// Weber (`V·s`).
pub type Weber = Multi<(Volt, Second)>;
/// Tesla (`Wb·m⁻²`).
pub type Tesla = Multi<(Weber, Inverse<Meter>, Inverse<Meter>)>;
/// Henry (`Wb·A⁻¹`).
pub type Henry = Multi<(Weber, Inverse<Ampere>)>;
/// Lux (`cd·m⁻²`).
pub type Lux = Multi<(Candela, Inverse<Meter>, Inverse<Meter>)>;
/// Becquerel (`s⁻¹`).
pub type Becquerel = Hertz;
/// Gray (`J·kg⁻¹`).
pub type Gray = Multi<(Joule, Inverse<Kilogram>)>;
/// Sievert (`J·kg⁻¹`).
pub type Sievert = Gray;

/// A quantity measured in hertz.
pub type Hertzes = Quantity<Hertz>;
/// A quantity measured in newtons.
pub type Newtons = Quantity<Newton>;
/// A quantity measured in pascals.
pub type Pascals = Quantity<Pascal>;
/// A quantity measured in joules.
pub type Joules = Quantity<Joule>;
/// A quantity measured in watts.
pub type Watts = Quantity<Watt>;
/// A quantity measured in volts.
pub type Volts = Quantity<Volt>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, Ratio, Unit};
    use approx::assert_relative_eq;

    #[test]
    fn derived_units_are_canonical() {
        assert_eq!(Newton::RATIO, Ratio::ONE);
        assert_eq!(Tesla::RATIO, Ratio::ONE);
        assert_eq!(Farad::RATIO, Ratio::ONE);
    }

    #[test]
    fn derived_dimensions() {
        let force = Dimension::from_prime(MASS)
            .mul(Dimension::from_prime(LENGTH))
            .div(Dimension::from_prime(TIME).powi(2));
        assert_eq!(Newton::DIMENSION, force);
        assert_eq!(Newton::DIMENSION.ratio(), Ratio::new(6, 25));
        assert_eq!(Pascal::DIMENSION, force.div(Dimension::from_prime(LENGTH).powi(2)));
        assert_eq!(Watt::DIMENSION.exponent(TIME), -3);
        assert_eq!(Ohm::DIMENSION.exponent(CURRENT), -2);
        assert!(Siemens::DIMENSION.mul(Ohm::DIMENSION).is_dimensionless());
        assert!(Gray::DIMENSION.equivalent(Sievert::DIMENSION));
    }

    #[test]
    fn power_from_voltage_and_current() {
        let p: Quantity<Watt> = (Volts::new(12.0) * Amperes::new(2.5)).to();
        assert_relative_eq!(p.value(), 30.0, max_relative = 1e-12);
    }

    #[test]
    fn pressure_from_force_and_area() {
        let area = Meters::new(2.0) * Meters::new(0.5);
        let p: Pascals = (Newtons::new(50.0) / area).to();
        assert_relative_eq!(p.value(), 50.0, max_relative = 1e-12);
    }
}
