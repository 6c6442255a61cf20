//! Foot–pound–second units, defined from the SI.
//!
//! The pound here is the pound-force: one slug accelerated at one foot per second squared.
//!
//! ```rust
//! use ratiodim::fps::Pound;
//! use ratiodim::si::Newtons;
//! use ratiodim::Quantity;
//!
//! let lbf: Quantity<Pound> = Newtons::new(100.0).to();
//! assert!((lbf.value() - 22.4809).abs() < 1e-4);
//! ```

use super::si::{Hertz, Kilogram, Meter};
use crate::{Inverse, Multi, Quantity, Scaled};

/// International foot (exactly `0.3048 m`).
pub type Foot = Scaled<Meter, 3048, 10_000>;
/// Yard (`3 ft`).
pub type Yard = Scaled<Foot, 3>;
/// Statute mile (`5280 ft`).
pub type Mile = Scaled<Foot, 5280>;
/// Inch (`1/12 ft`).
pub type Inch = Scaled<Foot, 1, 12>;
/// Slug (`14.5939 kg`).
pub type Slug = Scaled<Kilogram, 145_939, 10_000>;
/// Pound-force (`slug·ft·s⁻²`).
pub type Pound = Multi<(Slug, Foot, Hertz, Hertz)>;
/// Kip (`1000 lbf`).
pub type Kip = Scaled<Pound, 1000>;
/// Foot-pound (`ft·lbf`).
pub type FootPound = Multi<(Foot, Pound)>;
/// Pounds per square inch (`lbf·in⁻²`).
pub type Psi = Multi<(Pound, Inverse<Inch>, Inverse<Inch>)>;

/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;
/// A quantity measured in pounds-force.
pub type Pounds = Quantity<Pound>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{Joule, Meters, Newton, Pascal};
    use crate::{Ratio, Unit};
    use approx::assert_relative_eq;

    #[test]
    fn length_ladder() {
        assert_eq!(Inch::RATIO, Ratio::new(127, 5000));
        assert_eq!(Mile::RATIO, Ratio::new(201_168, 125));
        let yd: Quantity<Yard> = Miles::new(1.0).to();
        assert_relative_eq!(yd.value(), 1760.0, max_relative = 1e-12);
    }

    #[test]
    fn pound_force_in_newtons() {
        assert!(Pound::DIMENSION.equivalent(Newton::DIMENSION));
        let n: Quantity<Newton> = Pounds::new(1.0).to();
        assert_relative_eq!(n.value(), 14.5939 * 0.3048, max_relative = 1e-12);
    }

    #[test]
    fn kip_and_foot_pound() {
        let lbf: Quantity<Pound> = Quantity::<Kip>::new(2.0).to();
        assert_relative_eq!(lbf.value(), 2000.0, max_relative = 1e-12);
        let j: Quantity<Joule> = Quantity::<FootPound>::new(1.0).to();
        assert_relative_eq!(j.value(), 14.5939 * 0.3048 * 0.3048, max_relative = 1e-12);
    }

    #[test]
    fn psi_in_pascals() {
        let pa: Quantity<Pascal> = Quantity::<Psi>::new(1.0).to();
        assert_relative_eq!(pa.value(), 14.5939 * 0.3048 / (0.0254 * 0.0254), max_relative = 1e-9);
    }

    #[test]
    fn mixed_system_sum() {
        let total = Feet::new(10.0) + Meters::new(1.0);
        assert_relative_eq!(total.value(), 10.0 + 1.0 / 0.3048, max_relative = 1e-12);
    }
}
