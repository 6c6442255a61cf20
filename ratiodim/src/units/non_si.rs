//! Non-SI units accepted for use with the SI.

use super::helpers::{Cubic, Square};
use super::si::{Kilogram, Meter, Second};
use crate::{Quantity, Scaled};

/// Minute (`60 s`).
pub type Minute = Scaled<Second, 60>;
/// Hour (`60 min`).
pub type Hour = Scaled<Minute, 60>;
/// Day (`24 h`).
pub type Day = Scaled<Hour, 24>;
/// Astronomical unit (exactly `149 597 870 700 m`).
pub type AstronomicalUnit = Scaled<Meter, 149_597_870_700>;
/// Hectare (`10⁴ m²`).
pub type Hectare = Scaled<Square<Meter>, 10_000>;
/// Litre (`10⁻³ m³`).
pub type Liter = Scaled<Cubic<Meter>, 1, 1000>;
/// Alternative spelling of [`Liter`].
pub type Litre = Liter;
/// Tonne (`10³ kg`).
pub type Tonne = Scaled<Kilogram, 1000>;
/// Alternative name for [`Tonne`].
pub type MetricTon = Tonne;

/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// A quantity measured in days.
pub type Days = Quantity<Day>;
/// A quantity measured in litres.
pub type Liters = Quantity<Liter>;
