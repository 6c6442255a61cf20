//! Information: a custom orthogonal dimension on prime 17.
//!
//! The bit and byte are nominal units minted with the [`Unit`](derive@crate::Unit) derive. They share no dimension
//! with any SI unit, so mixing them with SI quantities does not compile.
//!
//! ```rust
//! use ratiodim::information::{Bits, Byte, Kibibyte};
//! use ratiodim::Quantity;
//!
//! let bits: Bits = Quantity::<Kibibyte>::new(2).to();
//! assert_eq!(bits.value(), 16_384);
//! ```
//!
//! ```compile_fail
//! use ratiodim::information::Bytes;
//! use ratiodim::si::Meter;
//! use ratiodim::Quantity;
//!
//! let _: Quantity<Meter> = Bytes::new(1).to();
//! ```

use crate::{Dimension, Quantity, Ratio, Scaled, Unit};

/// Prime reserved for the information dimension.
pub const INFORMATION: u64 = 17;

/// Bit (canonical unit of information).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(dimension = Dimension::custom(INFORMATION), ratio = Ratio::ONE, value = u64)]
pub struct Bit;

/// Byte (`8 bit`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(dimension = Dimension::custom(INFORMATION), ratio = Ratio::integer(8), value = u64)]
pub struct Byte;

/// Kibibyte (`1024 B`).
pub type Kibibyte = Scaled<Byte, 1024>;
/// Mebibyte (`1024 KiB`).
pub type Mebibyte = Scaled<Kibibyte, 1024>;

/// A quantity measured in bits.
pub type Bits = Quantity<Bit>;
/// A quantity measured in bytes.
pub type Bytes = Quantity<Byte>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::BaseDimension;
    use crate::si::Meter;
    use crate::Specified;

    #[test]
    fn information_is_isolated_from_base_dimensions() {
        for base in BaseDimension::ALL {
            assert!(!Bit::DIMENSION.equivalent(base.dimension()));
        }
        assert!(!Bit::DIMENSION.equivalent(<Meter as Unit>::DIMENSION));
    }

    #[test]
    fn nominal_and_structural_units_interconvert() {
        type Nibble = Specified<17, 1, 4, 1, u64>;
        let nibbles: Quantity<Nibble> = Bytes::new(3).to();
        assert_eq!(nibbles.value(), 6);
        let bytes: Bytes = Quantity::<Mebibyte>::new(1).to();
        assert_eq!(bytes.value(), 1_048_576);
    }

    #[test]
    fn bytes_to_bits_is_exact() {
        let bits: Bits = Bytes::new(u32::MAX as u64).to();
        assert_eq!(bits.value(), u32::MAX as u64 * 8);
    }
}
