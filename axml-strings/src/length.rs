//! Variable-length string length prefixes.
//!
//! A length is one unit when it fits below the unit's high bit. Otherwise the
//! high bit is set on the first unit, which carries the upper bits, and a
//! second unit carries the lower bits.

use crate::error::Result;
use crate::reader::ByteReader;

/// A unit width used by a length prefix.
pub trait LengthUnit {
    /// Continuation marker in the first unit.
    const HIGH_BIT: u32;
    /// Width of one unit in bits.
    const BITS: u32;

    fn read_unit(r: &mut ByteReader<'_>) -> Result<u32>;
}

/// One-byte units, used in front of UTF-8 strings.
impl LengthUnit for u8 {
    const HIGH_BIT: u32 = 0x80;
    const BITS: u32 = 8;

    fn read_unit(r: &mut ByteReader<'_>) -> Result<u32> {
        r.read_u8("string length").map(u32::from)
    }
}

/// Two-byte units, used in front of UTF-16 strings.
impl LengthUnit for u16 {
    const HIGH_BIT: u32 = 0x8000;
    const BITS: u32 = 16;

    fn read_unit(r: &mut ByteReader<'_>) -> Result<u32> {
        r.read_u16("string length").map(u32::from)
    }
}

/// Decode a length prefix made of `U` units.
pub fn read_length<U: LengthUnit>(r: &mut ByteReader<'_>) -> Result<u32> {
    let first = U::read_unit(r)?;
    if first & U::HIGH_BIT == 0 {
        return Ok(first);
    }
    let low = U::read_unit(r)?;
    Ok(((first & !U::HIGH_BIT) << U::BITS) | low)
}
