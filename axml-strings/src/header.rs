use crate::error::{ParseError, Result};
use crate::flags::PoolFlags;
use crate::reader::ByteReader;

/// Pools declaring this many strings or more are rejected before the offset
/// table is allocated.
pub const MAX_STRING_COUNT: u32 = 2 * 1024 * 1024;

/// Fixed string pool header fields that precede the offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolHeader {
    pub string_count: u32,
    pub flags: PoolFlags,
    pub strings_start: u32,
}

impl PoolHeader {
    /// Header size in bytes, counted from the start of the chunk:
    /// 8 (chunk header) + 5 * 4 = 28 bytes.
    pub const SIZE: u32 = 28;

    /// Parse and validate the header from a chunk body positioned just after
    /// the common chunk header.
    pub fn parse(r: &mut ByteReader<'_>) -> Result<Self> {
        let string_count = r.read_u32("string count")?;
        r.skip(4, "style count")?;
        let raw_flags = r.read_u32("flags")?;
        let strings_start = r.read_u32("strings start")?;
        r.skip(4, "styles start")?;

        let flags = PoolFlags::parse(raw_flags)?;
        if string_count >= MAX_STRING_COUNT {
            return Err(ParseError::TooManyStrings(string_count));
        }

        Ok(Self {
            string_count,
            flags,
            strings_start,
        })
    }

    /// Number of bytes between the end of the offset table and the start of
    /// the string data (style offsets and padding).
    pub fn gap_after_offsets(&self) -> Result<usize> {
        let remainder = i64::from(self.strings_start)
            - i64::from(Self::SIZE)
            - 4 * i64::from(self.string_count);
        usize::try_from(remainder).map_err(|_| ParseError::InconsistentDataOffset {
            data_offset: self.strings_start,
            remainder,
        })
    }
}
