use bitflags::bitflags;

use crate::error::{ParseError, Result};

bitflags! {
    /// String pool header flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PoolFlags: u32 {
        /// Strings are sorted. Accepted but not relied upon.
        const SORTED = 0x0000_0001;
        /// Strings are UTF-8 encoded rather than UTF-16.
        const UTF8 = 0x0000_0100;
    }
}

impl PoolFlags {
    /// Interpret raw header flags, rejecting any bit this decoder does not
    /// understand.
    pub fn parse(raw: u32) -> Result<Self> {
        Self::from_bits(raw).ok_or(ParseError::UnknownFlags(raw & !Self::all().bits()))
    }

    pub fn is_utf8(self) -> bool {
        self.contains(Self::UTF8)
    }
}
