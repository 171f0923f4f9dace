use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of data reading {what} at offset {offset:#x}: need {needed} bytes, {available} available")]
    Truncated {
        what: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("unknown string pool flags {0:#010x}")]
    UnknownFlags(u32),

    #[error("too many strings in pool ({0})")]
    TooManyStrings(u32),

    /// The declared start of the string data lies before the end of the
    /// offset table.
    #[error("inconsistent string data offset {data_offset:#x} (remainder {remainder})")]
    InconsistentDataOffset { data_offset: u32, remainder: i64 },

    #[error("string with index {index} not found (pool has {count} strings)")]
    IndexNotFound { index: u32, count: u32 },

    #[error("string offset {offset:#x} for index {index} is out of bounds (data size {data_len:#x})")]
    OffsetOutOfBounds {
        index: u32,
        offset: u32,
        data_len: usize,
    },

    #[error("invalid UTF-8 string at offset {offset:#x} (valid up to byte {valid_up_to})")]
    InvalidUtf8 { offset: usize, valid_up_to: usize },

    #[error("invalid chunk type {found:#06x}, expected {expected:#06x}")]
    InvalidChunkType { found: u16, expected: u16 },

    #[error("invalid chunk size {size} (header size {header_size})")]
    InvalidChunkSize { size: u32, header_size: u16 },

    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
