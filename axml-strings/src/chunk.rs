//! Common chunk header and locating the string pool chunk in a document.

use crate::error::{ParseError, Result};
use crate::pool::StringPool;
use crate::reader::ByteReader;

pub const CHUNK_STRING_POOL: u16 = 0x0001;
pub const CHUNK_RESOURCE_TABLE: u16 = 0x0002;
pub const CHUNK_XML: u16 = 0x0003;

/// The 8-byte header shared by every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub chunk_type: u16,
    /// Size of the chunk's own header, including these 8 bytes.
    pub header_size: u16,
    /// Total chunk size, including the header.
    pub size: u32,
}

impl ChunkHeader {
    pub const SIZE: usize = 8;

    pub fn parse(data: &[u8], offset: usize) -> Result<Self> {
        let mut r = ByteReader::with_base(data.get(offset..).unwrap_or_default(), offset);
        let chunk_type = r.read_u16("chunk type")?;
        let header_size = r.read_u16("chunk header size")?;
        let size = r.read_u32("chunk size")?;

        if (size as usize) < Self::SIZE || header_size as usize > size as usize {
            return Err(ParseError::InvalidChunkSize { size, header_size });
        }

        Ok(Self {
            chunk_type,
            header_size,
            size,
        })
    }

    /// The chunk's bytes after the common 8-byte header, bounded to its
    /// declared size.
    pub fn body<'a>(&self, data: &'a [u8], offset: usize) -> Result<&'a [u8]> {
        let start = offset.saturating_add(Self::SIZE);
        let available = data.len().saturating_sub(start);
        let needed = (self.size as usize).saturating_sub(Self::SIZE);
        if start > data.len() || needed > available {
            return Err(ParseError::Truncated {
                what: "chunk body",
                offset: start,
                needed,
                available,
            });
        }
        Ok(&data[start..start + needed])
    }
}

impl StringPool {
    /// Parse a complete string pool chunk, including its 8-byte header.
    pub fn parse_chunk(data: &[u8]) -> Result<Self> {
        let header = ChunkHeader::parse(data, 0)?;
        if header.chunk_type != CHUNK_STRING_POOL {
            return Err(ParseError::InvalidChunkType {
                found: header.chunk_type,
                expected: CHUNK_STRING_POOL,
            });
        }
        Self::parse(header.body(data, 0)?)
    }
}

/// Find the string pool chunk in `data` and return its offset.
///
/// `data` may be a bare string pool chunk, or a compiled XML document or
/// resource table whose first child chunk is the string pool.
pub fn find_string_pool(data: &[u8]) -> Result<usize> {
    let top = ChunkHeader::parse(data, 0)?;
    match top.chunk_type {
        CHUNK_STRING_POOL => Ok(0),
        CHUNK_XML | CHUNK_RESOURCE_TABLE => {
            let offset = top.header_size as usize;
            let child = ChunkHeader::parse(data, offset)?;
            if child.chunk_type != CHUNK_STRING_POOL {
                return Err(ParseError::InvalidChunkType {
                    found: child.chunk_type,
                    expected: CHUNK_STRING_POOL,
                });
            }
            log::debug!(
                "string pool found in chunk {:#06x} at offset {offset:#x}",
                top.chunk_type
            );
            Ok(offset)
        }
        found => Err(ParseError::InvalidChunkType {
            found,
            expected: CHUNK_STRING_POOL,
        }),
    }
}
