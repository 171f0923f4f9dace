use std::io::Read;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::decode::{decode_utf8, decode_utf16};
use crate::error::{ParseError, Result};
use crate::flags::PoolFlags;
use crate::header::PoolHeader;
use crate::reader::{ByteReader, u32_at};

/// Index value meaning "no string". Always resolves to `""`.
pub const NO_ENTRY: u32 = u32::MAX;

/// A parsed string pool.
///
/// Strings are decoded on first lookup and cached for the lifetime of the
/// pool. Each index has its own write-once slot, so lookups only need `&self`
/// and the pool can be shared across threads.
pub struct StringPool {
    flags: PoolFlags,
    /// Raw little-endian `u32` offsets, one per string.
    offsets: Vec<u8>,
    data: Vec<u8>,
    cache: Vec<OnceLock<Box<str>>>,
    /// Strings stored in the cache.
    decoded: AtomicUsize,
    /// Payload decodes performed, including failed ones.
    decodes: AtomicUsize,
}

impl StringPool {
    /// Parse a string pool from a chunk body: the bytes following the 8-byte
    /// common chunk header, bounded to the chunk's declared size.
    pub fn parse(body: &[u8]) -> Result<Self> {
        // Offsets in the body are reported relative to the chunk start.
        let mut r = ByteReader::with_base(body, 8);
        let header = PoolHeader::parse(&mut r)?;

        let count = header.string_count as usize;
        let offsets = r.read_bytes(4 * count, "string offsets")?.to_vec();

        let gap = header.gap_after_offsets()?;
        if gap > 0 {
            r.skip(gap, "style offsets")?;
        }
        let data = r.rest().to_vec();

        log::debug!(
            "string pool: {count} strings, {} encoding, {} data bytes",
            if header.flags.is_utf8() { "UTF-8" } else { "UTF-16" },
            data.len()
        );

        Ok(Self {
            flags: header.flags,
            offsets,
            data,
            cache: std::iter::repeat_with(OnceLock::new).take(count).collect(),
            decoded: AtomicUsize::new(0),
            decodes: AtomicUsize::new(0),
        })
    }

    /// Read exactly `len` body bytes from `reader` and parse them.
    ///
    /// Nothing past `len` is consumed from `reader`.
    pub fn read_from<R: Read>(reader: R, len: u32) -> Result<Self> {
        let mut body = Vec::new();
        reader
            .take(u64::from(len))
            .read_to_end(&mut body)
            .map_err(|e| ParseError::Io(e.to_string()))?;
        if body.len() < len as usize {
            return Err(ParseError::Truncated {
                what: "string pool chunk",
                offset: 8 + body.len(),
                needed: len as usize,
                available: body.len(),
            });
        }
        Self::parse(&body)
    }

    /// Resolve a string by index.
    pub fn get(&self, index: u32) -> Result<&str> {
        if index == NO_ENTRY {
            return Ok("");
        }
        let slot = self
            .cache
            .get(index as usize)
            .ok_or(ParseError::IndexNotFound {
                index,
                count: self.len(),
            })?;
        if let Some(s) = slot.get() {
            return Ok(&**s);
        }

        let decoded = self.decode(index)?.into_boxed_str();
        // Another thread may have won the race; its value is identical.
        let s = slot.get_or_init(|| {
            self.decoded.fetch_add(1, Ordering::Relaxed);
            decoded
        });
        Ok(&**s)
    }

    fn decode(&self, index: u32) -> Result<String> {
        let offset = u32_at(&self.offsets, index as usize).ok_or(ParseError::IndexNotFound {
            index,
            count: self.len(),
        })?;
        if offset as usize >= self.data.len() {
            return Err(ParseError::OffsetOutOfBounds {
                index,
                offset,
                data_len: self.data.len(),
            });
        }

        log::trace!("decoding string {index} at {offset:#x}");
        self.decodes.fetch_add(1, Ordering::Relaxed);
        let mut r = ByteReader::with_base(&self.data[offset as usize..], offset as usize);
        if self.is_utf8() {
            decode_utf8(&mut r)
        } else {
            decode_utf16(&mut r)
        }
    }

    /// Whether no string has been resolved yet.
    ///
    /// This is not `len() == 0`: a pool declaring strings reports `true`
    /// until the first successful lookup. The [`NO_ENTRY`] sentinel and
    /// failed lookups do not count.
    pub fn is_empty(&self) -> bool {
        self.decoded_count() == 0
    }

    /// Number of strings declared by the pool.
    pub fn len(&self) -> u32 {
        self.cache.len() as u32
    }

    pub fn is_utf8(&self) -> bool {
        self.flags.is_utf8()
    }

    pub fn flags(&self) -> PoolFlags {
        self.flags
    }

    /// Size of the string data region in bytes.
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /// Whether `index` has already been decoded and cached.
    pub fn is_cached(&self, index: u32) -> bool {
        self.cache
            .get(index as usize)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of strings decoded and stored so far.
    pub fn decoded_count(&self) -> usize {
        self.decoded.load(Ordering::Relaxed)
    }

    /// Number of string payloads decoded so far. Cache hits do not decode.
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::Relaxed)
    }

    /// Resolve every string in index order. Failures are yielded per index.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Result<&str>)> + '_ {
        (0..self.len()).map(move |i| (i, self.get(i)))
    }
}

impl std::fmt::Debug for StringPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringPool")
            .field("flags", &self.flags)
            .field("len", &self.len())
            .field("data_len", &self.data.len())
            .field("decoded", &self.decoded_count())
            .field("decodes", &self.decode_count())
            .finish()
    }
}
