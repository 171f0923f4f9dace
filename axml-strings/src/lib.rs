//! Decoder for the string pool chunk of compiled Android binary XML and
//! resource table files.
//!
//! A string pool stores every string once, addressed by index. The header
//! and offset table are validated up front; individual strings are decoded
//! lazily on lookup and cached.
//!
//! ```
//! use axml_strings::StringPool;
//!
//! // UTF-8 pool holding the single string "A".
//! let mut body = Vec::new();
//! for field in [1u32, 0, 0x100, 28 + 4, 0, 0] {
//!     body.extend_from_slice(&field.to_le_bytes());
//! }
//! body.extend_from_slice(&[1, 1, b'A', 0]);
//!
//! let pool = StringPool::parse(&body).unwrap();
//! assert_eq!(pool.get(0).unwrap(), "A");
//! assert_eq!(pool.get(axml_strings::NO_ENTRY).unwrap(), "");
//! ```

pub mod chunk;
pub mod decode;
pub mod error;
pub mod flags;
pub mod header;
pub mod length;
pub mod pool;
pub mod reader;

pub use chunk::{ChunkHeader, find_string_pool};
pub use error::{ParseError, Result};
pub use flags::PoolFlags;
pub use header::MAX_STRING_COUNT;
pub use pool::{NO_ENTRY, StringPool};
