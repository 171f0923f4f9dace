#![allow(dead_code)]

/// Encodes string pool bodies and chunks for tests.
pub struct PoolBuilder {
    utf8: bool,
    flags: Option<u32>,
    gap: usize,
    entries: Vec<Vec<u8>>,
}

impl PoolBuilder {
    pub fn utf8() -> Self {
        Self::new(true)
    }

    pub fn utf16() -> Self {
        Self::new(false)
    }

    fn new(utf8: bool) -> Self {
        Self {
            utf8,
            flags: None,
            gap: 0,
            entries: Vec::new(),
        }
    }

    /// Override the raw header flags.
    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Bytes inserted between the offset table and the string data.
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    pub fn string(mut self, s: &str) -> Self {
        let entry = if self.utf8 {
            let mut v = utf8_len(s.encode_utf16().count());
            v.extend(utf8_len(s.len()));
            v.extend_from_slice(s.as_bytes());
            v.push(0);
            v
        } else {
            let units: Vec<u16> = s.encode_utf16().collect();
            let mut v = utf16_len(units.len());
            v.extend(units.iter().flat_map(|u| u.to_le_bytes()));
            v.extend_from_slice(&[0, 0]);
            v
        };
        self.entries.push(entry);
        self
    }

    /// An already-encoded entry, length prefixes included.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.entries.push(bytes.to_vec());
        self
    }

    /// The chunk body: everything after the 8-byte chunk header.
    pub fn body(&self) -> Vec<u8> {
        let count = self.entries.len() as u32;
        let flags = self.flags.unwrap_or(if self.utf8 { 0x100 } else { 0 });
        let strings_start = 28 + 4 * count + self.gap as u32;

        let mut out = header(count, flags, strings_start);
        let mut offset = 0u32;
        for entry in &self.entries {
            out.extend_from_slice(&offset.to_le_bytes());
            offset += entry.len() as u32;
        }
        out.resize(out.len() + self.gap, 0xAA);
        for entry in &self.entries {
            out.extend_from_slice(entry);
        }
        out
    }

    pub fn chunk(&self) -> Vec<u8> {
        wrap_chunk(0x0001, 28, &self.body())
    }
}

/// The five fixed header fields of a string pool body.
pub fn header(count: u32, flags: u32, strings_start: u32) -> Vec<u8> {
    [count, 0, flags, strings_start, 0]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect()
}

pub fn wrap_chunk(chunk_type: u16, header_size: u16, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&chunk_type.to_le_bytes());
    out.extend_from_slice(&header_size.to_le_bytes());
    out.extend_from_slice(&(body.len() as u32 + 8).to_le_bytes());
    out.extend_from_slice(body);
    out
}

pub fn utf8_len(n: usize) -> Vec<u8> {
    if n < 0x80 {
        vec![n as u8]
    } else {
        vec![0x80 | (n >> 8) as u8, n as u8]
    }
}

pub fn utf16_len(n: usize) -> Vec<u8> {
    let units = if n < 0x8000 {
        vec![n as u16]
    } else {
        vec![0x8000 | (n >> 16) as u16, n as u16]
    };
    units.iter().flat_map(|u| u.to_le_bytes()).collect()
}
