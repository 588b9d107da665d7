//! The program image: a flat, immutable byte sequence indexed by the
//! program counter. There is no header, no magic, no checksum — the first
//! byte is the first opcode.

/// A byte producer the VM pulls a program image from.
///
/// `size` is consulted once per load, then `read` is called exactly that
/// many times, in order. Sources that run dry early should return zero
/// bytes for the remainder.
pub trait RomSource {
    fn size(&mut self) -> u32;
    fn read(&mut self) -> u8;
}

pub struct Rom {
    bytes: Vec<u8>,
}

impl Rom {
    pub const fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn from_source(source: &mut impl RomSource) -> Self {
        let size = source.size();
        let mut bytes = Vec::with_capacity(size as usize);
        for _ in 0..size {
            bytes.push(source.read());
        }
        Self { bytes }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    pub fn size(&self) -> u32 {
        self.bytes.len() as u32
    }

    /// Raw byte read. Callers bounds-check against [`Rom::size`] first.
    #[inline]
    pub(crate) fn byte(&self, index: u32) -> u8 {
        self.bytes[index as usize]
    }
}

/// Byte slices are sources too, for embedders that already hold the image.
impl RomSource for &[u8] {
    fn size(&mut self) -> u32 {
        self.len() as u32
    }

    fn read(&mut self) -> u8 {
        match self.split_first() {
            Some((&byte, rest)) => {
                *self = rest;
                byte
            }
            None => 0,
        }
    }
}
