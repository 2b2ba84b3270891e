//! Bit-level reader with bounded operations.

use crate::error::{WireError, WireResult};

/// Default cap applied to decoded string lengths, in bytes.
///
/// Callers with tighter protocol knowledge should pass their own cap to
/// [`WireReader::read_string`].
pub const MAX_STRING_BYTES: usize = 8 * 1024;

/// Backing storage for a reader.
///
/// The variant is fixed at construction: owned buffers are dropped with the
/// reader, borrowed buffers belong to the caller and are never freed here.
#[derive(Debug)]
enum Storage<'a> {
    Owned(Box<[u8]>),
    Borrowed(&'a [u8]),
}

impl Storage<'_> {
    fn bytes(&self) -> &[u8] {
        match self {
            Self::Owned(buf) => buf,
            Self::Borrowed(buf) => buf,
        }
    }
}

/// A forward-only bit-level decoder over a fixed-capacity byte buffer.
///
/// Bits are MSB-first within a byte; multi-byte integers are big-endian.
/// Every operation validates its full bit cost against the remaining
/// capacity *before* touching the cursor, so a failed read leaves the
/// reader re-readable from the same position. The reader never panics on
/// malformed input.
#[derive(Debug)]
pub struct WireReader<'a> {
    storage: Storage<'a>,
    /// Index of the byte holding the next bit.
    byte_pos: usize,
    /// Bit offset inside that byte, 0-7.
    bit_off: u8,
}

impl<'a> WireReader<'a> {
    /// Creates a reader borrowing `data`; capacity is the slice length.
    #[must_use]
    pub const fn from_slice(data: &'a [u8]) -> Self {
        Self {
            storage: Storage::Borrowed(data),
            byte_pos: 0,
            bit_off: 0,
        }
    }

    /// Creates a reader that owns a zeroed buffer of `bytes` bytes.
    ///
    /// Useful as local scratch in tests; network input arrives through
    /// [`from_slice`](Self::from_slice).
    #[must_use]
    pub fn with_capacity(bytes: usize) -> WireReader<'static> {
        WireReader {
            storage: Storage::Owned(vec![0u8; bytes].into_boxed_slice()),
            byte_pos: 0,
            bit_off: 0,
        }
    }

    /// Returns the total capacity in bits.
    #[must_use]
    pub fn capacity_bits(&self) -> usize {
        self.storage.bytes().len().saturating_mul(8)
    }

    /// Returns the number of bits consumed so far.
    #[must_use]
    pub const fn used_bits(&self) -> usize {
        self.byte_pos.saturating_mul(8) + self.bit_off as usize
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub fn bits_remaining(&self) -> usize {
        self.capacity_bits().saturating_sub(self.used_bits())
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    fn ensure(&self, bits: usize) -> WireResult<()> {
        let available = self.bits_remaining();
        if bits > available {
            return Err(WireError::EndOfBuffer {
                requested: bits,
                available,
            });
        }
        Ok(())
    }

    /// Reads a single bit, MSB-first.
    pub fn read_bit(&mut self) -> WireResult<bool> {
        self.ensure(1)?;
        let bit = (self.storage.bytes()[self.byte_pos] >> (7 - self.bit_off)) & 1;
        self.bit_off += 1;
        if self.bit_off == 8 {
            self.bit_off = 0;
            self.byte_pos += 1;
        }
        Ok(bit == 1)
    }

    /// Reads 8 bits as a byte.
    ///
    /// When the cursor is mid-byte, the result joins the high bits of the
    /// current byte with the leading bits of the next one, and the cursor
    /// advances exactly one byte: the sub-byte phase is preserved for any
    /// bit-level reads that follow.
    pub fn read_byte(&mut self) -> WireResult<u8> {
        self.ensure(8)?;
        let bytes = self.storage.bytes();
        let value = if self.bit_off == 0 {
            bytes[self.byte_pos]
        } else {
            // The 8-bit precheck guarantees the neighbor byte exists
            // whenever the cursor is mid-byte.
            (bytes[self.byte_pos] << self.bit_off)
                | (bytes[self.byte_pos + 1] >> (8 - self.bit_off))
        };
        self.byte_pos += 1;
        Ok(value)
    }

    /// Reads a big-endian 16-bit word.
    pub fn read_word(&mut self) -> WireResult<u16> {
        self.ensure(16)?;
        let hi = u16::from(self.read_byte()?);
        let lo = u16::from(self.read_byte()?);
        Ok((hi << 8) | lo)
    }

    /// Reads a big-endian 32-bit dword.
    pub fn read_dword(&mut self) -> WireResult<u32> {
        self.ensure(32)?;
        let mut value = 0u32;
        for _ in 0..4 {
            value = (value << 8) | u32::from(self.read_byte()?);
        }
        Ok(value)
    }

    /// Reads a 32-bit float as the exact bit pattern of a dword.
    pub fn read_float(&mut self) -> WireResult<f32> {
        Ok(f32::from_bits(self.read_dword()?))
    }

    /// Reads `count` bytes.
    ///
    /// Byte-aligned reads are a bulk copy; mid-byte reads re-assemble each
    /// byte across the boundary as [`read_byte`](Self::read_byte) does.
    /// Capacity is validated for the whole request before the output is
    /// allocated.
    pub fn read_bytes(&mut self, count: usize) -> WireResult<Vec<u8>> {
        self.ensure(count.saturating_mul(8))?;
        if self.bit_off == 0 {
            let start = self.byte_pos;
            let out = self.storage.bytes()[start..start + count].to_vec();
            self.byte_pos += count;
            Ok(out)
        } else {
            let mut out = Vec::with_capacity(count);
            for _ in 0..count {
                out.push(self.read_byte()?);
            }
            Ok(out)
        }
    }

    /// Reads `count` big-endian dwords.
    pub fn read_dwords(&mut self, count: usize) -> WireResult<Vec<u32>> {
        self.ensure(count.saturating_mul(32))?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.read_dword()?);
        }
        Ok(out)
    }

    /// Reads `count` floats.
    pub fn read_floats(&mut self, count: usize) -> WireResult<Vec<f32>> {
        self.ensure(count.saturating_mul(32))?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.read_float()?);
        }
        Ok(out)
    }

    /// Reads a dword-length-prefixed UTF-8 string.
    ///
    /// A declared length above `max_bytes` is rejected before any payload
    /// allocation, as is a length that exceeds the remaining capacity.
    pub fn read_string(&mut self, max_bytes: usize) -> WireResult<String> {
        let length = self.read_dword()? as usize;
        if length > max_bytes {
            return Err(WireError::StringTooLong {
                length,
                max: max_bytes,
            });
        }
        let bytes = self.read_bytes(length)?;
        String::from_utf8(bytes).map_err(|_| WireError::InvalidUtf8 { length })
    }
}
