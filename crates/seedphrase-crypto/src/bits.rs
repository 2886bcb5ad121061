//! Fixed-width, most-significant-bit-first bit buffer.
//!
//! The mnemonic codec packs entropy and checksum into one bit string
//! and reads it back in 11-bit groups (and the reverse). Tracking the
//! exact bit length keeps leading zero bytes of the entropy intact in
//! both directions.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Append-only bit string, packed MSB-first into bytes.
///
/// Unused low bits of the final byte are always zero. The backing
/// storage is zeroized on drop because it holds entropy.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Creates an empty buffer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0,
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bits have been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.len / 8;
            self.bytes[last] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Appends the low `count` bits of `value`, most significant first.
    ///
    /// `count` is capped at 32.
    pub fn push_bits(&mut self, value: u32, count: usize) {
        for shift in (0..count.min(32)).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    /// Appends whole bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        if self.len % 8 == 0 {
            self.bytes.extend_from_slice(bytes);
            self.len += bytes.len() * 8;
            return;
        }
        for byte in bytes {
            self.push_bits(u32::from(*byte), 8);
        }
    }

    /// Reads `count` bits starting at bit `offset` as an unsigned value.
    ///
    /// Returns `None` if `count > 32` or the range runs past the end.
    pub fn read_bits(&self, offset: usize, count: usize) -> Option<u32> {
        let end = offset.checked_add(count)?;
        if count > 32 || end > self.len {
            return None;
        }

        let mut value = 0u32;
        for pos in offset..end {
            let bit = (self.bytes[pos / 8] >> (7 - pos % 8)) & 1;
            value = (value << 1) | u32::from(bit);
        }
        Some(value)
    }

    /// Splits the buffer into consecutive `width`-bit groups.
    ///
    /// Trailing bits that do not fill a whole group are ignored.
    pub fn groups(&self, width: usize) -> impl Iterator<Item = u32> + '_ {
        let count = if width == 0 { 0 } else { self.len / width };
        (0..count).filter_map(move |i| self.read_bits(i * width, width))
    }

    /// Packed bytes; the final byte is zero-padded on the right.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_bits_is_msb_first() {
        let mut buf = BitBuffer::default();
        buf.push_bits(0b101, 3);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.as_bytes(), &[0b1010_0000]);
    }

    #[test]
    fn push_bytes_keeps_leading_zero_bytes() {
        let mut buf = BitBuffer::with_capacity(32);
        buf.push_bytes(&[0x00, 0x00, 0x01, 0x80]);
        assert_eq!(buf.len(), 32);
        assert_eq!(buf.as_bytes(), &[0x00, 0x00, 0x01, 0x80]);
        assert_eq!(buf.read_bits(0, 16), Some(0));
        assert_eq!(buf.read_bits(23, 2), Some(0b11));
    }

    #[test]
    fn unaligned_push_bytes() {
        let mut buf = BitBuffer::default();
        buf.push_bit(true);
        buf.push_bytes(&[0xFF, 0x00]);
        assert_eq!(buf.len(), 17);
        assert_eq!(buf.as_bytes(), &[0xFF, 0x80, 0x00]);
    }

    #[test]
    fn eleven_bit_groups() {
        let mut buf = BitBuffer::default();
        for idx in [0u32, 1, 2047, 1024] {
            buf.push_bits(idx, 11);
        }
        assert_eq!(buf.len(), 44);
        let groups: Vec<u32> = buf.groups(11).collect();
        assert_eq!(groups, vec![0, 1, 2047, 1024]);
    }

    #[test]
    fn groups_ignore_partial_tail() {
        let mut buf = BitBuffer::default();
        buf.push_bits(0x7FF, 11);
        buf.push_bits(0b1, 4);
        assert_eq!(buf.groups(11).count(), 1);
        assert_eq!(buf.groups(0).count(), 0);
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let mut buf = BitBuffer::default();
        buf.push_bytes(&[0xAB]);
        assert_eq!(buf.read_bits(0, 8), Some(0xAB));
        assert_eq!(buf.read_bits(1, 8), None);
        assert_eq!(buf.read_bits(0, 33), None);
        assert_eq!(buf.read_bits(usize::MAX, 2), None);
        assert_eq!(buf.read_bits(8, 0), Some(0));
    }

    #[test]
    fn empty_buffer() {
        let buf = BitBuffer::with_capacity(0);
        assert!(buf.is_empty());
        assert!(buf.as_bytes().is_empty());
    }
}
