use std::mem;

use num_traits::{AsPrimitive, PrimInt};

// Bit stream
//------------------------------------------------------------------------------

/// Append-only bit sequence packed most significant bit first.
///
/// A stream is sized up front: `capacity` is the number of bits it may hold,
/// which is what the codec measures the terminator and pad codewords
/// against. Reading with [`BitStream::take_bit`] or the `Iterator` impl only
/// advances a read position, the packed bytes stay intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    bit_len: usize,
    bit_cap: usize,
    read_at: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        let bytes = Vec::with_capacity(capacity.div_ceil(8));
        Self { bytes, bit_len: 0, bit_cap: capacity, read_at: 0 }
    }

    /// Full stream over `bytes`, capacity equal to its length
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bit_len = bytes.len() * 8;
        Self { bytes: bytes.to_vec(), bit_len, bit_cap: bit_len, read_at: 0 }
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    pub fn capacity(&self) -> usize {
        self.bit_cap
    }

    /// Bits that can still be pushed
    pub fn remaining(&self) -> usize {
        self.bit_cap - self.bit_len
    }

    /// Packed bytes, the last one zero padded
    pub fn data(&self) -> &[u8] {
        &self.bytes
    }
}

// Writing
//------------------------------------------------------------------------------

impl BitStream {
    pub fn push(&mut self, bit: bool) {
        debug_assert!(self.bit_len < self.bit_cap, "Stream full at {} bits", self.bit_cap);

        let shift = 7 - self.bit_len % 8;
        if shift == 7 {
            self.bytes.push(0);
        }
        if let Some(last) = self.bytes.last_mut() {
            *last |= u8::from(bit) << shift;
        }
        self.bit_len += 1;
    }

    /// Pushes the low `count` bits of `value`, most significant first
    pub fn push_bits<T>(&mut self, value: T, count: usize)
    where
        T: PrimInt + AsPrimitive<u16>,
    {
        debug_assert!(count <= 16, "At most 16 bits per push, got {count}");
        let used = mem::size_of::<T>() * 8 - value.leading_zeros() as usize;
        debug_assert!(used <= count, "Value needs {used} bits, only {count} pushed");

        let value: u16 = value.as_();
        for i in (0..count).rev() {
            self.push((value >> i) & 1 == 1);
        }
    }

    /// Appends whole bytes to a byte aligned stream
    pub fn extend(&mut self, bytes: &[u8]) {
        debug_assert_eq!(self.bit_len % 8, 0, "Stream is not byte aligned");
        debug_assert!(
            bytes.len() * 8 <= self.remaining(),
            "{} bytes overflow the {} bits left",
            bytes.len(),
            self.remaining()
        );

        self.bytes.extend_from_slice(bytes);
        self.bit_len += bytes.len() * 8;
    }
}


// Reading
//------------------------------------------------------------------------------

impl BitStream {
    /// Next unread bit, or `None` once all pushed bits have been read
    pub fn take_bit(&mut self) -> Option<bool> {
        if self.read_at >= self.bit_len {
            return None;
        }
        let byte = self.bytes[self.read_at / 8];
        let bit = (byte >> (7 - self.read_at % 8)) & 1 == 1;
        self.read_at += 1;
        Some(bit)
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take_bit()
    }
}
